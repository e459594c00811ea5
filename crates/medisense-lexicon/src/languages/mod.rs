pub mod ar;
pub mod base;
pub mod es;
pub mod fr;
pub mod hi;
pub mod zh;
