use crate::Lexicon;
use crate::rules::SymptomCategory::{
    Cardiac, Dermatological, Gastrointestinal, General, Mental, Musculoskeletal, Neurological, Respiratory, Systemic,
};
use crate::rules::SymptomRule;

pub struct Arabic;

impl Lexicon for Arabic {
    fn code(&self) -> &str {
        "ar"
    }

    fn name(&self) -> &str {
        "العربية"
    }

    fn symptom_rules(&self) -> &[SymptomRule] {
        static RULES: std::sync::LazyLock<Vec<SymptomRule>> = std::sync::LazyLock::new(|| {
            vec![
                SymptomRule::new("Headache", Neurological, &["صداع", "ألم في الرأس", "صداع نصفي", "صداع شديد", "ألم الرأس"]),
                SymptomRule::new("Fever", Systemic, &["حمى", "حرارة عالية", "سخونة", "حمى", "ارتفاع درجة الحرارة", "شعور بالحرارة"]),
                SymptomRule::new("Cough", Respiratory, &["سعال", "كحة", "سعال جاف", "سعال بلغم", "سعال مستمر"]),
                SymptomRule::new("Sore throat", Respiratory, &["ألم في الحلق", "التهاب الحلق", "حلق مؤلم", "احتقان الحلق"]),
                SymptomRule::new("Fatigue", General, &["إرهاق", "تعب", "إجهاد", "ضعف", "إرهاق شديد", "خمول"]),
                SymptomRule::new("Nausea", Gastrointestinal, &["غثيان", "شعور بالغثيان", "رغبة في القيء", "غثيان مستمر"]),
                SymptomRule::new("Dizziness", Neurological, &["دوخة", "دوار", "شعور بالدوار", "دوخة", "عدم توازن"]),
                SymptomRule::new("Chills", Systemic, &["قشعريرة", "رعشة", "ارتجاف", "رعشة", "ارتعاش", "قشعريرة"]),
                SymptomRule::new("Nasal congestion", Respiratory, &["احتقان الأنف", "انسداد الأنف", "أنف مسدود", "احتقان", "انسداد"]),
                SymptomRule::new("Sneezing", Respiratory, &["عطس", "عطاس", "عطاس مستمر", "عطاس متكرر"]),
                SymptomRule::new("Runny nose", Respiratory, &["سيلان الأنف", "رشح", "سيلان", "إفرازات أنفية"]),
                SymptomRule::new("Shortness of breath", Respiratory, &["ضيق في التنفس", "صعوبة في التنفس", "ضيق نفس", "صعوبة التنفس"]),
                SymptomRule::new("Chest pain", Cardiac, &["ألم في الصدر", "ألم صدري", "ألم الصدر", "ضيق في الصدر"]),
                SymptomRule::new("Abdominal pain", Gastrointestinal, &["ألم في المعدة", "ألم بطني", "معدة مؤلمة", "ألم البطن"]),
                SymptomRule::new("Diarrhea", Gastrointestinal, &["إسهال", "براز سائل", "إسهال مستمر", "براز رخو"]),
                SymptomRule::new("Vomiting", Gastrointestinal, &["قيء", "تقيؤ", "غثيان وقيء", "تقيؤ مستمر"]),
                SymptomRule::new("Joint pain", Musculoskeletal, &["ألم المفاصل", "التهاب المفاصل", "مفاصل مؤلمة", "آلام مفصلية"]),
                SymptomRule::new("Muscle pain", Musculoskeletal, &["ألم العضلات", "آلام عضلية", "عضلات مؤلمة", "تشنج العضلات"]),
                SymptomRule::new("Back pain", Musculoskeletal, &["ألم الظهر", "آلام الظهر", "ظهر مؤلم", "ألم أسفل الظهر"]),
                SymptomRule::new("Rash", Dermatological, &["طفح جلدي", "طفح", "حساسية جلدية", "احمرار الجلد"]),
                SymptomRule::new("Itching", Dermatological, &["حكة", "هرش", "حكة جلد", "هرش جلدي"]),
                SymptomRule::new("Loss of appetite", General, &["فقدان الشهية", "لا شهية", "فقدان شهية", "عدم الرغبة في الأكل"]),
                SymptomRule::new("Insomnia", General, &["أرق", "صعوبة النوم", "الأرق", "عدم القدرة على النوم"]),
                SymptomRule::new("Anxiety", Mental, &["قلق", "توتر", "خوف", "قلق مستمر", "توتر عصبي"]),
                SymptomRule::new("Depression", Mental, &["اكتئاب", "حزن", "اكتئاب", "مزاج سيء", "شعور باليأس"]),
            ]
        });
        &RULES
    }
}
