use crate::Lexicon;
use crate::rules::SymptomCategory::{
    Cardiac, Dermatological, Gastrointestinal, General, Mental, Musculoskeletal, Neurological, Respiratory, Systemic,
};
use crate::rules::SymptomRule;

pub struct Spanish;

impl Lexicon for Spanish {
    fn code(&self) -> &str {
        "es"
    }

    fn name(&self) -> &str {
        "Español"
    }

    fn symptom_rules(&self) -> &[SymptomRule] {
        static RULES: std::sync::LazyLock<Vec<SymptomRule>> = std::sync::LazyLock::new(|| {
            vec![
                SymptomRule::new("Headache", Neurological, &["dolor de cabeza", "jaqueca", "cefalea", "migraña", "dolor de cabeza intenso", "palpitaciones en la cabeza"]),
                SymptomRule::new("Fever", Systemic, &["fiebre", "temperatura alta", "calentura", "fiebrícula", "temperatura", "escalofríos con fiebre"]),
                SymptomRule::new("Cough", Respiratory, &["tos", "toser", "tos persistente", "tos seca", "tos con flema", "tosis"]),
                SymptomRule::new("Sore throat", Respiratory, &["dolor de garganta", "garganta inflamada", "dolor faríngeo", "irritación de garganta", "ronquera"]),
                SymptomRule::new("Fatigue", General, &["fatiga", "cansancio", "agotado", "debil", "cansado", "letargo", "agotamiento"]),
                SymptomRule::new("Nausea", Gastrointestinal, &["náuseas", "náusea", "mareos", "vómitos", "malestar estomacal", "ganas de vomitar"]),
                SymptomRule::new("Dizziness", Neurological, &["mareo", "vértigo", "mareado", "desmayo", "atontado", "inestable"]),
                SymptomRule::new("Chills", Systemic, &["escalofríos", "temblores", "tiritar", "escalofrío", "temblor", "piel de gallina"]),
                SymptomRule::new("Nasal congestion", Respiratory, &["congestión nasal", "nariz tapada", "nariz congestionada", "obstrucción nasal", "rinitis"]),
                SymptomRule::new("Sneezing", Respiratory, &["estornudos", "estornudar", "estornudo", "rinorrea", "mocos"]),
                SymptomRule::new("Runny nose", Respiratory, &["moco", "nariz que corre", "secreción nasal", "rinorrea"]),
                SymptomRule::new("Shortness of breath", Respiratory, &["dificultad para respirar", "falta de aire", "disnea", "ahogo", "respiración difícil"]),
                SymptomRule::new("Chest pain", Cardiac, &["dolor en el pecho", "dolor pectoral", "opresión en el pecho", "dolor torácico"]),
                SymptomRule::new("Abdominal pain", Gastrointestinal, &["dolor de estómago", "dolor abdominal", "dolor de barriga", "cólicos", "gastralgia"]),
                SymptomRule::new("Diarrhea", Gastrointestinal, &["diarrea", "heces líquidas", "evacuaciones frecuentes", "sueltas"]),
                SymptomRule::new("Vomiting", Gastrointestinal, &["vómitos", "vomitar", "emesis", "devolver", "arcadas"]),
                SymptomRule::new("Joint pain", Musculoskeletal, &["dolor de articulaciones", "dolor articular", "artralgia", "articulaciones inflamadas"]),
                SymptomRule::new("Muscle pain", Musculoskeletal, &["dolor muscular", "dolor en los músculos", "mialgia", "calambres"]),
                SymptomRule::new("Back pain", Musculoskeletal, &["dolor de espalda", "dolor lumbar", "lumbalgia", "espalda"]),
                SymptomRule::new("Rash", Dermatological, &["erupción cutánea", "sarpullido", "rash", "urticaria", "habón"]),
                SymptomRule::new("Itching", Dermatological, &["picazón", "comezón", "prurito", "irritación en la piel"]),
                SymptomRule::new("Loss of appetite", General, &["pérdida de apetito", "anorexia", "sin hambre", "no tengo ganas de comer"]),
                SymptomRule::new("Insomnia", General, &["insomnio", "dificultad para dormir", "no puedo dormir", "desvelo"]),
                SymptomRule::new("Anxiety", Mental, &["ansiedad", "nerviosismo", "pánico", "estrés", "preocupación"]),
                SymptomRule::new("Depression", Mental, &["depresión", "tristeza", "deprimido", "bajo estado de ánimo"]),
            ]
        });
        &RULES
    }
}
