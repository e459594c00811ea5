use crate::Lexicon;
use crate::rules::SymptomCategory::{
    Cardiac, Dermatological, Gastrointestinal, General, Mental, Musculoskeletal, Neurological,
    Respiratory, Systemic,
};
use crate::rules::SymptomRule;

/// The base lexicon. English phrasings plus the common Spanish, French,
/// Italian, Hindi (Devanagari and romanized) and Chinese equivalents, so that
/// mixed or transliterated speech still matches without a language hint.
pub struct Base;

impl Lexicon for Base {
    fn code(&self) -> &str {
        "en"
    }

    fn name(&self) -> &str {
        "English (multilingual)"
    }

    fn symptom_rules(&self) -> &[SymptomRule] {
        static RULES: std::sync::LazyLock<Vec<SymptomRule>> = std::sync::LazyLock::new(|| {
            vec![
                // Head
                SymptomRule::new("Headache", Neurological, &[
                    "headache", "head ache", "head pain", "cephalalgia", "dolor de cabeza",
                    "mal de tête", "mal di testa", "सिरदर्द", "头痛", "sar dard", "sir dard",
                    "sar dardh",
                ]),
                SymptomRule::new("Migraine", Neurological, &[
                    "migraine", "throbbing head", "pulsating head",
                ]),
                SymptomRule::new("Dizziness", Neurological, &[
                    "dizziness", "dizzy", "vertigo", "mareo", "vertige", "vertigine", "चक्कर",
                    "चक्कर आना", "chakkar", "bhram",
                ]),
                SymptomRule::new("Fainting/Unconsciousness", Neurological, &[
                    "fainting", "fainted", "unconscious", "behooshi", "behosh", "behoshi",
                    "unconsciousness", "syncope", "fainting spell", "behosh ho gaya", "behosh hua",
                ]),
                // Temperature
                SymptomRule::new("Fever", Systemic, &[
                    "fever", "high temperature", "feverish", "fiebre", "fièvre", "febbre", "बुखार",
                    "发烧", "bukhar", "bukhaar",
                ]),
                SymptomRule::new("Chills", Systemic, &[
                    "chills", "shivering", "shivers", "escalofríos", "frissons", "brividi",
                    "ठंड लगना", "thand lagana", "thand",
                ]),
                SymptomRule::new("Elevated body temperature", Systemic, &[
                    "hot", "burning", "heat", "caliente", "chaud", "caldo",
                ]),
                // Respiratory
                SymptomRule::new("Cough", Respiratory, &[
                    "cough", "coughing", "tos", "toux", "tosse", "खांसी", "咳嗽", "khansi", "khasi",
                ]),
                SymptomRule::new("Sore throat", Respiratory, &[
                    "sore throat", "throat pain", "throat hurts", "dolor de garganta",
                    "mal de gorge", "mal di gola", "गले में दर्द", "喉咙痛", "gale me dard",
                    "galon dard",
                ]),
                SymptomRule::new("Shortness of breath", Respiratory, &[
                    "shortness of breath", "breathing difficulty", "difficulty breathing",
                    "dificultad para respirar", "difficulté à respirer", "difficoltà respiratoria",
                    "सांस लेने में तकलीफ", "呼吸困难", "sans me taklif", "saans chalne me dikkat",
                ]),
                SymptomRule::new("Wheezing", Respiratory, &[
                    "wheezing", "wheeze", "sibilancia", "sifflement", "sibilo",
                ]),
                SymptomRule::new("Nasal congestion", Respiratory, &[
                    "congestion", "stuffy nose", "blocked nose", "congestión nasal", "nez bouché",
                    "naso chiuso", "नाक बंद", "鼻塞", "nak band", "naak band",
                ]),
                SymptomRule::new("Runny nose", Respiratory, &[
                    "runny nose", "nasal discharge", "nariz que moquea", "nez qui coule",
                    "naso che cola", "नाक बहना", "流鼻涕", "nak bahna", "naak bahna",
                ]),
                SymptomRule::new("Sneezing", Respiratory, &[
                    "sneezing", "sneeze", "estornudos", "éternuements", "starnuti", "छींक", "打喷嚏",
                    "chhink", "cheenk",
                ]),
                // Chest
                SymptomRule::new("Chest pain", Cardiac, &[
                    "chest pain", "chest discomfort", "dolor en el pecho", "douleur thoracique",
                    "dolore al petto", "छाती में दर्द", "胸痛", "chhati me dard", "chest me dard",
                ]),
                SymptomRule::new("Chest tightness", Cardiac, &[
                    "chest tightness", "tight chest", "opresión en el pecho",
                    "oppression thoracique", "oppressione al petto",
                ]),
                SymptomRule::new("Heart palpitations", Cardiac, &[
                    "heart palpitations", "palpitations", "palpitaciones", "palpitazioni",
                    "दिल की धड़कन", "dil ki dhadkan", "dil dhadkna",
                ]),
                // Digestive
                SymptomRule::new("Nausea", Gastrointestinal, &[
                    "nausea", "nauseous", "feeling sick", "náuseas", "nausées", "मतली", "恶心",
                    "matli", "matali",
                ]),
                SymptomRule::new("Vomiting", Gastrointestinal, &[
                    "vomiting", "vomit", "throwing up", "vómitos", "vomissements", "vomito", "उल्टी",
                    "呕吐", "ulti", "ulte",
                ]),
                SymptomRule::new("Abdominal pain", Gastrointestinal, &[
                    "stomach pain", "abdominal pain", "belly pain", "dolor de estómago",
                    "douleur abdominale", "mal di stomaco", "पेट दर्द", "胃痛", "pet dard",
                    "pet me dard", "pet dardh", "pait dard",
                ]),
                SymptomRule::new("Stomach discomfort", Gastrointestinal, &[
                    "stomach ache", "stomach discomfort", "malestar estomacal", "malaise gastrique",
                    "pet dard", "pet me dard", "pait me dard",
                ]),
                SymptomRule::new("Diarrhea", Gastrointestinal, &[
                    "diarrhea", "loose stools", "diarrea", "diarrhée", "दस्त", "腹泻",
                ]),
                SymptomRule::new("Constipation", Gastrointestinal, &[
                    "constipation", "constipación", "stipsi", "कब्ज", "便秘",
                ]),
                SymptomRule::new("Bloating", Gastrointestinal, &[
                    "bloating", "bloated", "hinchazón", "ballonnement", "gonfiore", "सूजन",
                ]),
                // Musculoskeletal
                SymptomRule::new("Joint pain", Musculoskeletal, &[
                    "joint pain", "joint ache", "dolor articular", "douleur articulaire",
                    "dolore articolare", "जोड़ों में दर्द", "关节痛", "jodo me dard", "joron me dard",
                ]),
                SymptomRule::new("Muscle pain", Musculoskeletal, &[
                    "muscle pain", "muscle ache", "dolor muscular", "douleur musculaire",
                    "dolore muscolare", "मांसपेशियों में दर्द", "肌肉疼痛", "maspeshio me dard",
                    "peshio me dard",
                ]),
                SymptomRule::new("Back pain", Musculoskeletal, &[
                    "back pain", "backache", "dolor de espalda", "mal de dos", "mal di schiena",
                    "पीठ दर्द", "背痛", "pith dard", "peth dard",
                ]),
                SymptomRule::new("Neck pain", Musculoskeletal, &[
                    "neck pain", "neck ache", "dolor de cuello", "mal au cou", "mal di collo",
                    "gardan dard", "gardan me dard",
                ]),
                SymptomRule::new("Leg pain", Musculoskeletal, &[
                    "leg pain", "pair dard", "pair me dard", "pain dard", "leg me dard", "takn dard",
                ]),
                SymptomRule::new("Body pain", Musculoskeletal, &[
                    "body pain", "body ache", "sarir dard", "sarir me dard", "badan dard",
                    "badan me dard",
                ]),
                // General
                SymptomRule::new("Fatigue", General, &[
                    "fatigue", "tired", "exhausted", "weak", "lethargy", "malaise", "weariness",
                    "थकावट", "थका हुआ", "thakavat", "thaka hua", "nakami", "fatiga", "fatigué",
                    "stanco", "थकान", "疲劳",
                ]),
                SymptomRule::new("Weakness", General, &[
                    "weakness", "kamzori", "durbalta", "weak", "debilidad", "faiblesse",
                    "debolezza", "कमजोरी", "虚弱",
                ]),
                SymptomRule::new("Loss of appetite", General, &[
                    "loss of appetite", "anorexia", "no appetite", "not hungry", "भूख न लगना",
                    "bhookh na lagana", "bhookh nahi lagti", "pérdida de apetito",
                    "perte d'appétit", "perdita di appetito",
                ]),
                SymptomRule::new("Insomnia", General, &[
                    "insomnia", "sleeplessness", "difficulty sleeping", "can't sleep",
                    "नींद न आना", "neend na aana", "so nahi pa raha", "insomnio", "insomnie",
                    "insonnia", "अनिद्रा", "失眠",
                ]),
                SymptomRule::new("Anxiety", Mental, &[
                    "anxiety", "panic", "nervousness", "worry", "stress", "चिंता", "परेशानी",
                    "chinta", "pareshani", "tension",
                ]),
                SymptomRule::new("Depression", Mental, &[
                    "depression", "sad", "hopeless", "low mood", "depressed", "उदासीनता", "उदास",
                    "udasinta", "udas",
                ]),
                SymptomRule::new("Lethargy", Systemic, &[
                    "lethargy", "lethargic", "letargo", "léthargie", "letargia",
                ]),
                // Skin
                SymptomRule::new("Rash", Dermatological, &[
                    "rash", "skin rash", "erupción", "éruption", "eruzione", "दाने", "皮疹",
                ]),
                SymptomRule::new("Itching", Dermatological, &[
                    "itchy", "itching", "prurito", "démangeaison", "खुजली", "瘙痒",
                ]),
                SymptomRule::new("Skin redness", Dermatological, &[
                    "red skin", "redness", "enrojecimiento", "rougeur", "arrossamento",
                ]),
                SymptomRule::new("Hives", Dermatological, &[
                    "hives", "urticaria", "urticaire", "orticaria",
                ]),
                // Catch-all
                SymptomRule::new("Pain", General, &[
                    "pain", "hurts", "ache", "dolor", "douleur", "dolore", "दर्द", "疼痛",
                ]),
                SymptomRule::new("Swelling", General, &[
                    "swelling", "swollen", "hinchazón", "gonflement", "gonfiore", "सूजन", "肿胀",
                ]),
            ]
        });
        &RULES
    }
}
