use crate::Lexicon;
use crate::rules::SymptomCategory::{
    Cardiac, Dermatological, Gastrointestinal, General, Mental, Musculoskeletal, Neurological, Respiratory, Systemic,
};
use crate::rules::SymptomRule;

pub struct Hindi;

impl Lexicon for Hindi {
    fn code(&self) -> &str {
        "hi"
    }

    fn name(&self) -> &str {
        "हिन्दी"
    }

    fn symptom_rules(&self) -> &[SymptomRule] {
        static RULES: std::sync::LazyLock<Vec<SymptomRule>> = std::sync::LazyLock::new(|| {
            vec![
                SymptomRule::new("Headache", Neurological, &["सिर दर्द", "सिरदर्द", "शीर शोख", "सर दर्द", "सरदर्द", "सर में दर्द", "सिर में दर्द", "आधा सिर दर्द"]),
                SymptomRule::new("Fever", Systemic, &["बुखार", "ज्वर", "तापमान ऊँचा", "बुखार है", "ज्वर है", "शरीर में ताप", "गर्मी लगना"]),
                SymptomRule::new("Cough", Respiratory, &["खांसी", "खाँसना", "खांस रहा हूँ", "खांस रही हूँ", "खांस आ रही है", "कफ", "खांसी का दौरा"]),
                SymptomRule::new("Sore throat", Respiratory, &["गले में दर्द", "गला खराब", "गले में खराश", "गला सूखा", "गला लाल", "गले में जलन"]),
                SymptomRule::new("Fatigue", General, &["थकान", "थका हुआ", "कमज़ोरी", "थक गया हूँ", "थक गई हूँ", "बहुत थकान", "शरीर थका हुआ"]),
                SymptomRule::new("Nausea", Gastrointestinal, &["उल्टी का मन", "जी मिचलाना", "मिचली रही है", "उल्टी आ रही है", "उल्टी होना"]),
                SymptomRule::new("Dizziness", Neurological, &["चक्कर आना", "घूमना", "बेहोशी", "बेहोश", "सिर चक्कर आ रहा है", "बेहोश होना"]),
                SymptomRule::new("Chills", Systemic, &["ठंड लगना", "कांपना", "कपकपी", "ठंड लग रही है", "शरीर कांप रहा है", "ठंड ठंड लग रही है"]),
                SymptomRule::new("Nasal congestion", Respiratory, &["नाक बंद होना", "नाक भरी होना", "नाक बंद है", "नाक नहीं चल रही", "नाक जाम"]),
                SymptomRule::new("Sneezing", Respiratory, &["छींक", "छींकना", "छींक आ रही है", "छींक रहा हूँ", "छींक आ रहा है"]),
                SymptomRule::new("Runny nose", Respiratory, &["नाक बहना", "नाक से पानी गिरना", "नाक बह रही है", "नाक से पानी आना"]),
                SymptomRule::new("Shortness of breath", Respiratory, &["सांस फूलना", "सांस लेने में तकलीफ", "सांस नहीं लग रही", "सांस घुट रही है", "सांस लेना मुश्किल"]),
                SymptomRule::new("Chest pain", Cardiac, &["सीने में दर्द", "छाती में दर्द", "छाती दर्द", "सीना दर्द", "छाती में जलन"]),
                SymptomRule::new("Abdominal pain", Gastrointestinal, &["पेट दर्द", "पेट में दर्द", "पेट दर्द है", "पेट में जलन", "पेट खराब", "pet dard", "पेट मुड़ रहा है"]),
                SymptomRule::new("Diarrhea", Gastrointestinal, &["दस्त", "पतली दस्त", "दस्त लग रहा है", "पेट से दस्त", "पतले दस्त"]),
                SymptomRule::new("Vomiting", Gastrointestinal, &["उल्टी", "उल्टी करना", "उल्टी हो रही है", "उल्टी कर दी", "उल्टी आई"]),
                SymptomRule::new("Joint pain", Musculoskeletal, &["जोड़ों में दर्द", "गठिया दर्द", "जोड़ों का दर्द", "गठिया में दर्द"]),
                SymptomRule::new("Muscle pain", Musculoskeletal, &["मांसपेशियों में दर्द", "शरीर दर्द", "मांसपेशी दर्द", "शरीर दुख रहा है"]),
                SymptomRule::new("Back pain", Musculoskeletal, &["पीठ दर्द", "कमर दर्द", "पीठ में दर्द", "कमर में दर्द"]),
                SymptomRule::new("Rash", Dermatological, &["चकती", "खुजली", "रैशेस", "खुजली होना", "चर्म रोग"]),
                SymptomRule::new("Itching", Dermatological, &["खुजली", "खुजलना", "चमड़ी", "त्वचा में खुजली"]),
                SymptomRule::new("Loss of appetite", General, &["भूख न लगना", "भूख नहीं लग रहा", "भूख कम होना", "भूख खत्म"]),
                SymptomRule::new("Insomnia", General, &["नींद न आना", "बेसुबी", "नींद नहीं आ रही", "रात भर जागना"]),
                SymptomRule::new("Anxiety", Mental, &["चिंता", "घबराहट", "तनाव", "परेशान", "डर"]),
                SymptomRule::new("Depression", Mental, &["उदासीनता", "उदास", "मन नहीं लगना", "दुखी", "उदासीन"]),
            ]
        });
        &RULES
    }
}
