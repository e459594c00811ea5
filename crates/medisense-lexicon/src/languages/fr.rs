use crate::Lexicon;
use crate::rules::SymptomCategory::{
    Cardiac, Dermatological, Gastrointestinal, General, Mental, Musculoskeletal, Neurological, Respiratory, Systemic,
};
use crate::rules::SymptomRule;

pub struct French;

impl Lexicon for French {
    fn code(&self) -> &str {
        "fr"
    }

    fn name(&self) -> &str {
        "Français"
    }

    fn symptom_rules(&self) -> &[SymptomRule] {
        static RULES: std::sync::LazyLock<Vec<SymptomRule>> = std::sync::LazyLock::new(|| {
            vec![
                SymptomRule::new("Headache", Neurological, &["mal de tête", "céphalée", "douleur à la tête", "migraine", "céphalalgie", "douleur crânienne"]),
                SymptomRule::new("Fever", Systemic, &["fièvre", "température élevée", "fiévreux", "pyrexie", "fébricule", "chaleur"]),
                SymptomRule::new("Cough", Respiratory, &["toux", "tousser", "toux persistante", "toux sèche", "toux grasse", "tussis"]),
                SymptomRule::new("Sore throat", Respiratory, &["mal de gorge", "gorge irritée", "pharyngite", "douleur pharyngée", "gorge enflammée"]),
                SymptomRule::new("Fatigue", General, &["fatigue", "fatigué", "épuisé", "faible", "lassitude", "épuisement", "courbatures"]),
                SymptomRule::new("Nausea", Gastrointestinal, &["nausées", "nausée", "envie de vomir", "mal au cœur", "nauséeux"]),
                SymptomRule::new("Dizziness", Neurological, &["vertiges", "étourdi", "vertigineux", "étourdissement", "déséquilibre"]),
                SymptomRule::new("Chills", Systemic, &["frissons", "tremblements", "grelotter", "frisson", "chair de poule"]),
                SymptomRule::new("Nasal congestion", Respiratory, &["congestion nasale", "nez bouché", "obstruction nasale", "rhinite", "nez congestionné"]),
                SymptomRule::new("Sneezing", Respiratory, &["éternuements", "éternuer", "éternuement", "rhinite allergique"]),
                SymptomRule::new("Runny nose", Respiratory, &["nez qui coule", "rhume", "rhinorrhée", "écoulement nasal"]),
                SymptomRule::new("Shortness of breath", Respiratory, &["essoufflement", "difficulté à respirer", "dyspnée", "manque de souffle"]),
                SymptomRule::new("Chest pain", Cardiac, &["douleur thoracique", "mal à la poitrine", "douleur au thorax", "angine de poitrine"]),
                SymptomRule::new("Abdominal pain", Gastrointestinal, &["mal d'estomac", "douleur abdominale", "douleur gastrique", "crampes abdominales"]),
                SymptomRule::new("Diarrhea", Gastrointestinal, &["diarrhée", "selles liquides", "troubles intestinaux", "évacuations fréquentes"]),
                SymptomRule::new("Vomiting", Gastrointestinal, &["vomissements", "vomir", "émèse", "rejets", "nausées"]),
                SymptomRule::new("Joint pain", Musculoskeletal, &["douleurs articulaires", "arthralgie", "articulations douloureuses", "arthrite"]),
                SymptomRule::new("Muscle pain", Musculoskeletal, &["douleurs musculaires", "myalgie", "courbatures", "muscles endoloris"]),
                SymptomRule::new("Back pain", Musculoskeletal, &["mal de dos", "douleur lombaire", "lombalgie", "douleur vertébrale"]),
                SymptomRule::new("Rash", Dermatological, &["éruption cutanée", "rash", "urticaire", "démangeaisons", "dermatite"]),
                SymptomRule::new("Itching", Dermatological, &["démangeaisons", "prurit", "démangeaison", "peau qui gratte"]),
                SymptomRule::new("Loss of appetite", General, &["perte d'appétit", "anorexie", "pas faim", "manque d'appétit"]),
                SymptomRule::new("Insomnia", General, &["insomnie", "difficulté à dormir", "nuits blanches", "sommeil perturbé"]),
                SymptomRule::new("Anxiety", Mental, &["anxiété", "nervosité", "angoisse", "stress", "inquiétude"]),
                SymptomRule::new("Depression", Mental, &["dépression", "tristesse", "humeur basse", "déprimé", "abattement"]),
            ]
        });
        &RULES
    }
}
