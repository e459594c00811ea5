use crate::Lexicon;
use crate::rules::SymptomCategory::{
    Cardiac, Dermatological, Gastrointestinal, General, Mental, Musculoskeletal, Neurological, Respiratory, Systemic,
};
use crate::rules::SymptomRule;

pub struct Chinese;

impl Lexicon for Chinese {
    fn code(&self) -> &str {
        "zh"
    }

    fn name(&self) -> &str {
        "中文"
    }

    fn symptom_rules(&self) -> &[SymptomRule] {
        static RULES: std::sync::LazyLock<Vec<SymptomRule>> = std::sync::LazyLock::new(|| {
            vec![
                SymptomRule::new("Headache", Neurological, &["头痛", "头疼", "头部疼痛", "偏头痛", "头胀痛", "头剧烈疼痛"]),
                SymptomRule::new("Fever", Systemic, &["发烧", "高烧", "发热", "体温高", "发烧发热", "体温升高"]),
                SymptomRule::new("Cough", Respiratory, &["咳嗽", "咳", "干咳", "湿咳", "持续咳嗽", "咳嗽不止"]),
                SymptomRule::new("Sore throat", Respiratory, &["喉咙痛", "嗓子痛", "咽喉疼痛", "喉咙发炎", "喉咙干燥"]),
                SymptomRule::new("Fatigue", General, &["疲劳", "累", "疲惫", "虚弱", "疲倦", "乏力", "精疲力竭"]),
                SymptomRule::new("Nausea", Gastrointestinal, &["恶心", "想吐", "恶心想吐", "胃不舒服", "反胃"]),
                SymptomRule::new("Dizziness", Neurological, &["头晕", "眩晕", "头昏", "头昏眼花", "站立不稳"]),
                SymptomRule::new("Chills", Systemic, &["发冷", "寒战", "打哆嗦", "畏寒", "寒颤", "浑身发冷"]),
                SymptomRule::new("Nasal congestion", Respiratory, &["鼻塞", "鼻子不通气", "鼻堵", "鼻塞不通", "鼻孔堵塞"]),
                SymptomRule::new("Sneezing", Respiratory, &["打喷嚏", "喷嚏", "喷嚏不止", "连续打喷嚏"]),
                SymptomRule::new("Runny nose", Respiratory, &["流鼻涕", "鼻涕", "鼻流涕", "鼻涕不止"]),
                SymptomRule::new("Shortness of breath", Respiratory, &["呼吸困难", "气短", "喘不过气", "呼吸急促", "胸闷气短"]),
                SymptomRule::new("Chest pain", Cardiac, &["胸痛", "胸口痛", "胸部疼痛", "胸闷胸痛", "心口痛"]),
                SymptomRule::new("Abdominal pain", Gastrointestinal, &["腹痛", "肚子痛", "胃痛", "腹部疼痛", "肚子不舒服"]),
                SymptomRule::new("Diarrhea", Gastrointestinal, &["腹泻", "拉肚子", "拉稀", "腹泻不止", "水样便"]),
                SymptomRule::new("Vomiting", Gastrointestinal, &["呕吐", "吐", "恶心呕吐", "呕吐不止"]),
                SymptomRule::new("Joint pain", Musculoskeletal, &["关节痛", "关节疼痛", "关节肿胀", "关节不适"]),
                SymptomRule::new("Muscle pain", Musculoskeletal, &["肌肉痛", "肌肉酸痛", "全身酸痛", "肌肉疼痛"]),
                SymptomRule::new("Back pain", Musculoskeletal, &["背痛", "腰痛", "背部疼痛", "腰酸背痛"]),
                SymptomRule::new("Rash", Dermatological, &["皮疹", "红疹", "皮肤过敏", "皮肤发红", "起疹子"]),
                SymptomRule::new("Itching", Dermatological, &["瘙痒", "皮肤痒", "发痒", "皮肤瘙痒"]),
                SymptomRule::new("Loss of appetite", General, &["食欲不振", "没胃口", "不想吃饭", "食欲下降"]),
                SymptomRule::new("Insomnia", General, &["失眠", "睡不着", "睡眠困难", "夜不能寐"]),
                SymptomRule::new("Anxiety", Mental, &["焦虑", "紧张", "担心", "不安", "焦虑不安"]),
                SymptomRule::new("Depression", Mental, &["抑郁", "沮丧", "情绪低落", "不开心", "心情抑郁"]),
            ]
        });
        &RULES
    }
}
