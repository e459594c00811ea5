//! Advice templates keyed by condition name and by symptom label.
//!
//! Each template carries a stable tag. The composer deduplicates on the tag,
//! so two groups that share a template contribute it only once.

/// One advisory sentence and the tag it is deduplicated by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    pub tag: &'static str,
    pub text: &'static str,
}

/// A group of templates applied when any keyword is a substring of the
/// subject (the top condition's name, or a matched symptom label).
#[derive(Debug, Clone, Copy)]
pub struct AdviceGroup {
    pub keywords: &'static [&'static str],
    pub templates: &'static [Template],
}

impl AdviceGroup {
    /// Case-sensitive substring test, the same on condition names and labels.
    pub fn applies_to(&self, subject: &str) -> bool {
        self.keywords.iter().any(|k| subject.contains(k))
    }
}

const REST: Template = Template {
    tag: "rest",
    text: "Get plenty of rest to help your body fight the infection",
};
const FLUIDS: Template = Template {
    tag: "fluids",
    text: "Drink plenty of fluids (water, herbal tea, warm soup) to stay hydrated and thin mucus",
};
const STEAM: Template = Template {
    tag: "steam",
    text: "Use a humidifier or take steam inhalation to relieve nasal congestion",
};
const BLAND: Template = Template {
    tag: "bland",
    text: "Follow a BRAT diet (bananas, rice, applesauce, toast) and avoid dairy, spicy, or fatty foods",
};
const REHYDRATION: Template = Template {
    tag: "rehydration",
    text: "Drink oral rehydration solutions or electrolyte drinks to prevent dehydration",
};
const REST_DIGESTIVE: Template = Template {
    tag: "rest-digestive",
    text: "Rest your digestive system by eating small, frequent meals",
};
const DARK_ROOM: Template = Template {
    tag: "dark-room",
    text: "Rest in a dark, quiet room and apply a cold or warm compress to your forehead",
};
const HYDRATION_HEADACHE: Template = Template {
    tag: "hydration-headache",
    text: "Ensure adequate hydration as dehydration can worsen headaches",
};
const STRESS_MANAGEMENT: Template = Template {
    tag: "stress-management",
    text: "Practice stress management techniques like deep breathing or meditation",
};
const INHALER: Template = Template {
    tag: "inhaler",
    text: "If you have a prescribed inhaler, use it as directed. Avoid triggers like smoke, dust, and allergens",
};
const BREATHING: Template = Template {
    tag: "breathing",
    text: "Practice pursed-lip breathing to help manage shortness of breath",
};

/// Applied in order against the name of the highest-scoring condition.
pub const CONDITION_ADVICE: &[AdviceGroup] = &[
    AdviceGroup {
        keywords: &["Cold", "Flu", "Respiratory"],
        templates: &[REST, FLUIDS, STEAM],
    },
    AdviceGroup {
        keywords: &["Gastroenteritis", "Food Poisoning"],
        templates: &[BLAND, REHYDRATION, REST_DIGESTIVE],
    },
    AdviceGroup {
        keywords: &["Headache", "Migraine"],
        templates: &[DARK_ROOM, HYDRATION_HEADACHE, STRESS_MANAGEMENT],
    },
    AdviceGroup {
        keywords: &["Asthma", "Bronchitis"],
        templates: &[INHALER, BREATHING],
    },
];

pub const CHEST_URGENT: Template = Template {
    tag: "chest-urgent",
    text: "⚠️ Chest pain requires immediate medical evaluation. If severe or accompanied by difficulty breathing, seek emergency care",
};

/// Applied in order; a group fires when any matched label contains a keyword.
pub const SYMPTOM_ADVICE: &[AdviceGroup] = &[
    AdviceGroup {
        keywords: &["Fever", "temperature"],
        templates: &[
            Template {
                tag: "fever-monitor",
                text: "Monitor your temperature every 4-6 hours. If it exceeds 103°F (39.4°C) or persists for more than 3 days, seek medical attention",
            },
            Template {
                tag: "fever-medication",
                text: "Consider taking acetaminophen or ibuprofen to reduce fever (follow dosage instructions)",
            },
        ],
    },
    AdviceGroup {
        keywords: &["Cough"],
        templates: &[Template {
            tag: "cough-remedy",
            text: "Use cough drops or honey with warm water/tea to soothe throat irritation. Avoid lying flat if cough worsens at night",
        }],
    },
    AdviceGroup {
        keywords: &["Nausea", "Vomiting"],
        templates: &[Template {
            tag: "nausea-ginger",
            text: "Try ginger tea or ginger candies to help reduce nausea. Eat small, bland meals",
        }],
    },
    AdviceGroup {
        keywords: &["Diarrhea"],
        templates: &[Template {
            tag: "diarrhea-hydration",
            text: "Drink plenty of clear fluids and electrolyte solutions. Avoid caffeine and alcohol",
        }],
    },
    AdviceGroup {
        keywords: &["Chest pain", "Chest tightness"],
        templates: &[CHEST_URGENT],
    },
    AdviceGroup {
        keywords: &["Shortness of breath"],
        templates: &[Template {
            tag: "breath-urgent",
            text: "⚠️ Difficulty breathing is a serious symptom. If severe or sudden, seek immediate medical attention",
        }],
    },
    AdviceGroup {
        keywords: &["Rash", "Itching"],
        templates: &[Template {
            tag: "rash-care",
            text: "Keep the affected area clean and dry. Apply cool compresses and avoid scratching. Consider over-the-counter antihistamines for itching",
        }],
    },
];

pub const SYMPTOM_DIARY: Template = Template {
    tag: "monitor",
    text: "Keep a symptom diary noting when symptoms occur, their severity, and any triggers",
};

pub const SEEK_CARE: Template = Template {
    tag: "medical-attention",
    text: "If symptoms persist for more than 5-7 days, worsen, or new symptoms appear, consult a healthcare professional",
};

pub const SEEK_CARE_URGENT: Template = Template {
    tag: "medical-attention",
    text: "⚠️ Given the combination of symptoms, consider consulting a healthcare professional within 24-48 hours",
};

/// Condition-name keywords that escalate the seek-care advice.
pub const HIGH_SEVERITY_KEYWORDS: &[&str] = &["Pneumonia", "Asthma"];

/// More matched symptoms than this escalates the seek-care advice.
pub const URGENT_SYMPTOM_COUNT: usize = 3;

pub const MAX_RECOMMENDATIONS: usize = 8;

/// Returned verbatim when nothing was matched.
pub const NO_SYMPTOM_ADVICE: [&str; 3] = [
    "Please describe your symptoms more specifically",
    "Try using common symptom words in your language",
    "If symptoms persist, consult a healthcare professional",
];
