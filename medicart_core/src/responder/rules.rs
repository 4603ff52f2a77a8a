use super::{Rule, Topic};

pub const GREETING_REPLY: &str =
    "Hello! I'm Dr. Bot, your virtual health assistant. How can I help you today?";

pub const THANKS_REPLY: &str = "You're welcome! Is there anything else I can help you with?";

pub const FALLBACK_REPLY: &str = "I'm not sure I understand. Could you please provide more details about your symptoms? For medical emergencies, please call emergency services immediately.";

/// Checked top to bottom; order is significant.
pub const DEFAULT_RULES: &[Rule] = &[
    Rule {
        topic: Topic::Headache,
        keywords: &["headache", "head pain"],
        reply: "For headaches, I would recommend paracetamol or ibuprofen. Make sure to stay hydrated and rest. If your headache is severe or persistent, please consult a doctor.",
    },
    Rule {
        topic: Topic::Fever,
        keywords: &["fever"],
        reply: "For fever, paracetamol can help reduce your temperature. Stay hydrated and rest. If your fever is high (above 39°C/102°F) or lasts more than 3 days, please see a doctor.",
    },
    Rule {
        topic: Topic::Allergy,
        keywords: &["allergy", "allergic"],
        reply: "For allergies, antihistamines like cetirizine or loratadine can help. Avoid known allergens and keep your living space clean. If you experience severe symptoms like difficulty breathing, seek emergency care.",
    },
    Rule {
        topic: Topic::Heartburn,
        keywords: &["heartburn", "acid reflux"],
        reply: "For heartburn, omeprazole can help reduce stomach acid. Avoid spicy foods, large meals, and eating before bedtime. If symptoms persist, please consult a doctor.",
    },
    Rule {
        topic: Topic::SoreThroat,
        keywords: &["sore throat"],
        reply: "For a sore throat, warm salt water gargles can help. Paracetamol can relieve the pain. If it's severe or lasts more than a week, you might need antibiotics - please consult a doctor.",
    },
    Rule {
        topic: Topic::Diarrhea,
        keywords: &["diarrhea"],
        reply: "For diarrhea, loperamide can provide relief. Stay hydrated and consider electrolyte solutions. If it lasts more than 2 days or is accompanied by fever or severe pain, please see a doctor.",
    },
    Rule {
        topic: Topic::Cold,
        keywords: &["cold", "cough"],
        reply: "For cold symptoms, rest and hydration are key. Paracetamol can help with discomfort, and antihistamines may help with a runny nose. If symptoms worsen or last more than a week, please consult a doctor.",
    },
];
