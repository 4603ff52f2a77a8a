//! The pharmacy's shipped medicine and symptom tables.

use super::types::{Medicine, Price, Symptom};

fn medicine(
    id: &str,
    name: &str,
    description: &str,
    cents: u64,
    dosage: &str,
    category: &str,
) -> Medicine {
    Medicine {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price: Price::from_cents(cents),
        image: "/placeholder.svg".to_string(),
        dosage: dosage.to_string(),
        category: category.to_string(),
    }
}

fn symptom(id: &str, name: &str, description: &str, related: &[&str]) -> Symptom {
    Symptom {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        related_medicines: related.iter().map(ToString::to_string).collect(),
    }
}

pub(super) fn medicines() -> Vec<Medicine> {
    vec![
        medicine(
            "m1",
            "Paracetamol",
            "Relief from fever and mild to moderate pain.",
            599,
            "500mg",
            "pain-relief",
        ),
        medicine(
            "m2",
            "Ibuprofen",
            "Non-steroidal anti-inflammatory drug used to treat pain and inflammation.",
            799,
            "200mg",
            "pain-relief",
        ),
        medicine(
            "m3",
            "Cetirizine",
            "Antihistamine used to relieve allergy symptoms.",
            850,
            "10mg",
            "allergy",
        ),
        medicine(
            "m4",
            "Omeprazole",
            "Reduces stomach acid production to treat indigestion and heartburn.",
            1299,
            "20mg",
            "digestive-health",
        ),
        medicine(
            "m5",
            "Azithromycin",
            "Antibiotic used to treat a variety of bacterial infections.",
            1599,
            "250mg",
            "antibiotics",
        ),
        medicine(
            "m6",
            "Loratadine",
            "Non-drowsy antihistamine for allergy relief.",
            999,
            "10mg",
            "allergy",
        ),
        medicine(
            "m7",
            "Amoxicillin",
            "Antibiotic used to treat bacterial infections.",
            1399,
            "500mg",
            "antibiotics",
        ),
        medicine(
            "m8",
            "Loperamide",
            "Anti-diarrheal medication.",
            699,
            "2mg",
            "digestive-health",
        ),
    ]
}

pub(super) fn symptoms() -> Vec<Symptom> {
    vec![
        symptom(
            "s1",
            "Headache",
            "Pain in any region of the head.",
            &["m1", "m2"],
        ),
        symptom(
            "s2",
            "Fever",
            "A temporary increase in body temperature, often due to illness.",
            &["m1", "m2"],
        ),
        symptom(
            "s3",
            "Allergic Rhinitis",
            "Inflammation of the inside of the nose caused by an allergen.",
            &["m3", "m6"],
        ),
        symptom(
            "s4",
            "Heartburn",
            "A burning pain in the chest, just behind the breastbone.",
            &["m4"],
        ),
        symptom(
            "s5",
            "Sore Throat",
            "Pain, scratchiness or irritation of the throat.",
            &["m5", "m7"],
        ),
        symptom("s6", "Diarrhea", "Loose, watery bowel movements.", &["m8"]),
        symptom(
            "s7",
            "Muscle Pain",
            "Pain affecting the muscles of the body.",
            &["m1", "m2"],
        ),
        symptom(
            "s8",
            "Common Cold",
            "A mild viral infection of the nose and throat.",
            &["m1", "m3", "m6"],
        ),
    ]
}
