//! Catalog invariants checked over the shipped tables and over catalogs
//! loaded from disk.

use std::collections::HashSet;
use std::io::Write;

use medicart_core::catalog::CatalogFile;
use medicart_core::{Catalog, CatalogError};
use pretty_assertions::assert_eq;

/// Every subset of the shipped symptom ids, in table order.
fn symptom_subsets(catalog: &Catalog) -> Vec<Vec<&str>> {
    let ids: Vec<&str> = catalog.symptoms().iter().map(|s| s.id.as_str()).collect();
    (0..1_u32 << ids.len())
        .map(|mask| {
            ids.iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, id)| *id)
                .collect()
        })
        .collect()
}

#[test]
fn test_single_symptom_follows_related_order() {
    let catalog = Catalog::builtin();
    for symptom in catalog.symptoms() {
        let resolved: Vec<&str> = catalog
            .medicines_for_symptom(&symptom.id)
            .iter()
            .map(|m| m.id.as_str())
            .collect();
        let listed: Vec<&str> = symptom
            .related_medicines
            .iter()
            .map(String::as_str)
            .filter(|id| catalog.medicine_by_id(id).is_some())
            .collect();
        assert_eq!(resolved, listed, "symptom {}", symptom.id);
    }
}

#[test]
fn test_union_has_no_duplicates_and_first_seen_positions() {
    let catalog = Catalog::builtin();

    for subset in symptom_subsets(&catalog) {
        let union = catalog.medicines_for_symptoms(&subset);

        let mut seen = HashSet::new();
        assert!(
            union.iter().all(|m| seen.insert(m.id.as_str())),
            "duplicate in {subset:?}"
        );

        // Recompute the expected order by naive concatenation.
        let mut expected: Vec<&str> = Vec::new();
        for id in &subset {
            for medicine in catalog.medicines_for_symptom(id) {
                if !expected.contains(&medicine.id.as_str()) {
                    expected.push(medicine.id.as_str());
                }
            }
        }
        let actual: Vec<&str> = union.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(actual, expected, "subset {subset:?}");
    }
}

#[test]
fn test_categories_independent_of_table_order() {
    let catalog = Catalog::builtin();
    let mut reversed = catalog.medicines().to_vec();
    reversed.reverse();
    let reordered = Catalog::new(reversed, catalog.symptoms().to_vec())
        .unwrap_or_else(|e| panic!("reordered catalog should build: {e}"));

    assert_eq!(catalog.categories(), reordered.categories());
    assert_eq!(catalog.categories().len(), 4);
}

#[test]
fn test_load_catalog_from_file() {
    let catalog = Catalog::builtin();
    let document = CatalogFile {
        medicines: catalog.medicines().to_vec(),
        symptoms: catalog.symptoms().to_vec(),
    };

    let mut file = tempfile::NamedTempFile::new().expect("temp file should be created");
    serde_json::to_writer(&mut file, &document).expect("catalog should serialize");
    file.flush().expect("temp file should flush");

    let loaded = Catalog::from_json_file(file.path()).expect("catalog should load");
    assert_eq!(loaded.medicines(), catalog.medicines());
    assert_eq!(loaded.symptoms(), catalog.symptoms());
}

#[test]
fn test_load_catalog_tolerates_dangling_reference() {
    let json = r#"{
        "medicines": [
            { "id": "a", "name": "A", "description": "", "price": 1.5,
              "dosage": "5mg", "category": "misc" }
        ],
        "symptoms": [
            { "id": "s", "name": "S", "description": "",
              "relatedMedicines": ["missing", "a"] }
        ]
    }"#;

    let mut file = tempfile::NamedTempFile::new().expect("temp file should be created");
    file.write_all(json.as_bytes()).expect("temp file should be written");

    let loaded = Catalog::from_json_file(file.path()).expect("catalog should load");
    let ids: Vec<&str> = loaded
        .medicines_for_symptom("s")
        .iter()
        .map(|m| m.id.as_str())
        .collect();
    assert_eq!(ids, vec!["a"]);
    assert_eq!(loaded.dangling_references(), vec![("s", "missing")]);
    assert_eq!(
        loaded.medicine_by_id("a").map(|m| m.image.as_str()),
        Some("/placeholder.svg")
    );
}

#[test]
fn test_load_catalog_errors() {
    let missing = Catalog::from_json_file(std::path::Path::new("/nonexistent/catalog.json"));
    assert!(matches!(missing, Err(CatalogError::Io { .. })));

    let Ok(mut file) = tempfile::NamedTempFile::new() else {
        panic!("temp file should be created");
    };
    let _ = file.write_all(b"{ not json");
    assert!(matches!(
        Catalog::from_json_file(file.path()),
        Err(CatalogError::Parse(_))
    ));
}
