//! Medicine and symptom reference tables with their lookups.
//!
//! Every lookup is a pure read. Unknown ids yield `None` or an empty list,
//! never an error; only loading a catalog from disk can fail.

mod builtin;
mod types;

pub use types::{Medicine, Price, Symptom, category_label};

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors raised while building a catalog from external data.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate medicine id: {0}")]
    DuplicateMedicine(String),

    #[error("duplicate symptom id: {0}")]
    DuplicateSymptom(String),

    #[error("medicine {0} must have a positive price")]
    NonPositivePrice(String),
}

/// On-disk shape of a catalog document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    pub medicines: Vec<Medicine>,
    pub symptoms: Vec<Symptom>,
}

/// Read-only medicine and symptom tables.
#[derive(Debug, Clone)]
pub struct Catalog {
    medicines: Vec<Medicine>,
    symptoms: Vec<Symptom>,
    medicine_index: HashMap<String, usize>,
    symptom_index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and non-positive prices.
    ///
    /// Symptoms referencing unknown medicines are accepted; the dangling ids
    /// are logged and skipped by every lookup.
    pub fn new(medicines: Vec<Medicine>, symptoms: Vec<Symptom>) -> Result<Self, CatalogError> {
        validate(&medicines, &symptoms)?;

        let catalog = Self::assemble(medicines, symptoms);
        for (symptom_id, medicine_id) in catalog.dangling_references() {
            warn!("Symptom {symptom_id} references unknown medicine {medicine_id}");
        }

        Ok(catalog)
    }

    /// The tables the pharmacy ships with.
    #[must_use]
    pub fn builtin() -> Self {
        Self::assemble(builtin::medicines(), builtin::symptoms())
    }

    /// Load a catalog from a `{ "medicines": [...], "symptoms": [...] }` file.
    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file: CatalogFile = serde_json::from_str(&content)?;
        let catalog = Self::new(file.medicines, file.symptoms)?;

        info!(
            "Loaded catalog from {}: {} medicines, {} symptoms",
            path.display(),
            catalog.medicines.len(),
            catalog.symptoms.len()
        );
        Ok(catalog)
    }

    fn assemble(medicines: Vec<Medicine>, symptoms: Vec<Symptom>) -> Self {
        let mut medicine_index = HashMap::with_capacity(medicines.len());
        for (idx, medicine) in medicines.iter().enumerate() {
            medicine_index.entry(medicine.id.clone()).or_insert(idx);
        }

        let mut symptom_index = HashMap::with_capacity(symptoms.len());
        for (idx, symptom) in symptoms.iter().enumerate() {
            symptom_index.entry(symptom.id.clone()).or_insert(idx);
        }

        Self {
            medicines,
            symptoms,
            medicine_index,
            symptom_index,
        }
    }

    /// All medicines in table order.
    #[must_use]
    pub fn medicines(&self) -> &[Medicine] {
        &self.medicines
    }

    /// All symptoms in table order.
    #[must_use]
    pub fn symptoms(&self) -> &[Symptom] {
        &self.symptoms
    }

    #[must_use]
    pub fn medicine_by_id(&self, id: &str) -> Option<&Medicine> {
        self.medicine_index.get(id).map(|&idx| &self.medicines[idx])
    }

    #[must_use]
    pub fn symptom_by_id(&self, id: &str) -> Option<&Symptom> {
        self.symptom_index.get(id).map(|&idx| &self.symptoms[idx])
    }

    /// Medicines recommended for one symptom, in the symptom's listed order.
    ///
    /// Ids that do not resolve are skipped; an unknown symptom yields nothing.
    #[must_use]
    pub fn medicines_for_symptom(&self, symptom_id: &str) -> Vec<&Medicine> {
        self.symptom_by_id(symptom_id).map_or_else(Vec::new, |symptom| {
            symptom
                .related_medicines
                .iter()
                .filter_map(|id| self.medicine_by_id(id))
                .collect()
        })
    }

    /// Union of recommendations for several symptoms.
    ///
    /// Symptoms are processed in input order; each medicine appears once, at
    /// the position where it was first recommended.
    #[must_use]
    pub fn medicines_for_symptoms<I, S>(&self, symptom_ids: I) -> Vec<&Medicine>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut recommended = Vec::new();

        for symptom_id in symptom_ids {
            for medicine in self.medicines_for_symptom(symptom_id.as_ref()) {
                if seen.insert(medicine.id.as_str()) {
                    recommended.push(medicine);
                }
            }
        }

        debug!("Recommended {} medicines", recommended.len());
        recommended
    }

    /// Distinct category values across all medicines.
    #[must_use]
    pub fn categories(&self) -> HashSet<&str> {
        self.medicines.iter().map(|m| m.category.as_str()).collect()
    }

    /// Medicines in `category`, in table order.
    #[must_use]
    pub fn medicines_in_category(&self, category: &str) -> Vec<&Medicine> {
        self.medicines
            .iter()
            .filter(|m| m.category == category)
            .collect()
    }

    /// Medicines whose name or description contains `term`, ignoring case.
    ///
    /// A blank term returns the whole table.
    #[must_use]
    pub fn search(&self, term: &str) -> Vec<&Medicine> {
        let term = term.trim();
        if term.is_empty() {
            return self.medicines.iter().collect();
        }
        self.medicines.iter().filter(|m| m.matches_term(term)).collect()
    }

    /// `(symptom id, medicine id)` pairs whose medicine is not in the table.
    #[must_use]
    pub fn dangling_references(&self) -> Vec<(&str, &str)> {
        self.symptoms
            .iter()
            .flat_map(|symptom| {
                symptom
                    .related_medicines
                    .iter()
                    .filter(|id| !self.medicine_index.contains_key(id.as_str()))
                    .map(move |id| (symptom.id.as_str(), id.as_str()))
            })
            .collect()
    }
}

fn validate(medicines: &[Medicine], symptoms: &[Symptom]) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for medicine in medicines {
        if !seen.insert(medicine.id.as_str()) {
            return Err(CatalogError::DuplicateMedicine(medicine.id.clone()));
        }
        if !medicine.price.is_positive() {
            return Err(CatalogError::NonPositivePrice(medicine.id.clone()));
        }
    }

    let mut seen = HashSet::new();
    for symptom in symptoms {
        if !seen.insert(symptom.id.as_str()) {
            return Err(CatalogError::DuplicateSymptom(symptom.id.clone()));
        }
    }

    Ok(())
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
