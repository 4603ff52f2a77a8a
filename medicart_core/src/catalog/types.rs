//! Reference data types for the medicine catalog.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// A monetary amount held in cents.
///
/// Serialised as a decimal number (`5.99`) so catalog files read like the
/// price list they describe, while arithmetic stays exact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(u64);

impl Price {
    pub const ZERO: Self = Self(0);

    #[must_use]
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    #[must_use]
    pub const fn cents(self) -> u64 {
        self.0
    }

    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Price of `quantity` units, capped at the largest representable amount.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(u64::from(quantity)))
    }

    #[allow(clippy::cast_precision_loss)]
    fn as_decimal(self) -> f64 {
        self.0 as f64 / 100.0
    }

    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    fn from_decimal(value: f64) -> Option<Self> {
        let cents = (value * 100.0).round();
        if !cents.is_finite() || cents < 0.0 || cents > (u64::MAX / 100) as f64 {
            return None;
        }
        Some(Self(cents as u64))
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format!("${}.{:02}", self.0 / 100, self.0 % 100))
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_decimal())
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Self::from_decimal(value).ok_or_else(|| {
            serde::de::Error::custom(format!(
                "invalid price {value}: must be a finite non-negative amount within range"
            ))
        })
    }
}

/// A purchasable catalog item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Medicine {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Price,
    #[serde(default = "Medicine::default_image")]
    pub image: String,
    pub dosage: String,
    pub category: String,
}

impl Medicine {
    fn default_image() -> String {
        "/placeholder.svg".to_string()
    }

    /// Case-insensitive match of `term` against name or description.
    #[must_use]
    pub fn matches_term(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term) || self.description.to_lowercase().contains(&term)
    }
}

/// A named condition mapped to an ordered list of recommended medicines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Symptom {
    pub id: String,
    pub name: String,
    pub description: String,
    pub related_medicines: Vec<String>,
}

/// Display label for a kebab-case category, e.g. `pain-relief` -> `Pain Relief`.
#[must_use]
pub fn category_label(category: &str) -> String {
    category
        .split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_display() {
        assert_eq!(Price::from_cents(599).to_string(), "$5.99");
        assert_eq!(Price::from_cents(850).to_string(), "$8.50");
        assert_eq!(Price::from_cents(7).to_string(), "$0.07");
        assert_eq!(Price::ZERO.to_string(), "$0.00");
        assert_eq!(format!("{:>7}", Price::from_cents(599)), "  $5.99");
    }

    #[test]
    fn test_price_arithmetic_is_exact() {
        let total: Price = [Price::from_cents(599).times(2), Price::from_cents(850)]
            .into_iter()
            .sum();
        assert_eq!(total, Price::from_cents(2048));
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_price_decimal_serde() {
        let price: Price = serde_json::from_str("12.99").expect("decimal should parse");
        assert_eq!(price.cents(), 1299);
        assert_eq!(serde_json::to_string(&price).expect("price should serialize"), "12.99");

        assert!(serde_json::from_str::<Price>("-1.0").is_err());
    }

    #[test]
    fn test_price_rejects_out_of_range_amounts() {
        assert!(serde_json::from_str::<Price>("1e30").is_err());
        assert!(serde_json::from_str::<Price>("1e17").is_err());
        assert!(serde_json::from_str::<Price>("1e15").is_ok());
    }

    #[test]
    fn test_price_arithmetic_saturates() {
        let max = Price::from_cents(u64::MAX);
        assert_eq!(max.times(u32::MAX), max);
        assert_eq!(max + Price::from_cents(1), max);
        assert_eq!(Price::from_cents(5).times(u32::MAX).cents(), 5 * u64::from(u32::MAX));
    }

    #[test]
    fn test_category_label() {
        assert_eq!(category_label("pain-relief"), "Pain Relief");
        assert_eq!(category_label("digestive-health"), "Digestive Health");
        assert_eq!(category_label("allergy"), "Allergy");
        assert_eq!(category_label(""), "");
    }

    #[test]
    fn test_matches_term_is_case_insensitive() {
        let medicine = Medicine {
            id: "m1".to_string(),
            name: "Paracetamol".to_string(),
            description: "Relief from fever".to_string(),
            price: Price::from_cents(599),
            image: Medicine::default_image(),
            dosage: "500mg".to_string(),
            category: "pain-relief".to_string(),
        };
        assert!(medicine.matches_term("PARA"));
        assert!(medicine.matches_term("fever"));
        assert!(!medicine.matches_term("cough"));
    }
}
