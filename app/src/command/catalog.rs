use medicart_core::category_label;
use tracing::warn;

use super::{AppContext, medicine_line};

/// Input parameters for the Medicines command strategy.
pub struct MedicinesInput {
    pub ctx: AppContext,
    pub category: Option<String>,
    pub search: Option<String>,
}

/// Lists the catalog, grouped by category unless a filter narrows it.
#[derive(Debug, Clone, Copy)]
pub struct MedicinesStrategy;

impl super::CommandStrategy for MedicinesStrategy {
    type Input = MedicinesInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let catalog = &input.ctx.catalog;
        let term = input.search.as_deref().unwrap_or_default();

        let mut categories: Vec<&str> = match input.category.as_deref() {
            Some(category) => vec![category],
            None => catalog.categories().into_iter().collect(),
        };
        categories.sort_unstable();

        let matches = catalog.search(term);
        let mut shown = 0_usize;

        for category in categories {
            let in_category: Vec<_> = matches
                .iter()
                .filter(|m| m.category == category)
                .collect();
            if in_category.is_empty() {
                continue;
            }

            println!("{}:", category_label(category));
            for medicine in in_category {
                println!("  {}", medicine_line(medicine));
                shown += 1;
            }
            println!();
        }

        if shown == 0 {
            println!("No medicines found matching your search.");
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CategoriesStrategy;

impl super::CommandStrategy for CategoriesStrategy {
    type Input = AppContext;

    async fn execute(&self, ctx: Self::Input) -> anyhow::Result<()> {
        let mut categories: Vec<&str> = ctx.catalog.categories().into_iter().collect();
        categories.sort_unstable();

        for category in categories {
            println!(
                "{category:<18} {:<18} {} medicines",
                category_label(category),
                ctx.catalog.medicines_in_category(category).len()
            );
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SymptomsStrategy;

impl super::CommandStrategy for SymptomsStrategy {
    type Input = AppContext;

    async fn execute(&self, ctx: Self::Input) -> anyhow::Result<()> {
        for symptom in ctx.catalog.symptoms() {
            println!("{:<4} {:<18} {}", symptom.id, symptom.name, symptom.description);
        }
        println!();
        println!("Run 'medicart recommend <id>...' with the symptoms you have.");
        Ok(())
    }
}

/// Input parameters for the Recommend command strategy.
pub struct RecommendInput {
    pub ctx: AppContext,
    pub symptom_ids: Vec<String>,
    pub add_to_cart: bool,
}

/// Suggests medicines for the selected symptoms.
#[derive(Debug, Clone, Copy)]
pub struct RecommendStrategy;

impl super::CommandStrategy for RecommendStrategy {
    type Input = RecommendInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let ctx = &input.ctx;

        for id in &input.symptom_ids {
            match ctx.catalog.symptom_by_id(id) {
                Some(symptom) => println!("✔ {}", symptom.name),
                None => warn!("Unknown symptom id: {id}"),
            }
        }
        println!();

        let recommended = ctx.catalog.medicines_for_symptoms(&input.symptom_ids);
        if recommended.is_empty() {
            println!("No specific medications found for the selected symptoms.");
            println!("Please consult a doctor for proper diagnosis.");
            return Ok(());
        }

        println!("Recommended medicines:");
        for medicine in &recommended {
            println!("  {}", medicine_line(medicine));
        }

        if input.add_to_cart {
            ctx.with_state(|state, _| {
                for medicine in &recommended {
                    state.cart.add(medicine);
                }
                println!();
                println!(
                    "Added {} medicines. Cart total: {}",
                    recommended.len(),
                    state.cart.total()
                );
                Ok(())
            })?;
        }

        println!();
        println!("These suggestions are not a substitute for professional medical advice.");
        Ok(())
    }
}
