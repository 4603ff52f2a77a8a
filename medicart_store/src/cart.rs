//! Shopping cart.

use chrono::{DateTime, Utc};
use medicart_core::{Medicine, Price};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::{Result, StoreError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub medicine: Medicine,
    /// Always at least 1; a line that would drop to 0 is removed instead.
    pub quantity: u32,
}

impl CartItem {
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.medicine.price.times(self.quantity)
    }
}

/// Confirmation of a placed order. Nothing beyond this value is recorded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderReceipt {
    pub id: Uuid,
    pub items: Vec<CartItem>,
    pub total: Price,
    pub address: String,
    pub placed_at: DateTime<Utc>,
}

/// Lines in the order they were first added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    #[must_use]
    pub fn quantity_of(&self, medicine_id: &str) -> Option<u32> {
        self.position(medicine_id).map(|idx| self.items[idx].quantity)
    }

    /// Add one unit, appending a new line if the medicine is not present.
    ///
    /// A line already at `u32::MAX` stays there.
    pub fn add(&mut self, medicine: &Medicine) {
        if let Some(idx) = self.position(&medicine.id) {
            let line = &mut self.items[idx];
            line.quantity = line.quantity.saturating_add(1);
        } else {
            self.items.push(CartItem {
                medicine: medicine.clone(),
                quantity: 1,
            });
        }
        info!("{} has been added to your cart", medicine.name);
    }

    /// Drop a line. Returns whether anything was removed.
    pub fn remove(&mut self, medicine_id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.medicine.id != medicine_id);
        before != self.items.len()
    }

    /// Set a line's quantity; anything below 1 removes the line.
    pub fn set_quantity(&mut self, medicine_id: &str, quantity: u32) -> Result<()> {
        let idx = self
            .position(medicine_id)
            .ok_or_else(|| StoreError::NotInCart(medicine_id.to_string()))?;

        if quantity < 1 {
            self.items.remove(idx);
        } else {
            self.items[idx].quantity = quantity;
        }
        Ok(())
    }

    pub fn increase(&mut self, medicine_id: &str) -> Result<()> {
        let current = self
            .quantity_of(medicine_id)
            .ok_or_else(|| StoreError::NotInCart(medicine_id.to_string()))?;
        self.set_quantity(medicine_id, current.saturating_add(1))
    }

    /// Take one unit off; the last unit removes the line.
    pub fn decrease(&mut self, medicine_id: &str) -> Result<()> {
        let current = self
            .quantity_of(medicine_id)
            .ok_or_else(|| StoreError::NotInCart(medicine_id.to_string()))?;
        self.set_quantity(medicine_id, current.saturating_sub(1))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[must_use]
    pub fn total(&self) -> Price {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Place the order and empty the cart.
    ///
    /// The cart is left untouched when validation fails.
    pub fn checkout(&mut self, address: &str) -> Result<OrderReceipt> {
        let address = address.trim();
        if address.is_empty() {
            return Err(StoreError::AddressRequired);
        }
        if self.is_empty() {
            return Err(StoreError::EmptyCart);
        }

        let receipt = OrderReceipt {
            id: Uuid::now_v7(),
            total: self.total(),
            items: std::mem::take(&mut self.items),
            address: address.to_string(),
            placed_at: Utc::now(),
        };

        info!(
            "Order {} placed: {} lines, total {}",
            receipt.id,
            receipt.items.len(),
            receipt.total
        );
        Ok(receipt)
    }

    fn position(&self, medicine_id: &str) -> Option<usize> {
        self.items
            .iter()
            .position(|item| item.medicine.id == medicine_id)
    }
}
