//! Mock order history shown on the profile screen.

use medicart_core::{Catalog, Price};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Processing,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Processing => "processing",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub medicine_id: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub items: Vec<OrderItem>,
    pub total_amount: Price,
    pub date: String,
    pub status: OrderStatus,
    pub address: String,
}

/// An order item resolved against the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    pub medicine_name: String,
    pub quantity: u32,
    pub line_total: Price,
}

/// Past orders for a user. Only the demo shopper has any.
#[must_use]
pub fn order_history(user_id: &str) -> Vec<Order> {
    if user_id != "u1" {
        return Vec::new();
    }

    vec![Order {
        id: "o1".to_string(),
        items: vec![
            OrderItem {
                medicine_id: "m1".to_string(),
                quantity: 2,
            },
            OrderItem {
                medicine_id: "m3".to_string(),
                quantity: 1,
            },
        ],
        total_amount: Price::from_cents(2048),
        date: "2025-03-30".to_string(),
        status: OrderStatus::Delivered,
        address: "123 Main St, City, Country".to_string(),
    }]
}

/// Priced lines of `order`; items whose medicine is gone are skipped.
#[must_use]
pub fn order_lines(order: &Order, catalog: &Catalog) -> Vec<OrderLine> {
    order
        .items
        .iter()
        .filter_map(|item| {
            catalog.medicine_by_id(&item.medicine_id).map(|medicine| OrderLine {
                medicine_name: medicine.name.clone(),
                quantity: item.quantity,
                line_total: medicine.price.times(item.quantity),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_history() {
        let orders = order_history("u1");
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].status, OrderStatus::Delivered);
        assert!(order_history("u2").is_empty());
    }

    #[test]
    fn test_order_lines_match_recorded_total() {
        let catalog = Catalog::builtin();
        let order = &order_history("u1")[0];
        let lines = order_lines(order, &catalog);

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].medicine_name, "Paracetamol");
        assert_eq!(lines[0].line_total, Price::from_cents(1198));
        let total: Price = lines.iter().map(|l| l.line_total).sum();
        assert_eq!(total, order.total_amount);
    }

    #[test]
    fn test_order_lines_skip_unknown_medicine() {
        let catalog = Catalog::builtin();
        let mut order = order_history("u1").remove(0);
        order.items.push(OrderItem {
            medicine_id: "m404".to_string(),
            quantity: 1,
        });
        assert_eq!(order_lines(&order, &catalog).len(), 2);
    }
}
