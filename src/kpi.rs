//! Aggregations behind the dashboard's KPI cards.

use crate::model::{EntityKind, Record, Row, Value};
use crate::store::AppStore;
use crate::utils::format::{format_currency, group_thousands, round_cents};

/// Sum of a numeric field; rows without a number are skipped
pub fn sum<R: Row>(records: &[R], key: &str) -> f64 {
    records.iter().filter_map(|r| r.field(key).and_then(Value::as_f64)).sum()
}

/// Sum of `a * b` per row, rounded to cents
pub fn sum_product<R: Row>(records: &[R], a: &str, b: &str) -> f64 {
    let total: f64 = records
        .iter()
        .filter_map(|r| {
            let x = r.field(a).and_then(Value::as_f64)?;
            let y = r.field(b).and_then(Value::as_f64)?;
            Some(x * y)
        })
        .sum();
    round_cents(total)
}

pub fn count<R>(records: &[R]) -> usize {
    records.len()
}

/// Rows whose `key` equals `value`
pub fn count_where<R: Row>(records: &[R], key: &str, value: &str) -> usize {
    records
        .iter()
        .filter(|r| r.field(key).is_some_and(|v| v.matches_option(value)))
        .count()
}

/// One dashboard card
#[derive(Debug, Clone, PartialEq)]
pub struct Kpi {
    pub label: &'static str,
    pub value: String,
    /// Entity list the card links to
    pub entity: EntityKind,
}

impl Kpi {
    fn new(label: &'static str, value: String, entity: EntityKind) -> Self {
        Self { label, value, entity }
    }
}

fn whole(n: f64) -> String {
    group_thousands(n.max(0.0).round() as u64)
}

pub fn dashboard_kpis(store: &AppStore, currency_symbol: &str) -> Vec<Kpi> {
    let assets = store.records(EntityKind::Asset);
    let inventory = store.records(EntityKind::Inventory);
    let orders = store.records(EntityKind::Order);
    let vendors = store.records(EntityKind::Vendor);
    let products = store.records(EntityKind::Product);
    let jobs = store.records(EntityKind::Job);
    let enrollments = store.records(EntityKind::Enrollment);
    let freelancers = store.records(EntityKind::Freelancer);

    vec![
        Kpi::new("Asset Units", whole(sum(&assets, "quantity")), EntityKind::Asset),
        Kpi::new(
            "Inventory Value",
            format_currency(sum_product(&inventory, "price", "quantity"), currency_symbol),
            EntityKind::Inventory,
        ),
        Kpi::new(
            "Low / Out of Stock",
            (count_where(&inventory, "status", "low_stock") + count_where(&inventory, "status", "out_of_stock"))
                .to_string(),
            EntityKind::Inventory,
        ),
        Kpi::new("Orders", count(&orders).to_string(), EntityKind::Order),
        Kpi::new(
            "Pending Orders",
            count_where(&orders, "status", "pending").to_string(),
            EntityKind::Order,
        ),
        Kpi::new(
            "Revenue (Delivered)",
            format_currency(round_cents(delivered_revenue(&orders)), currency_symbol),
            EntityKind::Order,
        ),
        Kpi::new(
            "Active Vendors",
            count_where(&vendors, "status", "active").to_string(),
            EntityKind::Vendor,
        ),
        Kpi::new("Products", count(&products).to_string(), EntityKind::Product),
        Kpi::new("Open Jobs", count_where(&jobs, "status", "open").to_string(), EntityKind::Job),
        Kpi::new(
            "Active Enrollments",
            count_where(&enrollments, "status", "enrolled").to_string(),
            EntityKind::Enrollment,
        ),
        Kpi::new(
            "Available Freelancers",
            count_where(&freelancers, "status", "available").to_string(),
            EntityKind::Freelancer,
        ),
    ]
}

fn delivered_revenue(orders: &[Record]) -> f64 {
    orders
        .iter()
        .filter(|o| o.get("status").is_some_and(|s| s.matches_option("delivered")))
        .filter_map(|o| o.number("total"))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<Record> {
        vec![
            Record::new().with("id", "A").with("qty", 2.0).with("price", 1.1).with("status", "open"),
            Record::new().with("id", "B").with("qty", 3.0).with("price", 2.2).with("status", "open"),
            Record::new().with("id", "C").with("price", 9.0).with("status", "closed"),
        ]
    }

    #[test]
    fn sum_skips_missing_numbers() {
        assert_eq!(sum(&rows(), "qty"), 5.0);
        assert_eq!(sum(&rows(), "nothing"), 0.0);
    }

    #[test]
    fn sum_product_rounds_to_cents() {
        // 2 * 1.1 + 3 * 2.2 = 8.8 with float noise
        assert_eq!(sum_product(&rows(), "qty", "price"), 8.8);
    }

    #[test]
    fn count_where_matches_field_value() {
        assert_eq!(count_where(&rows(), "status", "open"), 2);
        assert_eq!(count(&rows()), 3);
    }
}
