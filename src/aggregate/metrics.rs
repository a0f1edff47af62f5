use std::collections::HashSet;

use serde::Serialize;

use crate::dataset::Record;
use crate::numeric::quantity::parse_quantity;
use crate::resolve::fields::FieldKeys;

/// Dataset-wide counts over the filtered record set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Metrics {
    /// Distinct non-empty order ids.
    pub orders: u64,
    /// Distinct non-empty creators.
    pub creators: u64,
    /// Distinct non-empty content ids.
    pub contents: u64,
    /// Sum of normalized quantities, including rows with blank ids.
    pub qty: u64,
}

impl Metrics {
    /// Fraction of the total quantity; 0 when the total is 0.
    pub fn share(&self, qty: u64) -> f64 {
        if self.qty == 0 {
            0.0
        } else {
            qty as f64 / self.qty as f64
        }
    }
}

pub fn summarize<'a, I>(records: I, keys: &FieldKeys) -> Metrics
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut orders: HashSet<&str> = HashSet::new();
    let mut creators: HashSet<&str> = HashSet::new();
    let mut contents: HashSet<&str> = HashSet::new();
    let mut qty: u64 = 0;

    for record in records {
        insert_present(&mut orders, keys.order.value(record));
        insert_present(&mut creators, keys.creator.value(record));
        insert_present(&mut contents, keys.id.value(record));
        qty = qty.saturating_add(parse_quantity(keys.qty.value(record)));
    }

    Metrics {
        orders: orders.len() as u64,
        creators: creators.len() as u64,
        contents: contents.len() as u64,
        qty,
    }
}

#[inline]
fn insert_present<'a>(set: &mut HashSet<&'a str>, value: &'a str) {
    if !value.is_empty() {
        set.insert(value);
    }
}
