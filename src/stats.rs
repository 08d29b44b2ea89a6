use crate::models::{Category, DailyRecord};

/// Total and change from the previous entry of a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aggregate {
    pub total: u64,
    pub delta: Option<i64>,
}

/// Sum of the four category counts. Every "total" shown anywhere comes from here.
pub fn category_total(record: &DailyRecord) -> u64 {
    Category::ALL
        .iter()
        .map(|category| u64::from(category.count(record)))
        .sum()
}

pub fn totals(window: &[&DailyRecord]) -> Vec<u64> {
    window.iter().map(|record| category_total(record)).collect()
}

/// `None` for the first entry, otherwise the difference to its predecessor.
pub fn deltas(totals: &[u64]) -> Vec<Option<i64>> {
    let mut out = Vec::with_capacity(totals.len());
    let mut previous: Option<u64> = None;
    for &total in totals {
        out.push(previous.map(|prev| total as i64 - prev as i64));
        previous = Some(total);
    }
    out
}

pub fn aggregate(window: &[&DailyRecord]) -> Vec<Aggregate> {
    let totals = totals(window);
    let deltas = deltas(&totals);
    totals
        .into_iter()
        .zip(deltas)
        .map(|(total, delta)| Aggregate { total, delta })
        .collect()
}

/// `—` when there is nothing to compare against, `0` for no change.
pub fn format_delta(delta: Option<i64>) -> String {
    match delta {
        None => "—".to_string(),
        Some(0) => "0".to_string(),
        Some(value) if value > 0 => format!("+{value}"),
        Some(value) => value.to_string(),
    }
}
