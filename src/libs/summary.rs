use super::expense::ExpenseType;
use serde::Serialize;

/// Net amount for one calendar day (`YYYY-MM-DD`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DaySummary {
    pub day: String,
    pub total: f64,
}

/// Net amount for one record type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeSummary {
    #[serde(rename = "type")]
    pub kind: ExpenseType,
    pub total: f64,
}

pub trait SummaryTotals {
    fn net(&self) -> f64;
}

impl SummaryTotals for Vec<DaySummary> {
    fn net(&self) -> f64 {
        self.iter().fold(0.0, |acc, ds| acc + ds.total)
    }
}

impl SummaryTotals for Vec<TypeSummary> {
    fn net(&self) -> f64 {
        self.iter().fold(0.0, |acc, ts| acc + ts.total)
    }
}
