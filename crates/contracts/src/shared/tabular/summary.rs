//! Summary totals over a dataset (stat cards above the tables).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::record::Record;

/// Numeric reading of a value: numbers, and strings that parse as numbers.
pub fn numeric_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}

/// Sum of `field` over the dataset; non-numeric and missing values are skipped.
pub fn sum_field(dataset: &[Record], field: &str) -> f64 {
    dataset
        .iter()
        .filter_map(|r| r.get(field))
        .filter_map(numeric_value)
        .sum()
}

/// Number of records whose `field` reads as `expected` (case-insensitive).
pub fn count_where(dataset: &[Record], field: &str, expected: &str) -> usize {
    let expected = expected.trim().to_lowercase();
    dataset
        .iter()
        .filter_map(|r| r.get(field))
        .filter(|v| match v {
            Value::String(s) => s.trim().to_lowercase() == expected,
            Value::Null => false,
            other => other.to_string().to_lowercase() == expected,
        })
        .count()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SummaryMetric {
    Count,
    Sum { field: String },
    CountWhere { field: String, equals: String },
}

/// One summary figure to compute for a section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummarySpec {
    pub label: String,
    pub metric: SummaryMetric,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryValue {
    pub label: String,
    pub value: f64,
}

impl SummarySpec {
    pub fn count(label: &str) -> Self {
        Self {
            label: label.to_string(),
            metric: SummaryMetric::Count,
        }
    }

    pub fn sum(label: &str, field: &str) -> Self {
        Self {
            label: label.to_string(),
            metric: SummaryMetric::Sum {
                field: field.to_string(),
            },
        }
    }

    pub fn count_where(label: &str, field: &str, equals: &str) -> Self {
        Self {
            label: label.to_string(),
            metric: SummaryMetric::CountWhere {
                field: field.to_string(),
                equals: equals.to_string(),
            },
        }
    }

    pub fn evaluate(&self, dataset: &[Record]) -> SummaryValue {
        let value = match &self.metric {
            SummaryMetric::Count => dataset.len() as f64,
            SummaryMetric::Sum { field } => sum_field(dataset, field),
            SummaryMetric::CountWhere { field, equals } => {
                count_where(dataset, field, equals) as f64
            }
        };
        SummaryValue {
            label: self.label.clone(),
            value,
        }
    }
}
