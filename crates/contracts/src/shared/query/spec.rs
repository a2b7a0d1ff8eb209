use serde::{Deserialize, Serialize};

use super::result::CellValue;
use super::schema::AggregateFunction;

/// A required equality condition on one field.
/// All predicates of a spec must match for a record to be included.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterPredicate {
    /// Field identifier
    pub field_id: String,
    /// Value the field must equal exactly
    pub value: CellValue,
}

impl FilterPredicate {
    pub fn equals(field_id: impl Into<String>, value: CellValue) -> Self {
        Self {
            field_id: field_id.into(),
            value,
        }
    }
}

/// A measure: a field to aggregate and the function to apply
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Measure {
    /// Field identifier
    pub field_id: String,
    /// Aggregation function
    pub aggregate: AggregateFunction,
}

impl Measure {
    pub fn new(field_id: impl Into<String>, aggregate: AggregateFunction) -> Self {
        Self {
            field_id: field_id.into(),
            aggregate,
        }
    }

    /// Shorthand for the only function the dashboards use
    pub fn sum(field_id: impl Into<String>) -> Self {
        Self::new(field_id, AggregateFunction::Sum)
    }
}

/// One aggregation request: filters, a group-by key and the measures.
/// Ephemeral — built per query and discarded after the result is rendered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuerySpec {
    /// Equality filters, combined with logical AND
    pub filters: Vec<FilterPredicate>,
    /// Field identifier to partition by (exactly one categorical field)
    pub group_by: String,
    /// Measures to compute per partition, in output column order
    pub measures: Vec<Measure>,
}
