use serde::{Deserialize, Serialize};

/// Data source schema definition (static version for the query engine)
#[derive(Debug, Clone)]
pub struct DataSourceSchema {
    /// Unique identifier for the data source (e.g., "p100_orders")
    pub id: &'static str,
    /// Human-readable name (e.g., "Orders")
    pub name: &'static str,
    /// Available fields in this data source
    pub fields: &'static [FieldDef],
}

/// Definition of a single field in a data source
#[derive(Debug, Clone)]
pub struct FieldDef {
    /// Unique field identifier (e.g., "sub_category")
    pub id: &'static str,
    /// Human-readable field name (e.g., "Sub-Category")
    pub name: &'static str,
    /// Type of the field
    pub field_type: FieldType,
    /// Can this field be used as a group-by key
    pub can_group: bool,
    /// Can this field be aggregated (SUM, AVG, etc.)
    pub can_aggregate: bool,
}

/// Field type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    /// Numeric type (floating point)
    Numeric,
    /// Text/string type
    Text,
    /// Date type
    Date,
    /// Integer type
    Integer,
}

/// Aggregate function to apply to a measure field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AggregateFunction {
    /// Sum of values
    Sum,
    /// Count of rows
    Count,
    /// Average value
    Avg,
    /// Minimum value
    Min,
    /// Maximum value
    Max,
}

impl AggregateFunction {
    /// Apply the function over the observed values of one partition.
    /// Partitions are never empty: groups only exist for observed records.
    pub fn apply(&self, values: &[f64]) -> f64 {
        match self {
            AggregateFunction::Sum => values.iter().sum(),
            AggregateFunction::Count => values.len() as f64,
            AggregateFunction::Avg => {
                if values.is_empty() {
                    0.0
                } else {
                    values.iter().sum::<f64>() / values.len() as f64
                }
            }
            AggregateFunction::Min => values.iter().copied().fold(f64::INFINITY, f64::min),
            AggregateFunction::Max => values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        }
    }

    /// Get display label for result column names
    pub fn label(&self) -> &'static str {
        match self {
            AggregateFunction::Sum => "Sum",
            AggregateFunction::Count => "Count",
            AggregateFunction::Avg => "Avg",
            AggregateFunction::Min => "Min",
            AggregateFunction::Max => "Max",
        }
    }
}
