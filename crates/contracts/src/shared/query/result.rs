use serde::{Deserialize, Serialize};

/// A single cell value in a query result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    /// Text value
    Text(String),
    /// Floating point value
    Number(f64),
    /// Integer value
    Integer(i64),
    /// Empty/missing value
    Null,
}

impl CellValue {
    /// String representation used as a partition key during grouping
    pub fn group_key(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => n.to_string(),
            CellValue::Integer(i) => i.to_string(),
            CellValue::Null => String::new(),
        }
    }

    /// Numeric view of the cell, if it has one
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Integer(i) => Some(*i as f64),
            CellValue::Text(_) | CellValue::Null => None,
        }
    }
}

/// Role of a column in a result table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnType {
    /// The group-by key column
    Grouping,
    /// An aggregated measure column
    Aggregated,
}

/// Header describing one result table column
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnHeader {
    /// Field identifier the column was computed from
    pub id: String,
    /// Display name (e.g., "Sum of Sales")
    pub name: String,
    /// Column role
    pub column_type: ColumnType,
}

/// One row of a result table: the group key plus one value per measure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    /// Distinct group-by value this row aggregates
    pub key: CellValue,
    /// Aggregated measure values, in measure order
    pub values: Vec<f64>,
}

/// Aggregated output of one query, consumed by the rendering layer.
/// Rows appear in the order their group keys were first encountered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultTable {
    /// Column headers: the grouping column followed by measure columns
    pub columns: Vec<ColumnHeader>,
    /// One row per distinct group key present after filtering
    pub rows: Vec<ResultRow>,
}

impl ResultTable {
    /// Number of group rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the filters matched no records
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
