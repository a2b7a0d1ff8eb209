//! In-memory aggregation engine.
//!
//! Evaluates a `QuerySpec` against the loaded dataset in a single pass:
//! records matching every equality filter are partitioned by the group-by
//! cell, then each measure's function is applied per partition. Result rows
//! keep the order in which group keys were first encountered, so identical
//! inputs always produce identical tables.

use std::collections::HashMap;

use contracts::shared::query::{
    CellValue, ColumnHeader, ColumnType, FieldDef, QuerySpec, ResultRow, ResultTable,
};
use thiserror::Error;

use crate::projections::p100_orders::{schema, Dataset};

/// Errors for query specs that reference fields outside the schema or use
/// them in the wrong role. These are caller bugs, not runtime conditions:
/// a filter combination that matches nothing is a normal empty result.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("unknown field '{0}' in query spec")]
    UnknownField(String),

    #[error("field '{0}' cannot be used as a group-by key")]
    NotGroupable(String),

    #[error("field '{0}' cannot be aggregated")]
    NotAggregatable(String),

    #[error("query spec has no measures")]
    NoMeasures,
}

/// Run one aggregation query over the dataset.
pub fn aggregate(dataset: &Dataset, spec: &QuerySpec) -> Result<ResultTable, QueryError> {
    let group_field = schema::field(&spec.group_by)
        .ok_or_else(|| QueryError::UnknownField(spec.group_by.clone()))?;
    if !group_field.can_group {
        return Err(QueryError::NotGroupable(spec.group_by.clone()));
    }

    if spec.measures.is_empty() {
        return Err(QueryError::NoMeasures);
    }
    let mut measure_fields: Vec<&'static FieldDef> = Vec::with_capacity(spec.measures.len());
    for measure in &spec.measures {
        let field = schema::field(&measure.field_id)
            .ok_or_else(|| QueryError::UnknownField(measure.field_id.clone()))?;
        if !field.can_aggregate {
            return Err(QueryError::NotAggregatable(measure.field_id.clone()));
        }
        measure_fields.push(field);
    }

    for filter in &spec.filters {
        if schema::field(&filter.field_id).is_none() {
            return Err(QueryError::UnknownField(filter.field_id.clone()));
        }
    }

    // Partition matching records, preserving first-encounter key order.
    let mut slot_by_key: HashMap<String, usize> = HashMap::new();
    let mut keys: Vec<CellValue> = Vec::new();
    let mut partitions: Vec<Vec<Vec<f64>>> = Vec::new();

    for record in dataset.records() {
        let matches = spec
            .filters
            .iter()
            .all(|f| record.cell(&f.field_id).map_or(false, |cell| cell == f.value));
        if !matches {
            continue;
        }

        let key = record.cell(&spec.group_by).unwrap_or(CellValue::Null);
        let slot = *slot_by_key.entry(key.group_key()).or_insert_with(|| {
            keys.push(key.clone());
            partitions.push(vec![Vec::new(); spec.measures.len()]);
            partitions.len() - 1
        });

        for (measure_idx, measure) in spec.measures.iter().enumerate() {
            if let Some(value) = record.cell(&measure.field_id).and_then(|c| c.as_f64()) {
                partitions[slot][measure_idx].push(value);
            }
        }
    }

    let mut columns = Vec::with_capacity(1 + spec.measures.len());
    columns.push(ColumnHeader {
        id: group_field.id.to_string(),
        name: group_field.name.to_string(),
        column_type: ColumnType::Grouping,
    });
    for (measure, field) in spec.measures.iter().zip(&measure_fields) {
        columns.push(ColumnHeader {
            id: field.id.to_string(),
            name: format!("{} of {}", measure.aggregate.label(), field.name),
            column_type: ColumnType::Aggregated,
        });
    }

    let rows = keys
        .into_iter()
        .zip(partitions)
        .map(|(key, partition)| ResultRow {
            values: spec
                .measures
                .iter()
                .enumerate()
                .map(|(i, m)| m.aggregate.apply(&partition[i]))
                .collect(),
            key,
        })
        .collect();

    Ok(ResultTable { columns, rows })
}
