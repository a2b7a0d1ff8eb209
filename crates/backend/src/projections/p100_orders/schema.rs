//! Static query schema for the orders data source.
//!
//! Every loaded and derived column is declared here with its grouping and
//! aggregation capabilities. The query engine rejects any field identifier
//! that is not in this list.

use std::collections::HashMap;

use contracts::projections::p100_orders::fields;
use contracts::shared::query::{DataSourceSchema, FieldDef, FieldType};
use once_cell::sync::Lazy;

pub const SCHEMA_ID: &str = "p100_orders";

pub static ORDER_FIELDS: &[FieldDef] = &[
    FieldDef {
        id: fields::ORDER_DATE,
        name: "Order Date",
        field_type: FieldType::Date,
        can_group: false,
        can_aggregate: false,
    },
    FieldDef {
        id: fields::SHIP_DATE,
        name: "Ship Date",
        field_type: FieldType::Date,
        can_group: false,
        can_aggregate: false,
    },
    FieldDef {
        id: fields::SHIP_MODE,
        name: "Ship Mode",
        field_type: FieldType::Text,
        can_group: true,
        can_aggregate: false,
    },
    FieldDef {
        id: fields::SEGMENT,
        name: "Segment",
        field_type: FieldType::Text,
        can_group: true,
        can_aggregate: false,
    },
    FieldDef {
        id: fields::REGION,
        name: "Region",
        field_type: FieldType::Text,
        can_group: true,
        can_aggregate: false,
    },
    FieldDef {
        id: fields::CATEGORY,
        name: "Category",
        field_type: FieldType::Text,
        can_group: true,
        can_aggregate: false,
    },
    FieldDef {
        id: fields::SUB_CATEGORY,
        name: "Sub-Category",
        field_type: FieldType::Text,
        can_group: true,
        can_aggregate: false,
    },
    FieldDef {
        id: fields::SALES,
        name: "Sales",
        field_type: FieldType::Numeric,
        can_group: false,
        can_aggregate: true,
    },
    FieldDef {
        id: fields::QUANTITY,
        name: "Quantity",
        field_type: FieldType::Integer,
        can_group: false,
        can_aggregate: true,
    },
    FieldDef {
        id: fields::DISCOUNT,
        name: "Discount",
        field_type: FieldType::Numeric,
        can_group: false,
        can_aggregate: true,
    },
    FieldDef {
        id: fields::PROFIT,
        name: "Profit",
        field_type: FieldType::Numeric,
        can_group: false,
        can_aggregate: true,
    },
    FieldDef {
        id: fields::ORDER_YEAR,
        name: "Order Year",
        field_type: FieldType::Integer,
        can_group: true,
        can_aggregate: false,
    },
    FieldDef {
        id: fields::ORDER_MONTH,
        name: "Order Month",
        field_type: FieldType::Integer,
        can_group: true,
        can_aggregate: false,
    },
    FieldDef {
        id: fields::ORDER_WEEKDAY,
        name: "Order Day of Week",
        field_type: FieldType::Integer,
        can_group: true,
        can_aggregate: false,
    },
];

pub static ORDERS_SCHEMA: DataSourceSchema = DataSourceSchema {
    id: SCHEMA_ID,
    name: "Orders",
    fields: ORDER_FIELDS,
};

static FIELD_INDEX: Lazy<HashMap<&'static str, &'static FieldDef>> =
    Lazy::new(|| ORDER_FIELDS.iter().map(|f| (f.id, f)).collect());

/// Look up a field definition by identifier
pub fn field(field_id: &str) -> Option<&'static FieldDef> {
    FIELD_INDEX.get(field_id).copied()
}
