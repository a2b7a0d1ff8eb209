use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::shared::query::CellValue;

/// Field identifiers for the orders data source.
/// Shared by the loader, the schema and the dashboard recipes.
pub mod fields {
    pub const ORDER_DATE: &str = "order_date";
    pub const SHIP_DATE: &str = "ship_date";
    pub const SHIP_MODE: &str = "ship_mode";
    pub const SEGMENT: &str = "segment";
    pub const REGION: &str = "region";
    pub const CATEGORY: &str = "category";
    pub const SUB_CATEGORY: &str = "sub_category";
    pub const SALES: &str = "sales";
    pub const QUANTITY: &str = "quantity";
    pub const DISCOUNT: &str = "discount";
    pub const PROFIT: &str = "profit";
    pub const ORDER_YEAR: &str = "order_year";
    pub const ORDER_MONTH: &str = "order_month";
    pub const ORDER_WEEKDAY: &str = "order_weekday";
}

/// One order transaction row. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    // Dates
    pub order_date: NaiveDate,
    pub ship_date: NaiveDate,

    // Categorical dimensions
    pub ship_mode: String,
    pub segment: String,
    pub region: String,
    pub category: String,
    pub sub_category: String,

    // Money and quantities
    pub sales: f64,
    pub quantity: i64,
    pub discount: f64,
    pub profit: f64,

    // Derived once at load time, never recomputed
    pub order_year: i32,
    /// Calendar month of the order date, 1-12
    pub order_month: u32,
    /// Day of week of the order date, 0 = Monday .. 6 = Sunday
    pub order_weekday: u32,
}

impl OrderRecord {
    /// Derive the year/month/weekday triple from an order date
    pub fn derive_date_parts(order_date: NaiveDate) -> (i32, u32, u32) {
        (
            order_date.year(),
            order_date.month(),
            order_date.weekday().num_days_from_monday(),
        )
    }

    /// Typed cell access by field identifier.
    /// Returns None for identifiers outside the orders schema.
    pub fn cell(&self, field_id: &str) -> Option<CellValue> {
        let value = match field_id {
            fields::ORDER_DATE => CellValue::Text(self.order_date.to_string()),
            fields::SHIP_DATE => CellValue::Text(self.ship_date.to_string()),
            fields::SHIP_MODE => CellValue::Text(self.ship_mode.clone()),
            fields::SEGMENT => CellValue::Text(self.segment.clone()),
            fields::REGION => CellValue::Text(self.region.clone()),
            fields::CATEGORY => CellValue::Text(self.category.clone()),
            fields::SUB_CATEGORY => CellValue::Text(self.sub_category.clone()),
            fields::SALES => CellValue::Number(self.sales),
            fields::QUANTITY => CellValue::Integer(self.quantity),
            fields::DISCOUNT => CellValue::Number(self.discount),
            fields::PROFIT => CellValue::Number(self.profit),
            fields::ORDER_YEAR => CellValue::Integer(self.order_year as i64),
            fields::ORDER_MONTH => CellValue::Integer(self.order_month as i64),
            fields::ORDER_WEEKDAY => CellValue::Integer(self.order_weekday as i64),
            _ => return None,
        };
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> OrderRecord {
        let order_date = NaiveDate::from_ymd_opt(2016, 11, 8).unwrap();
        let (order_year, order_month, order_weekday) = OrderRecord::derive_date_parts(order_date);
        OrderRecord {
            order_date,
            ship_date: NaiveDate::from_ymd_opt(2016, 11, 11).unwrap(),
            ship_mode: "Second Class".into(),
            segment: "Consumer".into(),
            region: "South".into(),
            category: "Furniture".into(),
            sub_category: "Bookcases".into(),
            sales: 261.96,
            quantity: 2,
            discount: 0.0,
            profit: 41.91,
            order_year,
            order_month,
            order_weekday,
        }
    }

    #[test]
    fn test_derive_date_parts() {
        // 2016-11-08 was a Tuesday
        let (year, month, weekday) =
            OrderRecord::derive_date_parts(NaiveDate::from_ymd_opt(2016, 11, 8).unwrap());
        assert_eq!(year, 2016);
        assert_eq!(month, 11);
        assert_eq!(weekday, 1);
    }

    #[test]
    fn test_cell_covers_known_fields() {
        let record = sample();
        assert_eq!(
            record.cell(fields::REGION),
            Some(CellValue::Text("South".into()))
        );
        assert_eq!(
            record.cell(fields::ORDER_YEAR),
            Some(CellValue::Integer(2016))
        );
        assert_eq!(record.cell(fields::SALES), Some(CellValue::Number(261.96)));
        assert_eq!(record.cell("no_such_field"), None);
    }
}
