//! One-shot loader for the orders source file.
//!
//! The source is a delimited text file in an extended-Latin encoding. Any
//! unreadable file, missing column or unparseable field is fatal: the rest
//! of the system never sees a partial dataset.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use contracts::projections::p100_orders::OrderRecord;
use encoding_rs::Encoding;
use thiserror::Error;

use crate::shared::config::DatasetConfig;

use super::dataset::Dataset;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read dataset file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown encoding label '{0}'")]
    UnknownEncoding(String),

    #[error("failed to read CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("required column '{0}' not found in header")]
    MissingColumn(&'static str),

    #[error("malformed record at data row {row}: column '{column}' value '{value}': {reason}")]
    MalformedRecord {
        row: usize,
        column: &'static str,
        value: String,
        reason: String,
    },
}

/// Load the dataset from a file. Executes exactly once per process lifetime.
pub fn load(path: &Path, config: &DatasetConfig) -> Result<Dataset, LoadError> {
    let bytes = fs::read(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let dataset = load_slice(&bytes, config)?;
    tracing::info!(
        "Loaded {} order records from {} (years {:?})",
        dataset.len(),
        path.display(),
        dataset.years()
    );
    Ok(dataset)
}

/// Decode and parse raw source bytes into an immutable dataset.
pub fn load_slice(bytes: &[u8], config: &DatasetConfig) -> Result<Dataset, LoadError> {
    let encoding = Encoding::for_label(config.encoding.as_bytes())
        .ok_or_else(|| LoadError::UnknownEncoding(config.encoding.clone()))?;
    let (text, _, _) = encoding.decode(bytes);

    // Strip UTF-8 BOM if present
    let text = text.trim_start_matches('\u{FEFF}');

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();

    // Resolve required columns by header name (case-insensitive)
    let column = |name: &'static str| -> Result<usize, LoadError> {
        headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(name))
            .ok_or(LoadError::MissingColumn(name))
    };

    let order_date_col = column("Order Date")?;
    let ship_date_col = column("Ship Date")?;
    let ship_mode_col = column("Ship Mode")?;
    let segment_col = column("Segment")?;
    let region_col = column("Region")?;
    let category_col = column("Category")?;
    let sub_category_col = column("Sub-Category")?;
    let sales_col = column("Sales")?;
    let quantity_col = column("Quantity")?;
    let discount_col = column("Discount")?;
    let profit_col = column("Profit")?;

    let mut records = Vec::new();

    for (idx, result) in reader.records().enumerate() {
        // 1-based data row index, header excluded
        let row = idx + 1;
        let record = result?;
        let get = |col: usize| record.get(col).unwrap_or("").trim();

        let order_date = parse_date(get(order_date_col), &config.date_format, row, "Order Date")?;
        let ship_date = parse_date(get(ship_date_col), &config.date_format, row, "Ship Date")?;
        let (order_year, order_month, order_weekday) = OrderRecord::derive_date_parts(order_date);

        records.push(OrderRecord {
            order_date,
            ship_date,
            ship_mode: get(ship_mode_col).to_string(),
            segment: get(segment_col).to_string(),
            region: get(region_col).to_string(),
            category: get(category_col).to_string(),
            sub_category: get(sub_category_col).to_string(),
            sales: parse_decimal(get(sales_col), row, "Sales")?,
            quantity: parse_int(get(quantity_col), row, "Quantity")?,
            discount: parse_decimal(get(discount_col), row, "Discount")?,
            profit: parse_decimal(get(profit_col), row, "Profit")?,
            order_year,
            order_month,
            order_weekday,
        });
    }

    Ok(Dataset::new(records))
}

fn parse_date(
    value: &str,
    format: &str,
    row: usize,
    column: &'static str,
) -> Result<NaiveDate, LoadError> {
    NaiveDate::parse_from_str(value, format).map_err(|e| LoadError::MalformedRecord {
        row,
        column,
        value: value.to_string(),
        reason: e.to_string(),
    })
}

/// Parse decimal number that may use comma as decimal separator (European format)
fn parse_decimal(value: &str, row: usize, column: &'static str) -> Result<f64, LoadError> {
    let normalized = value.replace(',', ".");
    normalized
        .parse::<f64>()
        .map_err(|e| LoadError::MalformedRecord {
            row,
            column,
            value: value.to_string(),
            reason: e.to_string(),
        })
}

fn parse_int(value: &str, row: usize, column: &'static str) -> Result<i64, LoadError> {
    value.parse::<i64>().map_err(|e| LoadError::MalformedRecord {
        row,
        column,
        value: value.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::DatasetConfig;

    const HEADER: &str =
        "Order Date,Ship Date,Ship Mode,Segment,Region,Category,Sub-Category,Sales,Quantity,Discount,Profit";

    fn test_config() -> DatasetConfig {
        DatasetConfig {
            path: "unused".to_string(),
            encoding: "latin1".to_string(),
            date_format: "%m/%d/%Y".to_string(),
        }
    }

    fn csv_bytes(rows: &[&str]) -> Vec<u8> {
        let mut text = HEADER.to_string();
        for row in rows {
            text.push('\n');
            text.push_str(row);
        }
        text.into_bytes()
    }

    #[test]
    fn test_load_derives_date_fields() {
        let bytes = csv_bytes(&[
            "11/8/2016,11/11/2016,Second Class,Consumer,South,Furniture,Bookcases,261.96,2,0,41.91",
            "6/12/2016,6/16/2016,Standard Class,Corporate,West,Office Supplies,Labels,14.62,3,0,6.87",
        ]);

        let dataset = load_slice(&bytes, &test_config()).unwrap();
        assert_eq!(dataset.len(), 2);

        let first = &dataset.records()[0];
        assert_eq!(first.order_year, 2016);
        assert_eq!(first.order_month, 11);
        // 2016-11-08 was a Tuesday
        assert_eq!(first.order_weekday, 1);
        assert_eq!(first.sub_category, "Bookcases");
        assert_eq!(first.sales, 261.96);
    }

    #[test]
    fn test_load_decodes_extended_latin_bytes() {
        // "Göteborg" with latin-1 encoded ö (0xF6)
        let mut bytes = csv_bytes(&[]);
        bytes.extend_from_slice(b"\n1/2/2015,1/6/2015,First Class,Consumer,G\xF6teborg,Furniture,Chairs,100.5,1,0,10.25");

        let dataset = load_slice(&bytes, &test_config()).unwrap();
        assert_eq!(dataset.records()[0].region, "G\u{f6}teborg");
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join("p100_orders_loader_test.csv");
        std::fs::write(
            &path,
            csv_bytes(&[
                "1/2/2015,1/6/2015,First Class,Consumer,East,Furniture,Chairs,100,1,0,10",
            ]),
        )
        .unwrap();

        let dataset = load(&path, &test_config()).unwrap();
        assert_eq!(dataset.len(), 1);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_unreadable_file_is_io_error() {
        let path = std::env::temp_dir().join("p100_orders_loader_missing.csv");
        let err = load(&path, &test_config()).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn test_unparseable_date_reports_row_and_column() {
        let bytes = csv_bytes(&[
            "1/2/2015,1/6/2015,First Class,Consumer,East,Furniture,Chairs,100,1,0,10",
            "not-a-date,1/6/2015,First Class,Consumer,East,Furniture,Chairs,100,1,0,10",
        ]);

        let err = load_slice(&bytes, &test_config()).unwrap_err();
        match err {
            LoadError::MalformedRecord { row, column, .. } => {
                assert_eq!(row, 2);
                assert_eq!(column, "Order Date");
            }
            other => panic!("expected MalformedRecord, got {other:?}"),
        }
    }

    #[test]
    fn test_unparseable_number_is_fatal() {
        let bytes = csv_bytes(&[
            "1/2/2015,1/6/2015,First Class,Consumer,East,Furniture,Chairs,abc,1,0,10",
        ]);

        let err = load_slice(&bytes, &test_config()).unwrap_err();
        assert!(matches!(
            err,
            LoadError::MalformedRecord {
                row: 1,
                column: "Sales",
                ..
            }
        ));
    }

    #[test]
    fn test_missing_column_is_fatal() {
        let text = "Order Date,Ship Date,Region\n1/2/2015,1/6/2015,East";
        let err = load_slice(text.as_bytes(), &test_config()).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn("Ship Mode")));
    }

    #[test]
    fn test_unknown_encoding_label() {
        let mut config = test_config();
        config.encoding = "klingon".to_string();
        let err = load_slice(&csv_bytes(&[]), &config).unwrap_err();
        assert!(matches!(err, LoadError::UnknownEncoding(_)));
    }

    #[test]
    fn test_comma_decimal_separator_accepted() {
        let bytes = csv_bytes(&[
            "1/2/2015,1/6/2015,First Class,Consumer,East,Furniture,Chairs,\"100,5\",1,0,10",
        ]);
        let dataset = load_slice(&bytes, &test_config()).unwrap();
        assert_eq!(dataset.records()[0].sales, 100.5);
    }

    #[test]
    fn test_selector_domains() {
        let bytes = csv_bytes(&[
            "1/2/2016,1/6/2016,First Class,Consumer,West,Furniture,Chairs,10,1,0,1",
            "1/2/2015,1/6/2015,First Class,Consumer,East,Furniture,Chairs,10,1,0,1",
            "3/2/2015,3/6/2015,First Class,Consumer,West,Furniture,Chairs,10,1,0,1",
        ]);
        let dataset = load_slice(&bytes, &test_config()).unwrap();

        // years ascending, regions in first-encounter order
        assert_eq!(dataset.years(), vec![2015, 2016]);
        assert_eq!(dataset.regions(), vec!["West".to_string(), "East".to_string()]);
    }
}
