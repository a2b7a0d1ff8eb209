use contracts::projections::p100_orders::OrderRecord;
use contracts::shared::query::DataSourceSchema;

use super::schema::ORDERS_SCHEMA;

/// The full collection of order records, loaded once per process and
/// read-only afterwards. Every query borrows it; nothing mutates it.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<OrderRecord>,
}

impl Dataset {
    pub fn new(records: Vec<OrderRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[OrderRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Schema describing the queryable fields of this dataset
    pub fn schema(&self) -> &'static DataSourceSchema {
        &ORDERS_SCHEMA
    }

    /// Distinct order years, ascending (the year slider domain)
    pub fn years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.records.iter().map(|r| r.order_year).collect();
        years.sort_unstable();
        years.dedup();
        years
    }

    /// Distinct regions in first-encounter order (the region dropdown domain)
    pub fn regions(&self) -> Vec<String> {
        let mut regions: Vec<String> = Vec::new();
        for record in &self.records {
            if !regions.contains(&record.region) {
                regions.push(record.region.clone());
            }
        }
        regions
    }
}
