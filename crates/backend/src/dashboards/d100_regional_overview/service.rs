//! Regional overview dashboard: seven chart queries driven by one
//! (year, region) selection. Each function is stateless and independent;
//! the rendering layer may evaluate them in any order or in parallel.

use anyhow::Result;
use contracts::dashboards::d100_regional_overview::{DashboardControls, RegionYearSelection};
use contracts::projections::p100_orders::fields;
use contracts::shared::query::{CellValue, FilterPredicate, Measure, QuerySpec, ResultTable};

use crate::projections::p100_orders::Dataset;
use crate::shared::query::engine;

/// Value domains for the year slider and region dropdown
pub fn controls(dataset: &Dataset) -> DashboardControls {
    DashboardControls {
        years: dataset.years(),
        regions: dataset.regions(),
    }
}

fn selection_filters(selection: &RegionYearSelection) -> Vec<FilterPredicate> {
    vec![
        FilterPredicate::equals(
            fields::ORDER_YEAR,
            CellValue::Integer(selection.year as i64),
        ),
        FilterPredicate::equals(fields::REGION, CellValue::Text(selection.region.clone())),
    ]
}

fn run(
    dataset: &Dataset,
    selection: &RegionYearSelection,
    group_by: &str,
    measures: Vec<Measure>,
) -> Result<ResultTable> {
    let spec = QuerySpec {
        filters: selection_filters(selection),
        group_by: group_by.to_string(),
        measures,
    };
    Ok(engine::aggregate(dataset, &spec)?)
}

/// Sales per order month (line chart)
pub fn monthly_sales_trend(
    dataset: &Dataset,
    selection: &RegionYearSelection,
) -> Result<ResultTable> {
    run(
        dataset,
        selection,
        fields::ORDER_MONTH,
        vec![Measure::sum(fields::SALES)],
    )
}

/// Sales share per category (donut chart)
pub fn category_sales_share(
    dataset: &Dataset,
    selection: &RegionYearSelection,
) -> Result<ResultTable> {
    run(
        dataset,
        selection,
        fields::CATEGORY,
        vec![Measure::sum(fields::SALES)],
    )
}

/// Sales per sub-category (bar chart)
pub fn subcategory_sales_bars(
    dataset: &Dataset,
    selection: &RegionYearSelection,
) -> Result<ResultTable> {
    run(
        dataset,
        selection,
        fields::SUB_CATEGORY,
        vec![Measure::sum(fields::SALES)],
    )
}

/// Profit per order month (line chart)
pub fn monthly_profit_trend(
    dataset: &Dataset,
    selection: &RegionYearSelection,
) -> Result<ResultTable> {
    run(
        dataset,
        selection,
        fields::ORDER_MONTH,
        vec![Measure::sum(fields::PROFIT)],
    )
}

/// Profit share per category (donut chart)
pub fn category_profit_share(
    dataset: &Dataset,
    selection: &RegionYearSelection,
) -> Result<ResultTable> {
    run(
        dataset,
        selection,
        fields::CATEGORY,
        vec![Measure::sum(fields::PROFIT)],
    )
}

/// Profit per sub-category (bar chart)
pub fn subcategory_profit_bars(
    dataset: &Dataset,
    selection: &RegionYearSelection,
) -> Result<ResultTable> {
    run(
        dataset,
        selection,
        fields::SUB_CATEGORY,
        vec![Measure::sum(fields::PROFIT)],
    )
}

/// Sales and profit per customer segment (grouped bar chart)
pub fn segment_sales_vs_profit(
    dataset: &Dataset,
    selection: &RegionYearSelection,
) -> Result<ResultTable> {
    run(
        dataset,
        selection,
        fields::SEGMENT,
        vec![Measure::sum(fields::SALES), Measure::sum(fields::PROFIT)],
    )
}
