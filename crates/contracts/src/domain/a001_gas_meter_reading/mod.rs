pub mod aggregate;
pub mod chart;
pub mod columns;
pub mod derived;
pub mod query;

pub use aggregate::{GasMeterReading, ReadingId};
pub use chart::{assemble_chart_data, chart_config, ChartConfig, ChartData, ChartDataset};
pub use columns::{ColumnMeta, ColumnVisibility, COLUMNS};
pub use derived::{derive_fields, DerivedFields};
pub use query::{ListQuery, SortOrder};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Грид и график получают разные ответы и не зависят друг от друга
    #[test]
    fn grid_and_chart_render_from_independent_pages() {
        let grid_page: Vec<GasMeterReading> = serde_json::from_value(json!([
            {"id": 1, "delta_days": 2, "delta_counter": 5, "daily_average": 2.5}
        ]))
        .unwrap();
        let chart_page: Vec<GasMeterReading> = serde_json::from_value(json!([
            {"date": "2024-01-01T00:00:00Z", "daily_average": 2.5},
            {"date": "2024-01-02T00:00:00Z", "daily_average": 3.1}
        ]))
        .unwrap();

        assert_eq!(grid_page.len(), 1);
        let row = derive_fields(&grid_page[0]);
        assert_eq!(row.duration, "2 days");
        assert_eq!(row.volume_rate, "2.50");
        assert_eq!(row.cost_rate, "3.88 Euro");
        assert_eq!(row.daily_average, Some(2.5));

        let chart = assemble_chart_data(&chart_page);
        assert_eq!(
            chart.labels,
            vec!["2024-01-01T00:00:00.000Z", "2024-01-02T00:00:00.000Z"]
        );
        assert_eq!(chart.datasets.len(), 1);
        assert_eq!(chart.datasets[0].data, vec![Some(2.5), Some(3.1)]);
    }
}
