//! Declarative dashboard model
//!
//! Everything the dashboard displays is described here as plain data:
//! tabs hold sections, sections hold view specs, view specs are metrics,
//! tables, or charts. Rendering never computes a value; it only lays out
//! what the model carries. Models are validated atomically at
//! construction so every view function downstream is total.

use crate::error::ModelValidationError;
use serde::{Deserialize, Serialize};

/// Root value object. Immutable once constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardModel {
    pub title: String,
    pub subtitle: String,
    pub tabs: Vec<TabModel>,
    pub footer: String,
}

/// One named tab holding an ordered list of panel sections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabModel {
    /// Unique within the model
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub icon: Option<String>,
    pub sections: Vec<PanelSectionModel>,
}

/// A titled group of views laid out in one or more columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelSectionModel {
    #[serde(default)]
    pub heading: Option<String>,
    #[serde(default)]
    pub layout: SectionLayout,
    pub items: Vec<ViewSpec>,
}

/// Column layout for a section's items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionLayout {
    #[default]
    SingleColumn,
    MultiColumn(usize),
}

impl SectionLayout {
    /// Number of equal-width tracks the items distribute into.
    pub fn tracks(&self) -> usize {
        match self {
            SectionLayout::SingleColumn => 1,
            SectionLayout::MultiColumn(n) => (*n).max(1),
        }
    }
}

/// One displayable unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ViewSpec {
    Metric(MetricSpec),
    Table(TableSpec),
    Chart(ChartSpec),
}

/// A labeled value with optional delta annotation and status treatment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricSpec {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub delta: Option<String>,
    #[serde(default)]
    pub status: Option<MetricStatus>,
}

/// Closed status enum so rendering stays a total function.
/// Free-form strings are rejected at deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricStatus {
    Good,
    Warning,
    Critical,
}

/// Display-only grid: named columns over ordered rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableSpec {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Declarative chart description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub series: Vec<Series>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Pie,
    Bar,
    GroupedBar,
}

/// One named data series over ordered categories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    pub categories: Vec<String>,
    pub values: Vec<f64>,
    /// Optional `#rrggbb` color; default palette applies when absent
    #[serde(default)]
    pub color: Option<String>,
}

impl DashboardModel {
    /// Validating constructor. Fails atomically: either every invariant
    /// holds and a model is returned, or the first violation is reported
    /// and nothing is built.
    pub fn new(
        title: impl Into<String>,
        subtitle: impl Into<String>,
        tabs: Vec<TabModel>,
        footer: impl Into<String>,
    ) -> Result<Self, ModelValidationError> {
        let model = Self {
            title: title.into(),
            subtitle: subtitle.into(),
            tabs,
            footer: footer.into(),
        };
        model.validate()?;
        Ok(model)
    }

    /// Re-check all invariants. Used by the file loaders, which build
    /// the struct through serde and cannot go through `new`.
    pub fn validate(&self) -> Result<(), ModelValidationError> {
        if self.tabs.is_empty() {
            return Err(ModelValidationError::NoTabs);
        }

        let mut seen = Vec::with_capacity(self.tabs.len());
        for tab in &self.tabs {
            if seen.contains(&tab.id.as_str()) {
                return Err(ModelValidationError::DuplicateTabId(tab.id.clone()));
            }
            seen.push(&tab.id);

            for section in &tab.sections {
                for item in &section.items {
                    validate_item(&tab.id, item)?;
                }
            }
        }
        Ok(())
    }

    /// Look up a tab by id.
    pub fn tab(&self, id: &str) -> Option<&TabModel> {
        self.tabs.iter().find(|t| t.id == id)
    }
}

fn validate_item(tab_id: &str, item: &ViewSpec) -> Result<(), ModelValidationError> {
    match item {
        ViewSpec::Metric(_) => Ok(()),
        ViewSpec::Table(table) => {
            for row in &table.rows {
                if row.len() != table.columns.len() {
                    return Err(ModelValidationError::RowWidthMismatch {
                        tab: tab_id.to_string(),
                        columns: table.columns.len(),
                        cells: row.len(),
                    });
                }
            }
            Ok(())
        }
        ViewSpec::Chart(chart) => validate_chart(tab_id, chart),
    }
}

fn validate_chart(tab_id: &str, chart: &ChartSpec) -> Result<(), ModelValidationError> {
    for series in &chart.series {
        if series.categories.len() != series.values.len() {
            return Err(ModelValidationError::SeriesLengthMismatch {
                series: series.name.clone(),
                categories: series.categories.len(),
                values: series.values.len(),
            });
        }
    }

    match chart.kind {
        // An empty series list is a legitimate "no data yet" chart,
        // so only a multi-series pie is rejected.
        ChartKind::Pie => {
            if chart.series.len() > 1 {
                return Err(ModelValidationError::PieSeriesCount {
                    tab: tab_id.to_string(),
                    found: chart.series.len(),
                });
            }
        }
        ChartKind::Bar => {}
        ChartKind::GroupedBar => {
            if let Some(first) = chart.series.first() {
                for series in &chart.series[1..] {
                    if series.categories != first.categories {
                        return Err(ModelValidationError::GroupedCategoryMismatch {
                            tab: tab_id.to_string(),
                        });
                    }
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tab(id: &str, items: Vec<ViewSpec>) -> TabModel {
        TabModel {
            id: id.to_string(),
            label: id.to_string(),
            icon: None,
            sections: vec![PanelSectionModel {
                heading: None,
                layout: SectionLayout::SingleColumn,
                items,
            }],
        }
    }

    fn series(name: &str, categories: &[&str], values: &[f64]) -> Series {
        Series {
            name: name.to_string(),
            categories: categories.iter().map(|c| c.to_string()).collect(),
            values: values.to_vec(),
            color: None,
        }
    }

    #[test]
    fn test_valid_model_constructs() {
        let model = DashboardModel::new(
            "Title",
            "Subtitle",
            vec![tab("summary", vec![]), tab("credits", vec![])],
            "footer",
        );
        assert!(model.is_ok());
    }

    #[test]
    fn test_duplicate_tab_ids_rejected() {
        let err = DashboardModel::new(
            "Title",
            "",
            vec![tab("summary", vec![]), tab("summary", vec![])],
            "",
        )
        .unwrap_err();
        assert_eq!(
            err,
            ModelValidationError::DuplicateTabId("summary".to_string())
        );
    }

    #[test]
    fn test_empty_tabs_rejected() {
        let err = DashboardModel::new("Title", "", vec![], "").unwrap_err();
        assert_eq!(err, ModelValidationError::NoTabs);
    }

    #[test]
    fn test_row_width_mismatch_rejected() {
        let table = ViewSpec::Table(TableSpec {
            columns: vec!["A".into(), "B".into(), "C".into()],
            rows: vec![vec!["1".into(), "2".into()]],
        });
        let err = DashboardModel::new("T", "", vec![tab("t", vec![table])], "").unwrap_err();
        assert!(matches!(
            err,
            ModelValidationError::RowWidthMismatch {
                columns: 3,
                cells: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_empty_table_rows_are_valid() {
        let table = ViewSpec::Table(TableSpec {
            columns: vec!["A".into(), "B".into()],
            rows: vec![],
        });
        assert!(DashboardModel::new("T", "", vec![tab("t", vec![table])], "").is_ok());
    }

    #[test]
    fn test_series_length_mismatch_rejected() {
        let chart = ViewSpec::Chart(ChartSpec {
            kind: ChartKind::Bar,
            series: vec![series("Transacciones", &["2023", "2024"], &[12500.0])],
        });
        let err = DashboardModel::new("T", "", vec![tab("t", vec![chart])], "").unwrap_err();
        assert!(matches!(
            err,
            ModelValidationError::SeriesLengthMismatch {
                categories: 2,
                values: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_grouped_bar_requires_shared_categories() {
        let ok = ViewSpec::Chart(ChartSpec {
            kind: ChartKind::GroupedBar,
            series: vec![
                series("Ingresos", &["Ene", "Feb"], &[0.0, 1613.0]),
                series("Egresos", &["Ene", "Feb"], &[122.0, 732.0]),
            ],
        });
        assert!(DashboardModel::new("T", "", vec![tab("t", vec![ok])], "").is_ok());

        let mismatched = ViewSpec::Chart(ChartSpec {
            kind: ChartKind::GroupedBar,
            series: vec![
                series("Ingresos", &["Ene", "Feb"], &[0.0, 1613.0]),
                series("Egresos", &["Ene"], &[122.0]),
            ],
        });
        let err =
            DashboardModel::new("T", "", vec![tab("t", vec![mismatched])], "").unwrap_err();
        assert!(matches!(
            err,
            ModelValidationError::GroupedCategoryMismatch { .. }
        ));
    }

    #[test]
    fn test_pie_rejects_multiple_series() {
        let chart = ViewSpec::Chart(ChartSpec {
            kind: ChartKind::Pie,
            series: vec![
                series("a", &["x"], &[1.0]),
                series("b", &["x"], &[2.0]),
            ],
        });
        let err = DashboardModel::new("T", "", vec![tab("t", vec![chart])], "").unwrap_err();
        assert!(matches!(
            err,
            ModelValidationError::PieSeriesCount { found: 2, .. }
        ));
    }

    #[test]
    fn test_empty_chart_series_is_valid() {
        let chart = ViewSpec::Chart(ChartSpec {
            kind: ChartKind::Pie,
            series: vec![],
        });
        assert!(DashboardModel::new("T", "", vec![tab("t", vec![chart])], "").is_ok());
    }

    #[test]
    fn test_status_rejects_free_form_strings() {
        let good: Result<MetricSpec, _> =
            serde_json::from_str(r#"{"label":"Score","value":"650","status":"warning"}"#);
        assert_eq!(good.unwrap().status, Some(MetricStatus::Warning));

        let bad: Result<MetricSpec, _> =
            serde_json::from_str(r#"{"label":"Score","value":"650","status":"observado"}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_tab_lookup() {
        let model =
            DashboardModel::new("T", "", vec![tab("summary", vec![]), tab("flows", vec![])], "")
                .unwrap();
        assert_eq!(model.tab("flows").unwrap().id, "flows");
        assert!(model.tab("missing").is_none());
    }
}
