//! Built-in sample dashboard: the OneClick Lending borrower profile
//!
//! Used when no model file is configured. Every number and label here is
//! supplied data, including the approval verdict: the dashboard renders
//! it verbatim and derives nothing.

use crate::model::{
    ChartKind, ChartSpec, DashboardModel, MetricSpec, MetricStatus, PanelSectionModel,
    SectionLayout, Series, TabModel, TableSpec, ViewSpec,
};

fn metric(label: &str, value: &str, delta: Option<&str>, status: Option<MetricStatus>) -> ViewSpec {
    ViewSpec::Metric(MetricSpec {
        label: label.to_string(),
        value: value.to_string(),
        delta: delta.map(str::to_string),
        status,
    })
}

fn table(columns: &[&str], rows: &[&[&str]]) -> ViewSpec {
    ViewSpec::Table(TableSpec {
        columns: columns.iter().map(|c| c.to_string()).collect(),
        rows: rows
            .iter()
            .map(|row| row.iter().map(|c| c.to_string()).collect())
            .collect(),
    })
}

fn series(name: &str, color: &str, categories: &[&str], values: &[f64]) -> Series {
    Series {
        name: name.to_string(),
        categories: categories.iter().map(|c| c.to_string()).collect(),
        values: values.to_vec(),
        color: Some(color.to_string()),
    }
}

fn section(heading: Option<&str>, layout: SectionLayout, items: Vec<ViewSpec>) -> PanelSectionModel {
    PanelSectionModel {
        heading: heading.map(str::to_string),
        layout,
        items,
    }
}

const MONTHS: &[&str] = &[
    "Ene", "Feb", "Mar", "Abr", "May", "Jun", "Jul", "Ago", "Sep", "Oct", "Nov", "Dic",
];

fn summary_tab() -> TabModel {
    TabModel {
        id: "summary".to_string(),
        label: "Resumen".to_string(),
        icon: Some("📈".to_string()),
        sections: vec![
            section(
                None,
                SectionLayout::MultiColumn(2),
                vec![
                    metric("Score Nosis", "650", Some("Observado"), Some(MetricStatus::Warning)),
                    metric("Créditos Totales", "$88,512", Some("4 créditos"), None),
                    metric("Ranking DCAC", "#15 de 10,000", None, None),
                    metric("Estado Actual", "Al día", None, Some(MetricStatus::Good)),
                ],
            ),
            section(
                Some("Estado de Aprobación"),
                SectionLayout::SingleColumn,
                vec![metric(
                    "Resultado",
                    "NO APROBADO",
                    Some("Cumple con 7 de 8 métricas (88%)"),
                    Some(MetricStatus::Critical),
                )],
            ),
            section(
                Some("Métricas detalladas"),
                SectionLayout::SingleColumn,
                vec![table(
                    &["Métrica", "Estado", "Valor"],
                    &[
                        &["Transacciones", "Límite", "En límite"],
                        &["Pagos - Créditos", "Límite", "En límite"],
                        &["Créditos en Bancos", "OK", "2"],
                        &["Deuda/Activos", "OK", "4.3%"],
                        &["Deuda/Stock cría", "Límite", "25%"],
                        &["Servicio de deuda", "Crítico", "1"],
                    ],
                )],
            ),
        ],
    }
}

fn credits_tab() -> TabModel {
    TabModel {
        id: "credits".to_string(),
        label: "Créditos".to_string(),
        icon: Some("💰".to_string()),
        sections: vec![
            section(
                Some("Historial Crediticio"),
                SectionLayout::MultiColumn(2),
                vec![
                    metric("Tasa promedio", "50%", None, None),
                    metric("Total en créditos", "$88,512", None, None),
                    metric("Demora promedio", "+8 días", None, Some(MetricStatus::Warning)),
                    metric("Promedio por crédito", "$22,128", None, None),
                ],
            ),
            section(
                Some("Pagos"),
                SectionLayout::SingleColumn,
                vec![ViewSpec::Chart(ChartSpec {
                    kind: ChartKind::Pie,
                    series: vec![Series {
                        name: "Pagos".to_string(),
                        categories: vec!["A Término".to_string(), "Con Demora".to_string()],
                        values: vec![2.0, 2.0],
                        color: None,
                    }],
                })],
            ),
            section(
                Some("Evolución de Transacciones"),
                SectionLayout::SingleColumn,
                vec![ViewSpec::Chart(ChartSpec {
                    kind: ChartKind::Bar,
                    series: vec![series(
                        "Transacciones",
                        "#4a86e8",
                        &["2019", "2020", "2021", "2022", "2023", "2024"],
                        &[800.0, 5000.0, 8000.0, 10000.0, 12500.0, 15000.0],
                    )],
                })],
            ),
        ],
    }
}

fn land_tab() -> TabModel {
    TabModel {
        id: "land".to_string(),
        label: "Campos".to_string(),
        icon: Some("🏞".to_string()),
        sections: vec![
            section(
                Some("Activos Inmobiliarios"),
                SectionLayout::MultiColumn(3),
                vec![
                    metric("Total hectáreas", "5,534", None, None),
                    metric("Hectáreas agrícolas", "3,319", None, None),
                    metric("Valor estimado", "$10.6M USD", None, None),
                ],
            ),
            section(
                Some("Detalle de Campos"),
                SectionLayout::SingleColumn,
                vec![table(
                    &["Localidad", "Hectáreas", "Tipo", "Estado"],
                    &[
                        &["Hale", "2,300", "Mixto", "Propio"],
                        &["Carmen de Areco", "232", "Agrícola", "Propio"],
                        &["Olavarría", "982", "Mixto", "En arrendamiento"],
                        &["Mari Lauquen", "1,920", "Mixto", "Propio"],
                    ],
                )],
            ),
            section(
                Some("Valuación de Campos"),
                SectionLayout::SingleColumn,
                vec![table(
                    &["Campo", "$/ha agrícola", "Valor Total"],
                    &[
                        &["Hale", "$6,750", "$8.1M"],
                        &["Carmen de Areco", "$12,500", "$2.9M"],
                    ],
                )],
            ),
        ],
    }
}

fn livestock_tab() -> TabModel {
    TabModel {
        id: "livestock".to_string(),
        label: "Hacienda".to_string(),
        icon: Some("🐄".to_string()),
        sections: vec![
            section(
                Some("Stock Ganadero"),
                SectionLayout::MultiColumn(3),
                vec![
                    metric("Total cabezas", "8,388", None, None),
                    metric("Valor total", "$3.6M USD", None, None),
                    metric("Valor stock cría", "$2.2M USD", None, None),
                ],
            ),
            section(
                Some("Composición del Stock"),
                SectionLayout::SingleColumn,
                vec![table(
                    &["Categoría", "Cantidad", "Valor USD"],
                    &[
                        &["Vacas", "2,905", "$1.6M"],
                        &["Vaquillonas", "1,547", "$1.0M"],
                        &["Novillos", "1,046", "$0.9M"],
                        &["Terneros", "1,416", "$0.7M"],
                        &["Terneras", "1,374", "$0.5M"],
                        &["Otros", "100", "$0.1M"],
                    ],
                )],
            ),
        ],
    }
}

fn flows_tab() -> TabModel {
    TabModel {
        id: "flows".to_string(),
        label: "Flujos".to_string(),
        icon: Some("💵".to_string()),
        sections: vec![
            section(
                Some("Flujo de Fondos"),
                SectionLayout::MultiColumn(2),
                vec![
                    metric("Ingresos totales", "$4.0M", None, None),
                    metric("Resultado neto", "$638K", Some("+18.8%"), Some(MetricStatus::Good)),
                    metric("Egresos totales", "$3.4M", None, None),
                    metric("Necesidad de crédito", "$547K", None, None),
                ],
            ),
            section(
                Some("Flujo Mensual"),
                SectionLayout::SingleColumn,
                vec![ViewSpec::Chart(ChartSpec {
                    kind: ChartKind::GroupedBar,
                    series: vec![
                        series(
                            "Ingresos",
                            "#00cc00",
                            MONTHS,
                            &[
                                0.0, 1613.0, 1357.0, 423.0, 0.0, 0.0, 0.0, 203.0, 162.0, 0.0,
                                0.0, 249.0,
                            ],
                        ),
                        series(
                            "Egresos",
                            "#ff6666",
                            MONTHS,
                            &[
                                122.0, 732.0, 486.0, 258.0, 82.0, 173.0, 78.0, 198.0, 547.0,
                                100.0, 337.0, 253.0,
                            ],
                        ),
                    ],
                })],
            ),
            section(
                Some("Ratios Financieros"),
                SectionLayout::SingleColumn,
                vec![table(
                    &["Indicador", "Valor"],
                    &[
                        &["Deuda/Activo total", "3.8%"],
                        &["Deuda/Stock cría", "25%"],
                        &["Deuda/Campo", "5.1%"],
                        &["Garantías reales", "$12.8M USD"],
                    ],
                )],
            ),
        ],
    }
}

/// Build the full sample model. Infallible by construction; the unit
/// test below keeps that promise honest.
pub fn sample_model() -> DashboardModel {
    DashboardModel::new(
        "OneClick Lending",
        "Font Mercedes Isabel - CUIT: 27-03770388-0",
        vec![
            summary_tab(),
            credits_tab(),
            land_tab(),
            livestock_tab(),
            flows_tab(),
        ],
        "Abril 2025 | deCampo Campo & Riverwood Ag",
    )
    .expect("sample model is valid")
}
