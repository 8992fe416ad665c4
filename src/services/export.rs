//! CSV export of a tab's tables
//!
//! The source material's data grids come with a CSV download; here the
//! equivalent is writing every table in the active tab to timestamped
//! files in the working directory.

use crate::model::{TabModel, TableSpec, ViewSpec};
use anyhow::{Context, Result};
use chrono::Local;
use std::path::{Path, PathBuf};

/// Write every table in `tab` to its own CSV file under `dir`.
/// Returns the paths written; a tab with no tables writes nothing.
pub fn export_tab_tables(tab: &TabModel, dir: &Path) -> Result<Vec<PathBuf>> {
    let stamp = Local::now().format("%Y%m%d-%H%M%S");
    let mut written = Vec::new();

    for (i, table) in tables_of(tab).iter().enumerate() {
        let path = dir.join(format!("{}-{}-{}.csv", tab.id, stamp, i + 1));
        write_table(table, &path)?;
        written.push(path);
    }

    Ok(written)
}

/// All tables in the tab, in section and item order.
fn tables_of(tab: &TabModel) -> Vec<&TableSpec> {
    tab.sections
        .iter()
        .flat_map(|section| &section.items)
        .filter_map(|item| match item {
            ViewSpec::Table(table) => Some(table),
            _ => None,
        })
        .collect()
}

fn write_table(table: &TableSpec, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    writer.write_record(&table.columns)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sample_model;
    use std::fs;

    #[test]
    fn test_export_writes_one_file_per_table() {
        let model = sample_model();
        let land = model.tab("land").unwrap();
        let dir = std::env::temp_dir().join("lending_tui_export_test");
        fs::create_dir_all(&dir).unwrap();

        let written = export_tab_tables(land, &dir).unwrap();
        // The land tab carries two tables
        assert_eq!(written.len(), 2);

        let contents = fs::read_to_string(&written[0]).unwrap();
        let mut lines = contents.lines();
        assert_eq!(lines.next().unwrap(), "Localidad,Hectáreas,Tipo,Estado");
        // Quoted because of the embedded comma in the number
        assert!(contents.contains("Hale"));

        for path in written {
            fs::remove_file(path).ok();
        }
        fs::remove_dir(dir).ok();
    }

    #[test]
    fn test_tab_without_tables_writes_nothing() {
        let tab = TabModel {
            id: "empty".to_string(),
            label: "Empty".to_string(),
            icon: None,
            sections: vec![],
        };
        let written = export_tab_tables(&tab, &std::env::temp_dir()).unwrap();
        assert!(written.is_empty());
    }
}
