//! CSV export of a section, with the same columns and cell texts as the
//! on-screen table.

use anyhow::Result;
use contracts::dashboards::d100_department_data::SectionData;
use contracts::shared::tabular::{derive_columns, ColumnOptions, TableView};

pub fn section_to_csv(section: &SectionData) -> Result<String> {
    let columns = derive_columns(&section.records, &ColumnOptions::default());
    let view = TableView::build(&section.title, &section.records, &columns);

    let mut writer = csv::Writer::from_writer(Vec::new());
    if let TableView::Table { headers, rows, .. } = view {
        writer.write_record(&headers)?;
        for row in rows {
            writer.write_record(row.cells.iter().map(|c| c.text.as_str()))?;
        }
    }

    let bytes = writer.into_inner().map_err(|e| anyhow::anyhow!("{}", e))?;
    Ok(String::from_utf8(bytes)?)
}

/// File name offered for download, e.g. "bzu-multan_lab_equipment.csv"
pub fn csv_file_name(department_slug: &str, section_key: &str) -> String {
    format!("{}_{}.csv", department_slug, section_key)
}
