// Tabular export: the detailed table plus the three summaries, one CSV
// file per sheet under a fixed output directory.
use std::fs;
use std::path::Path;

use crate::aggregate;
use crate::types::{Hit, Result};

pub const DETAIL_SHEET: &str = "dados_detalhados";
pub const CONDITION_SHEET: &str = "resumo_condicao";
pub const CATEGORY_SHEET: &str = "resumo_categoria";
pub const CROSS_SHEET: &str = "matriz_cruzada";

/// One exported table. The export layer only ever sees rows of strings;
/// all semantics live upstream.
pub struct Sheet {
    pub name: &'static str,
    pub header: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

impl Sheet {
    pub fn to_csv(&self) -> String {
        let mut csv = String::new();
        csv.push_str(&self.header.join(","));
        csv.push('\n');
        for row in &self.rows {
            let encoded: Vec<String> = row.iter().map(|f| csv_field(f)).collect();
            csv.push_str(&encoded.join(","));
            csv.push('\n');
        }
        csv
    }
}

/// Build the four sheets: one row per hit, then the three summaries.
/// Headers match the original coding spreadsheets.
pub fn build_workbook(hits: &[Hit]) -> Vec<Sheet> {
    let detail = Sheet {
        name: DETAIL_SHEET,
        header: vec!["Arquivo", "Condição", "Categoria", "Termo Encontrado", "Contagem"],
        rows: hits
            .iter()
            .map(|h| {
                vec![
                    h.document.clone(),
                    h.condition.clone(),
                    h.category.clone(),
                    h.term.clone(),
                    h.count.to_string(),
                ]
            })
            .collect(),
    };

    let condition = Sheet {
        name: CONDITION_SHEET,
        header: vec!["Condição", "Total", "Termos"],
        rows: aggregate::by_condition(hits)
            .into_iter()
            .map(|g| vec![g.label, g.total.to_string(), g.rows.to_string()])
            .collect(),
    };

    let category = Sheet {
        name: CATEGORY_SHEET,
        header: vec!["Categoria", "Total", "Termos"],
        rows: aggregate::by_category(hits)
            .into_iter()
            .map(|g| vec![g.label, g.total.to_string(), g.rows.to_string()])
            .collect(),
    };

    let cross = Sheet {
        name: CROSS_SHEET,
        header: vec!["Condição", "Categoria", "Quantidade"],
        rows: aggregate::cross_tab(hits)
            .into_iter()
            .map(|c| vec![c.condition, c.category, c.rows.to_string()])
            .collect(),
    };

    vec![detail, condition, category, cross]
}

/// Write every sheet as `<name>.csv` inside `dir`, creating it if needed.
pub fn write_workbook(sheets: &[Sheet], dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)?;
    for sheet in sheets {
        fs::write(dir.join(format!("{}.csv", sheet.name)), sheet.to_csv())?;
    }
    Ok(())
}

fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
