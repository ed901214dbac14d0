//! 調査結果の表示とJSON出力

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tasacion_common::format::{listing_line, valuation_summary};
use tasacion_common::{Listing, ParsedTable, RejectedRow, Session, SessionOptions, Valuation};

/// JSON出力の1件
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportedListing {
    #[serde(flatten)]
    pub listing: Listing,
    pub parsed_hours: Option<u64>,
    pub parsed_price: Option<u64>,
    pub url: String,
    pub selected: bool,
}

/// JSON出力全体
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanReport {
    pub scanned_at: String,
    pub target_hours: u64,
    pub tolerance_hours: u64,
    pub parsed_rows: usize,
    pub rejected_rows: Vec<RejectedRow>,
    pub listings: Vec<ReportedListing>,
    pub valuation: Option<Valuation>,
}

impl ScanReport {
    pub fn from_session(session: &Session, options: &SessionOptions, scanned_at: String) -> Self {
        let listings = session
            .listings
            .iter()
            .map(|l| ReportedListing {
                listing: l.clone(),
                parsed_hours: l.parsed_hours(),
                parsed_price: l.parsed_price(),
                url: l.url(),
                selected: session.selection.is_selected(&l.id),
            })
            .collect();

        Self {
            scanned_at,
            target_hours: session.target_hours.value(),
            tolerance_hours: options.filter.tolerance_hours,
            parsed_rows: session.table.len(),
            rejected_rows: session.table.rejected.clone(),
            listings,
            valuation: session.valuation(options),
        }
    }

    pub fn selected_count(&self) -> usize {
        self.listings.iter().filter(|l| l.selected).count()
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

/// 現在時刻付きでセッションを書き出す（テーブル無し・全件除外でも書く）
pub fn save_scan_report(session: &Session, options: &SessionOptions, path: &Path) -> Result<()> {
    let scanned_at = chrono::Local::now().to_rfc3339();
    ScanReport::from_session(session, options, scanned_at).write(path)?;
    println!("✔ Resultado guardado: {}", path.display());
    Ok(())
}

/// パース結果（絞込み前）を表示
pub fn print_parse_report(table: &ParsedTable) {
    println!("Líneas de tabla: {}", table.table_lines);
    if !table.has_table() {
        println!("⚠ No se pudo extraer una tabla estructurada.");
        return;
    }

    println!("Columnas: {}", table.headers.join(" | "));
    println!("Filas aceptadas: {}", table.len());
    for listing in &table.listings {
        println!("  {}", listing_line(listing, false));
    }

    if !table.rejected.is_empty() {
        println!("Filas descartadas: {}", table.rejected.len());
        for row in &table.rejected {
            println!(
                "  línea {}: {} celdas (se esperaban {}) → {}",
                row.line_number, row.found_cells, row.expected_cells, row.line
            );
        }
    }
}

/// 絞込み後の一覧を選択状態付きで表示
pub fn print_listings(session: &Session) {
    for listing in &session.listings {
        let mark = if session.selection.is_selected(&listing.id) { "[x]" } else { "[ ]" };
        println!("  {} {}", mark, listing_line(listing, false));
    }
    println!(
        "\n### Anuncios seleccionados: {}",
        session.selection.count_selected(&session.listings)
    );
}

/// 評価額を表示（件数不足なら警告）
pub fn print_valuation(valuation: Option<&Valuation>, min_sample: usize, symbol: &str) {
    match valuation {
        Some(v) => {
            println!("## Valoración");
            for line in valuation_summary(v, symbol) {
                println!("  {}", line);
            }
        }
        None => {
            println!(
                "⚠ Se necesitan al menos {} anuncios seleccionados con precio válido para calcular la media.",
                min_sample
            );
        }
    }
}
