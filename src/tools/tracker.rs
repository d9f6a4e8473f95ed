//! Food tracker tool
//!
//! Add, remove, and clear operations over the food log, plus the full-table
//! redraw used after every mutation.

use serde::Serialize;

use crate::energy::{round_to, EnergyUnit};
use crate::models::{FoodEntry, FoodLog, LogTotals};

use super::parse_finite;

const TABLE_HEADER: [&str; 5] = ["#", "Food", "Amount", "kcal", "kJ"];

/// Raw field values from a tracker add submission
#[derive(Debug, Clone)]
pub struct AddEntryFields {
    pub name: String,
    pub amount: String,
    pub energy: String,
    pub unit: EnergyUnit,
}

/// Response for a successful add
#[derive(Debug, Serialize)]
pub struct AddEntryResponse {
    pub position: usize,
    pub name: String,
    pub amount: Option<String>,
    pub kcal: f64,
    pub totals: LogTotals,
}

/// Response for a successful remove
#[derive(Debug, Serialize)]
pub struct RemoveEntryResponse {
    pub position: usize,
    pub name: String,
    pub kcal: f64,
    pub totals: LogTotals,
}

/// Response for a clear
#[derive(Debug, Serialize)]
pub struct ClearResponse {
    pub removed: usize,
    pub totals: LogTotals,
}

/// One displayed table row
#[derive(Debug, Serialize)]
pub struct TableRow {
    pub position: usize,
    pub name: String,
    pub amount: Option<String>,
    pub kcal: f64,
    pub kj: f64,
}

/// The full table plus running totals
#[derive(Debug, Serialize)]
pub struct TableResponse {
    pub entries: Vec<TableRow>,
    pub totals: LogTotals,
}

/// Add an entry to the log, normalizing its energy to kilocalories
///
/// Returns None without touching the log when the trimmed name is empty or
/// the energy text is not a finite number. The caller prints nothing in that
/// case; the submission simply does not go through.
pub fn add_entry(log: &mut FoodLog, fields: &AddEntryFields) -> Option<AddEntryResponse> {
    let name = fields.name.trim();
    let energy = match (name.is_empty(), parse_finite(&fields.energy)) {
        (false, Some(e)) => e,
        _ => {
            tracing::debug!(name = %name, energy = %fields.energy, "add skipped: invalid entry");
            return None;
        }
    };

    let amount = fields.amount.trim();
    let amount = if amount.is_empty() {
        None
    } else {
        Some(amount.to_string())
    };

    let entry = FoodEntry::new(name.to_string(), amount.clone(), energy, fields.unit);
    let kcal = entry.kcal;
    log.add(entry);

    Some(AddEntryResponse {
        position: log.len(),
        name: name.to_string(),
        amount,
        kcal,
        totals: log.totals(),
    })
}

/// Remove the entry at a 1-based position in the displayed table
///
/// Positions always refer to the current table, so repeated removals must
/// each use a fresh position. Returns None when the position is out of range.
pub fn remove_entry(log: &mut FoodLog, position: usize) -> Option<RemoveEntryResponse> {
    let entry = log.remove(position)?;
    Some(RemoveEntryResponse {
        position,
        name: entry.name,
        kcal: entry.kcal,
        totals: log.totals(),
    })
}

/// Empty the log in one action
pub fn clear_entries(log: &mut FoodLog) -> ClearResponse {
    let removed = log.len();
    log.clear();
    ClearResponse {
        removed,
        totals: log.totals(),
    }
}

/// Build the full table from current log state
pub fn table(log: &FoodLog) -> TableResponse {
    let entries = log
        .entries()
        .iter()
        .enumerate()
        .map(|(idx, entry)| TableRow {
            position: idx + 1,
            name: entry.name.clone(),
            amount: entry.amount.clone(),
            kcal: entry.kcal,
            kj: entry.kj(),
        })
        .collect();

    TableResponse {
        entries,
        totals: log.totals(),
    }
}

impl TableResponse {
    /// Render the table as text, energies rounded to one decimal
    pub fn render(&self) -> String {
        let rows: Vec<[String; 5]> = self
            .entries
            .iter()
            .map(|row| {
                [
                    row.position.to_string(),
                    row.name.clone(),
                    row.amount.clone().unwrap_or_default(),
                    format!("{:.1}", round_to(row.kcal, 1)),
                    format!("{:.1}", round_to(row.kj, 1)),
                ]
            })
            .collect();

        let mut widths = TABLE_HEADER.map(str::len);
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row.iter()) {
                *width = (*width).max(cell.len());
            }
        }

        let mut out = String::new();
        out.push_str(&format_row(&TABLE_HEADER.map(String::from), &widths));
        out.push('\n');
        for row in &rows {
            out.push_str(&format_row(row, &widths));
            out.push('\n');
        }
        out.push_str(&format!(
            "Total: {:.1} kcal ({:.1} kJ)",
            round_to(self.totals.kcal, 1),
            round_to(self.totals.kj, 1)
        ));
        out
    }
}

/// Format one row: position and energies right-aligned, text left-aligned
fn format_row(cells: &[String; 5], widths: &[usize; 5]) -> String {
    format!(
        "{:>w0$}  {:<w1$}  {:<w2$}  {:>w3$}  {:>w4$}",
        cells[0],
        cells[1],
        cells[2],
        cells[3],
        cells[4],
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2],
        w3 = widths[3],
        w4 = widths[4],
    )
}
