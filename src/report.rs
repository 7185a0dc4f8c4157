//! Shipment Report
//!
//! Caller-facing view of a solved shipment: serialisable for JSON responses and
//! printable as a terminal table.

use std::io;

use serde::{Deserialize, Serialize};
use tabled::{
    builder::Builder,
    settings::{Alignment, Color, Style, object::Columns, object::Rows},
};
use thiserror::Error;

use crate::{
    packs::PackSizes,
    shipment::{PackQuantity, Shipment},
};

/// Errors that can occur when writing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialisation error
    #[error("Failed to serialise report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result of a calculation along with the pack sizes it used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentReport {
    /// Requested items
    pub items: u64,

    /// Pack sizes available to the calculation, ascending
    pub pack_sizes: PackSizes,

    /// Packs used, ascending by pack size
    pub solution: Vec<PackQuantity>,

    /// Items shipped across all packs
    pub total_items: u64,

    /// Items shipped beyond the request
    pub extra_items: u64,
}

impl ShipmentReport {
    /// Build a report for a shipment solved against `pack_sizes`.
    pub fn new(pack_sizes: PackSizes, shipment: &Shipment) -> Self {
        Self {
            items: shipment.items(),
            pack_sizes,
            solution: shipment.packs().to_vec(),
            total_items: shipment.total_items(),
            extra_items: shipment.extra_items(),
        }
    }

    /// Write the report as a single line of JSON.
    ///
    /// # Errors
    ///
    /// Returns a [`ReportError`] if serialisation or writing fails.
    pub fn write_json(&self, mut out: impl io::Write) -> Result<(), ReportError> {
        serde_json::to_writer(&mut out, self)?;
        writeln!(out)?;

        Ok(())
    }

    /// Write the report as a table followed by a summary.
    ///
    /// # Errors
    ///
    /// Returns a [`ReportError`] if writing fails.
    pub fn write_table(&self, mut out: impl io::Write) -> Result<(), ReportError> {
        let mut builder = Builder::default();

        builder.push_record(["Pack", "Quantity", "Items"]);

        for entry in &self.solution {
            builder.push_record([
                entry.pack.to_string(),
                entry.quantity.to_string(),
                entry.pack.saturating_mul(entry.quantity).to_string(),
            ]);
        }

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Rows::first(), Color::BOLD);
        table.modify(Columns::new(0..3), Alignment::right());

        writeln!(out, "\n{table}")?;

        let rows = [
            (" Requested:", self.items),
            (" Shipped:", self.total_items),
            (" Extra:", self.extra_items),
        ];

        let value_width = rows
            .iter()
            .map(|(_, value)| value.to_string().len())
            .max()
            .unwrap_or_default();

        for (label, value) in rows {
            writeln!(out, "{label:<12}{value:>value_width$}")?;
        }

        writeln!(out, " Pack sizes: {}", self.pack_sizes)?;

        Ok(())
    }
}
