//! Plain-text rendering of catalogs and the compilation order.

use std::fmt::Write;

use prosedoc_core::{Compilation, DocumentType, JurisdictionEntry, MotionType};

const EMPTY_JURISDICTIONS: &str = "No jurisdictions match your search criteria.";
const EMPTY_COMPILATION: &str =
    "No documents added yet. Run `prosedoc generate` to create your first document.";

// ── Catalogs ──

pub fn render_jurisdictions(entries: &[JurisdictionEntry]) -> String {
    if entries.is_empty() {
        return format!("{EMPTY_JURISDICTIONS}\n");
    }
    let mut out = String::new();
    for entry in entries {
        let _ = writeln!(out, "  {:<8} {}", entry.kind().as_str(), entry.name);
    }
    out
}

pub fn render_motions(jurisdiction: &str, motions: &[&MotionType]) -> String {
    let mut out = format!("Motion types for {jurisdiction}\n");
    for motion in motions {
        let _ = writeln!(out, "  {:<26} {}", motion.id, motion.title);
        let _ = writeln!(out, "  {:<26} {}", "", motion.description);
    }
    out
}

pub fn render_document_types() -> String {
    let mut out = String::new();
    for t in DocumentType::ALL {
        let _ = writeln!(out, "  {:<10} {:<20} {}", t.id(), t.title(), t.description());
    }
    out
}

// ── Compilation ──

pub fn render_compilation(compilation: &Compilation) -> String {
    if compilation.is_empty() {
        return format!("{EMPTY_COMPILATION}\n");
    }
    let mut out = String::from("Table of contents\n");
    for (line, item) in compilation
        .table_of_contents()
        .iter()
        .zip(compilation.items())
    {
        let _ = writeln!(out, "  {:<40} [{}]", line, item.kind);
    }
    out
}
