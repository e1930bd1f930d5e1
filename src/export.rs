//! Flat-file export of aggregate tables and result sets.
//!
//! Two formats: a delimited table of aggregate rows, and a JSON tree of the
//! full result set preserving the `AnalysisResult` field names.

use std::fs;
use std::path::Path;

use crate::aggregate::AggregateRow;
use crate::errors::AnalyzeResult;
use crate::results::DocumentResults;

const CSV_HEADER: &str = "Document,Algorithm,Matches,Total Keywords,\
Relevance Score (%),Execution Time (ms),Comparisons,Matched Keywords,Missing Keywords";

/// Renders aggregate rows as delimited text with a header row
pub fn to_csv(rows: &[AggregateRow]) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');

    for row in rows {
        out.push_str(&format!(
            "{},{},{},{},{:.2},{:.3},{},{},{}\n",
            csv_field(&row.document),
            row.algorithm,
            row.matches,
            row.total_keywords,
            row.relevance_score,
            row.execution_time,
            row.comparisons,
            csv_field(&row.matched_keywords),
            csv_field(&row.missing_keywords),
        ));
    }

    out
}

/// Quotes a field that contains the delimiter, a quote, or a newline
fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Writes the aggregate table to `path` as CSV
pub fn write_csv(path: &Path, rows: &[AggregateRow]) -> AnalyzeResult<()> {
    fs::write(path, to_csv(rows))?;
    Ok(())
}

/// Writes the full result set to `path` as pretty-printed JSON
pub fn write_json(path: &Path, results: &DocumentResults) -> AnalyzeResult<()> {
    let json = serde_json::to_string_pretty(results)?;
    fs::write(path, json)?;
    Ok(())
}
