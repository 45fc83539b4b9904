//! Plain-text and JSON rendering.

use std::io::Write;

use outlier_analysis::{Detection, MethodStats, OutlierReport};

use crate::loader::Table;

/// Write an aligned text table; each row carries the row number printed in
/// the leading column.
fn write_grid<W: Write>(
    out: &mut W,
    headers: &[String],
    rows: &[(usize, &[String])],
) -> std::io::Result<()> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    let index_width = rows
        .iter()
        .map(|(i, _)| i.to_string().len())
        .max()
        .unwrap_or(1)
        .max(1);
    for (_, row) in rows {
        for (col, cell) in row.iter().enumerate().take(widths.len()) {
            widths[col] = widths[col].max(cell.chars().count());
        }
    }

    write!(out, "{:>index_width$}", "")?;
    for (header, width) in headers.iter().zip(&widths) {
        write!(out, "  {header:>width$}")?;
    }
    writeln!(out)?;

    for (index, row) in rows {
        write!(out, "{index:>index_width$}")?;
        for (col, width) in widths.iter().enumerate() {
            let cell = row.get(col).map(String::as_str).unwrap_or("");
            write!(out, "  {cell:>width$}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// First `n` rows of the table.
pub fn write_preview<W: Write>(out: &mut W, table: &Table, n: usize) -> std::io::Result<()> {
    writeln!(out, "Preview of {}:", table.source)?;
    let rows: Vec<(usize, &[String])> = table
        .rows
        .iter()
        .take(n)
        .enumerate()
        .map(|(i, r)| (i, r.as_slice()))
        .collect();
    write_grid(out, &table.headers, &rows)
}

pub fn write_numeric_columns<W: Write>(out: &mut W, names: &[&str]) -> std::io::Result<()> {
    writeln!(out, "Numeric columns detected: {}", names.join(", "))
}

/// One-line summary of the statistics behind a detection.
pub fn describe_stats(stats: &MethodStats) -> String {
    match stats {
        MethodStats::ZScore(s) => format!("mean={:.4} std={:.4}", s.mean, s.std),
        MethodStats::Iqr(s) => format!(
            "q1={:.4} q3={:.4} iqr={:.4} lower={:.4} upper={:.4}",
            s.q1, s.q3, s.iqr, s.lower, s.upper
        ),
        MethodStats::ModifiedZScore(s) => {
            let mut line = format!("median={:.4} mad={:.4}", s.median, s.mad);
            if let Some(z) = &s.fallback {
                line.push_str(&format!(" (z-score fallback: mean={:.4} std={:.4})", z.mean, z.std));
            }
            line
        }
    }
}

/// Count, statistics, and the full rows of every flagged value.
pub fn write_detection_table<W: Write>(
    out: &mut W,
    table: &Table,
    column: &str,
    detection: &Detection,
) -> std::io::Result<()> {
    writeln!(out, "Column: {column} ({})", detection.method)?;
    writeln!(out, "Total outliers detected: {}", detection.outlier_count)?;
    writeln!(out, "Statistics: {}", describe_stats(&detection.stats))?;
    if detection.missing_count > 0 {
        writeln!(out, "Missing values skipped: {}", detection.missing_count)?;
    }
    if let Some(branch) = detection.degenerate {
        writeln!(out, "Note: degenerate spread ({branch})")?;
    }

    if detection.outlier_count == 0 {
        return Ok(());
    }

    writeln!(out)?;
    writeln!(out, "Outlier rows:")?;
    let rows: Vec<(usize, &[String])> = detection
        .flagged_indices()
        .filter_map(|i| table.rows.get(i).map(|r| (i, r.as_slice())))
        .collect();
    write_grid(out, &table.headers, &rows)
}

pub fn write_report_json<W: Write>(out: &mut W, report: &OutlierReport) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out).map_err(serde_json::Error::io)
}

#[cfg(test)]
mod tests {
    use outlier_analysis::{detect, Method};

    use super::*;

    fn table() -> Table {
        Table::from_reader(
            "city,temp\noslo,3\nrome,4\nlima,5\ncairo,4\nnome,90\n".as_bytes(),
            "inline",
        )
        .unwrap()
    }

    #[test]
    fn test_detection_table_lists_flagged_rows() {
        let t = table();
        let values = t.column_values(1).unwrap();
        let detection = detect(&values, Method::iqr()).unwrap();

        let mut buf = Vec::new();
        write_detection_table(&mut buf, &t, "temp", &detection).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("Total outliers detected: 1"));
        assert!(text.contains("nome"));
        assert!(!text.contains("oslo"));
        assert!(text.contains("q1="));
    }

    #[test]
    fn test_preview_limits_rows() {
        let mut buf = Vec::new();
        write_preview(&mut buf, &table(), 2).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("oslo"));
        assert!(text.contains("rome"));
        assert!(!text.contains("lima"));
    }

    #[test]
    fn test_describe_fallback() {
        let detection = detect(&[5.0, 5.0, 5.0, 5.0, 100.0], Method::modified_z_score(3.0)).unwrap();
        let line = describe_stats(&detection.stats);
        assert!(line.starts_with("median=5.0000 mad=0.0000"));
        assert!(line.contains("fallback: mean=24.0000 std=38.0000"));
    }
}
