//! Terminal output.
//!
//! Kept apart from the HTML renderer so console changes stay local.

use crate::report::{ReportRow, fmt_rate};

/// Format the report rows as a fixed-width text table.
pub fn format_summary(rows: &[ReportRow]) -> String {
    let mut out = String::new();

    out.push_str("=== fxref - Exchange Rates (EUR base) ===\n");
    out.push_str(
        format!("{:<14} {:>14} {:>22}\n", "Currency Code", "Rate", "Mean Historical Rate").trim_end(),
    );
    out.push('\n');
    out.push_str(format!("{:-<14} {:-<14} {:-<22}\n", "", "", "").trim_end());
    out.push('\n');

    for r in rows {
        out.push_str(
            format!(
                "{:<14} {:>14} {:>22}\n",
                r.currency.as_str(),
                fmt_rate(r.rate),
                fmt_rate(r.mean_historical_rate),
            )
            .trim_end(),
        );
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_lists_every_row() {
        let rows = vec![
            ReportRow {
                currency: "USD".parse().unwrap(),
                rate: Some(1.085),
                mean_historical_rate: Some(1.09),
            },
            ReportRow {
                currency: "JPY".parse().unwrap(),
                rate: None,
                mean_historical_rate: Some(157.3),
            },
        ];

        let text = format_summary(&rows);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[1].starts_with("Currency Code"));
        assert!(lines[3].starts_with("USD"));
        assert!(lines[3].ends_with("1.0900"));
        assert!(lines[4].contains("N/A"));
        assert!(lines[4].ends_with("157.3000"));
    }
}
