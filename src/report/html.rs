//! Self-contained HTML report.

use chrono::{DateTime, Utc};

use crate::report::{ReportRow, fmt_rate};

const TITLE: &str = "Exchange Rates Report";

const STYLE: &str = r#"        body {
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            max-width: 800px;
            margin: 50px auto;
            padding: 20px;
            background-color: #f5f5f5;
        }
        h1 {
            color: #333;
            text-align: center;
            margin-bottom: 30px;
        }
        table {
            width: 100%;
            border-collapse: collapse;
            background-color: white;
            box-shadow: 0 2px 4px rgba(0, 0, 0, 0.1);
        }
        th {
            background-color: #4CAF50;
            color: white;
            padding: 12px;
            text-align: left;
            font-weight: bold;
        }
        td {
            padding: 10px 12px;
            border-bottom: 1px solid #ddd;
        }
        tr:hover {
            background-color: #f5f5f5;
        }
        .footer {
            text-align: center;
            margin-top: 20px;
            color: #666;
            font-size: 14px;
        }
"#;

/// Render the full report document.
pub fn render_html(rows: &[ReportRow], generated_at: DateTime<Utc>) -> String {
    let mut out = String::new();

    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("    <meta charset=\"UTF-8\">\n");
    out.push_str("    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    out.push_str(&format!("    <title>{TITLE}</title>\n"));
    out.push_str("    <style>\n");
    out.push_str(STYLE);
    out.push_str("    </style>\n</head>\n<body>\n");
    out.push_str(&format!("    <h1>{TITLE}</h1>\n"));
    out.push_str(&render_table(rows));
    out.push_str("    <div class=\"footer\">\n");
    out.push_str("        <p>Exchange rates relative to EUR | Source: European Central Bank</p>\n");
    out.push_str(&format!(
        "        <p>Generated {}</p>\n",
        generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    out.push_str("    </div>\n</body>\n</html>\n");

    out
}

fn render_table(rows: &[ReportRow]) -> String {
    let mut out = String::new();
    out.push_str("    <table class=\"rate-table\">\n");
    out.push_str("        <thead>\n            <tr>\n");
    for header in ["Currency Code", "Rate", "Mean Historical Rate"] {
        out.push_str(&format!("                <th>{header}</th>\n"));
    }
    out.push_str("            </tr>\n        </thead>\n        <tbody>\n");

    for row in rows {
        out.push_str("            <tr>\n");
        out.push_str(&format!("                <td>{}</td>\n", escape(row.currency.as_str())));
        out.push_str(&format!("                <td>{}</td>\n", fmt_rate(row.rate)));
        out.push_str(&format!(
            "                <td>{}</td>\n",
            fmt_rate(row.mean_historical_rate)
        ));
        out.push_str("            </tr>\n");
    }

    out.push_str("        </tbody>\n    </table>\n");
    out
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn row(code: &str, rate: Option<f64>, mean: Option<f64>) -> ReportRow {
        ReportRow {
            currency: code.parse().unwrap(),
            rate,
            mean_historical_rate: mean,
        }
    }

    #[test]
    fn renders_rows_in_given_order_with_na() {
        let rows = vec![
            row("USD", Some(1.085), Some(1.09)),
            row("SEK", None, Some(11.2)),
            row("GBP", Some(0.86), None),
        ];
        let at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let html = render_html(&rows, at);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Exchange Rates Report</title>"));
        assert!(html.contains("<th>Mean Historical Rate</th>"));
        assert!(html.contains("<td>1.0850</td>"));
        assert!(html.contains("<td>1.0900</td>"));
        assert!(html.contains("Generated 2024-01-02 03:04:05 UTC"));

        let usd = html.find("<td>USD</td>").unwrap();
        let sek = html.find("<td>SEK</td>").unwrap();
        let gbp = html.find("<td>GBP</td>").unwrap();
        assert!(usd < sek && sek < gbp);
        assert_eq!(html.matches("<td>N/A</td>").count(), 2);
    }

    #[test]
    fn escape_handles_markup() {
        assert_eq!(escape("<a & 'b'>"), "&lt;a &amp; &#39;b&#39;&gt;");
    }
}
