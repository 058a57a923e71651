use cysafe_common::error::{CysafeError, CysafeResult};
use cysafe_db::reports::models::ScamReport;

/// CSV export of the report log, newest first as given.
pub fn format_reports_csv(reports: &[ScamReport]) -> CysafeResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record([
            "id",
            "scam_url",
            "scam_type",
            "how_received",
            "details",
            "contact_email",
            "date_submitted",
        ])
        .map_err(|e| CysafeError::Internal(e.to_string()))?;

    for report in reports {
        writer
            .write_record([
                report.id.to_string().as_str(),
                report.scam_url.as_str(),
                report.scam_type.as_str(),
                report.how_received.map(|r| r.as_str()).unwrap_or(""),
                report.details.as_str(),
                report.contact_email.as_deref().unwrap_or(""),
                report.date_submitted.to_rfc3339().as_str(),
            ])
            .map_err(|e| CysafeError::Internal(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| CysafeError::Internal(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| CysafeError::Internal(e.to_string()))
}

/// Escape user-supplied text for embedding in HTML.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn nl2br(escaped: &str) -> String {
    escaped.replace("\r\n", "<br />").replace('\n', "<br />")
}

/// The "Latest Reported Scams" table as an HTML fragment. Every cell is
/// escaped; newlines in the details column become `<br />`.
pub fn format_reports_table(reports: &[ScamReport]) -> String {
    let mut out = String::from(
        "<table>\n<thead>\n<tr>\
         <th>Scam Link / Sender</th>\
         <th>Type</th>\
         <th>How Received</th>\
         <th>Details</th>\
         <th>Contact Email</th>\
         <th>Reported</th>\
         </tr>\n</thead>\n<tbody>\n",
    );

    for report in reports {
        out.push_str("<tr>");
        push_cell(&mut out, &escape_html(&report.scam_url));
        push_cell(&mut out, report.scam_type.as_str());
        push_cell(
            &mut out,
            report.how_received.map(|r| r.as_str()).unwrap_or(""),
        );
        push_cell(&mut out, &nl2br(&escape_html(&report.details)));
        push_cell(
            &mut out,
            &escape_html(report.contact_email.as_deref().unwrap_or("")),
        );
        push_cell(&mut out, &report.date_submitted.to_rfc3339());
        out.push_str("</tr>\n");
    }

    out.push_str("</tbody>\n</table>\n");
    out
}

fn push_cell(out: &mut String, content: &str) {
    out.push_str("<td>");
    out.push_str(content);
    out.push_str("</td>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use cysafe_db::reports::models::{HowReceived, ScamType};

    fn report(url: &str, details: &str) -> ScamReport {
        ScamReport {
            id: 1,
            scam_url: url.to_string(),
            scam_type: ScamType::PhishingEmail,
            how_received: Some(HowReceived::Email),
            details: details.to_string(),
            contact_email: None,
            date_submitted: Utc::now(),
        }
    }

    #[test]
    fn csv_has_header_and_one_row_per_report() {
        let csv = format_reports_csv(&[report("http://paypa1.com", "Fake login page.")])
            .expect("csv");
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines[0],
            "id,scam_url,scam_type,how_received,details,contact_email,date_submitted"
        );
        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with("1,http://paypa1.com,phishing_email,email,"));
    }

    #[test]
    fn csv_empty_log_is_header_only() {
        let csv = format_reports_csv(&[]).expect("csv");
        assert_eq!(csv.lines().count(), 1);
    }

    #[test]
    fn csv_quotes_fields_containing_commas() {
        let csv = format_reports_csv(&[report("http://x.example", "first, second")])
            .expect("csv");
        assert!(csv.contains("\"first, second\""));
    }

    #[test]
    fn escape_html_neutralizes_markup() {
        assert_eq!(
            escape_html("<script>alert('x')</script>"),
            "&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"
        );
        assert_eq!(escape_html("a & b \"c\""), "a &amp; b &quot;c&quot;");
    }

    #[test]
    fn table_escapes_cells_and_breaks_detail_lines() {
        let html = format_reports_table(&[report(
            "http://evil.example/<img>",
            "line one\nline two",
        )]);
        assert!(html.contains("http://evil.example/&lt;img&gt;"));
        assert!(html.contains("line one<br />line two"));
        assert!(!html.contains("<img>"));
    }
}
