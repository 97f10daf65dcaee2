//! # HTML Rendering
//!
//! Renders a [`PreviewDocument`] as a standalone printable HTML page.
//! Layout is intentionally simple; the structure (header, bill-to block,
//! payment block, services table, totals, terms) is what matters here.
//! Every user-supplied string passes through [`escape`].

use std::fmt::Write;

use crate::document::PreviewDocument;

/// Stylesheet for the printed page. Kept in one place so the renderer
/// below is nothing but structure.
const STYLE: &str = "\
body { font-family: 'Segoe UI', Arial, sans-serif; color: #333; margin: 0; }\n\
.header { background: #000; color: #fff; padding: 40px 30px; }\n\
.header .tagline { color: #FFD700; font-size: 14px; }\n\
.header .address { color: #ccc; font-size: 12px; line-height: 1.4; }\n\
.header h1 { font-size: 36px; font-weight: 300; margin: 0; text-align: right; }\n\
.header .meta { text-align: right; font-size: 13px; color: #FFD700; }\n\
.body { padding: 30px; }\n\
.blocks { display: flex; gap: 30px; margin-bottom: 30px; }\n\
.block { background: #f5f5f5; padding: 20px; border-radius: 8px; flex: 1; }\n\
.block h4 { margin: 0 0 10px 0; font-size: 14px; }\n\
.block p { margin: 5px 0; font-size: 14px; }\n\
table { width: 100%; border-collapse: collapse; margin-bottom: 20px; }\n\
thead { background: #000; color: #fff; }\n\
th { padding: 15px; font-size: 12px; text-align: left; }\n\
th.num, td.num { text-align: right; }\n\
td { padding: 12px 15px; font-size: 14px; border-bottom: 1px solid #eee; }\n\
.totals { max-width: 300px; margin-left: auto; border: 1px solid #ddd; border-radius: 8px; }\n\
.totals .row { display: flex; justify-content: space-between; padding: 10px 15px; border-bottom: 1px solid #eee; }\n\
.totals .grand { background: #000; color: #fff; font-weight: bold; font-size: 16px; padding: 15px; }\n\
.terms { margin-top: 30px; font-size: 12px; color: #666; }\n";

/// Renders the full HTML page for a preview document.
pub fn render_html(doc: &PreviewDocument) -> String {
    let mut page = String::with_capacity(4096);

    page.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(page, "<title>Invoice {}</title>", escape(&doc.invoice_no));
    let _ = writeln!(page, "<style>\n{STYLE}</style>");
    page.push_str("</head>\n<body>\n");

    render_header(&mut page, doc);
    page.push_str("<div class=\"body\">\n");
    render_blocks(&mut page, doc);
    render_services_table(&mut page, doc);
    render_totals(&mut page, doc);
    let _ = writeln!(
        page,
        "<div class=\"terms\"><h4>TERMS AND CONDITIONS:</h4><p>{}</p></div>",
        escape(&doc.business.terms)
    );
    page.push_str("</div>\n</body>\n</html>\n");

    page
}

fn render_header(page: &mut String, doc: &PreviewDocument) {
    page.push_str("<div class=\"header\">\n");
    let _ = writeln!(page, "<div><strong>{}</strong></div>", escape(&doc.business.name));
    let _ = writeln!(
        page,
        "<div class=\"tagline\">{}</div>",
        escape(&doc.business.tagline)
    );
    page.push_str("<div class=\"address\">");
    for (i, line) in doc.business.address_lines.iter().enumerate() {
        if i != 0 {
            page.push_str("<br>");
        }
        page.push_str(&escape(line));
    }
    page.push_str("</div>\n<h1>INVOICE</h1>\n");
    let _ = writeln!(
        page,
        "<div class=\"meta\">{}<br>{}</div>",
        escape(&doc.invoice_no),
        escape(&doc.invoice_date)
    );
    page.push_str("</div>\n");
}

fn render_blocks(page: &mut String, doc: &PreviewDocument) {
    page.push_str("<div class=\"blocks\">\n<div class=\"block\">\n<h4>BILL TO:</h4>\n");
    let _ = writeln!(page, "<p><strong>{}</strong></p>", escape(&doc.client_name));
    let _ = writeln!(page, "<p>{}</p>", escape(&doc.client_address));
    let _ = writeln!(page, "<p>{}</p>", escape(&doc.client_email));
    page.push_str("</div>\n<div class=\"block\">\n<h4>PAYMENT INFORMATION:</h4>\n");
    let _ = writeln!(
        page,
        "<p><strong>Bank:</strong> {}</p>",
        escape(&doc.business.bank_name)
    );
    let _ = writeln!(
        page,
        "<p><strong>Name:</strong> {}</p>",
        escape(&doc.business.account_name)
    );
    let _ = writeln!(
        page,
        "<p><strong>Account:</strong> {}</p>",
        escape(&doc.business.account_number)
    );
    let _ = writeln!(
        page,
        "<p><strong>Invoice Date:</strong> {}</p>",
        escape(&doc.invoice_date)
    );
    let _ = writeln!(
        page,
        "<p><strong>Due Date:</strong> {}</p>",
        escape(&doc.due_date)
    );
    page.push_str("</div>\n</div>\n");
}

fn render_services_table(page: &mut String, doc: &PreviewDocument) {
    page.push_str(
        "<table>\n<thead>\n<tr><th>ITEM</th><th>DESCRIPTION</th>\
         <th class=\"num\">RATE</th><th class=\"num\">AMOUNT</th></tr>\n</thead>\n<tbody>\n",
    );
    for row in &doc.rows {
        let _ = writeln!(
            page,
            "<tr><td>{}</td><td>{}</td><td class=\"num\">{}</td><td class=\"num\"><strong>{}</strong></td></tr>",
            row.item_no,
            escape(&row.description),
            escape(&row.rate),
            escape(&row.amount)
        );
    }
    page.push_str("</tbody>\n</table>\n");
}

fn render_totals(page: &mut String, doc: &PreviewDocument) {
    page.push_str("<div class=\"totals\">\n");
    let _ = writeln!(
        page,
        "<div class=\"row\"><span>Sub Total:</span><span>{}</span></div>",
        escape(&doc.subtotal)
    );
    let _ = writeln!(
        page,
        "<div class=\"row\"><span>Sales Tax:</span><span>{}</span></div>",
        escape(&doc.sales_tax)
    );
    let _ = writeln!(
        page,
        "<div class=\"row grand\"><span>TOTAL:</span><span>{}</span></div>",
        escape(&doc.grand_total)
    );
    page.push_str("</div>\n");
}

/// Escapes text for safe interpolation into HTML body and attribute
/// positions.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{BusinessProfile, PreviewDocument};
    use chrono::{NaiveDate, Utc};
    use naza_core::{InvoiceForm, ServiceLine};

    fn test_doc() -> PreviewDocument {
        let form = InvoiceForm {
            id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
            invoice_no: "INV-26-412".to_string(),
            invoice_date: NaiveDate::from_ymd_opt(2026, 8, 7),
            due_date: NaiveDate::from_ymd_opt(2026, 8, 14),
            client_name: "Tunde & Sons <Ltd>".to_string(),
            client_address: "12 Marina Road, Lagos".to_string(),
            client_email: "billing@tunde.example".to_string(),
            lines: vec![
                ServiceLine::new("Deep Cleaning", "₦1,500"),
                ServiceLine::new("Office Cleaning", "₦0"),
            ],
            created_at: Utc::now(),
        };
        PreviewDocument::build(&BusinessProfile::default(), &form)
    }

    #[test]
    fn test_render_contains_structure() {
        let html = render_html(&test_doc());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Invoice INV-26-412</title>"));
        assert!(html.contains("BILL TO:"));
        assert!(html.contains("PAYMENT INFORMATION:"));
        assert!(html.contains("TERMS AND CONDITIONS:"));
    }

    #[test]
    fn test_render_escapes_client_text() {
        let html = render_html(&test_doc());
        assert!(html.contains("Tunde &amp; Sons &lt;Ltd&gt;"));
        assert!(!html.contains("<Ltd>"));
    }

    #[test]
    fn test_render_totals_block() {
        let html = render_html(&test_doc());
        assert!(html.contains("<span>Sub Total:</span><span>₦1,500</span>"));
        assert!(html.contains("<span>Sales Tax:</span><span>₦0</span>"));
        assert!(html.contains("<span>TOTAL:</span><span>₦1,500</span>"));
    }

    #[test]
    fn test_render_skips_zero_rows() {
        let html = render_html(&test_doc());
        assert!(html.contains("Deep Cleaning"));
        assert!(!html.contains("Office Cleaning"));
    }
}
