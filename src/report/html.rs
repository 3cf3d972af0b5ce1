//! HTML rendering of the fetched rows.

use crate::models::record::Record;

/// Header labels, in render order.
const HEADERS: [&str; 6] = [
    "ID",
    "Property Type",
    "Bedrooms",
    "Created By",
    "Created At",
    "Updated At",
];

/// Column names in the `test` table, matching HEADERS one to one.
/// Cells are resolved by these names; a column missing from the
/// projection renders as an empty cell, an extra one is ignored.
const COLUMNS: [&str; 6] = [
    "id",
    "propertyType",
    "bedrooms",
    "created_by",
    "created_at",
    "updated_at",
];

/// Escape a value for embedding in HTML. Applied to every cell of every
/// row, numeric columns included.
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the rows as an HTML fragment: one fixed header row plus one
/// row per record in fetch order, or the plain notice when the table
/// holds nothing.
pub fn render(records: &[Record]) -> String {
    if records.is_empty() {
        return "No records found.".to_string();
    }

    let mut out = String::from("<table border='1'>");

    out.push_str("<tr>");
    for header in HEADERS {
        out.push_str("<th>");
        out.push_str(header);
        out.push_str("</th>");
    }
    out.push_str("</tr>");

    for record in records {
        out.push_str("<tr>");
        for column in COLUMNS {
            out.push_str("<td>");
            out.push_str(&escape(record.get(column).unwrap_or("")));
            out.push_str("</td>");
        }
        out.push_str("</tr>");
    }

    out.push_str("</table>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_neutralizes_html_significant_characters() {
        assert_eq!(
            escape("<script>alert(\"x\")</script>"),
            "&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt;"
        );
        assert_eq!(escape("Tom & Jerry's"), "Tom &amp; Jerry&#039;s");
    }

    #[test]
    fn escape_leaves_plain_text_untouched() {
        assert_eq!(escape("Condo 2"), "Condo 2");
    }

    #[test]
    fn empty_result_set_renders_the_notice() {
        let out = render(&[]);
        assert_eq!(out, "No records found.");
        assert!(!out.contains("<table"));
    }

    #[test]
    fn one_record_renders_header_plus_one_row() {
        let rec = Record::new([
            ("id", "1"),
            ("propertyType", "Condo"),
            ("bedrooms", "2"),
            ("created_by", "alice"),
            ("created_at", "2024-01-01 00:00:00"),
            ("updated_at", "2024-01-02 00:00:00"),
        ]);
        let out = render(&[rec]);
        assert_eq!(out.matches("<tr>").count(), 2);
        assert!(out.starts_with("<table border='1'><tr><th>ID</th>"));
        assert!(out.contains(
            "<td>1</td><td>Condo</td><td>2</td><td>alice</td>\
             <td>2024-01-01 00:00:00</td><td>2024-01-02 00:00:00</td>"
        ));
    }

    #[test]
    fn missing_column_renders_an_empty_cell() {
        let rec = Record::new([("id", "7"), ("propertyType", "Loft")]);
        let out = render(&[rec]);
        assert!(out.contains("<td>7</td><td>Loft</td><td></td>"));
    }
}
