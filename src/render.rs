//! HTML rendering of the ledger
//!
//! Builds the ledger table markup: one `<tr>` per record, a placeholder
//! row for the empty ledger, and the total line. Every user-supplied cell
//! goes through [`escape_html`].

use crate::view::{LedgerView, EMPTY_MESSAGE};

/// Escape the five HTML-significant characters.
///
/// `&` must be replaced first.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

/// Table-body rows, or the single placeholder row when the ledger is empty.
///
/// Each delete button carries the record id in `data-id`.
pub fn render_table_body(view: &LedgerView) -> String {
    if view.is_empty() {
        return format!(
            "<tr><td colspan=\"6\" class=\"empty-message\">{}</td></tr>",
            EMPTY_MESSAGE
        );
    }

    view.rows
        .iter()
        .map(|row| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
                 <td><button class=\"delete-btn\" data-id=\"{}\">Supprimer</button></td></tr>",
                escape_html(&row.date),
                escape_html(&row.quantity),
                escape_html(&row.cement_type),
                escape_html(&row.supplier),
                escape_html(&row.comment),
                escape_html(&row.id),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Table body plus the total line, the two regions that change on every
/// mutation
pub fn render_fragment(view: &LedgerView) -> String {
    format!(
        "<tbody id=\"tableBody\">\n{}\n</tbody>\n<div id=\"totalDisplay\">{}</div>",
        render_table_body(view),
        view.total_label(),
    )
}
