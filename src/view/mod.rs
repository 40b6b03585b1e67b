//! HTML rendering of the diagnostic and error pages.
//!
//! Views only format data they are given. Templates are `maud` markup, so
//! every interpolated value is HTML-escaped.

mod error;
mod index;

pub use error::render_error;
pub use index::{render_index, IndexPage};

use maud::{html, Markup, PreEscaped, DOCTYPE};

const STYLE: &str = "body{font-family:system-ui,sans-serif;margin:2rem;color:#222}\
h1{margin-bottom:.2rem}\
section{margin-top:1.5rem}\
table{border-collapse:collapse;width:100%}\
th,td{border:1px solid #ddd;padding:.35rem .6rem;text-align:left;vertical-align:top}\
th{background:#f3f3f3;width:18rem}\
td{font-family:ui-monospace,monospace;word-break:break-all}\
.muted{color:#777}";

/// Wrap `body` in a complete HTML document.
fn document(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (title) }
                style { (PreEscaped(STYLE)) }
            }
            body { (body) }
        }
    }
}

/// Two-column table of key/value rows.
fn kv_table<'a, I>(rows: I) -> Markup
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    html! {
        table {
            @for (key, value) in rows {
                tr {
                    th { (key) }
                    td { (value) }
                }
            }
        }
    }
}
