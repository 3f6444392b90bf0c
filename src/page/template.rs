//! Page template rendering
//!
//! The page is a fixed HTML skeleton compiled into the binary, with a single
//! `{{author}}` placeholder substituted at render time. Keeping the skeleton
//! as a static asset avoids runtime template dependencies; rendering the same
//! author twice yields byte-identical output.

use crate::{Error, Result};

/// Fixed page title, also present in the skeleton's `<title>` and `<h1>`
pub const PAGE_TITLE: &str = "Random Earth Teleporter";

/// Placeholder token substituted with the author credit
const AUTHOR_PLACEHOLDER: &str = "{{author}}";

/// The HTML skeleton, embedded at compile time
const INDEX_TEMPLATE: &str = include_str!("../../templates/index.html");

/// Render the index page with the given author credit.
///
/// The author value is HTML-escaped before substitution. Fails if the
/// skeleton has lost its placeholder, which the handler surfaces as a 500.
pub fn render_index(author: &str) -> Result<String> {
    render_template(INDEX_TEMPLATE, author)
}

/// Substitute the author placeholder into an arbitrary skeleton
fn render_template(template: &str, author: &str) -> Result<String> {
    if !template.contains(AUTHOR_PLACEHOLDER) {
        return Err(Error::template(format!(
            "placeholder '{}' not found in page template",
            AUTHOR_PLACEHOLDER
        )));
    }

    Ok(template.replace(AUTHOR_PLACEHOLDER, &escape_html(author)))
}

/// Minimal HTML escaping for text content interpolated into the page
fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
