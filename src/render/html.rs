//! HTML export.

use crate::model::{Document, Image, Paragraph, Table};
use crate::visitor::{DocumentVisitor, Visitable};

/// Convert a document's elements to an HTML fragment.
pub fn to_html(doc: &Document) -> String {
    let mut visitor = HtmlExportVisitor::new();
    doc.accept(&mut visitor);
    visitor.into_html()
}

/// Convert a document to a full HTML page with the title in `<head>`.
pub fn to_html_document(doc: &Document) -> String {
    wrap_html_page(&doc.title, &to_html(doc))
}

/// Wrap an HTML fragment in a page with the given title.
pub fn wrap_html_page(title: &str, body: &str) -> String {
    format!(
        "<html><head><title>{}</title></head><body>{}</body></html>",
        title, body
    )
}

/// Appends HTML markup for each visited element.
///
/// Contributions are concatenated with no separators. Text and attribute
/// values are interpolated as-is unless escaping is turned on.
#[derive(Debug, Clone, Default)]
pub struct HtmlExportVisitor {
    html: String,
    escape: bool,
}

impl HtmlExportVisitor {
    /// Create a visitor with an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable escaping of text and attribute values.
    pub fn with_escaping(mut self, escape: bool) -> Self {
        self.escape = escape;
        self
    }

    /// Markup accumulated so far.
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Consume the visitor and return the markup.
    pub fn into_html(self) -> String {
        self.html
    }

    fn value<'a>(&self, raw: &'a str) -> std::borrow::Cow<'a, str> {
        if self.escape {
            escape_html(raw).into()
        } else {
            raw.into()
        }
    }
}

impl DocumentVisitor for HtmlExportVisitor {
    fn visit_paragraph(&mut self, paragraph: &Paragraph) {
        let p = format!(
            "<p style='font-family:{};font-size:{}px'>{}</p>",
            self.value(&paragraph.font_family),
            paragraph.font_size,
            self.value(&paragraph.text)
        );
        self.html.push_str(&p);
    }

    fn visit_image(&mut self, image: &Image) {
        let img = format!(
            "<img src='{}' width='{}' height='{}' alt='{}' />",
            self.value(&image.url),
            image.width,
            image.height,
            self.value(&image.alt)
        );
        self.html.push_str(&img);
    }

    fn visit_table(&mut self, table: &Table) {
        let mut out = String::from("<table>");
        for row in &table.cells {
            out.push_str("<tr>");
            for cell in row {
                out.push_str("<td>");
                out.push_str(&self.value(cell));
                out.push_str("</td>");
            }
            out.push_str("</tr>");
        }
        out.push_str("</table>");
        self.html.push_str(&out);
    }
}

/// Escape characters that are special in HTML text and quoted attributes.
fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}
