//! Integration tests for export visitors.

use docvisit::model::{Document, Image, Paragraph, Table};
use docvisit::render::{
    to_html, to_html_document, to_json, to_markdown, to_pdf, HtmlExportVisitor, JsonFormat,
    PdfExportVisitor,
};
use docvisit::visitor::Visitable;

fn create_sample_document() -> Document {
    Document::new("Annual Report (New)")
        .with_element(Paragraph::new("This is the annual report."))
        .with_element(Image::new("chart_new.png", 800, 600))
        .with_element(Table::new(2, 2))
}

#[test]
fn test_html_single_image() {
    let doc = Document::new("T").with_element(Image::new("x.png", 10, 20));
    assert_eq!(
        to_html(&doc),
        "<img src='x.png' width='10' height='20' alt='' />"
    );
}

#[test]
fn test_html_full_document() {
    let html = to_html(&create_sample_document());
    assert_eq!(
        html,
        "<p style='font-family:Arial;font-size:12px'>This is the annual report.</p>\
         <img src='chart_new.png' width='800' height='600' alt='' />\
         <table><tr><td>Cell 0,0</td><td>Cell 0,1</td></tr>\
         <tr><td>Cell 1,0</td><td>Cell 1,1</td></tr></table>"
    );
}

#[test]
fn test_html_custom_font_and_alt() {
    let doc = Document::new("T")
        .with_element(Paragraph::new("Hi").with_font_family("Georgia").with_font_size(18))
        .with_element(Image::new("a.png", 1, 2).with_alt("Logo"));
    let html = to_html(&doc);
    assert!(html.starts_with("<p style='font-family:Georgia;font-size:18px'>Hi</p>"));
    assert!(html.ends_with("alt='Logo' />"));
}

#[test]
fn test_html_reflects_mutated_cells() {
    let mut table = Table::new(1, 1);
    table.cells[0][0] = "Revenue".into();
    table.cells.push(vec!["A".into(), "B".into()]);

    let mut visitor = HtmlExportVisitor::new();
    table.accept(&mut visitor);
    assert_eq!(
        visitor.html(),
        "<table><tr><td>Revenue</td></tr><tr><td>A</td><td>B</td></tr></table>"
    );
}

#[test]
fn test_html_document_has_title() {
    let page = to_html_document(&create_sample_document());
    assert!(page.starts_with("<html><head><title>Annual Report (New)</title></head><body>"));
    assert!(page.ends_with("</table></body></html>"));
}

#[test]
fn test_pdf_tokens_have_trailing_space() {
    let pdf = to_pdf(&create_sample_document());
    assert_eq!(
        pdf,
        "PDF_TEXT(This is the annual report., Arial, 12) \
         PDF_IMAGE(chart_new.png, 800, 600) \
         PDF_TABLE(2, 2, data...) "
    );
}

#[test]
fn test_pdf_visitor_accumulates_across_documents() {
    let mut visitor = PdfExportVisitor::new();
    Document::new("A")
        .with_element(Paragraph::new("one"))
        .accept(&mut visitor);
    Document::new("B")
        .with_element(Paragraph::new("two"))
        .accept(&mut visitor);
    assert_eq!(
        visitor.pdf(),
        "PDF_TEXT(one, Arial, 12) PDF_TEXT(two, Arial, 12) "
    );
}

#[test]
fn test_markdown_document() {
    let md = to_markdown(&create_sample_document());
    assert!(md.starts_with("This is the annual report.\n\n"));
    assert!(md.contains("![](chart_new.png)\n\n"));
    assert!(md.contains("| Cell 0,0 | Cell 0,1 |\n| --- | --- |\n| Cell 1,0 | Cell 1,1 |\n"));
}

#[test]
fn test_json_reload_preserves_document() {
    let doc = create_sample_document();
    let json = to_json(&doc, JsonFormat::Pretty).unwrap();
    let back = docvisit::parse_json(&json).unwrap();
    assert_eq!(back, doc);
}
