//! Document link extraction from listing-page HTML.
//!
//! `LinkExtractor` is the seam: the pipeline only needs "HTML in, candidate
//! hrefs out". `HtmlLinkExtractor` does it with `scraper`.

use scraper::{Html, Selector};

/// Pulls candidate document paths out of an HTML page, in document order.
pub trait LinkExtractor {
    fn extract(&self, html: &str) -> Vec<String>;
}

/// True if `href` ends with `extension`, ignoring ASCII case. Raw string only:
/// `x.pdf?v=1` and `x.pdf#p2` do not match `.pdf`.
pub fn has_extension(href: &str, extension: &str) -> bool {
    if extension.is_empty() || href.len() < extension.len() {
        return false;
    }
    let tail = &href.as_bytes()[href.len() - extension.len()..];
    tail.eq_ignore_ascii_case(extension.as_bytes())
}

/// Selects `<a href>` elements whose `href` ends with the configured extension.
#[derive(Debug, Clone)]
pub struct HtmlLinkExtractor {
    extension: String,
    anchors: Selector,
}

impl HtmlLinkExtractor {
    pub fn new(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
            // Static selector; parse cannot fail.
            anchors: Selector::parse("a[href]").expect("static selector"),
        }
    }
}

impl LinkExtractor for HtmlLinkExtractor {
    fn extract(&self, html: &str) -> Vec<String> {
        let document = Html::parse_document(html);
        document
            .select(&self.anchors)
            .filter_map(|el| el.value().attr("href"))
            .filter(|href| has_extension(href, &self.extension))
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pdfs(html: &str) -> Vec<String> {
        HtmlLinkExtractor::new(".pdf").extract(html)
    }

    #[test]
    fn keeps_pdf_links_in_document_order() {
        let html = r#"
            <html><body>
              <a href="/forms/fl100.pdf">FL-100</a>
              <a href="/forms.htm">Index</a>
              <div><a href="https://www.courts.ca.gov/documents/fl105.pdf">FL-105</a></div>
              <a href="/forms/fl110.docx">Word</a>
              <a href="/forms/fl120.pdf">FL-120</a>
            </body></html>
        "#;
        assert_eq!(
            pdfs(html),
            vec![
                "/forms/fl100.pdf",
                "https://www.courts.ca.gov/documents/fl105.pdf",
                "/forms/fl120.pdf",
            ]
        );
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        let html = r#"<a href="/a.PDF">a</a><a href="/b.Pdf">b</a><a href="/c.pdf">c</a>"#;
        assert_eq!(pdfs(html), vec!["/a.PDF", "/b.Pdf", "/c.pdf"]);
    }

    #[test]
    fn query_and_fragment_are_not_stripped() {
        let html = r#"<a href="/a.pdf?v=2">a</a><a href="/b.pdf#page=3">b</a><a href="/c.html">c</a>"#;
        assert!(pdfs(html).is_empty());
    }

    #[test]
    fn anchors_without_href_ignored() {
        let html = r#"<a name="fl100.pdf">x</a><a>fl100.pdf</a><link href="/style.pdf">"#;
        assert!(pdfs(html).is_empty());
    }

    #[test]
    fn duplicates_are_kept() {
        let html = r#"<a href="/x.pdf">1</a><a href="/x.pdf">2</a>"#;
        assert_eq!(pdfs(html), vec!["/x.pdf", "/x.pdf"]);
    }

    #[test]
    fn other_extension_filter() {
        let html = r#"<a href="/a.pdf">a</a><a href="/b.DOCX">b</a>"#;
        assert_eq!(HtmlLinkExtractor::new(".docx").extract(html), vec!["/b.DOCX"]);
    }

    #[test]
    fn has_extension_edges() {
        assert!(has_extension("x.pdf", ".pdf"));
        assert!(has_extension(".pdf", ".pdf"));
        assert!(!has_extension("pdf", ".pdf"));
        assert!(!has_extension("", ".pdf"));
        assert!(!has_extension("x.pdf", ""));
        assert!(!has_extension("/fl100.pdf.html", ".pdf"));
    }

    #[test]
    fn has_extension_multibyte_href() {
        assert!(has_extension("/formulário.pdf", ".pdf"));
        assert!(!has_extension("é", ".pdf"));
    }
}
