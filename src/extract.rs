//! CSS selector-based extraction
//!
//! Uses the scraper crate to parse HTML and select elements. Extraction is
//! purely functional over the parsed tree.

use scraper::{Html, Selector};

use crate::error::{HqueryError, Result};

/// Parse HTML into a document. The parse is permissive: malformed or
/// non-HTML input still yields a (possibly empty) tree.
pub fn parse_document(html: &str) -> Html {
    Html::parse_document(html)
}

/// Compile a CSS selector, surfacing bad syntax as a typed error.
pub fn compile_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| HqueryError::QuerySyntax {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}

/// Extract one field per matched element, in document order.
///
/// When `attribute` is set and present on the element its raw value is
/// taken, otherwise the element's concatenated descendant text. Either way
/// the field is trimmed of surrounding whitespace.
pub fn extract(document: &Html, selector: &Selector, attribute: Option<&str>) -> Vec<String> {
    document
        .select(selector)
        .map(|el| {
            let field = attribute
                .filter(|a| !a.is_empty())
                .and_then(|a| el.value().attr(a))
                .map(String::from)
                .unwrap_or_else(|| el.text().collect::<String>());
            field.trim().to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(html: &str, selector: &str, attribute: Option<&str>) -> Vec<String> {
        let document = parse_document(html);
        let selector = compile_selector(selector).unwrap();
        extract(&document, &selector, attribute)
    }

    #[test]
    fn test_extract_text() {
        let html = "<ul><li>A</li><li>B</li></ul>";
        assert_eq!(run(html, "li", None), vec!["A", "B"]);
    }

    #[test]
    fn test_extract_attribute() {
        let html = r#"<a href="http://x" title="T">Link</a>"#;
        assert_eq!(run(html, "a", Some("title")), vec!["T"]);
    }

    #[test]
    fn test_missing_attribute_falls_back_to_text() {
        let html = r#"<a href="http://x">  Link  </a>"#;
        assert_eq!(run(html, "a", Some("title")), vec!["Link"]);
    }

    #[test]
    fn test_attribute_value_is_raw_not_text() {
        let html = r#"<a href="/product/123" class="link">Product</a>"#;
        assert_eq!(run(html, ".link", Some("href")), vec!["/product/123"]);
    }

    #[test]
    fn test_zero_matches_is_empty() {
        let html = "<div class=\"price\">$19.99</div>";
        assert!(run(html, ".missing", None).is_empty());
    }

    #[test]
    fn test_document_order() {
        let html = r#"
        <html>
        <body>
            <div class="price">$19.99</div>
            <div class="price">$29.99</div>
        </body>
        </html>
        "#;
        assert_eq!(run(html, ".price", None), vec!["$19.99", "$29.99"]);
    }

    #[test]
    fn test_descendant_text_concatenated() {
        let html = r#"
        <div class="product">
            <span class="name">Product A</span>
            <span class="unit-price">€1.50/kg</span>
        </div>
        "#;
        let fields = run(html, "div.product .unit-price", None);
        assert_eq!(fields, vec!["€1.50/kg"]);
    }

    #[test]
    fn test_text_is_trimmed() {
        let html = "<p>\n\t  spaced out  \n</p>";
        assert_eq!(run(html, "p", None), vec!["spaced out"]);
    }

    #[test]
    fn test_invalid_selector() {
        let err = compile_selector("li[").unwrap_err();
        assert!(matches!(err, HqueryError::QuerySyntax { .. }));
    }
}
