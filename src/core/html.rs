// src/core/html.rs
// Thin helpers over `scraper` so page specs stay readable.

use scraper::{ElementRef, Selector};

use crate::error::{Result, ScrapeError};

pub fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ScrapeError::Selector {
        selector: s!(css),
        reason: e.to_string(),
    })
}

/// Visible text of an element, whitespace collapsed.
pub fn text_of(el: ElementRef<'_>) -> String {
    let raw: String = el.text().collect::<Vec<_>>().join(" ");
    super::sanitize::normalize_ws(&raw)
}

/// Text of the first match of `sel` under `el`, if it has any.
pub fn first_text(el: ElementRef<'_>, sel: &Selector) -> Option<String> {
    el.select(sel)
        .next()
        .map(text_of)
        .filter(|t| !t.is_empty())
}

/// First `<a>` under `el` whose visible text contains `needle`.
pub fn find_link_with<'a>(el: ElementRef<'a>, links: &Selector, needle: &str) -> Option<ElementRef<'a>> {
    el.select(links).find(|a| text_of(*a).contains(needle))
}

pub fn has_class(el: ElementRef<'_>, class: &str) -> bool {
    el.value().classes().any(|c| c.eq_ignore_ascii_case(class))
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn text_is_normalized() {
        let doc = Html::parse_fragment("<div><h4>  Ada <b>Obi</b>\n </h4></div>");
        let h4 = selector("h4").unwrap();
        let root = doc.root_element();
        assert_eq!(first_text(root, &h4).as_deref(), Some("Ada Obi"));
    }

    #[test]
    fn link_lookup_by_text() {
        let doc = Html::parse_fragment(r#"<div><a>Office: Ikeja</a><a>Mobile: 080</a></div>"#);
        let a = selector("a").unwrap();
        let hit = find_link_with(doc.root_element(), &a, "Mobile:").unwrap();
        assert_eq!(text_of(hit), "Mobile: 080");
        assert!(find_link_with(doc.root_element(), &a, "Status:").is_none());
    }

    #[test]
    fn bad_selector_is_an_error() {
        assert!(matches!(selector("div[["), Err(ScrapeError::Selector { .. })));
    }
}
