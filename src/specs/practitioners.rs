// src/specs/practitioners.rs
//
// Practitioner directory page.
//
// One card per practitioner:
//   <div class="feat_property home7 agent">
//     <h4>NAME</h4>
//     <a>Mobile: ...</a> <a>Office: ...</a> <a>Status: ...</a>
//     <a href="/cdn-cgi/l/email-protection#..."><span class="__cf_email__" data-cfemail="HEX">[email&#160;protected]</span></a>
//   </div>
// Pagination (paginationjs): <li class="paginationjs-next [disabled]">.
//
// Output columns: Name, Mobile, Email, Office, Status. Missing -> "N/A".

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::{
    config::consts::{NOT_AVAILABLE, PLACEHOLDER_EMAIL},
    core::{cfemail, html},
    error::Result,
};

pub const HEADERS: [&str; 5] = ["Name", "Mobile", "Email", "Office", "Status"];

const CARD: &str = "div.feat_property.home7.agent";
const NAME: &str = "h4";
const LINK: &str = "a";
const CF_EMAIL: &str = "span.__cf_email__";
const MAILTO: &str = r#"a[href^="mailto:"], a[href^="MAILTO:"]"#;
const NEXT: &str = "li.paginationjs-next";
const EMAIL_TEXT: &str = r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Practitioner {
    pub name: String,
    pub mobile: String,
    pub email: String,
    pub office: String,
    pub status: String,
}

impl Practitioner {
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.mobile.clone(),
            self.email.clone(),
            self.office.clone(),
            self.status.clone(),
        ]
    }
}

/// State of the pager's "next" control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NextPage {
    Available,
    Disabled,
    Missing,
}

#[derive(Clone, Debug)]
pub struct PageScan {
    pub records: Vec<Practitioner>,
    pub next: NextPage,
}

/// Which strategy produced the email; logged at debug level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmailSource {
    Cloudflare,
    PlainText,
    Mailto,
    None,
}

struct Selectors {
    card: Selector,
    name: Selector,
    link: Selector,
    cf_email: Selector,
    mailto: Selector,
    next: Selector,
    email_text: Regex,
}

impl Selectors {
    fn build() -> Result<Self> {
        Ok(Self {
            card: html::selector(CARD)?,
            name: html::selector(NAME)?,
            link: html::selector(LINK)?,
            cf_email: html::selector(CF_EMAIL)?,
            mailto: html::selector(MAILTO)?,
            next: html::selector(NEXT)?,
            email_text: Regex::new(EMAIL_TEXT)?,
        })
    }
}

/// Read every practitioner card and the pager state from one page.
pub fn scan_page(doc: &str) -> Result<PageScan> {
    let sel = Selectors::build()?;
    let dom = Html::parse_document(doc);

    let records: Vec<Practitioner> = dom
        .select(&sel.card)
        .enumerate()
        .map(|(i, card)| read_card(card, &sel, i + 1))
        .collect();

    let next = match dom.select(&sel.next).next() {
        None => NextPage::Missing,
        Some(li) if html::has_class(li, "disabled") => NextPage::Disabled,
        Some(_) => NextPage::Available,
    };

    Ok(PageScan { records, next })
}

fn read_card(card: ElementRef<'_>, sel: &Selectors, ix: usize) -> Practitioner {
    let name = html::first_text(card, &sel.name).unwrap_or_else(na);
    let mobile = labelled(card, sel, "Mobile:");
    let office = labelled(card, sel, "Office:");
    let status = labelled(card, sel, "Status:");

    let (email, how) = extract_email(card, sel, ix);
    tracing::debug!(card = ix, %name, %email, source = ?how, "card");

    Practitioner { name, mobile, email, office, status }
}

fn na() -> String { s!(NOT_AVAILABLE) }

fn labelled(card: ElementRef<'_>, sel: &Selectors, label: &str) -> String {
    html::find_link_with(card, &sel.link, label)
        .map(|a| crate::core::sanitize::strip_label(&html::text_of(a), label))
        .filter(|v| !v.is_empty())
        .unwrap_or_else(na)
}

/// Cloudflare token first, then plain text, then `mailto:` links.
fn extract_email(card: ElementRef<'_>, sel: &Selectors, ix: usize) -> (String, EmailSource) {
    for span in card.select(&sel.cf_email) {
        let Some(token) = span.value().attr(cfemail::ATTR) else { continue };
        match cfemail::decode(token) {
            Ok(addr) if usable(&addr) => return (addr, EmailSource::Cloudflare),
            Ok(addr) => tracing::debug!(card = ix, token, decoded = %addr, "skipping decoded email"),
            Err(e) => tracing::warn!(card = ix, "{e}"),
        }
    }

    let text = html::text_of(card);
    if let Some(m) = sel.email_text.find(&text) {
        return (s!(m.as_str()), EmailSource::PlainText);
    }

    if let Some(a) = card.select(&sel.mailto).next() {
        let addr = a.value().attr("href")
            .map(crate::core::sanitize::strip_mailto)
            .unwrap_or_default();
        if !addr.is_empty() {
            return (addr, EmailSource::Mailto);
        }
    }

    (na(), EmailSource::None)
}

fn usable(addr: &str) -> bool {
    let a = addr.trim();
    !a.is_empty() && !a.eq_ignore_ascii_case(PLACEHOLDER_EMAIL)
}
