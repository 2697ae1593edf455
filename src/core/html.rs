// src/core/html.rs
//! Positional lookups over a parsed document.
//!
//! A [`StructuralPath`] is a fixed chain of element steps from an anchor id
//! down to one node, e.g. `#content > div > main > article > section:nth-of-type(1)`.
//! It compiles to a CSS selector; the first match in document order wins, the
//! same way an indexed XPath lookup picks `[0]`.

use scraper::{ElementRef, Html, Selector};

use super::sanitize::normalize_ws;
use crate::error::ScrapeError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub tag: &'static str,
    /// 1-based position among same-tag siblings.
    pub nth: Option<usize>,
}

impl Step {
    pub const fn any(tag: &'static str) -> Self { Self { tag, nth: None } }
    pub const fn nth(tag: &'static str, n: usize) -> Self { Self { tag, nth: Some(n) } }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StructuralPath {
    anchor_id: &'static str,
    steps: Vec<Step>,
}

impl StructuralPath {
    pub fn new(anchor_id: &'static str) -> Self {
        Self { anchor_id, steps: Vec::new() }
    }

    pub fn then(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    pub fn extend(mut self, steps: &[Step]) -> Self {
        self.steps.extend_from_slice(steps);
        self
    }

    pub fn to_css(&self) -> String {
        let mut css = format!("#{}", self.anchor_id);
        for step in &self.steps {
            css.push_str(" > ");
            css.push_str(step.tag);
            if let Some(n) = step.nth {
                css.push_str(&format!(":nth-of-type({n})"));
            }
        }
        css
    }

    pub fn selector(&self) -> Result<Selector, ScrapeError> {
        let css = self.to_css();
        Selector::parse(&css).map_err(|e| ScrapeError::Selector {
            query: css.clone(),
            reason: format!("{e:?}"),
        })
    }
}

/// First element matching `path`, or `None` when the layout does not have it.
pub fn first_match<'a>(doc: &'a Html, path: &StructuralPath) -> Result<Option<ElementRef<'a>>, ScrapeError> {
    let sel = path.selector()?;
    Ok(doc.select(&sel).next())
}

/// All descendant text of `el`, whitespace collapsed.
pub fn text_content(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}
