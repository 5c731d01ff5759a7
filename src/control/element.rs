//! Minimal rendered-node model.
//!
//! The seek bar never paints anything itself. It writes attributes and
//! inline box constraints onto elements that a host renders, and reads back
//! the widths the host measured.

use std::collections::BTreeMap;
use std::fmt;

/// An inline length value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CssLength {
    Px(f64),
    Percent(f64),
}

impl fmt::Display for CssLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Whole pixel values print without a fractional part ("20px", not "20.0px")
            CssLength::Px(px) => write!(f, "{}px", px),
            CssLength::Percent(pct) => write!(f, "{:.2}%", pct),
        }
    }
}

/// Inline style properties the seek bar writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StyleProperty {
    Width,
    MaxWidth,
    MinWidth,
    Right,
}

impl StyleProperty {
    /// CSS property name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Width => "width",
            Self::MaxWidth => "max-width",
            Self::MinWidth => "min-width",
            Self::Right => "right",
        }
    }
}

/// A rendered node: attributes, inline style, text and measured width.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    tag: String,
    attributes: BTreeMap<String, String>,
    style: BTreeMap<StyleProperty, CssLength>,
    text: String,
    rendered_width: f64,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Self::default()
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn set_attribute(&mut self, name: &str, value: impl Into<String>) {
        self.attributes.insert(name.to_string(), value.into());
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
        self.attributes.remove(name)
    }

    pub fn set_style(&mut self, property: StyleProperty, value: CssLength) {
        self.style.insert(property, value);
    }

    pub fn style(&self, property: StyleProperty) -> Option<CssLength> {
        self.style.get(&property).copied()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Record the width the host measured for this node.
    pub fn set_rendered_width(&mut self, width: f64) {
        self.rendered_width = width;
    }

    pub fn rendered_width(&self) -> f64 {
        self.rendered_width
    }
}
