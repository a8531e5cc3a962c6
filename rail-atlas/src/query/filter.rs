//! Tag-filter predicates and element statements.

use std::fmt;

/// OSM element type a statement selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    Node,
    Way,
}

impl Element {
    pub fn as_str(&self) -> &'static str {
        match self {
            Element::Node => "node",
            Element::Way => "way",
        }
    }
}

/// A single `[...]` tag predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagFilter {
    /// `["key"="value"]`
    Eq(&'static str, &'static str),
    /// `["key"!="value"]`
    NotEq(&'static str, &'static str),
    /// `["key"!~"regex"]`
    NotMatches(&'static str, &'static str),
}

impl fmt::Display for TagFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagFilter::Eq(k, v) => write!(f, "[\"{k}\"=\"{v}\"]"),
            TagFilter::NotEq(k, v) => write!(f, "[\"{k}\"!=\"{v}\"]"),
            TagFilter::NotMatches(k, re) => write!(f, "[\"{k}\"!~\"{re}\"]"),
        }
    }
}

/// One union member: an element type, its required tags, and the shared
/// exclusions, scoped to the search area.
#[derive(Debug, Clone, Copy)]
pub struct Statement {
    pub element: Element,
    pub include: &'static [TagFilter],
    pub exclude: &'static [TagFilter],
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.element.as_str())?;
        for filter in self.include.iter().chain(self.exclude) {
            write!(f, "{filter}")?;
        }
        f.write_str("(area.searchArea);")
    }
}
