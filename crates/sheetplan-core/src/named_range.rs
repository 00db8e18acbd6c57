//! Named range lookup
//!
//! Named ranges let users refer to a fixed block of cells by name. The parser
//! never consults global state for them; callers pass the set of names the
//! spreadsheet currently defines.
//!
//! # Example
//!
//! ```
//! use sheetplan_core::NamedRangeSet;
//!
//! let names: NamedRangeSet = ["Revenue", "TaxRate"].into_iter().collect();
//! assert_eq!(names.lookup("revenue"), Some("Revenue"));
//! assert!(!names.contains("Costs"));
//! ```

use ahash::AHashMap;

/// Set of known named-range names
///
/// Lookup is case-insensitive, matching how spreadsheets treat names, and
/// returns the spelling the name was defined with.
#[derive(Debug, Default, Clone)]
pub struct NamedRangeSet {
    /// Canonical names keyed by their lowercase form
    names: AHashMap<String, String>,
}

impl NamedRangeSet {
    /// Create a new empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a name; returns `false` if a name differing only in case was already present
    pub fn insert<S: Into<String>>(&mut self, name: S) -> bool {
        let name = name.into();
        let key = name.to_lowercase();
        if self.names.contains_key(&key) {
            return false;
        }
        self.names.insert(key, name);
        true
    }

    /// Look up a name and return its canonical spelling
    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.names.get(&name.to_lowercase()).map(String::as_str)
    }

    /// Check if a name is defined
    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Iterate over the canonical names
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.values().map(String::as_str)
    }

    /// Get the number of names
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for NamedRangeSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for name in iter {
            set.insert(name);
        }
        set
    }
}

impl<S: Into<String>> Extend<S> for NamedRangeSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for name in iter {
            self.insert(name);
        }
    }
}
