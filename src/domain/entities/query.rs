use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::domain::entities::user::{User, UserField};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn indicator(self) -> &'static str {
        match self {
            SortDirection::Asc => "▲",
            SortDirection::Desc => "▼",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: UserField,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn ascending(field: UserField) -> Self {
        Self {
            field,
            direction: SortDirection::Asc,
        }
    }

    /// Orders by the sort field, then by id so equal keys never tie.
    pub fn compare(&self, a: &User, b: &User) -> Ordering {
        let ordering = a
            .field(self.field)
            .cmp(b.field(self.field))
            .then_with(|| a.id.cmp(&b.id));
        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// Per-field substring patterns, matched case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    patterns: BTreeMap<UserField, String>,
}

impl FilterState {
    pub fn pattern(&self, field: UserField) -> &str {
        self.patterns.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Returns `true` when the stored pattern changed.
    pub fn set(&mut self, field: UserField, pattern: String) -> bool {
        if self.pattern(field) == pattern {
            return false;
        }
        if pattern.is_empty() {
            self.patterns.remove(&field);
        } else {
            self.patterns.insert(field, pattern);
        }
        true
    }

    pub fn matcher(&self) -> FilterMatcher {
        FilterMatcher {
            needles: self
                .patterns
                .iter()
                .map(|(field, pattern)| (*field, pattern.to_lowercase()))
                .collect(),
        }
    }
}

/// Lower-cased patterns, built once per derivation.
#[derive(Debug, Clone)]
pub struct FilterMatcher {
    needles: Vec<(UserField, String)>,
}

impl FilterMatcher {
    pub fn matches(&self, user: &User) -> bool {
        self.needles
            .iter()
            .all(|(field, needle)| user.field(*field).to_lowercase().contains(needle.as_str()))
    }
}
