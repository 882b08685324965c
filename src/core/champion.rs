// Author: Dustin Pilgrim
// License: MIT

use std::fmt;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Catalog entry. Read-only to the tracker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Champion {
    pub id: String,
    pub name: String,
    pub ult_name: String,
    /// Ultimate cooldown per rank, rank 1 first. Empty when unknown.
    #[serde(default)]
    pub ult_cooldowns: Vec<f64>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Champion {
    pub fn has_ult_ranks(&self) -> bool {
        !self.ult_cooldowns.is_empty()
    }

    pub fn rank_count(&self) -> usize {
        self.ult_cooldowns.len()
    }

    /// "130 / 115 / 100s", or "-" without data.
    pub fn cooldowns_label(&self) -> String {
        if self.ult_cooldowns.is_empty() {
            return "-".to_string();
        }
        let parts: Vec<String> = self.ult_cooldowns.iter().map(|cd| format!("{cd}")).collect();
        format!("{}s", parts.join(" / "))
    }
}

/// Champion data as far as it has arrived.
///
/// Until the provider answers (or when it failed, or no source is configured)
/// the catalog is empty and every champion reference resolves to nothing.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    champions: Vec<Champion>,
    loaded: bool,
    disabled: bool,
    error: Option<String>,
}

impl Catalog {
    pub fn loaded(mut champions: Vec<Champion>) -> Self {
        champions.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.id.cmp(&b.id))
        });

        Self {
            champions,
            loaded: true,
            disabled: false,
            error: None,
        }
    }

    /// No source configured; nothing will ever arrive.
    pub fn disabled() -> Self {
        Self {
            disabled: true,
            ..Self::default()
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            champions: Vec::new(),
            loaded: false,
            disabled: false,
            error: Some(message.into()),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn len(&self) -> usize {
        self.champions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.champions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Champion> {
        self.champions.iter()
    }

    /// Exact id lookup.
    pub fn get(&self, id: &str) -> Option<&Champion> {
        self.champions.iter().find(|c| c.id == id)
    }

    /// Lookup by id or display name, ignoring case and surrounding spaces.
    pub fn find(&self, query: &str) -> Option<&Champion> {
        let q = query.trim();
        self.get(q).or_else(|| {
            self.champions
                .iter()
                .find(|c| c.id.eq_ignore_ascii_case(q) || c.name.eq_ignore_ascii_case(q))
        })
    }

    pub fn search<'a>(&'a self, filter: &'a NameFilter) -> impl Iterator<Item = &'a Champion> + 'a {
        self.champions.iter().filter(move |c| filter.matches(c))
    }
}

/// Search filter for the champion list.
///
/// Plain text matches as a case-insensitive substring of the name, id or a
/// tag. Text containing regex metacharacters is compiled as a case-insensitive
/// regex instead.
#[derive(Debug, Clone)]
pub enum NameFilter {
    Literal(String),
    Regex(Regex),
}

impl NameFilter {
    pub fn parse(s: &str) -> Result<Self, regex::Error> {
        let regex_meta = ['.', '*', '+', '?', '(', ')', '[', ']', '{', '}', '|', '\\', '^', '$'];
        let s = s.trim();
        if s.chars().any(|c| regex_meta.contains(&c)) {
            Ok(NameFilter::Regex(Regex::new(&format!("(?i){s}"))?))
        } else {
            Ok(NameFilter::Literal(s.to_lowercase()))
        }
    }

    pub fn matches(&self, champion: &Champion) -> bool {
        let mut fields = std::iter::once(champion.name.as_str())
            .chain(std::iter::once(champion.id.as_str()))
            .chain(champion.tags.iter().map(String::as_str));

        match self {
            NameFilter::Literal(s) => fields.any(|f| f.to_lowercase().contains(s.as_str())),
            NameFilter::Regex(r) => fields.any(|f| r.is_match(f)),
        }
    }
}

impl fmt::Display for NameFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameFilter::Literal(s) => write!(f, "{s}"),
            NameFilter::Regex(r) => write!(f, "/{}/", r.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn champ(id: &str, name: &str, tags: &[&str]) -> Champion {
        Champion {
            id: id.to_string(),
            name: name.to_string(),
            ult_name: "Ult".to_string(),
            ult_cooldowns: vec![100.0, 80.0, 60.0],
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn catalog() -> Catalog {
        Catalog::loaded(vec![
            champ("MonkeyKing", "Wukong", &["Fighter"]),
            champ("Ahri", "Ahri", &["Mage", "Assassin"]),
            champ("KSante", "K'Sante", &["Tank"]),
        ])
    }

    #[test]
    fn catalog_is_sorted_by_name() {
        let cat = catalog();
        let names: Vec<&str> = cat.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Ahri", "K'Sante", "Wukong"]);
    }

    #[test]
    fn find_accepts_id_or_name() {
        let c = catalog();
        assert_eq!(c.find("MonkeyKing").map(|c| c.name.as_str()), Some("Wukong"));
        assert_eq!(c.find(" wukong ").map(|c| c.id.as_str()), Some("MonkeyKing"));
        assert_eq!(c.find("ahri").map(|c| c.id.as_str()), Some("Ahri"));
        assert!(c.find("Teemo").is_none());
        assert!(c.get("ahri").is_none());
    }

    #[test]
    fn failed_catalog_is_empty_and_flagged() {
        let c = Catalog::failed("HTTP 503");
        assert!(c.is_empty());
        assert!(!c.is_loaded());
        assert_eq!(c.error(), Some("HTTP 503"));
    }

    #[test]
    fn disabled_catalog_is_neither_loaded_nor_failed() {
        let c = Catalog::disabled();
        assert!(c.is_disabled());
        assert!(!c.is_loaded());
        assert!(c.error().is_none());
        assert!(!Catalog::default().is_disabled());
    }

    #[test]
    fn literal_filter_matches_tags_and_names() {
        let c = catalog();
        let f = NameFilter::parse("mage").unwrap();
        let hits: Vec<&str> = c.search(&f).map(|c| c.id.as_str()).collect();
        assert_eq!(hits, vec!["Ahri"]);

        let f = NameFilter::parse("KING").unwrap();
        assert_eq!(c.search(&f).count(), 1);
    }

    #[test]
    fn regex_filter_is_case_insensitive() {
        let c = catalog();
        let f = NameFilter::parse("^(ahri|wukong)$").unwrap();
        assert!(matches!(f, NameFilter::Regex(_)));
        assert_eq!(c.search(&f).count(), 2);
    }

    #[test]
    fn cooldown_label() {
        assert_eq!(champ("A", "A", &[]).cooldowns_label(), "100 / 80 / 60s");
        let mut none = champ("B", "B", &[]);
        none.ult_cooldowns.clear();
        assert_eq!(none.cooldowns_label(), "-");
    }
}
