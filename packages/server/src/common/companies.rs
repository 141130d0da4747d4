//! Canonical competitor names and the alias table that maps free-text
//! mentions onto them.

use lazy_static::lazy_static;
use regex::Regex;

pub const ZEISS: &str = "Zeiss";
pub const CANON: &str = "Canon";
pub const OPTOVUE: &str = "Optovue";
pub const HEIDELBERG: &str = "Heidelberg";
pub const TOPCON: &str = "Topcon";
pub const OPTOS: &str = "Optos";
pub const NIDEK: &str = "Nidek";
pub const OTHERS: &str = "Others";

lazy_static! {
    // Priority order matters: "optovue" must win before "optos" is tried,
    // and every named company before the catch-all words.
    static ref ALIASES: Vec<(&'static str, Regex)> = [
        (ZEISS, r"(carl\s+)?zeiss|meditec"),
        (CANON, r"canon"),
        (OPTOVUE, r"opto\s*vue"),
        (HEIDELBERG, r"heidelberg"),
        (TOPCON, r"top\s*con"),
        (OPTOS, r"optos"),
        (NIDEK, r"nidek"),
        (OTHERS, r"other|rest|misc|remaining"),
    ]
    .into_iter()
    .map(|(name, pattern)| (name, Regex::new(pattern).unwrap()))
    .collect();
}

/// Resolve a free-text company mention to a canonical name.
///
/// Case- and surrounding-whitespace-insensitive. Returns `None` when no
/// alias matches.
pub fn resolve_company(raw: &str) -> Option<&'static str> {
    let needle = raw.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }
    ALIASES
        .iter()
        .find(|(_, re)| re.is_match(&needle))
        .map(|(name, _)| *name)
}

/// A fixed, ordered enumeration of canonical companies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Roster {
    companies: &'static [&'static str],
    catch_all: Option<&'static str>,
}

/// Market-share buckets. `Others` absorbs unknown names and rounding drift.
pub const MARKET_SHARE_ROSTER: Roster = Roster {
    companies: &[ZEISS, CANON, OPTOVUE, HEIDELBERG, TOPCON, OPTOS, NIDEK, OTHERS],
    catch_all: Some(OTHERS),
};

/// Companies covered by the revenue/products/patents table.
pub const STATS_ROSTER: Roster = Roster {
    companies: &[ZEISS, CANON, OPTOVUE, TOPCON, NIDEK],
    catch_all: None,
};

impl Roster {
    pub fn companies(&self) -> &'static [&'static str] {
        self.companies
    }

    pub fn catch_all(&self) -> Option<&'static str> {
        self.catch_all
    }

    /// The bucket that absorbs drift: the catch-all, else the last entry.
    pub fn drift_bucket(&self) -> Option<&'static str> {
        self.catch_all.or_else(|| self.companies.last().copied())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.companies.contains(&name)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.companies.iter().position(|c| *c == name)
    }

    /// Resolve a mention to a member of this roster.
    pub fn normalize(&self, raw: &str) -> Option<&'static str> {
        resolve_company(raw).filter(|name| self.contains(name))
    }

    /// Resolve a mention, folding anything unresolved into the catch-all.
    pub fn bucket(&self, raw: &str) -> Option<&'static str> {
        self.normalize(raw).or(self.catch_all)
    }
}
