//! Sleeve-length and shoe-openness heuristics.

use std::fmt;

use atelier_core::models::CatalogItem;
use atelier_core::rules::StylingRules;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sleeve {
    Short,
    Long,
}

impl Sleeve {
    /// Short-sleeve tops pair with open shoes, long-sleeve tops with closed ones.
    pub fn shoe_openness(self) -> Openness {
        match self {
            Sleeve::Short => Openness::Open,
            Sleeve::Long => Openness::Closed,
        }
    }
}

impl fmt::Display for Sleeve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Sleeve::Short => "short",
            Sleeve::Long => "long",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Openness {
    Open,
    Closed,
}

impl fmt::Display for Openness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Openness::Open => "open",
            Openness::Closed => "closed",
        })
    }
}

/// What decided a sleeve reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SleeveCue {
    ShortMarker,
    LongMarker,
    WarmSeason,
    /// Nothing matched; ambiguous tops read as short.
    Default,
}

/// Explicit short markers win, then explicit long markers, then a warm-season
/// cue implies short. Ambiguous tops default to short.
pub fn classify_sleeve(top: &CatalogItem, rules: &StylingRules) -> (Sleeve, SleeveCue) {
    let text = top.search_text();
    if rules.short_sleeve.matches(&text) {
        (Sleeve::Short, SleeveCue::ShortMarker)
    } else if rules.long_sleeve.matches(&text) {
        (Sleeve::Long, SleeveCue::LongMarker)
    } else if rules.warm_season.matches(&text) {
        (Sleeve::Short, SleeveCue::WarmSeason)
    } else {
        (Sleeve::Short, SleeveCue::Default)
    }
}

/// True when the shoe suits the wanted openness. Shoes matching neither
/// marker list pass for both.
pub fn shoe_matches(shoe: &CatalogItem, wanted: Openness, rules: &StylingRules) -> bool {
    let text = shoe.search_text();
    let open = rules.open_shoe.matches(&text);
    let closed = rules.closed_shoe.matches(&text);
    let neutral = !open && !closed;
    match wanted {
        Openness::Open => (open && !closed) || neutral,
        Openness::Closed => (closed && !open) || neutral,
    }
}
