//! Color classifier and catalogue queries.
//!
//! Classification is a linear scan over [`CATALOGUE`] minimizing squared
//! Euclidean RGB distance. There is no distance threshold: every color gets
//! a name. Ties go to the entry declared first.

mod catalogue;

pub use catalogue::{CATALOGUE, CATALOGUE_LEN};

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::color::{round1, round2, Color, Hsv};

/// A catalogue entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedColor {
    pub name: &'static str,
    pub color: Color,
}

impl NamedColor {
    pub fn hex(&self) -> String {
        self.color.hex()
    }
}

impl Serialize for NamedColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("NamedColor", 3)?;
        state.serialize_field("name", self.name)?;
        state.serialize_field("hex", &self.color.hex())?;
        state.serialize_field("rgb", &self.color)?;
        state.end()
    }
}

/// Result of [`closest_name`].
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ClosestName {
    pub name: &'static str,
    /// Hex of the catalogue entry, not of the query color.
    pub hex: String,
    /// Euclidean RGB distance, two decimals.
    pub distance: f64,
    pub exact_match: bool,
    /// `max(0, 100 - distance / 4.41)`, two decimals.
    pub similarity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    Exact,
    Partial,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SearchMatch {
    #[serde(flatten)]
    pub entry: NamedColor,
    pub match_type: MatchType,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct HueMatch {
    #[serde(flatten)]
    pub entry: NamedColor,
    /// HSV hue truncated to whole degrees.
    pub hue: u16,
    pub saturation: f64,
    pub value: f64,
}

/// The catalogue entry nearest to `color`.
pub fn nearest(color: Color) -> &'static NamedColor {
    let mut best = &CATALOGUE[0];
    let mut best_distance = u32::MAX;

    for entry in CATALOGUE.iter() {
        let distance = color.distance_squared(entry.color);
        // strict: first declared wins a tie
        if distance < best_distance {
            best = entry;
            best_distance = distance;
            if distance == 0 {
                break;
            }
        }
    }

    best
}

/// Nearest entry plus distance and a 0-100 similarity score.
pub fn closest_name(color: Color) -> ClosestName {
    let entry = nearest(color);
    let distance = color.distance(entry.color);
    let exact_match = entry.color == color;

    ClosestName {
        name: entry.name,
        hex: entry.hex(),
        distance: round2(distance),
        exact_match,
        similarity: if exact_match {
            100.0
        } else {
            round2((100.0 - distance / 4.41).max(0.0))
        },
    }
}

/// Case- and whitespace-insensitive comparison key.
fn key(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Look up an entry by name, ignoring case and whitespace.
pub fn lookup(name: &str) -> Option<&'static NamedColor> {
    let wanted = key(name);
    if wanted.is_empty() {
        return None;
    }
    CATALOGUE.iter().find(|entry| key(entry.name) == wanted)
}

/// Search entries by name: an exact match first, then substring matches
/// in catalogue order, at most `limit` results.
pub fn search(query: &str, limit: usize) -> Vec<SearchMatch> {
    let wanted = key(query);
    if wanted.is_empty() || limit == 0 {
        return Vec::new();
    }

    let exact = lookup(query);
    let exact_match = exact.map(|entry| SearchMatch {
        entry: *entry,
        match_type: MatchType::Exact,
    });

    let partial = CATALOGUE
        .iter()
        .filter(|entry| Some(*entry) != exact)
        .filter(|entry| key(entry.name).contains(&wanted))
        .map(|entry| SearchMatch {
            entry: *entry,
            match_type: MatchType::Partial,
        });

    exact_match.into_iter().chain(partial).take(limit).collect()
}

/// Every entry sorted by name.
pub fn all() -> Vec<&'static NamedColor> {
    let mut entries: Vec<_> = CATALOGUE.iter().collect();
    entries.sort_by_cached_key(|entry| key(entry.name));
    entries
}

/// Entries whose HSV hue lies in `min..=max` degrees, ordered by hue.
pub fn in_hue_range(min: u16, max: u16) -> Vec<HueMatch> {
    let mut matches: Vec<HueMatch> = CATALOGUE
        .iter()
        .filter_map(|entry| {
            let hsv = Hsv::from(entry.color);
            let hue = hsv.h.trunc() as u16;
            (min..=max).contains(&hue).then(|| HueMatch {
                entry: *entry,
                hue,
                saturation: round1(hsv.s),
                value: round1(hsv.v),
            })
        })
        .collect();
    matches.sort_by_key(|m| m.hue);
    matches
}
