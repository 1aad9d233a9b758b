use std::sync::LazyLock;

use regex::Regex;

use crate::import::patterns::{CITY_REGION, LOCATION_LABEL, WORK_MODE};
use crate::import::text::capture_clean;

/// Location strategies, most specific first. The first one that yields a value wins.
static LOCATION_STRATEGIES: [&LazyLock<Regex>; 3] = [&LOCATION_LABEL, &WORK_MODE, &CITY_REGION];

/// Finds a location in free text: an explicit label, then a work-mode keyword,
/// then a `City, Region[, Country]` pattern.
pub fn parse_location(text: &str) -> Option<String> {
    LOCATION_STRATEGIES
        .iter()
        .find_map(|pattern| capture_clean(pattern, text, 1))
}
