//! Search radius selector.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

use crate::error::GeoError;

/// The radius restriction applied to a proximity query.
///
/// The "show all" mode of the radius selector is a distinct variant, not an
/// infinite radius: an unbounded query preserves input order, computes no
/// distances, and does not need a reference location at all.
///
/// # Example
///
/// ```rust
/// use foodshare_geo::SearchRadius;
///
/// let all: SearchRadius = "all".parse().unwrap();
/// assert_eq!(all, SearchRadius::Unbounded);
///
/// let ten: SearchRadius = "10".parse().unwrap();
/// assert_eq!(ten, SearchRadius::Bounded(10.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SearchRadius {
    /// No distance restriction.
    Unbounded,
    /// Restrict to entities within the given distance in kilometers
    /// (inclusive boundary).
    Bounded(f64),
}

impl SearchRadius {
    /// Creates a bounded radius of the given size in kilometers.
    pub fn km(radius_km: f64) -> Self {
        SearchRadius::Bounded(radius_km)
    }

    /// Returns true if this is the "show all" mode.
    pub fn is_unbounded(&self) -> bool {
        matches!(self, SearchRadius::Unbounded)
    }
}

impl FromStr for SearchRadius {
    type Err = GeoError;

    /// Parses a radius selector value: the literal `all`, or a non-negative
    /// finite number of kilometers.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("all") {
            return Ok(SearchRadius::Unbounded);
        }
        match trimmed.parse::<f64>() {
            Ok(km) if km.is_finite() && km >= 0.0 => Ok(SearchRadius::Bounded(km)),
            _ => Err(GeoError::InvalidRadius(s.to_string())),
        }
    }
}

impl Display for SearchRadius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchRadius::Unbounded => write!(f, "all"),
            SearchRadius::Bounded(km) => write!(f, "{}km", km),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_selector() {
        assert_eq!("all".parse::<SearchRadius>().unwrap(), SearchRadius::Unbounded);
        assert_eq!("ALL".parse::<SearchRadius>().unwrap(), SearchRadius::Unbounded);
    }

    #[test]
    fn test_parse_numeric_selector() {
        assert_eq!("5".parse::<SearchRadius>().unwrap(), SearchRadius::Bounded(5.0));
        assert_eq!("2.5".parse::<SearchRadius>().unwrap(), SearchRadius::Bounded(2.5));
        assert_eq!("0".parse::<SearchRadius>().unwrap(), SearchRadius::Bounded(0.0));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("nearby".parse::<SearchRadius>().is_err());
        assert!("-3".parse::<SearchRadius>().is_err());
        assert!("inf".parse::<SearchRadius>().is_err());
        assert!("NaN".parse::<SearchRadius>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(SearchRadius::Unbounded.to_string(), "all");
        assert_eq!(SearchRadius::km(10.0).to_string(), "10km");
    }
}
