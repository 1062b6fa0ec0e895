//! Nearest-first ordering of located entities.

use std::cmp::Ordering;

use crate::distance::distance_km;
use crate::filter::Located;
use crate::point::GeoPoint;

/// Returns the entities ordered nearest-first relative to `origin`.
///
/// Policy:
/// - With no origin there is nothing to measure from, so the input order
///   (server-provided recency order) is returned unchanged.
/// - Otherwise the entities are stably sorted by ascending great-circle
///   distance. The comparator treats any pair where either side lacks a
///   usable point (or whose distance is `NaN`) as equal, so such entries
///   keep their original relative positions instead of being pushed to
///   either end.
///
/// The input is never mutated; a new sequence is returned. Applying the sort
/// twice with the same origin yields the same result as applying it once.
pub fn sort_by_proximity<E>(origin: Option<GeoPoint>, entities: &[E]) -> Vec<E>
where
    E: Located + Clone,
{
    let origin = match origin {
        Some(origin) => origin,
        None => return entities.to_vec(),
    };

    // Compute each distance once; the comparator runs O(n log n) times.
    let mut keyed: Vec<(Option<f64>, E)> = entities
        .iter()
        .map(|entity| {
            let key = entity.location().map(|point| distance_km(origin, point));
            (key, entity.clone())
        })
        .collect();

    keyed.sort_by(|(a, _), (b, _)| match (a, b) {
        (Some(da), Some(db)) => da.partial_cmp(db).unwrap_or(Ordering::Equal),
        _ => Ordering::Equal,
    });

    keyed.into_iter().map(|(_, entity)| entity).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Marker {
        name: &'static str,
        point: Option<GeoPoint>,
    }

    impl Located for Marker {
        fn location(&self) -> Option<GeoPoint> {
            self.point
        }
    }

    fn marker(name: &'static str, lon: f64, lat: f64) -> Marker {
        Marker {
            name,
            point: Some(GeoPoint::new(lon, lat).unwrap()),
        }
    }

    fn origin() -> GeoPoint {
        GeoPoint::new(-75.0, 40.0).unwrap()
    }

    #[test]
    fn test_sorts_nearest_first() {
        let entities = vec![
            marker("far", -75.0, 40.45),
            marker("near", -75.0, 40.009),
            marker("mid", -75.0, 40.045),
        ];
        let result = sort_by_proximity(Some(origin()), &entities);
        let names: Vec<_> = result.iter().map(|m| m.name).collect();
        assert_eq!(names, vec!["near", "mid", "far"]);
    }

    #[test]
    fn test_null_origin_is_identity_on_order() {
        let entities = vec![
            marker("far", -75.0, 40.45),
            marker("near", -75.0, 40.009),
        ];
        let result = sort_by_proximity(None, &entities);
        assert_eq!(result, entities);
    }

    #[test]
    fn test_preserves_length_and_multiset() {
        let entities = vec![
            marker("a", -75.0, 40.45),
            marker("b", -75.0, 40.009),
            marker("c", -75.0, 40.045),
        ];
        let result = sort_by_proximity(Some(origin()), &entities);
        assert_eq!(result.len(), entities.len());
        for entity in &entities {
            assert!(result.contains(entity));
        }
    }

    #[test]
    fn test_adjacent_distances_are_ascending() {
        let entities = vec![
            marker("d", -74.2, 40.8),
            marker("a", -75.0, 40.45),
            marker("c", -75.3, 40.1),
            marker("b", -75.0, 40.009),
        ];
        let result = sort_by_proximity(Some(origin()), &entities);
        let distances: Vec<f64> = result
            .iter()
            .map(|m| distance_km(origin(), m.point.unwrap()))
            .collect();
        for pair in distances.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
    }

    #[test]
    fn test_missing_points_keep_relative_order() {
        let entities = vec![
            Marker { name: "ghost1", point: None },
            marker("far", -75.0, 40.45),
            Marker { name: "ghost2", point: None },
            marker("near", -75.0, 40.009),
        ];
        let result = sort_by_proximity(Some(origin()), &entities);
        let ghost1 = result.iter().position(|m| m.name == "ghost1").unwrap();
        let ghost2 = result.iter().position(|m| m.name == "ghost2").unwrap();
        assert!(ghost1 < ghost2);
    }

    #[test]
    fn test_idempotent() {
        let entities = vec![
            marker("far", -75.0, 40.45),
            marker("near", -75.0, 40.009),
            marker("mid", -75.0, 40.045),
        ];
        let once = sort_by_proximity(Some(origin()), &entities);
        let twice = sort_by_proximity(Some(origin()), &once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_does_not_mutate_input() {
        let entities = vec![
            marker("far", -75.0, 40.45),
            marker("near", -75.0, 40.009),
        ];
        let snapshot = entities.clone();
        let _ = sort_by_proximity(Some(origin()), &entities);
        assert_eq!(entities, snapshot);
    }
}
