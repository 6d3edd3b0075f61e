use crate::error::Result;
use crate::models::{Attraction, GeoPoint};
use crate::services::provider::PlacesProvider;
use std::collections::HashMap;
use std::sync::Arc;

/// Searches for places around each sample point of a route and reduces the
/// results to a ranked top-N list.
#[derive(Clone)]
pub struct AttractionAggregator {
    places: Arc<dyn PlacesProvider>,
}

impl AttractionAggregator {
    pub fn new(places: Arc<dyn PlacesProvider>) -> Self {
        AttractionAggregator { places }
    }

    /// One places search per sample point, run concurrently. Either every
    /// search succeeds and the merged results are ranked, or the first
    /// failure is returned and nothing else.
    pub async fn aggregate(
        &self,
        sample_points: &[GeoPoint],
        category: &str,
        search_radius_m: u32,
        top_n: usize,
    ) -> Result<Vec<Attraction>> {
        if sample_points.is_empty() || top_n == 0 {
            return Ok(Vec::new());
        }

        tracing::info!(
            "Searching for '{}' attractions around {} points along the route",
            category,
            sample_points.len()
        );

        let searches = sample_points.iter().enumerate().map(|(idx, point)| async move {
            let result = self.places.nearby(point, search_radius_m, category).await;
            match &result {
                Ok(places) => tracing::debug!("Sample point {} returned {} places", idx + 1, places.len()),
                Err(e) => tracing::warn!("Sample point {} search failed: {}", idx + 1, e),
            }
            result
        });

        // Results come back in sample-point order
        let per_point = futures::future::try_join_all(searches).await?;

        let ranked = rank_attractions(per_point, top_n);
        tracing::info!("Returning the top {} attractions", ranked.len());

        Ok(ranked)
    }
}

/// Flatten per-point results, dedup by id, drop unrated places, sort by
/// rating (highest first) and keep the first `top_n`.
///
/// Dedup is last-write-wins in flattening order; each id keeps the position
/// of its first occurrence, so equal ratings keep a stable order and the
/// output is a pure function of the input.
pub fn rank_attractions(per_point: Vec<Vec<Attraction>>, top_n: usize) -> Vec<Attraction> {
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut unique: Vec<Attraction> = Vec::new();

    for attraction in per_point.into_iter().flatten() {
        match positions.get(&attraction.id) {
            Some(&pos) => unique[pos] = attraction,
            None => {
                positions.insert(attraction.id.clone(), unique.len());
                unique.push(attraction);
            }
        }
    }

    tracing::info!("Found {} unique attractions", unique.len());

    let mut rated: Vec<Attraction> = unique.into_iter().filter(Attraction::is_rated).collect();

    // Stable sort, descending; every remaining rating is Some
    rated.sort_by(|a, b| {
        let (a, b) = (a.rating.unwrap_or_default(), b.rating.unwrap_or_default());
        b.total_cmp(&a)
    });
    rated.truncate(top_n);
    rated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AppError, ProviderError};
    use async_trait::async_trait;

    fn attraction(id: &str, rating: Option<f64>) -> Attraction {
        Attraction {
            id: id.to_string(),
            name: format!("Place {}", id),
            rating,
            review_count: 10,
            location: GeoPoint { lat: 36.0, lng: -121.0 },
            category: "tourist_attraction".to_string(),
            address: None,
        }
    }

    fn point(lat: f64) -> GeoPoint {
        GeoPoint { lat, lng: -121.0 }
    }

    /// Answers each search from a per-latitude script; a missing entry fails.
    struct ScriptedPlaces {
        by_lat: Vec<(f64, Vec<Attraction>)>,
    }

    #[async_trait]
    impl PlacesProvider for ScriptedPlaces {
        async fn nearby(
            &self,
            location: &GeoPoint,
            _radius_meters: u32,
            _category: &str,
        ) -> std::result::Result<Vec<Attraction>, ProviderError> {
            self.by_lat
                .iter()
                .find(|(lat, _)| *lat == location.lat)
                .map(|(_, places)| places.clone())
                .ok_or_else(|| ProviderError::new("UNKNOWN_ERROR", "no script for point"))
        }
    }

    #[test]
    fn test_last_write_wins() {
        let ranked = rank_attractions(
            vec![
                vec![attraction("p1", Some(4.0))],
                vec![attraction("p1", Some(4.5))],
            ],
            10,
        );
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].id, "p1");
        assert_eq!(ranked[0].rating, Some(4.5));
    }

    #[test]
    fn test_unrated_excluded_and_top_n() {
        let ranked = rank_attractions(
            vec![vec![
                attraction("a", Some(3.0)),
                attraction("b", Some(4.8)),
                attraction("c", Some(4.2)),
                attraction("d", None),
            ]],
            2,
        );
        let ratings: Vec<_> = ranked.iter().map(|a| a.rating.unwrap()).collect();
        assert_eq!(ratings, vec![4.8, 4.2]);
    }

    #[test]
    fn test_later_unrated_snapshot_removes_place() {
        let ranked = rank_attractions(
            vec![vec![attraction("p1", Some(4.9))], vec![attraction("p1", None)]],
            5,
        );
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_ranking_invariants() {
        let per_point = vec![
            vec![attraction("a", Some(4.1)), attraction("b", None), attraction("c", Some(4.9))],
            vec![attraction("a", Some(3.9)), attraction("d", Some(4.1)), attraction("e", Some(2.0))],
            vec![attraction("f", Some(4.1)), attraction("c", Some(4.9))],
        ];

        for top_n in 0..8 {
            let ranked = rank_attractions(per_point.clone(), top_n);
            // 5 unique rated: a, c, d, e, f
            assert_eq!(ranked.len(), top_n.min(5));
            assert!(ranked.iter().all(|a| a.rating.is_some()));
            assert!(ranked
                .windows(2)
                .all(|w| w[0].rating.unwrap() >= w[1].rating.unwrap()));
            let mut ids: Vec<_> = ranked.iter().map(|a| a.id.as_str()).collect();
            ids.sort();
            ids.dedup();
            assert_eq!(ids.len(), ranked.len());
        }

        assert_eq!(
            rank_attractions(per_point.clone(), 10),
            rank_attractions(per_point, 10)
        );
    }

    #[test]
    fn test_equal_ratings_keep_discovery_order() {
        let ranked = rank_attractions(
            vec![
                vec![attraction("x", Some(4.0)), attraction("y", Some(4.0))],
                vec![attraction("z", Some(4.0))],
            ],
            3,
        );
        let ids: Vec<_> = ranked.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["x", "y", "z"]);
    }

    #[test]
    fn test_aggregate_merges_all_points() {
        let aggregator = AttractionAggregator::new(Arc::new(ScriptedPlaces {
            by_lat: vec![
                (36.0, vec![attraction("p1", Some(4.0)), attraction("p2", Some(3.5))]),
                (37.0, vec![attraction("p1", Some(4.5)), attraction("p3", None)]),
            ],
        }));

        let ranked = tokio_test::block_on(aggregator.aggregate(
            &[point(36.0), point(37.0)],
            "tourist_attraction",
            10_000,
            5,
        ))
        .unwrap();

        let ids: Vec<_> = ranked.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p2"]);
        assert_eq!(ranked[0].rating, Some(4.5));
    }

    #[test]
    fn test_aggregate_fails_if_any_search_fails() {
        let aggregator = AttractionAggregator::new(Arc::new(ScriptedPlaces {
            by_lat: vec![(36.0, vec![attraction("p1", Some(4.0))])],
        }));

        let err = tokio_test::block_on(aggregator.aggregate(
            &[point(36.0), point(99.0)],
            "museum",
            10_000,
            5,
        ))
        .unwrap_err();

        assert!(matches!(err, AppError::Provider(ref e) if e.status == "UNKNOWN_ERROR"));
    }

    #[test]
    fn test_aggregate_short_circuits_without_searching() {
        // Any search would fail against an empty script
        let aggregator = AttractionAggregator::new(Arc::new(ScriptedPlaces { by_lat: vec![] }));

        let none = tokio_test::block_on(aggregator.aggregate(&[], "park", 10_000, 5)).unwrap();
        assert!(none.is_empty());

        let zero =
            tokio_test::block_on(aggregator.aggregate(&[point(36.0)], "park", 10_000, 0)).unwrap();
        assert!(zero.is_empty());
    }
}
