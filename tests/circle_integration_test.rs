//! Integration tests for the circle model and session facade.
//!
//! These tests verify the behavior of the public API end to end:
//! - `CircleSet` lifecycle and operations
//! - Layout recomputation after every kind of change
//! - `OverlapCore` wiring of coordinate providers into the set
//! - The JSON snapshot handed to the renderer

use futures::future::BoxFuture;

use overlap_core::circle::{
    CircleError, CircleId, CircleSet, DistanceUnit, MapLayout, METERS_PER_MILE,
};
use overlap_core::geometry::{Coordinate, METERS_PER_DEGREE};
use overlap_core::lookup::{CoordinateProvider, LookupError, PositionSource};
use overlap_core::OverlapCore;

/// Provider returning canned answers, standing in for the browser's
/// geolocation API and a geocoding service.
struct FixedProvider {
    device: Result<Coordinate, LookupError>,
    address: Result<Coordinate, LookupError>,
}

impl CoordinateProvider for FixedProvider {
    fn device_position(&self) -> BoxFuture<'_, Result<Coordinate, LookupError>> {
        let result = self.device.clone();
        Box::pin(async move { result })
    }

    fn resolve_address<'a>(
        &'a self,
        _query: &'a str,
    ) -> BoxFuture<'a, Result<Coordinate, LookupError>> {
        let result = self.address.clone();
        Box::pin(async move { result })
    }
}

fn provider_with_device(point: Coordinate) -> FixedProvider {
    FixedProvider {
        device: Ok(point),
        address: Err(LookupError::AddressNotFound("unused".to_string())),
    }
}

fn provider_with_address(point: Coordinate) -> FixedProvider {
    FixedProvider {
        device: Err(LookupError::GeolocationUnavailable),
        address: Ok(point),
    }
}

/// Longitude offset (degrees) spanning `meters` on the equator.
fn equator_lon_degrees(meters: f64) -> f64 {
    meters / METERS_PER_DEGREE
}

// ============================================================================
// CircleSet Lifecycle Tests
// ============================================================================

mod circle_set_lifecycle_tests {
    use super::*;

    #[test]
    fn add_edit_remove_cycle() {
        let mut set = CircleSet::new();

        let id = set
            .add(Coordinate::new(40.7128, -74.0060), 5.0, DistanceUnit::Miles)
            .expect("should add circle");
        assert_eq!(set.len(), 1);
        assert_eq!(
            set.get(id).unwrap().radius_meters(),
            5.0 * METERS_PER_MILE
        );

        set.set_radius(id, 10.0).expect("should update radius");
        set.set_unit(id, DistanceUnit::Kilometers)
            .expect("should update unit");
        assert_eq!(set.get(id).unwrap().radius_meters(), 10_000.0);

        let removed = set.remove(id).expect("should remove circle");
        assert_eq!(removed.id(), id);
        assert!(set.is_empty());
    }

    #[test]
    fn center_is_immutable_after_creation() {
        let mut set = CircleSet::new();
        let id = set
            .add(Coordinate::new(10.0, 20.0), 1.0, DistanceUnit::Miles)
            .unwrap();

        // The public surface offers no way to move a circle; edits touch
        // radius and unit only.
        set.set_radius(id, 2.0).unwrap();
        set.set_unit(id, DistanceUnit::Kilometers).unwrap();
        assert_eq!(set.get(id).unwrap().center(), Coordinate::new(10.0, 20.0));
    }

    #[test]
    fn identifiers_stay_stable_across_removals() {
        let mut set = CircleSet::new();
        let first = set
            .add(Coordinate::new(0.0, 0.0), 1.0, DistanceUnit::Miles)
            .unwrap();
        let second = set
            .add(Coordinate::new(1.0, 1.0), 1.0, DistanceUnit::Miles)
            .unwrap();
        let third = set
            .add(Coordinate::new(2.0, 2.0), 1.0, DistanceUnit::Miles)
            .unwrap();

        set.remove(second).unwrap();

        // Survivors keep their identifiers; a new circle gets a fresh one.
        assert!(set.get(first).is_some());
        assert!(set.get(third).is_some());
        let fourth = set
            .add(Coordinate::new(3.0, 3.0), 1.0, DistanceUnit::Miles)
            .unwrap();
        assert!(fourth > third);
    }

    #[test]
    fn operations_on_unknown_ids_fail_cleanly() {
        let mut set = CircleSet::new();
        let ghost = CircleId::new(123);

        assert!(matches!(set.remove(ghost), Err(CircleError::NotFound(_))));
        assert!(matches!(
            set.set_radius(ghost, 1.0),
            Err(CircleError::NotFound(_))
        ));
        assert!(matches!(
            set.set_unit(ghost, DistanceUnit::Miles),
            Err(CircleError::NotFound(_))
        ));
        assert!(set.get(ghost).is_none());
    }
}

// ============================================================================
// Layout Recomputation Tests
// ============================================================================

mod layout_recompute_tests {
    use super::*;

    #[test]
    fn layout_tracks_every_change() {
        let mut set = CircleSet::new();

        // Empty: nothing to frame.
        assert!(set.layout().bounds.is_none());

        // One circle: a box, no crossings.
        let a = set
            .add(Coordinate::new(0.0, 0.0), 1.0, DistanceUnit::Kilometers)
            .unwrap();
        let layout = set.layout();
        assert!(layout.bounds.is_some());
        assert!(layout.intersections.is_empty());

        // Second circle close enough to cross: one crossing pair.
        let b = set
            .add(
                Coordinate::new(0.0, equator_lon_degrees(1_500.0)),
                1.0,
                DistanceUnit::Kilometers,
            )
            .unwrap();
        let layout = set.layout();
        assert_eq!(layout.intersections.len(), 1);
        assert_eq!(layout.intersections[0].points.len(), 2);

        // Shrinking one circle separates them again.
        set.set_radius(a, 0.2).unwrap();
        let layout = set.layout();
        assert_eq!(layout.intersections.len(), 1);
        assert!(layout.intersections[0].points.is_empty());

        // Removing one leaves a single-circle layout.
        set.remove(b).unwrap();
        let layout = set.layout();
        assert_eq!(layout.circles.len(), 1);
        assert!(layout.intersections.is_empty());
    }

    #[test]
    fn unit_edit_changes_crossings() {
        let mut set = CircleSet::new();
        set.add(Coordinate::new(0.0, 0.0), 1.0, DistanceUnit::Kilometers)
            .unwrap();
        let b = set
            .add(
                Coordinate::new(0.0, equator_lon_degrees(1_800.0)),
                0.5,
                DistanceUnit::Kilometers,
            )
            .unwrap();

        // 1000 m + 500 m < 1800 m: no crossing.
        assert!(!set.layout().intersections[0].is_crossing());

        // Reinterpreting the same number as miles grows the circle:
        // 1000 + 0.5 * 1609.34 = 1804.67 m > 1800 m, so now they cross.
        set.set_unit(b, DistanceUnit::Miles).unwrap();
        assert!(set.layout().intersections[0].is_crossing());
    }

    #[test]
    fn three_circles_produce_three_pairs() {
        let mut set = CircleSet::new();
        for i in 0..3 {
            set.add(
                Coordinate::new(0.0, f64::from(i) * 0.01),
                1.0,
                DistanceUnit::Kilometers,
            )
            .unwrap();
        }

        let layout = set.layout();
        assert_eq!(layout.intersections.len(), 3);

        // Neighbors are ~1113 m apart (crossing); the outer pair is
        // ~2227 m apart (disjoint).
        let crossing = layout
            .intersections
            .iter()
            .filter(|pair| pair.is_crossing())
            .count();
        assert_eq!(crossing, 2);
    }

    #[test]
    fn bounds_grow_with_radius() {
        let mut set = CircleSet::new();
        let id = set
            .add(Coordinate::new(30.0, 30.0), 1.0, DistanceUnit::Kilometers)
            .unwrap();

        let small = set.layout().bounds.unwrap();
        set.set_radius(id, 50.0).unwrap();
        let large = set.layout().bounds.unwrap();

        assert!(large.contains_box(&small));
        assert!(large.height_degrees() > small.height_degrees());
    }

    #[test]
    fn recompute_is_pure() {
        let mut set = CircleSet::new();
        set.add(Coordinate::new(0.0, 0.0), 100.0, DistanceUnit::Kilometers)
            .unwrap();
        set.add(Coordinate::new(0.9, 0.9), 100.0, DistanceUnit::Kilometers)
            .unwrap();

        let first = set.layout();
        let second = set.layout();
        assert_eq!(first, second);
    }
}

// ============================================================================
// Session Facade Tests
// ============================================================================

mod session_facade_tests {
    use super::*;

    #[tokio::test]
    async fn device_flow_plots_at_reported_position() {
        let here = Coordinate::new(51.5074, -0.1278);
        let provider = provider_with_device(here);

        let mut core = OverlapCore::new();
        let id = core
            .plot_from(&provider, &PositionSource::Device, 2.0, DistanceUnit::Miles)
            .await
            .expect("device lookup should succeed");

        assert_eq!(core.circles().get(id).unwrap().center(), here);
    }

    #[tokio::test]
    async fn address_flow_plots_at_geocoded_position() {
        let paris = Coordinate::new(48.8566, 2.3522);
        let provider = provider_with_address(paris);

        let mut core = OverlapCore::new();
        let id = core
            .plot_from(
                &provider,
                &PositionSource::address("10 Rue de Rivoli, Paris"),
                1.0,
                DistanceUnit::Kilometers,
            )
            .await
            .expect("address lookup should succeed");

        assert_eq!(core.circles().get(id).unwrap().center(), paris);
    }

    #[tokio::test]
    async fn every_lookup_error_is_recoverable() {
        let failures = [
            LookupError::GeolocationUnavailable,
            LookupError::GeolocationDenied("user refused".to_string()),
            LookupError::GeolocationFailed("timeout".to_string()),
        ];

        let mut core = OverlapCore::new();
        for failure in failures {
            let provider = FixedProvider {
                device: Err(failure.clone()),
                address: Err(LookupError::AddressLookupFailed("offline".to_string())),
            };

            let result = core
                .plot_from(&provider, &PositionSource::Device, 1.0, DistanceUnit::Miles)
                .await;
            assert!(matches!(result, Err(CircleError::Lookup(_))));
        }

        // The session survives every failure and keeps working.
        assert!(core.circles().is_empty());
        core.plot(Coordinate::new(0.0, 0.0), 1.0, DistanceUnit::Miles)
            .unwrap();
        assert_eq!(core.circles().len(), 1);
    }

    #[tokio::test]
    async fn address_not_found_is_reported_not_fatal() {
        let provider = FixedProvider {
            device: Err(LookupError::GeolocationUnavailable),
            address: Err(LookupError::AddressNotFound(
                "1 Nonexistent Way".to_string(),
            )),
        };

        let mut core = OverlapCore::new();
        let err = core
            .plot_from(
                &provider,
                &PositionSource::address("1 Nonexistent Way"),
                1.0,
                DistanceUnit::Miles,
            )
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Lookup failed: Address not found: 1 Nonexistent Way"
        );
        assert!(core.circles().is_empty());
    }

    #[tokio::test]
    async fn mixed_sources_build_one_layout() {
        let mut core = OverlapCore::new();

        let device = provider_with_device(Coordinate::new(0.0, 0.0));
        core.plot_from(&device, &PositionSource::Device, 1.0, DistanceUnit::Kilometers)
            .await
            .unwrap();

        let geocoder = provider_with_address(Coordinate::new(0.0, equator_lon_degrees(1_500.0)));
        core.plot_from(
            &geocoder,
            &PositionSource::address("next door"),
            1.0,
            DistanceUnit::Kilometers,
        )
        .await
        .unwrap();

        let layout = core.layout();
        assert_eq!(layout.circles.len(), 2);
        assert_eq!(layout.intersections.len(), 1);
        assert_eq!(layout.intersections[0].points.len(), 2);

        let bounds = layout.bounds.unwrap();
        for point in layout.intersection_points() {
            assert!(bounds.contains(point));
        }
    }
}

// ============================================================================
// Snapshot JSON Tests
// ============================================================================

mod snapshot_json_tests {
    use super::*;

    fn sample_layout() -> MapLayout {
        let mut set = CircleSet::new();
        set.add(Coordinate::new(0.0, 0.0), 100.0, DistanceUnit::Kilometers)
            .unwrap();
        set.add(Coordinate::new(0.9, 0.9), 100.0, DistanceUnit::Kilometers)
            .unwrap();
        set.layout()
    }

    #[test]
    fn snapshot_roundtrips_through_json() {
        let layout = sample_layout();
        let json = layout.to_json().expect("should serialize");
        let recovered = MapLayout::from_json(&json).expect("should deserialize");
        assert_eq!(recovered, layout);
    }

    #[test]
    fn snapshot_exposes_renderer_fields() {
        let json = sample_layout().to_json().unwrap();

        // The renderer keys off these names.
        assert!(json.contains("\"circles\""));
        assert!(json.contains("\"intersections\""));
        assert!(json.contains("\"bounds\""));
        assert!(json.contains("\"min_latitude\""));
        assert!(json.contains("\"kilometers\""));
    }

    #[test]
    fn empty_snapshot_serializes_null_bounds() {
        let layout = CircleSet::new().layout();
        let json = layout.to_json().unwrap();
        assert!(json.contains("\"bounds\":null"));
    }
}
