//! End-to-end verification through the public API.

mod helpers;

use std::time::Duration;

use helpers::{config_from_env_pairs, point_north_of_shop};
use shop_proximity::{
    FixedLocationProvider, LocationError, LocationErrorKind, ProximityConfig, ProximityVerifier,
    UnsupportedLocationProvider, VerificationOutcome,
};

#[tokio::test]
async fn test_bypass_only_for_exact_true() {
    for value in ["", "false", "TRUE", "True", "1", "yes", "true ", " true"] {
        let config = config_from_env_pairs(&[("BYPASS_LOCATION_CHECK", value)]);
        assert!(!config.bypass_enabled, "{value:?} must not enable bypass");

        let verifier = ProximityVerifier::new(config);
        let device = FixedLocationProvider::new(point_north_of_shop(5_000.0));
        let verdict = verifier.verify_location(&device).await;
        assert!(!verdict.verified, "{value:?} must run the real check");
        assert_eq!(device.request_count(), 1);
    }

    let config = config_from_env_pairs(&[("BYPASS_LOCATION_CHECK", "true")]);
    assert!(config.bypass_enabled);
    let verifier = ProximityVerifier::new(config);
    let device = FixedLocationProvider::new(point_north_of_shop(5_000.0));
    let verdict = verifier.verify_location(&device).await;
    assert!(verdict.verified);
    assert!(verdict.distance_formatted.contains("bypass"));
    assert_eq!(verdict.distance, 0.0);
    assert_eq!(device.request_count(), 0);
}

#[tokio::test]
async fn test_absent_bypass_flag_runs_real_check() {
    let config = config_from_env_pairs(&[]);
    assert!(!config.bypass_enabled);

    let device = FixedLocationProvider::new(point_north_of_shop(20.0));
    let verdict = ProximityVerifier::new(config)
        .verify_location(&device)
        .await;
    assert!(verdict.verified);
    assert!(!verdict.distance_formatted.contains("bypass"));
    assert_eq!(verdict.outcome(), VerificationOutcome::Verified);
}

#[tokio::test]
async fn test_each_acquisition_failure_is_distinct() {
    let cases = [
        (LocationError::PermissionDenied, "Location permission denied"),
        (
            LocationError::PositionUnavailable,
            "Location information unavailable",
        ),
        (LocationError::Timeout, "Location request timed out"),
        (
            LocationError::Other("driver crashed".to_string()),
            "Unable to get your location",
        ),
    ];

    let verifier = ProximityVerifier::new(ProximityConfig::default());
    for (error, prefix) in cases {
        let kind = error.kind();
        let device = FixedLocationProvider::failing(error);
        let verdict = verifier.verify_location(&device).await;
        assert!(!verdict.verified);
        assert_eq!(verdict.distance, 0.0);
        assert_eq!(verdict.location.latitude, 0.0);
        assert_eq!(verdict.location.longitude, 0.0);
        assert_eq!(verdict.outcome(), VerificationOutcome::LocationFailed(kind));
        let message = verdict
            .error
            .as_deref()
            .expect("failure should carry a message");
        assert!(message.starts_with(prefix), "{message}");
    }
}

#[tokio::test(start_paused = true)]
async fn test_slow_sensor_times_out_after_ten_seconds() {
    let verifier = ProximityVerifier::new(ProximityConfig::default());
    let device =
        FixedLocationProvider::new(point_north_of_shop(0.0)).with_delay(Duration::from_secs(11));

    let started = tokio::time::Instant::now();
    let verdict = verifier.verify_location(&device).await;

    let waited = started.elapsed();
    assert!(waited >= Duration::from_secs(10) && waited < Duration::from_secs(11));
    assert_eq!(
        verdict.outcome(),
        VerificationOutcome::LocationFailed(LocationErrorKind::Timeout)
    );
    assert_eq!(device.request_count(), 1);
}

#[tokio::test]
async fn test_missing_capability_fails_immediately() {
    let verdict = ProximityVerifier::new(ProximityConfig::default())
        .verify_location(&UnsupportedLocationProvider)
        .await;
    assert!(!verdict.verified);
    assert_eq!(
        verdict.outcome(),
        VerificationOutcome::LocationFailed(LocationErrorKind::Unsupported)
    );
}

#[tokio::test]
async fn test_out_of_range_message_uses_configured_name() {
    let config = config_from_env_pairs(&[("SHOP_NAME", "north yard"), ("SHOP_RADIUS_METERS", "50")]);
    let device = FixedLocationProvider::new(point_north_of_shop(80.0));
    let verdict = ProximityVerifier::new(config)
        .verify_location(&device)
        .await;
    assert!(!verdict.verified);
    assert!(verdict.distance > 50.0);
    assert_eq!(
        verdict.error.as_deref(),
        Some("You must be at the north yard to clock in/out. You are 80m away.")
    );
}

#[tokio::test]
async fn test_concurrent_verifications_do_not_interfere() {
    let verifier = std::sync::Arc::new(ProximityVerifier::new(ProximityConfig::default()));

    let handles: Vec<_> = [10.0, 500.0, 30.0, 2_000.0]
        .into_iter()
        .map(|meters| {
            let verifier = std::sync::Arc::clone(&verifier);
            tokio::spawn(async move {
                let device = FixedLocationProvider::new(point_north_of_shop(meters));
                (meters, verifier.verify_location(&device).await)
            })
        })
        .collect();

    for handle in handles {
        let (meters, verdict) = handle.await.expect("task panicked");
        assert_eq!(verdict.verified, meters <= 100.0, "{meters}m");
    }
}

#[tokio::test]
async fn test_verdict_json_shape() {
    let device = FixedLocationProvider::new(point_north_of_shop(300.0).with_accuracy(15.0));
    let verdict = ProximityVerifier::new(ProximityConfig::default())
        .verify_location(&device)
        .await;
    let json = serde_json::to_value(&verdict).expect("serialize");

    assert_eq!(json["verified"], false);
    assert_eq!(json["location"]["accuracy"], 15.0);
    assert!(json["distance"].as_f64().is_some_and(|d| d > 100.0));
    assert_eq!(json["distanceFormatted"], "300m");
    assert!(json["error"].as_str().is_some_and(|e| e.contains("300m away")));
}
