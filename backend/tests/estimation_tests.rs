//! Estimation workflow integration tests
//!
//! Exercises the three-step form session: field updates, validation on
//! submit, the price formula bounds, saving, and CSV export.

use proptest::prelude::*;
use serde_json::json;
use uuid::Uuid;

use agridash_backend::services::EstimationService;
use shared::{predicted_price, DemandTier, EstimateRequest, ModelChoice};

/// Service with the simulated model delay disabled
fn service() -> EstimationService {
    EstimationService::new(0)
}

/// Fill the required fields plus the market factors of the worked example:
/// Rice in Lucknow, 50mm rainfall, medium market / low export demand,
/// XGBoost model.
fn fill_rice_request(service: &EstimationService, id: Uuid) {
    for (field, value) in [
        ("crop_name", json!("Rice")),
        ("region", json!("Lucknow")),
        ("year", json!(2025)),
        ("month", json!(6)),
        ("rainfall", json!(50.0)),
        ("market_demand", json!(2)),
        ("export_demand", json!(1)),
        ("model_choice", json!("xgboost")),
    ] {
        service.set_field(id, field, &value).unwrap();
    }
}

// ============================================================================
// Submission
// ============================================================================

#[tokio::test]
async fn test_submit_valid_request_produces_bounded_result() {
    let service = service();
    let session = service.create_session();
    fill_rice_request(&service, session.id);

    let result = service.submit(session.id).await.unwrap();

    // Zero-noise price is 2263; noise spans [-50, 50)
    assert!((2210..=2316).contains(&result.predicted_price), "price {}", result.predicted_price);
    assert_eq!(result.model_r2_score, 0.85);
    assert!((0.7..1.2).contains(&result.elapsed_time_sec));
}

#[tokio::test]
async fn test_random_forest_reports_its_own_accuracy() {
    let service = service();
    let session = service.create_session();
    fill_rice_request(&service, session.id);
    service.set_field(session.id, "model_choice", &json!("random-forest")).unwrap();

    let result = service.submit(session.id).await.unwrap();
    assert_eq!(result.model_r2_score, 0.80);
}

#[tokio::test]
async fn test_submit_invalid_request_keeps_previous_result() {
    let service = service();
    let session = service.create_session();
    fill_rice_request(&service, session.id);

    let first = service.submit(session.id).await.unwrap();

    // Year outside the accepted range makes the request invalid
    service.set_field(session.id, "year", &json!(2019)).unwrap();
    let error = service.submit(session.id).await.unwrap_err();
    assert!(error.to_string().contains("valid year"));

    let view = service.session(session.id).unwrap();
    assert_eq!(view.result, Some(first));
}

#[tokio::test]
async fn test_submit_without_required_fields_fails() {
    let service = service();
    let session = service.create_session();
    assert!(service.submit(session.id).await.is_err());
}

#[tokio::test]
async fn test_seeded_services_agree() {
    let a = EstimationService::new(0).with_seed(42);
    let b = EstimationService::new(0).with_seed(42);

    let sa = a.create_session();
    let sb = b.create_session();
    fill_rice_request(&a, sa.id);
    fill_rice_request(&b, sb.id);

    let ra = a.submit(sa.id).await.unwrap();
    let rb = b.submit(sb.id).await.unwrap();
    assert_eq!(ra, rb);
}

// ============================================================================
// Form session mechanics
// ============================================================================

#[tokio::test]
async fn test_step_navigation_keeps_fields() {
    let service = service();
    let session = service.create_session();
    assert_eq!(session.step, 1);

    service.set_field(session.id, "crop_name", &json!("Wheat")).unwrap();
    let view = service.go_to_step(session.id, 3).unwrap();
    assert_eq!(view.step, 3);
    assert_eq!(view.request.crop_name.as_deref(), Some("Wheat"));

    assert!(service.go_to_step(session.id, 0).is_err());
    assert!(service.go_to_step(session.id, 4).is_err());
}

#[tokio::test]
async fn test_unknown_field_is_rejected() {
    let service = service();
    let session = service.create_session();
    let error = service.set_field(session.id, "soil_ph", &json!(6.5)).unwrap_err();
    assert!(error.to_string().contains("soil_ph"));
}

#[tokio::test]
async fn test_empty_string_resets_a_field() {
    let service = service();
    let session = service.create_session();

    service.set_field(session.id, "rainfall", &json!("120")).unwrap();
    let view = service.set_field(session.id, "rainfall", &json!("")).unwrap();
    assert_eq!(view.request.rainfall, None);
}

#[tokio::test]
async fn test_unknown_session_is_not_found() {
    let service = service();
    assert!(service.session(Uuid::new_v4()).is_err());
}

// ============================================================================
// Saving and export
// ============================================================================

#[tokio::test]
async fn test_save_twice_appends_duplicate_rows() {
    let service = service();
    let session = service.create_session();
    fill_rice_request(&service, session.id);
    service.submit(session.id).await.unwrap();

    let first = service.save_current_result(session.id).unwrap();
    let second = service.save_current_result(session.id).unwrap();

    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 2);
    assert_eq!(second[0].crop, "Rice");
    assert_eq!(second[0].price, second[1].price);
    assert_ne!(second[0].id, second[1].id);
}

#[tokio::test]
async fn test_save_without_result_is_a_noop() {
    let service = service();
    let session = service.create_session();
    let saved = service.save_current_result(session.id).unwrap();
    assert!(saved.is_empty());
}

#[tokio::test]
async fn test_export_without_saves_produces_no_document() {
    let service = service();
    let session = service.create_session();
    assert_eq!(service.export_saved(session.id).unwrap(), None);
}

#[tokio::test]
async fn test_export_csv_layout() {
    let service = service();
    let session = service.create_session();
    fill_rice_request(&service, session.id);
    service.submit(session.id).await.unwrap();
    service.save_current_result(session.id).unwrap();

    let csv = service.export_saved(session.id).unwrap().unwrap();
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("Crop,Price (\u{20b9}),Date"));

    let row = lines.next().unwrap();
    assert!(row.starts_with("Rice,"));
    assert_eq!(lines.next(), None);
}

// ============================================================================
// Price formula properties
// ============================================================================

proptest! {
    /// More rainfall never lowers the price, all else equal.
    #[test]
    fn test_price_monotonic_in_rainfall(
        low in 0.0..250.0f64,
        extra in 0.0..250.0f64,
        noise in -50.0..50.0f64,
    ) {
        let mut request = EstimateRequest {
            crop_name: Some("Wheat".to_string()),
            rainfall: Some(low),
            ..Default::default()
        };
        let before = predicted_price(&request, noise);
        request.rainfall = Some(low + extra);
        let after = predicted_price(&request, noise);
        prop_assert!(after >= before);
    }

    /// The XGBoost boost never produces a lower price than Random Forest
    /// for the same non-negative inputs.
    #[test]
    fn test_xgboost_boost_dominates(
        rainfall in 0.0..500.0f64,
        market in 1u8..=3,
        export in 1u8..=3,
        noise in -50.0..50.0f64,
    ) {
        let mut request = EstimateRequest {
            crop_name: Some("Rice".to_string()),
            rainfall: Some(rainfall),
            market_demand: DemandTier::from_weight(market),
            export_demand: DemandTier::from_weight(export),
            model_choice: Some(ModelChoice::RandomForest),
            ..Default::default()
        };
        let plain = predicted_price(&request, noise);
        request.model_choice = Some(ModelChoice::Xgboost);
        let boosted = predicted_price(&request, noise);
        prop_assert!(boosted >= plain);
    }
}
