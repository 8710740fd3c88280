//! Integration tests for inbound message decoding.

use approx::assert_relative_eq;
use cartviz_model::CartpoleState;
use cartviz_protocol::{
    COMPATIBLE_VERSION, MessageType, ProtocolError, StateShape, decode_iteration_update,
};
use proptest::prelude::*;
use serde_json::json;

/// Serialize an iteration update the way a 1.0.0 producer posts it.
fn update(state: serde_json::Value) -> String {
    json!({
        "version": "1.0.0",
        "type": MessageType::IterationUpdate.as_str(),
        "state": state,
    })
    .to_string()
}

#[test]
fn descriptive_scenario_message() {
    let payload = json!({
        "version": "1.0.0",
        "type": "IterationUpdate",
        "state": {"cart_position": 1.5, "cart_velocity": 0.0, "pole_angle": 0.2},
    })
    .to_string();

    let decoded = decode_iteration_update(&payload).unwrap();
    assert_eq!(decoded.shape, StateShape::Descriptive);
    assert_eq!(decoded.state, CartpoleState::new(1.5, 0.0, 0.2));
}

#[test]
fn malformed_json_is_an_error_not_a_panic() {
    for payload in ["", "{", "not json", "{\"version\": 1.0.0}", "[1,2"] {
        assert!(matches!(
            decode_iteration_update(payload),
            Err(ProtocolError::Json(_))
        ));
    }
}

#[test]
fn out_of_range_versions_are_dropped() {
    for version in ["0.1.0", "2.0.0", "10.4.1"] {
        let payload = json!({
            "version": version,
            "type": "IterationUpdate",
            "state": {"position": 1.0, "velocity": 0.0, "angle": 0.0},
        })
        .to_string();
        let err = decode_iteration_update(&payload).unwrap_err();
        let in_range = matches!(
            err,
            ProtocolError::IncompatibleVersion { range, .. } if range == COMPATIBLE_VERSION
        );
        assert!(in_range, "{version}: {err}");
    }
}

#[test]
fn garbage_version_is_dropped() {
    let payload = json!({"version": "latest", "type": "IterationUpdate", "state": {}}).to_string();
    assert!(matches!(
        decode_iteration_update(&payload),
        Err(ProtocolError::InvalidVersion { .. })
    ));
}

#[test]
fn loose_version_forms_are_dropped() {
    for version in ["=1.0.0", "v=1.0.0", "1.0", "1"] {
        let payload = json!({
            "version": version,
            "type": "IterationUpdate",
            "state": {"position": 1.0, "velocity": 0.0, "angle": 0.0},
        })
        .to_string();
        assert!(
            matches!(
                decode_iteration_update(&payload),
                Err(ProtocolError::InvalidVersion { .. })
            ),
            "{version} should be rejected"
        );
    }

    let payload = json!({
        "version": " v1.4.0 ",
        "type": "IterationUpdate",
        "state": {"position": 1.0, "velocity": 0.0, "angle": 0.0},
    })
    .to_string();
    assert!(decode_iteration_update(&payload).is_ok());
}

#[test]
fn unknown_type_is_dropped() {
    let payload = json!({
        "version": "1.0.0",
        "type": "EpisodeStart",
        "state": {"position": 1.0},
    })
    .to_string();
    assert!(matches!(
        decode_iteration_update(&payload),
        Err(ProtocolError::UnrecognizedType(_))
    ));
}

#[test]
fn non_finite_inputs_are_not_validated() {
    // JSON has no NaN literal; a huge exponent is the closest a producer gets.
    let state = json!({"x": 1e308, "x_dot": -1e308, "theta": "abc"});
    let decoded = decode_iteration_update(&update(state)).unwrap();
    assert_eq!(decoded.shape, StateShape::Gym);
    assert_eq!(decoded.state.position, 1e308);
    assert!(decoded.state.angle.is_nan());
}

proptest! {
    #[test]
    fn all_layouts_agree(
        p in -100.0..100.0_f64,
        v in -50.0..50.0_f64,
        a in -10.0..10.0_f64,
    ) {
        let canonical = decode_iteration_update(&update(json!({
            "position": p, "velocity": v, "angle": a,
        }))).unwrap();
        let gym = decode_iteration_update(&update(json!({
            "x": p, "x_dot": v, "theta": a,
        }))).unwrap();
        let descriptive = decode_iteration_update(&update(json!({
            "cart_position": p, "cart_velocity": v, "pole_angle": a,
        }))).unwrap();

        prop_assert_eq!(canonical.shape, StateShape::Canonical);
        prop_assert_eq!(gym.shape, StateShape::Gym);
        prop_assert_eq!(descriptive.shape, StateShape::Descriptive);
        prop_assert_eq!(canonical.state, gym.state);
        prop_assert_eq!(gym.state, descriptive.state);
        assert_relative_eq!(canonical.state.position, p);
    }
}
