//! Version-tolerant decoding of iteration updates.
//!
//! Producers have shipped three layouts for `state` over time. The layouts carry
//! no discriminant, so detection runs an ordered list of matchers and keeps the
//! first hit. The order matters when several legacy field sets coexist.

use cartviz_model::CartpoleState;
use serde_json::{Map, Value};

use crate::error::{ProtocolError, Result};
use crate::message::IterationUpdateMessage;

/// A known `state` layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateShape {
    /// `{position, velocity, angle}`, the oldest simulators.
    Canonical,
    /// `{x, x_dot, theta}`.
    Gym,
    /// `{cart_position, cart_velocity, pole_angle}`, the current layout.
    Descriptive,
}

type ShapeMatcher = fn(&Map<String, Value>) -> Option<CartpoleState>;

/// Matchers in priority order. The last one always matches.
pub const STATE_SHAPES: [(StateShape, ShapeMatcher); 3] = [
    (StateShape::Canonical, match_canonical),
    (StateShape::Gym, match_gym),
    (StateShape::Descriptive, match_descriptive),
];

fn match_canonical(state: &Map<String, Value>) -> Option<CartpoleState> {
    state
        .contains_key("position")
        .then(|| read_fields(state, ["position", "velocity", "angle"]))
}

fn match_gym(state: &Map<String, Value>) -> Option<CartpoleState> {
    state
        .contains_key("x")
        .then(|| read_fields(state, ["x", "x_dot", "theta"]))
}

fn match_descriptive(state: &Map<String, Value>) -> Option<CartpoleState> {
    Some(descriptive_fields(state))
}

/// The current layout, also the fallback when nothing else matches.
fn descriptive_fields(state: &Map<String, Value>) -> CartpoleState {
    read_fields(state, ["cart_position", "cart_velocity", "pole_angle"])
}

/// Fields are passed through uninspected: anything that is not a JSON number
/// (missing, null, string) reads as NaN.
fn read_fields(state: &Map<String, Value>, [p, v, a]: [&str; 3]) -> CartpoleState {
    let num = |key: &str| state.get(key).and_then(Value::as_f64).unwrap_or(f64::NAN);
    CartpoleState::new(num(p), num(v), num(a))
}

/// Fold a `state` object into the canonical state.
pub fn normalize_state(state: &Map<String, Value>) -> (StateShape, CartpoleState) {
    for (shape, matcher) in STATE_SHAPES {
        if let Some(s) = matcher(state) {
            return (shape, s);
        }
    }
    (StateShape::Descriptive, descriptive_fields(state))
}

/// An accepted iteration update.
#[derive(Debug, Clone, PartialEq)]
pub struct IterationUpdate {
    pub version: semver::Version,
    pub shape: StateShape,
    pub state: CartpoleState,
}

/// Parse, gate and normalize one inbound payload.
///
/// Gates run in order: JSON object, version, type, then `state` shape detection.
/// Any failure means the message should be dropped whole.
pub fn decode_iteration_update(payload: &str) -> Result<IterationUpdate> {
    let value: Value = serde_json::from_str(payload)?;
    if !value.is_object() {
        return Err(ProtocolError::NotAnObject);
    }
    let message: IterationUpdateMessage = serde_json::from_value(value)?;
    let version = message.check_version()?;
    message.check_type()?;

    let Value::Object(ref fields) = message.state else {
        return Err(match message.state {
            Value::Null => ProtocolError::MissingField("state"),
            _ => ProtocolError::InvalidState,
        });
    };
    let (shape, state) = normalize_state(fields);

    Ok(IterationUpdate {
        version,
        shape,
        state,
    })
}
