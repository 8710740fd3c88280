//! Data model for the cartpole visualizer.
//!
//! The visualizer owns exactly one [`CartpoleModel`] and replaces it wholesale
//! whenever an accepted update arrives. Renderers only ever borrow it.

use serde::{Deserialize, Serialize};

/// Physical state of the cart-pole system at one instant.
///
/// No range invariant is enforced: any value is rendered as-is.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CartpoleState {
    /// Horizontal cart offset (scene units).
    pub position: f64,
    /// Cart speed. Carried with the snapshot, not used for drawing.
    pub velocity: f64,
    /// Pole tilt from vertical (radians, signed).
    pub angle: f64,
}

impl CartpoleState {
    pub fn new(position: f64, velocity: f64, angle: f64) -> Self {
        Self {
            position,
            velocity,
            angle,
        }
    }
}

/// The visualizer's current model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CartpoleModel {
    pub state: CartpoleState,
    /// Whether the renderer should map this model onto the scene.
    #[serde(default = "valid_by_default")]
    pub is_valid: bool,
}

fn valid_by_default() -> bool {
    true
}

impl Default for CartpoleModel {
    fn default() -> Self {
        Self {
            state: CartpoleState::default(),
            is_valid: true,
        }
    }
}

impl CartpoleModel {
    /// A valid model wrapping `state`.
    pub fn from_state(state: CartpoleState) -> Self {
        Self {
            state,
            is_valid: true,
        }
    }

    /// Replace the model with a fresh one built from `state`.
    pub fn replace(&mut self, state: CartpoleState) {
        *self = Self::from_state(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_model_is_zeroed_and_valid() {
        let m = CartpoleModel::default();
        assert_eq!(m.state, CartpoleState::new(0.0, 0.0, 0.0));
        assert!(m.is_valid);
    }

    #[test]
    fn replace_swaps_the_whole_state() {
        let mut m = CartpoleModel::default();
        m.is_valid = false;
        m.replace(CartpoleState::new(1.5, -0.25, 0.2));
        assert_eq!(m.state, CartpoleState::new(1.5, -0.25, 0.2));
        assert!(m.is_valid);
    }

    #[test]
    fn large_angles_are_kept_unclamped() {
        let m = CartpoleModel::from_state(CartpoleState::new(0.0, 0.0, 7.5));
        assert_eq!(m.state.angle, 7.5);
    }

    #[test]
    fn validity_defaults_on_when_missing_from_json() {
        let m: CartpoleModel =
            serde_json::from_str(r#"{"state":{"position":1.0,"velocity":0.0,"angle":0.1}}"#)
                .unwrap();
        assert!(m.is_valid);
        assert_eq!(m.state.position, 1.0);
    }
}
