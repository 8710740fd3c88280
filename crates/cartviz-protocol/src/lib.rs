//! Inbound message contract for the cartpole visualizer.
//!
//! Hosts post JSON strings shaped like
//! `{"version": "1.2.0", "type": "IterationUpdate", "state": {...}}`.
//! This crate gates them on version and type and folds the three historical
//! `state` layouts into one [`CartpoleState`](cartviz_model::CartpoleState).

mod error;
mod message;
mod normalize;
mod theme;

pub use error::{ProtocolError, Result};
pub use message::{
    COMPATIBLE_VERSION, IterationUpdateMessage, MessageType, QueryParams, compatible_range,
    parse_version,
};
pub use normalize::{
    IterationUpdate, STATE_SHAPES, StateShape, decode_iteration_update, normalize_state,
};
pub use theme::{ThemeMode, resolve_theme};
