//! Model ownership and inbound message handling.

use cartviz_model::CartpoleModel;
use cartviz_protocol::{IterationUpdate, ProtocolError, ThemeMode, decode_iteration_update};

use crate::config::Config;

/// Owns the one [`CartpoleModel`] and the theme chosen at startup.
#[derive(Debug)]
pub struct Visualizer {
    theme: ThemeMode,
    model: CartpoleModel,
    accepted: u64,
    dropped: u64,
}

impl Visualizer {
    /// Fresh visualizer with a zeroed, valid model.
    pub fn new(config: &Config) -> Self {
        Self {
            theme: config.theme,
            model: CartpoleModel::default(),
            accepted: 0,
            dropped: 0,
        }
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub fn model(&self) -> &CartpoleModel {
        &self.model
    }

    /// Number of updates applied and dropped so far.
    pub fn counts(&self) -> (u64, u64) {
        (self.accepted, self.dropped)
    }

    /// Handle one message payload. On success the model is replaced wholesale;
    /// on any error it is left exactly as it was.
    pub fn receive_message(&mut self, payload: &str) -> Result<IterationUpdate, ProtocolError> {
        match decode_iteration_update(payload) {
            Ok(update) => {
                self.model = CartpoleModel::from_state(update.state);
                self.accepted += 1;
                Ok(update)
            }
            Err(e) => {
                self.dropped += 1;
                Err(e)
            }
        }
    }
}
