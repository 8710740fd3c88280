//! Shared visualizer protocol constants and the message envelope.

use semver::{Version, VersionReq};
use serde::{Deserialize, Serialize};

use crate::error::{ProtocolError, Result};

/// Semver range a message's `version` must satisfy to be accepted.
pub const COMPATIBLE_VERSION: &str = "^1.0.0";

/// Query-parameter keys read from the widget's URL.
pub struct QueryParams;

impl QueryParams {
    pub const THEME: &'static str = "theme";
    pub const DEBUG: &'static str = "debug";
    pub const WHEEL_ASSET: &'static str = "wheel";
}

/// Message kinds of the visualizer contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageType {
    IterationUpdate,
}

impl MessageType {
    /// Wire value carried in the `type` field.
    pub fn as_str(self) -> &'static str {
        match self {
            MessageType::IterationUpdate => "IterationUpdate",
        }
    }

    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "IterationUpdate" => Some(MessageType::IterationUpdate),
            _ => None,
        }
    }
}

/// The compatible range as a parsed requirement.
pub fn compatible_range() -> VersionReq {
    // Constant input; covered by `compatible_range_parses`.
    VersionReq::parse(COMPATIBLE_VERSION).unwrap_or(VersionReq::STAR)
}

/// Parse a version string the way hosts write it: surrounding whitespace and a
/// single leading `v` are tolerated. Anything else (`=1.0.0`, `1.0`) is invalid.
pub fn parse_version(raw: &str) -> Result<Version> {
    let trimmed = raw.trim();
    let bare = trimmed.strip_prefix('v').unwrap_or(trimmed);
    Version::parse(bare).map_err(|source| ProtocolError::InvalidVersion {
        version: raw.to_string(),
        source,
    })
}

/// Envelope of every inbound message. `state` is kept untyped until the
/// shape matchers look at it.
#[derive(Debug, Clone, Deserialize)]
pub struct IterationUpdateMessage {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(rename = "type", default)]
    pub msg_type: Option<String>,
    #[serde(default)]
    pub state: serde_json::Value,
}

impl IterationUpdateMessage {
    /// Check the version gate against [`COMPATIBLE_VERSION`].
    pub fn check_version(&self) -> Result<Version> {
        let raw = self
            .version
            .as_deref()
            .ok_or(ProtocolError::MissingField("version"))?;
        let version = parse_version(raw)?;
        if !compatible_range().matches(&version) {
            return Err(ProtocolError::IncompatibleVersion {
                version: raw.to_string(),
                range: COMPATIBLE_VERSION,
            });
        }
        Ok(version)
    }

    /// Check the type gate; only iteration updates pass.
    pub fn check_type(&self) -> Result<MessageType> {
        let raw = self
            .msg_type
            .as_deref()
            .ok_or(ProtocolError::MissingField("type"))?;
        match MessageType::from_wire(raw) {
            Some(MessageType::IterationUpdate) => Ok(MessageType::IterationUpdate),
            None => Err(ProtocolError::UnrecognizedType(raw.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compatible_range_parses() {
        assert_eq!(
            VersionReq::parse(COMPATIBLE_VERSION).unwrap(),
            compatible_range()
        );
    }

    fn message(version: Option<&str>, msg_type: Option<&str>) -> IterationUpdateMessage {
        IterationUpdateMessage {
            version: version.map(str::to_string),
            msg_type: msg_type.map(str::to_string),
            state: serde_json::json!({}),
        }
    }

    #[test]
    fn version_prefixes() {
        assert_eq!(parse_version(" v1.2.3 ").unwrap(), Version::new(1, 2, 3));
        assert!(parse_version("=1.0.0").is_err());
        assert!(parse_version("vv1.0.0").is_err());
        assert!(parse_version("1.2").is_err());
    }

    #[test]
    fn version_gate() {
        let mut msg = message(Some("1.0.0"), Some("IterationUpdate"));
        assert!(msg.check_version().is_ok());

        msg.version = Some("1.9.4".into());
        assert!(msg.check_version().is_ok());

        msg.version = Some("2.0.0".into());
        assert!(matches!(
            msg.check_version(),
            Err(ProtocolError::IncompatibleVersion { .. })
        ));

        msg.version = Some("0.9.0".into());
        assert!(msg.check_version().is_err());

        msg.version = Some("1.1.0-beta.1".into());
        assert!(msg.check_version().is_err());

        msg.version = None;
        assert!(matches!(
            msg.check_version(),
            Err(ProtocolError::MissingField("version"))
        ));
    }

    #[test]
    fn type_gate() {
        let mut msg = message(Some("1.0.0"), Some("IterationUpdate"));
        assert_eq!(msg.check_type().unwrap(), MessageType::IterationUpdate);

        msg.msg_type = Some("iterationupdate".into());
        assert!(matches!(
            msg.check_type(),
            Err(ProtocolError::UnrecognizedType(t)) if t == "iterationupdate"
        ));

        msg.msg_type = None;
        assert!(matches!(
            msg.check_type(),
            Err(ProtocolError::MissingField("type"))
        ));
    }

    #[test]
    fn envelope_wire_names() {
        let msg: IterationUpdateMessage = serde_json::from_str(
            r#"{"version": "1.0.0", "type": "IterationUpdate", "state": {"x": 1.0}}"#,
        )
        .unwrap();
        assert_eq!(msg.version.as_deref(), Some("1.0.0"));
        assert_eq!(msg.msg_type.as_deref(), Some("IterationUpdate"));
        assert_eq!(msg.state["x"], 1.0);
    }
}
