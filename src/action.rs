use std::fmt;
use std::str::FromStr;

use crate::error::MaestroError;

/// Requested power-state change for the managed fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstanceAction {
    Start,
    Stop,
}

impl FromStr for InstanceAction {
    type Err = MaestroError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "start" => Ok(InstanceAction::Start),
            "stop" => Ok(InstanceAction::Stop),
            other => Err(MaestroError::InvalidAction(other.to_string())),
        }
    }
}

impl fmt::Display for InstanceAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstanceAction::Start => f.write_str("start"),
            InstanceAction::Stop => f.write_str("stop"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_start_and_stop_case_insensitively() {
        for raw in ["start", "Start", "START"] {
            assert_eq!(raw.parse::<InstanceAction>().unwrap(), InstanceAction::Start);
        }
        for raw in ["stop", "Stop", "STOP"] {
            assert_eq!(raw.parse::<InstanceAction>().unwrap(), InstanceAction::Stop);
        }
    }

    #[test]
    fn rejects_anything_else() {
        for raw in ["", "restart", "starting", "stop ", "star"] {
            let err = raw.parse::<InstanceAction>().unwrap_err();
            assert!(matches!(err, MaestroError::InvalidAction(_)), "{raw:?}");
        }
    }

    #[test]
    fn invalid_action_error_names_the_value() {
        let err = "Reboot".parse::<InstanceAction>().unwrap_err();
        assert_eq!(err.to_string(), "invalid action: reboot");
    }

    #[test]
    fn displays_as_lowercase_verb() {
        assert_eq!(InstanceAction::Start.to_string(), "start");
        assert_eq!(InstanceAction::Stop.to_string(), "stop");
    }
}
