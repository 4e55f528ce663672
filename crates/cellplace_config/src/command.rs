//! Commands a host sends to a paced run.
//!
//! A paced run stops at every progress report and waits for one of these.
//! On a terminal they are typed as single lines:
//!
//! | Input          | Command                |
//! |----------------|------------------------|
//! | empty, `p`     | [`ViewCommand::Proceed`] |
//! | `n` (n > 0)    | [`ViewCommand::Refresh`] |
//! | `all`          | [`ViewCommand::RunToEnd`] |
//! | `q`            | [`ViewCommand::Stop`]    |

use crate::error::ConfigError;
use crate::types::ViewSettings;
use cellplace_core::EpochControl;
use std::str::FromStr;

/// A host's answer at a progress report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewCommand {
    /// Run until the next report.
    Proceed,
    /// Report every `n` epochs from now on.
    Refresh(u32),
    /// Stop pausing and report only the final result.
    RunToEnd,
    /// Freeze now with the best placement so far.
    Stop,
}

impl FromStr for ViewCommand {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        match input {
            "" | "p" => Ok(ViewCommand::Proceed),
            "all" => Ok(ViewCommand::RunToEnd),
            "q" => Ok(ViewCommand::Stop),
            _ => match input.parse::<u32>() {
                Ok(n) if n > 0 => Ok(ViewCommand::Refresh(n)),
                _ => Err(ConfigError::UnknownCommand(input.to_string())),
            },
        }
    }
}

impl ViewSettings {
    /// Applies a host command to these settings and says whether the run
    /// should go on.
    pub fn apply(&mut self, command: ViewCommand) -> EpochControl {
        match command {
            ViewCommand::Proceed => EpochControl::Continue,
            ViewCommand::Refresh(n) => {
                self.refresh_rate = n;
                EpochControl::Continue
            }
            ViewCommand::RunToEnd => {
                self.refresh_rate = 0;
                self.step = false;
                EpochControl::Continue
            }
            ViewCommand::Stop => EpochControl::Stop,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_commands() {
        assert_eq!("".parse::<ViewCommand>().unwrap(), ViewCommand::Proceed);
        assert_eq!("  p \n".parse::<ViewCommand>().unwrap(), ViewCommand::Proceed);
        assert_eq!("25".parse::<ViewCommand>().unwrap(), ViewCommand::Refresh(25));
        assert_eq!("all".parse::<ViewCommand>().unwrap(), ViewCommand::RunToEnd);
        assert_eq!("q".parse::<ViewCommand>().unwrap(), ViewCommand::Stop);
    }

    #[test]
    fn reject_unknown_commands() {
        for input in ["0", "-3", "go", "p q"] {
            let err = input.parse::<ViewCommand>().unwrap_err();
            assert!(matches!(err, ConfigError::UnknownCommand(_)), "{input}");
        }
    }

    #[test]
    fn refresh_changes_rate() {
        let mut view = ViewSettings::default();
        assert_eq!(view.apply(ViewCommand::Refresh(3)), EpochControl::Continue);
        assert_eq!(view.refresh_rate, 3);
    }

    #[test]
    fn run_to_end_stops_pausing() {
        let mut view = ViewSettings {
            refresh_rate: 5,
            step: true,
        };
        assert_eq!(view.apply(ViewCommand::RunToEnd), EpochControl::Continue);
        assert!(!view.step);
        assert!(!view.should_report(5));
    }

    #[test]
    fn stop_requests_freeze() {
        let mut view = ViewSettings::default();
        let before = view.clone();
        assert_eq!(view.apply(ViewCommand::Stop), EpochControl::Stop);
        assert_eq!(view, before);
    }
}
