//! Ticket lifecycle policy
//!
//! `Created → UnderAssistance → Completed`, with `Completed` terminal. The
//! store accepts any status write; the functions here describe which moves
//! are legal so guards and the front-end can enforce them.

use super::Status;
use crate::error::{Result, TicketDeskError};
use std::fmt;
use std::str::FromStr;

impl Status {
    /// The single forward step from this status, if any
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Created => Some(Self::UnderAssistance),
            Self::UnderAssistance => Some(Self::Completed),
            Self::Completed => None,
        }
    }

    pub const fn is_terminal(self) -> bool {
        self.next().is_none()
    }
}

/// Named forward transitions offered to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleAction {
    /// `Created → UnderAssistance`
    Start,
    /// `UnderAssistance → Completed`
    Complete,
}

impl LifecycleAction {
    pub const fn from_status(self) -> Status {
        match self {
            Self::Start => Status::Created,
            Self::Complete => Status::UnderAssistance,
        }
    }

    pub const fn target(self) -> Status {
        match self {
            Self::Start => Status::UnderAssistance,
            Self::Complete => Status::Completed,
        }
    }

    /// Resulting status when the action is taken from `current`
    pub fn apply(self, current: Status) -> Result<Status> {
        if current == self.from_status() {
            Ok(self.target())
        } else {
            Err(TicketDeskError::LifecycleViolation {
                from: current,
                to: self.target(),
            })
        }
    }
}

impl fmt::Display for LifecycleAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Complete => f.write_str("complete"),
        }
    }
}

impl FromStr for LifecycleAction {
    type Err = TicketDeskError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "start" => Ok(Self::Start),
            "complete" => Ok(Self::Complete),
            other => Err(TicketDeskError::ParseError(format!(
                "Unknown action '{other}'. Expected 'start' or 'complete'"
            ))),
        }
    }
}

/// True when `to` is exactly one forward step from `from`
pub fn is_forward_step(from: Status, to: Status) -> bool {
    from.next() == Some(to)
}

/// Title and description are editable only before work starts
pub const fn can_edit_content(status: Status) -> bool {
    matches!(status, Status::Created)
}

/// Actions the front-end should offer for a ticket in `status`
pub fn available_actions(status: Status) -> Vec<LifecycleAction> {
    [LifecycleAction::Start, LifecycleAction::Complete]
        .into_iter()
        .filter(|action| action.from_status() == status)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_and_terminal() {
        assert_eq!(Status::Created.next(), Some(Status::UnderAssistance));
        assert_eq!(Status::UnderAssistance.next(), Some(Status::Completed));
        assert_eq!(Status::Completed.next(), None);
        assert!(Status::Completed.is_terminal());
        assert!(!Status::Created.is_terminal());
    }

    #[test]
    fn test_start_only_from_created() {
        assert_eq!(
            LifecycleAction::Start.apply(Status::Created).unwrap(),
            Status::UnderAssistance
        );
        assert!(matches!(
            LifecycleAction::Start.apply(Status::UnderAssistance),
            Err(TicketDeskError::LifecycleViolation {
                from: Status::UnderAssistance,
                to: Status::UnderAssistance
            })
        ));
        assert!(LifecycleAction::Start.apply(Status::Completed).is_err());
    }

    #[test]
    fn test_complete_only_from_under_assistance() {
        assert_eq!(
            LifecycleAction::Complete
                .apply(Status::UnderAssistance)
                .unwrap(),
            Status::Completed
        );
        assert!(LifecycleAction::Complete.apply(Status::Created).is_err());
        assert!(LifecycleAction::Complete.apply(Status::Completed).is_err());
    }

    #[test]
    fn test_forward_step() {
        for from in Status::ALL {
            for to in Status::ALL {
                let expected = matches!(
                    (from, to),
                    (Status::Created, Status::UnderAssistance)
                        | (Status::UnderAssistance, Status::Completed)
                );
                assert_eq!(is_forward_step(from, to), expected, "{from} -> {to}");
            }
        }
    }

    #[test]
    fn test_content_edit_gating() {
        assert!(can_edit_content(Status::Created));
        assert!(!can_edit_content(Status::UnderAssistance));
        assert!(!can_edit_content(Status::Completed));
    }

    #[test]
    fn test_available_actions() {
        assert_eq!(
            available_actions(Status::Created),
            vec![LifecycleAction::Start]
        );
        assert_eq!(
            available_actions(Status::UnderAssistance),
            vec![LifecycleAction::Complete]
        );
        assert!(available_actions(Status::Completed).is_empty());
    }

    #[test]
    fn test_action_parsing() {
        assert_eq!(
            "Start".parse::<LifecycleAction>().unwrap(),
            LifecycleAction::Start
        );
        assert_eq!(LifecycleAction::Complete.to_string(), "complete");
        assert!("reopen".parse::<LifecycleAction>().is_err());
    }
}
