use super::Rating;
use crate::error::TicketDeskError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Opaque ticket identifier, assigned once at creation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketId(String);

impl TicketId {
    /// Wrap an already generated identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First eight characters, for compact display
    pub fn short(&self) -> &str {
        let end = self
            .0
            .char_indices()
            .nth(8)
            .map_or(self.0.len(), |(idx, _)| idx);
        &self.0[..end]
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TicketId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Ticket status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    Created,
    UnderAssistance,
    Completed,
}

impl Status {
    pub const ALL: [Self; 3] = [Self::Created, Self::UnderAssistance, Self::Completed];

    /// Machine-readable name, matching the serialized form
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::UnderAssistance => "under_assistance",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Created => "Created",
            Self::UnderAssistance => "Under Assistance",
            Self::Completed => "Completed",
        };
        f.write_str(label)
    }
}

impl FromStr for Status {
    type Err = TicketDeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "created" => Ok(Self::Created),
            "underassistance" => Ok(Self::UnderAssistance),
            "completed" => Ok(Self::Completed),
            _ => Err(TicketDeskError::ParseError(format!(
                "Unknown status '{s}'. Expected one of: created, under_assistance, completed"
            ))),
        }
    }
}

/// A support ticket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: TicketId,
    pub title: String,
    pub description: String,
    pub status: Status,
    /// Display timestamp (`YYYY-MM-DD HH:MM`), fixed at creation
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
}

impl Ticket {
    pub const fn is_completed(&self) -> bool {
        matches!(self.status, Status::Completed)
    }
}

/// Partial update applied by `TicketStore::update`
///
/// Fields left as `None` keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<Status>,
}

impl TicketPatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub const fn status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    pub const fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.status.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parsing() {
        assert_eq!("created".parse::<Status>().unwrap(), Status::Created);
        assert_eq!(
            "Under Assistance".parse::<Status>().unwrap(),
            Status::UnderAssistance
        );
        assert_eq!(
            "under-assistance".parse::<Status>().unwrap(),
            Status::UnderAssistance
        );
        assert_eq!(" COMPLETED ".parse::<Status>().unwrap(), Status::Completed);
        assert!("closed".parse::<Status>().is_err());
    }

    #[test]
    fn test_status_display_and_serde() {
        assert_eq!(Status::UnderAssistance.to_string(), "Under Assistance");
        let json = serde_json::to_string(&Status::UnderAssistance).unwrap();
        assert_eq!(json, "\"under_assistance\"");
        for status in Status::ALL {
            assert_eq!(status.as_str().parse::<Status>().unwrap(), status);
        }
    }

    #[test]
    fn test_ticket_id_short() {
        let id = TicketId::new("lq2k9x0abc123def");
        assert_eq!(id.short(), "lq2k9x0a");
        assert_eq!(TicketId::new("abc").short(), "abc");
    }

    #[test]
    fn test_ticket_json_omits_missing_rating() {
        let ticket = Ticket {
            id: TicketId::new("t1"),
            title: "Login bug".to_string(),
            description: "Button unresponsive".to_string(),
            status: Status::Created,
            created_at: "2024-05-01 09:30".to_string(),
            rating: None,
        };
        let value = serde_json::to_value(&ticket).unwrap();
        assert_eq!(value["id"], "t1");
        assert_eq!(value["status"], "created");
        assert!(value.get("rating").is_none());
    }

    #[test]
    fn test_patch_builder() {
        assert!(TicketPatch::new().is_empty());
        let patch = TicketPatch::new().title("New").status(Status::Completed);
        assert_eq!(patch.title.as_deref(), Some("New"));
        assert_eq!(patch.description, None);
        assert_eq!(patch.status, Some(Status::Completed));
    }
}
