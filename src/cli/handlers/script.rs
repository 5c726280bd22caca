//! Script mode: one action per input line
//!
//! ```text
//! # comments and blank lines are skipped
//! create Login bug | Button unresponsive
//! start 1
//! complete 1
//! rate 1 5
//! list
//! ```

use super::actions::{Action, Outcome, TicketRef, execute};
use crate::cli::output::OutputFormatter;
use crate::core::{LifecycleAction, Status, Ticket};
use crate::error::{Result, TicketDeskError};
use crate::storage::TicketRepository;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::{info, warn};

/// Result of one script line, as reported in JSON mode
#[derive(Debug, Clone, Serialize)]
pub struct LineReport {
    pub line: usize,
    pub command: String,
    pub ok: bool,
    pub message: String,
}

/// Handle the `script` command
pub fn handle_script_command<R>(
    store: &mut R,
    file: Option<&Path>,
    strict: bool,
    formatter: &OutputFormatter,
) -> Result<()>
where
    R: TicketRepository + ?Sized,
{
    match file {
        Some(path) if path != Path::new("-") => {
            info!("Running script {}", path.display());
            let reader = BufReader::new(File::open(path)?);
            run_script(store, reader, strict, formatter)
        },
        _ => {
            info!("Running script from stdin");
            run_script(store, io::stdin().lock(), strict, formatter)
        },
    }
}

/// Execute every line from `reader`, then print the final ticket list
pub fn run_script<R, B>(
    store: &mut R,
    reader: B,
    strict: bool,
    formatter: &OutputFormatter,
) -> Result<()>
where
    R: TicketRepository + ?Sized,
    B: BufRead,
{
    let mut reports = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let number = index + 1;

        let result = parse_line(&line).and_then(|action| match action {
            Some(action) => execute(store, &action).map(Some),
            None => Ok(None),
        });

        match result {
            Ok(None) => {},
            Ok(Some(Outcome::Listed)) => {
                if !formatter.is_json() {
                    formatter.print_tickets(store.list())?;
                }
            },
            Ok(Some(outcome)) => {
                let message = outcome.message();
                match outcome {
                    Outcome::Unchanged(_) => formatter.warning(&message),
                    _ => formatter.success(&message),
                }
                reports.push(LineReport {
                    line: number,
                    command: line.trim().to_string(),
                    ok: true,
                    message,
                });
            },
            Err(e) => {
                warn!(line = number, "Script command rejected: {e}");
                if !formatter.is_json() {
                    formatter.warning(&format!("line {number}: {}", e.user_message()));
                }
                reports.push(LineReport {
                    line: number,
                    command: line.trim().to_string(),
                    ok: false,
                    message: e.user_message(),
                });
                if strict {
                    // Lines already executed still get reported
                    if formatter.is_json() {
                        formatter.json(&report_document(&reports, store.list()))?;
                    }
                    return Err(e);
                }
            },
        }
    }

    if formatter.is_json() {
        formatter.json(&report_document(&reports, store.list()))
    } else {
        formatter.info("");
        formatter.print_tickets(store.list())
    }
}

/// JSON document printed at the end of a script run
pub fn report_document(reports: &[LineReport], tickets: &[Ticket]) -> serde_json::Value {
    serde_json::json!({
        "results": reports,
        "tickets": tickets,
    })
}

/// Parse one script line; `None` for blank lines and comments
pub fn parse_line(line: &str) -> Result<Option<Action>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();

    let action = match verb.to_lowercase().as_str() {
        "create" | "new" => {
            let (title, description) = rest.split_once('|').ok_or_else(|| {
                TicketDeskError::InvalidInput("Usage: create <title> | <description>".to_string())
            })?;
            Action::Create {
                title: title.trim().to_string(),
                description: description.trim().to_string(),
            }
        },
        "edit" => {
            let mut parts = rest.splitn(3, '|').map(str::trim);
            let target = parts.next().unwrap_or_default().parse::<TicketRef>()?;
            let title = parts.next().filter(|s| !s.is_empty()).map(str::to_string);
            let description = parts.next().filter(|s| !s.is_empty()).map(str::to_string);
            if title.is_none() && description.is_none() {
                return Err(TicketDeskError::InvalidInput(
                    "Usage: edit <ref> | <title> | <description>".to_string(),
                ));
            }
            Action::Edit {
                target,
                title,
                description,
            }
        },
        "start" | "complete" => Action::Lifecycle {
            target: rest.parse()?,
            action: verb.parse::<LifecycleAction>()?,
        },
        "status" => {
            let (target, status) = rest.split_once(char::is_whitespace).ok_or_else(|| {
                TicketDeskError::InvalidInput("Usage: status <ref> <status>".to_string())
            })?;
            Action::SetStatus {
                target: target.parse()?,
                status: status.parse::<Status>()?,
            }
        },
        "rate" => {
            let (target, value) = rest.split_once(char::is_whitespace).ok_or_else(|| {
                TicketDeskError::InvalidInput("Usage: rate <ref> <1-5>".to_string())
            })?;
            let value = value.trim().parse::<i64>().map_err(|_| {
                TicketDeskError::ParseError(format!("Rating must be a number, got '{value}'"))
            })?;
            Action::Rate {
                target: target.parse()?,
                value,
            }
        },
        "remove" | "delete" => Action::Remove {
            target: rest.parse()?,
        },
        "list" => Action::List,
        other => {
            return Err(TicketDeskError::InvalidInput(format!(
                "Unknown command '{other}'"
            )));
        },
    };

    Ok(Some(action))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TicketId;
    use crate::test_utils::{rating, sequential_store};
    use std::io::Cursor;

    #[test]
    fn test_parse_skips_blank_and_comments() {
        assert_eq!(parse_line("").unwrap(), None);
        assert_eq!(parse_line("   # note").unwrap(), None);
    }

    #[test]
    fn test_parse_create() {
        assert_eq!(
            parse_line("create Login bug | Button unresponsive").unwrap(),
            Some(Action::Create {
                title: "Login bug".to_string(),
                description: "Button unresponsive".to_string(),
            })
        );
        assert!(parse_line("create no separator").is_err());
    }

    #[test]
    fn test_parse_edit_keeps_missing_fields() {
        assert_eq!(
            parse_line("edit 2 | | New description").unwrap(),
            Some(Action::Edit {
                target: TicketRef::Position(2),
                title: None,
                description: Some("New description".to_string()),
            })
        );
        assert!(parse_line("edit 2").is_err());
    }

    #[test]
    fn test_parse_status_and_rate() {
        assert_eq!(
            parse_line("status abc123 under assistance").unwrap(),
            Some(Action::SetStatus {
                target: TicketRef::Id(TicketId::new("abc123")),
                status: Status::UnderAssistance,
            })
        );
        assert_eq!(
            parse_line("rate 1 4").unwrap(),
            Some(Action::Rate {
                target: TicketRef::Position(1),
                value: 4,
            })
        );
        assert!(parse_line("rate 1 five").is_err());
        assert!(parse_line("reopen 1").is_err());
    }

    #[test]
    fn test_run_script_end_to_end() {
        let mut store = sequential_store();
        let formatter = OutputFormatter::new(true, true);
        let script = "\
create Login bug | Button unresponsive
start 1
complete 1
rate 1 5
create X | Y
";
        run_script(&mut store, Cursor::new(script), true, &formatter).unwrap();

        let tickets = store.list();
        assert_eq!(tickets.len(), 2);
        assert_eq!(tickets[0].title, "X");
        assert_eq!(tickets[1].status, Status::Completed);
        assert_eq!(tickets[1].rating, Some(rating(5)));
    }

    #[test]
    fn test_strict_stops_at_first_rejection() {
        let mut store = sequential_store();
        let formatter = OutputFormatter::new(true, true);
        let script = "create A | a\ncomplete 1\ncreate B | b\n";

        let err = run_script(&mut store, Cursor::new(script), true, &formatter).unwrap_err();
        assert!(matches!(err, TicketDeskError::LifecycleViolation { .. }));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_report_document_shape() {
        let store = crate::test_utils::store_with_sample_tickets();
        let reports = vec![LineReport {
            line: 2,
            command: "complete 1".to_string(),
            ok: false,
            message: "Cannot move ticket from Created to Completed".to_string(),
        }];

        let document = report_document(&reports, store.list());
        assert_eq!(document["results"][0]["line"], 2);
        assert_eq!(document["results"][0]["ok"], false);
        assert_eq!(document["tickets"].as_array().unwrap().len(), 3);
        assert_eq!(document["tickets"][0]["title"], "VPN drops");
    }

    #[test]
    fn test_lenient_mode_continues() {
        let mut store = sequential_store();
        let formatter = OutputFormatter::new(true, true);
        let script = "create A | a\ncomplete 1\ncreate B | b\n";

        run_script(&mut store, Cursor::new(script), false, &formatter).unwrap();
        assert_eq!(store.len(), 2);
    }
}
