//! Terminal output formatting
//!
//! All user-facing text goes through [`OutputFormatter`], which handles
//! color and the machine-readable JSON mode.

use crate::core::{RatingPolicy, Ticket, available_actions, can_edit_content};
use crate::error::Result;
use colored::Colorize;
use serde::Serialize;

/// Formats messages and ticket lists for the terminal
#[derive(Debug, Clone)]
pub struct OutputFormatter {
    json: bool,
    no_color: bool,
}

impl OutputFormatter {
    pub fn new(json: bool, no_color: bool) -> Self {
        if no_color {
            colored::control::set_override(false);
        }
        Self { json, no_color }
    }

    pub const fn is_json(&self) -> bool {
        self.json
    }

    pub const fn is_colored(&self) -> bool {
        !self.no_color
    }

    /// Success message (suppressed in JSON mode)
    pub fn success(&self, message: &str) {
        if !self.json {
            println!("{}", message.green());
        }
    }

    /// Informational message (suppressed in JSON mode)
    pub fn info(&self, message: &str) {
        if !self.json {
            println!("{message}");
        }
    }

    /// Warning, written to stderr
    pub fn warning(&self, message: &str) {
        eprintln!("{}", message.yellow());
    }

    /// Error, written to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "Error:".red().bold(), message);
    }

    /// Print a value as pretty JSON on stdout
    pub fn json<T: Serialize>(&self, value: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }

    /// Print a ticket snapshot, as a table or as JSON
    pub fn print_tickets(&self, tickets: &[Ticket]) -> Result<()> {
        if self.json {
            return self.json(&serde_json::json!({ "tickets": tickets }));
        }

        if tickets.is_empty() {
            println!("{}", "No tickets yet.".dimmed());
            return Ok(());
        }

        println!(
            "{}",
            format!(
                "{:>3}  {:<16}  {:<16}  {:<6}  {}",
                "#", "STATUS", "CREATED", "RATING", "TITLE"
            )
            .bold()
        );
        for (index, ticket) in tickets.iter().enumerate() {
            println!("{}", render_row(index + 1, ticket));
            println!(
                "     {}  {}",
                ticket.description.dimmed(),
                format!("[{}]", enabled_controls(ticket).join(" · ")).cyan()
            );
        }
        Ok(())
    }
}

/// One table row; the position is 1-based, newest first
pub fn render_row(position: usize, ticket: &Ticket) -> String {
    let status = format!("{:<16}", ticket.status.to_string());
    let status = match ticket.status {
        crate::core::Status::Created => status.blue(),
        crate::core::Status::UnderAssistance => status.yellow(),
        crate::core::Status::Completed => status.green(),
    };
    let rating = ticket
        .rating
        .map_or_else(|| "-".to_string(), |rating| rating.stars());

    format!(
        "{position:>3}  {status}  {:<16}  {rating:<6}  {}",
        ticket.created_at, ticket.title
    )
}

/// Controls the front-end offers for a ticket, e.g. `edit, start, delete`
pub fn enabled_controls(ticket: &Ticket) -> Vec<String> {
    let mut controls = Vec::new();
    if can_edit_content(ticket.status) {
        controls.push("edit".to_string());
    }
    controls.extend(
        available_actions(ticket.status)
            .into_iter()
            .map(|action| action.to_string()),
    );
    if RatingPolicy::can_rate(ticket) {
        controls.push("rate".to_string());
    }
    controls.push("delete".to_string());
    controls
}
