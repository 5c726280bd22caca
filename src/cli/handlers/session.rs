//! Interactive session
//!
//! A menu loop over one in-memory store. Every action only offers the
//! tickets whose controls are enabled: edits and `start` for created
//! tickets, `complete` for tickets under assistance, rating for completed
//! tickets without a rating.

use super::actions::{Action, TicketRef, execute};
use crate::cli::output::{OutputFormatter, render_row};
use crate::core::{LifecycleAction, Rating, RatingPolicy, Ticket, can_edit_content};
use crate::error::Result;
use crate::storage::TicketRepository;
use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};
use tracing::info;

/// Entries of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    NewTicket,
    Edit,
    Start,
    Complete,
    Rate,
    Delete,
    Quit,
}

impl MenuItem {
    pub const ALL: [Self; 7] = [
        Self::NewTicket,
        Self::Edit,
        Self::Start,
        Self::Complete,
        Self::Rate,
        Self::Delete,
        Self::Quit,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::NewTicket => "New ticket",
            Self::Edit => "Edit a ticket",
            Self::Start => "Start assistance",
            Self::Complete => "Mark completed",
            Self::Rate => "Rate a ticket",
            Self::Delete => "Delete a ticket",
            Self::Quit => "Quit",
        }
    }

    /// Whether this menu entry applies to `ticket`
    pub fn applies_to(self, ticket: &Ticket) -> bool {
        match self {
            Self::Edit => can_edit_content(ticket.status),
            Self::Start => LifecycleAction::Start.apply(ticket.status).is_ok(),
            Self::Complete => LifecycleAction::Complete.apply(ticket.status).is_ok(),
            Self::Rate => RatingPolicy::can_rate(ticket),
            Self::Delete => true,
            Self::NewTicket | Self::Quit => false,
        }
    }
}

/// Handle the `session` command
pub fn handle_session_command<R>(store: &mut R, formatter: &OutputFormatter) -> Result<()>
where
    R: TicketRepository + ?Sized,
{
    let theme = ColorfulTheme::default();
    let labels: Vec<_> = MenuItem::ALL.iter().map(|item| item.label()).collect();
    info!(tickets = store.len(), "Interactive session started");

    loop {
        formatter.info("");
        formatter.print_tickets(store.list())?;
        formatter.info("");

        let choice = Select::with_theme(&theme)
            .with_prompt("What would you like to do?")
            .items(&labels)
            .default(0)
            .interact()?;
        let item = MenuItem::ALL[choice];
        if item == MenuItem::Quit {
            break;
        }

        let Some(action) = prompt_action(&*store, item, &theme, formatter)? else {
            continue;
        };

        match execute(store, &action) {
            Ok(outcome) => formatter.success(&format!("✅ {}", outcome.message())),
            Err(e) if e.is_recoverable() => {
                formatter.warning(&format!("⚠️  {}", e.user_message()));
            },
            Err(e) => return Err(e),
        }
    }

    info!(tickets = store.len(), "Interactive session ended");
    Ok(())
}

/// Collect the input an action needs; `None` when the user backs out
fn prompt_action<R>(
    store: &R,
    item: MenuItem,
    theme: &ColorfulTheme,
    formatter: &OutputFormatter,
) -> Result<Option<Action>>
where
    R: TicketRepository + ?Sized,
{
    if item == MenuItem::NewTicket {
        return Ok(Some(Action::Create {
            title: prompt_text(theme, "Title", None)?,
            description: prompt_text(theme, "Description", None)?,
        }));
    }

    let Some(ticket) = pick_ticket(store.list(), item, theme, formatter)? else {
        return Ok(None);
    };
    let target = TicketRef::Id(ticket.id.clone());

    let action = match item {
        MenuItem::Edit => Action::Edit {
            target,
            title: Some(prompt_text(theme, "Title", Some(&ticket.title))?),
            description: Some(prompt_text(theme, "Description", Some(&ticket.description))?),
        },
        MenuItem::Start => Action::Lifecycle {
            target,
            action: LifecycleAction::Start,
        },
        MenuItem::Complete => Action::Lifecycle {
            target,
            action: LifecycleAction::Complete,
        },
        MenuItem::Rate => {
            let choices: Vec<String> = (Rating::MIN..=Rating::MAX)
                .filter_map(|value| Rating::new(value).ok())
                .map(Rating::stars)
                .collect();
            let index = Select::with_theme(theme)
                .with_prompt("How satisfied are you with the resolution?")
                .items(&choices)
                .default(choices.len() - 1)
                .interact()?;
            Action::Rate {
                target,
                value: i64::from(Rating::MIN) + i64::try_from(index).unwrap_or_default(),
            }
        },
        MenuItem::Delete => {
            let confirmed = Confirm::with_theme(theme)
                .with_prompt(format!("Delete '{}'?", ticket.title))
                .default(false)
                .interact()?;
            if !confirmed {
                return Ok(None);
            }
            Action::Remove { target }
        },
        MenuItem::NewTicket | MenuItem::Quit => return Ok(None),
    };

    Ok(Some(action))
}

/// Tickets a menu entry can act on, with their list positions
pub fn eligible_tickets(tickets: &[Ticket], item: MenuItem) -> Vec<(usize, &Ticket)> {
    tickets
        .iter()
        .enumerate()
        .filter(|(_, ticket)| item.applies_to(ticket))
        .map(|(index, ticket)| (index + 1, ticket))
        .collect()
}

fn pick_ticket<'a>(
    tickets: &'a [Ticket],
    item: MenuItem,
    theme: &ColorfulTheme,
    formatter: &OutputFormatter,
) -> Result<Option<&'a Ticket>> {
    let candidates = eligible_tickets(tickets, item);
    if candidates.is_empty() {
        formatter.info(&format!(
            "No tickets available for '{}'.",
            item.label().to_lowercase()
        ));
        return Ok(None);
    }

    let rows: Vec<String> = candidates
        .iter()
        .map(|(position, ticket)| render_row(*position, ticket))
        .collect();
    let index = Select::with_theme(theme)
        .with_prompt("Which ticket?")
        .items(&rows)
        .default(0)
        .interact_opt()?;

    Ok(index.map(|i| candidates[i].1))
}

fn prompt_text(theme: &ColorfulTheme, prompt: &str, current: Option<&str>) -> Result<String> {
    let mut input = Input::<String>::with_theme(theme).with_prompt(prompt);
    if let Some(current) = current {
        input = input.with_initial_text(current);
    }
    let value = input
        .validate_with(|value: &String| -> std::result::Result<(), &str> {
            if value.trim().is_empty() {
                Err("This field is required")
            } else {
                Ok(())
            }
        })
        .interact_text()?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Status;
    use crate::test_utils::{rating, store_with_sample_tickets};

    #[test]
    fn test_menu_items_gate_on_policy() {
        let store = store_with_sample_tickets();
        // newest first: Completed, UnderAssistance, Created
        let positions = |item: MenuItem| -> Vec<usize> {
            eligible_tickets(store.list(), item)
                .into_iter()
                .map(|(position, _)| position)
                .collect()
        };

        assert_eq!(positions(MenuItem::Edit), vec![3]);
        assert_eq!(positions(MenuItem::Start), vec![3]);
        assert_eq!(positions(MenuItem::Complete), vec![2]);
        assert_eq!(positions(MenuItem::Rate), vec![1]);
        assert_eq!(positions(MenuItem::Delete), vec![1, 2, 3]);
        assert!(positions(MenuItem::Quit).is_empty());
    }

    #[test]
    fn test_rated_ticket_drops_out_of_rate_menu() {
        let mut store = store_with_sample_tickets();
        let id = store.list()[0].id.clone();
        assert_eq!(store.get(&id).unwrap().status, Status::Completed);

        store.set_rating(&id, rating(4));
        assert!(eligible_tickets(store.list(), MenuItem::Rate).is_empty());
    }

    #[test]
    fn test_labels() {
        assert_eq!(MenuItem::ALL.len(), 7);
        assert_eq!(MenuItem::Quit.label(), "Quit");
    }
}
