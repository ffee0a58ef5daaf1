//! Interactive controls
//!
//! Each line typed in a browse session is one UI change event: the search
//! box, the category selector or the sort selector changing value.

use super::criteria::{FilterCriteria, SortOrder, ALL_CATEGORIES};

pub const HELP_TEXT: &str = "\
Commands:
  search <text>        Filter titles containing <text> (no text clears the search)
  category <label>     Show only <label> (`category all` or no label shows everything)
  sort <order>         none, low-high (asc) or high-low (desc)
  reset                Clear search, category and sort
  categories           List the available categories
  help                 Show this message
  quit                 Leave the session";

/// A user interaction in a browse session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlEvent {
    SetSearch(String),
    SetCategory(String),
    SetSort(SortOrder),
    Reset,
    ShowCategories,
    Help,
    Quit,
}

/// Parse one input line into a control event.
///
/// Only the single separator after the command word is dropped from a search
/// term, so leading and trailing spaces in the term are kept.
pub fn parse_command(line: &str) -> Result<ControlEvent, String> {
    let line = line.trim_start().trim_end_matches(['\r', '\n']);
    let (command, raw_argument) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest),
        None => (line, ""),
    };
    let argument = raw_argument.trim();

    match command.to_lowercase().as_str() {
        "search" | "s" | "/" => Ok(ControlEvent::SetSearch(raw_argument.to_string())),
        "category" | "c" => {
            let category = if argument.is_empty() {
                ALL_CATEGORIES
            } else {
                argument
            };
            Ok(ControlEvent::SetCategory(category.to_string()))
        }
        "sort" | "o" => argument.parse().map(ControlEvent::SetSort),
        "reset" => Ok(ControlEvent::Reset),
        "categories" => Ok(ControlEvent::ShowCategories),
        "help" | "?" => Ok(ControlEvent::Help),
        "quit" | "exit" | "q" => Ok(ControlEvent::Quit),
        "" => Err("Empty command. Type `help` for the list of commands".to_string()),
        other => Err(format!(
            "Unknown command: {other}. Type `help` for the list of commands"
        )),
    }
}

/// New criteria after a filter event, or `None` for events that do not touch the filters
pub fn update_criteria(criteria: &FilterCriteria, event: &ControlEvent) -> Option<FilterCriteria> {
    match event {
        ControlEvent::SetSearch(term) => Some(FilterCriteria {
            search_term: term.clone(),
            ..criteria.clone()
        }),
        ControlEvent::SetCategory(category) => Some(FilterCriteria {
            category: category.clone(),
            ..criteria.clone()
        }),
        ControlEvent::SetSort(order) => Some(FilterCriteria {
            sort_order: *order,
            ..criteria.clone()
        }),
        ControlEvent::Reset => Some(FilterCriteria::default()),
        ControlEvent::ShowCategories | ControlEvent::Help | ControlEvent::Quit => None,
    }
}
