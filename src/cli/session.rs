//! Session state for the interactive front end
//!
//! Holds the current result batch, the shopping list and the selected
//! measurement system, and turns each command into the text shown to the user.

use chrono::NaiveDate;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use tracing::{debug, info, warn};

use crate::catalog::CatalogClient;
use crate::config::AppConfig;
use crate::localization::LocalizationManager;
use crate::measurement_converter::MeasurementConverter;
use crate::measurement_types::MeasurementSystem;
use crate::printing::render_shopping_list;
use crate::recipe_card::RecipeCard;
use crate::recipe_model::RecipeRecord;
use crate::shopping_list::{ListChange, ShoppingList};

use super::commands::Command;

/// What the front end should do after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Show the text and keep reading commands
    Text(String),
    /// Show the text and exit
    Quit(String),
}

pub struct Session {
    results: Vec<RecipeRecord>,
    list: ShoppingList,
    system: MeasurementSystem,
    converter: MeasurementConverter,
    messages: LocalizationManager,
    /// Changes reported by the shopping list, drained after each add
    notifications: Rc<RefCell<VecDeque<ListChange>>>,
}

impl Session {
    pub fn new(config: &AppConfig, messages: LocalizationManager) -> Self {
        let notifications = Rc::new(RefCell::new(VecDeque::new()));
        let mut list = ShoppingList::new();
        let sink = Rc::clone(&notifications);
        list.subscribe(move |change: &ListChange| sink.borrow_mut().push_back(change.clone()));

        Self {
            results: Vec::new(),
            list,
            system: config.measurement_system,
            converter: MeasurementConverter::with_config(config.conversion.clone()),
            messages,
            notifications,
        }
    }

    pub fn system(&self) -> MeasurementSystem {
        self.system
    }

    pub fn shopping_list(&self) -> &ShoppingList {
        &self.list
    }

    pub fn results(&self) -> &[RecipeRecord] {
        &self.results
    }

    /// Run one command; only `search` touches the catalog
    pub async fn execute(&mut self, command: Command, catalog: &CatalogClient) -> Reply {
        match command {
            Command::Search(query) => Reply::Text(self.search(&query, catalog).await),
            other => self.execute_local(other),
        }
    }

    /// Run any command that does not need the catalog
    pub fn execute_local(&mut self, command: Command) -> Reply {
        match command {
            Command::Search(_) => Reply::Text(self.messages.t("search-missing-query")),
            Command::Add(index) => Reply::Text(self.add_result(&index)),
            Command::List => Reply::Text(self.render_list()),
            Command::Print => Reply::Text(self.print(chrono::Local::now().date_naive())),
            Command::Units(system) => Reply::Text(self.set_units(&system)),
            Command::Help => Reply::Text(self.messages.t("help-commands")),
            Command::Quit => Reply::Quit(self.messages.t("goodbye")),
            Command::Empty => Reply::Text(String::new()),
            Command::Unknown(word) => Reply::Text(
                self.messages
                    .get_message_with_args("unknown-command", &[("command", word.as_str())]),
            ),
        }
    }

    async fn search(&mut self, query: &str, catalog: &CatalogClient) -> String {
        let query = query.trim();
        if query.is_empty() {
            return self.messages.t("search-missing-query");
        }

        match catalog.search(query).await {
            Ok(records) => {
                info!(query = %query, results = records.len(), "Search completed");
                self.show_results(query, records)
            }
            Err(e) => {
                warn!(query = %query, error = %e, "Search failed");
                self.messages
                    .get_message_with_args("search-failed", &[("error", e.to_string().as_str())])
            }
        }
    }

    /// Replace the current result batch and render it
    pub fn show_results(&mut self, query: &str, records: Vec<RecipeRecord>) -> String {
        self.results = records;

        if self.results.is_empty() {
            return self
                .messages
                .get_message_with_args("search-no-results", &[("query", query)]);
        }

        let count = self.results.len().to_string();
        let mut output = self
            .messages
            .get_message_with_args("search-results", &[("count", count.as_str()), ("query", query)]);
        output.push('\n');
        output.push_str(&self.render_results());
        output
    }

    /// Render every card of the current batch against the current list
    pub fn render_results(&self) -> String {
        let mut output = String::new();
        for (i, record) in self.results.iter().enumerate() {
            let card = RecipeCard::build(record, &self.list, self.system, &self.converter);
            output.push_str(&format_card(i + 1, &card));
        }
        output
    }

    /// Add every ingredient of a 1-based result card to the list
    pub fn add_result(&mut self, index: &str) -> String {
        let Some(record) = index
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| self.results.get(i))
        else {
            return self
                .messages
                .get_message_with_args("invalid-index", &[("index", index.trim())]);
        };

        let card = RecipeCard::build(record, &self.list, self.system, &self.converter);
        if !card.can_add() {
            debug!(recipe = %card.name, "Add skipped, card already added");
            return self
                .messages
                .get_message_with_args("already-added", &[("name", card.name.as_str())]);
        }

        self.list.add_all(&card.extracted);

        let mut output = String::new();
        while let Some(change) = self.notifications.borrow_mut().pop_front() {
            let count = change.added.len().to_string();
            output.push_str(&self.messages.get_message_with_args(
                "added-items",
                &[("count", count.as_str()), ("name", card.name.as_str())],
            ));
        }
        output
    }

    /// Show the shopping list with measures in the current system
    pub fn render_list(&self) -> String {
        if self.list.is_empty() {
            return self.messages.t("list-empty");
        }

        let mut output = self.messages.t("list-header");
        output.push('\n');
        for item in self.list.items() {
            output.push_str(&format!(
                "  - {}\n",
                self.converter.format_measured_item(&item, self.system)
            ));
        }
        output
    }

    /// Printable document for the shopping list
    pub fn print(&self, printed_on: NaiveDate) -> String {
        render_shopping_list(&self.list.items(), self.system, &self.converter, printed_on)
    }

    pub fn set_units(&mut self, system: &str) -> String {
        match system.parse::<MeasurementSystem>() {
            Ok(system) => {
                self.system = system;
                info!(system = %system, "Measurement system changed");
                self.messages
                    .get_message_with_args("units-changed", &[("system", system.as_str())])
            }
            Err(_) => self
                .messages
                .get_message_with_args("units-invalid", &[("system", system.trim())]),
        }
    }
}

fn format_card(number: usize, card: &RecipeCard) -> String {
    let badge = if card.can_add() { "" } else { " (added)" };
    let mut output = format!("{}. {}{}\n", number, card.name, badge);

    if !card.description.is_empty() {
        output.push_str(&format!("   {}\n", card.description));
    }
    for (ingredient, in_list) in card.ingredients.iter().zip(&card.in_shopping_list) {
        let mark = if *in_list { "x" } else { " " };
        output.push_str(&format!("   [{}] {}\n", mark, ingredient));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(&AppConfig::default(), LocalizationManager::new().unwrap())
    }

    fn margarita() -> RecipeRecord {
        RecipeRecord::new("Margarita")
            .with_ingredient(1, "Tequila", Some("1 1/2 oz"))
            .with_ingredient(2, "Salt", None)
    }

    #[test]
    fn test_add_then_already_added() {
        let mut session = session();
        session.show_results("margarita", vec![margarita()]);

        let reply = session.add_result("1");
        assert_eq!(reply, "Added 2 ingredients from Margarita to your shopping list.");
        assert_eq!(session.shopping_list().items(), vec!["1 1/2 oz Tequila", "Salt"]);

        let reply = session.add_result("1");
        assert_eq!(reply, "All ingredients of Margarita are already on your shopping list.");
    }

    #[test]
    fn test_invalid_indexes() {
        let mut session = session();
        session.show_results("margarita", vec![margarita()]);

        assert_eq!(session.add_result("0"), "There is no result number 0.");
        assert_eq!(session.add_result("2"), "There is no result number 2.");
        assert_eq!(session.add_result("two"), "There is no result number two.");
        assert!(session.shopping_list().is_empty());
    }

    #[test]
    fn test_card_marks_follow_list() {
        let mut session = session();
        session.show_results("margarita", vec![margarita()]);
        assert!(session.render_results().contains("   [ ] 1.5 oz Tequila\n"));

        session.add_result("1");
        let rendered = session.render_results();
        assert!(rendered.starts_with("1. Margarita (added)\n"));
        assert!(rendered.contains("   [x] Salt\n"));
    }

    #[test]
    fn test_units_switch_changes_list_rendering() {
        let mut session = session();
        session.show_results("margarita", vec![margarita()]);
        session.add_result("1");

        assert!(session.render_list().contains("1.5 oz Tequila"));
        assert_eq!(
            session.set_units("metric"),
            "Measurements are now shown in metric units."
        );
        assert!(session.render_list().contains("44 ml Tequila"));
        assert_eq!(session.system(), MeasurementSystem::Metric);
    }

    #[test]
    fn test_new_search_replaces_results() {
        let mut session = session();
        session.show_results("margarita", vec![margarita()]);
        let reply = session.show_results("zzz", Vec::new());

        assert_eq!(reply, "No drinks found for \"zzz\".");
        assert!(session.results().is_empty());
    }
}
