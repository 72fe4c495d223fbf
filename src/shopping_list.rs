//! # Shopping List Module
//!
//! This module holds the session's shopping list: a set of canonical ingredient
//! strings kept in insertion order for display and printing.
//!
//! ## Features
//!
//! - Set semantics: adding an existing canonical string is a no-op
//! - Monotonic growth: there is no removal operation
//! - Change notification to subscribed observers on every "add all"
//! - Derived per-card state (`NotAdded` / `Added`) recomputed on demand
//!
//! ## Usage
//!
//! ```rust
//! use cocktails::recipe_model::Ingredient;
//! use cocktails::shopping_list::{CardState, ShoppingList};
//!
//! let ingredients = vec![
//!     Ingredient::new("Gin").with_measure("2 oz"),
//!     Ingredient::new("Tonic"),
//! ];
//!
//! let mut list = ShoppingList::new();
//! assert_eq!(list.card_state(&ingredients), CardState::NotAdded);
//!
//! list.add_all(&ingredients);
//! assert!(list.has("2 oz Gin"));
//! assert_eq!(list.card_state(&ingredients), CardState::Added);
//! assert_eq!(list.items(), vec!["2 oz Gin", "Tonic"]);
//! ```

use log::{debug, info};
use std::collections::HashSet;
use std::fmt;

use crate::recipe_model::Ingredient;

/// Outcome of one "add all" action, delivered to observers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListChange {
    /// Canonical strings that were not on the list before, in insertion order
    pub added: Vec<String>,
    /// Number of entries on the list after the action
    pub total: usize,
}

/// Receives a notification after every "add all" action
pub trait ListObserver {
    fn on_change(&self, change: &ListChange);
}

impl<F> ListObserver for F
where
    F: Fn(&ListChange),
{
    fn on_change(&self, change: &ListChange) {
        self(change)
    }
}

/// Whether a recipe card's ingredients are all on the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardState {
    /// At least one canonical string is missing from the list
    NotAdded,
    /// Every canonical string is on the list; "add all" is disabled
    Added,
}

/// Session-lifetime shopping list keyed by canonical ingredient strings
#[derive(Default)]
pub struct ShoppingList {
    /// Entries in insertion order
    items: Vec<String>,
    /// Membership index over `items`
    index: HashSet<String>,
    observers: Vec<Box<dyn ListObserver>>,
}

impl ShoppingList {
    /// Create an empty shopping list
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer notified after every `add_all`
    pub fn subscribe<O>(&mut self, observer: O)
    where
        O: ListObserver + 'static,
    {
        self.observers.push(Box::new(observer));
        debug!("Shopping list observer registered ({} total)", self.observers.len());
    }

    /// Add every ingredient's canonical string, in order, then notify observers
    ///
    /// Strings already on the list are skipped, so repeating the same batch
    /// leaves the list unchanged.
    pub fn add_all(&mut self, ingredients: &[Ingredient]) -> ListChange {
        self.add_canonical(ingredients.iter().map(Ingredient::canonical))
    }

    /// Add already-canonical strings, in order, then notify observers
    pub fn add_canonical<I>(&mut self, entries: I) -> ListChange
    where
        I: IntoIterator<Item = String>,
    {
        let mut added = Vec::new();
        for entry in entries {
            if self.index.insert(entry.clone()) {
                self.items.push(entry.clone());
                added.push(entry);
            } else {
                debug!("'{}' already on shopping list", entry);
            }
        }

        let change = ListChange {
            added,
            total: self.items.len(),
        };
        info!(
            "Added {} entries to shopping list ({} total)",
            change.added.len(),
            change.total
        );

        for observer in &self.observers {
            observer.on_change(&change);
        }
        change
    }

    /// Membership test on a canonical string
    pub fn has(&self, canonical: &str) -> bool {
        self.index.contains(canonical)
    }

    /// Whether every ingredient's canonical string is already on the list
    pub fn all_present(&self, ingredients: &[Ingredient]) -> bool {
        all_present_in(ingredients, &self.index)
    }

    /// Whether every given canonical string is already on the list
    pub fn contains_all_canonical(&self, entries: &[String]) -> bool {
        entries.iter().all(|entry| self.has(entry))
    }

    /// Per-ingredient highlight flags, in the order given
    pub fn membership(&self, ingredients: &[Ingredient]) -> Vec<bool> {
        ingredients
            .iter()
            .map(|ingredient| self.has(&ingredient.canonical()))
            .collect()
    }

    /// Derived state of a recipe card showing these ingredients
    pub fn card_state(&self, ingredients: &[Ingredient]) -> CardState {
        if self.all_present(ingredients) {
            CardState::Added
        } else {
            CardState::NotAdded
        }
    }

    /// Snapshot of the entries in insertion order
    pub fn items(&self) -> Vec<String> {
        self.items.clone()
    }

    /// Snapshot of the membership set
    pub fn snapshot(&self) -> HashSet<String> {
        self.index.clone()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl fmt::Debug for ShoppingList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShoppingList")
            .field("items", &self.items)
            .field("observers", &self.observers.len())
            .finish()
    }
}

/// Whether every ingredient's canonical string is in `snapshot`
///
/// Vacuously true for an empty ingredient sequence.
pub fn all_present_in(ingredients: &[Ingredient], snapshot: &HashSet<String>) -> bool {
    ingredients
        .iter()
        .all(|ingredient| snapshot.contains(&ingredient.canonical()))
}
