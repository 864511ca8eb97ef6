//! Board Configuration

use log::LevelFilter;
use todo_board_store::{DueDate, Priority, StoreConfig, TodoFields};

#[derive(Debug, Clone)]
pub struct BoardConfig {
    pub store: StoreConfig,
    /// Placeholder values for a freshly added todo
    pub new_todo_title: String,
    pub new_todo_priority: Priority,
    pub new_todo_description: String,
    /// Console log level
    pub log_level: LevelFilter,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            store: StoreConfig::default(),
            new_todo_title: "New Task".to_string(),
            new_todo_priority: Priority::Low,
            new_todo_description: "Desc".to_string(),
            log_level: LevelFilter::Debug,
        }
    }
}

impl BoardConfig {
    /// Fields of a new todo, due today
    pub fn placeholder_fields(&self) -> TodoFields {
        TodoFields {
            title: self.new_todo_title.clone(),
            due: DueDate::today(),
            priority: self.new_todo_priority,
            description: self.new_todo_description.clone(),
        }
    }
}
