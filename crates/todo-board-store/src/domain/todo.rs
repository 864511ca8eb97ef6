//! Todo Entity
//!
//! A single task inside a project, with typed priority and due date.

use chrono::NaiveDate;
use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

use super::entity::Entity;

/// Wire and `<input type="date">` format for due dates
const DUE_FORMAT: &str = "%Y-%m-%d";

/// Rejected form input for one of the editable todo fields
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid due date '{0}', expected YYYY-MM-DD")]
    InvalidDueDate(String),
    #[error("invalid priority '{0}', expected Low, Medium or High")]
    InvalidPriority(String),
}

/// Todo identifier, unique within its project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(pub Uuid);

impl TodoId {
    /// Fresh random id
    pub fn new() -> Self {
        TodoId(Uuid::new_v4())
    }
}

impl Default for TodoId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for TodoId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(TodoId)
    }
}

/// Todo priority
///
/// Saved values are read case-insensitively; anything unrecognised loads as `Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(ValidationError::InvalidPriority(s.to_string())),
        }
    }
}

impl From<String> for Priority {
    fn from(value: String) -> Self {
        value.parse().unwrap_or_else(|_| {
            warn!("[STORE] unknown saved priority '{}', using Low", value);
            Priority::Low
        })
    }
}

/// Due date of a todo
///
/// Form input must be a calendar date. Saved values that are not
/// (free-form text such as `Jan 10`) are kept verbatim so they survive a
/// load/save cycle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DueDate {
    Date(NaiveDate),
    Unparsed(String),
}

impl DueDate {
    /// Today in the local time zone
    pub fn today() -> Self {
        DueDate::Date(chrono::Local::now().date_naive())
    }

    /// Human label, e.g. `Jan 10, 2026`
    pub fn label(&self) -> String {
        match self {
            DueDate::Date(date) => date.format("%b %-d, %Y").to_string(),
            DueDate::Unparsed(raw) => raw.clone(),
        }
    }

    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            DueDate::Date(date) => Some(*date),
            DueDate::Unparsed(_) => None,
        }
    }
}

impl fmt::Display for DueDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DueDate::Date(date) => write!(f, "{}", date.format(DUE_FORMAT)),
            DueDate::Unparsed(raw) => f.write_str(raw),
        }
    }
}

/// Strict parse used for form input
impl FromStr for DueDate {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), DUE_FORMAT)
            .map(DueDate::Date)
            .map_err(|_| ValidationError::InvalidDueDate(s.to_string()))
    }
}

/// Lenient conversion used for saved data
impl From<String> for DueDate {
    fn from(value: String) -> Self {
        value.parse().unwrap_or(DueDate::Unparsed(value))
    }
}

impl From<DueDate> for String {
    fn from(value: DueDate) -> Self {
        value.to_string()
    }
}

/// The four user-editable fields of a todo, always replaced together
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoFields {
    pub title: String,
    pub due: DueDate,
    pub priority: Priority,
    pub description: String,
}

impl TodoFields {
    /// Validate raw form values
    pub fn parse(
        title: &str,
        due: &str,
        priority: &str,
        description: &str,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            title: title.to_string(),
            due: due.parse()?,
            priority: priority.parse()?,
            description: description.to_string(),
        })
    }
}

/// A todo inside a project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub todo_id: TodoId,
    pub title: String,
    pub due: DueDate,
    pub priority: Priority,
    pub description: String,
}

impl Todo {
    pub fn new(todo_id: TodoId, fields: TodoFields) -> Self {
        Self {
            todo_id,
            title: fields.title,
            due: fields.due,
            priority: fields.priority,
            description: fields.description,
        }
    }

    /// Current editable fields
    pub fn fields(&self) -> TodoFields {
        TodoFields {
            title: self.title.clone(),
            due: self.due.clone(),
            priority: self.priority,
            description: self.description.clone(),
        }
    }

    /// Replace all editable fields; the id never changes
    pub fn apply(&mut self, fields: TodoFields) {
        self.title = fields.title;
        self.due = fields.due;
        self.priority = fields.priority;
        self.description = fields.description;
    }
}

impl Entity for Todo {
    type Id = TodoId;

    fn id(&self) -> Self::Id {
        self.todo_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_parsing() {
        assert_eq!("high".parse::<Priority>(), Ok(Priority::High));
        assert_eq!(" Medium ".parse::<Priority>(), Ok(Priority::Medium));
        assert_eq!(
            "urgent".parse::<Priority>(),
            Err(ValidationError::InvalidPriority("urgent".to_string()))
        );
    }

    #[test]
    fn test_due_date_parsing_and_label() {
        let due: DueDate = "2026-01-10".parse().unwrap();
        assert_eq!(due.to_string(), "2026-01-10");
        assert_eq!(due.label(), "Jan 10, 2026");
        assert!(matches!(
            "Jan 10".parse::<DueDate>(),
            Err(ValidationError::InvalidDueDate(_))
        ));
    }

    #[test]
    fn test_saved_free_form_due_is_kept() {
        let due: DueDate = serde_json::from_str("\"Jan 10\"").unwrap();
        assert_eq!(due, DueDate::Unparsed("Jan 10".to_string()));
        assert_eq!(due.label(), "Jan 10");
        assert_eq!(due.date(), None);
        assert_eq!(serde_json::to_string(&due).unwrap(), "\"Jan 10\"");

        let due: DueDate = serde_json::from_str("\"2026-01-10\"").unwrap();
        assert_eq!(due.date(), NaiveDate::from_ymd_opt(2026, 1, 10));
    }

    #[test]
    fn test_saved_priority_is_lenient() {
        let priority: Priority = serde_json::from_str("\"high\"").unwrap();
        assert_eq!(priority, Priority::High);
        let priority: Priority = serde_json::from_str("\"someday\"").unwrap();
        assert_eq!(priority, Priority::Low);
        assert_eq!(serde_json::to_string(&Priority::Medium).unwrap(), "\"Medium\"");
    }

    #[test]
    fn test_fields_parse_rejects_bad_input() {
        let fields = TodoFields::parse("Buy milk", "2026-02-01", "low", "2 litres").unwrap();
        assert_eq!(fields.priority, Priority::Low);
        assert!(TodoFields::parse("Buy milk", "tomorrow", "low", "").is_err());
        assert!(TodoFields::parse("Buy milk", "2026-02-01", "soon", "").is_err());
    }

    #[test]
    fn test_todo_wire_shape() {
        let id: TodoId = "67e55044-10b1-426f-9247-bb680e5fe0c8".parse().unwrap();
        let todo = Todo::new(
            id,
            TodoFields::parse("Call mom", "2026-03-05", "High", "Sunday").unwrap(),
        );
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "todoId": "67e55044-10b1-426f-9247-bb680e5fe0c8",
                "title": "Call mom",
                "due": "2026-03-05",
                "priority": "High",
                "description": "Sunday",
            })
        );
    }

    #[test]
    fn test_apply_keeps_id() {
        let id = TodoId::new();
        let mut todo = Todo::new(
            id,
            TodoFields::parse("a", "2026-01-10", "low", "b").unwrap(),
        );
        todo.apply(TodoFields::parse("c", "2026-02-01", "high", "d").unwrap());
        assert_eq!(todo.id(), id);
        assert_eq!(todo.title, "c");
        assert_eq!(todo.priority, Priority::High);
    }
}
