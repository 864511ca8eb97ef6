//! Store configuration

/// Key the project collection is stored under
pub const DEFAULT_STORAGE_KEY: &str = "myTodoApp_data";

/// Most todos a single project may hold
pub const MAX_TODOS_PER_PROJECT: usize = 9;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Storage key holding the serialized projects
    pub storage_key: String,
    /// Todo cap per project, checked before every insert
    pub max_todos: usize,
    /// Title of the seeded (or recreated) default project
    pub default_project_title: String,
    /// Title used when a new project is given a blank one
    pub untitled_project_title: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            max_todos: MAX_TODOS_PER_PROJECT,
            default_project_title: "Default Project".to_string(),
            untitled_project_title: "New Project".to_string(),
        }
    }
}

impl StoreConfig {
    /// Key a rejected saved payload is copied to before it can be overwritten
    pub fn backup_key(&self) -> String {
        format!("{}.backup", self.storage_key)
    }

    /// Trimmed user title, or the untitled fallback when blank
    pub fn project_title(&self, raw: &str) -> String {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            self.untitled_project_title.clone()
        } else {
            trimmed.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_title_falls_back() {
        let config = StoreConfig::default();
        assert_eq!(config.project_title("   "), "New Project");
        assert_eq!(config.project_title(" Groceries "), "Groceries");
    }
}
