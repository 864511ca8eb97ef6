//! Project Store
//!
//! Owns the project collection and its storage. Every mutation that
//! changes state rewrites the whole collection; if that write fails the
//! in-memory state is rolled back so memory and storage never diverge.

use log::{debug, warn};

use crate::config::StoreConfig;
use crate::domain::{find_index, Project, ProjectId, Todo, TodoFields, TodoId};
use crate::error::{StoreError, StoreResult};
use crate::storage::KeyValueStorage;


/// Result of deleting a project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRemoval {
    /// The project that was deleted
    pub removed: Project,
    /// Fresh default project created because the collection became empty
    pub recreated: Option<Project>,
}

/// The project/todo data store
#[derive(Debug)]
pub struct ProjectStore<S> {
    projects: Vec<Project>,
    storage: S,
    config: StoreConfig,
}

impl<S: KeyValueStorage> ProjectStore<S> {
    /// Load the persisted collection, or seed the default project.
    ///
    /// Never fails: unreadable or non-conforming data counts as no prior
    /// state. A rejected payload is first copied to the backup key so the
    /// next save does not destroy it.
    pub fn open(mut storage: S, config: StoreConfig) -> Self {
        let restored = match load(&storage, &config) {
            Loaded::Restored(projects) => Some(projects),
            Loaded::Absent => None,
            Loaded::Rejected(raw) => {
                let backup_key = config.backup_key();
                match storage.set_item(&backup_key, &raw) {
                    Ok(()) => warn!("[STORE] rejected projects backed up under '{}'", backup_key),
                    Err(e) => warn!("[STORE] cannot back up rejected projects: {}", e),
                }
                None
            }
        };
        let projects = restored.unwrap_or_else(|| {
            debug!("[STORE] seeding '{}'", config.default_project_title);
            vec![Project::default_project(config.default_project_title.clone())]
        });
        Self {
            projects,
            storage,
            config,
        }
    }

    /// Read and validate the collection stored under the configured key
    pub fn restore(storage: &S, config: &StoreConfig) -> Option<Vec<Project>> {
        match load(storage, config) {
            Loaded::Restored(projects) => Some(projects),
            Loaded::Absent | Loaded::Rejected(_) => None,
        }
    }

    /// Write the whole collection to storage
    pub fn persist(&mut self) -> StoreResult<()> {
        let json = serde_json::to_string(&self.projects)?;
        self.storage.set_item(&self.config.storage_key, &json)?;
        Ok(())
    }

    // ========================
    // Queries
    // ========================

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn project(&self, id: ProjectId) -> Option<&Project> {
        find_index(&self.projects, id).map(|index| &self.projects[index])
    }

    /// Number of todos in a project, `None` if it does not exist
    pub fn todo_count(&self, id: ProjectId) -> Option<usize> {
        self.project(id).map(|project| project.todos.len())
    }

    pub fn todo(&self, project_id: ProjectId, todo_id: TodoId) -> Option<&Todo> {
        let project = self.project(project_id)?;
        find_index(&project.todos, todo_id).map(|index| &project.todos[index])
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    // ========================
    // Mutations
    // ========================

    /// Append an empty project with a fresh id
    pub fn add_project(&mut self, title: impl Into<String>) -> StoreResult<Project> {
        let id = ProjectId::generate(self.projects.iter().map(|project| &project.id))
            .ok_or(StoreError::ProjectIdsExhausted)?;
        let project = Project::new(id, title);

        let snapshot = self.projects.clone();
        self.projects.push(project.clone());
        self.save_or_rollback(snapshot)?;

        debug!("[STORE] added project {} '{}'", project.id, project.title);
        Ok(project)
    }

    /// Delete a project; deleting the last one recreates the default project
    pub fn delete_project(&mut self, id: ProjectId) -> StoreResult<Option<ProjectRemoval>> {
        let Some(index) = find_index(&self.projects, id) else {
            debug!("[STORE] delete: no project {}", id);
            return Ok(None);
        };

        let snapshot = self.projects.clone();
        let removed = self.projects.remove(index);
        let recreated = if self.projects.is_empty() {
            let project = Project::default_project(self.config.default_project_title.clone());
            self.projects.push(project.clone());
            Some(project)
        } else {
            None
        };
        self.save_or_rollback(snapshot)?;

        debug!(
            "[STORE] deleted project {} (default recreated: {})",
            id,
            recreated.is_some()
        );
        Ok(Some(ProjectRemoval { removed, recreated }))
    }

    /// Append a todo to a project, enforcing the per-project cap first
    pub fn add_todo(
        &mut self,
        project_id: ProjectId,
        todo_id: TodoId,
        fields: TodoFields,
    ) -> StoreResult<Todo> {
        let index =
            find_index(&self.projects, project_id).ok_or(StoreError::ProjectNotFound(project_id))?;
        let project = &self.projects[index];

        if project.todos.len() >= self.config.max_todos {
            return Err(StoreError::TodoLimitReached {
                project: project_id,
                limit: self.config.max_todos,
            });
        }
        if find_index(&project.todos, todo_id).is_some() {
            return Err(StoreError::DuplicateTodo {
                project: project_id,
                todo: todo_id,
            });
        }

        let todo = Todo::new(todo_id, fields);
        let snapshot = self.projects.clone();
        self.projects[index].todos.push(todo.clone());
        self.save_or_rollback(snapshot)?;

        debug!("[STORE] added todo {} to project {}", todo_id, project_id);
        Ok(todo)
    }

    /// Replace the four editable fields of a todo; `None` if it does not exist
    pub fn edit_todo(
        &mut self,
        project_id: ProjectId,
        todo_id: TodoId,
        fields: TodoFields,
    ) -> StoreResult<Option<Todo>> {
        let Some((project_index, todo_index)) = self.locate(project_id, todo_id) else {
            debug!("[STORE] edit: no todo {} in project {}", todo_id, project_id);
            return Ok(None);
        };

        let snapshot = self.projects.clone();
        let todo = &mut self.projects[project_index].todos[todo_index];
        todo.apply(fields);
        let edited = todo.clone();
        self.save_or_rollback(snapshot)?;

        Ok(Some(edited))
    }

    /// Remove a todo; `None` if it does not exist
    pub fn remove_todo(
        &mut self,
        project_id: ProjectId,
        todo_id: TodoId,
    ) -> StoreResult<Option<Todo>> {
        let Some((project_index, todo_index)) = self.locate(project_id, todo_id) else {
            debug!("[STORE] remove: no todo {} in project {}", todo_id, project_id);
            return Ok(None);
        };

        let snapshot = self.projects.clone();
        let removed = self.projects[project_index].todos.remove(todo_index);
        self.save_or_rollback(snapshot)?;

        Ok(Some(removed))
    }

    fn locate(&self, project_id: ProjectId, todo_id: TodoId) -> Option<(usize, usize)> {
        let project_index = find_index(&self.projects, project_id)?;
        let todo_index = find_index(&self.projects[project_index].todos, todo_id)?;
        Some((project_index, todo_index))
    }

    fn save_or_rollback(&mut self, snapshot: Vec<Project>) -> StoreResult<()> {
        if let Err(e) = self.persist() {
            warn!("[STORE] save failed, rolling back: {}", e);
            self.projects = snapshot;
            return Err(e);
        }
        Ok(())
    }
}

/// Outcome of reading the storage key
enum Loaded {
    Restored(Vec<Project>),
    Absent,
    /// Present but undecodable or non-conforming; carries the raw payload
    Rejected(String),
}

fn load<S: KeyValueStorage>(storage: &S, config: &StoreConfig) -> Loaded {
    let raw = match storage.get_item(&config.storage_key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Loaded::Absent,
        Err(e) => {
            warn!("[STORE] cannot read saved projects: {}", e);
            return Loaded::Absent;
        }
    };

    let projects: Vec<Project> = match serde_json::from_str(&raw) {
        Ok(projects) => projects,
        Err(e) => {
            warn!("[STORE] ignoring malformed saved projects: {}", e);
            return Loaded::Rejected(raw);
        }
    };

    if let Err(reason) = check_restored(&projects, config.max_todos) {
        warn!("[STORE] ignoring saved projects: {}", reason);
        return Loaded::Rejected(raw);
    }

    debug!("[STORE] restored {} projects", projects.len());
    Loaded::Restored(projects)
}

/// Reasons a decoded collection is not accepted
fn check_restored(projects: &[Project], max_todos: usize) -> Result<(), String> {
    if projects.is_empty() {
        return Err("no projects".to_string());
    }

    let mut ids = std::collections::HashSet::new();
    for project in projects {
        if !ids.insert(project.id) {
            return Err(format!("duplicate project id {}", project.id));
        }
        if project.todos.len() > max_todos {
            return Err(format!(
                "project {} holds {} todos (limit {})",
                project.id,
                project.todos.len(),
                max_todos
            ));
        }
        if project.has_duplicate_todos() {
            return Err(format!("duplicate todo id in project {}", project.id));
        }
    }
    Ok(())
}
