//! Board Controller
//!
//! Turns user interactions into store operations and answers each one
//! with the view patches that bring the page back in line with the store.
//! The active project is UI-only state and never reaches storage.

use log::{debug, error, warn};
use todo_board_store::{
    KeyValueStorage, ProjectId, ProjectStore, StoreError, TodoFields, TodoId,
};

use crate::config::BoardConfig;
use crate::models::{BoardView, EditForm, Notice, ViewPatch};
use crate::render;

pub struct BoardController<S> {
    store: ProjectStore<S>,
    config: BoardConfig,
    active: ProjectId,
    /// Todo currently open in the edit overlay
    editing: Option<TodoId>,
}

impl<S: KeyValueStorage> BoardController<S> {
    /// Open the store; the first project starts active
    pub fn new(storage: S, config: BoardConfig) -> Self {
        let store = ProjectStore::open(storage, config.store.clone());
        let active = store
            .projects()
            .first()
            .map(|project| project.id)
            .unwrap_or(ProjectId::DEFAULT);
        Self {
            store,
            config,
            active,
            editing: None,
        }
    }

    pub fn store(&self) -> &ProjectStore<S> {
        &self.store
    }

    pub fn active(&self) -> ProjectId {
        self.active
    }

    pub fn editing(&self) -> Option<TodoId> {
        self.editing
    }

    /// Full page for the initial render
    pub fn view(&self) -> BoardView {
        render::board(&self.store, self.active)
    }

    // ========================
    // Projects
    // ========================

    /// Switch tabs and rebuild the task list from the newly active project
    pub fn select_project(&mut self, id: ProjectId) -> Vec<ViewPatch> {
        if id == self.active {
            return Vec::new();
        }
        let Some(project) = self.store.project(id) else {
            warn!("[BOARD] select: no project {}", id);
            return Vec::new();
        };
        let tasks = render::task_list(project);
        self.active = id;
        vec![ViewPatch::ActivateTab(id), ViewPatch::RebuildTasks(tasks)]
    }

    pub fn add_project(&mut self, raw_title: &str) -> Vec<ViewPatch> {
        let title = self.config.store.project_title(raw_title);
        match self.store.add_project(title) {
            Ok(project) => vec![ViewPatch::AppendTab(render::tab(&project))],
            Err(e) => self.failure(e),
        }
    }

    /// Delete a project; if it was active, fall back to the default project
    /// (or the first one left)
    pub fn delete_project(&mut self, id: ProjectId) -> Vec<ViewPatch> {
        let removal = match self.store.delete_project(id) {
            Ok(Some(removal)) => removal,
            Ok(None) => {
                debug!("[BOARD] delete: project {} already gone", id);
                return Vec::new();
            }
            Err(e) => return self.failure(e),
        };

        let mut patches = vec![ViewPatch::RemoveTab(id)];
        if let Some(project) = &removal.recreated {
            patches.push(ViewPatch::AppendTab(render::tab(project)));
        }

        if id == self.active {
            if self.editing.take().is_some() {
                patches.push(ViewPatch::HideOverlay);
            }
            let fallback = self
                .store
                .project(ProjectId::DEFAULT)
                .or_else(|| self.store.projects().first());
            if let Some(project) = fallback {
                self.active = project.id;
                patches.push(ViewPatch::ActivateTab(project.id));
                patches.push(ViewPatch::RebuildTasks(render::task_list(project)));
            }
        }
        patches
    }

    // ========================
    // Todos
    // ========================

    /// Add a placeholder todo to the active project, unless it is full
    pub fn add_todo(&mut self) -> Vec<ViewPatch> {
        let limit = self.config.store.max_todos;
        match self.store.todo_count(self.active) {
            None => {
                warn!("[BOARD] add todo: active project {} is gone", self.active);
                return Vec::new();
            }
            Some(count) if count >= limit => {
                return vec![ViewPatch::Notify(Notice::LimitReached { limit })];
            }
            Some(_) => {}
        }

        let fields = self.config.placeholder_fields();
        match self.store.add_todo(self.active, TodoId::new(), fields) {
            Ok(todo) => vec![ViewPatch::PrependTask(render::task(&todo))],
            Err(e) => self.failure(e),
        }
    }

    /// Open the edit overlay pre-filled with a todo of the active project
    pub fn open_edit(&mut self, todo_id: TodoId) -> Vec<ViewPatch> {
        let Some(todo) = self.store.todo(self.active, todo_id) else {
            debug!("[BOARD] edit: no todo {} in project {}", todo_id, self.active);
            return Vec::new();
        };
        let form = render::edit_form(todo);
        self.editing = Some(todo_id);
        vec![ViewPatch::ShowOverlay(form)]
    }

    /// Validate and save the overlay, then rebuild the list from the store
    pub fn submit_edit(&mut self, form: EditForm) -> Vec<ViewPatch> {
        if self.editing != Some(form.todo_id) {
            debug!("[BOARD] submit: todo {} is not being edited", form.todo_id);
            return Vec::new();
        }

        let parsed =
            TodoFields::parse(&form.title, &form.due, &form.priority, &form.description);
        let fields = match parsed {
            Ok(fields) => fields,
            Err(e) => return vec![ViewPatch::FormError(e.to_string())],
        };

        match self.store.edit_todo(self.active, form.todo_id, fields) {
            Ok(Some(_)) => {
                self.editing = None;
                let tasks = self
                    .store
                    .project(self.active)
                    .map(render::task_list)
                    .unwrap_or_default();
                vec![ViewPatch::RebuildTasks(tasks), ViewPatch::HideOverlay]
            }
            Ok(None) => {
                self.editing = None;
                vec![ViewPatch::HideOverlay]
            }
            Err(e) => self.failure(e),
        }
    }

    pub fn dismiss_edit(&mut self) -> Vec<ViewPatch> {
        self.editing = None;
        vec![ViewPatch::HideOverlay]
    }

    /// Remove one todo card; no rebuild needed
    pub fn remove_todo(&mut self, todo_id: TodoId) -> Vec<ViewPatch> {
        match self.store.remove_todo(self.active, todo_id) {
            Ok(Some(_)) => {
                let mut patches = vec![ViewPatch::RemoveTask(todo_id)];
                if self.editing == Some(todo_id) {
                    self.editing = None;
                    patches.push(ViewPatch::HideOverlay);
                }
                patches
            }
            Ok(None) => {
                debug!("[BOARD] remove: no todo {} in project {}", todo_id, self.active);
                Vec::new()
            }
            Err(e) => self.failure(e),
        }
    }

    fn failure(&self, err: StoreError) -> Vec<ViewPatch> {
        match err {
            StoreError::TodoLimitReached { limit, .. } => {
                vec![ViewPatch::Notify(Notice::LimitReached { limit })]
            }
            StoreError::ProjectNotFound(id) => {
                warn!("[BOARD] project {} not found", id);
                Vec::new()
            }
            other => {
                error!("[BOARD] {}", other);
                vec![ViewPatch::Notify(Notice::SaveFailed(other.to_string()))]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskView;
    use pretty_assertions::assert_eq;
    use todo_board_store::{MemoryStorage, StorageError};

    fn setup() -> BoardController<MemoryStorage> {
        BoardController::new(MemoryStorage::new(), BoardConfig::default())
    }

    fn added_task(patches: Vec<ViewPatch>) -> TaskView {
        match patches.as_slice() {
            [ViewPatch::PrependTask(task)] => task.clone(),
            other => panic!("expected a prepended task, got {:?}", other),
        }
    }

    fn added_tab(patches: Vec<ViewPatch>) -> ProjectId {
        match patches.as_slice() {
            [ViewPatch::AppendTab(tab)] => tab.id,
            other => panic!("expected an appended tab, got {:?}", other),
        }
    }

    /// Storage that rejects every write
    struct FullStorage;

    impl KeyValueStorage for FullStorage {
        fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }

        fn set_item(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::WriteFailed("quota exceeded".to_string()))
        }
    }

    #[test]
    fn test_initial_view() {
        let board = setup();

        let view = board.view();

        assert_eq!(view.tabs.len(), 1);
        assert_eq!(view.tabs[0].title, "Default Project");
        assert_eq!(view.active, ProjectId::DEFAULT);
        assert!(view.tasks.is_empty());
    }

    #[test]
    fn test_first_restored_project_starts_active() {
        let mut board = setup();
        let groceries = added_tab(board.add_project("Groceries"));
        board.delete_project(ProjectId::DEFAULT);
        let storage = board.store().storage().clone();

        let reloaded = BoardController::new(storage, BoardConfig::default());

        assert_eq!(reloaded.active(), groceries);
    }

    #[test]
    fn test_add_todo_prepends_placeholder() {
        let mut board = setup();

        let first = added_task(board.add_todo());
        let second = added_task(board.add_todo());

        assert_eq!(first.title, "New Task");
        assert_eq!(first.description, "Desc");
        assert_ne!(first.id, second.id);
        let ids: Vec<_> = board.view().tasks.into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![second.id, first.id]);
    }

    #[test]
    fn test_tenth_todo_reports_limit() {
        let mut board = setup();
        for _ in 0..9 {
            added_task(board.add_todo());
        }

        let patches = board.add_todo();

        assert_eq!(
            patches,
            vec![ViewPatch::Notify(Notice::LimitReached { limit: 9 })]
        );
        assert_eq!(board.store().todo_count(ProjectId::DEFAULT), Some(9));
    }

    #[test]
    fn test_blank_project_title_gets_default() {
        let mut board = setup();

        let patches = board.add_project("  ");

        match patches.as_slice() {
            [ViewPatch::AppendTab(tab)] => assert_eq!(tab.title, "New Project"),
            other => panic!("unexpected patches {:?}", other),
        }
        assert_eq!(board.active(), ProjectId::DEFAULT);
    }

    #[test]
    fn test_select_project_rebuilds_tasks() {
        let mut board = setup();
        added_task(board.add_todo());
        let work = added_tab(board.add_project("Work"));

        let patches = board.select_project(work);
        assert_eq!(
            patches,
            vec![ViewPatch::ActivateTab(work), ViewPatch::RebuildTasks(Vec::new())]
        );
        assert_eq!(board.active(), work);

        assert!(board.select_project(work).is_empty());
        assert!(board.select_project(ProjectId(99)).is_empty());
        assert_eq!(board.active(), work);

        let patches = board.select_project(ProjectId::DEFAULT);
        match patches.as_slice() {
            [ViewPatch::ActivateTab(ProjectId::DEFAULT), ViewPatch::RebuildTasks(tasks)] => {
                assert_eq!(tasks.len(), 1)
            }
            other => panic!("unexpected patches {:?}", other),
        }
    }

    #[test]
    fn test_deleting_inactive_project_keeps_selection() {
        let mut board = setup();
        let work = added_tab(board.add_project("Work"));

        let patches = board.delete_project(work);

        assert_eq!(patches, vec![ViewPatch::RemoveTab(work)]);
        assert_eq!(board.active(), ProjectId::DEFAULT);
    }

    #[test]
    fn test_deleting_active_project_falls_back_to_default() {
        let mut board = setup();
        added_task(board.add_todo());
        let work = added_tab(board.add_project("Work"));
        board.select_project(work);

        let patches = board.delete_project(work);

        assert_eq!(patches.len(), 3);
        assert_eq!(patches[0], ViewPatch::RemoveTab(work));
        assert_eq!(patches[1], ViewPatch::ActivateTab(ProjectId::DEFAULT));
        assert!(matches!(&patches[2], ViewPatch::RebuildTasks(tasks) if tasks.len() == 1));
        assert_eq!(board.active(), ProjectId::DEFAULT);
    }

    #[test]
    fn test_deleting_active_default_falls_back_to_first_project() {
        let mut board = setup();
        let work = added_tab(board.add_project("Work"));

        board.delete_project(ProjectId::DEFAULT);

        assert_eq!(board.active(), work);
        assert_eq!(board.view().tabs.len(), 1);
    }

    #[test]
    fn test_deleting_only_default_project_recreates_it() {
        let mut board = setup();
        added_task(board.add_todo());

        let patches = board.delete_project(ProjectId::DEFAULT);

        assert_eq!(
            patches,
            vec![
                ViewPatch::RemoveTab(ProjectId::DEFAULT),
                ViewPatch::AppendTab(crate::models::TabView {
                    id: ProjectId::DEFAULT,
                    title: "Default Project".to_string(),
                }),
                ViewPatch::ActivateTab(ProjectId::DEFAULT),
                ViewPatch::RebuildTasks(Vec::new()),
            ]
        );
        assert_eq!(board.store().projects().len(), 1);
        assert_eq!(board.store().todo_count(ProjectId::DEFAULT), Some(0));
    }

    #[test]
    fn test_edit_flow() {
        let mut board = setup();
        let task = added_task(board.add_todo());

        let mut form = match board.open_edit(task.id).as_slice() {
            [ViewPatch::ShowOverlay(form)] => form.clone(),
            other => panic!("unexpected patches {:?}", other),
        };
        assert_eq!(form.title, "New Task");
        assert_eq!(board.editing(), Some(task.id));

        form.due = "2026-02-01".to_string();
        let patches = board.submit_edit(form);

        match patches.as_slice() {
            [ViewPatch::RebuildTasks(tasks), ViewPatch::HideOverlay] => {
                assert_eq!(tasks[0].id, task.id);
                assert_eq!(tasks[0].due, "Feb 1, 2026");
                assert_eq!(tasks[0].title, "New Task");
            }
            other => panic!("unexpected patches {:?}", other),
        }
        assert_eq!(board.editing(), None);
        let stored = board.store().todo(ProjectId::DEFAULT, task.id).unwrap();
        assert_eq!(stored.due.to_string(), "2026-02-01");
    }

    #[test]
    fn test_invalid_edit_keeps_overlay_open() {
        let mut board = setup();
        let task = added_task(board.add_todo());
        let mut form = match board.open_edit(task.id).as_slice() {
            [ViewPatch::ShowOverlay(form)] => form.clone(),
            other => panic!("unexpected patches {:?}", other),
        };
        form.priority = "Urgent".to_string();

        let patches = board.submit_edit(form);

        assert!(matches!(patches.as_slice(), [ViewPatch::FormError(_)]));
        assert_eq!(board.editing(), Some(task.id));
    }

    #[test]
    fn test_dismiss_and_stale_submit() {
        let mut board = setup();
        let task = added_task(board.add_todo());
        let form = match board.open_edit(task.id).as_slice() {
            [ViewPatch::ShowOverlay(form)] => form.clone(),
            other => panic!("unexpected patches {:?}", other),
        };

        assert_eq!(board.dismiss_edit(), vec![ViewPatch::HideOverlay]);
        assert!(board.submit_edit(form).is_empty());
        assert!(board.open_edit(TodoId::new()).is_empty());
    }

    #[test]
    fn test_remove_todo() {
        let mut board = setup();
        let task = added_task(board.add_todo());
        board.open_edit(task.id);

        let patches = board.remove_todo(task.id);

        assert_eq!(
            patches,
            vec![ViewPatch::RemoveTask(task.id), ViewPatch::HideOverlay]
        );
        assert!(board.remove_todo(task.id).is_empty());
        assert_eq!(board.store().todo_count(ProjectId::DEFAULT), Some(0));
    }

    #[test]
    fn test_save_failure_is_reported() {
        let mut board = BoardController::new(FullStorage, BoardConfig::default());

        let patches = board.add_todo();

        assert!(matches!(
            patches.as_slice(),
            [ViewPatch::Notify(Notice::SaveFailed(_))]
        ));
        assert_eq!(board.store().todo_count(ProjectId::DEFAULT), Some(0));
        assert!(board.view().tasks.is_empty());
    }
}
