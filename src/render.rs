//! Render Projection
//!
//! Pure functions from store state to view fragments.

use todo_board_store::{KeyValueStorage, Project, ProjectId, ProjectStore, Todo};

use crate::models::{BoardView, EditForm, TabView, TaskView};

pub fn tab(project: &Project) -> TabView {
    TabView {
        id: project.id,
        title: project.title.clone(),
    }
}

pub fn task(todo: &Todo) -> TaskView {
    TaskView {
        id: todo.todo_id,
        title: todo.title.clone(),
        due: todo.due.label(),
        priority: todo.priority,
        description: todo.description.clone(),
    }
}

/// Tasks of a project in display order (most recently added first)
pub fn task_list(project: &Project) -> Vec<TaskView> {
    project.todos.iter().rev().map(task).collect()
}

pub fn edit_form(todo: &Todo) -> EditForm {
    EditForm {
        todo_id: todo.todo_id,
        title: todo.title.clone(),
        due: todo.due.to_string(),
        priority: todo.priority.as_str().to_string(),
        description: todo.description.clone(),
    }
}

/// Whole page for the given active project
pub fn board<S: KeyValueStorage>(store: &ProjectStore<S>, active: ProjectId) -> BoardView {
    BoardView {
        tabs: store.projects().iter().map(tab).collect(),
        active,
        tasks: store.project(active).map(task_list).unwrap_or_default(),
    }
}
