//! UI Components
//!
//! Leptos components for the project tabs, task cards and edit overlay.

mod project_tab_bar;
mod task_list;
mod task_card;
mod edit_overlay;

pub use project_tab_bar::ProjectTabBar;
pub use task_list::TaskList;
pub use task_card::TaskCard;
pub use edit_overlay::EditOverlay;
