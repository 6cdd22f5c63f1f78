//! UI Components
//!
//! Reusable Leptos components.

mod clock_panel;
mod new_task_form;
mod stopwatch_panel;
mod task_list_view;
mod task_row;
mod delete_confirm_button;
mod theme_toggle;

pub use clock_panel::ClockPanel;
pub use new_task_form::NewTaskForm;
pub use stopwatch_panel::StopwatchPanel;
pub use task_list_view::TaskListView;
pub use task_row::TaskRow;
pub use delete_confirm_button::DeleteConfirmButton;
pub use theme_toggle::ThemeToggle;
