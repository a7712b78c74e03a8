mod empty_state;
mod task_counter;
mod task_filters_panel;
mod task_form;
mod task_list;
mod task_list_row;
mod toast_stack;

pub use empty_state::EmptyState;
pub use task_counter::TaskCounter;
pub use task_filters_panel::TaskFiltersPanel;
pub use task_form::TaskForm;
pub use task_list::TaskList;
pub use task_list_row::TaskListRow;
pub use toast_stack::ToastStack;
