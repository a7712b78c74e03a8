use tracing::debug;

use crate::filter::{
  ViewState,
  is_visible
};
use crate::task::{
  Task,
  TaskId
};

/// Display projection of one task. The UI keys list items by `id`, so a
/// re-projection updates the existing element in place and a hidden
/// item keeps its element and handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemView {
  pub id:           TaskId,
  pub text:         String,
  pub completed:    bool,
  pub edit_enabled: bool,
  pub editing:      bool,
  pub hidden:       bool
}

impl ItemView {
  pub fn project(
    task: &Task,
    visible: bool,
    editing: bool
  ) -> Self {
    let mut item = Self {
      id:           task.id.clone(),
      text:         task.text.clone(),
      completed:    false,
      edit_enabled: true,
      editing:      false,
      hidden:       false
    };
    item.reflect(task);
    item.set_visibility(visible);
    item.editing = editing && item.edit_enabled;
    item
  }

  /// Copies completion state onto the item. Editing is locked exactly
  /// while the task is completed.
  pub fn reflect(
    &mut self,
    task: &Task
  ) {
    self.text = task.text.clone();
    self.completed = task.completed;
    self.edit_enabled = !task.completed;
    if task.completed {
      self.editing = false;
    }
  }

  pub fn set_visibility(
    &mut self,
    visible: bool
  ) {
    self.hidden = !visible;
  }

  pub fn row_class(&self) -> &'static str {
    match (self.completed, self.hidden) {
      | (_, true) => "task-row hidden",
      | (true, false) => "task-row done",
      | (false, false) => "task-row"
    }
  }
}

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
)]
pub struct Counters {
  pub total:      usize,
  pub completed:  usize,
  pub percentage: u8,
  pub all_done:   bool
}

impl Counters {
  /// Whole-store progress. `None` when there are no tasks, which hides
  /// the counter block.
  pub fn from_tasks(
    tasks: &[Task]
  ) -> Option<Self> {
    let total = tasks.len();
    if total == 0 {
      return None;
    }
    let completed = tasks
      .iter()
      .filter(|task| task.completed)
      .count();

    Some(Self {
      total,
      completed,
      percentage: round_percent(
        completed, total
      ),
      all_done: completed == total
    })
  }
}

/// `round(part / whole * 100)` with halves rounding up.
fn round_percent(
  part: usize,
  whole: usize
) -> u8 {
  let scaled = (part * 200 + whole)
    / (whole * 2);
  u8::try_from(scaled.min(100))
    .unwrap_or(100)
}

/// Everything the list screen needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
  pub items:        Vec<ItemView>,
  pub counters:     Option<Counters>,
  pub show_empty:   bool,
  pub visible:      usize,
  pub filters_open: bool
}

impl ListView {
  pub fn build(
    tasks: &[Task],
    view: &ViewState
  ) -> Self {
    let items: Vec<ItemView> = tasks
      .iter()
      .map(|task| {
        ItemView::project(
          task,
          is_visible(task, view),
          view.editing.as_ref()
            == Some(&task.id)
        )
      })
      .collect();
    let visible = items
      .iter()
      .filter(|item| !item.hidden)
      .count();

    debug!(
      total = items.len(),
      visible,
      filter = %view.filter,
      search = view.search(),
      "projected list view"
    );

    Self {
      items,
      counters: Counters::from_tasks(tasks),
      show_empty: visible == 0,
      visible,
      filters_open: view.filters_open
    }
  }
}

#[cfg(test)]
mod tests {
  use super::{
    Counters,
    ItemView,
    ListView,
    round_percent
  };
  use crate::filter::{
    FilterMode,
    ViewState
  };
  use crate::task::{
    Task,
    TaskId
  };

  fn task(
    text: &str,
    completed: bool
  ) -> Task {
    Task {
      id: TaskId::generate(),
      text: text.to_string(),
      completed
    }
  }

  #[test]
  fn counters_report_rounded_percentage() {
    let tasks = vec![
      task("a", true),
      task("b", true),
      task("c", true),
      task("d", false),
    ];
    let counters = Counters::from_tasks(
      &tasks
    )
    .expect("non-empty");
    assert_eq!(counters.total, 4);
    assert_eq!(counters.completed, 3);
    assert_eq!(counters.percentage, 75);
    assert!(!counters.all_done);
  }

  #[test]
  fn counters_hidden_without_tasks() {
    assert!(
      Counters::from_tasks(&[]).is_none()
    );
  }

  #[test]
  fn percentage_rounds_half_up() {
    assert_eq!(round_percent(1, 3), 33);
    assert_eq!(round_percent(2, 3), 67);
    assert_eq!(round_percent(1, 8), 13);
    assert_eq!(round_percent(0, 5), 0);
    assert_eq!(round_percent(5, 5), 100);
  }

  #[test]
  fn completed_items_lock_editing() {
    let done = task("done", true);
    let item =
      ItemView::project(&done, true, true);
    assert!(item.completed);
    assert!(!item.edit_enabled);
    assert!(!item.editing);
    assert_eq!(item.row_class(), "task-row done");

    let mut open = done.clone();
    open.completed = false;
    let mut item = item;
    item.reflect(&open);
    assert!(item.edit_enabled);
  }

  #[test]
  fn hidden_items_stay_in_the_list() {
    let tasks = vec![
      task("open", false),
      task("done", true),
    ];
    let mut view = ViewState::default();
    view.filter = FilterMode::Completed;
    let list = ListView::build(&tasks, &view);
    assert_eq!(list.items.len(), 2);
    assert!(list.items[0].hidden);
    assert!(!list.items[1].hidden);
    assert_eq!(list.visible, 1);
    assert!(!list.show_empty);
  }

  #[test]
  fn empty_store_shows_placeholder() {
    let list = ListView::build(
      &[],
      &ViewState::default()
    );
    assert!(list.show_empty);
    assert!(list.counters.is_none());
  }
}
