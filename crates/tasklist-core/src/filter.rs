use std::fmt;

use crate::task::{
  Task,
  TaskId
};

#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
  Hash,
)]
pub enum FilterMode {
  #[default]
  All,
  Active,
  Completed
}

impl FilterMode {
  pub const ALL: [FilterMode; 3] = [
    FilterMode::All,
    FilterMode::Active,
    FilterMode::Completed
  ];

  pub fn parse(
    value: &str
  ) -> Option<Self> {
    match value
      .trim()
      .to_ascii_lowercase()
      .as_str()
    {
      | "all" => Some(Self::All),
      | "active" => Some(Self::Active),
      | "completed" => {
        Some(Self::Completed)
      }
      | _ => None
    }
  }

  pub fn as_str(self) -> &'static str {
    match self {
      | Self::All => "all",
      | Self::Active => "active",
      | Self::Completed => "completed"
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      | Self::All => "All",
      | Self::Active => "Active",
      | Self::Completed => "Completed"
    }
  }
}

impl fmt::Display for FilterMode {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Session-scoped view settings. Nothing here is persisted.
#[derive(
  Debug,
  Clone,
  Default,
  PartialEq,
  Eq,
)]
pub struct ViewState {
  pub filter:       FilterMode,
  search:           String,
  pub filters_open: bool,
  pub editing:      Option<TaskId>
}

impl ViewState {
  pub fn search(&self) -> &str {
    &self.search
  }

  /// Stores the search term trimmed.
  pub fn set_search(
    &mut self,
    raw: &str
  ) {
    self.search = raw.trim().to_string();
  }
}

pub fn matches_filter(
  task: &Task,
  mode: FilterMode
) -> bool {
  match mode {
    | FilterMode::All => true,
    | FilterMode::Active => {
      !task.completed
    }
    | FilterMode::Completed => {
      task.completed
    }
  }
}

/// Case-insensitive substring match. A blank term matches everything.
pub fn matches_search(
  task: &Task,
  term: &str
) -> bool {
  let term = term.trim();
  if term.is_empty() {
    return true;
  }
  task
    .text
    .to_lowercase()
    .contains(&term.to_lowercase())
}

pub fn is_visible(
  task: &Task,
  view: &ViewState
) -> bool {
  matches_filter(task, view.filter)
    && matches_search(task, &view.search)
}

/// Visible subset in store order.
pub fn visible_tasks<'a>(
  tasks: &'a [Task],
  view: &ViewState
) -> Vec<&'a Task> {
  tasks
    .iter()
    .filter(|task| is_visible(task, view))
    .collect()
}

#[cfg(test)]
mod tests {
  use proptest::prelude::*;

  use super::{
    FilterMode,
    ViewState,
    is_visible,
    matches_filter,
    matches_search,
    visible_tasks
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

  fn view(
    filter: FilterMode,
    search: &str
  ) -> ViewState {
    let mut view = ViewState {
      filter,
      ..ViewState::default()
    };
    view.set_search(search);
    view
  }

  #[test]
  fn filter_modes_partition_by_completion()
   {
    let open = task("open", false);
    let done = task("done", true);

    assert!(matches_filter(
      &open,
      FilterMode::All
    ));
    assert!(matches_filter(
      &done,
      FilterMode::All
    ));
    assert!(matches_filter(
      &open,
      FilterMode::Active
    ));
    assert!(!matches_filter(
      &done,
      FilterMode::Active
    ));
    assert!(!matches_filter(
      &open,
      FilterMode::Completed
    ));
    assert!(matches_filter(
      &done,
      FilterMode::Completed
    ));
  }

  #[test]
  fn search_is_case_insensitive_substring()
   {
    let t = task("Walk the Dog", false);
    assert!(matches_search(&t, "dog"));
    assert!(matches_search(&t, "WALK"));
    assert!(matches_search(&t, ""));
    assert!(matches_search(&t, "   "));
    assert!(!matches_search(&t, "cat"));
    assert!(matches_search(
      &task("ÉCOLE", false),
      "école"
    ));
  }

  #[test]
  fn search_narrows_filter() {
    let tasks = vec![
      task("buy milk", false),
      task("walk dog", false),
    ];
    let visible = visible_tasks(
      &tasks,
      &view(FilterMode::All, "dog")
    );
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].text, "walk dog");
  }

  #[test]
  fn search_term_is_stored_trimmed() {
    let v = view(FilterMode::All, "  dog ");
    assert_eq!(v.search(), "dog");
  }

  #[test]
  fn parse_round_trips_mode_names() {
    for mode in FilterMode::ALL {
      assert_eq!(
        FilterMode::parse(mode.as_str()),
        Some(mode)
      );
    }
    assert_eq!(
      FilterMode::parse("Active"),
      Some(FilterMode::Active)
    );
    assert_eq!(FilterMode::parse("done"), None);
  }

  fn mode_strategy()
  -> impl Strategy<Value = FilterMode> {
    prop_oneof![
      Just(FilterMode::All),
      Just(FilterMode::Active),
      Just(FilterMode::Completed),
    ]
  }

  proptest! {
    #[test]
    fn visibility_is_filter_and_search(
      text in "[a-zA-Z ]{1,16}",
      completed in any::<bool>(),
      mode in mode_strategy(),
      term in "[a-zA-Z]{0,3}",
    ) {
      let t = task(&text, completed);
      let v = view(mode, &term);
      prop_assert_eq!(
        is_visible(&t, &v),
        matches_filter(&t, mode) && matches_search(&t, &term)
      );
    }

    #[test]
    fn visible_subset_keeps_store_order(
      entries in proptest::collection::vec(("[a-c]{1,4}", any::<bool>()), 0..12),
      mode in mode_strategy(),
      term in "[a-c]{0,2}",
    ) {
      let tasks: Vec<Task> = entries
        .iter()
        .map(|(text, done)| task(text, *done))
        .collect();
      let v = view(mode, &term);
      let visible = visible_tasks(&tasks, &v);
      let expected: Vec<&Task> = tasks
        .iter()
        .filter(|t| is_visible(t, &v))
        .collect();
      prop_assert_eq!(visible, expected);
    }
  }
}
