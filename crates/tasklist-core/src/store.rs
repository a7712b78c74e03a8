use std::collections::HashSet;

use tracing::{
  debug,
  info,
  warn
};

use crate::task::{
  Task,
  TaskId,
  TaskPatch,
  normalize_text
};

/// In-memory task list. Insertion order is the only ordering and the
/// store never reorders.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
  tasks: Vec<Task>
}

impl TaskStore {
  pub fn new() -> Self {
    Self::default()
  }

  /// Builds a store from persisted records.
  ///
  /// Records with blank text are dropped, text is trimmed, and empty or
  /// repeated ids are replaced with fresh ones so every id is unique.
  #[tracing::instrument(skip(records), fields(count = records.len()))]
  pub fn from_loaded(
    records: Vec<Task>
  ) -> Self {
    let mut seen = HashSet::new();
    let mut tasks =
      Vec::with_capacity(records.len());

    for (index, mut task) in
      records.into_iter().enumerate()
    {
      let Some(text) =
        normalize_text(&task.text)
      else {
        warn!(
          index,
          id = %task.id,
          "dropping stored task with \
           blank text"
        );
        continue;
      };
      task.text = text;

      if task.id.is_blank()
        || seen.contains(&task.id)
      {
        let fresh =
          fresh_id(|id| seen.contains(id));
        warn!(
          index,
          old = %task.id,
          new = %fresh,
          "reassigning empty or \
           duplicate task id"
        );
        task.id = fresh;
      }

      seen.insert(task.id.clone());
      tasks.push(task);
    }

    info!(
      count = tasks.len(),
      "task store initialized"
    );
    Self { tasks }
  }

  /// Appends a pending task. Blank input is rejected with `None` and
  /// leaves the store untouched.
  #[tracing::instrument(skip(self, raw))]
  pub fn create(
    &mut self,
    raw: &str
  ) -> Option<&Task> {
    let text = normalize_text(raw)?;
    let id = fresh_id(|id| {
      self.contains(id)
    });
    debug!(id = %id, "created task");
    self.tasks.push(Task {
      id,
      text,
      completed: false
    });
    self.tasks.last()
  }

  /// Applies `patch` to the task with `id`. Returns whether anything
  /// changed; unknown ids and blank text are ignored.
  #[tracing::instrument(skip_all, fields(id = %id))]
  pub fn update(
    &mut self,
    id: &TaskId,
    patch: TaskPatch
  ) -> bool {
    let Some(task) = self
      .tasks
      .iter_mut()
      .find(|task| &task.id == id)
    else {
      debug!("update target not found");
      return false;
    };

    let mut changed = false;
    if let Some(raw) = patch.text {
      if let Some(text) =
        normalize_text(&raw)
      {
        if task.text != text {
          task.text = text;
          changed = true;
        }
      } else {
        debug!(
          "ignoring blank text in patch"
        );
      }
    }
    if let Some(completed) =
      patch.completed
      && task.completed != completed
    {
      task.completed = completed;
      changed = true;
    }

    changed
  }

  #[tracing::instrument(skip_all, fields(id = %id))]
  pub fn delete(
    &mut self,
    id: &TaskId
  ) -> Option<Task> {
    let index = self
      .tasks
      .iter()
      .position(|task| &task.id == id)?;
    Some(self.tasks.remove(index))
  }

  pub fn list(&self) -> &[Task] {
    &self.tasks
  }

  pub fn get(
    &self,
    id: &TaskId
  ) -> Option<&Task> {
    self
      .tasks
      .iter()
      .find(|task| &task.id == id)
  }

  pub fn contains(
    &self,
    id: &TaskId
  ) -> bool {
    self.get(id).is_some()
  }

  pub fn len(&self) -> usize {
    self.tasks.len()
  }

  pub fn is_empty(&self) -> bool {
    self.tasks.is_empty()
  }
}

fn fresh_id(
  taken: impl Fn(&TaskId) -> bool
) -> TaskId {
  loop {
    let id = TaskId::generate();
    if !taken(&id) {
      return id;
    }
    warn!(id = %id, "generated task id collided; drawing again");
  }
}
