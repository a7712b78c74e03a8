use tracing::{
  debug,
  error,
  info
};

use crate::config::AppConfig;
use crate::filter::{
  FilterMode,
  ViewState
};
use crate::notice::{
  self,
  Notice
};
use crate::render::ListView;
use crate::storage::{
  KeyValueStorage,
  TaskRepository
};
use crate::store::TaskStore;
use crate::task::{
  TaskId,
  TaskPatch
};

/// Owns the task store, its repository and the session view state.
/// Every gesture runs to completion and returns the notices it raised.
#[derive(Debug)]
pub struct Controller<S> {
  store: TaskStore,
  repo:  TaskRepository<S>,
  view:  ViewState
}

impl<S: KeyValueStorage> Controller<S> {
  #[tracing::instrument(skip_all, fields(key = %config.storage_key))]
  pub fn load(
    storage: S,
    config: &AppConfig
  ) -> Self {
    let repo = TaskRepository::new(
      storage,
      config.storage_key.clone()
    );
    let records = repo.load();
    let store =
      TaskStore::from_loaded(records.clone());

    if store.list() != records.as_slice()
    {
      info!(
        "stored tasks were repaired; \
         writing them back"
      );
      if let Err(error) =
        repo.save(store.list())
      {
        error!(
          error = format!("{error:#}"),
          "failed to write repaired \
           tasks"
        );
      }
    }

    Self {
      store,
      repo,
      view: ViewState::default()
    }
  }

  pub fn store(&self) -> &TaskStore {
    &self.store
  }

  pub fn view_state(&self) -> &ViewState {
    &self.view
  }

  pub fn view(&self) -> ListView {
    ListView::build(
      self.store.list(),
      &self.view
    )
  }

  #[tracing::instrument(skip_all)]
  pub fn add_task(
    &mut self,
    input: &str
  ) -> Vec<Notice> {
    let Some(task) =
      self.store.create(input)
    else {
      debug!("rejected blank task");
      return Vec::new();
    };
    info!(id = %task.id, "task added");

    let mut notices =
      vec![Notice::success(
        notice::TASK_ADDED
      )];
    self.persist(&mut notices);
    notices
  }

  /// Opens the inline editor. Refused for unknown or completed tasks.
  #[tracing::instrument(skip_all, fields(id = %id))]
  pub fn begin_edit(
    &mut self,
    id: &TaskId
  ) -> bool {
    match self.store.get(id) {
      | Some(task) if !task.completed => {
        self.view.editing =
          Some(id.clone());
        true
      }
      | Some(_) => {
        debug!(
          "edit refused: task is \
           completed"
        );
        false
      }
      | None => false
    }
  }

  /// Commits the open inline edit. Ignored unless `id` is the task
  /// under edit; blank drafts are discarded and completed tasks keep
  /// their text. The editor closes either way.
  #[tracing::instrument(skip_all, fields(id = %id))]
  pub fn commit_edit(
    &mut self,
    id: &TaskId,
    draft: &str
  ) -> Vec<Notice> {
    if self.view.editing.as_ref() != Some(id)
    {
      debug!("edit ignored: no editor open");
      return Vec::new();
    }
    self.view.editing = None;

    match self.store.get(id) {
      | Some(task) if !task.completed => {}
      | Some(_) => {
        debug!(
          "edit ignored: task is \
           completed"
        );
        return Vec::new();
      }
      | None => return Vec::new()
    }

    if !self
      .store
      .update(id, TaskPatch::text(draft))
    {
      debug!("edit made no change");
      return Vec::new();
    }
    info!("task edited");

    let mut notices = Vec::new();
    self.persist(&mut notices);
    notices
  }

  pub fn cancel_edit(&mut self) {
    self.view.editing = None;
  }

  #[tracing::instrument(skip_all, fields(id = %id))]
  pub fn toggle_task(
    &mut self,
    id: &TaskId
  ) -> Vec<Notice> {
    let Some(completed) = self
      .store
      .get(id)
      .map(|task| !task.completed)
    else {
      return Vec::new();
    };

    self.store.update(
      id,
      TaskPatch::completed(completed)
    );
    self.close_editor_for(id);
    info!(completed, "task toggled");

    let mut notices = vec![if completed {
      Notice::success(
        notice::TASK_COMPLETED
      )
    } else {
      Notice::info(notice::TASK_PENDING)
    }];
    self.persist(&mut notices);
    notices
  }

  #[tracing::instrument(skip_all, fields(id = %id))]
  pub fn delete_task(
    &mut self,
    id: &TaskId
  ) -> Vec<Notice> {
    if self.store.delete(id).is_none() {
      return Vec::new();
    }
    self.close_editor_for(id);
    info!("task deleted");

    let mut notices =
      vec![Notice::error(
        notice::TASK_DELETED
      )];
    self.persist(&mut notices);
    notices
  }

  pub fn select_filter(
    &mut self,
    mode: FilterMode
  ) {
    debug!(filter = %mode, "filter selected");
    self.view.filter = mode;
  }

  pub fn set_search(
    &mut self,
    raw: &str
  ) {
    self.view.set_search(raw);
  }

  pub fn toggle_filters_panel(
    &mut self
  ) {
    self.view.filters_open =
      !self.view.filters_open;
  }

  fn close_editor_for(
    &mut self,
    id: &TaskId
  ) {
    if self.view.editing.as_ref() == Some(id)
    {
      self.view.editing = None;
    }
  }

  fn persist(
    &self,
    notices: &mut Vec<Notice>
  ) {
    if let Err(error) =
      self.repo.save(self.store.list())
    {
      error!(
        error = format!("{error:#}"),
        "failed to persist tasks"
      );
      notices.push(Notice::error(
        notice::SAVE_FAILED
      ));
    }
  }
}
