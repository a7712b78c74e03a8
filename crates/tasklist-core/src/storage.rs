use std::cell::RefCell;
use std::collections::HashMap;

use anyhow::Context;
use tracing::{
  debug,
  error,
  info
};

use crate::task::Task;

pub const DEFAULT_STORAGE_KEY: &str =
  "todoTasks";

/// String-keyed durable storage, shaped like the browser's
/// `localStorage`.
pub trait KeyValueStorage {
  fn get_item(
    &self,
    key: &str
  ) -> anyhow::Result<Option<String>>;

  fn set_item(
    &self,
    key: &str,
    value: &str
  ) -> anyhow::Result<()>;
}

/// Process-local storage. Used by tests and as the fallback when the
/// browser refuses access to `localStorage`.
#[derive(Debug, Default)]
pub struct MemoryStorage {
  items: RefCell<HashMap<String, String>>
}

impl MemoryStorage {
  pub fn new() -> Self {
    Self::default()
  }
}

impl KeyValueStorage for MemoryStorage {
  fn get_item(
    &self,
    key: &str
  ) -> anyhow::Result<Option<String>> {
    Ok(self.items.borrow().get(key).cloned())
  }

  fn set_item(
    &self,
    key: &str,
    value: &str
  ) -> anyhow::Result<()> {
    self
      .items
      .borrow_mut()
      .insert(
        key.to_string(),
        value.to_string()
      );
    Ok(())
  }
}

impl<S: KeyValueStorage + ?Sized>
  KeyValueStorage for &S
{
  fn get_item(
    &self,
    key: &str
  ) -> anyhow::Result<Option<String>> {
    (**self).get_item(key)
  }

  fn set_item(
    &self,
    key: &str,
    value: &str
  ) -> anyhow::Result<()> {
    (**self).set_item(key, value)
  }
}

/// Whole-list persistence of tasks under a single storage key. Every
/// save overwrites the previous value.
#[derive(Debug)]
pub struct TaskRepository<S> {
  storage: S,
  key:     String
}

impl<S: KeyValueStorage> TaskRepository<S> {
  pub fn new(
    storage: S,
    key: impl Into<String>
  ) -> Self {
    Self {
      storage,
      key: key.into()
    }
  }

  #[tracing::instrument(skip(self, tasks), fields(key = %self.key, count = tasks.len()))]
  pub fn save(
    &self,
    tasks: &[Task]
  ) -> anyhow::Result<()> {
    let json = serde_json::to_string(tasks)
      .context("failed to serialize tasks")?;
    self
      .storage
      .set_item(&self.key, &json)
      .with_context(|| {
        format!(
          "failed to write tasks under \
           key {}",
          self.key
        )
      })?;
    debug!(
      bytes = json.len(),
      "saved tasks"
    );
    Ok(())
  }

  /// Strict load: `Ok(None)` when nothing is stored, `Err` when the
  /// stored value cannot be read or parsed.
  #[tracing::instrument(skip(self), fields(key = %self.key))]
  pub fn try_load(
    &self
  ) -> anyhow::Result<Option<Vec<Task>>> {
    let Some(raw) = self
      .storage
      .get_item(&self.key)
      .with_context(|| {
        format!(
          "failed to read key {}",
          self.key
        )
      })?
    else {
      return Ok(None);
    };

    let tasks: Option<Vec<Task>> =
      serde_json::from_str(&raw)
        .with_context(|| {
          format!(
            "failed parsing stored \
             tasks under key {}",
            self.key
          )
        })?;
    Ok(tasks)
  }

  /// Lenient load for startup: anything unreadable counts as an empty
  /// list.
  pub fn load(&self) -> Vec<Task> {
    match self.try_load() {
      | Ok(Some(tasks)) => {
        info!(
          key = %self.key,
          count = tasks.len(),
          "loaded saved tasks"
        );
        tasks
      }
      | Ok(None) => {
        info!(key = %self.key, "no saved tasks");
        Vec::new()
      }
      | Err(error) => {
        error!(
          error = format!("{error:#}"),
          "failed loading saved tasks; \
           starting empty"
        );
        Vec::new()
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use anyhow::anyhow;

  use super::{
    KeyValueStorage,
    MemoryStorage,
    TaskRepository
  };
  use crate::task::{
    Task,
    TaskId
  };

  struct FullStorage;

  impl KeyValueStorage for FullStorage {
    fn get_item(
      &self,
      _key: &str
    ) -> anyhow::Result<Option<String>> {
      Ok(None)
    }

    fn set_item(
      &self,
      _key: &str,
      _value: &str
    ) -> anyhow::Result<()> {
      Err(anyhow!("QuotaExceededError"))
    }
  }

  fn sample() -> Vec<Task> {
    vec![
      Task {
        id:        TaskId::from("b"),
        text:      "walk dog".to_string(),
        completed: true
      },
      Task {
        id:        TaskId::from("a"),
        text:      "buy milk".to_string(),
        completed: false
      },
    ]
  }

  #[test]
  fn save_then_load_round_trips() {
    let storage = MemoryStorage::new();
    let repo =
      TaskRepository::new(&storage, "k");
    repo.save(&sample()).expect("save");
    assert_eq!(repo.load(), sample());
  }

  #[test]
  fn save_overwrites_previous_value() {
    let storage = MemoryStorage::new();
    let repo =
      TaskRepository::new(&storage, "k");
    repo.save(&sample()).expect("save");
    repo.save(&sample()[..1]).expect("save");
    assert_eq!(repo.load().len(), 1);
  }

  #[test]
  fn absent_null_and_malformed_load_empty()
   {
    let storage = MemoryStorage::new();
    let repo =
      TaskRepository::new(&storage, "k");
    assert!(
      repo.try_load().expect("read").is_none()
    );
    assert!(repo.load().is_empty());

    storage
      .set_item("k", "null")
      .expect("write");
    assert!(repo.load().is_empty());

    storage
      .set_item("k", "{not json")
      .expect("write");
    assert!(repo.try_load().is_err());
    assert!(repo.load().is_empty());

    storage
      .set_item("k", r#"[{"id":1}]"#)
      .expect("write");
    assert!(repo.load().is_empty());
  }

  #[test]
  fn reads_records_from_the_browser_script()
   {
    let storage = MemoryStorage::new();
    storage
      .set_item(
        "todoTasks",
        r#"[{"text":"buy milk","completed":false,"id":"1712345678901"},
            {"text":"walk dog","completed":true,"id":"1712345679000"}]"#
      )
      .expect("write");
    let repo = TaskRepository::new(
      &storage,
      "todoTasks"
    );

    let tasks = repo.load();
    assert_eq!(tasks.len(), 2);
    assert_eq!(
      tasks[0].id.as_str(),
      "1712345678901"
    );
    assert!(tasks[1].completed);
  }

  #[test]
  fn storage_failure_is_reported() {
    let repo =
      TaskRepository::new(FullStorage, "k");
    let err = repo
      .save(&sample())
      .expect_err("quota error");
    assert!(
      format!("{err:#}")
        .contains("QuotaExceededError")
    );
  }
}
