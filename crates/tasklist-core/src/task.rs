use std::fmt;

use serde::{
  Deserialize,
  Serialize
};
use uuid::Uuid;

/// Opaque task identifier.
///
/// Fresh ids are random v4 UUIDs. Ids read back from storage are kept
/// verbatim, so records written with the old millisecond-timestamp ids
/// still load.
#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Hash,
  PartialOrd,
  Ord,
  Serialize,
  Deserialize,
)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
  pub fn generate() -> Self {
    Self(Uuid::new_v4().to_string())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }

  pub fn is_blank(&self) -> bool {
    self.0.trim().is_empty()
  }
}

impl From<&str> for TaskId {
  fn from(value: &str) -> Self {
    Self(value.to_string())
  }
}

impl From<String> for TaskId {
  fn from(value: String) -> Self {
    Self(value)
  }
}

impl fmt::Display for TaskId {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(&self.0)
  }
}

#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
pub struct Task {
  pub id:        TaskId,
  pub text:      String,
  #[serde(default)]
  pub completed: bool
}

impl Task {
  /// Builds a pending task, or `None` when `raw` has no visible text.
  pub fn new_pending(
    raw: &str
  ) -> Option<Self> {
    let text = normalize_text(raw)?;
    Some(Self {
      id: TaskId::generate(),
      text,
      completed: false
    })
  }
}

#[derive(
  Debug,
  Clone,
  Default,
  PartialEq,
  Eq,
)]
pub struct TaskPatch {
  pub text:      Option<String>,
  pub completed: Option<bool>
}

impl TaskPatch {
  pub fn text(
    text: impl Into<String>
  ) -> Self {
    Self {
      text:      Some(text.into()),
      completed: None
    }
  }

  pub fn completed(
    completed: bool
  ) -> Self {
    Self {
      text:      None,
      completed: Some(completed)
    }
  }

  pub fn is_empty(&self) -> bool {
    self.text.is_none()
      && self.completed.is_none()
  }
}

/// Trims `raw`; `None` when nothing is left.
pub fn normalize_text(
  raw: &str
) -> Option<String> {
  let trimmed = raw.trim();
  if trimmed.is_empty() {
    None
  } else {
    Some(trimmed.to_string())
  }
}
