#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
)]
pub enum NoticeKind {
  Success,
  Error,
  Info
}

impl NoticeKind {
  pub fn css_class(self) -> &'static str {
    match self {
      | Self::Success => "toast success",
      | Self::Error => "toast error",
      | Self::Info => "toast info"
    }
  }

  pub fn icon(self) -> &'static str {
    match self {
      | Self::Success => "✓",
      | Self::Error => "✕",
      | Self::Info => "i"
    }
  }
}

/// Transient message for the user. Purely informational.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
  pub kind:    NoticeKind,
  pub message: String
}

impl Notice {
  pub fn success(
    message: impl Into<String>
  ) -> Self {
    Self {
      kind:    NoticeKind::Success,
      message: message.into()
    }
  }

  pub fn error(
    message: impl Into<String>
  ) -> Self {
    Self {
      kind:    NoticeKind::Error,
      message: message.into()
    }
  }

  pub fn info(
    message: impl Into<String>
  ) -> Self {
    Self {
      kind:    NoticeKind::Info,
      message: message.into()
    }
  }
}

pub const TASK_ADDED: &str = "Task added";
pub const TASK_COMPLETED: &str =
  "Task completed!";
pub const TASK_PENDING: &str =
  "Task marked pending";
pub const TASK_DELETED: &str =
  "Task deleted";
pub const SAVE_FAILED: &str =
  "Could not save tasks; changes are \
   kept for this session";
