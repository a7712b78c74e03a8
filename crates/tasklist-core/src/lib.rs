//! Core of the tasklist app: the task store, its key-value persistence,
//! the filter/search engine, the list projection and the gesture
//! controller. Nothing here touches the DOM, so it runs natively under
//! test and inside the WASM front end.

pub mod config;
pub mod controller;
pub mod filter;
pub mod notice;
pub mod render;
pub mod storage;
pub mod store;
pub mod task;

pub use config::AppConfig;
pub use controller::Controller;
pub use filter::{
  FilterMode,
  ViewState
};
pub use notice::{
  Notice,
  NoticeKind
};
pub use render::{
  Counters,
  ItemView,
  ListView
};
pub use storage::{
  KeyValueStorage,
  MemoryStorage,
  TaskRepository
};
pub use store::TaskStore;
pub use task::{
  Task,
  TaskId,
  TaskPatch
};
