use anyhow::anyhow;
use tasklist_core::{
  KeyValueStorage,
  MemoryStorage
};
use wasm_bindgen::JsValue;

/// `window.localStorage`, or process memory when the browser refuses
/// access (private mode, disabled storage). In the memory case tasks
/// last for the session only.
pub enum BrowserStorage {
  Local(web_sys::Storage),
  Memory(MemoryStorage)
}

impl BrowserStorage {
  pub fn open() -> Self {
    let storage =
      web_sys::window().and_then(
        |window| {
          window
            .local_storage()
            .ok()
            .flatten()
        }
      );

    match storage {
      | Some(storage) => {
        tracing::info!(
          "using browser local storage"
        );
        Self::Local(storage)
      }
      | None => {
        tracing::warn!(
          "local storage unavailable; \
           tasks will not survive a \
           reload"
        );
        Self::Memory(MemoryStorage::new())
      }
    }
  }
}

impl KeyValueStorage for BrowserStorage {
  fn get_item(
    &self,
    key: &str
  ) -> anyhow::Result<Option<String>> {
    match self {
      | Self::Local(storage) => storage
        .get_item(key)
        .map_err(js_error),
      | Self::Memory(memory) => {
        memory.get_item(key)
      }
    }
  }

  fn set_item(
    &self,
    key: &str,
    value: &str
  ) -> anyhow::Result<()> {
    match self {
      | Self::Local(storage) => storage
        .set_item(key, value)
        .map_err(js_error),
      | Self::Memory(memory) => {
        memory.set_item(key, value)
      }
    }
  }
}

fn js_error(
  value: JsValue
) -> anyhow::Error {
  anyhow!("local storage error: {value:?}")
}
