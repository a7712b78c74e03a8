use anyhow::Context;
use serde::Deserialize;
use tracing::{
  debug,
  info,
  warn
};

use crate::storage::DEFAULT_STORAGE_KEY;

const MIN_NOTICE_DURATION_MS: u32 = 500;
const MAX_NOTICE_DURATION_MS: u32 =
  60_000;

#[derive(
  Debug, Clone, PartialEq, Eq, Deserialize,
)]
#[serde(default)]
pub struct AppConfig {
  pub storage_key:           String,
  pub notice_duration_ms:    u32,
  pub notice_enter_delay_ms: u32,
  pub notice_exit_ms:        u32
}

impl Default for AppConfig {
  fn default() -> Self {
    Self {
      storage_key:           DEFAULT_STORAGE_KEY
        .to_string(),
      notice_duration_ms:    3_000,
      notice_enter_delay_ms: 100,
      notice_exit_ms:        300
    }
  }
}

impl AppConfig {
  #[tracing::instrument(skip(raw))]
  pub fn from_toml_str(
    raw: &str
  ) -> anyhow::Result<Self> {
    let mut cfg =
      toml::from_str::<AppConfig>(raw)
        .context(
          "failed to parse tasklist \
           config"
        )?;
    cfg.normalize();
    debug!(?cfg, "parsed config");
    Ok(cfg)
  }

  /// Parses `raw`, falling back to defaults on any error.
  pub fn load_or_default(
    raw: &str
  ) -> Self {
    match Self::from_toml_str(raw) {
      | Ok(cfg) => {
        info!(
          storage_key = %cfg.storage_key,
          notice_duration_ms =
            cfg.notice_duration_ms,
          "loaded config"
        );
        cfg
      }
      | Err(error) => {
        tracing::error!(
          error = format!("{error:#}"),
          "invalid config; using \
           defaults"
        );
        Self::default()
      }
    }
  }

  fn normalize(&mut self) {
    let key = self.storage_key.trim();
    if key.is_empty() {
      warn!(
        "blank storage_key; using \
         default"
      );
      self.storage_key =
        DEFAULT_STORAGE_KEY.to_string();
    } else if key.len()
      != self.storage_key.len()
    {
      self.storage_key = key.to_string();
    }

    let clamped = self
      .notice_duration_ms
      .clamp(
        MIN_NOTICE_DURATION_MS,
        MAX_NOTICE_DURATION_MS
      );
    if clamped != self.notice_duration_ms
    {
      warn!(
        requested =
          self.notice_duration_ms,
        clamped,
        "notice_duration_ms out of \
         range"
      );
      self.notice_duration_ms = clamped;
    }
  }
}

#[cfg(test)]
mod tests {
  use super::AppConfig;

  #[test]
  fn empty_document_uses_defaults() {
    let cfg = AppConfig::from_toml_str("")
      .expect("parse empty config");
    assert_eq!(cfg, AppConfig::default());
    assert_eq!(cfg.storage_key, "todoTasks");
  }

  #[test]
  fn overrides_and_clamps() {
    let cfg = AppConfig::from_toml_str(
      r#"
storage_key = "  work.tasks "
notice_duration_ms = 10
notice_exit_ms = 150
"#
    )
    .expect("parse config");
    assert_eq!(cfg.storage_key, "work.tasks");
    assert_eq!(cfg.notice_duration_ms, 500);
    assert_eq!(cfg.notice_exit_ms, 150);
    assert_eq!(
      cfg.notice_enter_delay_ms,
      100
    );
  }

  #[test]
  fn blank_key_falls_back() {
    let cfg = AppConfig::from_toml_str(
      "storage_key = \"   \""
    )
    .expect("parse config");
    assert_eq!(cfg.storage_key, "todoTasks");
  }

  #[test]
  fn malformed_config_falls_back() {
    assert!(
      AppConfig::from_toml_str(
        "notice_exit_ms = \"soon\""
      )
      .is_err()
    );
    assert_eq!(
      AppConfig::load_or_default(
        "storage_key = ["
      ),
      AppConfig::default()
    );
  }
}
