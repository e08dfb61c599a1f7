//! Persisted user settings.
//!
//! [`SettingsStore`] keeps [`UserSettings`] in a TOML file and publishes every
//! change on a [`tokio::sync::watch`] channel, so readers observe the latest
//! value without polling. Writes go to a temporary sibling file that is then
//! renamed over the original, so a crash mid-write never leaves a truncated
//! file behind.
//!
//! This store is the only place the access token is kept at rest.
//!
//! # Examples
//!
//! ```rust,no_run
//! use shiori::settings::SettingsStore;
//!
//! # async fn example() -> shiori::Result<()> {
//! let store = SettingsStore::open_default().await?;
//! let mut changes = store.subscribe();
//!
//! store.sign_in("token", "Bearer", 1_900_000_000, 5120).await?;
//! assert!(changes.borrow_and_update().is_signed_in());
//! # Ok(())
//! # }
//! ```

use chrono::Utc;
use std::path::{Path, PathBuf};
use tokio::sync::{Mutex, watch};

use crate::error::{Error, Result};
use crate::model::{ListSort, Theme, TitleFormat, UserSettings};

const APP_DIR: &str = "shiori";
const FILE_NAME: &str = "settings.toml";

/// File-backed, observable settings.
#[derive(Debug)]
pub struct SettingsStore {
    path: PathBuf,
    sender: watch::Sender<UserSettings>,
    write_lock: Mutex<()>,
}

impl SettingsStore {
    /// `<config dir>/shiori/settings.toml`, when the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(FILE_NAME))
    }

    /// Opens the store at [`default_path`](Self::default_path).
    pub async fn open_default() -> Result<Self> {
        let path = Self::default_path()
            .ok_or_else(|| Error::config("no configuration directory on this platform"))?;
        Self::open(path).await
    }

    /// Opens the store at `path`, starting from defaults if the file is absent.
    ///
    /// A token that has already expired is dropped from the loaded value.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let mut settings = read(&path).await?;
        if settings.is_token_expired(Utc::now().timestamp()) {
            tracing::warn!(path = %path.display(), "Stored access token has expired");
            settings = settings.signed_out();
        }
        let (sender, _) = watch::channel(settings);
        Ok(Self {
            path,
            sender,
            write_lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Snapshot of the current settings.
    pub fn current(&self) -> UserSettings {
        self.sender.borrow().clone()
    }

    /// A receiver that sees every subsequent change.
    pub fn subscribe(&self) -> watch::Receiver<UserSettings> {
        self.sender.subscribe()
    }

    /// Applies `change`, persists the result, then publishes it.
    ///
    /// Nothing is published if writing fails.
    pub async fn update(&self, change: impl FnOnce(&mut UserSettings)) -> Result<UserSettings> {
        let _guard = self.write_lock.lock().await;
        let mut settings = self.current();
        change(&mut settings);
        write(&self.path, &settings).await?;
        self.sender.send_replace(settings.clone());
        tracing::debug!(path = %self.path.display(), "Settings saved");
        Ok(settings)
    }

    pub async fn sign_in(
        &self,
        access_token: impl Into<String>,
        token_type: impl Into<String>,
        expires_at: i64,
        user_id: i32,
    ) -> Result<UserSettings> {
        let access_token = access_token.into();
        if access_token.trim().is_empty() {
            return Err(Error::config("access token is empty"));
        }
        let token_type = token_type.into();
        self.update(move |settings| {
            settings.access_token = access_token;
            settings.token_type = token_type;
            settings.token_expires_at = expires_at;
            settings.user_id = user_id;
        })
        .await
    }

    /// Forgets every credential, keeping display preferences.
    pub async fn sign_out(&self) -> Result<UserSettings> {
        self.update(|settings| *settings = settings.signed_out()).await
    }

    pub async fn set_title_format(&self, format: TitleFormat) -> Result<UserSettings> {
        self.update(|settings| settings.title_format = format).await
    }

    pub async fn set_theme(&self, theme: Theme) -> Result<UserSettings> {
        self.update(|settings| settings.theme = theme).await
    }

    pub async fn set_list_sort(&self, sort: ListSort) -> Result<UserSettings> {
        self.update(|settings| settings.list_sort = sort).await
    }
}

async fn read(path: &Path) -> Result<UserSettings> {
    match tokio::fs::read_to_string(path).await {
        Ok(text) => Ok(toml::from_str(&text)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "No settings file, using defaults");
            Ok(UserSettings::default())
        }
        Err(e) => Err(e.into()),
    }
}

async fn write(path: &Path, settings: &UserSettings) -> Result<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    let text = toml::to_string_pretty(settings)?;
    let temp = path.with_extension("toml.tmp");
    tokio::fs::write(&temp, text).await?;
    tokio::fs::rename(&temp, path).await?;
    Ok(())
}
