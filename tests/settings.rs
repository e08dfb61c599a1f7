//! Settings store tests
//!
//! Each test works in its own temporary directory.

use chrono::Utc;
use tempfile::TempDir;

use shiori::config::ClientConfig;
use shiori::model::{ListSort, Theme, TitleFormat, UNKNOWN};
use shiori::session::Session;
use shiori::settings::SettingsStore;

#[cfg(test)]
mod tests {
    use super::*;

    fn far_future() -> i64 {
        Utc::now().timestamp() + 3600
    }

    #[tokio::test]
    async fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let store = SettingsStore::open(dir.path().join("settings.toml"))
            .await
            .unwrap();

        let settings = store.current();
        assert!(!settings.is_signed_in());
        assert_eq!(settings.user_id, UNKNOWN);
        assert_eq!(settings.title_format, TitleFormat::UserPreferred);
    }

    #[tokio::test]
    async fn test_changes_persist_across_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("settings.toml");

        let store = SettingsStore::open(&path).await.unwrap();
        store.set_theme(Theme::Dark).await.unwrap();
        store.set_list_sort(ListSort::ScoreDesc).await.unwrap();
        store
            .sign_in("abc", "Bearer", far_future(), 5120)
            .await
            .unwrap();
        drop(store);

        let reopened = SettingsStore::open(&path).await.unwrap();
        let settings = reopened.current();
        assert_eq!(settings.theme, Theme::Dark);
        assert_eq!(settings.list_sort, ListSort::ScoreDesc);
        assert_eq!(settings.token().as_deref(), Some("abc"));
        assert!(settings.is_signed_in());
        assert!(!path.with_extension("toml.tmp").exists());
    }

    #[tokio::test]
    async fn test_subscribers_see_updates() {
        let dir = TempDir::new().unwrap();
        let store = SettingsStore::open(dir.path().join("settings.toml"))
            .await
            .unwrap();
        let mut changes = store.subscribe();

        store.set_title_format(TitleFormat::English).await.unwrap();

        assert!(changes.has_changed().unwrap());
        assert_eq!(changes.borrow_and_update().title_format, TitleFormat::English);
    }

    #[tokio::test]
    async fn test_sign_out_keeps_preferences() {
        let dir = TempDir::new().unwrap();
        let store = SettingsStore::open(dir.path().join("settings.toml"))
            .await
            .unwrap();
        store.set_theme(Theme::Light).await.unwrap();
        store.sign_in("abc", "Bearer", far_future(), 1).await.unwrap();

        let settings = store.sign_out().await.unwrap();

        assert!(settings.token().is_none());
        assert_eq!(settings.user_id, UNKNOWN);
        assert_eq!(settings.theme, Theme::Light);
    }

    #[tokio::test]
    async fn test_blank_token_is_rejected() {
        let dir = TempDir::new().unwrap();
        let store = SettingsStore::open(dir.path().join("settings.toml"))
            .await
            .unwrap();

        assert!(store.sign_in("  ", "Bearer", far_future(), 1).await.is_err());
        assert!(!store.current().is_signed_in());
    }

    #[tokio::test]
    async fn test_expired_token_is_dropped_on_open() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.toml");
        let store = SettingsStore::open(&path).await.unwrap();
        store
            .sign_in("old", "Bearer", Utc::now().timestamp() - 10, 1)
            .await
            .unwrap();
        drop(store);

        let reopened = SettingsStore::open(&path).await.unwrap();
        assert!(reopened.current().token().is_none());
    }

    #[tokio::test]
    async fn test_corrupt_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.toml");
        tokio::fs::write(&path, "theme = [").await.unwrap();

        assert!(SettingsStore::open(&path).await.is_err());
    }

    #[tokio::test]
    async fn test_session_follows_stored_token() {
        let dir = TempDir::new().unwrap();
        let store = SettingsStore::open(dir.path().join("settings.toml"))
            .await
            .unwrap();
        let base = ClientConfig::default();

        let anonymous = Session::from_settings(&base, &store.current()).unwrap();
        assert!(!anonymous.is_authenticated());

        store.sign_in("abc", "Bearer", far_future(), 1).await.unwrap();
        let signed_in = Session::from_settings(&base, &store.current()).unwrap();
        assert!(signed_in.is_authenticated());
        assert_eq!(signed_in.config().bearer().as_deref(), Some("Bearer abc"));
    }
}
