//! 状态持久化边界
//!
//! 归约逻辑不感知持久化；容器只在边界处调用 load/save，
//! 以便未来接入真实后端时不动切片代码。

use crate::store::AppState;
use async_trait::async_trait;
use portal_core::{PortalError, Result};
use std::path::PathBuf;

/// 状态存取接口
#[async_trait]
pub trait StateStore: Send + Sync {
    /// 加载既有状态，没有则返回 None（调用方回落到种子数据）
    async fn load(&self) -> Result<Option<AppState>>;

    /// 保存完整状态快照
    async fn save(&self, state: &AppState) -> Result<()>;
}

/// 不持久化：重启即重置到种子数据（默认行为）
#[derive(Debug, Default)]
pub struct EphemeralStore;

#[async_trait]
impl StateStore for EphemeralStore {
    async fn load(&self) -> Result<Option<AppState>> {
        Ok(None)
    }

    async fn save(&self, _state: &AppState) -> Result<()> {
        Ok(())
    }
}

/// JSON文件存储
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl StateStore for JsonFileStore {
    async fn load(&self) -> Result<Option<AppState>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(PortalError::Io(e)),
        };
        let state = serde_json::from_slice(&bytes)?;
        tracing::info!("Loaded portal state from {}", self.path.display());
        Ok(Some(state))
    }

    async fn save(&self, state: &AppState) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        let bytes = serde_json::to_vec_pretty(state)?;
        tokio::fs::write(&self.path, bytes).await?;
        tracing::info!("Saved portal state to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ephemeral_store_never_loads() {
        let store = EphemeralStore;
        store.save(&AppState::seeded()).await.unwrap();
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_json_file_store_round_trip() {
        let path = std::env::temp_dir().join(format!(
            "portal-state-test-{}.json",
            std::process::id()
        ));
        let store = JsonFileStore::new(&path);

        let state = AppState::seeded();
        store.save(&state).await.unwrap();

        let loaded = store.load().await.unwrap().expect("state file exists");
        assert_eq!(loaded.doctors.doctors.len(), state.doctors.doctors.len());
        assert_eq!(
            loaded.patients.prescriptions.len(),
            state.patients.prescriptions.len()
        );

        tokio::fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn test_json_file_store_missing_file_is_none() {
        let store = JsonFileStore::new("/nonexistent/portal-state.json");
        assert!(store.load().await.unwrap().is_none());
    }
}
