use creator_insights::{AnalyticsSnapshot, Profile, Video};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;

const MAX_SNAPSHOTS: usize = 365;

/// Everything ingested for one creator. Snapshots are kept oldest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub profile: Profile,
    #[serde(default)]
    pub videos: Vec<Video>,
    #[serde(default)]
    pub snapshots: Vec<AnalyticsSnapshot>,
}

pub struct ProfileStore {
    path: PathBuf,
    records: RwLock<HashMap<String, ProfileRecord>>,
}

impl ProfileStore {
    pub async fn load(path: PathBuf) -> Result<Self, String> {
        let records = if path.exists() {
            let data = tokio::fs::read_to_string(&path)
                .await
                .map_err(|err| format!("failed to read dataset: {}", err))?;
            if data.trim().is_empty() {
                HashMap::new()
            } else {
                serde_json::from_str(&data)
                    .map_err(|err| format!("failed to parse dataset: {}", err))?
            }
        } else {
            HashMap::new()
        };

        Ok(Self {
            path,
            records: RwLock::new(records),
        })
    }

    pub async fn list(&self) -> Vec<ProfileRecord> {
        let guard = self.records.read().await;
        let mut records: Vec<ProfileRecord> = guard.values().cloned().collect();
        records.sort_by(|a, b| a.profile.username.cmp(&b.profile.username));
        records
    }

    pub async fn get(&self, username: &str) -> Option<ProfileRecord> {
        let guard = self.records.read().await;
        guard.get(&normalize_username(username)).cloned()
    }

    pub async fn upsert(&self, record: ProfileRecord) -> Result<ProfileRecord, String> {
        let mut guard = self.records.write().await;
        guard.insert(normalize_username(&record.profile.username), record.clone());
        self.persist(&guard).await?;
        Ok(record)
    }

    pub async fn add_snapshot(
        &self,
        username: &str,
        snapshot: AnalyticsSnapshot,
    ) -> Result<ProfileRecord, String> {
        let mut guard = self.records.write().await;
        let record = guard
            .get_mut(&normalize_username(username))
            .ok_or_else(|| format!("profile not found: {}", username))?;
        record.snapshots.push(snapshot);
        if record.snapshots.len() > MAX_SNAPSHOTS {
            let excess = record.snapshots.len() - MAX_SNAPSHOTS;
            record.snapshots.drain(..excess);
        }
        let updated = record.clone();
        self.persist(&guard).await?;
        Ok(updated)
    }

    async fn persist(&self, records: &HashMap<String, ProfileRecord>) -> Result<(), String> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent).await?;
        }
        let payload = serde_json::to_string_pretty(records)
            .map_err(|err| format!("failed to serialize dataset: {}", err))?;
        let tmp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, payload)
            .await
            .map_err(|err| format!("failed to write dataset: {}", err))?;
        tokio::fs::rename(&tmp_path, &self.path)
            .await
            .map_err(|err| format!("failed to finalize dataset: {}", err))?;
        Ok(())
    }
}

pub fn normalize_username(username: &str) -> String {
    username.trim().trim_start_matches('@').to_lowercase()
}

async fn ensure_dir(path: &Path) -> Result<(), String> {
    if path.as_os_str().is_empty() || path.exists() {
        return Ok(());
    }
    tokio::fs::create_dir_all(path)
        .await
        .map_err(|err| format!("failed to create dataset dir: {}", err))
}
