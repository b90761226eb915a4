use crate::errors::AppError;
use std::collections::HashMap;
use std::{
    env,
    path::{Path, PathBuf},
    sync::Arc,
};
use tokio::{fs, sync::Mutex};
use tracing::error;

// Dir keeps one JSON file per key; Memory shares its map across clones so a
// reload in tests sees what an earlier store instance wrote.
#[derive(Clone)]
pub enum KvStore {
    Dir(PathBuf),
    Memory(Arc<Mutex<HashMap<String, String>>>),
}

impl KvStore {
    pub fn dir(path: impl Into<PathBuf>) -> Self {
        KvStore::Dir(path.into())
    }

    pub fn in_memory() -> Self {
        KvStore::Memory(Arc::new(Mutex::new(HashMap::new())))
    }

    pub async fn read(&self, key: &str) -> Option<String> {
        match self {
            KvStore::Dir(dir) => match fs::read_to_string(entry_path(dir, key)).await {
                Ok(raw) => Some(raw),
                Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
                Err(err) => {
                    error!("failed to read {key}: {err}");
                    None
                }
            },
            KvStore::Memory(map) => map.lock().await.get(key).cloned(),
        }
    }

    pub async fn write(&self, key: &str, value: &str) -> Result<(), AppError> {
        match self {
            KvStore::Dir(dir) => {
                fs::write(entry_path(dir, key), value).await?;
                Ok(())
            }
            KvStore::Memory(map) => {
                map.lock().await.insert(key.to_string(), value.to_string());
                Ok(())
            }
        }
    }

    pub async fn remove(&self, key: &str) -> Result<(), AppError> {
        match self {
            KvStore::Dir(dir) => match fs::remove_file(entry_path(dir, key)).await {
                Ok(()) => Ok(()),
                Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
                Err(err) => Err(AppError::internal(err)),
            },
            KvStore::Memory(map) => {
                map.lock().await.remove(key);
                Ok(())
            }
        }
    }
}

fn entry_path(dir: &Path, key: &str) -> PathBuf {
    dir.join(format!("{key}.json"))
}

pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = env::var("ECOTRACK_DATA_DIR") {
        return PathBuf::from(dir);
    }

    PathBuf::from("data")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unique_temp_dir() -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let mut dir = std::env::temp_dir();
        dir.push(format!("ecotrack_kv_{}_{}", std::process::id(), nanos));
        dir
    }

    #[tokio::test]
    async fn memory_backend_round_trips_and_removes() {
        let kv = KvStore::in_memory();
        assert_eq!(kv.read("some_key").await, None);

        kv.write("some_key", "[1,2,3]").await.unwrap();
        assert_eq!(kv.read("some_key").await.as_deref(), Some("[1,2,3]"));

        kv.remove("some_key").await.unwrap();
        assert_eq!(kv.read("some_key").await, None);
        // removing again is fine
        kv.remove("some_key").await.unwrap();
    }

    #[tokio::test]
    async fn memory_backend_shares_state_across_clones() {
        let kv = KvStore::in_memory();
        kv.write("shared", "value").await.unwrap();
        let clone = kv.clone();
        assert_eq!(clone.read("shared").await.as_deref(), Some("value"));
    }

    #[tokio::test]
    async fn dir_backend_uses_one_file_per_key() {
        let dir = unique_temp_dir();
        fs::create_dir_all(&dir).await.unwrap();
        let kv = KvStore::dir(dir.clone());

        kv.write("ecotrack_history", "[]").await.unwrap();
        assert!(dir.join("ecotrack_history.json").is_file());
        assert_eq!(kv.read("ecotrack_history").await.as_deref(), Some("[]"));
        assert_eq!(kv.read("ecotrack_goal").await, None);

        kv.remove("ecotrack_history").await.unwrap();
        assert!(!dir.join("ecotrack_history.json").exists());
        assert_eq!(kv.read("ecotrack_history").await, None);

        let _ = fs::remove_dir_all(&dir).await;
    }
}
