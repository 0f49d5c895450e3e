use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

/// Keyed JSON document storage. The stores only ever read and write whole
/// documents through this seam, so the backing mechanism is swappable.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Returns `None` when nothing has been stored under `key`.
    async fn get(&self, key: &str) -> io::Result<Option<Value>>;
    async fn set(&self, key: &str, value: &Value) -> io::Result<()>;
}

/// One JSON file per key at `<dir>/<namespace>-<key>.json`.
pub struct FileBackend {
    dir: PathBuf,
    namespace: String,
}

impl FileBackend {
    pub async fn open(dir: impl Into<PathBuf>, namespace: &str) -> io::Result<Self> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir).await?;
        Ok(Self {
            dir,
            namespace: namespace.to_string(),
        })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}-{}.json", self.namespace, key))
    }
}

#[async_trait]
impl Backend for FileBackend {
    async fn get(&self, key: &str) -> io::Result<Option<Value>> {
        let raw = match tokio::fs::read(self.path_for(key)).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e),
        };
        let value = serde_json::from_slice(&raw)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(Some(value))
    }

    async fn set(&self, key: &str, value: &Value) -> io::Result<()> {
        let raw = serde_json::to_vec_pretty(value)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        tokio::fs::write(self.path_for(key), raw).await
    }
}

/// In-process storage, nothing survives a restart. Used as the demo mode
/// and by tests; `set_fail_writes` simulates a failing endpoint.
#[derive(Default)]
pub struct MemoryBackend {
    docs: Mutex<HashMap<String, Value>>,
    fail_writes: AtomicBool,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl Backend for MemoryBackend {
    async fn get(&self, key: &str) -> io::Result<Option<Value>> {
        let docs = self.docs.lock().unwrap();
        Ok(docs.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &Value) -> io::Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(io::Error::other("simulated write failure"));
        }
        let mut docs = self.docs.lock().unwrap();
        docs.insert(key.to_string(), value.clone());
        Ok(())
    }
}
