use dotenvy::dotenv;
use std::env;

#[derive(Clone)]
pub struct Config {
    pub server_addr: String,

    /// `file` persists each collection as a JSON document on disk,
    /// `memory` keeps everything in-process (the dev/demo mode).
    pub storage: StorageKind,
    pub data_dir: String,

    /// Prefix for storage keys, `<namespace>-<collection>`.
    pub namespace: String,

    pub api_prefix: String,
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    File,
    Memory,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let storage = match env::var("STORAGE").as_deref() {
            Ok("memory") => StorageKind::Memory,
            _ => StorageKind::File,
        };

        Self {
            server_addr: env::var("SERVER_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string()),
            storage,
            data_dir: env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string()),
            namespace: env::var("NAMESPACE").unwrap_or_else(|_| "vip-finance".to_string()),
            api_prefix: env::var("API_PREFIX").unwrap_or_else(|_| "/api".to_string()),
        }
    }
}
