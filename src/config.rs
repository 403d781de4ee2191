use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let data_dir = env::var("STORE_DATA_DIR").unwrap_or_else(|_| "data".to_string());
        Self {
            data_dir: PathBuf::from(data_dir),
        }
    }
}
