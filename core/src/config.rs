use std::ffi::OsString;
use std::path::PathBuf;

pub const DEFAULT_FILE_NAME: &str = "todos.json";

/// Where the todo list lives and how it is guarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Path of the JSON file. Relative paths resolve against the working directory.
    pub path: PathBuf,
    /// Hold an advisory lock on `<path>.lock` for each read-modify-write cycle.
    pub lock: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_FILE_NAME),
            lock: false,
        }
    }
}

impl StoreConfig {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self {
            path: path.unwrap_or_else(|| PathBuf::from(DEFAULT_FILE_NAME)),
            ..Self::default()
        }
    }

    pub fn with_lock(mut self, lock: bool) -> Self {
        self.lock = lock;
        self
    }

    pub fn lock_path(&self) -> PathBuf {
        let mut name: OsString = self.path.clone().into_os_string();
        name.push(".lock");
        PathBuf::from(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_todos_json_in_working_dir() {
        let config = StoreConfig::new(None);
        assert_eq!(config.path, PathBuf::from("todos.json"));
        assert!(!config.lock);
        assert_eq!(config, StoreConfig::default());
    }

    #[test]
    fn test_lock_path_sits_next_to_store() {
        let config = StoreConfig::new(Some(PathBuf::from("/tmp/work/list.json"))).with_lock(true);
        assert!(config.lock);
        assert_eq!(config.lock_path(), PathBuf::from("/tmp/work/list.json.lock"));
    }
}
