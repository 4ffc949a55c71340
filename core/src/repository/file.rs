use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::config::StoreConfig;
use crate::error::{Result, StoreError};
use crate::model::todo::Todo;
use crate::repository::lock::StoreLock;
use crate::repository::traits::TodoRepository;

#[derive(Clone, Debug)]
pub struct FileTodoRepository {
    config: StoreConfig,
}

impl FileTodoRepository {
    /// Nothing touches the disk until the first load or save.
    pub fn new(config: StoreConfig) -> Self {
        FileTodoRepository { config }
    }

    pub fn path(&self) -> &Path {
        &self.config.path
    }

    fn read_todos(&self) -> Result<Vec<Todo>> {
        let path = self.path();
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no todo file yet, starting empty");
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(StoreError::Unreadable {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let todos: Vec<Todo> =
            serde_json::from_str(&content).map_err(|source| StoreError::Corrupt {
                path: path.to_path_buf(),
                source,
            })?;
        debug!(path = %path.display(), count = todos.len(), "loaded todos");
        Ok(todos)
    }

    fn write_todos(&self, todos: &[Todo]) -> io::Result<()> {
        let path = self.path();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, todos)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }
}

impl TodoRepository for FileTodoRepository {
    type Guard = StoreLock;

    fn load(&self) -> Result<Vec<Todo>> {
        self.read_todos()
    }

    fn save(&self, todos: &[Todo]) -> Result<()> {
        self.write_todos(todos)
            .map_err(|source| StoreError::Unwritable {
                path: self.path().to_path_buf(),
                source,
            })?;
        debug!(path = %self.path().display(), count = todos.len(), "saved todos");
        Ok(())
    }

    fn lock(&self) -> Result<Self::Guard> {
        if self.config.lock {
            StoreLock::acquire(&self.config.lock_path())
        } else {
            Ok(StoreLock::unlocked())
        }
    }
}
