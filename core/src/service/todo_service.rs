use chrono::{DateTime, FixedOffset, Local};
use tracing::{debug, info};

use crate::error::{Result, StoreError};
use crate::input::{parse_id, validate_title};
use crate::model::todo::{Todo, TodoStatus};
use crate::repository::TodoRepository;
use crate::time::{resolve_due, DueSource};

/// The five todo operations. Each one is a full load / modify / save cycle
/// against the repository; nothing is cached between calls.
pub struct TodoService<R: TodoRepository> {
    repo: R,
}

impl<R: TodoRepository> TodoService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn create(&self, title: &str, due: Option<&str>) -> Result<Todo> {
        self.create_at(title, due, Local::now().fixed_offset())
    }

    /// Same as [`create`](Self::create) with an explicit clock for the
    /// default due date.
    pub fn create_at(
        &self,
        title: &str,
        due: Option<&str>,
        now: DateTime<FixedOffset>,
    ) -> Result<Todo> {
        let title = validate_title(title)?;
        let _lock = self.repo.lock()?;
        let mut todos = self.repo.load()?;

        let resolution = resolve_due(due, now);
        if resolution.source == DueSource::Fallback {
            if let Some(raw) = due.filter(|d| !d.trim().is_empty()) {
                debug!(input = raw, "could not parse due date, using default");
            }
        }

        let todo = Todo::new(next_id(&todos), title, resolution.due);
        todos.push(todo.clone());
        self.repo.save(&todos)?;
        info!(id = todo.id, "created todo");
        Ok(todo)
    }

    /// All todos, earliest due first. An empty store is [`StoreError::Empty`].
    pub fn list(&self) -> Result<Vec<Todo>> {
        let mut todos = self.load_non_empty()?;
        sort_by_due(&mut todos);
        Ok(todos)
    }

    pub fn get(&self, id: &str) -> Result<Todo> {
        let id = parse_id(id)?;
        self.load_non_empty()?
            .into_iter()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))
    }

    /// Removes the todo and returns it. The rest keep their order.
    pub fn delete(&self, id: &str) -> Result<Todo> {
        let id = parse_id(id)?;
        let _lock = self.repo.lock()?;
        let mut todos = self.load_non_empty_unlocked()?;

        let pos = todos
            .iter()
            .position(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))?;
        let removed = todos.remove(pos);

        self.repo.save(&todos)?;
        info!(id, "deleted todo");
        Ok(removed)
    }

    /// Any status may follow any other.
    pub fn update_status(&self, id: &str, status: &str) -> Result<Todo> {
        let id = parse_id(id)?;
        let status: TodoStatus = status.parse()?;
        let _lock = self.repo.lock()?;
        let mut todos = self.load_non_empty_unlocked()?;

        let todo = todos
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))?;
        let previous = todo.status;
        todo.status = status;
        let updated = todo.clone();

        self.repo.save(&todos)?;
        info!(id, from = %previous, to = %status, "updated todo status");
        Ok(updated)
    }

    fn load_non_empty(&self) -> Result<Vec<Todo>> {
        let _lock = self.repo.lock()?;
        self.load_non_empty_unlocked()
    }

    fn load_non_empty_unlocked(&self) -> Result<Vec<Todo>> {
        let todos = self.repo.load()?;
        if todos.is_empty() {
            return Err(StoreError::Empty);
        }
        Ok(todos)
    }
}

/// One past the highest id present, 1 for an empty list.
pub fn next_id(todos: &[Todo]) -> u64 {
    todos.iter().map(|t| t.id).max().unwrap_or(0) + 1
}

/// Ascending due date. Stable, so equal dates keep their stored order.
pub fn sort_by_due(todos: &mut [Todo]) {
    todos.sort_by_key(|t| t.due_date);
}
