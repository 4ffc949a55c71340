pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod repository;
pub mod service;
pub mod time;

pub use config::StoreConfig;
pub use error::{Result, StoreError};
pub use input::{parse_id, validate_title};
pub use model::todo::{Todo, TodoStatus};
pub use repository::{FileTodoRepository, MemoryTodoRepository, StoreLock, TodoRepository};
pub use service::todo_service::{next_id, sort_by_due, TodoService};
pub use time::{resolve_due, resolve_due_now, DueResolution, DueSource};
