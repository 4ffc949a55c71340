pub mod file;
pub mod lock;
pub mod memory;
pub mod traits;

// Re-export
pub use file::FileTodoRepository;
pub use lock::StoreLock;
pub use memory::MemoryTodoRepository;
pub use traits::TodoRepository;
