use std::cell::{Cell, RefCell};

use crate::error::Result;
use crate::model::todo::Todo;
use crate::repository::traits::TodoRepository;

/// Keeps the list in memory. Counts saves so callers can tell whether an
/// operation wrote anything.
#[derive(Debug, Default)]
pub struct MemoryTodoRepository {
    todos: RefCell<Vec<Todo>>,
    saves: Cell<usize>,
}

impl MemoryTodoRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_todos(todos: Vec<Todo>) -> Self {
        Self {
            todos: RefCell::new(todos),
            saves: Cell::new(0),
        }
    }

    pub fn snapshot(&self) -> Vec<Todo> {
        self.todos.borrow().clone()
    }

    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl TodoRepository for MemoryTodoRepository {
    // Nothing outside this process can see the list.
    type Guard = ();

    fn load(&self) -> Result<Vec<Todo>> {
        Ok(self.snapshot())
    }

    fn save(&self, todos: &[Todo]) -> Result<()> {
        *self.todos.borrow_mut() = todos.to_vec();
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }

    fn lock(&self) -> Result<()> {
        Ok(())
    }
}
