use crate::error::Result;
use crate::model::todo::Todo;

/// Whole-list storage. Every operation loads the full list and every
/// mutation writes it back in full.
pub trait TodoRepository {
    /// Held across one load/save cycle; releases on drop.
    type Guard;

    /// A missing store is an empty list.
    fn load(&self) -> Result<Vec<Todo>>;
    fn save(&self, todos: &[Todo]) -> Result<()>;
    fn lock(&self) -> Result<Self::Guard>;
}
