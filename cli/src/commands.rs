use std::io::Write;

use anyhow::Result;
use duetodo_core::{StoreError, TodoRepository, TodoService};
use tracing::debug;

use crate::cli::Commands;
use crate::render;

/// Runs one command. Input and lookup problems are printed for the user and
/// count as success; storage failures are returned.
pub fn dispatch<R, W>(
    service: &TodoService<R>,
    command: Commands,
    out: &mut W,
    color: bool,
) -> Result<()>
where
    R: TodoRepository,
    W: Write,
{
    match command {
        Commands::Add { title, due } => add(service, &title.join(" "), due.as_deref(), out),
        Commands::View { json } => view(service, json, color, out),
        Commands::Get { id, json } => get(service, &id, json, out),
        Commands::Delete { id } => delete(service, &id, out),
        Commands::Update { id, status } => update(service, &id, &status, out),
    }
}

fn add<R: TodoRepository, W: Write>(
    service: &TodoService<R>,
    title: &str,
    due: Option<&str>,
    out: &mut W,
) -> Result<()> {
    let Some(todo) = report(service.create(title, due), out)? else {
        return Ok(());
    };
    writeln!(out, "Todo added: {} (ID: {})", todo.title, todo.id)?;
    writeln!(out, "  Due: {}", todo.due_date.format(render::DUE_DATE_FORMAT))?;
    Ok(())
}

fn view<R: TodoRepository, W: Write>(
    service: &TodoService<R>,
    json: bool,
    color: bool,
    out: &mut W,
) -> Result<()> {
    let Some(todos) = report(service.list(), out)? else {
        return Ok(());
    };
    if json {
        serde_json::to_writer_pretty(&mut *out, &todos)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", render::todo_table(&todos, color))?;
    }
    Ok(())
}

fn get<R: TodoRepository, W: Write>(
    service: &TodoService<R>,
    id: &str,
    json: bool,
    out: &mut W,
) -> Result<()> {
    let Some(todo) = report(service.get(id), out)? else {
        return Ok(());
    };
    if json {
        serde_json::to_writer_pretty(&mut *out, &todo)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", render::todo_detail(&todo))?;
    }
    Ok(())
}

fn delete<R: TodoRepository, W: Write>(
    service: &TodoService<R>,
    id: &str,
    out: &mut W,
) -> Result<()> {
    if report(service.delete(id), out)?.is_some() {
        writeln!(out, "Todo deleted successfully.")?;
    }
    Ok(())
}

fn update<R: TodoRepository, W: Write>(
    service: &TodoService<R>,
    id: &str,
    status: &str,
    out: &mut W,
) -> Result<()> {
    if report(service.update_status(id, status), out)?.is_some() {
        writeln!(out, "Todo status updated successfully.")?;
    }
    Ok(())
}

fn report<T, W: Write>(result: duetodo_core::Result<T>, out: &mut W) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_user_error() => {
            debug!(error = %e, "command rejected");
            writeln!(out, "{}", user_message(&e))?;
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

fn user_message(err: &StoreError) -> String {
    match err {
        StoreError::Empty => "No todos found.".to_string(),
        StoreError::NotFound(_) => "Todo not found.".to_string(),
        StoreError::InvalidId(_) => "Invalid ID.".to_string(),
        StoreError::InvalidStatus(_) => {
            "Invalid status. Use 'pending', 'in-progress', or 'completed'.".to_string()
        }
        StoreError::InvalidTitle => "Title must not be empty.".to_string(),
        other => other.to_string(),
    }
}
