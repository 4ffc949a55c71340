use duetodo_core::{Todo, TodoStatus};
use tabled::settings::object::{Cell, Rows};
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";
pub const MAX_TITLE_WIDTH: usize = 48;

const STATUS_COLUMN: usize = 3;

#[derive(Tabled)]
struct TodoRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Due Date")]
    due: String,
    #[tabled(rename = "Status")]
    status: TodoStatus,
}

pub fn todo_table(todos: &[Todo], color: bool) -> String {
    let rows = todos.iter().map(|t| TodoRow {
        id: t.id,
        title: truncate_title(&t.title, MAX_TITLE_WIDTH),
        due: t.due_date.format(DUE_DATE_FORMAT).to_string(),
        status: t.status,
    });

    let mut table = Table::new(rows);
    table.with(Style::modern());

    if color {
        table.with(Modify::new(Rows::first()).with(Color::FG_CYAN));
        for (i, todo) in todos.iter().enumerate() {
            // Row 0 is the header.
            let cell = Cell::new(i + 1, STATUS_COLUMN);
            table.with(Modify::new(cell).with(status_color(todo.status)));
        }
    }

    table.to_string()
}

pub fn todo_detail(todo: &Todo) -> String {
    format!(
        "ID: {}\nTitle: {}\nDue Date: {}\nStatus: {}",
        todo.id,
        todo.title,
        todo.due_date.format(DUE_DATE_FORMAT),
        todo.status
    )
}

pub fn status_color(status: TodoStatus) -> Color {
    match status {
        TodoStatus::Pending => Color::FG_RED,
        TodoStatus::InProgress => Color::FG_YELLOW,
        TodoStatus::Completed => Color::FG_GREEN,
    }
}

/// Cuts a title to at most `max` terminal columns, marking the cut with `…`.
pub fn truncate_title(title: &str, max: usize) -> String {
    if title.width() <= max {
        return title.to_string();
    }

    let mut out = String::new();
    let mut width = 0;
    for ch in title.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w + 1 > max {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push('…');
    out
}
