//! Interactive terminal front-end for the ZenTask core.
//!
//! # Responsibility
//! - Render the filtered task view and summary counts read-only.
//! - Issue add/toggle/delete/clear/filter commands into the store.
//! - Own the confirmation prompt gating `clear_all`.
//!
//! Task numbers shown to the user are positions in the *filtered*
//! view; they are resolved back to stable task ids before any command
//! reaches the store.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use zentask_core::{
    default_log_level, filtered, init_logging, open_store, stats, Filter, SqliteTaskStorage,
    SystemClock, TaskId, TaskList, TaskStore, UuidIdGenerator,
};

fn main() -> ExitCode {
    if let Ok(log_dir) = std::env::var("ZENTASK_LOG_DIR") {
        if let Err(err) = init_logging(default_log_level(), &log_dir) {
            eprintln!("zentask: logging disabled: {err}");
        }
    }

    let db_path = std::env::var("ZENTASK_DB").unwrap_or_else(|_| "zentask.db".to_string());
    let conn = match open_store(&db_path) {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("zentask: cannot open task store at `{db_path}`: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut store = TaskStore::open(SqliteTaskStorage::new(&conn), UuidIdGenerator, SystemClock);
    let mut filter = Filter::All;

    println!("ZenTask {}: focus on what matters", zentask_core::core_version());
    println!("commands: add <text> | toggle <n> | rm <n> | filter all|active|completed | clear | list | quit");
    render(store.tasks(), filter);

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => {
                eprintln!("zentask: cannot read input: {err}");
                return ExitCode::FAILURE;
            }
        }

        let input = line.trim();
        let (command, rest) = match input.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (input, ""),
        };

        match command {
            "" => continue,
            "add" => {
                if store.add(rest).is_none() {
                    println!("nothing to add");
                    continue;
                }
                render(store.tasks(), filter);
            }
            "toggle" => match resolve_index(store.tasks(), filter, rest) {
                Some(id) => {
                    store.toggle(id);
                    render(store.tasks(), filter);
                }
                None => println!("no such task: `{rest}`"),
            },
            "rm" => match resolve_index(store.tasks(), filter, rest) {
                Some(id) => {
                    store.delete(id);
                    render(store.tasks(), filter);
                }
                None => println!("no such task: `{rest}`"),
            },
            "filter" => match Filter::parse(rest) {
                Some(selected) => {
                    filter = selected;
                    render(store.tasks(), filter);
                }
                None => println!("unknown filter `{rest}`; expected all|active|completed"),
            },
            "clear" => {
                if confirm_clear(&stdin) {
                    store.clear_all();
                    render(store.tasks(), filter);
                } else {
                    println!("kept everything");
                }
            }
            "list" => render(store.tasks(), filter),
            "quit" | "exit" => break,
            other => println!("unknown command `{other}`"),
        }
    }

    ExitCode::SUCCESS
}

/// Maps a 1-based position in the filtered view back to a task id.
fn resolve_index(list: &TaskList, filter: Filter, raw: &str) -> Option<TaskId> {
    let position: usize = raw.parse().ok()?;
    let view = filtered(list, filter);
    view.tasks().get(position.checked_sub(1)?).map(|task| task.id)
}

fn confirm_clear(stdin: &io::Stdin) -> bool {
    print!("Are you sure you want to delete all tasks? [y/N] ");
    let _ = io::stdout().flush();

    let mut answer = String::new();
    if stdin.lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim(), "y" | "Y" | "yes")
}

fn render(list: &TaskList, filter: Filter) {
    let counts = stats(list);
    let view = filtered(list, filter);

    println!(
        "[{}] {} total · {} pending · {} done",
        filter_label(filter),
        counts.total,
        counts.active,
        counts.completed
    );

    if view.is_empty() {
        println!("{}", empty_message(filter));
        return;
    }

    for (position, task) in view.tasks().iter().enumerate() {
        let mark = if task.completed { "x" } else { " " };
        println!("{:>3}. [{mark}] {}", position + 1, task.text);
    }
}

fn filter_label(filter: Filter) -> &'static str {
    match filter {
        Filter::All => "all",
        Filter::Active => "active",
        Filter::Completed => "completed",
    }
}

fn empty_message(filter: Filter) -> &'static str {
    match filter {
        Filter::Completed => "No completed tasks yet. Keep going!",
        Filter::Active => "No active tasks. You're all caught up!",
        Filter::All => "No tasks found. Add one with `add <text>`.",
    }
}
