// Terminal front-end for taskpad
// The rendering surface: prints display projections and dispatches line
// commands to the operation layer by action name plus list index. List
// numbers map to ids from the last rendered view, so ids are never typed.

use std::io::{self, BufRead, Write};

use crate::App;
use crate::commands::task::{
    clearTasks, deleteTask, getTasks, setFilter, setPriority, setSearch, toggleTask,
};
use crate::confirm::ConfirmService;
use crate::models::{Filter, Priority};
use crate::notify::NotifyKind;
use crate::render::renderTasks;

/// Stdin yes/no prompt
pub struct StdinConfirm;

impl ConfirmService for StdinConfirm {
    fn confirm(&self, message: &str) -> bool {
        print!("{} [y/N] ", message);
        let _ = io::stdout().flush();

        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
    }
}

/// Interactive line loop. Blocking by design; runs on a dedicated thread.
pub fn runLoop(app: &App) {
    println!("taskpad - type 'help' for commands");
    let mut lastIds = printDisplay(app);

    loop {
        let prompt = if app.form.isEditing() { "edit> " } else { "> " };
        print!("{}", prompt);
        let _ = io::stdout().flush();

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (cmd, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();

        match cmd {
            "add" | "save" => {
                app.form.submit(rest);
                lastIds = refresh(app);
            }
            "edit" => match resolveId(&lastIds, rest) {
                Some(id) => {
                    if let Some(draft) = app.form.beginEdit(&id) {
                        println!("editing: {} (save with 'add <new text>', or 'cancel')", draft);
                    }
                }
                None => println!("usage: edit <number from the list>"),
            },
            "cancel" => {
                app.form.cancelEdit();
                lastIds = refresh(app);
            }
            "done" => match resolveId(&lastIds, rest) {
                Some(id) => {
                    if let Err(e) = toggleTask(app, &id) {
                        println!("[done] {}", e);
                    }
                    lastIds = refresh(app);
                }
                None => println!("usage: done <number from the list>"),
            },
            "rm" => match resolveId(&lastIds, rest) {
                Some(id) => {
                    deleteTask(app, &id);
                    lastIds = refresh(app);
                }
                None => println!("usage: rm <number from the list>"),
            },
            "clear" => {
                clearTasks(app);
                lastIds = refresh(app);
            }
            "prio" => match Priority::fromName(rest) {
                Some(priority) => setPriority(app, priority),
                None => println!("usage: prio low|medium|high"),
            },
            "filter" => match Filter::fromName(rest) {
                Some(filter) => {
                    setFilter(app, filter);
                    lastIds = refresh(app);
                }
                None => println!("usage: filter all|active|completed"),
            },
            "search" => {
                setSearch(app, rest);
                lastIds = refresh(app);
            }
            "list" => {
                lastIds = printDisplay(app);
            }
            "json" => match serde_json::to_string_pretty(&getTasks(app)) {
                Ok(json) => println!("{}", json),
                Err(e) => println!("[json] {}", e),
            },
            "help" => printHelp(),
            "quit" | "exit" => break,
            _ => println!("unknown command '{}', type 'help'", cmd),
        }
    }
}

/// Re-render after an operation and surface any notification
fn refresh(app: &App) -> Vec<String> {
    let ids = printDisplay(app);
    if let Some(n) = app.notifier.current() {
        let tag = match n.kind {
            NotifyKind::Success => "ok",
            NotifyKind::Error => "error",
        };
        println!("[{}] {}", tag, n.message);
    }
    ids
}

/// Print the current display and return the visible ids in list order
fn printDisplay(app: &App) -> Vec<String> {
    let display = renderTasks(&app.store);

    println!();
    println!("{}", display.stats);
    if let Some(empty) = display.empty {
        println!("  {}", empty.message());
    }

    let mut ids = Vec::with_capacity(display.items.len());
    for (i, item) in display.items.iter().enumerate() {
        let mark = if item.completed { "x" } else { " " };
        println!(
            "  {:>2}. [{}] {} ({}) - {} {}",
            i + 1,
            mark,
            item.text,
            item.priorityLabel,
            item.formattedDate,
            item.formattedTime
        );
        ids.push(item.id.clone());
    }
    ids
}

/// Map a 1-based list number from the last rendered view to a task id
fn resolveId(lastIds: &[String], arg: &str) -> Option<String> {
    let n: usize = arg.parse().ok()?;
    lastIds.get(n.checked_sub(1)?).cloned()
}

fn printHelp() {
    println!("commands:");
    println!("  add <text>                 add a task (saves the edit when editing)");
    println!("  edit <n>                   edit task n from the list");
    println!("  cancel                     leave edit mode, discarding changes");
    println!("  done <n>                   toggle completion of task n");
    println!("  rm <n>                     delete task n (asks first)");
    println!("  clear                      delete all tasks (asks first)");
    println!("  prio low|medium|high       priority for the next add or save");
    println!("  filter all|active|completed");
    println!("  search <text>              filter by substring; empty to reset");
    println!("  list                       reprint the task list");
    println!("  json                       dump the visible tasks as JSON");
    println!("  quit");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_id_is_one_based() {
        let ids = vec!["a".to_string(), "b".to_string()];
        assert_eq!(resolveId(&ids, "1").as_deref(), Some("a"));
        assert_eq!(resolveId(&ids, "2").as_deref(), Some("b"));
        assert_eq!(resolveId(&ids, "0"), None);
        assert_eq!(resolveId(&ids, "3"), None);
        assert_eq!(resolveId(&ids, "x"), None);
        assert_eq!(resolveId(&[], "1"), None);
    }
}
