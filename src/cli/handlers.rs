use std::io::{BufRead, Write};
use std::path::Path;
use std::sync::Arc;

use chrono::{Days, Local, NaiveDate};

use crate::cli::commands::*;
use crate::cli::output::{DumpEntryJson, DumpJson, ListJson};
use crate::model::Task;
use crate::ops::filter::{self, DateFilter, StatusFilter};
use crate::ops::plural;
use crate::store::{self, FileStorage, KeyValue, TaskStore};

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(
    command: Commands,
    data_dir: &Path,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let storage = Arc::new(FileStorage::open(data_dir)?);

    match command {
        Commands::List(args) => cmd_list(args, data_dir, storage, json),
        Commands::Add(args) => cmd_add(args, storage),
        Commands::Done(args) => cmd_done(args, storage),
        Commands::Edit(args) => cmd_edit(args, storage),
        Commands::Due(args) => cmd_due(args, storage),
        Commands::Rm(args) => cmd_rm(args, storage),
        Commands::ClearDone(args) => cmd_clear_done(args, storage),
        Commands::ClearAll(args) => cmd_clear_all(args, storage),
        Commands::Dump => cmd_dump(storage, json),
    }
}

fn parse_status(s: &str) -> Result<StatusFilter, String> {
    match s {
        "all" => Ok(StatusFilter::All),
        "active" => Ok(StatusFilter::Active),
        "done" | "completed" => Ok(StatusFilter::Completed),
        other => Err(format!("unknown status filter: {}", other)),
    }
}

fn parse_due_filter(s: &str) -> Result<DateFilter, String> {
    match s {
        "all" => Ok(DateFilter::All),
        "today" => Ok(DateFilter::Today),
        "overdue" => Ok(DateFilter::Overdue),
        other => Err(format!("unknown due filter: {}", other)),
    }
}

/// "today" / "tomorrow" shortcuts, otherwise YYYY-MM-DD
fn parse_date(s: &str) -> Result<NaiveDate, String> {
    let today = Local::now().date_naive();
    match s {
        "today" => Ok(today),
        "tomorrow" => today
            .checked_add_days(Days::new(1))
            .ok_or_else(|| "date out of range".to_string()),
        other => other
            .parse()
            .map_err(|_| format!("invalid date (expected YYYY-MM-DD): {}", other)),
    }
}

/// The CLI form of the confirmation gate: `--yes` or an interactive y/N.
fn confirmed(yes: bool, prompt: &str) -> std::io::Result<bool> {
    if yes {
        return Ok(true);
    }
    eprint!("{} [y/N] ", prompt);
    std::io::stderr().flush()?;
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(matches!(line.trim(), "y" | "Y"))
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_list(
    args: ListArgs,
    data_dir: &Path,
    storage: Arc<FileStorage>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let status = parse_status(&args.status)?;
    let due = parse_due_filter(&args.due)?;
    let query = args.search.as_deref().unwrap_or("");

    let store = TaskStore::open(storage);
    let today = Local::now().date_naive();
    let visible: Vec<Task> = filter::visible_tasks(store.tasks(), status, due, query, today)
        .into_iter()
        .cloned()
        .collect();

    if json {
        let payload = ListJson {
            items_left: store.pending(),
            tasks: visible,
        };
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    for task in &visible {
        let checkbox = if task.done { "[x]" } else { "[ ]" };
        let due = match task.due_date {
            Some(d) => d.format("%Y-%m-%d").to_string(),
            None => "          ".to_string(),
        };
        println!("{} {} {}  ({})", checkbox, due, task.text, task.id);
    }

    let config = store::load_config(data_dir);
    println!("{}", plural::items_left_label(&config.locale, store.pending()));
    Ok(())
}

fn cmd_dump(storage: Arc<FileStorage>, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let keys = storage.keys()?;
    let entries = storage.multi_get(&keys)?;

    if json {
        let payload = DumpJson {
            entries: entries
                .into_iter()
                .map(|(key, value)| DumpEntryJson { key, value })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("storage is empty");
    }
    for (key, value) in entries {
        println!("{} = {}", key, value.as_deref().unwrap_or("<missing>"));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Write commands
// ---------------------------------------------------------------------------

fn cmd_add(args: AddArgs, storage: Arc<FileStorage>) -> Result<(), Box<dyn std::error::Error>> {
    let due = args.due.as_deref().map(parse_date).transpose()?;

    let mut store = TaskStore::open(storage);
    match store.add(&args.text) {
        Some(id) => {
            if let Some(date) = due {
                store.set_due_date(&id, Some(date));
            }
            println!("added {}", id);
        }
        None => eprintln!("nothing to add (empty text)"),
    }
    Ok(())
}

fn cmd_done(args: IdArg, storage: Arc<FileStorage>) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = TaskStore::open(storage);
    if store.toggle_done(&args.id) {
        let task = store.tasks().iter().find(|t| t.id == args.id);
        let state = task.map(|t| t.done).unwrap_or(false);
        println!("{} {}", args.id, if state { "done" } else { "reopened" });
    } else {
        eprintln!("no such task: {}", args.id);
    }
    Ok(())
}

fn cmd_edit(args: EditArgs, storage: Arc<FileStorage>) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = TaskStore::open(storage);
    if store.update_text(&args.id, &args.text) {
        println!("updated {}", args.id);
    } else {
        eprintln!("nothing to update");
    }
    Ok(())
}

fn cmd_due(args: DueArgs, storage: Arc<FileStorage>) -> Result<(), Box<dyn std::error::Error>> {
    let due = if args.date == "clear" {
        None
    } else {
        Some(parse_date(&args.date)?)
    };

    let mut store = TaskStore::open(storage);
    if store.set_due_date(&args.id, due) {
        match due {
            Some(date) => println!("{} due {}", args.id, date.format("%Y-%m-%d")),
            None => println!("{} due date cleared", args.id),
        }
    } else {
        eprintln!("no such task: {}", args.id);
    }
    Ok(())
}

fn cmd_rm(args: RmArgs, storage: Arc<FileStorage>) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = TaskStore::open(storage);
    let text = match store.tasks().iter().find(|t| t.id == args.id) {
        Some(task) => task.text.clone(),
        None => {
            eprintln!("no such task: {}", args.id);
            return Ok(());
        }
    };

    if !confirmed(args.yes, &format!("delete \"{}\"?", text))? {
        return Ok(());
    }
    store.delete(&args.id);
    println!("deleted {}", args.id);
    Ok(())
}

fn cmd_clear_done(
    args: YesArg,
    storage: Arc<FileStorage>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = TaskStore::open(storage);
    let completed = store.completed();
    if completed == 0 {
        println!("no completed tasks");
        return Ok(());
    }

    if !confirmed(args.yes, &format!("remove {} completed task(s)?", completed))? {
        return Ok(());
    }
    let removed = store.clear_completed();
    println!("removed {} task(s)", removed);
    Ok(())
}

fn cmd_clear_all(
    args: YesArg,
    storage: Arc<FileStorage>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = TaskStore::open(storage);
    if store.is_empty() {
        println!("nothing to clear");
        return Ok(());
    }

    if !confirmed(args.yes, "delete ALL tasks and purge storage?")? {
        return Ok(());
    }
    store.clear_all();
    println!("storage cleared");
    Ok(())
}
