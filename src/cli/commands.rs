use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "jot", about = concat!("jot v", env!("CARGO_PKG_VERSION"), " - a to-do list that stays on your machine"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Use a different data directory (default: $JOT_DIR or ~/.jot)
    #[arg(short = 'C', long = "dir", global = true)]
    pub dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List tasks
    List(ListArgs),
    /// Add a task (added to the front of the list)
    Add(AddArgs),
    /// Toggle a task's completion flag
    Done(IdArg),
    /// Replace a task's text
    Edit(EditArgs),
    /// Set or clear a task's due date
    Due(DueArgs),
    /// Delete a task
    Rm(RmArgs),
    /// Remove all completed tasks
    ClearDone(YesArg),
    /// Remove every task and purge the stored snapshot
    ClearAll(YesArg),
    /// Dump raw storage contents (diagnostics)
    Dump,
}

#[derive(Args)]
pub struct ListArgs {
    /// Filter by status (all, active, done)
    #[arg(long, default_value = "all")]
    pub status: String,
    /// Filter by due-date bucket (all, today, overdue)
    #[arg(long, default_value = "all")]
    pub due: String,
    /// Case-insensitive text search (literal, not a regex)
    #[arg(long)]
    pub search: Option<String>,
}

#[derive(Args)]
pub struct AddArgs {
    /// Task text
    pub text: String,
    /// Due date: YYYY-MM-DD, "today", or "tomorrow"
    #[arg(long)]
    pub due: Option<String>,
}

#[derive(Args)]
pub struct IdArg {
    /// Task id (as shown by `jot list`)
    pub id: String,
}

#[derive(Args)]
pub struct EditArgs {
    pub id: String,
    pub text: String,
}

#[derive(Args)]
pub struct DueArgs {
    pub id: String,
    /// YYYY-MM-DD, "today", "tomorrow", or "clear"
    pub date: String,
}

#[derive(Args)]
pub struct RmArgs {
    pub id: String,
    /// Skip the confirmation prompt
    #[arg(short = 'y', long = "yes")]
    pub yes: bool,
}

#[derive(Args)]
pub struct YesArg {
    /// Skip the confirmation prompt
    #[arg(short = 'y', long = "yes")]
    pub yes: bool,
}
