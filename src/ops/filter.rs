use chrono::NaiveDate;

use crate::model::task::Task;
use crate::ops::search::compile_query;

/// Completion-status filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl StatusFilter {
    pub fn cycle(self) -> Self {
        match self {
            StatusFilter::All => StatusFilter::Active,
            StatusFilter::Active => StatusFilter::Completed,
            StatusFilter::Completed => StatusFilter::All,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Active => "active",
            StatusFilter::Completed => "done",
        }
    }

    fn matches(self, task: &Task) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => !task.done,
            StatusFilter::Completed => task.done,
        }
    }
}

/// Due-date bucket filter. Undated tasks never match Today or Overdue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateFilter {
    #[default]
    All,
    Today,
    Overdue,
}

impl DateFilter {
    pub fn cycle(self) -> Self {
        match self {
            DateFilter::All => DateFilter::Today,
            DateFilter::Today => DateFilter::Overdue,
            DateFilter::Overdue => DateFilter::All,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DateFilter::All => "any date",
            DateFilter::Today => "today",
            DateFilter::Overdue => "overdue",
        }
    }

    fn matches(self, task: &Task, today: NaiveDate) -> bool {
        match self {
            DateFilter::All => true,
            DateFilter::Today => task.due_date == Some(today),
            DateFilter::Overdue => task.due_date.is_some_and(|d| d < today),
        }
    }
}

/// Derive the ordered sequence of tasks to display.
///
/// Pure function of its inputs: the canonical list, the two filters, the
/// applied search query, and the current calendar date. Result order: tasks
/// with a due date first, ascending by date; then undated tasks in their
/// insertion order. Ties keep insertion order (the sort is stable).
pub fn visible_tasks<'a>(
    tasks: &'a [Task],
    status: StatusFilter,
    date: DateFilter,
    query: &str,
    today: NaiveDate,
) -> Vec<&'a Task> {
    let matcher = compile_query(query);

    let mut picked: Vec<&Task> = tasks
        .iter()
        .filter(|t| status.matches(t))
        .filter(|t| date.matches(t, today))
        .filter(|t| matcher.as_ref().is_none_or(|re| re.is_match(&t.text)))
        .collect();

    // Undated tasks sort after all dated ones
    picked.sort_by_key(|t| (t.due_date.is_none(), t.due_date));
    picked
}
