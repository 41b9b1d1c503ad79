use serde::Serialize;

use crate::model::Task;

/// JSON payload for `jot list --json`
#[derive(Serialize)]
pub struct ListJson {
    pub items_left: usize,
    pub tasks: Vec<Task>,
}

/// JSON payload for `jot dump --json`
#[derive(Serialize)]
pub struct DumpJson {
    pub entries: Vec<DumpEntryJson>,
}

#[derive(Serialize)]
pub struct DumpEntryJson {
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}
