use serde::Deserialize;

// Create task request. Only `task` is required; the handler applies the
// defaults (empty strings, status true) before hitting the store.
#[derive(Deserialize)]
pub struct CreateTaskRequest {
    pub task: Option<String>,
    pub description: Option<String>,
    pub priority: Option<String>,
    pub status: Option<bool>,
    pub task_date: Option<String>,
}

// Partial update request: absent fields are left untouched.
#[derive(Deserialize)]
pub struct UpdateTaskRequest {
    pub task: Option<String>,
    pub description: Option<String>,
    pub priority: Option<String>,
    pub status: Option<bool>,
    pub task_date: Option<String>,
}
