use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Task {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct TaskList {
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub count: Option<usize>,
}

/// Single-task responses come either bare or wrapped in `{"task": ...}`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum TaskEnvelope {
    Wrapped { task: Task },
    Bare(Task),
}

impl TaskEnvelope {
    pub fn into_task(self) -> Task {
        match self {
            Self::Wrapped { task } => task,
            Self::Bare(task) => task,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TaskInput {
    pub title: String,
    pub description: String,
    pub completed: bool,
}

/// Body of a submitted add/edit form. Unchecked checkboxes are omitted by browsers.
#[derive(Debug, Default, Deserialize)]
pub struct TaskForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed: Option<String>,
}

impl TaskForm {
    /// The values as typed, for re-rendering the edit form after a rejected save.
    pub fn draft(&self, id: u64) -> TaskDraft {
        TaskDraft {
            id,
            title: self.title.clone(),
            description: self.description.clone(),
            completed: self.completed.is_some(),
        }
    }

    /// Trims the fields and returns `None` when the title is blank.
    pub fn into_input(self) -> Option<TaskInput> {
        let title = self.title.trim();
        if title.is_empty() {
            return None;
        }

        Some(TaskInput {
            title: title.to_string(),
            description: self.description.trim().to_string(),
            completed: self.completed.is_some(),
        })
    }
}

/// Contents of the edit form: either a fetched task or a resubmitted form.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDraft {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub completed: bool,
}

impl From<&Task> for TaskDraft {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id,
            title: task.title.clone(),
            description: task.description.clone().unwrap_or_default(),
            completed: task.completed,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct HealthReport {
    pub status: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    #[default]
    Unknown,
    Healthy,
    Unhealthy,
    Error,
}

impl HealthStatus {
    pub fn from_report(report: &HealthReport) -> Self {
        if report.status == "healthy" {
            Self::Healthy
        } else {
            Self::Unhealthy
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Unknown => "Checking...",
            Self::Healthy => "Healthy",
            Self::Unhealthy => "Unhealthy",
            Self::Error => "Error",
        }
    }

    /// CSS class for the indicator dot.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Unknown => "",
            Self::Healthy => "healthy",
            Self::Unhealthy | Self::Error => "unhealthy",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: HealthStatus,
    pub label: String,
}

#[derive(Debug, Serialize)]
pub struct LivenessResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub upstream: HealthStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Danger,
    Warning,
    Info,
}

impl ToastKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Danger => "danger",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    TitleRequired,
    TaskCreated,
    TaskUpdated,
    TaskDeleted,
    CreateFailed,
    UpdateFailed,
    DeleteFailed,
    LoadTaskFailed,
}

impl Notice {
    pub fn code(self) -> &'static str {
        match self {
            Self::TitleRequired => "title_required",
            Self::TaskCreated => "task_created",
            Self::TaskUpdated => "task_updated",
            Self::TaskDeleted => "task_deleted",
            Self::CreateFailed => "create_failed",
            Self::UpdateFailed => "update_failed",
            Self::DeleteFailed => "delete_failed",
            Self::LoadTaskFailed => "load_task_failed",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        let notice = match code {
            "title_required" => Self::TitleRequired,
            "task_created" => Self::TaskCreated,
            "task_updated" => Self::TaskUpdated,
            "task_deleted" => Self::TaskDeleted,
            "create_failed" => Self::CreateFailed,
            "update_failed" => Self::UpdateFailed,
            "delete_failed" => Self::DeleteFailed,
            "load_task_failed" => Self::LoadTaskFailed,
            _ => return None,
        };
        Some(notice)
    }

    pub fn kind(self) -> ToastKind {
        match self {
            Self::TitleRequired => ToastKind::Warning,
            Self::TaskCreated | Self::TaskUpdated | Self::TaskDeleted => ToastKind::Success,
            Self::CreateFailed | Self::UpdateFailed | Self::DeleteFailed | Self::LoadTaskFailed => {
                ToastKind::Danger
            }
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::TitleRequired => "Please enter a task title",
            Self::TaskCreated => "Task created successfully!",
            Self::TaskUpdated => "Task updated successfully!",
            Self::TaskDeleted => "Task deleted successfully!",
            Self::CreateFailed => "Failed to create task. Please try again.",
            Self::UpdateFailed => "Failed to update task. Please try again.",
            Self::DeleteFailed => "Failed to delete task. Please try again.",
            Self::LoadTaskFailed => "Failed to load task details",
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct NoticeQuery {
    #[serde(default)]
    pub notice: Option<String>,
}

impl NoticeQuery {
    pub fn notice(&self) -> Option<Notice> {
        self.notice.as_deref().and_then(Notice::from_code)
    }
}
