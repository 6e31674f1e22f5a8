use crate::format::{escape_html, format_created};
use crate::models::{HealthStatus, Notice, Task, TaskDraft, TaskStats, ToastKind};
use chrono::{DateTime, Utc};
use std::time::Duration;

/// Everything the index template needs for one render.
pub struct IndexPage<'a> {
    pub health: HealthStatus,
    pub stats: TaskStats,
    pub tasks: Result<&'a [Task], ()>,
    pub editing: Option<&'a TaskDraft>,
    pub notice: Option<Notice>,
    pub health_interval: Duration,
    pub now: DateTime<Utc>,
}

pub fn render_index(page: &IndexPage<'_>) -> String {
    let tasks = render_task_list(page.tasks, page.now);
    let edit_modal = page.editing.map(render_edit_modal).unwrap_or_default();
    let toasts = page.notice.map(render_toast).unwrap_or_default();
    let interval_ms = page.health_interval.as_millis().to_string();

    fill_template(
        INDEX_HTML,
        &[
            ("HEALTH_CLASS", page.health.css_class()),
            ("HEALTH_TEXT", page.health.label()),
            ("TOTAL", &page.stats.total.to_string()),
            ("COMPLETED", &page.stats.completed.to_string()),
            ("PENDING", &page.stats.pending.to_string()),
            ("TASKS", &tasks),
            ("EDIT_MODAL", &edit_modal),
            ("TOASTS", &toasts),
            ("HEALTH_INTERVAL_MS", &interval_ms),
        ],
    )
}

/// Substitutes `{{KEY}}` markers in one pass; inserted values are never rescanned.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len() * 2);
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };

        let key = &after[..end];
        match values.iter().find(|(name, _)| *name == key) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after[end + 2..];
    }

    out.push_str(rest);
    out
}

pub fn render_task_list(tasks: Result<&[Task], ()>, now: DateTime<Utc>) -> String {
    match tasks {
        Err(()) => LOAD_FAILED_HTML.to_string(),
        Ok([]) => EMPTY_STATE_HTML.to_string(),
        Ok(tasks) => tasks.iter().map(|task| render_task(task, now)).collect(),
    }
}

pub fn render_task(task: &Task, now: DateTime<Utc>) -> String {
    let completed_class = if task.completed { " completed" } else { "" };
    let icon = if task.completed {
        "check-circle-fill text-success"
    } else {
        "circle"
    };
    let badge = if task.completed {
        r#"<span class="badge bg-success">Completed</span>"#
    } else {
        r#"<span class="badge bg-warning text-dark">Pending</span>"#
    };
    let description = match task.description.as_deref() {
        Some(text) if !text.is_empty() => {
            format!(r#"<p class="task-description mb-2">{}</p>"#, escape_html(text))
        }
        _ => String::new(),
    };

    format!(
        r#"
        <div class="task-item{completed_class}">
          <div class="row align-items-center">
            <div class="col-md-8">
              <h6 class="task-title">
                <i class="bi bi-{icon} me-2"></i>
                {title}
              </h6>
              {description}
              <div class="task-meta">
                <small><i class="bi bi-calendar me-1"></i>Created: {created}</small>
              </div>
            </div>
            <div class="col-md-4 text-md-end mt-3 mt-md-0">
              <div class="task-actions">
                {badge}
                <a class="btn btn-outline-primary btn-sm" href="/tasks/{id}/edit">
                  <i class="bi bi-pencil"></i> Edit
                </a>
                <form class="d-inline" method="post" action="/tasks/{id}/delete"
                      onsubmit="return confirm('Are you sure you want to delete this task?');">
                  <button type="submit" class="btn btn-outline-danger btn-sm">
                    <i class="bi bi-trash"></i> Delete
                  </button>
                </form>
              </div>
            </div>
          </div>
        </div>
"#,
        title = escape_html(&task.title),
        created = escape_html(&format_created(task.created_at.as_deref(), now)),
        id = task.id,
    )
}

pub fn render_edit_modal(draft: &TaskDraft) -> String {
    let checked = if draft.completed { " checked" } else { "" };

    format!(
        r#"
  <div class="modal fade" id="editTaskModal" tabindex="-1" aria-labelledby="editTaskLabel" aria-hidden="true" data-open-on-load="true">
    <div class="modal-dialog">
      <form class="modal-content" id="edit-task-form" method="post" action="/tasks/{id}">
        <div class="modal-header">
          <h5 class="modal-title" id="editTaskLabel">Edit Task</h5>
          <a class="btn-close" href="/" aria-label="Close"></a>
        </div>
        <div class="modal-body">
          <input type="hidden" id="edit-task-id" name="id" value="{id}" />
          <div class="mb-3">
            <label for="edit-task-title" class="form-label">Title</label>
            <input type="text" class="form-control" id="edit-task-title" name="title" value="{title}" required />
          </div>
          <div class="mb-3">
            <label for="edit-task-description" class="form-label">Description</label>
            <textarea class="form-control" id="edit-task-description" name="description" rows="3">{description}</textarea>
          </div>
          <div class="form-check">
            <input class="form-check-input" type="checkbox" id="edit-task-completed" name="completed"{checked} />
            <label class="form-check-label" for="edit-task-completed">Completed</label>
          </div>
        </div>
        <div class="modal-footer">
          <a class="btn btn-secondary" href="/">Cancel</a>
          <button type="submit" class="btn btn-primary">Save Changes</button>
        </div>
      </form>
    </div>
  </div>
"#,
        id = draft.id,
        title = escape_html(&draft.title),
        description = escape_html(&draft.description),
    )
}

pub fn render_toast(notice: Notice) -> String {
    let kind = notice.kind();
    let (text_class, close_variant) = if kind == ToastKind::Warning {
        ("text-dark", "dark")
    } else {
        ("text-white", "white")
    };

    format!(
        r#"
    <div class="toast bg-{kind} {text_class}" role="alert" aria-live="assertive" aria-atomic="true" data-bs-delay="3000">
      <div class="toast-body d-flex align-items-center">
        <i class="bi bi-{icon} me-2"></i>
        <span>{message}</span>
        <button type="button" class="btn-close btn-close-{close_variant} ms-auto" data-bs-dismiss="toast"></button>
      </div>
    </div>
"#,
        kind = kind.as_str(),
        icon = toast_icon(kind),
        message = escape_html(notice.message()),
    )
}

pub fn toast_icon(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "check-circle-fill",
        ToastKind::Danger => "exclamation-circle-fill",
        ToastKind::Warning => "exclamation-triangle-fill",
        ToastKind::Info => "info-circle-fill",
    }
}

const EMPTY_STATE_HTML: &str = r#"
        <div class="empty-state">
          <i class="bi bi-inbox"></i>
          <h5>No tasks yet</h5>
          <p>Click "Add New Task" to create your first task</p>
        </div>
"#;

const LOAD_FAILED_HTML: &str = r#"
        <div class="alert alert-danger m-3" role="alert">
          <i class="bi bi-exclamation-triangle me-2"></i>
          Failed to load tasks. Please try again later.
        </div>
"#;

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Task Manager</title>
  <link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css" />
  <link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bootstrap-icons@1.11.3/font/bootstrap-icons.min.css" />
  <style>
    body {
      background: #f4f6fb;
    }

    .health-indicator {
      display: inline-block;
      width: 10px;
      height: 10px;
      border-radius: 50%;
      background: #adb5bd;
      margin-right: 6px;
    }

    .health-indicator.healthy {
      background: #198754;
    }

    .health-indicator.unhealthy {
      background: #dc3545;
    }

    .stat-card .value {
      font-size: 1.8rem;
      font-weight: 600;
    }

    .task-item {
      padding: 16px 20px;
      border-bottom: 1px solid rgba(0, 0, 0, 0.06);
    }

    .task-item.completed .task-title {
      text-decoration: line-through;
      color: #6c757d;
    }

    .task-actions {
      display: inline-flex;
      align-items: center;
      gap: 8px;
    }

    .task-meta {
      color: #6c757d;
    }

    .empty-state {
      text-align: center;
      padding: 48px 16px;
      color: #6c757d;
    }

    .empty-state i {
      font-size: 2.5rem;
    }

    .toast-container {
      position: fixed;
      top: 16px;
      right: 16px;
      z-index: 1080;
    }
  </style>
</head>
<body>
  <nav class="navbar navbar-dark bg-dark mb-4">
    <div class="container">
      <span class="navbar-brand"><i class="bi bi-check2-square me-2"></i>Task Manager</span>
      <span class="text-light small">
        <span id="health-indicator" class="health-indicator {{HEALTH_CLASS}}"></span>
        API: <span id="health-text">{{HEALTH_TEXT}}</span>
      </span>
    </div>
  </nav>

  <main class="container">
    <div class="row g-3 mb-4">
      <div class="col-md-4">
        <div class="card stat-card"><div class="card-body">
          <div class="text-muted">Total Tasks</div>
          <div class="value" id="total-tasks">{{TOTAL}}</div>
        </div></div>
      </div>
      <div class="col-md-4">
        <div class="card stat-card"><div class="card-body">
          <div class="text-muted">Completed</div>
          <div class="value text-success" id="completed-tasks">{{COMPLETED}}</div>
        </div></div>
      </div>
      <div class="col-md-4">
        <div class="card stat-card"><div class="card-body">
          <div class="text-muted">Pending</div>
          <div class="value text-warning" id="pending-tasks">{{PENDING}}</div>
        </div></div>
      </div>
    </div>

    <div class="card">
      <div class="card-header d-flex justify-content-between align-items-center">
        <h5 class="mb-0">Tasks</h5>
        <button class="btn btn-primary btn-sm" data-bs-toggle="modal" data-bs-target="#addTaskModal">
          <i class="bi bi-plus-lg"></i> Add New Task
        </button>
      </div>
      <div id="tasks-container">{{TASKS}}</div>
    </div>
  </main>

  <div class="modal fade" id="addTaskModal" tabindex="-1" aria-labelledby="addTaskLabel" aria-hidden="true">
    <div class="modal-dialog">
      <form class="modal-content" id="add-task-form" method="post" action="/tasks">
        <div class="modal-header">
          <h5 class="modal-title" id="addTaskLabel">Add New Task</h5>
          <button type="button" class="btn-close" data-bs-dismiss="modal" aria-label="Close"></button>
        </div>
        <div class="modal-body">
          <div class="mb-3">
            <label for="task-title" class="form-label">Title</label>
            <input type="text" class="form-control" id="task-title" name="title" />
          </div>
          <div class="mb-3">
            <label for="task-description" class="form-label">Description</label>
            <textarea class="form-control" id="task-description" name="description" rows="3"></textarea>
          </div>
          <div class="form-check">
            <input class="form-check-input" type="checkbox" id="task-completed" name="completed" />
            <label class="form-check-label" for="task-completed">Completed</label>
          </div>
        </div>
        <div class="modal-footer">
          <button type="button" class="btn btn-secondary" data-bs-dismiss="modal">Cancel</button>
          <button type="submit" class="btn btn-primary">Add Task</button>
        </div>
      </form>
    </div>
  </div>
{{EDIT_MODAL}}
  <div id="toast-container" class="toast-container">{{TOASTS}}</div>

  <script src="https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/js/bootstrap.bundle.min.js"></script>
  <script>
    document.querySelectorAll('.toast').forEach((el) => {
      el.addEventListener('hidden.bs.toast', () => el.remove());
      new bootstrap.Toast(el).show();
    });

    const editModal = document.querySelector('[data-open-on-load]');
    if (editModal) {
      new bootstrap.Modal(editModal).show();
    }

    const indicator = document.getElementById('health-indicator');
    const healthText = document.getElementById('health-text');

    const pollHealth = async () => {
      try {
        const res = await fetch('/status');
        const data = await res.json();
        indicator.classList.toggle('healthy', data.status === 'healthy');
        indicator.classList.toggle('unhealthy', data.status !== 'healthy');
        healthText.textContent = data.label;
      } catch (err) {
        indicator.classList.add('unhealthy');
        indicator.classList.remove('healthy');
        healthText.textContent = 'Error';
      }
    };

    setInterval(pollHealth, {{HEALTH_INTERVAL_MS}});
  </script>
</body>
</html>
"##;
