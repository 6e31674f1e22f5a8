use crate::health::refresh_health;
use crate::models::{
    LivenessResponse, Notice, NoticeQuery, StatusResponse, TaskDraft, TaskForm, TaskList,
    TaskStats,
};
use crate::state::AppState;
use crate::stats::build_stats;
use crate::ui::{IndexPage, render_index};
use axum::{
    Form, Json,
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use chrono::Utc;
use tracing::{info, warn};

pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<NoticeQuery>,
) -> Html<String> {
    Html(render_page(&state, None, query.notice()).await)
}

pub async fn edit_task(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Query(query): Query<NoticeQuery>,
) -> Response {
    match state.api.get_task(id).await {
        Ok(task) => {
            let draft = TaskDraft::from(&task);
            Html(render_page(&state, Some(&draft), query.notice()).await).into_response()
        }
        Err(err) => {
            warn!(task_id = id, status = ?err.status(), "error loading task: {err}");
            redirect_home(Notice::LoadTaskFailed).into_response()
        }
    }
}

pub async fn create_task(State(state): State<AppState>, Form(form): Form<TaskForm>) -> Redirect {
    let Some(input) = form.into_input() else {
        return redirect_home(Notice::TitleRequired);
    };

    match state.api.create_task(&input).await {
        Ok(()) => {
            info!(title = %input.title, "created task");
            redirect_home(Notice::TaskCreated)
        }
        Err(err) => {
            warn!(status = ?err.status(), "error creating task: {err}");
            redirect_home(Notice::CreateFailed)
        }
    }
}

/// Rejected saves re-render the edit form with the submitted values.
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Form(form): Form<TaskForm>,
) -> Response {
    let draft = form.draft(id);
    let Some(input) = form.into_input() else {
        return Html(render_page(&state, Some(&draft), Some(Notice::TitleRequired)).await)
            .into_response();
    };

    match state.api.update_task(id, &input).await {
        Ok(()) => {
            info!(task_id = id, "updated task");
            redirect_home(Notice::TaskUpdated).into_response()
        }
        Err(err) => {
            warn!(task_id = id, status = ?err.status(), "error updating task: {err}");
            Html(render_page(&state, Some(&draft), Some(Notice::UpdateFailed)).await)
                .into_response()
        }
    }
}

pub async fn delete_task(State(state): State<AppState>, Path(id): Path<u64>) -> Redirect {
    match state.api.delete_task(id).await {
        Ok(()) => {
            info!(task_id = id, "deleted task");
            redirect_home(Notice::TaskDeleted)
        }
        Err(err) => {
            warn!(task_id = id, status = ?err.status(), "error deleting task: {err}");
            redirect_home(Notice::DeleteFailed)
        }
    }
}

pub async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    let status = state.health().await;
    Json(StatusResponse {
        status,
        label: status.label().to_string(),
    })
}

pub async fn liveness(State(state): State<AppState>) -> Json<LivenessResponse> {
    Json(LivenessResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        upstream: state.health().await,
    })
}

async fn render_page(
    state: &AppState,
    editing: Option<&TaskDraft>,
    notice: Option<Notice>,
) -> String {
    let (health, listing) = tokio::join!(refresh_health(state), state.api.list_tasks());

    let listing: Result<TaskList, ()> = listing.map_err(|err| {
        warn!(status = ?err.status(), "error loading tasks: {err}");
    });
    let stats = match &listing {
        Ok(list) => build_stats(&list.tasks),
        Err(()) => TaskStats::default(),
    };

    render_index(&IndexPage {
        health,
        stats,
        tasks: listing.as_ref().map(|list| list.tasks.as_slice()).map_err(|_| ()),
        editing,
        notice,
        health_interval: state.health_interval,
        now: Utc::now(),
    })
}

fn redirect_home(notice: Notice) -> Redirect {
    Redirect::to(&format!("/?notice={}", notice.code()))
}
