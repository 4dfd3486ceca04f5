use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use service::db::todo_service;
use tracing::{error, info};

use crate::{errors::JsonApiError, routes::ServerState};

/// Request bodies decode missing fields to their zero values, so an absent
/// `id` is 0 (rejected) and an absent `completed` is false. Callers rely on
/// the latter: the reference client PUTs `{id, content}` with no flag.
#[derive(Debug, Deserialize, Serialize)]
pub struct CreateTodoInput {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateTodoInput {
    #[serde(default)]
    pub id: i32,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

fn message(msg: &str) -> Json<MessageResponse> {
    Json(MessageResponse { message: msg.to_string() })
}

#[utoipa::path(
    get, path = "/todo", tag = "todo",
    responses(
        (status = 200, description = "List OK"),
        (status = 500, description = "List Failed")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<models::todo::Model>>, JsonApiError> {
    match todo_service::list_todos(&state.db).await {
        Ok(list) => { info!(count = list.len(), "list todos"); Ok(Json(list)) }
        Err(e) => {
            error!(err = %e, "list todos failed");
            Err(JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "List Failed", Some(e.to_string())))
        }
    }
}

#[utoipa::path(
    post, path = "/todo", tag = "todo",
    request_body = crate::openapi::CreateTodoInputDoc,
    responses(
        (status = 201, description = "Created"),
        (status = 400, description = "Validation Error"),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<CreateTodoInput>,
) -> Result<(StatusCode, Json<MessageResponse>), JsonApiError> {
    match todo_service::create_todo(&state.db, &input.content, input.completed).await {
        Ok(m) => {
            info!(id = m.id, completed = m.completed, "created todo");
            Ok((StatusCode::CREATED, message("Todo created successfully")))
        }
        Err(e) => match e {
            service::errors::ServiceError::Validation(_) | service::errors::ServiceError::Model(_) => {
                Err(JsonApiError::new(StatusCode::BAD_REQUEST, "Validation Error", Some(e.to_string())))
            }
            _ => {
                error!(err = %e, "create todo failed");
                Err(JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Create Failed", Some(e.to_string())))
            }
        },
    }
}

#[utoipa::path(
    put, path = "/todo", tag = "todo",
    request_body = crate::openapi::UpdateTodoInputDoc,
    responses(
        (status = 200, description = "Updated"),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Update Failed")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Json(input): Json<UpdateTodoInput>,
) -> Result<Json<MessageResponse>, JsonApiError> {
    match todo_service::update_todo(&state.db, input.id, &input.content, input.completed).await {
        Ok(m) => {
            info!(id = m.id, completed = m.completed, "updated todo");
            Ok(message("Todo updated successfully"))
        }
        Err(e) => match e {
            service::errors::ServiceError::Validation(_) | service::errors::ServiceError::Model(_) => {
                Err(JsonApiError::new(StatusCode::BAD_REQUEST, "Validation Error", Some(e.to_string())))
            }
            service::errors::ServiceError::NotFound(_) => {
                Err(JsonApiError::new(StatusCode::NOT_FOUND, "Not Found", Some(e.to_string())))
            }
            _ => {
                error!(err = %e, "update todo failed");
                Err(JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Update Failed", Some(e.to_string())))
            }
        },
    }
}

#[utoipa::path(
    delete, path = "/todo/{id}", tag = "todo",
    params(("id" = i32, Path, description = "Todo ID")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 400, description = "Invalid ID"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Delete Failed")
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, JsonApiError> {
    match todo_service::delete_todo(&state.db, id).await {
        Ok(true) => {
            info!(id, "deleted todo");
            Ok(message("Todo deleted successfully"))
        }
        Ok(false) => Err(JsonApiError::new(StatusCode::NOT_FOUND, "Not Found", Some(format!("todo {} not found", id)))),
        Err(e) => {
            error!(err = %e, "delete todo failed");
            Err(JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Delete Failed", Some(e.to_string())))
        }
    }
}
