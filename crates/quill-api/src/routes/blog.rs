//! Routes for the blog bounded context.
//!
//! Every route is behind [`require_auth`]. Request bodies are read as raw
//! bytes and parsed here, so a missing `content-type` header is not an error
//! and malformed JSON goes through the same 411 path as a schema mismatch.

use axum::body::Bytes;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, middleware, routing::get};
use quill_core::blog::BlogFilter;
use quill_core::error::DomainError;
use serde::Serialize;
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

use quill_blog::application::command_handlers;
use quill_blog::application::query_handlers::{self, BlogView};
use quill_blog::domain::commands::{CreateBlog, UpdateBlog};
use quill_blog::domain::inputs::{CreateBlogInput, UpdateBlogInput, parse_input};

use crate::auth::{AuthenticatedUser, require_auth};
use crate::error::{ApiError, ErrorBody};
use crate::state::AppState;

/// Response body for POST /.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    /// Store-generated id of the new blog.
    pub id: String,
}

/// Plain message body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// The message.
    pub msg: &'static str,
}

fn json_body(body: &Bytes) -> Result<serde_json::Value, DomainError> {
    serde_json::from_slice(body)
        .map_err(|e| DomainError::Validation(format!("request body is not valid JSON: {e}")))
}

/// Picks the list filter: the `id` query parameter wins, then a JSON body,
/// then no filter at all.
fn resolve_filter(query: BlogFilter, body: &Bytes) -> Result<BlogFilter, DomainError> {
    if query.id.is_some() {
        return Ok(query);
    }
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(BlogFilter::default());
    }
    serde_json::from_slice(body)
        .map_err(|e| DomainError::Validation(format!("invalid list filter: {e}")))
}

fn list_failure() -> Response {
    (
        StatusCode::FORBIDDEN,
        Json(ErrorBody {
            error: "Invalid",
            message: None,
        }),
    )
        .into_response()
}

// Status stays 200 for store failures on /bulk.
fn bulk_failure() -> Response {
    (StatusCode::OK, Json(MessageResponse { msg: "Invalid" })).into_response()
}

/// POST /
#[instrument(skip(state, user, body), fields(user_id = %user.user_id))]
async fn create_blog(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    body: Bytes,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let input: CreateBlogInput = parse_input(json_body(&body)?).inspect_err(|err| {
        warn!(error = %err, "create body rejected");
    })?;
    let command = CreateBlog::new(Uuid::new_v4(), user.user_id, input);

    info!(correlation_id = %command.correlation_id, "handling create_blog command");

    let blog = command_handlers::handle_create_blog(&command, &*state.blog_repository).await?;

    Ok((StatusCode::CREATED, Json(CreatedResponse { id: blog.id })))
}

/// GET /{id}
///
/// A missing blog is a 200 with a `null` body.
#[instrument(skip(state, _user))]
async fn get_blog(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Path(id): Path<String>,
) -> Result<Json<Option<BlogView>>, ApiError> {
    let view = query_handlers::get_blog_by_id(&id, &*state.blog_repository).await?;
    Ok(Json(view))
}

/// PUT /
#[instrument(skip(state, user, body), fields(user_id = %user.user_id))]
async fn update_blog(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    body: Bytes,
) -> Result<Json<MessageResponse>, ApiError> {
    let input: UpdateBlogInput = parse_input(json_body(&body)?).inspect_err(|err| {
        warn!(error = %err, "update body rejected");
    })?;
    let command = UpdateBlog::new(Uuid::new_v4(), input);

    info!(
        correlation_id = %command.correlation_id,
        blog_id = %command.id,
        "handling update_blog command"
    );

    command_handlers::handle_update_blog(&command, &*state.blog_repository).await?;

    Ok(Json(MessageResponse { msg: "blog edited" }))
}

/// GET /
///
/// Filtered list. Accepts `?id=` or a JSON body `{ "id": ... }`.
#[instrument(skip(state, _user, body))]
async fn list_blogs(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    query: Result<Query<BlogFilter>, QueryRejection>,
    body: Bytes,
) -> Response {
    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => {
            warn!(error = %rejection, "list query rejected");
            return list_failure();
        }
    };
    let filter = match resolve_filter(query, &body) {
        Ok(filter) => filter,
        Err(err) => {
            warn!(error = %err, "list filter rejected");
            return list_failure();
        }
    };

    match query_handlers::list_blogs(&filter, &*state.blog_repository).await {
        Ok(views) => Json(views).into_response(),
        Err(err) => {
            error!(error = %err, "listing blogs failed");
            list_failure()
        }
    }
}

/// GET /bulk
#[instrument(skip(state, _user))]
async fn list_all_blogs(State(state): State<AppState>, _user: AuthenticatedUser) -> Response {
    match query_handlers::list_all_blogs(&*state.blog_repository).await {
        Ok(views) => Json(views).into_response(),
        Err(err) => {
            error!(error = %err, "bulk listing blogs failed");
            bulk_failure()
        }
    }
}

/// Returns the router for the blog context, with the authorization gate
/// applied to every route.
pub fn router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(list_blogs).post(create_blog).put(update_blog))
        .route("/bulk", get(list_all_blogs))
        .route("/{id}", get(get_blog))
        .route_layer(middleware::from_fn_with_state(state, require_auth))
}
