pub mod business;
pub mod contact;
pub mod developer;
pub mod home;
pub mod projects;

use axum::{routing::get, Router};

use crate::errors::AppError;
use crate::state::AppState;

/// Unmatched paths get the fixed not-found body.
async fn not_found() -> AppError {
    AppError::NotFound
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home::index))
        .route("/about", get(home::about))
        .route("/business/", get(business::index))
        .route("/business/resume", get(business::resume))
        .route("/developer/", get(developer::index))
        .route("/developer/github", get(developer::github))
        .route("/projects/", get(projects::index))
        .route("/projects/:project_id", get(projects::detail))
        .route("/contact/", get(contact::form).post(contact::submit))
        .fallback(not_found)
        .with_state(state)
}
