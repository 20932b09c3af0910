use axum::{
    extract::{Path, Query, State},
    response::Html,
};
use serde::Deserialize;

use crate::content::catalog::ALL_CATEGORIES;
use crate::errors::AppError;
use crate::render::{
    self,
    pages::{ProjectDetailView, ProjectListView},
};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ListingQuery {
    pub category: Option<String>,
}

/// GET /projects/?category=<c>
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> Result<Html<String>, AppError> {
    let category = query
        .category
        .unwrap_or_else(|| ALL_CATEGORIES.to_string());
    let view = ProjectListView {
        projects: state.catalog.filter_projects(&category),
        active_category: &category,
    };
    Ok(render::page(&view, &[]))
}

/// GET /projects/:project_id
///
/// Unknown ids fall back to the full listing at 200 rather than a 404.
/// Long-standing behavior the public site relies on; do not turn this into
/// an error response.
pub async fn detail(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> Result<Html<String>, AppError> {
    match state.catalog.project_detail(&project_id) {
        Some(project) => Ok(render::page(&ProjectDetailView { project }, &[])),
        None => {
            let view = ProjectListView {
                projects: state.catalog.filter_projects(ALL_CATEGORIES),
                active_category: ALL_CATEGORIES,
            };
            Ok(render::page(&view, &[]))
        }
    }
}
