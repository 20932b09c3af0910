use axum::{extract::State, response::Html};

use crate::errors::AppError;
use crate::render::{
    self,
    pages::{DeveloperView, GithubView},
};
use crate::state::AppState;

/// GET /developer/
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let view = DeveloperView {
        skills: state.catalog.developer_skills(),
        technologies: state.catalog.technologies(),
    };
    Ok(render::page(&view, &[]))
}

/// GET /developer/github
pub async fn github() -> Result<Html<String>, AppError> {
    Ok(render::page(&GithubView, &[]))
}
