use axum::{extract::State, response::Html};

use crate::errors::AppError;
use crate::render::{
    self,
    pages::{BusinessView, ResumeView},
};
use crate::state::AppState;

/// GET /business/
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let view = BusinessView {
        skills: state.catalog.business_skills(),
        experience: state.catalog.experience(),
    };
    Ok(render::page(&view, &[]))
}

/// GET /business/resume
pub async fn resume() -> Result<Html<String>, AppError> {
    Ok(render::page(&ResumeView, &[]))
}
