use axum::response::Html;

use crate::errors::AppError;
use crate::render::{self, pages::LandingView};

/// GET /
pub async fn index() -> Result<Html<String>, AppError> {
    Ok(render::page(&LandingView, &[]))
}

/// GET /about
/// Placeholder until the about page ships.
pub async fn about() -> &'static str {
    "About page coming soon!"
}
