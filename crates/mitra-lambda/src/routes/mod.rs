pub mod guidelines;
pub mod health;
pub mod reports;
pub mod risk;

use axum::http::Uri;

use crate::error::ApiError;

pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("no route for {}", uri.path()))
}
