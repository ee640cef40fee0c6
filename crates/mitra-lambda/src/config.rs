use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use axum::http::HeaderValue;
use mitra_guidelines::GuidelineTable;
use mitra_guidelines::error::GuidelineError;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Process configuration, read once at cold start.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Override guideline table (JSON). The built-in table is used when unset.
    pub guidelines_path: Option<PathBuf>,
    /// Single allowed CORS origin. Any origin when unset.
    pub allowed_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            guidelines_path: env::var_os("MITRA_GUIDELINES_PATH")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
            allowed_origin: env::var("MITRA_ALLOWED_ORIGIN").ok().filter(|v| !v.is_empty()),
        }
    }

    pub fn load_table(&self) -> Result<Arc<GuidelineTable>, GuidelineError> {
        match &self.guidelines_path {
            Some(path) => Ok(Arc::new(GuidelineTable::load(path)?)),
            None => {
                let table = GuidelineTable::builtin();
                table.validate()?;
                Ok(Arc::new(table.clone()))
            }
        }
    }

    pub fn cors(&self) -> eyre::Result<CorsLayer> {
        let origin = match &self.allowed_origin {
            Some(origin) => AllowOrigin::exact(HeaderValue::from_str(origin)?),
            None => AllowOrigin::from(Any),
        };
        Ok(CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(Any)
            .allow_headers(Any))
    }
}
