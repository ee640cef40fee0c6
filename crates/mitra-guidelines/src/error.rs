use thiserror::Error;

#[derive(Debug, Error)]
pub enum GuidelineError {
    #[error("failed to read guideline table at {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse guideline table: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("guideline format_version {found} is newer than this build supports ({supported})")]
    UnsupportedFormat { found: u32, supported: u32 },

    #[error("guideline table has no entries")]
    Empty,

    #[error("'{name}' (normalised '{normalized}') is claimed by both '{first}' and '{second}'")]
    DuplicateName {
        name: String,
        normalized: String,
        first: String,
        second: String,
    },

    #[error("invalid range in '{parameter}': {detail}")]
    InvalidRange { parameter: String, detail: String },

    #[error("bands of '{parameter}' leave values uncovered from {at}")]
    CoverageGap { parameter: String, at: f64 },
}
