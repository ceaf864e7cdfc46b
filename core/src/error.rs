use thiserror::Error;

use crate::settings::Axis;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("{axis} axis has no `{parameter}` noise parameter after merging")]
    MissingParameter {
        axis: Axis,
        parameter: &'static str,
    },
    #[error("{axis} axis has an invalid `{parameter}` noise parameter")]
    InvalidParameter {
        axis: Axis,
        parameter: &'static str,
    },
    #[error("unknown preset `{0}`")]
    UnknownPreset(String),
    #[error("invalid settings file: {0}")]
    Json(#[from] serde_json::Error),
}
