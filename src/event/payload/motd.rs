//! Message of the day.

use serde::{Deserialize, Serialize};

/// Message of the day shown on the home screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MotD {
    pub title: String,
    pub text: String,
    pub url: Option<String>,
    pub image_url: Option<String>,
}
