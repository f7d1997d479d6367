use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::model::ids::QuestionId;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ImageError {
    #[error("image name cannot be empty")]
    EmptyName,
    #[error("image name {0:?} does not resolve against the asset root")]
    Unresolvable(String),
}

//
// ─── VISIBILITY ───────────────────────────────────────────────────────────────
//

/// Per-question visibility as reported by the latest poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionStatus {
    pub id: QuestionId,
    #[serde(default)]
    pub is_public: bool,
}

impl QuestionStatus {
    #[must_use]
    pub fn new(id: QuestionId, is_public: bool) -> Self {
        Self { id, is_public }
    }
}

/// Aggregate counts from the status endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub total: u32,
    pub visible: u32,
}

//
// ─── DETAIL ───────────────────────────────────────────────────────────────────
//

/// Supplementary image of a question, resolved under the static asset root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    name: String,
    url: Url,
}

impl ImageRef {
    /// Resolve `name` against `asset_root` (a directory URL ending in `/`).
    ///
    /// # Errors
    ///
    /// Returns `ImageError` for blank names, and for names that carry a
    /// query or fragment, start with `/`, or land outside `asset_root`.
    pub fn resolve(asset_root: &Url, name: &str) -> Result<Self, ImageError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ImageError::EmptyName);
        }
        let unresolvable = || ImageError::Unresolvable(name.to_string());
        if name.starts_with('/') || name.contains(['?', '#', '\\']) {
            return Err(unresolvable());
        }
        let url = asset_root.join(name).map_err(|_| unresolvable())?;
        if !url.as_str().starts_with(asset_root.as_str()) {
            return Err(unresolvable());
        }
        Ok(Self {
            name: name.to_string(),
            url,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }
}

/// A single question as served for answering. Never carries the answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDetail {
    pub id: QuestionId,
    pub text: String,
    pub options: Vec<String>,
    pub image: Option<ImageRef>,
}

//
// ─── VERDICT & PHASE ──────────────────────────────────────────────────────────
//

/// Server verdict for one submitted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
}

impl From<bool> for Verdict {
    fn from(correct: bool) -> Self {
        if correct { Self::Correct } else { Self::Incorrect }
    }
}

/// Where a question sits in the per-session answering lifecycle.
///
/// `Locked` and `Open` follow the server's visibility flag; `Correct` is
/// sticky and wins over visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionPhase {
    Locked,
    Open,
    Submitting,
    Cooldown,
    Correct,
}

impl QuestionPhase {
    #[must_use]
    pub fn derive(is_public: bool, answered: bool, submitting: bool, cooling_down: bool) -> Self {
        if answered {
            Self::Correct
        } else if !is_public {
            Self::Locked
        } else if submitting {
            Self::Submitting
        } else if cooling_down {
            Self::Cooldown
        } else {
            Self::Open
        }
    }
}
