//! Scene — a named, toggleable activation preset.
//!
//! A scene pairs a human-readable name with the [`ActivationRequest`] it
//! stands for. Scenes come from configuration; disabled scenes are kept but
//! skipped at run time.

use serde::{Deserialize, Serialize};

use crate::activation::ActivationRequest;
use crate::error::{ValidationError, ZonehubError};

/// A named activation preset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub name: String,
    pub enabled: bool,
    pub request: ActivationRequest,
}

impl Scene {
    /// Create a builder for constructing a [`Scene`].
    #[must_use]
    pub fn builder() -> SceneBuilder {
        SceneBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ZonehubError::Validation`] when the name is empty
    /// ([`ValidationError::EmptyName`]) or the request itself is invalid.
    pub fn validate(&self) -> Result<(), ZonehubError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        self.request.validate()
    }
}

/// Step-by-step builder for [`Scene`].
#[derive(Debug, Default)]
pub struct SceneBuilder {
    name: Option<String>,
    enabled: Option<bool>,
    request: Option<ActivationRequest>,
}

impl SceneBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    #[must_use]
    pub fn request(mut self, request: ActivationRequest) -> Self {
        self.request = Some(request);
        self
    }

    /// Consume the builder, validate, and return a [`Scene`].
    ///
    /// # Errors
    ///
    /// Returns [`ZonehubError::Validation`] if required fields are missing or
    /// invalid.
    pub fn build(self) -> Result<Scene, ZonehubError> {
        let scene = Scene {
            name: self.name.unwrap_or_default(),
            enabled: self.enabled.unwrap_or(true),
            request: self.request.unwrap_or_default(),
        };
        scene.validate()?;
        Ok(scene)
    }
}
