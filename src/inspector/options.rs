use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use thiserror::Error;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct ReportViews: u8 {
        const TOKENS = 0b00001;
        const EXPLANATION = 0b00010;
        const COMPLEXITY = 0b00100;
        const SUGGESTIONS = 0b01000;
        const BACKTRACKING = 0b10000;
    }
}

impl Default for ReportViews {
    fn default() -> Self {
        ReportViews::all()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InspectorConfig {
    pub views: ReportViews,
    pub require_sample_text: bool,
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            views: ReportViews::default(),
            require_sample_text: true,
        }
    }
}

impl InspectorConfig {
    pub fn builder() -> InspectorConfigBuilder {
        InspectorConfigBuilder::default()
    }

    pub fn validate(&self) -> Result<(), InspectorConfigError> {
        if self.views.is_empty() {
            return Err(InspectorConfigError::NoViewsSelected);
        }
        Ok(())
    }

    pub fn wants(&self, view: ReportViews) -> bool {
        self.views.contains(view)
    }
}

#[derive(Debug, Default, Clone)]
pub struct InspectorConfigBuilder {
    config: InspectorConfig,
}

impl InspectorConfigBuilder {
    pub fn views(mut self, views: ReportViews) -> Self {
        self.config.views = views;
        self
    }

    pub fn enable(mut self, view: ReportViews) -> Self {
        self.config.views.insert(view);
        self
    }

    pub fn disable(mut self, view: ReportViews) -> Self {
        self.config.views.remove(view);
        self
    }

    pub fn require_sample_text(mut self, value: bool) -> Self {
        self.config.require_sample_text = value;
        self
    }

    pub fn build(self) -> Result<InspectorConfig, InspectorConfigError> {
        let config = self.config;
        config.validate()?;
        Ok(config)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InspectorConfigError {
    #[error("at least one report view must be enabled")]
    NoViewsSelected,
}
