//! Configuration types for stream stages

use log::Level;

/// Settings for the logging stage added by `Stream::trace`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceConfig {
    /// Prefix written before every traced element
    pub label: String,
    pub level: Level,
}

impl TraceConfig {
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            label: "stream".to_string(),
            level: Level::Trace,
        }
    }
}
