use crate::LayoutError;
use serde::{Deserialize, Serialize};

/// How per-element offsets are reported back to the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OffsetConvention {
    /// Top-left coordinate of the element inside the container.
    #[default]
    Absolute,
    /// Shift relative to the element's natural position at the container's
    /// top-left corner, as alignment-guide based renderers expect. This is
    /// the absolute coordinate negated.
    Delta,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowConfig {
    /// Gap inserted after every element and before every row break, applied
    /// uniformly on both axes.
    ///
    /// Defaults to `0.0`.
    pub spacing: f32,

    /// Convention used for [`Placement::offset`](crate::Placement::offset).
    ///
    /// Defaults to [`OffsetConvention::Absolute`].
    pub convention: OffsetConvention,

    /// When set, passes reject negative or non-finite sizes and elements
    /// placed twice instead of producing degenerate geometry.
    ///
    /// Defaults to `false`.
    pub strict: bool,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            spacing: 0.0,
            convention: OffsetConvention::Absolute,
            strict: false,
        }
    }
}

impl FlowConfig {
    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_convention(mut self, convention: OffsetConvention) -> Self {
        self.convention = convention;
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        if !self.spacing.is_finite() || self.spacing < 0.0 {
            return Err(LayoutError::InvalidSpacing(self.spacing));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FlowConfig::default();
        assert_eq!(config.spacing, 0.0);
        assert_eq!(config.convention, OffsetConvention::Absolute);
        assert!(!config.strict);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_negative_spacing() {
        let err = FlowConfig::default().with_spacing(-1.0).validate().unwrap_err();
        assert!(matches!(err, LayoutError::InvalidSpacing(s) if s == -1.0));
        assert!(FlowConfig::default().with_spacing(f32::NAN).validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: FlowConfig = serde_json::from_str(r#"{"convention": "delta"}"#).unwrap();
        assert_eq!(config.spacing, 0.0);
        assert_eq!(config.convention, OffsetConvention::Delta);
    }
}
