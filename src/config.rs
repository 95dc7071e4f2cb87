//! Pipeline parameters.
//!
//! The engine has exactly one caller-visible tunable (spec.md §6): the
//! uniform edge-length cap used by the refinement engine (C3). The other
//! two fields here are the Open Questions from spec.md §9 — both default to
//! the behavior the source exhibits today and exist only so a caller can
//! deviate from it deliberately.

use crate::error::{MeshError, Result};

/// Parameters controlling one `embed_constraints` run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    max_edge_length: f32,
    epm_merge_tolerance: Option<f32>,
    enable_ratio_marking: bool,
}

impl Parameters {
    /// Create parameters with the given edge-length cap and the source's
    /// documented defaults (no ratio marking, tolerance derived from
    /// `max_edge_length`).
    pub fn new(max_edge_length: f32) -> Result<Self> {
        if !(max_edge_length > 0.0) {
            return Err(MeshError::InvalidParameters { max_edge_length });
        }
        Ok(Self {
            max_edge_length,
            epm_merge_tolerance: None,
            enable_ratio_marking: false,
        })
    }

    /// Override the EPM's near-coincident-vertex merge tolerance. Defaults
    /// to `1e-3 * max_edge_length` (spec.md §9) when left unset.
    pub fn with_epm_merge_tolerance(mut self, tolerance: f32) -> Self {
        self.epm_merge_tolerance = Some(tolerance);
        self
    }

    /// Enable the disabled min/max edge-length ratio marking pass.
    ///
    /// The source calls this pass "seems broken" and ships it commented
    /// out; spec.md §9 requires the port to preserve that default. This
    /// exists only for experimentation and MUST NOT be turned on by
    /// default.
    pub fn with_ratio_marking(mut self, enabled: bool) -> Self {
        self.enable_ratio_marking = enabled;
        self
    }

    pub fn max_edge_length(&self) -> f32 {
        self.max_edge_length
    }

    pub fn max_edge_length_squared(&self) -> f32 {
        self.max_edge_length * self.max_edge_length
    }

    pub fn epm_merge_tolerance(&self) -> f32 {
        self.epm_merge_tolerance
            .unwrap_or(1e-3 * self.max_edge_length)
    }

    pub fn ratio_marking_enabled(&self) -> bool {
        self.enable_ratio_marking
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_edge_length() {
        assert!(Parameters::new(0.0).is_err());
        assert!(Parameters::new(-1.0).is_err());
    }

    #[test]
    fn default_tolerance_scales_with_edge_length() {
        let p = Parameters::new(2.0).unwrap();
        assert!((p.epm_merge_tolerance() - 2e-3).abs() < 1e-9);
    }

    #[test]
    fn explicit_tolerance_overrides_default() {
        let p = Parameters::new(2.0).unwrap().with_epm_merge_tolerance(0.5);
        assert_eq!(p.epm_merge_tolerance(), 0.5);
    }

    #[test]
    fn ratio_marking_defaults_off() {
        let p = Parameters::new(1.0).unwrap();
        assert!(!p.ratio_marking_enabled());
    }
}
