use std::collections::BTreeMap;

use serde::Deserialize;

use crate::pulse::RING_STEP;

const BASE_OPACITY: f64 = 100.0;
const SEVERITY_WEIGHT: f64 = 50.0;
const UNIFORM_FADE: f64 = 160.0;

/// `PulseStyle`
/// The opacity and sizing policy of one pulse.
///
/// Both variants share the ring radius skeleton in
/// [`pulse_rings`](crate::pulse::pulse_rings); the style decides the
/// maximum radius and how ring opacity falls off with phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PulseStyle {
    /// Severity-weighted pulse for fixed anomaly markers. Higher
    /// severity widens the sweep and holds opacity longer.
    Tiered { severity: u8 },
    /// Fixed-size pulse with a plain linear fade, for hazard hits that
    /// carry no severity.
    Uniform,
}

impl PulseStyle {
    pub fn max_radius(&self, radii: &SeverityRadii) -> f64 {
        match self {
            PulseStyle::Tiered { severity } => radii.tier(*severity),
            PulseStyle::Uniform => radii.uniform,
        }
    }

    /// Ring opacity in the 0-255 channel model, never negative.
    pub(crate) fn opacity(&self, phase: f64, ring: usize) -> u8 {
        let raw = match self {
            PulseStyle::Tiered { severity } => {
                BASE_OPACITY
                    + SEVERITY_WEIGHT
                        * f64::from(*severity)
                        * (1.0 - phase - ring as f64 * RING_STEP)
            }
            PulseStyle::Uniform => UNIFORM_FADE * (1.0 - phase),
        };

        raw.clamp(0.0, 255.0) as u8
    }
}

/// Severity to maximum pulse radius, in metres of the output coordinate
/// system.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SeverityRadii {
    pub tiers: BTreeMap<u8, f64>,
    /// Radius for severities missing from the table.
    pub fallback: f64,
    /// Radius of the severity-less uniform style.
    pub uniform: f64,
}

impl Default for SeverityRadii {
    fn default() -> Self {
        SeverityRadii {
            tiers: BTreeMap::from([(1, 150_000.0), (2, 250_000.0), (3, 400_000.0)]),
            fallback: 250_000.0,
            uniform: 250_000.0,
        }
    }
}

impl SeverityRadii {
    pub fn tier(&self, severity: u8) -> f64 {
        self.tiers.get(&severity).copied().unwrap_or(self.fallback)
    }
}
