//! Cable and connector recommendations from circuit current.
//!
//! Two independent tables live here:
//!
//! - [`cable_specs`]: the quick advisor shown next to every circuit. Current
//!   is rounded up to the next whole amp and matched against inclusive upper
//!   bounds. Zero or negative current still yields the smallest row.
//! - [`recommend_conductor`]: the detailed sizing used by the quick
//!   calculator, which also reports the longest run that keeps the voltage
//!   drop within limits. It returns `None` for a non-positive current.

use serde::{Deserialize, Serialize};
use strum::Display;

/// Copper resistivity (Ω·mm²/m)
pub const COPPER_RESISTIVITY: f64 = 0.0172;
/// Maximum voltage drop as a fraction of the supply voltage
pub const MAX_VOLTAGE_DROP: f64 = 0.04;

const SQRT_3: f64 = 1.732;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ColorTier {
    Emerald,
    Blue,
    Cyan,
    Yellow,
    Orange,
    Red,
    Purple,
    Fuchsia,
    Rose,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CableSpec {
    pub gauge_mm2: f64,
    pub connector_type: &'static str,
    pub connector_rating_amps: u32,
    pub color_tier: ColorTier,
}

struct CableRow {
    max_current: f64,
    spec: CableSpec,
}

const fn row(
    max_current: f64,
    gauge_mm2: f64,
    connector_type: &'static str,
    connector_rating_amps: u32,
    color_tier: ColorTier,
) -> CableRow {
    CableRow {
        max_current,
        spec: CableSpec {
            gauge_mm2,
            connector_type,
            connector_rating_amps,
            color_tier,
        },
    }
}

static CABLE_TABLE: [CableRow; 9] = [
    row(10.0, 1.5, "Outlet 10A", 10, ColorTier::Emerald),
    row(16.0, 2.5, "Outlet 16A", 16, ColorTier::Blue),
    row(21.0, 2.5, "Outlet 20A/industrial", 20, ColorTier::Cyan),
    row(28.0, 4.0, "Industrial 32A", 32, ColorTier::Yellow),
    row(36.0, 6.0, "Industrial 32A", 32, ColorTier::Orange),
    row(50.0, 10.0, "Industrial 63A", 63, ColorTier::Red),
    row(68.0, 16.0, "Industrial 63A", 63, ColorTier::Purple),
    row(89.0, 25.0, "Industrial 100A", 100, ColorTier::Fuchsia),
    row(f64::INFINITY, 35.0, "Industrial 125A+", 125, ColorTier::Rose),
];

/// Conductor and connector for a circuit drawing `current_amps`.
pub fn cable_specs(current_amps: f64) -> CableSpec {
    let rounded = current_amps.ceil();
    CABLE_TABLE
        .iter()
        .find(|row| rounded <= row.max_current)
        .unwrap_or(&CABLE_TABLE[CABLE_TABLE.len() - 1])
        .spec
}

/// Ampacity of copper conductors, three loaded conductors (mm², A)
static CONDUCTOR_AMPACITY: [(f64, f64); 12] = [
    (1.5, 15.5),
    (2.5, 21.0),
    (4.0, 28.0),
    (6.0, 36.0),
    (10.0, 50.0),
    (16.0, 68.0),
    (25.0, 89.0),
    (35.0, 110.0),
    (50.0, 134.0),
    (70.0, 171.0),
    (95.0, 207.0),
    (120.0, 239.0),
];

/// Physical constants for voltage-drop sizing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConductorParams {
    pub resistivity: f64,
    pub max_voltage_drop: f64,
}

impl Default for ConductorParams {
    fn default() -> Self {
        Self {
            resistivity: COPPER_RESISTIVITY,
            max_voltage_drop: MAX_VOLTAGE_DROP,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConductorRecommendation {
    pub gauge_mm2: f64,
    pub ampacity_amps: f64,
    /// Longest run (m) before the voltage drop limit is hit
    pub max_distance_m: f64,
    /// False when even the largest conductor is below the current
    pub within_ampacity: bool,
}

/// Smallest conductor carrying `current_amps`, with its maximum run length.
///
/// `max_distance = floor(drop × V × S / (k × ρ × I))`, where `k` is 1.732 for
/// three-phase supplies and 2 otherwise.
pub fn recommend_conductor(
    current_amps: f64,
    voltage: f64,
    phase_count: usize,
    params: &ConductorParams,
) -> Option<ConductorRecommendation> {
    if current_amps.is_nan() || current_amps <= 0.0 {
        return None;
    }

    let (gauge_mm2, ampacity_amps, within_ampacity) = CONDUCTOR_AMPACITY
        .iter()
        .find(|(_, ampacity)| *ampacity >= current_amps)
        .map(|&(gauge, ampacity)| (gauge, ampacity, true))
        .unwrap_or_else(|| {
            let (gauge, ampacity) = CONDUCTOR_AMPACITY[CONDUCTOR_AMPACITY.len() - 1];
            (gauge, ampacity, false)
        });

    let k = if phase_count == 3 { SQRT_3 } else { 2.0 };
    let max_distance_m = ((params.max_voltage_drop * voltage * gauge_mm2)
        / (k * params.resistivity * current_amps))
        .floor();

    Some(ConductorRecommendation {
        gauge_mm2,
        ampacity_amps,
        max_distance_m,
        within_ampacity,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(-5.0, 1.5, 10)]
    #[case(0.0, 1.5, 10)]
    #[case(10.0, 1.5, 10)]
    #[case(10.1, 2.5, 16)]
    #[case(16.0, 2.5, 16)]
    #[case(20.2, 2.5, 20)]
    #[case(27.5, 4.0, 32)]
    #[case(36.0, 6.0, 32)]
    #[case(49.0, 10.0, 63)]
    #[case(68.0, 16.0, 63)]
    #[case(88.9, 25.0, 100)]
    #[case(89.01, 35.0, 125)]
    #[case(400.0, 35.0, 125)]
    fn test_cable_specs_table(#[case] current: f64, #[case] gauge: f64, #[case] connector_amps: u32) {
        let spec = cable_specs(current);
        assert_eq!(spec.gauge_mm2, gauge);
        assert_eq!(spec.connector_rating_amps, connector_amps);
    }

    #[test]
    fn test_cable_specs_tiers() {
        assert_eq!(cable_specs(0.0).color_tier, ColorTier::Emerald);
        assert_eq!(cable_specs(21.0).connector_type, "Outlet 20A/industrial");
        assert_eq!(cable_specs(21.0).color_tier, ColorTier::Cyan);
        assert_eq!(cable_specs(120.0).color_tier, ColorTier::Rose);
    }

    #[test]
    fn test_recommend_conductor_single_phase() {
        let rec = recommend_conductor(10.0, 220.0, 1, &ConductorParams::default()).unwrap();
        assert_eq!(rec.gauge_mm2, 1.5);
        assert_eq!(rec.ampacity_amps, 15.5);
        // 0.04 * 220 * 1.5 / (2 * 0.0172 * 10) = 38.37
        assert_eq!(rec.max_distance_m, 38.0);
        assert!(rec.within_ampacity);
    }

    #[test]
    fn test_recommend_conductor_three_phase() {
        let rec = recommend_conductor(60.0, 380.0, 3, &ConductorParams::default()).unwrap();
        assert_eq!(rec.gauge_mm2, 16.0);
        // 0.04 * 380 * 16 / (1.732 * 0.0172 * 60) = 136.0x
        assert_eq!(rec.max_distance_m, 136.0);
    }

    #[test]
    fn test_recommend_conductor_boundaries() {
        let params = ConductorParams::default();
        assert_eq!(recommend_conductor(15.5, 220.0, 1, &params).unwrap().gauge_mm2, 1.5);
        assert_eq!(recommend_conductor(15.6, 220.0, 1, &params).unwrap().gauge_mm2, 2.5);

        let over = recommend_conductor(300.0, 380.0, 3, &params).unwrap();
        assert_eq!(over.gauge_mm2, 120.0);
        assert!(!over.within_ampacity);
    }

    #[test]
    fn test_recommend_conductor_no_current() {
        let params = ConductorParams::default();
        assert!(recommend_conductor(0.0, 220.0, 1, &params).is_none());
        assert!(recommend_conductor(-3.0, 220.0, 1, &params).is_none());
    }
}
