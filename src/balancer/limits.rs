use crate::domain::{GeneratorConfig, SystemType};

/// Per-phase capacity when no generator constrains the panel (A)
pub const DEFAULT_PHASE_MAX_AMPS: f64 = 63.0;

const SQRT_3: f64 = 1.732;

/// Current each leg can carry for the given topology.
///
/// With an enabled generator:
/// - single-phase: `kVA × 1000 / V`
/// - two-phase:    `kVA × 1000 / V / 2`
/// - three-phase:  `kVA × 1000 / (V × 1.732)`
///
/// Otherwise every leg gets [`DEFAULT_PHASE_MAX_AMPS`].
pub fn phase_max_amps(system_type: SystemType, generator: Option<&GeneratorConfig>) -> f64 {
    let Some(generator) = generator.filter(|g| g.enabled) else {
        return DEFAULT_PHASE_MAX_AMPS;
    };

    let va = generator.power_kva * 1000.0;
    match system_type {
        SystemType::Single => va / generator.voltage,
        SystemType::TwoPhase => va / generator.voltage / 2.0,
        SystemType::ThreePhase => va / (generator.voltage * SQRT_3),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator(kva: f64, voltage: f64, enabled: bool) -> GeneratorConfig {
        GeneratorConfig {
            enabled,
            power_kva: kva,
            is_three_phase: true,
            voltage,
        }
    }

    #[test]
    fn test_three_phase_generator() {
        let amps = phase_max_amps(SystemType::ThreePhase, Some(&generator(50.0, 220.0, true)));
        assert!((amps - 131.2).abs() < 0.05);
        assert!((amps - 50000.0 / (220.0 * 1.732)).abs() < 1e-9);
    }

    #[test]
    fn test_single_and_two_phase_generator() {
        let gen = generator(22.0, 220.0, true);
        assert!((phase_max_amps(SystemType::Single, Some(&gen)) - 100.0).abs() < 1e-9);
        assert!((phase_max_amps(SystemType::TwoPhase, Some(&gen)) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_fallback_without_generator() {
        assert_eq!(phase_max_amps(SystemType::ThreePhase, None), 63.0);
        let disabled = generator(500.0, 220.0, false);
        assert_eq!(phase_max_amps(SystemType::Single, Some(&disabled)), 63.0);
    }
}
