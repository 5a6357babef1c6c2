pub mod cable;
pub mod load;
pub mod voltage;

pub use cable::{cable_specs, recommend_conductor, CableSpec, ColorTier, ConductorParams, ConductorRecommendation};
pub use load::{aggregate_totals, item_load, per_phase_amps, port_totals, LoadMetrics};
pub use voltage::{is_compatible, voltage_bucket, VoltageBucket, VoltageFamily};
