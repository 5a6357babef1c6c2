//! Phase balancing: which leg of the supply feeds which circuit.
//!
//! Every function takes the current configuration by reference and returns
//! a new one, so callers can diff old and new state.

pub mod greedy;
pub mod limits;
pub mod manual;
pub mod quality;
pub mod types;

pub use greedy::{balance_phases, balance_with, calculate_port_load, port_loads, update_phase_loads, LargestLoadFirst};
pub use limits::{phase_max_amps, DEFAULT_PHASE_MAX_AMPS};
pub use manual::{move_port, sync_ports};
pub use quality::{calculate_balance_quality, check_phase_overload, BalanceLabel, PhaseOverload};
pub use types::*;
