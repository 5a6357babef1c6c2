use thiserror::Error;

use crate::domain::PhaseId;

/// Failures of the operations that must reject instead of degrading.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DistributionError {
    #[error("Phase {phase} already holds {capacity} circuits (channel capacity reached)")]
    ChannelCapacityExceeded { phase: PhaseId, capacity: usize },

    #[error("Phase {0} is not part of this mainpower configuration")]
    PhaseNotFound(PhaseId),

    #[error("Circuit '{0}' not found")]
    PortNotFound(String),

    #[error("Equipment voltage '{equipment}' is not compatible with a {system} V system")]
    IncompatibleVoltage { system: String, equipment: String },

    #[error("Circuit '{0}' is assigned to more than one phase")]
    DuplicateAssignment(String),

    #[error("Phase assignment does not cover the circuit set (missing: {missing:?}, unknown: {unknown:?})")]
    AssignmentMismatch {
        missing: Vec<String>,
        unknown: Vec<String>,
    },
}

pub type Result<T> = std::result::Result<T, DistributionError>;
