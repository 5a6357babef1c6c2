//! Load planning for event power distribution.
//!
//! The core is pure and synchronous: circuit loads ([`electrical`]), phase
//! assignment ([`balancer`]) and reports ([`report`]) all take values and
//! return new values. [`api`] exposes the same operations over HTTP.

pub mod api;
pub mod balancer;
pub mod config;
pub mod domain;
pub mod electrical;
pub mod error;
pub mod report;
pub mod telemetry;

pub use error::DistributionError;
