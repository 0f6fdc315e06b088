//! # mch_yield_simulator
//!
//! The `mch_yield_simulator` crate provides an easy way to simulate the cumulative
//! yield of methylcyclohexane (MCH) produced by toluene hydrogenation.

use ndarray::prelude::*;

mod core;
mod process;
mod reaction;
pub mod output;

// Re-exporting
pub use crate::core::builder::SimulationBuilder;
pub use crate::core::simulator::{iteration_efficiency, SimulationResult, YieldSimulator};
pub use crate::core::simulator::DEFAULT_MAX_ITERATIONS;
pub use crate::process::json_reader::JsonSimulation;
pub use crate::process::parameters::SimulationParameters;
pub use crate::reaction::kinetics::{ArrheniusKinetics, Kinetics};
pub use crate::reaction::yield_model::YieldModel;

// Why a finished run stopped iterating
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StopReason {
    TargetReached,
    IterationCapReached,
    DeadlineExpired,
}

/// One step of the accumulation loop. One iteration corresponds to one hour
/// of toluene feed.
#[derive(Debug, Clone, PartialEq)]
pub struct IterationRecord {
    pub iteration: usize,
    pub total_toluene_used: f64,        // [kg]
    pub cumulative_yield: f64,          // [kg]
    pub remaining_toluene: Option<f64>, // [kg] - recycling runs only
    pub efficiency: f64,                // [kg MCH/kg toluene]
}

impl IterationRecord {
    /// Returns the record as a plottable row. The remaining-toluene column is
    /// only present when the run tracked recycling.
    pub fn storable_row(&self) -> Array1<f64> {
        match self.remaining_toluene {
            Some(remaining) => array![
                self.iteration as f64,
                self.total_toluene_used,
                self.cumulative_yield,
                remaining,
                self.efficiency
            ],
            None => array![
                self.iteration as f64,
                self.total_toluene_used,
                self.cumulative_yield,
                self.efficiency
            ],
        }
    }
}

impl std::fmt::Display for IterationRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let remaining = match self.remaining_toluene {
            Some(remaining) => format!("{:.1} [kg]", remaining),
            None => "-".to_string(),
        };
        write!(
            f,
            "iteration {}:
        toluene used: {:.1} [kg]
        cumulative yield: {:.1} [kg]
        remaining toluene: {}
        efficiency: {:.4} [kg MCH/kg toluene]",
            self.iteration,
            self.total_toluene_used,
            self.cumulative_yield,
            remaining,
            self.efficiency
        )
    }
}

#[derive(Debug)]
pub enum SimulationError {
    InvalidParameter(String),
    NonConvergence {
        iterations: usize,
        cumulative_yield: f64, // [kg]
        target_yield: f64,     // [kg]
        partial: SimulationResult,
    },
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl std::fmt::Display for SimulationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimulationError::InvalidParameter(msg) => write!(f, "invalid parameter: {}", msg),
            SimulationError::NonConvergence {
                iterations,
                cumulative_yield,
                target_yield,
                ..
            } => write!(
                f,
                "simulation did not converge: {:.1} of {:.1} [kg] after {} iterations",
                cumulative_yield, target_yield, iterations
            ),
            SimulationError::Io(err) => write!(f, "unable to read file: {}", err),
            SimulationError::Parse(err) => write!(f, "unable to parse file: {}", err),
        }
    }
}

impl std::error::Error for SimulationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimulationError::Io(err) => Some(err),
            SimulationError::Parse(err) => Some(err),
            _ => None,
        }
    }
}
