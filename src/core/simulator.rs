use crate::process::parameters::SimulationParameters;
use crate::reaction::yield_model::YieldModel;
use crate::{IterationRecord, SimulationError, StopReason};
use ndarray::prelude::*;
use std::time::{Duration, Instant};

/// Safety cap on the accumulation loop. A stalled process (zero per-iteration
/// contribution) stops here with a `NonConvergence` error instead of hanging.
pub const DEFAULT_MAX_ITERATIONS: usize = 1_000_000;

/// Iterative yield-accumulation loop of the hydrogenation process.
///
/// The simulator is a bounded iterator: each `next()` call feeds one
/// increment of toluene, evaluates the yield model and yields an
/// [`IterationRecord`]. Iteration ends at the first step where the cumulative
/// yield reaches the target, or when the iteration cap or the optional
/// wall-clock deadline is hit.
///
/// # Examples
/// ```
/// use mch_yield_simulator::{SimulationParameters, YieldSimulator};
///
/// let params = SimulationParameters::default();
/// let simulator = YieldSimulator::new(params);
/// let result = simulator.run().unwrap();
/// assert!(result.final_yield() >= result.target_yield());
/// ```
pub struct YieldSimulator {
    params: SimulationParameters,
    model: YieldModel,
    max_iterations: usize,
    deadline: Option<Duration>,
    started: Option<Instant>,
    iteration: usize,
    total_toluene_used: f64, // [kg]
    cumulative_yield: f64,   // [kg]
    remaining_toluene: f64,  // [kg]
}

impl YieldSimulator {
    /// Creates a simulator from an already validated parameter set. The run
    /// is a pure function of its parameters.
    pub fn new(params: SimulationParameters) -> YieldSimulator {
        let model = YieldModel::new(&params);
        // first recycling charge accounted before the loop starts
        let remaining_toluene = if params.recycling_enabled() {
            params.toluene_increment() * (1.0 - params.recycling_rate())
        } else {
            0.0
        };
        YieldSimulator {
            params,
            model,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            deadline: None,
            started: None,
            iteration: 0,
            total_toluene_used: 0.0,
            cumulative_yield: 0.0,
            remaining_toluene,
        }
    }

    pub fn set_max_iterations(&mut self, max_iterations: usize) {
        self.max_iterations = max_iterations;
    }

    /// Limits the wall-clock time of the run. Interactive callers use this to
    /// abort a runaway computation; the expired run surfaces as
    /// `NonConvergence` with the records produced so far.
    pub fn set_deadline(&mut self, deadline: Duration) {
        self.deadline = Some(deadline);
    }

    pub fn params(&self) -> &SimulationParameters {
        &self.params
    }

    pub fn cumulative_yield(&self) -> f64 {
        self.cumulative_yield
    }

    fn target_reached(&self) -> bool {
        self.cumulative_yield >= self.params.target_yield()
    }

    fn out_of_time(&self) -> bool {
        match (self.deadline, self.started) {
            (Some(deadline), Some(started)) => started.elapsed() >= deadline,
            _ => false,
        }
    }

    /// Drives the loop to completion.
    ///
    /// Returns the full record sequence once the cumulative yield reaches the
    /// target. If the iteration cap or the deadline strikes first, the run
    /// ends with [`SimulationError::NonConvergence`] carrying the partial
    /// records for diagnostic display.
    pub fn run(mut self) -> Result<SimulationResult, SimulationError> {
        let mut records: Vec<IterationRecord> = Vec::new();
        while let Some(record) = self.next() {
            records.push(record);
        }
        let iterations = self.iteration;
        if self.target_reached() {
            Ok(SimulationResult::new(
                records,
                iterations,
                StopReason::TargetReached,
                &self.params,
            ))
        } else {
            let stop_reason = if self.out_of_time() {
                StopReason::DeadlineExpired
            } else {
                StopReason::IterationCapReached
            };
            Err(SimulationError::NonConvergence {
                iterations,
                cumulative_yield: self.cumulative_yield,
                target_yield: self.params.target_yield(),
                partial: SimulationResult::new(records, iterations, stop_reason, &self.params),
            })
        }
    }
}

impl Iterator for YieldSimulator {
    type Item = IterationRecord;

    fn next(&mut self) -> Option<IterationRecord> {
        if self.target_reached() || self.iteration >= self.max_iterations {
            return None;
        }
        if self.started.is_none() {
            self.started = Some(Instant::now());
        }
        if self.out_of_time() {
            return None;
        }

        self.iteration += 1;
        self.total_toluene_used += self.params.toluene_increment();

        let raw_yield = self.model.contribution(
            self.total_toluene_used,
            self.params.temperature(),
            self.params.pressure(),
        );
        let adjusted_yield = raw_yield * self.params.effective_rate();
        self.cumulative_yield += adjusted_yield;

        let remaining_toluene = if self.params.recycling_enabled() {
            self.remaining_toluene +=
                self.params.toluene_increment() * (1.0 - self.params.recycling_rate());
            Some(self.remaining_toluene)
        } else {
            None
        };

        let efficiency = iteration_efficiency(
            adjusted_yield,
            self.params.toluene_increment(),
            self.params.max_yield_ratio(),
        );

        Some(IterationRecord {
            iteration: self.iteration,
            total_toluene_used: self.total_toluene_used,
            cumulative_yield: self.cumulative_yield,
            remaining_toluene,
            efficiency,
        })
    }
}

/// Per-iteration efficiency in `[kg MCH/kg toluene]`. A zero feed increment
/// is defined as zero efficiency, never a division fault.
pub fn iteration_efficiency(adjusted_yield: f64, toluene_increment: f64, max_yield_ratio: f64) -> f64 {
    if toluene_increment > 0.0 {
        adjusted_yield / (toluene_increment * max_yield_ratio)
    } else {
        0.0
    }
}

/// Ordered record sequence of a finished (or diagnostically aborted) run.
///
/// Exposes the three derived series against total toluene used, plus the
/// target value - the consumable shape for the visualization collaborator.
#[derive(Debug)]
pub struct SimulationResult {
    records: Vec<IterationRecord>,
    iterations: usize,
    stop_reason: StopReason,
    target_yield: f64, // [kg]
    recycling_enabled: bool,
}

impl SimulationResult {
    fn new(
        records: Vec<IterationRecord>,
        iterations: usize,
        stop_reason: StopReason,
        params: &SimulationParameters,
    ) -> SimulationResult {
        SimulationResult {
            records,
            iterations,
            stop_reason,
            target_yield: params.target_yield(),
            recycling_enabled: params.recycling_enabled(),
        }
    }

    pub fn records(&self) -> &[IterationRecord] {
        &self.records
    }
    pub fn iterations(&self) -> usize {
        self.iterations
    }
    pub fn stop_reason(&self) -> StopReason {
        self.stop_reason
    }
    pub fn target_yield(&self) -> f64 {
        self.target_yield
    }
    pub fn recycling_enabled(&self) -> bool {
        self.recycling_enabled
    }

    /// Cumulative yield of the last recorded iteration, zero for an empty run.
    pub fn final_yield(&self) -> f64 {
        self.records.last().map_or(0.0, |r| r.cumulative_yield)
    }

    pub fn toluene_usage(&self) -> Array1<f64> {
        self.series(|r| r.total_toluene_used)
    }

    pub fn cumulative_yield(&self) -> Array1<f64> {
        self.series(|r| r.cumulative_yield)
    }

    /// Remaining-toluene series, `None` for runs without recycling.
    pub fn remaining_toluene(&self) -> Option<Array1<f64>> {
        if self.recycling_enabled {
            Some(self.series(|r| r.remaining_toluene.unwrap_or(0.0)))
        } else {
            None
        }
    }

    pub fn efficiency(&self) -> Array1<f64> {
        self.series(|r| r.efficiency)
    }

    fn series<F: Fn(&IterationRecord) -> f64>(&self, f: F) -> Array1<f64> {
        Array1::from(self.records.iter().map(f).collect::<Vec<f64>>())
    }
}
