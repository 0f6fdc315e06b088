//! Presentation collaborators. Everything here consumes a finished
//! `SimulationResult`; nothing feeds back into the core loop.
pub mod plot;
pub mod report;
pub mod table;
