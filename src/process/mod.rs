//! Contains the **SimulationParameters** intake and its `.json` mirror
pub mod json_reader;
pub mod parameters;
