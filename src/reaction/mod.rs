//! Contains the **Kinetics** rate models and the **YieldModel** contribution function
pub mod kinetics;
pub mod yield_model;
