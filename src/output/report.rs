use crate::core::simulator::SimulationResult;
use crate::StopReason;
use ansi_term::Style;

/// Prints a styled summary of a finished run to the terminal.
pub fn print_summary(result: &SimulationResult) {
    let status = match result.stop_reason() {
        StopReason::TargetReached => "target reached",
        StopReason::IterationCapReached => "stopped at iteration cap",
        StopReason::DeadlineExpired => "stopped at deadline",
    };
    let last_efficiency = result
        .records()
        .last()
        .map_or(0.0, |record| record.efficiency);
    let toluene_fed = result
        .records()
        .last()
        .map_or(0.0, |record| record.total_toluene_used);

    println!(
        "{} ({})
        {}
        iterations: {} [h]
        toluene fed: {:.1} [kg]
        cumulative MCH yield: {:.1} [kg]
        target MCH yield: {:.1} [kg]
        last-iteration efficiency: {:.4} [kg MCH/kg toluene]",
        Style::new().bold().paint("Toluene -> MCH hydrogenation"),
        status,
        Style::new().underline().paint("    Final state    "),
        result.iterations(),
        toluene_fed,
        result.final_yield(),
        result.target_yield(),
        last_efficiency,
    );
}
