use crate::core::simulator::SimulationResult;
use crate::SimulationError;
use std::io::Write;

/// Header line of the tab-separated result table.
pub fn headers(recycling_enabled: bool) -> String {
    if recycling_enabled {
        "iteration [h]\ttoluene used [kg]\tcumulative yield [kg]\tremaining toluene [kg]\tefficiency [kg/kg]"
            .to_string()
    } else {
        "iteration [h]\ttoluene used [kg]\tcumulative yield [kg]\tefficiency [kg/kg]".to_string()
    }
}

/// Writes every iteration record as one tab-separated row.
pub fn write_to_file(result: &SimulationResult, file_name: &str) -> Result<(), SimulationError> {
    let mut file = std::fs::File::create(file_name).map_err(SimulationError::Io)?;
    writeln!(file, "{}", headers(result.recycling_enabled())).map_err(SimulationError::Io)?;
    for record in result.records() {
        let row: Vec<String> = record
            .storable_row()
            .iter()
            .map(|value| format!("{:.6}", value))
            .collect();
        writeln!(file, "{}", row.join("\t")).map_err(SimulationError::Io)?;
    }
    Ok(())
}
