use mch::{SimulationBuilder, SimulationError};
use mch_yield_simulator as mch;

fn main() {
    let mut builder = SimulationBuilder::new();
    if let Err(err) = builder.load_process("simulation.json") {
        println!("Error at 'load_process':\n {}", err);
        std::process::exit(1)
    }

    let simulator = match builder.build_simulator() {
        Ok(simulator) => simulator,
        Err(err) => {
            println!("Error at 'build_simulator':\n {}", err);
            std::process::exit(1)
        }
    };

    let result = match simulator.run() {
        Ok(result) => result,
        Err(SimulationError::NonConvergence {
            iterations,
            cumulative_yield,
            target_yield,
            partial,
        }) => {
            println!(
                "Simulation did not converge: {:.1} of {:.1} [kg] after {} iterations",
                cumulative_yield, target_yield, iterations
            );
            partial
        }
        Err(err) => {
            println!("Error at 'run':\n {}", err);
            std::process::exit(1)
        }
    };

    mch::output::report::print_summary(&result);

    if let Err(err) = mch::output::table::write_to_file(&result, "results.txt") {
        println!("Error writing 'results.txt':\n {}", err);
        std::process::exit(1)
    }
    mch::output::plot::render(&result, "yield_plot.png");
}
