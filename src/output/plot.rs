use crate::core::simulator::SimulationResult;
use gnuplot::{AxesCommon, Caption, Color, Coordinate, DashType, Figure, LineStyle};

/// Renders the three derived series against total toluene used into a single
/// stacked figure: cumulative yield with the target reference line, remaining
/// toluene (a placeholder panel when recycling is off) and per-iteration
/// efficiency.
pub fn render(result: &SimulationResult, file_name: &str) {
    let toluene = result.toluene_usage();
    let yields = result.cumulative_yield();
    let efficiency = result.efficiency();
    let target_line = vec![result.target_yield(); toluene.len()];
    let recycling_label = if result.recycling_enabled() {
        "With Recycling"
    } else {
        "No Recycling"
    };

    let mut fig = Figure::new();

    // Cumulative MCH yield
    {
        let axes = fig.axes2d();
        axes.set_pos(0.0, 0.68);
        axes.set_size(1.0, 0.30);
        axes.set_title(
            &format!(
                "Cumulative MCH Yield vs. Total Toluene Usage ({})",
                recycling_label
            ),
            &[],
        );
        axes.set_x_label("Total Toluene Used (kg)", &[]);
        axes.set_y_label("Cumulative MCH Yield (kg)", &[]);
        axes.lines_points(
            toluene.iter(),
            yields.iter(),
            &[Caption("Cumulative MCH Yield"), Color("blue")],
        );
        axes.lines(
            toluene.iter(),
            target_line.iter(),
            &[
                Caption("Target MCH Yield"),
                Color("red"),
                LineStyle(DashType::Dash),
            ],
        );
    }

    // Remaining toluene, or the placeholder panel
    {
        let axes = fig.axes2d();
        axes.set_pos(0.0, 0.35);
        axes.set_size(1.0, 0.30);
        match result.remaining_toluene() {
            Some(remaining) => {
                axes.set_title("Remaining Toluene vs. Total Toluene Usage", &[]);
                axes.set_x_label("Total Toluene Used (kg)", &[]);
                axes.set_y_label("Remaining Toluene (kg)", &[]);
                axes.lines_points(
                    toluene.iter(),
                    remaining.iter(),
                    &[Caption("Remaining Toluene"), Color("green")],
                );
            }
            None => {
                axes.set_x_ticks(None, &[], &[]);
                axes.set_y_ticks(None, &[], &[]);
                axes.label(
                    "No Recycling Enabled",
                    Coordinate::Graph(0.5),
                    Coordinate::Graph(0.5),
                    &[],
                );
            }
        }
    }

    // Per-iteration efficiency
    {
        let axes = fig.axes2d();
        axes.set_pos(0.0, 0.02);
        axes.set_size(1.0, 0.30);
        axes.set_title(
            &format!(
                "Yield Efficiency vs. Total Toluene Usage ({})",
                recycling_label
            ),
            &[],
        );
        axes.set_x_label("Total Toluene Used (kg)", &[]);
        axes.set_y_label("Yield Efficiency (kg MCH/kg Toluene)", &[]);
        axes.lines_points(
            toluene.iter(),
            efficiency.iter(),
            &[Caption("Yield Efficiency"), Color("orange")],
        );
    }

    fig.set_terminal("pngcairo size 900,1200", file_name);
    fig.show();
}
