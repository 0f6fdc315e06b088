use crate::process::parameters::SimulationParameters;
use crate::reaction::kinetics::{ArrheniusKinetics, Kinetics};

/// Yield-contribution model of the hydrogenation reaction.
///
/// The yield factor `a` and the constant offset `b` are computed once from the
/// process parameters and reused on every iteration.
#[derive(Clone)]
pub struct YieldModel {
    kinetics: Box<dyn Kinetics>,
    hydrogen_toluene_ratio: f64, // [mol H2/mol toluene]
    a: f64,                      // yield factor
    b: f64,                      // constant offset for initial yield or inefficiencies
}

impl YieldModel {
    pub fn new(params: &SimulationParameters) -> YieldModel {
        YieldModel::with_kinetics(params, Box::new(ArrheniusKinetics::new()))
    }

    pub fn with_kinetics(params: &SimulationParameters, kinetics: Box<dyn Kinetics>) -> YieldModel {
        YieldModel {
            kinetics,
            hydrogen_toluene_ratio: params.hydrogen_toluene_ratio(),
            a: params.hydrogen_toluene_ratio()
                * params.max_yield_ratio()
                * params.selectivity()
                * params.conversion_rate(),
            b: 0.0,
        }
    }

    /// Hydrogen availability effect: full-conversion bonus inside the 3:1 to
    /// 5:1 operating window (boundaries included), hard penalty outside it.
    pub fn hydrogen_effect(&self) -> f64 {
        if (3.0..=5.0).contains(&self.hydrogen_toluene_ratio) {
            8.0
        } else {
            0.8
        }
    }

    /// Returns the raw MCH mass produced at the current feed total.
    /// `total_toluene_used` must be in `[kg]`, `temp` in `[°C]` and `press`
    /// in `[barg]`.
    pub fn contribution(&self, total_toluene_used: f64, temp: f64, press: f64) -> f64 {
        let temp_effect = self.kinetics.temperature_factor(temp);
        let pressure_effect = self.kinetics.pressure_factor(press);
        self.a * total_toluene_used * temp_effect * pressure_effect * self.hydrogen_effect() + self.b
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::parameters::SimulationParameters;

    fn params_with_ratio(hydrogen_toluene_ratio: f64) -> SimulationParameters {
        SimulationParameters::new(
            95000.0,
            60000.0,
            200.0,
            10.0,
            0.95,
            0.9,
            false,
            0.0,
            hydrogen_toluene_ratio,
            1.0,
        )
        .unwrap()
    }

    #[test]
    fn hydrogen_effect_bonus_inside_operating_window() {
        assert_eq!(YieldModel::new(&params_with_ratio(3.0)).hydrogen_effect(), 8.0);
        assert_eq!(YieldModel::new(&params_with_ratio(4.0)).hydrogen_effect(), 8.0);
        assert_eq!(YieldModel::new(&params_with_ratio(5.0)).hydrogen_effect(), 8.0);
    }

    #[test]
    fn hydrogen_effect_penalty_outside_operating_window() {
        assert_eq!(YieldModel::new(&params_with_ratio(2.999)).hydrogen_effect(), 0.8);
        assert_eq!(YieldModel::new(&params_with_ratio(5.001)).hydrogen_effect(), 0.8);
    }

    #[test]
    fn contribution_matches_closed_form() {
        let params = params_with_ratio(4.0);
        let model = YieldModel::new(&params);
        let a = 4.0 * 1.0 * 0.95 * 0.9;
        let temp_effect = 1e5 * (-70000.0 / (8.314_f64 * (200.0 + 273.15))).exp();
        let expected = a * 60000.0 * temp_effect * 10.0 * 8.0;
        let contribution = model.contribution(60000.0, 200.0, 10.0);
        assert!((contribution - expected).abs() / expected < 1e-12);
    }

    #[test]
    fn contribution_is_offset_only_at_zero_feed() {
        let model = YieldModel::new(&params_with_ratio(4.0));
        assert_eq!(model.contribution(0.0, 200.0, 10.0), 0.0);
    }
}
