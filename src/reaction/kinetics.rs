use dyn_clone::DynClone;

const GAS_CONSTANT: f64 = 8.314; // [J/(mol.K)]

/// Rate-sensitivity model of the hydrogenation reaction. Both factors are
/// closed-form and cannot fail for in-bounds inputs.
pub trait Kinetics: DynClone {
    fn model_name<'a>(&'a self) -> &str;
    /// Returns the temperature sensitivity factor. `temp` must be in `[°C]`
    /// and above -273.15.
    fn temperature_factor(&self, temp: f64) -> f64;
    /// Returns the pressure sensitivity factor. `press` must be in `[barg]`.
    fn pressure_factor(&self, press: f64) -> f64;
}

dyn_clone::clone_trait_object!(Kinetics);

/// Arrhenius-form temperature sensitivity with a linear pressure response
/// relative to standard pressure.
#[derive(Debug, Clone)]
pub struct ArrheniusKinetics {
    model_name: String,
    pre_exponential: f64,   // [-]
    activation_energy: f64, // [J/mol]
    standard_pressure: f64, // [bar]
}

impl ArrheniusKinetics {
    pub fn new() -> ArrheniusKinetics {
        ArrheniusKinetics {
            model_name: "Arrhenius model".to_string(),
            pre_exponential: 1e5,
            activation_energy: 70000.0, // typical value for hydrogenation
            standard_pressure: 1.0,
        }
    }
}

impl Kinetics for ArrheniusKinetics {
    fn model_name<'a>(&'a self) -> &str {
        &self.model_name
    }
    fn temperature_factor(&self, temp: f64) -> f64 {
        let temp_k = temp + 273.15; // [K]
        self.pre_exponential * (-self.activation_energy / (GAS_CONSTANT * temp_k)).exp()
    }
    fn pressure_factor(&self, press: f64) -> f64 {
        // press <= 0 is rejected upstream; the fallback keeps the factor sane anyway
        if press > 0.0 {
            press / self.standard_pressure
        } else {
            1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temperature_factor_matches_arrhenius_form() {
        let kinetics = ArrheniusKinetics::new();
        let expected = 1e5 * (-70000.0 / (8.314_f64 * (200.0 + 273.15))).exp();
        assert!((kinetics.temperature_factor(200.0) - expected).abs() < 1e-12);
    }

    #[test]
    fn temperature_factor_increases_with_temperature() {
        let kinetics = ArrheniusKinetics::new();
        assert!(kinetics.temperature_factor(200.0) > kinetics.temperature_factor(100.0));
        assert!(kinetics.temperature_factor(900.0) > kinetics.temperature_factor(200.0));
    }

    #[test]
    fn pressure_factor_is_linear_above_zero() {
        let kinetics = ArrheniusKinetics::new();
        assert_eq!(kinetics.pressure_factor(10.0), 10.0);
        assert_eq!(kinetics.pressure_factor(0.1), 0.1);
    }

    #[test]
    fn pressure_factor_falls_back_to_unity() {
        let kinetics = ArrheniusKinetics::new();
        assert_eq!(kinetics.pressure_factor(0.0), 1.0);
        assert_eq!(kinetics.pressure_factor(-5.0), 1.0);
    }
}
