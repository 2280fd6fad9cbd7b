use std::f64::consts::PI;

/// Lumped RL value pair attached at a wire midpoint
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Load {
    /// Inductance, Henries
    pub ind: f64,
    /// Resistance, Ohms
    pub res: f64,
}

impl Load {
    pub fn new(ind: f64, res: f64) -> Load {
        Load { ind, res }
    }

    /// Pure resistance, as used for feeder terminations
    pub fn resistive(res: f64) -> Load {
        Load { ind: 0.0, res }
    }
}

/// Air-core approximation of a short multi-turn coil. Valid only for the
/// turn counts and dimensions used by the reference coils, wound from
/// roughly quarter-inch-gauge wire.
pub fn inductance(length: f64, diameter: f64, turns: f64) -> f64 {
    if turns <= 0.0 {
        return 0.0;
    }
    0.001 * turns.powi(2) * (diameter / 2.0).powi(2) / (114.0 * diameter + 254.0 * length)
}

/// Conductor loss of the same coil, assuming the fixed reference wire
/// gauge. Not a general-purpose resistance model.
pub fn resistance(diameter: f64, turns: f64) -> f64 {
    if turns <= 0.0 {
        return 0.0;
    }
    6e-3 * 2.0 * PI * diameter * turns
}

/// Physical dimensions of one loading or matching coil
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Coil {
    turns: f64,
    diameter: f64,
    length: f64,
}

impl Coil {
    pub fn new(turns: f64, diameter: f64, length: f64) -> Coil {
        Coil {
            turns,
            diameter,
            length,
        }
    }

    pub fn turns(&self) -> f64 {
        self.turns
    }

    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    /// Lumped equivalent of this coil. `None` when there is no physical
    /// coil (zero turns), so callers skip load attachment entirely.
    pub fn load(&self) -> Option<Load> {
        if self.turns > 0.0 {
            Some(Load {
                ind: inductance(self.length, self.diameter, self.turns),
                res: resistance(self.diameter, self.turns),
            })
        } else {
            None
        }
    }
}

#[cfg(test)]
mod coil_tests {
    use super::*;
    use crate::util::comp_f64;
    use float_cmp::F64Margin;

    const MARGIN: F64Margin = F64Margin {
        epsilon: 1e-12,
        ulps: 4,
    };

    #[test]
    fn test_inductance_reference_coil() {
        // regression oracle for the boom-tip coil dimensions
        comp_f64(
            &2.2170258620689653e-3,
            &inductance(0.1, 12.7, 9.0),
            MARGIN,
            "inductance",
            "tip coil",
        );
    }

    #[test]
    fn test_resistance_reference_coil() {
        comp_f64(
            &4.30900848366376,
            &resistance(12.7, 9.0),
            MARGIN,
            "resistance",
            "tip coil",
        );
    }

    #[test]
    fn test_zero_turns() {
        assert_eq!(inductance(0.1, 12.7, 0.0), 0.0);
        assert_eq!(resistance(12.7, 0.0), 0.0);
        assert_eq!(Coil::new(0.0, 12.7, 0.1).load(), None);
        assert_eq!(Coil::default().load(), None);
    }

    #[test]
    fn test_coil_load_matches_free_functions() {
        let coil = Coil::new(9.0, 12.7, 0.1);
        let load = coil.load().unwrap();

        assert_eq!(load.ind, inductance(0.1, 12.7, 9.0));
        assert_eq!(load.res, resistance(12.7, 9.0));
    }

    #[test]
    fn test_inductance_scales_with_turns_squared() {
        let l1 = inductance(0.1, 0.05, 4.0);
        let l2 = inductance(0.1, 0.05, 8.0);

        comp_f64(&(l1 * 4.0), &l2, MARGIN, "inductance", "turns scaling");
    }

    #[test]
    fn test_load_resistive() {
        let term = Load::resistive(200.0);

        assert_eq!(term.ind, 0.0);
        assert_eq!(term.res, 200.0);
    }
}
