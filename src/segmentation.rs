use crate::consts::C;

/// Mesh density policy: converts a physical wire length into a
/// method-of-moments segment count relative to the shortest operating
/// wavelength.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segmentation {
    density: f64,
    lambda_min: f64,
}

impl Segmentation {
    /// `density` in segments per wavelength, `max_freq` in Hz
    pub fn new(density: f64, max_freq: f64) -> Segmentation {
        Segmentation {
            density,
            lambda_min: C / max_freq,
        }
    }

    pub fn density(&self) -> f64 {
        self.density
    }

    pub fn lambda_min(&self) -> f64 {
        self.lambda_min
    }

    /// Segment count for a wire of `length` meters. Never less than 1,
    /// whatever the input.
    pub fn nsegs(&self, length: f64) -> usize {
        let raw = self.density * length / self.lambda_min;
        if raw.is_finite() {
            raw.round().max(1.0) as usize
        } else {
            1
        }
    }
}
