use ndarray::Array1;
use simple_error::{bail, SimpleError};

/// Linear frequency plan for the emitted deck, values in MHz. Solver
/// frequencies are `start + k*step` for k in `[0, npts)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sweep {
    start: f64,
    step: f64,
    npts: usize,
}

impl Sweep {
    pub fn new(start: f64, step: f64, npts: usize) -> Sweep {
        Sweep { start, step, npts }
    }

    /// Plan from an inclusive `[start, stop]` range. The stop frequency is
    /// always part of the plan.
    pub fn from_lin_range(start: f64, stop: f64, step: f64) -> Result<Sweep, SimpleError> {
        if step <= 0.0 {
            bail!("sweep step must be positive, got {}", step);
        }
        if stop < start {
            bail!("sweep stop {} is below start {}", stop, start);
        }

        Ok(Sweep {
            start,
            step,
            npts: ((stop - start) / step).round() as usize + 1,
        })
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn npts(&self) -> usize {
        self.npts
    }

    pub fn freq_at(&self, pt: usize) -> f64 {
        self.start + pt as f64 * self.step
    }

    pub fn stop(&self) -> f64 {
        self.freq_at(self.npts.saturating_sub(1))
    }

    pub fn freqs(&self) -> Array1<f64> {
        Array1::from_shape_fn(self.npts, |k| self.freq_at(k))
    }
}
