use crate::coil::Coil;
use crate::consts::{inch, INCHES_PER_M};
use crate::error::SpecError;
use crate::segmentation::Segmentation;
use ndarray::{array, Array1};

/// Per-element geometry table plus the scalar constants describing one
/// LPDA design. All columns run shortest element (feed end) to longest
/// (boom tip) and must be the same length.
#[derive(Clone, Debug, PartialEq)]
pub struct ArraySpec {
    elem_len: Array1<f64>,
    elem_space: Array1<f64>,
    elem_radius: Array1<f64>,
    coil_turns: Array1<f64>,
    coil_diameter: Array1<f64>,
    coil_length: Array1<f64>,
    height: f64,
    dipole_gap: f64,
    feed_line_gap: f64,
    feed_boom_gap: f64,
    boom_offset: f64,
    feed_radius: f64,
    termination: f64,
    density: f64,
    max_freq: f64,
    end_coil: Coil,
}

impl ArraySpec {
    /// The sabre 608 reference design: 10 elements, dimensions taken off
    /// the manufacturer drawings in inches.
    pub fn sabre608() -> ArraySpec {
        let elem_space = array![
            0.0, 28.75, 33.75, 39.625, 46.625, 54.75, 48.5, 59.875, 66.75, 74.09375
        ] / INCHES_PER_M;
        let elem_len = array![
            174.25, 204.75, 241.25, 283.625, 333.6875, 392.125, 467.375, 566.125, 588.3125,
            588.3125
        ] / INCHES_PER_M;
        let n = elem_len.len();

        ArraySpec {
            elem_len,
            elem_space,
            elem_radius: Array1::from_elem(n, inch(0.5)),
            coil_turns: Array1::zeros(n),
            coil_diameter: Array1::zeros(n),
            coil_length: Array1::zeros(n),
            height: 15.24,
            dipole_gap: 0.40,
            feed_line_gap: 0.1,
            feed_boom_gap: 0.05,
            boom_offset: 0.2,
            feed_radius: inch(1.0 / 16.0),
            termination: 200.0,
            density: 300.0,
            max_freq: 20e6,
            end_coil: Coil::new(9.0, 12.7, 0.1),
        }
    }

    pub fn nelem(&self) -> usize {
        self.elem_len.len()
    }

    pub fn elem_len(&self) -> &Array1<f64> {
        &self.elem_len
    }

    pub fn elem_space(&self) -> &Array1<f64> {
        &self.elem_space
    }

    pub fn elem_radius(&self) -> &Array1<f64> {
        &self.elem_radius
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn dipole_gap(&self) -> f64 {
        self.dipole_gap
    }

    /// Separation between the two feed-line conductors, along the arm axis
    pub fn feed_line_gap(&self) -> f64 {
        self.feed_line_gap
    }

    /// Stagger of the two feed-line conductors along the boom
    pub fn feed_boom_gap(&self) -> f64 {
        self.feed_boom_gap
    }

    pub fn boom_offset(&self) -> f64 {
        self.boom_offset
    }

    pub fn feed_radius(&self) -> f64 {
        self.feed_radius
    }

    pub fn termination(&self) -> f64 {
        self.termination
    }

    pub fn density(&self) -> f64 {
        self.density
    }

    pub fn max_freq(&self) -> f64 {
        self.max_freq
    }

    pub fn end_coil(&self) -> Coil {
        self.end_coil
    }

    /// Matching coil at element `i`'s feed taps
    pub fn feed_coil(&self, i: usize) -> Coil {
        Coil::new(self.coil_turns[i], self.coil_diameter[i], self.coil_length[i])
    }

    /// Boom positions of every element: running sum of `elem_space`
    pub fn boom_positions(&self) -> Array1<f64> {
        let mut acc = 0.0;
        self.elem_space.mapv(|s| {
            acc += s;
            acc
        })
    }

    pub fn segmentation(&self) -> Segmentation {
        Segmentation::new(self.density, self.max_freq)
    }
}

/// Builds a validated [`ArraySpec`]. Column length mismatches, negative
/// spacings, and non-positive mesh scalars fail at `build()` time, before
/// any geometry exists.
#[derive(Clone, Debug)]
pub struct ArraySpecBuilder {
    elem_len: Array1<f64>,
    elem_space: Array1<f64>,
    elem_radius: Array1<f64>,
    coil_turns: Array1<f64>,
    coil_diameter: Array1<f64>,
    coil_length: Array1<f64>,
    height: f64,
    dipole_gap: f64,
    feed_line_gap: f64,
    feed_boom_gap: f64,
    boom_offset: f64,
    feed_radius: f64,
    termination: f64,
    density: f64,
    max_freq: f64,
    end_coil: Coil,
}

impl ArraySpecBuilder {
    pub fn new() -> Self {
        ArraySpecBuilder::default()
    }

    /// Start from an existing design and override columns from there
    pub fn from_spec(spec: &ArraySpec) -> Self {
        ArraySpecBuilder {
            elem_len: spec.elem_len.clone(),
            elem_space: spec.elem_space.clone(),
            elem_radius: spec.elem_radius.clone(),
            coil_turns: spec.coil_turns.clone(),
            coil_diameter: spec.coil_diameter.clone(),
            coil_length: spec.coil_length.clone(),
            height: spec.height,
            dipole_gap: spec.dipole_gap,
            feed_line_gap: spec.feed_line_gap,
            feed_boom_gap: spec.feed_boom_gap,
            boom_offset: spec.boom_offset,
            feed_radius: spec.feed_radius,
            termination: spec.termination,
            density: spec.density,
            max_freq: spec.max_freq,
            end_coil: spec.end_coil,
        }
    }

    pub fn elem_len(mut self, val: Array1<f64>) -> Self {
        self.elem_len = val;
        self
    }

    pub fn elem_space(mut self, val: Array1<f64>) -> Self {
        self.elem_space = val;
        self
    }

    pub fn elem_radius(mut self, val: Array1<f64>) -> Self {
        self.elem_radius = val;
        self
    }

    pub fn coil_turns(mut self, val: Array1<f64>) -> Self {
        self.coil_turns = val;
        self
    }

    pub fn coil_diameter(mut self, val: Array1<f64>) -> Self {
        self.coil_diameter = val;
        self
    }

    pub fn coil_length(mut self, val: Array1<f64>) -> Self {
        self.coil_length = val;
        self
    }

    pub fn height(mut self, val: f64) -> Self {
        self.height = val;
        self
    }

    pub fn dipole_gap(mut self, val: f64) -> Self {
        self.dipole_gap = val;
        self
    }

    pub fn feed_line_gap(mut self, val: f64) -> Self {
        self.feed_line_gap = val;
        self
    }

    pub fn feed_boom_gap(mut self, val: f64) -> Self {
        self.feed_boom_gap = val;
        self
    }

    pub fn boom_offset(mut self, val: f64) -> Self {
        self.boom_offset = val;
        self
    }

    pub fn feed_radius(mut self, val: f64) -> Self {
        self.feed_radius = val;
        self
    }

    pub fn termination(mut self, val: f64) -> Self {
        self.termination = val;
        self
    }

    pub fn density(mut self, val: f64) -> Self {
        self.density = val;
        self
    }

    pub fn max_freq(mut self, val: f64) -> Self {
        self.max_freq = val;
        self
    }

    pub fn end_coil(mut self, val: Coil) -> Self {
        self.end_coil = val;
        self
    }

    pub fn build(self) -> Result<ArraySpec, SpecError> {
        let n = self.elem_len.len();
        if n == 0 {
            return Err(SpecError::EmptyTable);
        }

        let columns = [
            ("elem_space", self.elem_space.len()),
            ("elem_radius", self.elem_radius.len()),
            ("coil_turns", self.coil_turns.len()),
            ("coil_diameter", self.coil_diameter.len()),
            ("coil_length", self.coil_length.len()),
        ];
        for (field, found) in columns {
            if found != n {
                return Err(SpecError::ColumnLengthMismatch {
                    field,
                    expected: n,
                    found,
                });
            }
        }

        for (i, s) in self.elem_space.iter().enumerate() {
            if *s < 0.0 {
                return Err(SpecError::NegativeSpacing {
                    index: i,
                    value: *s,
                });
            }
        }

        if self.density <= 0.0 {
            return Err(SpecError::BadScalar {
                field: "density",
                value: self.density,
            });
        }
        if self.max_freq <= 0.0 {
            return Err(SpecError::BadScalar {
                field: "max_freq",
                value: self.max_freq,
            });
        }

        Ok(ArraySpec {
            elem_len: self.elem_len,
            elem_space: self.elem_space,
            elem_radius: self.elem_radius,
            coil_turns: self.coil_turns,
            coil_diameter: self.coil_diameter,
            coil_length: self.coil_length,
            height: self.height,
            dipole_gap: self.dipole_gap,
            feed_line_gap: self.feed_line_gap,
            feed_boom_gap: self.feed_boom_gap,
            boom_offset: self.boom_offset,
            feed_radius: self.feed_radius,
            termination: self.termination,
            density: self.density,
            max_freq: self.max_freq,
            end_coil: self.end_coil,
        })
    }
}

impl Default for ArraySpecBuilder {
    fn default() -> Self {
        ArraySpecBuilder::from_spec(&ArraySpec::sabre608())
    }
}
