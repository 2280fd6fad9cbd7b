use crate::coil::Load;
use crate::point::Point3d;
use crate::sweep::Sweep;

/// A single straight conductor in the mesh. Created once during assembly,
/// never mutated after the model is finished.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wire {
    tag: usize,
    segs: usize,
    start: Point3d,
    stop: Point3d,
    radius: f64,
    excite: Option<f64>,
    load: Option<Load>,
}

impl Wire {
    pub fn tag(&self) -> usize {
        self.tag
    }

    pub fn segs(&self) -> usize {
        self.segs
    }

    pub fn start(&self) -> Point3d {
        self.start
    }

    pub fn stop(&self) -> Point3d {
        self.stop
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Source phase in degrees, if this wire carries the excitation
    pub fn excitation(&self) -> Option<f64> {
        self.excite
    }

    pub fn load(&self) -> Option<Load> {
        self.load
    }

    pub fn length(&self) -> f64 {
        self.start.dist(&self.stop)
    }

    /// Mark this wire as a voltage-source excitation at its middle segment
    pub fn feed_at_middle(&mut self) {
        self.excite = Some(0.0);
    }

    /// Excitation with a source phase in degrees, for phased dual-driven
    /// arrays
    pub fn feed_at_middle_phased(&mut self, deg: f64) {
        self.excite = Some(deg);
    }

    /// Attach a series RL load at the middle segment
    pub fn load_at_middle(&mut self, ind: f64, res: f64) {
        self.load = Some(Load::new(ind, res));
    }

    /// 1-based index of the segment holding excitations and loads
    fn middle_seg(&self) -> usize {
        (self.segs + 1) / 2
    }
}

/// Accumulates wires with a current drawing radius and serializes the
/// result as an NEC card deck. The radius context is a builder field,
/// never global state, so independent models never interact.
#[derive(Clone, Debug, PartialEq)]
pub struct Model {
    radius: f64,
    ground: bool,
    wires: Vec<Wire>,
}

impl Model {
    pub fn new(radius: f64, ground: bool) -> Model {
        Model {
            radius,
            ground,
            wires: Vec::new(),
        }
    }

    /// Radius applied to subsequently added wires
    pub fn set_radius(&mut self, radius: f64) {
        self.radius = radius;
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn ground(&self) -> bool {
        self.ground
    }

    pub fn wires(&self) -> &[Wire] {
        &self.wires
    }

    /// Append a wire at the current radius. Segment counts are clamped to
    /// at least 1. The returned handle annotates excitation or loading:
    ///
    /// ```
    /// use lpdakit::{model::Model, pt};
    ///
    /// let mut m = Model::new(0.0015875, false);
    /// m.add_wire(2, pt!(0.0, 0.1, 15.29), pt!(0.0, 0.0, 15.29))
    ///     .feed_at_middle();
    /// ```
    pub fn add_wire(&mut self, segs: usize, start: Point3d, stop: Point3d) -> &mut Wire {
        let wire = Wire {
            tag: self.wires.len() + 1,
            segs: segs.max(1),
            start,
            stop,
            radius: self.radius,
            excite: None,
            load: None,
        };
        self.wires.push(wire);
        let last = self.wires.len() - 1;
        &mut self.wires[last]
    }

    /// Serialize geometry, excitation, load, and frequency cards in a
    /// fixed order. Identical models produce byte-identical decks.
    pub fn deck(&self, sweep: &Sweep) -> String {
        let mut out = String::new();

        for w in &self.wires {
            out.push_str(&format!(
                "GW{}{}{}{}{}{}{}{}{}\n",
                int(w.tag),
                int(w.segs),
                flt(w.start.x),
                flt(w.start.y),
                flt(w.start.z),
                flt(w.stop.x),
                flt(w.stop.y),
                flt(w.stop.z),
                sci(w.radius)
            ));
        }

        if self.ground {
            out.push_str("GE    1\n");
            out.push_str("GN    1\n");
        } else {
            out.push_str("GE    0\n");
        }

        for w in &self.wires {
            if let Some(deg) = w.excite {
                let phase = deg.to_radians();
                out.push_str(&format!(
                    "EX    0{}{}    0{}{}\n",
                    int(w.tag),
                    int(w.middle_seg()),
                    flt(phase.cos()),
                    flt(phase.sin())
                ));
            }
        }

        for w in &self.wires {
            if let Some(load) = w.load {
                out.push_str(&format!(
                    "LD    0{}{}{}{}{}{}\n",
                    int(w.tag),
                    int(w.middle_seg()),
                    int(w.middle_seg()),
                    flt(load.res),
                    sci(load.ind),
                    sci(0.0)
                ));
            }
        }

        out.push_str(&format!(
            "FR    0{}    0    0{}{}\n",
            int(sweep.npts()),
            flt(sweep.start()),
            flt(sweep.step())
        ));
        out.push_str("EN\n");

        out
    }
}

fn int(val: usize) -> String {
    format!("{:>5}", val)
}

fn flt(val: f64) -> String {
    format!("{:>11.5}", val)
}

fn sci(val: f64) -> String {
    format!("{:>13.5E}", val)
}
