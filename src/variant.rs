use crate::model::Model;
use crate::point::Point3d;
use crate::segmentation::Segmentation;
use crate::spec::ArraySpec;
use simple_error::{bail, SimpleError};
use std::f64::consts::FRAC_1_SQRT_2;
use std::fmt;

/// Orientation of one LPDA instance. The lateral geometry lives in the
/// y-z plane; the boom always runs along x. Offsets are fixed constants
/// per orientation, so only these four angles are supported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Polarization {
    /// 0 degrees, arms along y
    Horizontal,
    /// 45 degrees
    SlantRight,
    /// 90 degrees, arms along z
    Vertical,
    /// 135 degrees
    SlantLeft,
}

impl Polarization {
    pub fn from_deg(val: f64) -> Result<Polarization, SimpleError> {
        if val == 0.0 {
            Ok(Polarization::Horizontal)
        } else if val == 45.0 {
            Ok(Polarization::SlantRight)
        } else if val == 90.0 {
            Ok(Polarization::Vertical)
        } else if val == 135.0 {
            Ok(Polarization::SlantLeft)
        } else {
            bail!(
                "unsupported polarization angle {} (supported: 0, 45, 90, 135)",
                val
            );
        }
    }

    pub fn angle_deg(&self) -> f64 {
        match self {
            Polarization::Horizontal => 0.0,
            Polarization::SlantRight => 45.0,
            Polarization::Vertical => 90.0,
            Polarization::SlantLeft => 135.0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Polarization::Horizontal => "horizontal",
            Polarization::SlantRight => "slant-right",
            Polarization::Vertical => "vertical",
            Polarization::SlantLeft => "slant-left",
        }
    }

    /// Arm axis direction (uy, uz): the cos/sin of the orientation angle
    pub fn axis(&self) -> (f64, f64) {
        match self {
            Polarization::Horizontal => (1.0, 0.0),
            Polarization::SlantRight => (FRAC_1_SQRT_2, FRAC_1_SQRT_2),
            Polarization::Vertical => (0.0, 1.0),
            Polarization::SlantLeft => (-FRAC_1_SQRT_2, FRAC_1_SQRT_2),
        }
    }

    /// (y, z) offset of the feed-pair center, z relative to boom height
    pub fn feed_offset(&self) -> (f64, f64) {
        match self {
            Polarization::Horizontal => (0.05, 0.05),
            Polarization::SlantRight => (-0.0354, 0.0354),
            Polarization::Vertical => (-0.05, 0.05),
            Polarization::SlantLeft => (0.0354, 0.0354),
        }
    }

    /// (y, z) offset of the dipole center, z relative to boom height
    pub fn elem_offset(&self) -> (f64, f64) {
        match self {
            Polarization::Horizontal => (0.0, 0.10),
            Polarization::SlantRight => (-0.0707, 0.0707),
            Polarization::Vertical => (-0.10, 0.0),
            Polarization::SlantLeft => (0.0707, 0.0707),
        }
    }
}

impl fmt::Display for Polarization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Feed role of a variant inside an assembly
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Feed {
    /// Voltage source at the element-0 feed bridge
    Driven,
    /// Resistive termination at the element-0 feed bridge
    Terminated,
}

/// One LPDA instance at a fixed orientation. `build` emits the ordered
/// wire sequence for all elements into a model.
#[derive(Clone, Copy, Debug)]
pub struct Variant<'a> {
    spec: &'a ArraySpec,
    pol: Polarization,
    feed: Feed,
    tip_coil: bool,
}

impl<'a> Variant<'a> {
    pub fn new(spec: &'a ArraySpec, pol: Polarization, feed: Feed, tip_coil: bool) -> Variant<'a> {
        Variant {
            spec,
            pol,
            feed,
            tip_coil,
        }
    }

    pub fn pol(&self) -> Polarization {
        self.pol
    }

    pub fn feed(&self) -> Feed {
        self.feed
    }

    /// Emit every wire of this variant, element by element: feed-line
    /// pairs toward the next element, the element-0 feed bridge (source or
    /// termination), the boom-tip coil bridge, dipole arms, and the
    /// feed-to-arm connectors with the alternating phase-reversal pattern.
    pub fn build(&self, seg: &Segmentation, m: &mut Model) {
        let spec = self.spec;
        let n = spec.nelem();
        let xs = spec.boom_positions();
        let (uy, uz) = self.pol.axis();
        let (fy, fz) = self.pol.feed_offset();
        let (ey, ez) = self.pol.elem_offset();
        let h = spec.height();
        let lat = spec.feed_line_gap() / 2.0;
        let stag = spec.feed_boom_gap() / 2.0;
        let gap = spec.dipole_gap() / 2.0;

        m.set_radius(spec.feed_radius());
        for i in 0..n {
            let x = xs[i] + spec.boom_offset();

            // feed-line conductor taps at this element
            let f0 = Point3d::new(x + stag, fy + lat * uy, h + fz + lat * uz);
            let f1 = Point3d::new(x - stag, fy - lat * uy, h + fz - lat * uz);

            if i + 1 < n {
                let span = spec.elem_space()[i + 1];
                let segs = seg.nsegs(span);
                let dx = Point3d::new(span, 0.0, 0.0);
                m.add_wire(segs, f0, f0 + dx);
                m.add_wire(segs, f1, f1 + dx);
            }

            if i == 0 {
                let segs = seg.nsegs(spec.feed_line_gap());
                let bridge = m.add_wire(segs, f0, f1);
                match self.feed {
                    Feed::Driven => bridge.feed_at_middle(),
                    Feed::Terminated => bridge.load_at_middle(0.0, spec.termination()),
                }
            }

            // improvised matching network across the pair at the boom tip
            if self.tip_coil && i + 2 == n {
                if let Some(load) = spec.end_coil().load() {
                    let segs = seg.nsegs(spec.feed_line_gap());
                    m.add_wire(segs, f0, f1).load_at_middle(load.ind, load.res);
                }
            }

            // dipole arms, gap point outward to the tip
            let half_len = spec.elem_len()[i] / 2.0;
            let arm0 = Point3d::new(x, ey + gap * uy, h + ez + gap * uz);
            let tip0 = Point3d::new(x, ey + half_len * uy, h + ez + half_len * uz);
            let arm1 = Point3d::new(x, ey - gap * uy, h + ez - gap * uz);
            let tip1 = Point3d::new(x, ey - half_len * uy, h + ez - half_len * uz);
            let arm_segs = seg.nsegs(half_len);

            m.set_radius(spec.elem_radius()[i]);
            m.add_wire(arm_segs, arm0, tip0);
            m.add_wire(arm_segs, arm1, tip1);
            m.set_radius(spec.feed_radius());

            // even elements cross the connection, odd run straight
            let (t0, t1) = if i % 2 == 1 {
                (arm0, arm1)
            } else {
                (arm1, arm0)
            };
            let conn_segs = seg.nsegs(f0.dist(&t0));
            let coil_load = spec.feed_coil(i).load();
            for (tap, arm) in [(f0, t0), (f1, t1)] {
                let wire = m.add_wire(conn_segs, tap, arm);
                if let Some(load) = coil_load {
                    wire.load_at_middle(load.ind, load.res);
                }
            }
        }
    }
}
