use crate::consts::inch;
use crate::error::SpecError;
use crate::model::Model;
use crate::point::Point3d;
use crate::segmentation::Segmentation;
use crate::spec::ArraySpec;
use crate::sweep::Sweep;
use crate::variant::{Feed, Polarization, Variant};

/// Which variants an assembly emits and how the composite model is
/// dressed: ground plane, support mast and boom, boom-tip coil, sweep.
#[derive(Clone, Debug, PartialEq)]
pub struct Assembly {
    pols: Vec<Polarization>,
    driven: Vec<Polarization>,
    ground: bool,
    mast: bool,
    tip_coil: bool,
    center_elem: usize,
    mast_radius: f64,
    boom_radius: f64,
    sweep: Sweep,
    title: String,
}

impl Assembly {
    pub fn pols(&self) -> &[Polarization] {
        &self.pols
    }

    pub fn driven(&self) -> &[Polarization] {
        &self.driven
    }

    pub fn ground(&self) -> bool {
        self.ground
    }

    pub fn mast(&self) -> bool {
        self.mast
    }

    pub fn tip_coil(&self) -> bool {
        self.tip_coil
    }

    pub fn center_elem(&self) -> usize {
        self.center_elem
    }

    pub fn mast_radius(&self) -> f64 {
        self.mast_radius
    }

    pub fn boom_radius(&self) -> f64 {
        self.boom_radius
    }

    pub fn sweep(&self) -> &Sweep {
        &self.sweep
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

/// Builder for [`Assembly`]. Defaults describe the reference deployment:
/// one driven horizontal LPDA over ground with the boom-tip coil, solved
/// 8 to 20 MHz.
#[derive(Clone, Debug)]
pub struct AssemblyBuilder {
    pols: Vec<Polarization>,
    driven: Vec<Polarization>,
    ground: bool,
    mast: bool,
    tip_coil: bool,
    center_elem: usize,
    mast_radius: f64,
    boom_radius: f64,
    sweep: Sweep,
    title: String,
}

impl AssemblyBuilder {
    pub fn new() -> Self {
        AssemblyBuilder::default()
    }

    pub fn pols(mut self, val: Vec<Polarization>) -> Self {
        self.pols = val;
        self
    }

    pub fn driven(mut self, val: Vec<Polarization>) -> Self {
        self.driven = val;
        self
    }

    pub fn ground(mut self, val: bool) -> Self {
        self.ground = val;
        self
    }

    pub fn mast(mut self, val: bool) -> Self {
        self.mast = val;
        self
    }

    pub fn tip_coil(mut self, val: bool) -> Self {
        self.tip_coil = val;
        self
    }

    pub fn center_elem(mut self, val: usize) -> Self {
        self.center_elem = val;
        self
    }

    pub fn mast_radius(mut self, val: f64) -> Self {
        self.mast_radius = val;
        self
    }

    pub fn boom_radius(mut self, val: f64) -> Self {
        self.boom_radius = val;
        self
    }

    pub fn sweep(mut self, val: Sweep) -> Self {
        self.sweep = val;
        self
    }

    pub fn title(mut self, val: &str) -> Self {
        self.title = val.to_string();
        self
    }

    pub fn build(self) -> Assembly {
        Assembly {
            pols: self.pols,
            driven: self.driven,
            ground: self.ground,
            mast: self.mast,
            tip_coil: self.tip_coil,
            center_elem: self.center_elem,
            mast_radius: self.mast_radius,
            boom_radius: self.boom_radius,
            sweep: self.sweep,
            title: self.title,
        }
    }
}

impl Default for AssemblyBuilder {
    fn default() -> Self {
        AssemblyBuilder {
            pols: vec![Polarization::Horizontal],
            driven: vec![Polarization::Horizontal],
            ground: true,
            mast: false,
            tip_coil: true,
            center_elem: 4,
            mast_radius: inch(1.0),
            boom_radius: inch(0.5),
            sweep: Sweep::new(8.0, 0.05, 241),
            title: "sabre 608 log periodic antenna".to_string(),
        }
    }
}

/// Composes one or more antenna variants plus the optional support
/// structure into a single model, and renders the deck. Wire order is
/// fixed: variants in configuration order, then mast and boom.
#[derive(Clone, Debug)]
pub struct Assembler<'a> {
    spec: &'a ArraySpec,
    assembly: Assembly,
}

impl<'a> Assembler<'a> {
    pub fn new(spec: &'a ArraySpec, assembly: Assembly) -> Assembler<'a> {
        Assembler { spec, assembly }
    }

    pub fn assembly(&self) -> &Assembly {
        &self.assembly
    }

    /// Build the composite wire list. All configuration errors surface
    /// here, before the first wire exists.
    pub fn assemble(&self) -> Result<Model, SpecError> {
        self.validate()?;

        let seg = self.spec.segmentation();
        let mut m = Model::new(self.spec.feed_radius(), self.assembly.ground);
        for pol in &self.assembly.pols {
            let feed = if self.assembly.driven.contains(pol) {
                Feed::Driven
            } else {
                Feed::Terminated
            };
            Variant::new(self.spec, *pol, feed, self.assembly.tip_coil).build(&seg, &mut m);
        }

        if self.assembly.mast {
            self.add_support(&seg, &mut m);
        }

        Ok(m)
    }

    /// Full deck text: comment block plus cards
    pub fn deck(&self) -> Result<String, SpecError> {
        let m = self.assemble()?;
        let mut out = self.comments();
        out.push_str(&m.deck(&self.assembly.sweep));
        Ok(out)
    }

    fn validate(&self) -> Result<(), SpecError> {
        if self.assembly.pols.is_empty() {
            return Err(SpecError::NoPolarization);
        }
        for (i, pol) in self.assembly.pols.iter().enumerate() {
            if self.assembly.pols[..i].contains(pol) {
                return Err(SpecError::DuplicatePolarization(pol.name()));
            }
        }
        for pol in &self.assembly.driven {
            if !self.assembly.pols.contains(pol) {
                return Err(SpecError::DrivenNotConfigured(pol.name()));
            }
        }
        if self.assembly.center_elem >= self.spec.nelem() {
            return Err(SpecError::CenterOutOfRange {
                index: self.assembly.center_elem,
                nelem: self.spec.nelem(),
            });
        }
        Ok(())
    }

    /// Vertical mast from the ground to the boom at the center element,
    /// plus boom pieces out to the first and last elements. Zero-length
    /// pieces are skipped.
    fn add_support(&self, seg: &Segmentation, m: &mut Model) {
        let xs = self.spec.boom_positions();
        let off = self.spec.boom_offset();
        let h = self.spec.height();
        let x0 = xs[0] + off;
        let xn = xs[xs.len() - 1] + off;
        let xc = xs[self.assembly.center_elem] + off;

        m.set_radius(self.assembly.mast_radius);
        m.add_wire(
            seg.nsegs(h),
            Point3d::new(xc, 0.0, 0.0),
            Point3d::new(xc, 0.0, h),
        );

        m.set_radius(self.assembly.boom_radius);
        if xc > x0 {
            m.add_wire(
                seg.nsegs(xc - x0),
                Point3d::new(x0, 0.0, h),
                Point3d::new(xc, 0.0, h),
            );
        }
        if xn > xc {
            m.add_wire(
                seg.nsegs(xn - xc),
                Point3d::new(xc, 0.0, h),
                Point3d::new(xn, 0.0, h),
            );
        }
        m.set_radius(self.spec.feed_radius());
    }

    fn comments(&self) -> String {
        let onoff = |v: bool| if v { "on" } else { "off" };
        let mut out = String::new();
        out.push_str("CM ---------------------------------------------------\n");
        out.push_str(&format!("CM NEC model for {}\n", self.assembly.title));
        for pol in &self.assembly.pols {
            let role = if self.assembly.driven.contains(pol) {
                "driven"
            } else {
                "terminated"
            };
            out.push_str(&format!("CM   {}: {}\n", pol, role));
        }
        out.push_str(&format!(
            "CM   ground: {}  mast: {}  tip coil: {}\n",
            onoff(self.assembly.ground),
            onoff(self.assembly.mast),
            onoff(self.assembly.tip_coil)
        ));
        out.push_str("CM ---------------------------------------------------\n");
        out.push_str("CE\n");
        out
    }
}
