//! lpdakit prelude.
//!
//! This module contains the most used types, functions, and macros that
//! you can import easily as a group.
//!
//! ```
//! use lpdakit::prelude::*;
//!
//! ```

#[doc(no_inline)]
pub use crate::assembler::{Assembler, Assembly, AssemblyBuilder};

#[doc(no_inline)]
pub use crate::coil::{inductance, resistance, Coil, Load};

#[doc(no_inline)]
pub use crate::consts::{inch, C, INCHES_PER_M};

#[doc(no_inline)]
pub use crate::error::SpecError;

#[doc(no_inline)]
pub use crate::file::{echo_deck, write_deck};

#[doc(no_inline)]
pub use crate::model::{Model, Wire};

#[doc(no_inline)]
pub use crate::point::Point3d;

#[doc(no_inline)]
pub use crate::segmentation::Segmentation;

#[doc(no_inline)]
pub use crate::spec::{ArraySpec, ArraySpecBuilder};

#[doc(no_inline)]
pub use crate::sweep::Sweep;

#[doc(no_inline)]
pub use crate::variant::{Feed, Polarization, Variant};
