use std::fmt;

/// Configuration errors caught before any geometry is emitted
#[derive(Debug, PartialEq)]
pub enum SpecError {
    BadScalar {
        field: &'static str,
        value: f64,
    },
    CenterOutOfRange {
        index: usize,
        nelem: usize,
    },
    ColumnLengthMismatch {
        field: &'static str,
        expected: usize,
        found: usize,
    },
    DrivenNotConfigured(&'static str),
    DuplicatePolarization(&'static str),
    EmptyTable,
    NegativeSpacing {
        index: usize,
        value: f64,
    },
    NoPolarization,
}

impl fmt::Display for SpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecError::BadScalar { field, value } => {
                write!(f, "spec scalar '{}' must be positive, got {}", field, value)
            }
            SpecError::CenterOutOfRange { index, nelem } => {
                write!(
                    f,
                    "support center element {} out of range for {} elements",
                    index, nelem
                )
            }
            SpecError::ColumnLengthMismatch {
                field,
                expected,
                found,
            } => {
                write!(
                    f,
                    "spec column '{}' has {} entries, expected {}",
                    field, found, expected
                )
            }
            SpecError::DrivenNotConfigured(name) => {
                write!(f, "driven polarization '{}' is not in the assembly", name)
            }
            SpecError::DuplicatePolarization(name) => {
                write!(f, "polarization '{}' listed more than once", name)
            }
            SpecError::EmptyTable => write!(f, "spec element table is empty"),
            SpecError::NegativeSpacing { index, value } => {
                write!(
                    f,
                    "spec column 'elem_space' is negative at element {}: {}",
                    index, value
                )
            }
            SpecError::NoPolarization => write!(f, "assembly selects no polarizations"),
        }
    }
}

impl std::error::Error for SpecError {}
