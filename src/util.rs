use crate::point::Point3d;
use float_cmp::{approx_eq, F64Margin};

pub fn comp_f64(exemplar: &f64, calc: &f64, precision: F64Margin, test: &str, idx: &str) {
    assert!(
        approx_eq!(f64, *calc, *exemplar, precision),
        " Failed test {} at location {}\n  exemplar: {}\n      calc: {}",
        test,
        idx,
        exemplar,
        calc
    );
}

pub fn comp_vec_f64(exemplar: &[f64], calc: &[f64], precision: F64Margin, test: &str) {
    assert!(
        exemplar.len() == calc.len(),
        " Failed test {} length\n  exemplar: {}\n      calc: {}",
        test,
        exemplar.len(),
        calc.len()
    );
    for k in 0..calc.len() {
        comp_f64(
            &exemplar[k],
            &calc[k],
            precision,
            test,
            format!("({})", k).as_str(),
        );
    }
}

pub fn comp_pt3(exemplar: &Point3d, calc: &Point3d, precision: F64Margin, test: &str, idx: &str) {
    comp_f64(
        &exemplar.x,
        &calc.x,
        precision,
        test,
        &(idx.to_owned() + ".x"),
    );
    comp_f64(
        &exemplar.y,
        &calc.y,
        precision,
        test,
        &(idx.to_owned() + ".y"),
    );
    comp_f64(
        &exemplar.z,
        &calc.z,
        precision,
        test,
        &(idx.to_owned() + ".z"),
    );
}

#[cfg(test)]
mod util_tests {
    use super::*;

    #[test]
    fn test_comp_f64_passes_close_values() {
        comp_f64(
            &1.0,
            &(1.0 + 1e-16),
            F64Margin::default(),
            "comp_f64",
            "0",
        );
    }

    #[test]
    #[should_panic]
    fn test_comp_f64_catches_far_values() {
        comp_f64(&1.0, &1.1, F64Margin::default(), "comp_f64", "0");
    }

    #[test]
    fn test_comp_pt3() {
        let a = Point3d::new(1.0, 2.0, 3.0);
        comp_pt3(&a, &a, F64Margin::default(), "comp_pt3", "a");
    }
}
