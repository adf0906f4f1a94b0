#![allow(unused_macros)]
use rstest_reuse::template;

// This creates a testing "template" to allow for the injection of each
// backend implementation

#[template]
#[rstest]
#[case::rational(netcalc_solver::rational::RationalBackend::default())]
#[case::bigrational(netcalc_solver::bigrational::BigRationalBackend::default())]
#[case::float(netcalc_solver::float::FloatBackend::default())]
pub fn all_backends(#[case] backend: impl netcalc_solver::Backend) -> () {}
