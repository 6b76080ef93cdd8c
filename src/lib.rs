//! Kick Start sample problem: split candy bags evenly among kids and report
//! how many candies are left over in each case.

pub mod driver;
pub mod error;
pub mod io;
pub mod solver;

pub use driver::run;
pub use error::{Error, Result};
