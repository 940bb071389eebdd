pub mod math;
pub mod model;
pub mod io;
pub mod plot;

pub use model::cwr::{CwrModel, CwrParams, CwrPoint, CwrSeries};
