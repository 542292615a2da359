#![warn(clippy::all)]

mod grid;
mod utils;

pub use grid::{Cells, Grid};
pub use utils::{BorderPolicy, GridConfig, GridError, NiceInt};
