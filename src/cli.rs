//! CLI domain: parse and route only; the core library stays CLI-free.

mod parse;
mod route;

pub use parse::{Cli, Commands, DateResolution};
pub use route::run;
