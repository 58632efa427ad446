#![doc = include_str!("../README.md")]

mod functions;
mod report;

pub use functions::{plus, plus_plus};
pub use report::Report;
