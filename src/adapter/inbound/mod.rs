//! Driving adapters: the Concourse command line.

pub mod cli;
pub mod concourse;
