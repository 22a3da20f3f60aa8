//! CLI module graph.

pub mod check;
pub mod command;
pub mod get;
pub mod output;
pub mod put;
