// src/engine/mod.rs
//! The ingestion loop: command dispatch over a line-oriented stream.

pub mod command;
pub mod runner;

pub use command::Command;
pub use runner::{Engine, SessionStats};
