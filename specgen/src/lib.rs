//! Command-line front ends for specgen

pub mod cli;
