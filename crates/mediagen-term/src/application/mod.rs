//! Application layer driving the terminal session.
//!
//! This module runs the interactive browse loop, turning events into picker
//! updates and rendering the result after each one.

pub mod browse;
