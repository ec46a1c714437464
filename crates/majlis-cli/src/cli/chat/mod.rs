//! Interactive chat session: input handling, slash commands, rendering,
//! and the main loop.

pub mod commands;
pub mod input;
pub mod loop_runner;
pub mod renderer;
