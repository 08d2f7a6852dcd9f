//! pennyctl library: configuration, commands and text rendering for the
//! Penny progression CLI.

pub mod commands;
pub mod config;
pub mod render;
