//! # Connect Four
//!
//! Connect Four against a computer opponent with two difficulty levels.
//! Features a terminal UI built with Ratatui, a line-based console mode and a
//! headless arena for measuring the opponents.
//!
//! ## Modules
//!
//! - [`game`]: Board, gravity and win/draw detection
//! - [`ai`]: `Strategy` trait and the two opponents
//! - [`controller`]: Turn sequencing between player, board and opponent
//! - [`display`]: The `GameDisplay` boundary and a headless implementation
//! - [`ui`]: Terminal UI and console front-ends
//! - [`arena`]: Batch games against a random player
//! - [`config`]: TOML configuration loading and validation
//! - [`logging`]: `tracing` subscriber setup
//! - [`error`]: Structured error types

pub mod ai;
pub mod arena;
pub mod config;
pub mod controller;
pub mod display;
pub mod error;
pub mod game;
pub mod logging;
pub mod ui;
