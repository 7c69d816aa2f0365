//! Terminal front end built on ratatui and crossterm.
//!
//! [`app`] holds the state and input handling, [`ui`] renders it and
//! [`controller`] runs the event loop.

pub mod app;
pub mod controller;
pub mod ui;
