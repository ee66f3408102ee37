//! BuscadorDoc - A terminal client for the BuscadorDoc search server
//!
//! Search a fixed internal corpus or an uploaded spreadsheet, and browse the
//! matches as flip cards. The server owns the data; the client keeps only the
//! state of one session.
//!
//! # Modules
//!
//! * [`backend`] - Server interface and its HTTP implementation
//! * [`cards`] - Turning result records into cards
//! * [`config`] - Application configuration management
//! * [`models`] - Data sources, dataset status and search results
//! * [`welcome`] - Welcome curtain sequencing
//! * [`ui`] - Terminal user interface components and rendering

/// Server interface and wire formats
pub mod backend;

/// Record-to-card mapping
pub mod cards;

/// Command-line arguments
pub mod cli;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Shared domain types
pub mod models;

/// Terminal user interface components and rendering
pub mod ui;

/// Greeting and curtain timing
pub mod welcome;
