//! Core UI functionality for BuscadorDoc.
//!
//! This module contains the building blocks the screen is made of: the action
//! vocabulary, the pure session state machine, the component abstraction,
//! terminal event polling and background request management.
//!
//! # Module Components
//!
//! - [`actions`] - Actions, dialogs and the effects a transition can request
//! - [`state`] - Session state and its transition function
//! - [`component`] - Base component trait and rendering abstractions
//! - [`event_handler`] - Keyboard, mouse and tick events
//! - [`task_manager`] - Background server requests
//!
//! # Architecture
//!
//! 1. **Components** turn input into [`Action`]s and render themselves
//! 2. **State** applies actions and returns [`Effect`]s, without doing I/O
//! 3. **Effects** are carried out by the app component through the [`TaskManager`]
//! 4. **Completions** come back as actions and go through the same state function

pub mod actions;
pub mod component;
pub mod event_handler;
pub mod state;
pub mod task_manager;

pub use actions::{Action, DialogType, Effect, Focus};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
pub use state::{AppState, ResultsView};
pub use task_manager::{TaskId, TaskManager};
