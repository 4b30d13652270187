//! Terminal User Interface for reviewing a single drink.
//!
//! This module provides an interactive TUI for reading a drink's details,
//! managing its comments, and rating it, using the bubbletea-rs framework.
//!
//! # Architecture
//!
//! The TUI follows the Model-View-Update (MVU) pattern:
//!
//! - **Model**: Application state in [`app::DrinkReviewApp`]
//! - **View**: Rendering logic in each component's `view()` method
//! - **Update**: Message-driven state transitions in `update()`
//!
//! # Modules
//!
//! - [`app`]: Main application model and entry point
//! - [`messages`]: Message types for the update loop
//! - [`state`]: Text buffers for the comment form and edits
//! - [`components`]: Reusable UI components
//! - [`input`]: Key-to-message mapping for input handling
//! - [`storage`]: Start-up context handed to `init()`
//!
//! # Start-up Context
//!
//! Because bubbletea-rs's `Model` trait requires `init()` to be a static
//! function, the drink identifier and gateway are stored at module level.
//! Call [`set_review_context`] before starting the program, and
//! `DrinkReviewApp::init()` will pick it up and start loading the drink.

pub mod app;
pub mod components;
pub mod input;
pub mod messages;
pub mod state;
pub mod storage;

pub use app::DrinkReviewApp;
pub use storage::{ReviewContext, set_review_context};
