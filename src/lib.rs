//! mediabar - MPRIS media controls for status bars.
//!
//! Follows the most relevant MPRIS player on the session bus and keeps a
//! front end in step with it:
//!
//! - a polybar line with track, transport and volume affordances
//! - a two-way progress control that seeks when the user drags it
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use mediabar::{
//!     config::Config,
//!     reconcile::{SelectionAction, SignalRouter},
//!     render::PolybarRenderer,
//!     selection::{SelectionStore, SelectionWatcher},
//!     services::MprisSelector,
//! };
//!
//! # async fn run() -> mediabar::Result<()> {
//! let config = Config::load()?;
//! let selector = MprisSelector::new(&config.player, SelectionStore::default_location()?).await?;
//! let (_watcher, changes) = SelectionWatcher::start(selector.store())?;
//!
//! let router = SignalRouter::new(selector, PolybarRenderer::stdout(config.bar), changes);
//! let outcome = router.start(&SelectionAction::new("mediabar list")).await?;
//! println!("run ended: {outcome:?}");
//! # Ok(())
//! # }
//! ```

/// Configuration schema definitions and loading.
pub mod config;

/// Core error types and result aliases.
pub mod core;

/// Command-line interface.
pub mod cli;

/// MPRIS player discovery and control.
pub mod services;

/// Preferred-player store and its watcher.
pub mod selection;

/// Signal routing, progress estimation and echo suppression.
pub mod reconcile;

/// Polybar and progress front ends.
pub mod render;

/// Logging setup.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use crate::core::{MediabarError, Result};
