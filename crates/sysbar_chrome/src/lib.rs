//! sysbar chrome state
//!
//! Per-owner bookkeeping for system bar styling: which owners have been
//! initialized, whether their pre-library bar appearance was captured,
//! whether a lifecycle observer is attached, and the bar configuration each
//! owner wants — plus once-per-session device metric caches.
//!
//! # Overview
//!
//! [`ChromeSession`] is the one piece of shared state in the library. The
//! embedding application owns it and passes it by reference to call sites;
//! there is no global. Owners (activities, fragments, anything
//! lifecycle-scoped) are registered and addressed by a generated
//! [`OwnerId`], so two owners can never alias each other's state.
//!
//! # Quick Start
//!
//! ```rust
//! use sysbar_chrome::{BarConfig, ChromeSession, IconMode, LifecycleEvent};
//! use sysbar_core::Color;
//! use sysbar_platform::{ApiLevel, HeadlessWindow};
//!
//! let mut session = ChromeSession::new(ApiLevel(33));
//! let owner = session.register("MainActivity");
//!
//! // Capture the window's pre-library appearance once.
//! if !session.status_bar_default(owner) {
//!     session.capture_origin_config(owner, &HeadlessWindow::unset());
//!     session.mark_status_bar_default(owner);
//! }
//!
//! // Style the status bar.
//! session.put_status_bar_config(
//!     owner,
//!     BarConfig::colored(Color::from_hex(0x1E66F5)).with_icon_mode(IconMode::Dark),
//! );
//!
//! // Owner destruction tears all of its state down.
//! session.on_lifecycle_event(owner, LifecycleEvent::Destroy);
//! assert!(!session.status_bar_default(owner));
//! ```
//!
//! # Defaults
//!
//! Config reads are read-through: a miss hands out the session default by
//! value and stores nothing. The default is transparent with an unspecified
//! icon mode unless the application ships a [`StyleDefaults`] TOML file.

pub mod bar_config;
pub mod defaults;
pub mod lifecycle;
pub mod session;

pub use bar_config::{BarConfig, IconMode};
pub use defaults::{ConfigError, StyleDefaults};
pub use lifecycle::LifecycleEvent;
pub use session::{ChromeSession, OwnerId};
