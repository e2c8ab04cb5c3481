//! Platform abstraction for sysbar
//!
//! The state registry never talks to the platform directly. Everything it
//! needs from a device comes through the seams defined here:
//!
//! - [`ChromeBackend`]: device-wide lookups (API level, vendor ROM, bar
//!   heights)
//! - [`ChromeWindow`]: per-window color read-back
//! - [`OriginColorSource`]: the platform-version split around the window
//!   color APIs, selected once at startup instead of branched per call
//!
//! [`HeadlessBackend`] and [`HeadlessWindow`] are scriptable implementations
//! for tests, examples, and hosts without a device. The real Android backend
//! lives in the `sysbar_platform_android` extension crate.

pub mod api;
pub mod chrome;
pub mod error;
pub mod headless;
pub mod vendor;

pub use api::ApiLevel;
pub use chrome::{
    origin_color_source, ChromeBackend, ChromeWindow, LegacyColors, LiveColors, OriginColorSource,
    OriginColors,
};
pub use error::{PlatformError, Result};
pub use headless::{HeadlessBackend, HeadlessWindow};
pub use vendor::Vendor;
