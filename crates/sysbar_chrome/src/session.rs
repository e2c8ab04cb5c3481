//! Per-owner bar state registry
//!
//! The session tracks, for every registered owner, four happened-flags
//! (defaults captured ×2, observer attached, initialized) and two bar
//! configs, along with device-wide caches resolved once per session (bar
//! heights, vendor ROM). All operations are total: an absent key reads as
//! the documented default, never an error.

use rustc_hash::{FxHashMap, FxHashSet};
use slotmap::SlotMap;

use sysbar_core::{BarKind, Color};
use sysbar_platform::{
    origin_color_source, ApiLevel, ChromeBackend, ChromeWindow, OriginColorSource, Vendor,
};

use crate::bar_config::{BarConfig, IconMode};
use crate::defaults::StyleDefaults;

slotmap::new_key_type! {
    /// Stable generated key for one registered owner.
    ///
    /// Slot generations make a destroyed owner's key unambiguously dead:
    /// a later owner reusing the slot gets a fresh key that compares
    /// unequal to the old one.
    pub struct OwnerId;
}

#[derive(Debug)]
struct OwnerMeta {
    /// Human-readable name, only ever used in trace output.
    label: String,
}

/// Per-owner bookkeeping for system bar styling.
///
/// One session per application; the embedding code owns it and passes it by
/// reference to call sites. Mutators take `&mut self`, which is the whole
/// threading story: lifecycle callbacks run on one thread and the borrow
/// checker keeps it that way.
pub struct ChromeSession {
    /// Origin-color variant for this platform level, selected once here.
    colors: Box<dyn OriginColorSource>,
    default_status: BarConfig,
    default_navigation: BarConfig,

    owners: SlotMap<OwnerId, OwnerMeta>,

    // Happened-flags. Membership means the event occurred; nothing ever
    // stores an explicit "false" and the only removal path is
    // `remove_all_data`.
    status_defaults: FxHashSet<OwnerId>,
    navigation_defaults: FxHashSet<OwnerId>,
    observers: FxHashSet<OwnerId>,
    initialized: FxHashSet<OwnerId>,

    status_configs: FxHashMap<OwnerId, BarConfig>,
    navigation_configs: FxHashMap<OwnerId, BarConfig>,

    // Device-wide caches; the first backend asked wins for the session.
    vendor: Option<Vendor>,
    status_height: Option<u32>,
    navigation_height: Option<u32>,
}

impl ChromeSession {
    /// Session for the given platform level with transparent defaults.
    pub fn new(api: ApiLevel) -> Self {
        Self::with_defaults(api, StyleDefaults::default())
    }

    /// Session whose config-miss defaults come from `defaults`.
    pub fn with_defaults(api: ApiLevel, defaults: StyleDefaults) -> Self {
        Self {
            colors: origin_color_source(api),
            default_status: defaults.status_config(),
            default_navigation: defaults.navigation_config(),
            owners: SlotMap::with_key(),
            status_defaults: FxHashSet::default(),
            navigation_defaults: FxHashSet::default(),
            observers: FxHashSet::default(),
            initialized: FxHashSet::default(),
            status_configs: FxHashMap::default(),
            navigation_configs: FxHashMap::default(),
            vendor: None,
            status_height: None,
            navigation_height: None,
        }
    }

    // ========== Owner Registration ==========

    /// Register an owner, issuing its key.
    pub fn register(&mut self, label: impl Into<String>) -> OwnerId {
        let meta = OwnerMeta {
            label: label.into(),
        };
        tracing::debug!(label = %meta.label, "registering owner");
        self.owners.insert(meta)
    }

    /// Number of live (registered, not yet removed) owners.
    pub fn owner_count(&self) -> usize {
        self.owners.len()
    }

    // ========== Happened-Flags ==========

    /// Whether a lifecycle observer was recorded for `owner`.
    pub fn observer_attached(&self, owner: OwnerId) -> bool {
        self.observers.contains(&owner)
    }

    /// Record that a lifecycle observer is registered for `owner`.
    pub fn mark_observer_attached(&mut self, owner: OwnerId) {
        self.observers.insert(owner);
    }

    /// Whether the status bar's pre-library appearance was captured.
    pub fn status_bar_default(&self, owner: OwnerId) -> bool {
        self.status_defaults.contains(&owner)
    }

    pub fn mark_status_bar_default(&mut self, owner: OwnerId) {
        self.status_defaults.insert(owner);
    }

    /// Whether the navigation bar's pre-library appearance was captured.
    pub fn navigation_bar_default(&self, owner: OwnerId) -> bool {
        self.navigation_defaults.contains(&owner)
    }

    pub fn mark_navigation_bar_default(&mut self, owner: OwnerId) {
        self.navigation_defaults.insert(owner);
    }

    /// Whether first-time setup ran for `owner`.
    pub fn initialized(&self, owner: OwnerId) -> bool {
        self.initialized.contains(&owner)
    }

    pub fn mark_initialized(&mut self, owner: OwnerId) {
        self.initialized.insert(owner);
    }

    // ========== Bar Configs ==========

    /// Desired status bar appearance; the session default when none stored.
    ///
    /// Read-through: the default goes out by value and is never written
    /// back, so a caller mutating its copy cannot poison later reads.
    pub fn status_bar_config(&self, owner: OwnerId) -> BarConfig {
        self.status_configs
            .get(&owner)
            .copied()
            .unwrap_or(self.default_status)
    }

    pub fn put_status_bar_config(&mut self, owner: OwnerId, config: BarConfig) {
        self.status_configs.insert(owner, config);
    }

    /// Desired navigation bar appearance; the session default when none
    /// stored.
    pub fn navigation_bar_config(&self, owner: OwnerId) -> BarConfig {
        self.navigation_configs
            .get(&owner)
            .copied()
            .unwrap_or(self.default_navigation)
    }

    pub fn put_navigation_bar_config(&mut self, owner: OwnerId, config: BarConfig) {
        self.navigation_configs.insert(owner, config);
    }

    /// Kind-dispatched read of the two accessors above.
    pub fn bar_config(&self, owner: OwnerId, kind: BarKind) -> BarConfig {
        match kind {
            BarKind::Status => self.status_bar_config(owner),
            BarKind::Navigation => self.navigation_bar_config(owner),
        }
    }

    /// Kind-dispatched write of the two accessors above.
    pub fn put_bar_config(&mut self, owner: OwnerId, kind: BarKind, config: BarConfig) {
        match kind {
            BarKind::Status => self.put_status_bar_config(owner, config),
            BarKind::Navigation => self.put_navigation_bar_config(owner, config),
        }
    }

    // ========== Origin Capture ==========

    /// One-shot capture of the window's pre-library bar colors.
    ///
    /// The platform variant selected at construction decides what "the
    /// window's colors" means: black/black on levels that predate the color
    /// APIs, live colors (transparent when unavailable) otherwise. The
    /// navigation config also gets an icon mode resolved from its captured
    /// color; the status config's icon mode is left untouched.
    pub fn capture_origin_config(&mut self, owner: OwnerId, window: &dyn ChromeWindow) {
        let origin = self.colors.origin_colors(window);
        tracing::debug!(
            owner = ?owner,
            status = %origin.status,
            navigation = %origin.navigation,
            "captured origin config"
        );

        let status = self.status_bar_config(owner).with_color(origin.status);
        self.put_status_bar_config(owner, status);

        let navigation = self
            .navigation_bar_config(owner)
            .with_color(origin.navigation)
            .with_icon_mode(approx_icon_mode(origin.navigation));
        self.put_navigation_bar_config(owner, navigation);
    }

    // ========== Device Metrics ==========

    /// Status bar height in pixels, measured once per session.
    ///
    /// The first backend asked wins; later calls return the cached value no
    /// matter which backend they pass.
    pub fn status_bar_height(&mut self, backend: &dyn ChromeBackend) -> u32 {
        if let Some(height) = self.status_height {
            return height;
        }
        let height = backend.status_bar_height();
        tracing::trace!(height, "measured status bar height");
        self.status_height = Some(height);
        height
    }

    /// Navigation bar height in pixels, measured once per session.
    pub fn navigation_bar_height(&mut self, backend: &dyn ChromeBackend) -> u32 {
        if let Some(height) = self.navigation_height {
            return height;
        }
        let height = backend.navigation_bar_height();
        tracing::trace!(height, "measured navigation bar height");
        self.navigation_height = Some(height);
        height
    }

    /// Vendor ROM family, looked up once per session.
    pub fn vendor(&mut self, backend: &dyn ChromeBackend) -> Vendor {
        if let Some(vendor) = self.vendor {
            return vendor;
        }
        let vendor = backend.vendor();
        tracing::debug!(?vendor, "detected vendor ROM");
        self.vendor = Some(vendor);
        vendor
    }

    // ========== Teardown ==========

    /// Drop every entry for `owner` and free its slot.
    ///
    /// All six per-owner collections are cleared in the same call so a
    /// later owner can never observe this one's leftovers.
    pub fn remove_all_data(&mut self, owner: OwnerId) {
        let meta = self.owners.remove(owner);
        self.status_defaults.remove(&owner);
        self.navigation_defaults.remove(&owner);
        self.observers.remove(&owner);
        self.initialized.remove(&owner);
        self.status_configs.remove(&owner);
        self.navigation_configs.remove(&owner);
        if let Some(meta) = meta {
            tracing::debug!(owner = ?owner, label = %meta.label, "removed owner state");
        }
    }
}

/// Midpoint threshold on the packed color value.
///
/// Not perceptual luminance; the cutoff is inherited behavior and kept
/// bit-exact, including the truncating division.
fn approx_icon_mode(color: Color) -> IconMode {
    let midpoint = Color::BLACK.packed().wrapping_add(Color::WHITE.packed() / 2);
    if color.packed() > midpoint {
        IconMode::Light
    } else {
        IconMode::Dark
    }
}
