//! Window chrome capability traits

use sysbar_core::Color;

use crate::api::ApiLevel;
use crate::vendor::Vendor;

/// Device-wide chrome lookups.
pub trait ChromeBackend {
    /// Platform API level the device is running.
    fn api_level(&self) -> ApiLevel;

    /// Vendor ROM family.
    fn vendor(&self) -> Vendor;

    /// Status bar height in physical pixels.
    fn status_bar_height(&self) -> u32;

    /// Navigation bar height in physical pixels; `0` when the device has
    /// none (gesture-only navigation).
    fn navigation_bar_height(&self) -> u32;
}

/// Read-back of one window's current bar colors.
pub trait ChromeWindow {
    /// Current status bar color, `None` when unavailable.
    fn status_bar_color(&self) -> Option<Color>;

    /// Current navigation bar color, `None` when unavailable.
    fn navigation_bar_color(&self) -> Option<Color>;
}

/// Bar colors a window carried before the library touched it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OriginColors {
    pub status: Color,
    pub navigation: Color,
}

/// Resolves a window's origin colors under one platform variant.
///
/// Implementations encode the version split once; callers never branch on
/// the API level per capture.
pub trait OriginColorSource {
    fn origin_colors(&self, window: &dyn ChromeWindow) -> OriginColors;
}

/// Variant for platforms that predate the window color APIs.
///
/// Bars on these platforms are always drawn black and there is nothing to
/// read back.
pub struct LegacyColors;

impl OriginColorSource for LegacyColors {
    fn origin_colors(&self, _window: &dyn ChromeWindow) -> OriginColors {
        OriginColors {
            status: Color::BLACK,
            navigation: Color::BLACK,
        }
    }
}

/// Variant that reads live window colors.
///
/// A bar whose color is unavailable reads back as transparent.
pub struct LiveColors;

impl OriginColorSource for LiveColors {
    fn origin_colors(&self, window: &dyn ChromeWindow) -> OriginColors {
        OriginColors {
            status: window.status_bar_color().unwrap_or(Color::TRANSPARENT),
            navigation: window.navigation_bar_color().unwrap_or(Color::TRANSPARENT),
        }
    }
}

/// Select the origin color source for an API level, once at startup.
pub fn origin_color_source(api: ApiLevel) -> Box<dyn OriginColorSource> {
    if api.supports_bar_colors() {
        tracing::debug!(api = api.0, "using live window color source");
        Box::new(LiveColors)
    } else {
        tracing::debug!(api = api.0, "using legacy window color source");
        Box::new(LegacyColors)
    }
}
