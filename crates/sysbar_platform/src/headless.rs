//! Headless backend for tests and device-free hosts

use sysbar_core::Color;

use crate::api::ApiLevel;
use crate::chrome::{ChromeBackend, ChromeWindow};
use crate::vendor::Vendor;

/// Scriptable [`ChromeBackend`].
///
/// Every lookup answers from plain fields, so tests can model any device.
#[derive(Clone, Debug)]
pub struct HeadlessBackend {
    api: ApiLevel,
    vendor: Vendor,
    status_bar_height: u32,
    navigation_bar_height: u32,
}

impl HeadlessBackend {
    /// Backend resembling a plain AOSP device at the given level.
    pub fn new(api: ApiLevel) -> Self {
        Self {
            api,
            vendor: Vendor::Aosp,
            status_bar_height: 66,
            navigation_bar_height: 126,
        }
    }

    /// Override the vendor ROM.
    pub fn with_vendor(mut self, vendor: Vendor) -> Self {
        self.vendor = vendor;
        self
    }

    /// Override the measured bar heights.
    pub fn with_heights(mut self, status: u32, navigation: u32) -> Self {
        self.status_bar_height = status;
        self.navigation_bar_height = navigation;
        self
    }
}

impl ChromeBackend for HeadlessBackend {
    fn api_level(&self) -> ApiLevel {
        self.api
    }

    fn vendor(&self) -> Vendor {
        self.vendor
    }

    fn status_bar_height(&self) -> u32 {
        self.status_bar_height
    }

    fn navigation_bar_height(&self) -> u32 {
        self.navigation_bar_height
    }
}

/// Scriptable [`ChromeWindow`].
#[derive(Clone, Copy, Debug, Default)]
pub struct HeadlessWindow {
    status: Option<Color>,
    navigation: Option<Color>,
}

impl HeadlessWindow {
    /// Window with no bar colors available.
    pub fn unset() -> Self {
        Self::default()
    }

    /// Window reporting the given colors for both bars.
    pub fn with_colors(status: Color, navigation: Color) -> Self {
        Self {
            status: Some(status),
            navigation: Some(navigation),
        }
    }

    pub fn set_status_bar_color(&mut self, color: Color) {
        self.status = Some(color);
    }

    pub fn set_navigation_bar_color(&mut self, color: Color) {
        self.navigation = Some(color);
    }
}

impl ChromeWindow for HeadlessWindow {
    fn status_bar_color(&self) -> Option<Color> {
        self.status
    }

    fn navigation_bar_color(&self) -> Option<Color> {
        self.navigation
    }
}
