//! sysbar Android Platform
//!
//! JNI-backed chrome lookups: bar heights from the platform dimension
//! resources, window color read-back, and `ro.*` vendor properties.

pub mod backend;
pub mod props;
pub mod window;

pub use backend::AndroidBackend;
#[cfg(target_os = "android")]
pub use window::AndroidWindow;

/// Install the android logger so `log` records reach logcat.
#[cfg(target_os = "android")]
pub fn init_logging() {
    android_logger::init_once(
        android_logger::Config::default().with_max_level(log::LevelFilter::Debug),
    );
}
