//! System property reads
//!
//! API level and vendor ROM both come out of the `ro.*` property space.
//! Classification itself lives in `sysbar_platform::Vendor`; this module
//! only does the device-side reads.

#[cfg(target_os = "android")]
use sysbar_platform::{PlatformError, Result, Vendor};

/// Properties consulted for vendor classification.
#[cfg(target_os = "android")]
const VENDOR_PROPS: [&str; 6] = [
    "ro.miui.ui.version.name",
    "ro.build.version.emui",
    "ro.build.version.opporom",
    "ro.vivo.os.version",
    "ro.build.version.oneui",
    "ro.build.display.id",
];

#[cfg(target_os = "android")]
mod sys {
    use std::ffi::CString;
    use std::os::raw::{c_char, c_int};

    // PROP_VALUE_MAX from <sys/system_properties.h>
    const PROP_VALUE_MAX: usize = 92;

    extern "C" {
        fn __system_property_get(name: *const c_char, value: *mut c_char) -> c_int;
    }

    /// Read one property; empty string when unset.
    pub fn get(name: &str) -> String {
        let Ok(cname) = CString::new(name) else {
            return String::new();
        };
        let mut buf = [0u8; PROP_VALUE_MAX];
        let len =
            unsafe { __system_property_get(cname.as_ptr(), buf.as_mut_ptr() as *mut c_char) };
        if len <= 0 {
            return String::new();
        }
        String::from_utf8_lossy(&buf[..len as usize]).into_owned()
    }
}

/// Running platform API level from `ro.build.version.sdk`.
#[cfg(target_os = "android")]
pub fn api_level() -> Result<u32> {
    let raw = sys::get("ro.build.version.sdk");
    raw.parse()
        .map_err(|_| PlatformError::PropertyRead(format!("ro.build.version.sdk = {raw:?}")))
}

/// Vendor ROM family from the build properties.
#[cfg(target_os = "android")]
pub fn vendor() -> Vendor {
    let values: Vec<(&str, String)> = VENDOR_PROPS
        .iter()
        .map(|&name| (name, sys::get(name)))
        .collect();
    Vendor::from_build_props(values.iter().map(|(name, value)| (*name, value.as_str())))
}
