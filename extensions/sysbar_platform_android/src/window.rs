//! Window color read-back over JNI

#[cfg(target_os = "android")]
use android_activity::AndroidApp;
#[cfg(target_os = "android")]
use jni::objects::{GlobalRef, JObject};
#[cfg(target_os = "android")]
use jni::JavaVM;
#[cfg(target_os = "android")]
use sysbar_core::Color;
#[cfg(target_os = "android")]
use sysbar_platform::{ChromeWindow, PlatformError, Result};

/// Android [`ChromeWindow`] wrapping an activity reference.
///
/// Color reads answer `None` whenever the activity has no window or a JNI
/// call fails, which the capture path treats as "color unavailable".
#[cfg(target_os = "android")]
pub struct AndroidWindow {
    vm: JavaVM,
    activity: GlobalRef,
}

#[cfg(target_os = "android")]
impl AndroidWindow {
    /// Wrap the activity owned by `app`.
    pub fn from_app(app: &AndroidApp) -> Result<Self> {
        let vm = unsafe { JavaVM::from_raw(app.vm_as_ptr() as *mut jni::sys::JavaVM) }
            .map_err(jni_err)?;
        let activity = {
            let mut env = vm.attach_current_thread().map_err(jni_err)?;
            let raw = unsafe { JObject::from_raw(app.activity_as_ptr() as jni::sys::jobject) };
            env.new_global_ref(&raw).map_err(jni_err)?
        };
        Ok(Self { vm, activity })
    }

    fn bar_color(&self, getter: &'static str) -> Option<Color> {
        let mut env = self.vm.attach_current_thread().ok()?;
        let window = env
            .call_method(
                self.activity.as_obj(),
                "getWindow",
                "()Landroid/view/Window;",
                &[],
            )
            .and_then(|v| v.l())
            .ok()?;
        if window.is_null() {
            return None;
        }
        let packed = env
            .call_method(&window, getter, "()I", &[])
            .and_then(|v| v.i())
            .ok()?;
        Some(Color::from_packed(packed))
    }
}

#[cfg(target_os = "android")]
impl ChromeWindow for AndroidWindow {
    fn status_bar_color(&self) -> Option<Color> {
        self.bar_color("getStatusBarColor")
    }

    fn navigation_bar_color(&self) -> Option<Color> {
        self.bar_color("getNavigationBarColor")
    }
}

#[cfg(target_os = "android")]
fn jni_err(e: jni::errors::Error) -> PlatformError {
    PlatformError::InitFailed(e.to_string())
}
