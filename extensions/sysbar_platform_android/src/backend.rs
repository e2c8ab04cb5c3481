//! Android chrome backend
//!
//! Device answers are resolved once at construction — API level and vendor
//! from system properties, bar heights from the platform dimension
//! resources — and the trait methods answer from plain fields afterwards.

use sysbar_platform::{ApiLevel, ChromeBackend, PlatformError, Result, Vendor};

#[cfg(target_os = "android")]
use android_activity::AndroidApp;

/// Android [`ChromeBackend`] backed by JNI/NDK lookups.
#[derive(Debug)]
pub struct AndroidBackend {
    api: ApiLevel,
    vendor: Vendor,
    status_bar_height: u32,
    navigation_bar_height: u32,
}

#[cfg(target_os = "android")]
impl AndroidBackend {
    /// Resolve the device answers through the given app handle.
    pub fn new(app: &AndroidApp) -> Result<Self> {
        let api = ApiLevel(crate::props::api_level()?);
        let vendor = crate::props::vendor();
        let (status_bar_height, navigation_bar_height) = bar_heights(app)?;
        tracing::debug!(
            api = api.0,
            ?vendor,
            status_bar_height,
            navigation_bar_height,
            "android backend ready"
        );
        Ok(Self {
            api,
            vendor,
            status_bar_height,
            navigation_bar_height,
        })
    }
}

#[cfg(not(target_os = "android"))]
impl AndroidBackend {
    /// The Android backend only exists when targeting Android.
    pub fn new() -> Result<Self> {
        tracing::warn!("android backend requested off-device");
        Err(PlatformError::Unsupported(
            "AndroidBackend requires target_os = \"android\"".into(),
        ))
    }
}

impl ChromeBackend for AndroidBackend {
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

/// Measure both bars from the platform dimension resources.
#[cfg(target_os = "android")]
fn bar_heights(app: &AndroidApp) -> Result<(u32, u32)> {
    use jni::objects::JObject;

    let vm = unsafe { jni::JavaVM::from_raw(app.vm_as_ptr() as *mut jni::sys::JavaVM) }
        .map_err(jni_err)?;
    let mut env = vm.attach_current_thread().map_err(jni_err)?;
    let activity = unsafe { JObject::from_raw(app.activity_as_ptr() as jni::sys::jobject) };

    let resources = env
        .call_method(
            &activity,
            "getResources",
            "()Landroid/content/res/Resources;",
            &[],
        )
        .and_then(|v| v.l())
        .map_err(jni_err)?;

    let status = dimension_px(&mut env, &resources, "status_bar_height")?;
    // Gesture-only devices ship without the navigation dimension; that is a
    // zero-height bar, not an error.
    let navigation = match dimension_px(&mut env, &resources, "navigation_bar_height") {
        Ok(px) => px,
        Err(PlatformError::MissingDimension(_)) => 0,
        Err(e) => return Err(e),
    };
    Ok((status, navigation))
}

/// `Resources.getIdentifier(name, "dimen", "android")` then
/// `getDimensionPixelSize`.
#[cfg(target_os = "android")]
fn dimension_px(
    env: &mut jni::JNIEnv,
    resources: &jni::objects::JObject,
    name: &str,
) -> Result<u32> {
    use jni::objects::JValue;

    let jname = env.new_string(name).map_err(jni_err)?;
    let jtype = env.new_string("dimen").map_err(jni_err)?;
    let jpkg = env.new_string("android").map_err(jni_err)?;
    let id = env
        .call_method(
            resources,
            "getIdentifier",
            "(Ljava/lang/String;Ljava/lang/String;Ljava/lang/String;)I",
            &[
                JValue::Object(&jname),
                JValue::Object(&jtype),
                JValue::Object(&jpkg),
            ],
        )
        .and_then(|v| v.i())
        .map_err(jni_err)?;
    if id == 0 {
        return Err(PlatformError::MissingDimension(name.into()));
    }
    let px = env
        .call_method(resources, "getDimensionPixelSize", "(I)I", &[JValue::Int(id)])
        .and_then(|v| v.i())
        .map_err(jni_err)?;
    Ok(px.max(0) as u32)
}

#[cfg(target_os = "android")]
fn jni_err(e: jni::errors::Error) -> PlatformError {
    PlatformError::InitFailed(e.to_string())
}
