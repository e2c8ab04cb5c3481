//! Device vendor / ROM detection
//!
//! Several vendor ROMs carry navigation-bar quirks (gesture pill sizing,
//! hideable bars) that the styling layer wants to know about up front. The
//! classification itself is a pure string job over `ro.*` build properties,
//! so it runs and tests on any host; only reading the properties needs a
//! device.

/// Vendor ROM families the styling layer distinguishes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Vendor {
    /// Stock or unrecognized ROM.
    #[default]
    Aosp,
    /// Xiaomi MIUI.
    Miui,
    /// Huawei EMUI.
    Emui,
    /// Oppo ColorOS.
    ColorOs,
    /// Vivo Funtouch OS.
    FuntouchOs,
    /// Meizu Flyme.
    Flyme,
    /// Samsung One UI.
    OneUi,
}

impl Vendor {
    /// Classify from `ro.*` build properties.
    ///
    /// `props` yields `(name, value)` pairs in any order. Empty values are
    /// treated as absent; anything unrecognized classifies as
    /// [`Vendor::Aosp`].
    pub fn from_build_props<'a, I>(props: I) -> Vendor
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (name, value) in props {
            if value.is_empty() {
                continue;
            }
            match name {
                "ro.miui.ui.version.name" => return Vendor::Miui,
                "ro.build.version.emui" => return Vendor::Emui,
                "ro.build.version.opporom" => return Vendor::ColorOs,
                "ro.vivo.os.version" => return Vendor::FuntouchOs,
                "ro.build.version.oneui" => return Vendor::OneUi,
                "ro.build.display.id" if value.to_ascii_lowercase().contains("flyme") => {
                    return Vendor::Flyme;
                }
                _ => {}
            }
        }
        Vendor::Aosp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_known_roms() {
        assert_eq!(
            Vendor::from_build_props([("ro.miui.ui.version.name", "V14")]),
            Vendor::Miui
        );
        assert_eq!(
            Vendor::from_build_props([("ro.build.version.emui", "EmotionUI_13.0")]),
            Vendor::Emui
        );
        assert_eq!(
            Vendor::from_build_props([("ro.build.display.id", "Flyme 9.3.1.0A")]),
            Vendor::Flyme
        );
    }

    #[test]
    fn empty_values_do_not_classify() {
        assert_eq!(
            Vendor::from_build_props([("ro.miui.ui.version.name", "")]),
            Vendor::Aosp
        );
    }

    #[test]
    fn unknown_props_fall_back_to_aosp() {
        assert_eq!(
            Vendor::from_build_props([("ro.build.display.id", "AOSP.12345")]),
            Vendor::Aosp
        );
        assert_eq!(Vendor::from_build_props([]), Vendor::Aosp);
    }
}
