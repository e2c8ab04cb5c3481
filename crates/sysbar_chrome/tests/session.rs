use sysbar_chrome::{BarConfig, ChromeSession, IconMode, LifecycleEvent, StyleDefaults};
use sysbar_core::{BarKind, Color};
use sysbar_platform::{ApiLevel, HeadlessBackend, HeadlessWindow, Vendor};

const MODERN: ApiLevel = ApiLevel(33);
const LEGACY: ApiLevel = ApiLevel(19);

#[test]
fn fresh_owner_reads_all_flags_false() {
    let mut session = ChromeSession::new(MODERN);
    let owner = session.register("fresh");

    assert!(!session.observer_attached(owner));
    assert!(!session.status_bar_default(owner));
    assert!(!session.navigation_bar_default(owner));
    assert!(!session.initialized(owner));
}

#[test]
fn fresh_owner_reads_default_configs_without_persisting_them() {
    let mut session = ChromeSession::new(MODERN);
    let owner = session.register("fresh");

    let config = session.status_bar_config(owner);
    assert_eq!(config, BarConfig::default());

    // The returned value is a copy; mutating it must not leak back.
    let _mutated = config.with_color(Color::from_hex(0xFF0000));
    assert_eq!(session.status_bar_config(owner), BarConfig::default());
    assert_eq!(session.navigation_bar_config(owner), BarConfig::default());
}

#[test]
fn marks_read_back_true() {
    let mut session = ChromeSession::new(MODERN);
    let owner = session.register("marks");

    session.mark_observer_attached(owner);
    session.mark_status_bar_default(owner);
    session.mark_navigation_bar_default(owner);
    session.mark_initialized(owner);

    assert!(session.observer_attached(owner));
    assert!(session.status_bar_default(owner));
    assert!(session.navigation_bar_default(owner));
    assert!(session.initialized(owner));
}

#[test]
fn stored_configs_read_back() {
    let mut session = ChromeSession::new(MODERN);
    let owner = session.register("configs");

    let status = BarConfig::colored(Color::from_hex(0x1E66F5)).with_icon_mode(IconMode::Dark);
    let navigation = BarConfig::colored(Color::BLACK).with_icon_mode(IconMode::Light);
    session.put_status_bar_config(owner, status);
    session.put_bar_config(owner, BarKind::Navigation, navigation);

    assert_eq!(session.status_bar_config(owner), status);
    assert_eq!(session.navigation_bar_config(owner), navigation);
    assert_eq!(session.bar_config(owner, BarKind::Status), status);
    assert_eq!(session.bar_config(owner, BarKind::Navigation), navigation);
}

#[test]
fn remove_all_data_resets_every_accessor() {
    let mut session = ChromeSession::new(MODERN);
    let owner = session.register("doomed");

    session.mark_observer_attached(owner);
    session.mark_status_bar_default(owner);
    session.mark_navigation_bar_default(owner);
    session.mark_initialized(owner);
    session.put_status_bar_config(owner, BarConfig::colored(Color::WHITE));
    session.put_navigation_bar_config(owner, BarConfig::colored(Color::BLACK));

    session.remove_all_data(owner);

    assert!(!session.observer_attached(owner));
    assert!(!session.status_bar_default(owner));
    assert!(!session.navigation_bar_default(owner));
    assert!(!session.initialized(owner));
    assert_eq!(session.status_bar_config(owner), BarConfig::default());
    assert_eq!(session.navigation_bar_config(owner), BarConfig::default());
    assert_eq!(session.owner_count(), 0);
}

#[test]
fn removal_does_not_disturb_other_owners() {
    let mut session = ChromeSession::new(MODERN);
    let keep = session.register("keep");
    let gone = session.register("gone");

    session.mark_initialized(keep);
    session.mark_initialized(gone);
    session.put_status_bar_config(keep, BarConfig::colored(Color::WHITE));

    session.remove_all_data(gone);

    assert!(session.initialized(keep));
    assert_eq!(
        session.status_bar_config(keep),
        BarConfig::colored(Color::WHITE)
    );
}

#[test]
fn bar_heights_cache_the_first_backend_answer() {
    let mut session = ChromeSession::new(MODERN);
    let first = HeadlessBackend::new(MODERN).with_heights(97, 140);
    let second = HeadlessBackend::new(MODERN).with_heights(42, 42);

    assert_eq!(session.status_bar_height(&first), 97);
    assert_eq!(session.navigation_bar_height(&first), 140);

    // A different backend later changes nothing.
    assert_eq!(session.status_bar_height(&second), 97);
    assert_eq!(session.navigation_bar_height(&second), 140);
}

#[test]
fn vendor_is_looked_up_once() {
    let mut session = ChromeSession::new(MODERN);
    let miui = HeadlessBackend::new(MODERN).with_vendor(Vendor::Miui);
    let aosp = HeadlessBackend::new(MODERN);

    assert_eq!(session.vendor(&miui), Vendor::Miui);
    assert_eq!(session.vendor(&aosp), Vendor::Miui);
}

#[test]
fn origin_capture_on_legacy_platform_is_black() {
    let mut session = ChromeSession::new(LEGACY);
    let owner = session.register("legacy");

    // Even a window reporting colors is ignored below the color APIs.
    let window = HeadlessWindow::with_colors(Color::from_hex(0x336699), Color::WHITE);
    session.capture_origin_config(owner, &window);

    assert_eq!(session.status_bar_config(owner).color, Color::BLACK);
    assert_eq!(session.navigation_bar_config(owner).color, Color::BLACK);
    // Packed black sits exactly on the midpoint, which resolves dark.
    assert_eq!(
        session.navigation_bar_config(owner).icon_mode,
        IconMode::Dark
    );
}

#[test]
fn origin_capture_on_modern_platform_defaults_unset_to_transparent() {
    let mut session = ChromeSession::new(MODERN);
    let owner = session.register("modern");

    session.capture_origin_config(owner, &HeadlessWindow::unset());

    assert_eq!(session.status_bar_config(owner).color, Color::TRANSPARENT);
    assert_eq!(
        session.navigation_bar_config(owner).color,
        Color::TRANSPARENT
    );
}

#[test]
fn origin_capture_resolves_navigation_icon_mode_only() {
    let mut session = ChromeSession::new(MODERN);
    let owner = session.register("modern");

    let window = HeadlessWindow::with_colors(Color::WHITE, Color::WHITE);
    session.capture_origin_config(owner, &window);

    // Bright navigation bar resolves to light mode; the status config's
    // icon mode is never touched by capture.
    assert_eq!(
        session.navigation_bar_config(owner).icon_mode,
        IconMode::Light
    );
    assert_eq!(
        session.status_bar_config(owner).icon_mode,
        IconMode::Unspecified
    );
}

#[test]
fn origin_capture_keeps_previously_stored_status_icon_mode() {
    let mut session = ChromeSession::new(MODERN);
    let owner = session.register("modern");

    session.put_status_bar_config(owner, BarConfig::default().with_icon_mode(IconMode::Dark));
    let window = HeadlessWindow::with_colors(Color::WHITE, Color::BLACK);
    session.capture_origin_config(owner, &window);

    let status = session.status_bar_config(owner);
    assert_eq!(status.color, Color::WHITE);
    assert_eq!(status.icon_mode, IconMode::Dark);
}

#[test]
fn destroy_through_lifecycle_matches_remove_all_data() {
    let mut session = ChromeSession::new(MODERN);
    let owner = session.register("observed");

    assert!(session.attach_observer(owner));
    session.mark_initialized(owner);
    session.on_lifecycle_event(owner, LifecycleEvent::Destroy);

    assert!(!session.observer_attached(owner));
    assert!(!session.initialized(owner));

    // A re-registered owner starts clean even if it lands in the old slot.
    let reborn = session.register("observed");
    assert!(!session.observer_attached(reborn));
    assert!(!session.initialized(reborn));
}

#[test]
fn style_defaults_feed_the_config_miss_path() {
    let defaults = StyleDefaults::from_toml(
        r##"
        [status]
        color = "#1E66F5"
        icon_mode = "dark"
        "##,
    )
    .unwrap();
    let mut session = ChromeSession::with_defaults(MODERN, defaults);
    let owner = session.register("styled");

    assert_eq!(
        session.status_bar_config(owner),
        BarConfig::colored(Color::from_hex(0x1E66F5)).with_icon_mode(IconMode::Dark)
    );
    // Navigation table was absent, so the built-in default applies.
    assert_eq!(session.navigation_bar_config(owner), BarConfig::default());
}
