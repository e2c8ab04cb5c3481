//! Headless Session Example
//!
//! Walks one owner through the full registry lifecycle against the
//! headless backend: registration, origin capture, styling, metric
//! lookups, and teardown.
//!
//! Run with: cargo run -p sysbar_chrome --example headless_session

use sysbar_chrome::{BarConfig, ChromeSession, IconMode, LifecycleEvent};
use sysbar_core::Color;
use sysbar_platform::{ApiLevel, HeadlessBackend, HeadlessWindow, Vendor};

fn main() {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let api = ApiLevel(33);
    let backend = HeadlessBackend::new(api)
        .with_vendor(Vendor::Miui)
        .with_heights(97, 140);
    let mut session = ChromeSession::new(api);

    // An activity comes up.
    let owner = session.register("MainActivity");
    session.on_lifecycle_event(owner, LifecycleEvent::Create);

    if session.attach_observer(owner) {
        println!("observer attached for the first time");
    }

    // Capture the window's pre-library appearance once.
    let mut window = HeadlessWindow::unset();
    window.set_navigation_bar_color(Color::WHITE);
    if !session.status_bar_default(owner) {
        session.capture_origin_config(owner, &window);
        session.mark_status_bar_default(owner);
        session.mark_navigation_bar_default(owner);
    }
    session.mark_initialized(owner);

    println!(
        "origin: status={} navigation={} ({:?} icons)",
        session.status_bar_config(owner).color,
        session.navigation_bar_config(owner).color,
        session.navigation_bar_config(owner).icon_mode,
    );

    // Style the bars.
    session.put_status_bar_config(
        owner,
        BarConfig::colored(Color::from_hex(0x1E66F5)).with_icon_mode(IconMode::Dark),
    );

    println!(
        "vendor={:?} status_bar={}px navigation_bar={}px",
        session.vendor(&backend),
        session.status_bar_height(&backend),
        session.navigation_bar_height(&backend),
    );

    // The activity goes away; every trace of it goes too.
    session.on_lifecycle_event(owner, LifecycleEvent::Destroy);
    println!("owners left after destroy: {}", session.owner_count());
}
