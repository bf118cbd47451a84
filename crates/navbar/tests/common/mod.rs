//! Shared helpers for navbar integration tests

use navbar::{IconRef, ItemId, Menu, NavigationItem};
use tracing_subscriber::EnvFilter;

/// Install a test-friendly subscriber; later calls are no-ops
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Menu with `count` plain items, ids starting at 1
pub fn menu(count: i32) -> Menu {
    let items = (1..=count)
        .map(|i| NavigationItem::new(ItemId(i), IconRef::new(format!("ic_{i}")), format!("Item {i}")))
        .collect();
    Menu::new(items).expect("valid menu")
}
