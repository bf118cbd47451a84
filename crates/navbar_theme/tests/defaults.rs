use navbar_core::Color;
use navbar_theme::{Density, Gravity, NavigationConfig, NavigationTheme};

#[test]
fn default_theme_matches_material_bottom_navigation() {
    let theme = NavigationTheme::default();
    let dims = theme.dimensions;

    assert_eq!(dims.bar_height, 56.0);
    assert_eq!(dims.shifting.max_active, 168.0);
    assert_eq!(dims.shifting.min_active, 96.0);
    assert_eq!(dims.shifting.max_inactive, 96.0);
    assert_eq!(dims.shifting.min_inactive, 64.0);
    assert_eq!(theme.motion.hide_ms, 300);
    assert_eq!(theme.palette.badge, Color::RED);
}

#[test]
fn density_scales_every_bound() {
    let dims = NavigationTheme::default().dimensions;
    let density = Density(3.0);

    assert_eq!(density.to_px(dims.bar_height), 168);
    assert_eq!(density.to_px(dims.shifting.max_active), 504);
    assert_eq!(density.to_px(dims.fixed.min_active), 240);
}

#[test]
fn config_serializes_with_lowercase_gravity() {
    let mut config = NavigationConfig::default();
    config.layout.gravity = Gravity::Right;

    let json = serde_json::to_value(&config).unwrap();
    assert_eq!(json["layout"]["gravity"], "right");
    assert_eq!(json["behavior"]["scrollable"], true);
    assert_eq!(json["debug"], false);
}

#[test]
fn config_loads_from_directory() {
    let dir = std::env::temp_dir().join(format!("navbar-config-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("navbar.toml"), "[behavior]\nscrollable = false\n").unwrap();

    let config = NavigationConfig::load_from_path(&dir).unwrap();
    assert!(!config.behavior.scrollable);

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn missing_config_file_is_an_io_error() {
    let path = std::env::temp_dir().join("navbar-config-does-not-exist.toml");
    let err = NavigationConfig::load_from_path(&path).unwrap_err();
    assert!(err.to_string().contains("failed to read"));
}
