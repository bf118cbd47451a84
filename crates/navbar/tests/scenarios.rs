//! End-to-end behavior of the sizing engine, the container and the scroll
//! behavior, driven through the public API.

mod common;

use navbar::sizing::{shifting_widths, ShiftingBounds};
use navbar::{
    BarState, BottomBehavior, BottomNavigation, ItemStyle, ItemsContainer, SizingEngine, SizingPolicy,
    TransitionKind,
};
use navbar_animation::AnimationScheduler;
use navbar_core::{NestedScrollEvent, ScrollAxes, ScrollTarget};
use navbar_theme::{BehaviorConfig, Density, Motion, NavigationConfig, NavigationTheme};

fn bottom_behavior() -> BottomBehavior {
    let mut behavior = BottomBehavior::new(&BehaviorConfig::default(), &Motion::default(), true);
    behavior.set_layout_values(56, 0);
    behavior
}

#[test]
fn shifting_widths_fit_every_container() {
    common::init_tracing();
    let bounds = ShiftingBounds {
        max_active: 168,
        min_active: 96,
        max_inactive: 96,
        min_inactive: 64,
    };

    for count in 1..=5usize {
        for width in (120..=1440).step_by(7) {
            let widths = shifting_widths(width, count, &bounds);
            assert!(widths.inactive <= widths.active, "{widths:?} at {width}/{count}");
            assert!(widths.total(count) <= width, "{widths:?} at {width}/{count}");
        }
    }
}

#[test]
fn five_shifting_items_in_360px() {
    common::init_tracing();
    let engine = SizingEngine::new(&NavigationTheme::default().dimensions, Density(1.0), true);
    let widths = engine.widths(SizingPolicy::Shifting, 360, 5);

    assert!(4 * widths.inactive + widths.active <= 360);
    assert!(widths.inactive <= widths.active);
    assert!(widths.inactive >= 64);
}

#[test]
fn repeated_selection_triggers_one_transition() {
    common::init_tracing();
    let theme = NavigationTheme::default();
    let menu = common::menu(5);
    let style = ItemStyle::new(
        SizingPolicy::Shifting,
        menu.item_palette(&theme.palette),
        &theme.dimensions,
        Density(1.0),
        &theme.motion,
        200,
    );
    let mut scheduler = AnimationScheduler::new();
    let mut container = ItemsContainer::new(SizingEngine::new(&theme.dimensions, Density(1.0), false), style);
    container.on_size_changed(360, 56, &mut scheduler);
    container.populate(menu.items(), 0, &mut scheduler);

    let first = container.set_selected_index(2, true, &mut scheduler);
    let second = container.set_selected_index(2, true, &mut scheduler);

    assert_eq!(first.len(), 2);
    assert_eq!(first[0].kind, TransitionKind::Collapse);
    assert_eq!(first[0].position, 0);
    assert_eq!(first[1].kind, TransitionKind::Expand);
    assert_eq!(first[1].position, 2);
    assert!(second.is_empty());

    // Both views are committed before any frame runs
    assert!(!container.view(0).map_or(true, |v| v.is_expanded()));
    assert!(container.view(2).is_some_and(|v| v.is_expanded()));
}

#[test]
fn hide_then_show_returns_to_zero() {
    common::init_tracing();
    let mut scheduler = AnimationScheduler::new();
    let mut behavior = bottom_behavior();

    behavior.set_expanded(false, true, &mut scheduler);
    for _ in 0..30 {
        scheduler.tick(16.0);
        behavior.on_animation_frame(&mut scheduler);
        assert!((0.0..=56.0).contains(&behavior.translation()));
    }
    assert_eq!(behavior.state(), BarState::Hidden);
    assert_eq!(behavior.translation(), 56.0);

    behavior.set_expanded(true, true, &mut scheduler);
    for _ in 0..30 {
        scheduler.tick(16.0);
        behavior.on_animation_frame(&mut scheduler);
    }
    assert_eq!(behavior.state(), BarState::Expanded);
    assert_eq!(behavior.translation(), 0.0);
}

#[test]
fn deltas_below_threshold_never_transition() {
    common::init_tracing();
    let mut scheduler = AnimationScheduler::new();
    let mut behavior = bottom_behavior();
    let target = ScrollTarget::scrollable();

    assert!(behavior.on_nested_scroll_event(
        NestedScrollEvent::Start {
            axes: ScrollAxes::VERTICAL,
            target
        },
        &mut scheduler
    ));
    for dy in [4, 4, 4, 4, -6, -6, -6, -6, 3, 3] {
        let changed = behavior.on_nested_scroll_event(NestedScrollEvent::PreScroll { dx: 0, dy, target }, &mut scheduler);
        assert!(!changed);
    }
    behavior.on_nested_scroll_event(NestedScrollEvent::Stop, &mut scheduler);

    assert_eq!(behavior.state(), BarState::Expanded);
    assert_eq!(behavior.accumulated_offset(), 0);
    assert!(scheduler.is_empty());
}

#[test]
fn fast_fling_hides_regardless_of_offset() {
    common::init_tracing();
    let mut scheduler = AnimationScheduler::new();
    let mut behavior = bottom_behavior();
    let target = ScrollTarget::scrollable();

    behavior.on_nested_scroll_event(NestedScrollEvent::PreScroll { dx: 0, dy: -10, target }, &mut scheduler);
    let hid = behavior.on_nested_scroll_event(
        NestedScrollEvent::Fling {
            velocity_x: 0.0,
            velocity_y: 2400.0,
        },
        &mut scheduler,
    );

    assert!(hid);
    assert_eq!(behavior.state(), BarState::Hiding);
    assert_eq!(behavior.accumulated_offset(), -10);
}

#[test]
fn count_update_never_hides_badge() {
    common::init_tracing();
    let mut nav = BottomNavigation::new(NavigationConfig::default(), NavigationTheme::default());
    nav.set_menu(common::menu(4));
    nav.on_size_changed(360, 60);
    let id = navbar::ItemId(42);

    // Unknown ids are tracked but never drawn
    nav.show_badge_count(id, 1);
    nav.show_badge_count(id, 5);
    assert!(nav.has_badge(id));
    assert_eq!(nav.badges().badge(id).map(|b| b.count), Some(5));

    let item = navbar::ItemId(2);
    nav.take_redraws();
    nav.show_badge_count(item, 1);
    assert_eq!(nav.take_redraws().as_slice(), &[1]);
    nav.show_badge_count(item, 3);
    assert!(nav.has_badge(item));
    assert_eq!(nav.take_redraws().as_slice(), &[1]);

    let render = nav.render();
    assert_eq!(render.items[1].1.badge.map(|b| b.count), Some(3));
    assert!(render.items[0].1.badge.is_none());
}
