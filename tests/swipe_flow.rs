use egui::{Pos2, Rect, pos2, vec2};
use kimono_coordinator::{
    Catalog, Category, Coordinator, SelectableItem, SwipeConfig, SwipeDirection, SwipeLayer,
    animation::TransitionPhase,
};

fn container() -> Rect {
    Rect::from_min_size(pos2(0.0, 0.0), vec2(280.0, 400.0))
}

fn abc_catalog() -> Catalog {
    let items = |prefix: &str| {
        ["A", "B", "C"]
            .iter()
            .map(|n| SelectableItem::new(format!("{prefix}-{n}"), *n, "#336699"))
            .collect::<Vec<_>>()
    };
    Catalog {
        kimono: items("kimono"),
        obi: items("obi"),
        obijime: items("obijime"),
    }
}

fn single_item_catalog() -> Catalog {
    let one = |id: &str| vec![SelectableItem::new(id, id, "#000000")];
    Catalog {
        kimono: one("only-kimono"),
        obi: one("only-obi"),
        obijime: one("only-obijime"),
    }
}

/// Drags from `from` to `to` horizontally at height `y` and releases.
fn swipe(coordinator: &mut Coordinator, y: f32, from: f32, to: f32, now: f64) {
    coordinator.pointer_down(pos2(from, y), Some(container()), now);
    coordinator.pointer_move(Pos2::new((from + to) / 2.0, y), now + 0.01);
    coordinator.pointer_move(Pos2::new(to, y), now + 0.02);
    coordinator.pointer_up(now + 0.03);
}

/// Ticks once per 60 Hz frame through `until`.
fn run_frames(coordinator: &mut Coordinator, from: f64, until: f64) {
    let mut now = from;
    while now <= until {
        coordinator.tick(now);
        now += 1.0 / 60.0;
    }
}

#[test]
fn left_then_right_swipe_returns_to_first_item() {
    let mut coordinator = Coordinator::new(&abc_catalog(), SwipeConfig::immediate()).unwrap();
    assert_eq!(coordinator.current(Category::Kimono).name, "A");

    swipe(&mut coordinator, 40.0, 200.0, 100.0, 0.0);
    assert_eq!(coordinator.selection(Category::Kimono).current_index(), 1);
    assert_eq!(coordinator.current(Category::Kimono).name, "B");

    swipe(&mut coordinator, 40.0, 100.0, 200.0, 1.0);
    assert_eq!(coordinator.selection(Category::Kimono).current_index(), 0);
    assert_eq!(coordinator.current(Category::Kimono).name, "A");
}

#[test]
fn animated_left_then_right_swipe_returns_to_first_item() {
    let mut coordinator = Coordinator::new(&abc_catalog(), SwipeConfig::default()).unwrap();

    swipe(&mut coordinator, 40.0, 200.0, 100.0, 0.0);
    // nothing changes until the settle delay has passed
    assert_eq!(coordinator.selection(Category::Kimono).current_index(), 0);
    run_frames(&mut coordinator, 0.05, 1.0);
    assert_eq!(coordinator.current(Category::Kimono).name, "B");

    swipe(&mut coordinator, 40.0, 100.0, 200.0, 2.0);
    run_frames(&mut coordinator, 2.05, 3.0);
    assert_eq!(coordinator.current(Category::Kimono).name, "A");
}

#[test]
fn single_item_category_wraps_to_itself() {
    let mut coordinator = Coordinator::new(&single_item_catalog(), SwipeConfig::immediate()).unwrap();
    swipe(&mut coordinator, 40.0, 200.0, 0.0, 0.0);
    assert_eq!(coordinator.selection(Category::Kimono).current_index(), 0);
    swipe(&mut coordinator, 40.0, 0.0, 200.0, 1.0);
    assert_eq!(coordinator.selection(Category::Kimono).current_index(), 0);
    assert_eq!(coordinator.current(Category::Kimono).id, "only-kimono");
}

#[test]
fn start_height_picks_the_layer() {
    let mut coordinator = Coordinator::new(&Catalog::sample(), SwipeConfig::immediate()).unwrap();

    // 0.42 of the height: inside the obijime band, which sits inside the obi band
    swipe(&mut coordinator, 168.0, 200.0, 100.0, 0.0);
    assert_eq!(coordinator.active_layer(), Category::Obijime);
    // 0.35: obi only
    swipe(&mut coordinator, 140.0, 200.0, 100.0, 1.0);
    assert_eq!(coordinator.active_layer(), Category::Obi);
    // 0.10: kimono
    swipe(&mut coordinator, 40.0, 200.0, 100.0, 2.0);
    assert_eq!(coordinator.active_layer(), Category::Kimono);

    for category in Category::ALL {
        assert_eq!(coordinator.selection(category).current_index(), 1);
    }
}

#[test]
fn unmeasured_container_routes_to_kimono() {
    let mut coordinator = Coordinator::new(&Catalog::sample(), SwipeConfig::immediate()).unwrap();
    coordinator.pointer_down(pos2(200.0, 168.0), None, 0.0);
    coordinator.pointer_move(pos2(100.0, 168.0), 0.1);
    coordinator.pointer_up(0.2);
    assert_eq!(coordinator.active_layer(), Category::Kimono);
    assert_eq!(coordinator.selection(Category::Kimono).current_index(), 1);
}

#[test]
fn stray_events_without_start_change_nothing() {
    let mut coordinator = Coordinator::new(&Catalog::sample(), SwipeConfig::default()).unwrap();
    coordinator.pointer_move(pos2(0.0, 40.0), 0.0);
    coordinator.pointer_up(0.1);
    coordinator.pointer_up(0.2);
    coordinator.pointer_leave(0.3);
    run_frames(&mut coordinator, 0.3, 1.0);

    for category in Category::ALL {
        assert_eq!(coordinator.selection(category).current_index(), 0);
        assert_eq!(coordinator.layer(category).offset_x(), 0.0);
    }
}

#[test]
fn animated_commit_fires_once_and_leaves_zero_offset() {
    let mut layer = SwipeLayer::new(SwipeConfig::animated(280.0));
    layer.start(200.0, 0.0);
    layer.drag_to(50.0, 0.1);
    assert_eq!(layer.end(0.2), None);
    assert_eq!(layer.offset_x(), -280.0);
    assert_eq!(layer.phase(), TransitionPhase::Committing {
        direction: SwipeDirection::Left,
        fire_at: 0.2 + 0.3,
    });

    let mut fired = Vec::new();
    let mut now = 0.2;
    while now < 2.0 {
        if let Some(direction) = layer.tick(now) {
            assert!(now >= 0.5 - 1e-9, "commit fired early at {now}");
            assert_eq!(layer.offset_x(), 0.0);
            assert_eq!(layer.displayed_offset(now), 0.0);
            fired.push(direction);
        }
        now += 1.0 / 60.0;
    }
    assert_eq!(fired, vec![SwipeDirection::Left]);
    assert_eq!(layer.phase(), TransitionPhase::Idle);
    assert!(layer.transition_enabled());
}

#[test]
fn settling_suppresses_transition_for_exactly_one_frame() {
    let mut layer = SwipeLayer::new(SwipeConfig::animated(280.0));
    layer.start(0.0, 0.0);
    layer.drag_to(200.0, 0.1);
    layer.end(0.2);

    assert_eq!(layer.tick(0.6), Some(SwipeDirection::Right));
    assert!(!layer.transition_enabled());
    assert_eq!(layer.tick(0.6 + 1.0 / 60.0), None);
    assert!(layer.transition_enabled());
}
