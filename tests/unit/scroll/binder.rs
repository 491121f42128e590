use super::*;
use crate::foundation::core::Rect;

fn viewport() -> Viewport {
    Viewport::new(1440.0, 900.0).unwrap()
}

fn section_binding(trigger: ElementId, target: ElementId) -> ScrollBinding {
    ScrollBinding {
        trigger,
        target,
        prop: Prop::Y,
        from: 100.0,
        to: 0.0,
        range: RangeSpec::new(RangeEdge::TOP_BOTTOM, RangeEdge::BOTTOM_TOP),
        ease: Ease::Linear,
    }
}

#[test]
fn bind_requires_trigger_geometry() {
    let mut stage = Stage::new();
    let trigger = stage.alloc("section");
    let target = stage.alloc("heading");
    let mut scene = ScrollScene::new(viewport());
    assert!(matches!(
        scene.bind(&stage, section_binding(trigger, target)),
        Err(VernissageError::Validation(_))
    ));
}

#[test]
fn binding_maps_scroll_linearly_and_clamps_outside_the_range() {
    let mut stage = Stage::new();
    let trigger = stage.alloc("section");
    let target = stage.alloc("heading");
    // Section spans document y 1800..2700; with a 900 px viewport the
    // top-bottom edge resolves to 900 and bottom-top to 2700.
    stage.set_geometry(trigger, Rect::new(0.0, 1800.0, 1440.0, 2700.0));

    let mut scene = ScrollScene::new(viewport());
    scene.bind(&stage, section_binding(trigger, target)).unwrap();

    scene.set_scroll(&mut stage, 0.0);
    assert_eq!(stage.get(target, Prop::Y), 100.0);
    scene.set_scroll(&mut stage, 900.0);
    assert_eq!(stage.get(target, Prop::Y), 100.0);
    scene.set_scroll(&mut stage, 1800.0);
    assert_eq!(stage.get(target, Prop::Y), 50.0);
    scene.set_scroll(&mut stage, 2700.0);
    assert_eq!(stage.get(target, Prop::Y), 0.0);
    scene.set_scroll(&mut stage, 9000.0);
    assert_eq!(stage.get(target, Prop::Y), 0.0);
}

#[test]
fn degenerate_range_stays_inert_at_from() {
    let mut stage = Stage::new();
    let trigger = stage.alloc("section");
    let target = stage.alloc("heading");
    stage.set_geometry(trigger, Rect::new(0.0, 1800.0, 1440.0, 2700.0));

    let mut scene = ScrollScene::new(viewport());
    let mut binding = section_binding(trigger, target);
    binding.range = RangeSpec::new(RangeEdge::TOP_BOTTOM, RangeEdge::TOP_BOTTOM);
    scene.bind(&stage, binding).unwrap();

    scene.set_scroll(&mut stage, 5000.0);
    assert_eq!(stage.get(target, Prop::Y), 100.0);
}

#[test]
fn refresh_follows_moved_geometry() {
    let mut stage = Stage::new();
    let trigger = stage.alloc("section");
    let target = stage.alloc("heading");
    stage.set_geometry(trigger, Rect::new(0.0, 1800.0, 1440.0, 2700.0));

    let mut scene = ScrollScene::new(viewport());
    scene.bind(&stage, section_binding(trigger, target)).unwrap();
    scene.set_scroll(&mut stage, 2700.0);
    assert_eq!(stage.get(target, Prop::Y), 0.0);

    // An image above finished loading and pushed the section down.
    stage.set_geometry(trigger, Rect::new(0.0, 3600.0, 1440.0, 4500.0));
    scene.refresh(&mut stage).unwrap();
    assert_eq!(stage.get(target, Prop::Y), 100.0);
    scene.set_scroll(&mut stage, 4500.0);
    assert_eq!(stage.get(target, Prop::Y), 0.0);
}

fn gallery(stage: &mut Stage, track_width: f64) -> (ElementId, ElementId) {
    let trigger = stage.alloc("gallery");
    let track = stage.alloc("gallery-track");
    stage.set_geometry(trigger, Rect::new(0.0, 3600.0, 1440.0, 4500.0));
    stage.set_geometry(track, Rect::new(0.0, 3600.0, track_width, 4500.0));
    (trigger, track)
}

#[test]
fn pin_scrubs_the_track_over_its_overflow() {
    let mut stage = Stage::new();
    let (trigger, track) = gallery(&mut stage, 3000.0);
    let mut scene = ScrollScene::new(viewport());
    assert!(
        scene
            .install_pin(&stage, PinScrub::new(trigger, track))
            .unwrap()
    );

    // Overflow is 3000 - 1440 = 1560.
    scene.set_scroll(&mut stage, 3600.0);
    assert_eq!(stage.get(track, Prop::X), 0.0);
    assert_eq!(scene.pin_progress(), Some(0.0));

    scene.set_scroll(&mut stage, 3600.0 + 780.0);
    assert_eq!(stage.get(track, Prop::X), -780.0);
    assert!(scene.is_pinned());
    assert_eq!(stage.get(trigger, Prop::PinOffsetY), 780.0);

    scene.set_scroll(&mut stage, 3600.0 + 2000.0);
    assert_eq!(stage.get(track, Prop::X), -1560.0);
    assert_eq!(stage.get(trigger, Prop::PinOffsetY), 1560.0);
    assert!(!scene.is_pinned());
}

#[test]
fn narrow_viewport_refuses_the_pin() {
    let mut stage = Stage::new();
    let (trigger, track) = gallery(&mut stage, 3000.0);
    let mut scene = ScrollScene::new(Viewport::new(800.0, 600.0).unwrap());
    assert!(
        !scene
            .install_pin(&stage, PinScrub::new(trigger, track))
            .unwrap()
    );
    assert!(!scene.is_pinned());

    scene.set_scroll(&mut stage, 4000.0);
    assert_eq!(stage.get(track, Prop::X), 0.0);
    assert_eq!(scene.pin_progress(), None);
}

#[test]
fn resize_across_the_threshold_installs_and_drops_the_pin() {
    let mut stage = Stage::new();
    let (trigger, track) = gallery(&mut stage, 3000.0);
    let mut scene = ScrollScene::new(Viewport::new(800.0, 600.0).unwrap());
    scene
        .install_pin(&stage, PinScrub::new(trigger, track))
        .unwrap();
    assert_eq!(scene.pin_progress(), None);

    scene.set_viewport(&mut stage, viewport()).unwrap();
    scene.set_scroll(&mut stage, 3600.0 + 780.0);
    assert_eq!(stage.get(track, Prop::X), -780.0);

    scene
        .set_viewport(&mut stage, Viewport::new(800.0, 600.0).unwrap())
        .unwrap();
    assert_eq!(scene.pin_progress(), None);
}

#[test]
fn track_no_wider_than_the_viewport_is_inert() {
    let mut stage = Stage::new();
    let (trigger, track) = gallery(&mut stage, 1440.0);
    let mut scene = ScrollScene::new(viewport());
    assert!(
        scene
            .install_pin(&stage, PinScrub::new(trigger, track))
            .unwrap()
    );
    scene.set_scroll(&mut stage, 4000.0);
    assert_eq!(stage.get(track, Prop::X), 0.0);
    assert!(!scene.is_pinned());
    assert_eq!(scene.pin_progress(), Some(0.0));
}

#[test]
fn clear_stops_all_effects() {
    let mut stage = Stage::new();
    let trigger = stage.alloc("section");
    let target = stage.alloc("heading");
    stage.set_geometry(trigger, Rect::new(0.0, 1800.0, 1440.0, 2700.0));

    let mut scene = ScrollScene::new(viewport());
    scene.bind(&stage, section_binding(trigger, target)).unwrap();
    scene.set_scroll(&mut stage, 2700.0);
    assert_eq!(stage.get(target, Prop::Y), 0.0);

    scene.clear();
    assert_eq!(scene.bindings_len(), 0);
    stage.set(target, Prop::Y, 42.0);
    scene.set_scroll(&mut stage, 1800.0);
    assert_eq!(stage.get(target, Prop::Y), 42.0);
}
