use super::*;
use crate::foundation::core::Fps;

fn setup() -> (Animator, Stage, Overlay) {
    let mut stage = Stage::new();
    let overlay = Overlay::mount(&mut stage);
    (Animator::new(Fps::new(60, 1).unwrap()), stage, overlay)
}

fn run_to_settled(animator: &mut Animator, stage: &mut Stage, overlay: &mut Overlay) {
    for _ in 0..600 {
        for ev in animator.tick(stage) {
            overlay.on_event(stage, ev);
        }
        if !overlay.is_animating() {
            return;
        }
    }
    panic!("overlay never settled");
}

#[test]
fn mounts_covering_and_blocking() {
    let (_, stage, overlay) = setup();
    assert_eq!(overlay.coverage(&stage), 1.0);
    assert!(overlay.blocks_input(&stage));
}

#[test]
fn reveal_settles_at_zero_and_releases_input() {
    let (mut animator, mut stage, mut overlay) = setup();
    overlay
        .reveal(&mut animator, &mut stage, 1.0, Ease::InOutQuart)
        .unwrap();
    run_to_settled(&mut animator, &mut stage, &mut overlay);
    assert_eq!(overlay.coverage(&stage), 0.0);
    assert!(!overlay.blocks_input(&stage));
}

#[test]
fn cover_then_immediate_reveal_settles_at_zero() {
    let (mut animator, mut stage, mut overlay) = setup();
    overlay
        .reveal(&mut animator, &mut stage, 0.5, Ease::Linear)
        .unwrap();
    run_to_settled(&mut animator, &mut stage, &mut overlay);

    // A cover immediately overridden by a reveal must end fully revealed,
    // not at an intermediate value.
    overlay
        .cover(&mut animator, &mut stage, 1.0, Ease::InOutQuart)
        .unwrap();
    overlay
        .reveal(&mut animator, &mut stage, 1.0, Ease::InOutQuart)
        .unwrap();
    assert_eq!(animator.active_len(), 1);
    run_to_settled(&mut animator, &mut stage, &mut overlay);
    assert_eq!(overlay.coverage(&stage), 0.0);
    assert!(!overlay.blocks_input(&stage));
}

#[test]
fn input_stays_blocked_while_revealing() {
    let (mut animator, mut stage, mut overlay) = setup();
    overlay
        .reveal(&mut animator, &mut stage, 1.0, Ease::Linear)
        .unwrap();
    for _ in 0..30 {
        for ev in animator.tick(&mut stage) {
            overlay.on_event(&mut stage, ev);
        }
    }
    assert!(overlay.coverage(&stage) > 0.0);
    assert!(overlay.blocks_input(&stage));
}

#[test]
fn cancel_keeps_coverage_where_it_was() {
    let (mut animator, mut stage, mut overlay) = setup();
    overlay
        .reveal(&mut animator, &mut stage, 1.0, Ease::Linear)
        .unwrap();
    for _ in 0..30 {
        animator.tick(&mut stage);
    }
    let mid = overlay.coverage(&stage);
    overlay.cancel(&mut animator);
    assert!(animator.is_idle());
    for _ in 0..60 {
        assert!(animator.tick(&mut stage).is_empty());
    }
    assert_eq!(overlay.coverage(&stage), mid);
}
