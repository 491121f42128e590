use super::*;
use crate::foundation::core::Fps;

struct TestRouter {
    path: String,
    log: Vec<String>,
}

impl TestRouter {
    fn at(path: &str) -> Self {
        Self {
            path: path.to_owned(),
            log: Vec::new(),
        }
    }
}

impl Router for TestRouter {
    fn navigate(&mut self, path: &str) {
        self.path = path.to_owned();
        self.log.push(path.to_owned());
    }

    fn current_path(&self) -> &str {
        &self.path
    }
}

fn setup() -> (Animator, Stage, TransitionCoordinator, TestRouter) {
    let mut stage = Stage::new();
    let coordinator = TransitionCoordinator::mount(&mut stage, TransitionTiming::default());
    (
        Animator::new(Fps::new(60, 1).unwrap()),
        stage,
        coordinator,
        TestRouter::at("/"),
    )
}

fn run_to_idle(
    coordinator: &mut TransitionCoordinator,
    router: &mut TestRouter,
    animator: &mut Animator,
    stage: &mut Stage,
) {
    for _ in 0..600 {
        for ev in animator.tick(stage) {
            coordinator.on_event(ev, router, animator, stage).unwrap();
        }
        if !coordinator.is_transitioning() {
            return;
        }
    }
    panic!("transition never settled");
}

#[test]
fn pipeline_covers_navigates_then_reveals() {
    let (mut animator, mut stage, mut coordinator, mut router) = setup();
    let started = coordinator
        .request_navigation("/project/2", &mut router, &mut animator, &mut stage)
        .unwrap();
    assert!(started);
    assert!(coordinator.is_transitioning());

    // Halfway through the cover the route must not have changed yet.
    for _ in 0..30 {
        for ev in animator.tick(&mut stage) {
            coordinator
                .on_event(ev, &mut router, &mut animator, &mut stage)
                .unwrap();
        }
    }
    assert!(router.log.is_empty());

    run_to_idle(&mut coordinator, &mut router, &mut animator, &mut stage);
    assert_eq!(router.current_path(), "/project/2");
    assert_eq!(router.log, vec!["/project/2".to_owned()]);
    assert_eq!(coordinator.overlay().coverage(&stage), 0.0);
    assert!(!coordinator.overlay().blocks_input(&stage));
}

#[test]
fn same_destination_as_current_is_a_no_op() {
    let (mut animator, mut stage, mut coordinator, mut router) = setup();
    let started = coordinator
        .request_navigation("/", &mut router, &mut animator, &mut stage)
        .unwrap();
    assert!(!started);
    assert!(!coordinator.is_transitioning());
    assert!(animator.is_idle());
    assert!(router.log.is_empty());
}

#[test]
fn duplicate_in_flight_request_is_dropped() {
    let (mut animator, mut stage, mut coordinator, mut router) = setup();
    assert!(
        coordinator
            .request_navigation("/project/0", &mut router, &mut animator, &mut stage)
            .unwrap()
    );
    for _ in 0..10 {
        animator.tick(&mut stage);
    }
    assert!(
        !coordinator
            .request_navigation("/project/0", &mut router, &mut animator, &mut stage)
            .unwrap()
    );

    run_to_idle(&mut coordinator, &mut router, &mut animator, &mut stage);
    assert_eq!(router.log, vec!["/project/0".to_owned()]);
}

#[test]
fn new_destination_supersedes_the_in_flight_one() {
    let (mut animator, mut stage, mut coordinator, mut router) = setup();
    assert!(
        coordinator
            .request_navigation("/project/0", &mut router, &mut animator, &mut stage)
            .unwrap()
    );
    for _ in 0..20 {
        for ev in animator.tick(&mut stage) {
            coordinator
                .on_event(ev, &mut router, &mut animator, &mut stage)
                .unwrap();
        }
    }
    assert!(
        coordinator
            .request_navigation("/project/1", &mut router, &mut animator, &mut stage)
            .unwrap()
    );
    assert_eq!(animator.active_len(), 1);

    run_to_idle(&mut coordinator, &mut router, &mut animator, &mut stage);
    // The superseded destination is never visited.
    assert_eq!(router.log, vec!["/project/1".to_owned()]);
    assert_eq!(router.current_path(), "/project/1");
}

#[test]
fn reveal_on_mount_settles_without_navigating() {
    let (mut animator, mut stage, mut coordinator, mut router) = setup();
    coordinator
        .reveal_on_mount(&mut animator, &mut stage)
        .unwrap();
    assert!(coordinator.is_transitioning());
    run_to_idle(&mut coordinator, &mut router, &mut animator, &mut stage);
    assert_eq!(coordinator.overlay().coverage(&stage), 0.0);
    assert!(router.log.is_empty());
}

#[test]
fn navigation_requested_mid_reveal_starts_a_cover() {
    let (mut animator, mut stage, mut coordinator, mut router) = setup();
    coordinator
        .reveal_on_mount(&mut animator, &mut stage)
        .unwrap();
    for _ in 0..15 {
        for ev in animator.tick(&mut stage) {
            coordinator
                .on_event(ev, &mut router, &mut animator, &mut stage)
                .unwrap();
        }
    }
    assert!(
        coordinator
            .request_navigation("/project/1", &mut router, &mut animator, &mut stage)
            .unwrap()
    );
    run_to_idle(&mut coordinator, &mut router, &mut animator, &mut stage);
    assert_eq!(router.current_path(), "/project/1");
}

#[test]
fn cancel_aborts_without_navigating() {
    let (mut animator, mut stage, mut coordinator, mut router) = setup();
    coordinator
        .request_navigation("/project/0", &mut router, &mut animator, &mut stage)
        .unwrap();
    for _ in 0..10 {
        animator.tick(&mut stage);
    }
    coordinator.cancel(&mut animator);
    assert!(!coordinator.is_transitioning());
    assert!(animator.is_idle());
    assert_eq!(router.current_path(), "/");
    assert!(router.log.is_empty());
}
