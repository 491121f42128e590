use std::path::PathBuf;

use clap::{Parser, Subcommand};
use vernissage::{
    Animator, Catalogue, Fps, Prop, Rect, Router, ScrollScene, SlideDeck, Stage,
    TransitionCoordinator, TransitionTiming, Viewport, gallery_pin, mount_gallery,
    mount_portfolio, portfolio_bindings, track_width,
};

#[derive(Parser, Debug)]
#[command(name = "vernissage", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse and validate a catalogue JSON.
    Validate(ValidateArgs),
    /// Run a scripted choreography session against a catalogue.
    Simulate(SimulateArgs),
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Catalogue JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Catalogue JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Frame rate of the simulated update loop.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Viewport width in CSS pixels.
    #[arg(long, default_value_t = 1440.0)]
    width: f64,

    /// Viewport height in CSS pixels.
    #[arg(long, default_value_t = 900.0)]
    height: f64,

    /// Length of the scroll sweep, in viewport heights.
    #[arg(long, default_value_t = 4.0)]
    scroll_height: f64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Validate(args) => cmd_validate(args),
        Command::Simulate(args) => cmd_simulate(args),
    }
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let catalogue = Catalogue::from_path(&args.in_path)?;
    println!(
        "ok: {} project(s), default image '{}'",
        catalogue.len(),
        catalogue.default_image
    );
    for (i, p) in catalogue.projects.iter().enumerate() {
        println!(
            "  [{i}] {} ({}) — {} gallery image(s)",
            p.title,
            if p.category.is_empty() { "-" } else { &p.category },
            p.gallery.len()
        );
    }
    Ok(())
}

/// Path holder for the demo; real routing lives in the host application.
struct DemoRouter {
    path: String,
}

impl Router for DemoRouter {
    fn navigate(&mut self, path: &str) {
        self.path = path.to_owned();
    }

    fn current_path(&self) -> &str {
        &self.path
    }
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let catalogue = Catalogue::from_path(&args.in_path)?;
    let fps = Fps::new(args.fps, 1)?;
    let viewport = Viewport::new(args.width, args.height)?;

    let mut stage = Stage::new();
    let mut animator = Animator::new(fps);
    let mut router = DemoRouter {
        path: "/".to_owned(),
    };
    let mut coordinator = TransitionCoordinator::mount(&mut stage, TransitionTiming::default());
    let mut deck = SlideDeck::mount(&mut stage, &catalogue)?;

    // Initial reveal, then one full deck cycle.
    coordinator.reveal_on_mount(&mut animator, &mut stage)?;
    run_until_idle(&mut animator, &mut stage, &mut coordinator, &mut deck, &mut router)?;
    let coverage = coordinator.overlay().coverage(&stage);
    anyhow::ensure!(coverage == 0.0, "initial reveal settled at coverage {coverage}");
    anyhow::ensure!(
        !coordinator.overlay().blocks_input(&stage),
        "revealed overlay still blocks input"
    );
    println!("revealed: coverage {coverage}");

    for _ in 0..catalogue.len() {
        deck.next(&mut animator, &mut stage)?;
        run_until_idle(&mut animator, &mut stage, &mut coordinator, &mut deck, &mut router)?;
    }
    anyhow::ensure!(
        deck.current_index() == 0,
        "full deck cycle ended at index {} instead of 0",
        deck.current_index()
    );
    anyhow::ensure!(
        deck.opaque_slide_count(&stage) == 1,
        "{} slides visible after the cycle",
        deck.opaque_slide_count(&stage)
    );
    println!(
        "deck cycled {} slide(s), back at index {}, {} slide visible",
        catalogue.len(),
        deck.current_index(),
        deck.opaque_slide_count(&stage)
    );

    // Page transition to the first project and back.
    coordinator.request_navigation("/project/0", &mut router, &mut animator, &mut stage)?;
    run_until_idle(&mut animator, &mut stage, &mut coordinator, &mut deck, &mut router)?;
    anyhow::ensure!(
        router.current_path() == "/project/0",
        "transition ended on '{}'",
        router.current_path()
    );
    println!("navigated to {}", router.current_path());
    coordinator.request_navigation("/", &mut router, &mut animator, &mut stage)?;
    run_until_idle(&mut animator, &mut stage, &mut coordinator, &mut deck, &mut router)?;
    anyhow::ensure!(
        router.current_path() == "/",
        "return transition ended on '{}'",
        router.current_path()
    );
    let coverage = coordinator.overlay().coverage(&stage);
    anyhow::ensure!(coverage == 0.0, "round trip left coverage at {coverage}");
    println!("navigated back to {}", router.current_path());

    // Scroll sweep over the portfolio section and the gallery pin.
    let mut scene = ScrollScene::new(viewport);
    let portfolio = mount_portfolio(&mut stage, 6, 3);
    stage.set_geometry(
        portfolio.section,
        Rect::new(0.0, viewport.height * 2.0, viewport.width, viewport.height * 3.2),
    );
    portfolio_bindings(&mut scene, &stage, &portfolio)?;

    let project = catalogue.project(0);
    let gallery = mount_gallery(&mut stage, project, viewport, 0.0);
    let pinned = gallery_pin(&mut scene, &stage, &gallery)?;

    let end = viewport.height * args.scroll_height;
    let mut y = 0.0;
    while y <= end {
        scene.set_scroll(&mut stage, y);
        y += viewport.height / 4.0;
    }
    let track_x = stage.get(gallery.track, Prop::X);
    if pinned {
        let overflow = track_width(project) - viewport.width;
        let expected = -scene.scroll_y().min(overflow.max(0.0));
        anyhow::ensure!(
            (track_x - expected).abs() < 1e-6,
            "gallery track at x {track_x}, expected {expected}"
        );
    } else {
        anyhow::ensure!(
            track_x == 0.0,
            "gallery track moved to x {track_x} without a pin"
        );
    }
    println!(
        "scroll sweep done: {} binding(s), gallery pin installed: {pinned}",
        scene.bindings_len()
    );

    Ok(())
}

fn run_until_idle(
    animator: &mut Animator,
    stage: &mut Stage,
    coordinator: &mut TransitionCoordinator,
    deck: &mut SlideDeck,
    router: &mut DemoRouter,
) -> anyhow::Result<()> {
    // A transition plus a deck move never outlasts a few seconds of frames.
    for _ in 0..(60 * 30) {
        let events = animator.tick(stage);
        for ev in events {
            coordinator.on_event(ev, router, animator, stage)?;
            deck.on_event(stage, ev);
        }
        if animator.is_idle() && !coordinator.is_transitioning() && !deck.is_locked() {
            return Ok(());
        }
    }
    anyhow::bail!("simulation did not settle");
}
