use crate::{
    animation::ease::Ease,
    animation::tween::{AnimEvent, Animator},
    foundation::error::VernissageResult,
    stage::model::Stage,
    transition::overlay::{Overlay, OverlayMotion},
};

/// The routing collaborator. The engine only triggers route changes and
/// reads the current path; it never implements routing itself.
pub trait Router {
    fn navigate(&mut self, path: &str);
    fn current_path(&self) -> &str;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionTiming {
    pub cover_secs: f64,
    pub reveal_secs: f64,
    pub ease: Ease,
}

impl Default for TransitionTiming {
    fn default() -> Self {
        // The site covers and reveals in one second each, power4.inOut.
        Self {
            cover_secs: 1.0,
            reveal_secs: 1.0,
            ease: Ease::InOutQuart,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Phase {
    Idle,
    Covering { path: String },
    Revealing,
}

/// Sequential page-transition pipeline: cover, navigate, reveal.
///
/// The coordinator exclusively owns the overlay and runs the three phases
/// in strict order, each gated on the previous phase's completion event.
/// There is no route-change listener: the reveal is chained directly after
/// the `navigate` call.
///
/// Re-entrancy policy: a request for the destination already in flight is
/// dropped; a request for a different destination cancels the in-flight
/// motion and restarts the cover from the overlay's current coverage.
#[derive(Debug)]
pub struct TransitionCoordinator {
    overlay: Overlay,
    timing: TransitionTiming,
    phase: Phase,
}

impl TransitionCoordinator {
    pub fn new(overlay: Overlay, timing: TransitionTiming) -> Self {
        Self {
            overlay,
            timing,
            phase: Phase::Idle,
        }
    }

    pub fn mount(stage: &mut Stage, timing: TransitionTiming) -> Self {
        Self::new(Overlay::mount(stage), timing)
    }

    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    pub fn is_transitioning(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Uncover a freshly mounted page (the initial reveal after load).
    pub fn reveal_on_mount(
        &mut self,
        animator: &mut Animator,
        stage: &mut Stage,
    ) -> VernissageResult<()> {
        self.overlay
            .reveal(animator, stage, self.timing.reveal_secs, self.timing.ease)?;
        self.phase = Phase::Revealing;
        Ok(())
    }

    /// Begin a transition toward `path`. Returns `false` for the no-op
    /// cases: the destination is already current, or already in flight.
    #[tracing::instrument(skip(self, router, animator, stage))]
    pub fn request_navigation<R: Router>(
        &mut self,
        path: &str,
        router: &mut R,
        animator: &mut Animator,
        stage: &mut Stage,
    ) -> VernissageResult<bool> {
        match &self.phase {
            Phase::Covering { path: in_flight } if in_flight == path => {
                tracing::debug!("duplicate request for in-flight destination, dropped");
                return Ok(false);
            }
            Phase::Idle | Phase::Revealing if path == router.current_path() => {
                // Navigating to the page already shown must never start a
                // cover the pipeline would have nothing to reveal from.
                tracing::debug!("destination equals current path, no-op");
                return Ok(false);
            }
            _ => {}
        }

        self.overlay.cancel(animator);
        self.overlay
            .cover(animator, stage, self.timing.cover_secs, self.timing.ease)?;
        self.phase = Phase::Covering {
            path: path.to_owned(),
        };
        Ok(true)
    }

    /// Advance the pipeline on engine events.
    pub fn on_event<R: Router>(
        &mut self,
        event: AnimEvent,
        router: &mut R,
        animator: &mut Animator,
        stage: &mut Stage,
    ) -> VernissageResult<()> {
        let Some(motion) = self.overlay.on_event(stage, event) else {
            return Ok(());
        };
        match (&mut self.phase, motion) {
            (Phase::Covering { path }, OverlayMotion::Cover) => {
                let path = std::mem::take(path);
                tracing::debug!(%path, "cover complete, navigating");
                router.navigate(&path);
                self.overlay
                    .reveal(animator, stage, self.timing.reveal_secs, self.timing.ease)?;
                self.phase = Phase::Revealing;
            }
            (Phase::Revealing, OverlayMotion::Reveal) => {
                tracing::debug!("reveal complete, transition settled");
                self.phase = Phase::Idle;
            }
            (phase, motion) => {
                tracing::warn!(?phase, ?motion, "overlay completion did not match phase");
            }
        }
        Ok(())
    }

    /// Teardown: abort the in-flight motion without navigating.
    pub fn cancel(&mut self, animator: &mut Animator) {
        self.overlay.cancel(animator);
        self.phase = Phase::Idle;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transition/coordinator.rs"]
mod tests;
