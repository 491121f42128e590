use crate::{
    animation::ease::Ease,
    animation::tween::{AnimEvent, Animator, TweenId, TweenSpec},
    foundation::error::VernissageResult,
    stage::model::{ElementId, Prop, Stage},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayMotion {
    Cover,
    Reveal,
}

/// The full-viewport curtain used during page transitions.
///
/// Coverage is the element's `ScaleY`, normalized `[0, 1]`. The overlay is
/// a single owned resource: every `cover`/`reveal` first cancels whatever
/// was animating it, so at most one animation ever targets the curtain.
/// Pointer blocking goes up the moment a cover starts and comes down only
/// once a reveal has settled at exactly zero, so there is never a frame
/// where an invisible curtain still eats input.
#[derive(Debug)]
pub struct Overlay {
    element: ElementId,
    motion: Option<(TweenId, OverlayMotion)>,
}

impl Overlay {
    /// Allocate the curtain element. A freshly mounted page arrives under
    /// full coverage; the first reveal uncovers it.
    pub fn mount(stage: &mut Stage) -> Self {
        let element = stage.alloc("page-transition-overlay");
        stage.set(element, Prop::ScaleY, 1.0);
        stage.set_pointer_events(element, true);
        Self {
            element,
            motion: None,
        }
    }

    pub fn element(&self) -> ElementId {
        self.element
    }

    pub fn coverage(&self, stage: &Stage) -> f64 {
        stage.get(self.element, Prop::ScaleY)
    }

    pub fn blocks_input(&self, stage: &Stage) -> bool {
        stage.pointer_events(self.element)
    }

    pub fn is_animating(&self) -> bool {
        self.motion.is_some()
    }

    pub fn cover(
        &mut self,
        animator: &mut Animator,
        stage: &mut Stage,
        duration_secs: f64,
        ease: Ease,
    ) -> VernissageResult<TweenId> {
        self.start(animator, stage, OverlayMotion::Cover, duration_secs, ease)
    }

    pub fn reveal(
        &mut self,
        animator: &mut Animator,
        stage: &mut Stage,
        duration_secs: f64,
        ease: Ease,
    ) -> VernissageResult<TweenId> {
        self.start(animator, stage, OverlayMotion::Reveal, duration_secs, ease)
    }

    fn start(
        &mut self,
        animator: &mut Animator,
        stage: &mut Stage,
        motion: OverlayMotion,
        duration_secs: f64,
        ease: Ease,
    ) -> VernissageResult<TweenId> {
        animator.cancel_target(self.element);
        // Non-zero coverage may block input; raise it up front.
        stage.set_pointer_events(self.element, true);
        let to = match motion {
            OverlayMotion::Cover => 1.0,
            OverlayMotion::Reveal => 0.0,
        };
        let id = animator.animate(TweenSpec {
            target: self.element,
            prop: Prop::ScaleY,
            from: None,
            to,
            duration_secs,
            ease,
        })?;
        tracing::debug!(?motion, tween = id.0, "overlay motion started");
        self.motion = Some((id, motion));
        Ok(id)
    }

    /// Abort any in-flight motion, leaving coverage wherever it was.
    pub fn cancel(&mut self, animator: &mut Animator) {
        animator.cancel_target(self.element);
        self.motion = None;
    }

    /// Observe an engine event. Returns the motion that just finished, if
    /// it was ours.
    pub fn on_event(&mut self, stage: &mut Stage, event: AnimEvent) -> Option<OverlayMotion> {
        let AnimEvent::TweenCompleted(id) = event else {
            return None;
        };
        let (pending, motion) = self.motion?;
        if pending != id {
            return None;
        }
        self.motion = None;
        if motion == OverlayMotion::Reveal && self.coverage(stage) == 0.0 {
            stage.set_pointer_events(self.element, false);
        }
        Some(motion)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transition/overlay.rs"]
mod tests;
