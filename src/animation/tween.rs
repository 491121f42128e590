use crate::{
    animation::ease::Ease,
    animation::timeline::Timeline,
    foundation::core::{FrameIndex, Fps},
    foundation::error::{VernissageError, VernissageResult},
    stage::model::{ElementId, Prop, Stage},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TweenId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimelineId(pub u64);

/// One property transform. With `from: None` the tween departs from the
/// value the property holds when the tween first advances (the usual
/// "to"-tween). A zero duration applies `to` on the next tick.
#[derive(Clone, Debug)]
pub struct TweenSpec {
    pub target: ElementId,
    pub prop: Prop,
    pub from: Option<f64>,
    pub to: f64,
    pub duration_secs: f64,
    pub ease: Ease,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimEvent {
    TweenCompleted(TweenId),
    TimelineCompleted(TimelineId),
}

#[derive(Clone, Debug)]
struct ActiveTween {
    id: TweenId,
    group: Option<TimelineId>,
    target: ElementId,
    prop: Prop,
    from: Option<f64>,
    to: f64,
    start: FrameIndex,
    duration: u64, // frames
    ease: Ease,
}

/// The frame-loop tween engine.
///
/// All waiting in this crate is expressed as completion events returned
/// from [`Animator::tick`]; there are no wall-clock timers. At most one
/// tween is ever live per `(target, prop)` pair: scheduling a conflicting
/// tween silently replaces the old one, and [`Animator::cancel_target`]
/// silently drops every tween touching an element. Replaced and cancelled
/// tweens fire no events.
#[derive(Debug)]
pub struct Animator {
    fps: Fps,
    frame: FrameIndex,
    tweens: Vec<ActiveTween>,
    next_tween: u64,
    next_timeline: u64,
}

impl Animator {
    pub fn new(fps: Fps) -> Self {
        Self {
            fps,
            frame: FrameIndex(0),
            tweens: Vec::new(),
            next_tween: 0,
            next_timeline: 0,
        }
    }

    pub fn fps(&self) -> Fps {
        self.fps
    }

    pub fn frame(&self) -> FrameIndex {
        self.frame
    }

    pub fn active_len(&self) -> usize {
        self.tweens.len()
    }

    pub fn is_idle(&self) -> bool {
        self.tweens.is_empty()
    }

    pub fn has_tween(&self, id: TweenId) -> bool {
        self.tweens.iter().any(|tw| tw.id == id)
    }

    /// Schedule a tween starting on the next tick.
    pub fn animate(&mut self, spec: TweenSpec) -> VernissageResult<TweenId> {
        self.schedule(spec, 0, None)
    }

    /// Apply a timeline: immediate sets land on the stage now, positioned
    /// steps are scheduled relative to the current frame. The returned id
    /// completes once the last surviving member tween completes.
    pub fn play(&mut self, stage: &mut Stage, timeline: Timeline) -> VernissageResult<TimelineId> {
        if timeline.steps.is_empty() {
            return Err(VernissageError::animation("timeline has no steps"));
        }
        for (target, prop, value) in &timeline.sets {
            stage.set(*target, *prop, *value);
        }
        let group = TimelineId(self.next_timeline);
        self.next_timeline += 1;
        for step in timeline.steps {
            let offset = self.fps.secs_to_frames(step.at_secs);
            self.schedule(step.spec, offset, Some(group))?;
        }
        Ok(group)
    }

    fn schedule(
        &mut self,
        spec: TweenSpec,
        offset_frames: u64,
        group: Option<TimelineId>,
    ) -> VernissageResult<TweenId> {
        if !spec.duration_secs.is_finite() || spec.duration_secs < 0.0 {
            return Err(VernissageError::animation(
                "tween duration must be finite and >= 0",
            ));
        }
        if !spec.to.is_finite() || spec.from.is_some_and(|f| !f.is_finite()) {
            return Err(VernissageError::animation("tween endpoints must be finite"));
        }

        // At most one live tween per (target, prop): last writer wins.
        self.tweens
            .retain(|tw| !(tw.target == spec.target && tw.prop == spec.prop));

        let id = TweenId(self.next_tween);
        self.next_tween += 1;
        self.tweens.push(ActiveTween {
            id,
            group,
            target: spec.target,
            prop: spec.prop,
            from: spec.from,
            to: spec.to,
            start: FrameIndex(self.frame.0.saturating_add(offset_frames)),
            duration: self.fps.secs_to_frames(spec.duration_secs),
            ease: spec.ease,
        });
        Ok(id)
    }

    /// Drop every tween touching `target`, silently. The `killTweensOf`
    /// of this engine.
    pub fn cancel_target(&mut self, target: ElementId) -> usize {
        let before = self.tweens.len();
        self.tweens.retain(|tw| tw.target != target);
        before - self.tweens.len()
    }

    /// Drop every member of a timeline, silently.
    pub fn cancel_timeline(&mut self, id: TimelineId) -> usize {
        let before = self.tweens.len();
        self.tweens.retain(|tw| tw.group != Some(id));
        before - self.tweens.len()
    }

    /// Advance one frame: interpolate every live tween into the stage and
    /// report completions. A tween scheduled at frame `s` with duration `d`
    /// reaches its target value exactly on the tick that lands on `s + d`.
    pub fn tick(&mut self, stage: &mut Stage) -> Vec<AnimEvent> {
        self.frame = FrameIndex(self.frame.0 + 1);
        let f = self.frame.0;

        for tw in &mut self.tweens {
            if f < tw.start.0 {
                continue;
            }
            let from = *tw
                .from
                .get_or_insert_with(|| stage.get(tw.target, tw.prop));
            let local = f - tw.start.0;
            let t = if tw.duration == 0 {
                1.0
            } else {
                (local as f64 / tw.duration as f64).min(1.0)
            };
            let value = from + (tw.to - from) * tw.ease.apply(t);
            stage.set(tw.target, tw.prop, value);
        }

        let mut events = Vec::new();
        let mut finished_groups: Vec<TimelineId> = Vec::new();
        self.tweens.retain(|tw| {
            let done = f >= tw.start.0 && (f - tw.start.0) >= tw.duration;
            if done {
                events.push(AnimEvent::TweenCompleted(tw.id));
                if let Some(g) = tw.group
                    && !finished_groups.contains(&g)
                {
                    finished_groups.push(g);
                }
            }
            !done
        });
        for g in finished_groups {
            if !self.tweens.iter().any(|tw| tw.group == Some(g)) {
                events.push(AnimEvent::TimelineCompleted(g));
            }
        }
        events
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
