use crate::{
    animation::ease::Ease,
    animation::tween::TweenSpec,
    foundation::math::shuffled_indices,
    stage::model::{ElementId, Prop},
};

#[derive(Clone, Debug)]
pub struct TimelineStep {
    pub at_secs: f64,
    pub spec: TweenSpec,
}

/// A declarative bundle of property transforms played as one unit.
///
/// `sets` are applied to the stage the moment the timeline is played;
/// `steps` are tweens positioned in seconds relative to play time.
/// Because the engine keeps at most one live tween per `(target, prop)`,
/// a timeline should carry at most one step per pair; a later step on the
/// same pair replaces the earlier one when scheduled.
#[derive(Clone, Debug, Default)]
pub struct Timeline {
    pub(crate) sets: Vec<(ElementId, Prop, f64)>,
    pub(crate) steps: Vec<TimelineStep>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps_len(&self) -> usize {
        self.steps.len()
    }

    /// Immediate write applied at play time, before any step runs.
    pub fn set(mut self, target: ElementId, prop: Prop, value: f64) -> Self {
        self.sets.push((target, prop, value));
        self
    }

    /// Tween from the property's current value to `to`.
    pub fn to(
        mut self,
        at_secs: f64,
        target: ElementId,
        prop: Prop,
        to: f64,
        duration_secs: f64,
        ease: Ease,
    ) -> Self {
        self.steps.push(TimelineStep {
            at_secs,
            spec: TweenSpec {
                target,
                prop,
                from: None,
                to,
                duration_secs,
                ease,
            },
        });
        self
    }

    /// Tween with an explicit departure value.
    pub fn from_to(
        mut self,
        at_secs: f64,
        target: ElementId,
        prop: Prop,
        from: f64,
        to: f64,
        duration_secs: f64,
        ease: Ease,
    ) -> Self {
        self.steps.push(TimelineStep {
            at_secs,
            spec: TweenSpec {
                target,
                prop,
                from: Some(from),
                to,
                duration_secs,
                ease,
            },
        });
        self
    }

    /// One step per target, each offset `each_secs` after the previous.
    pub fn stagger_to(
        mut self,
        at_secs: f64,
        targets: &[ElementId],
        prop: Prop,
        to: f64,
        duration_secs: f64,
        each_secs: f64,
        ease: Ease,
    ) -> Self {
        for (i, &target) in targets.iter().enumerate() {
            self = self.to(
                at_secs + each_secs * i as f64,
                target,
                prop,
                to,
                duration_secs,
                ease,
            );
        }
        self
    }

    /// Distribute a total stagger budget across targets in a seeded,
    /// deterministic shuffle order (the `from: "random"` stagger).
    pub fn stagger_to_shuffled(
        mut self,
        at_secs: f64,
        targets: &[ElementId],
        prop: Prop,
        to: f64,
        duration_secs: f64,
        total_secs: f64,
        seed: u64,
        ease: Ease,
    ) -> Self {
        let n = targets.len();
        if n == 0 {
            return self;
        }
        let each = if n > 1 {
            total_secs / (n - 1) as f64
        } else {
            0.0
        };
        for (slot, &idx) in shuffled_indices(n, seed).iter().enumerate() {
            self = self.to(
                at_secs + each * slot as f64,
                targets[idx],
                prop,
                to,
                duration_secs,
                ease,
            );
        }
        self
    }

    /// Play-time position at which the last step finishes, in seconds.
    pub fn end_secs(&self) -> f64 {
        self.steps
            .iter()
            .map(|s| s.at_secs + s.spec.duration_secs)
            .fold(0.0, f64::max)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timeline.rs"]
mod tests;
