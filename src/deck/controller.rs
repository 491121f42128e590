use crate::{
    animation::ease::Ease,
    animation::timeline::Timeline,
    animation::tween::{AnimEvent, Animator, TimelineId},
    catalogue::model::Catalogue,
    foundation::error::{VernissageError, VernissageResult},
    stage::model::{ElementId, Prop, Stage},
};

/// Horizontal entry offset of the incoming center image, in `XPercent`.
pub const ENTER_OFFSET_PERCENT: f64 = 50.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

impl Direction {
    fn enter_offset(self) -> f64 {
        match self {
            Self::Next => ENTER_OFFSET_PERCENT,
            Self::Prev => -ENTER_OFFSET_PERCENT,
        }
    }
}

/// The fixed element group of one slide, allocated once at mount and
/// addressed by catalogue index.
#[derive(Clone, Copy, Debug)]
pub struct SlideVisual {
    pub bg: ElementId,
    pub center: ElementId,
    pub title: ElementId,
    pub subtitle: ElementId,
}

impl SlideVisual {
    fn mount(stage: &mut Stage, index: usize) -> Self {
        Self {
            bg: stage.alloc(format!("slide-{index}-bg")),
            center: stage.alloc(format!("slide-{index}-center")),
            title: stage.alloc(format!("slide-{index}-title")),
            subtitle: stage.alloc(format!("slide-{index}-subtitle")),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Phase {
    Idle,
    Transitioning {
        next_index: usize,
        timeline: TimelineId,
    },
}

/// Cyclic project carousel with a transition lock.
///
/// Two states: `Idle` (settled on `current_index`, exactly one slide
/// opaque) and `Transitioning` (locked, a timeline is animating toward
/// `next_index`). Requests made while locked are dropped, never queued;
/// the lock is the only guard against re-entrant transitions.
#[derive(Debug)]
pub struct SlideDeck {
    slides: Vec<SlideVisual>,
    current: usize,
    phase: Phase,
}

impl SlideDeck {
    /// Allocate one element group per catalogue project and settle the
    /// initial visual state: slide 0 fully visible, every other slide
    /// hidden.
    pub fn mount(stage: &mut Stage, catalogue: &Catalogue) -> VernissageResult<Self> {
        if catalogue.is_empty() {
            return Err(VernissageError::validation(
                "slide deck needs at least one project",
            ));
        }
        let slides: Vec<SlideVisual> = (0..catalogue.len())
            .map(|i| SlideVisual::mount(stage, i))
            .collect();
        for (i, s) in slides.iter().enumerate() {
            if i == 0 {
                stage.set(s.bg, Prop::Opacity, 1.0);
                stage.set(s.bg, Prop::ZIndex, 2.0);
                stage.set(s.center, Prop::Opacity, 1.0);
                stage.set(s.center, Prop::XPercent, 0.0);
                stage.set(s.title, Prop::Opacity, 1.0);
                stage.set(s.title, Prop::Y, 0.0);
                stage.set(s.subtitle, Prop::Opacity, 1.0);
                stage.set(s.subtitle, Prop::Y, 0.0);
            } else {
                stage.set(s.bg, Prop::Opacity, 0.0);
                stage.set(s.bg, Prop::ZIndex, 0.0);
                stage.set(s.center, Prop::Opacity, 0.0);
                stage.set(s.title, Prop::Opacity, 0.0);
                stage.set(s.subtitle, Prop::Opacity, 0.0);
            }
        }
        Ok(Self {
            slides,
            current: 0,
            phase: Phase::Idle,
        })
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn is_locked(&self) -> bool {
        self.phase != Phase::Idle
    }

    pub fn slide(&self, index: usize) -> SlideVisual {
        self.slides[index]
    }

    pub fn next(&mut self, animator: &mut Animator, stage: &mut Stage) -> VernissageResult<bool> {
        self.go_to(self.current as i64 + 1, Direction::Next, animator, stage)
    }

    pub fn prev(&mut self, animator: &mut Animator, stage: &mut Stage) -> VernissageResult<bool> {
        self.go_to(self.current as i64 - 1, Direction::Prev, animator, stage)
    }

    /// Begin a transition to `target` (any integer; wraps cyclically).
    /// Returns `false` without touching anything while locked or when the
    /// wrapped target is the current slide.
    #[tracing::instrument(skip(self, animator, stage))]
    pub fn go_to(
        &mut self,
        target: i64,
        direction: Direction,
        animator: &mut Animator,
        stage: &mut Stage,
    ) -> VernissageResult<bool> {
        if self.phase != Phase::Idle {
            tracing::debug!("deck is locked, request dropped");
            return Ok(false);
        }
        let n = self.slides.len() as i64;
        let next_index = (((target % n) + n) % n) as usize;
        if next_index == self.current {
            return Ok(false);
        }

        let cur = self.slides[self.current];
        let next = self.slides[next_index];
        let offset = direction.enter_offset();

        let timeline = Timeline::new()
            // Prepare the incoming slide hidden and positioned.
            .set(next.bg, Prop::ZIndex, 1.0)
            .set(next.bg, Prop::Opacity, 0.0)
            .set(next.center, Prop::XPercent, offset)
            .set(next.center, Prop::Opacity, 0.0)
            .set(next.title, Prop::Y, 30.0)
            .set(next.title, Prop::Opacity, 0.0)
            .set(next.subtitle, Prop::Y, 30.0)
            .set(next.subtitle, Prop::Opacity, 0.0)
            // Outgoing slide exits.
            .to(0.0, cur.bg, Prop::Opacity, 0.0, 0.8, Ease::InOutQuad)
            .to(0.0, cur.center, Prop::Opacity, 0.0, 0.8, Ease::InOutQuad)
            .to(0.0, cur.title, Prop::Y, -30.0, 0.6, Ease::InOutQuad)
            .to(0.0, cur.title, Prop::Opacity, 0.0, 0.6, Ease::InOutQuad)
            .to(0.0, cur.subtitle, Prop::Y, -30.0, 0.6, Ease::InOutQuad)
            .to(0.0, cur.subtitle, Prop::Opacity, 0.0, 0.6, Ease::InOutQuad)
            // Incoming slide enters: bg first, center image slides in,
            // texts trail with a fixed stagger.
            .to(0.1, next.bg, Prop::ZIndex, 2.0, 0.0, Ease::Linear)
            .to(0.1, next.bg, Prop::Opacity, 1.0, 0.8, Ease::InOutQuad)
            .to(0.2, next.center, Prop::XPercent, 0.0, 1.0, Ease::OutCubic)
            .to(0.2, next.center, Prop::Opacity, 1.0, 1.0, Ease::OutCubic)
            .to(0.3, next.title, Prop::Y, 0.0, 0.8, Ease::OutCubic)
            .to(0.3, next.title, Prop::Opacity, 1.0, 0.8, Ease::OutCubic)
            .to(0.4, next.subtitle, Prop::Y, 0.0, 0.8, Ease::OutCubic)
            .to(0.4, next.subtitle, Prop::Opacity, 1.0, 0.8, Ease::OutCubic);

        let timeline = animator.play(stage, timeline)?;
        tracing::debug!(from = self.current, to = next_index, "slide transition started");
        self.phase = Phase::Transitioning {
            next_index,
            timeline,
        };
        Ok(true)
    }

    /// Observe an engine event; on our timeline's completion, commit the
    /// index change and unlock. Returns `true` when the deck just settled.
    pub fn on_event(&mut self, stage: &mut Stage, event: AnimEvent) -> bool {
        let Phase::Transitioning {
            next_index,
            timeline,
        } = self.phase
        else {
            return false;
        };
        if event != AnimEvent::TimelineCompleted(timeline) {
            return false;
        }
        // Drop the outgoing bg below the settled slide.
        stage.set(self.slides[self.current].bg, Prop::ZIndex, 0.0);
        self.current = next_index;
        self.phase = Phase::Idle;
        tracing::debug!(index = self.current, "deck settled");
        true
    }

    /// Number of slides whose background is visible at all. While idle this
    /// is exactly one.
    pub fn opaque_slide_count(&self, stage: &Stage) -> usize {
        self.slides
            .iter()
            .filter(|s| stage.get(s.bg, Prop::Opacity) > 0.0)
            .count()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/deck/controller.rs"]
mod tests;
