use crate::{
    animation::ease::Ease,
    foundation::core::Viewport,
    foundation::error::{VernissageError, VernissageResult},
    scroll::pin::{PinScrub, ResolvedPin},
    stage::model::{ElementId, Prop, Stage},
};

/// One anchor of a scroll range: the scroll offset at which a point of the
/// trigger element (`trigger_fraction` of its height from its top) meets a
/// point of the viewport (`viewport_fraction` of its height from its top).
///
/// `"top bottom"` is `(0.0, 1.0)`, `"bottom top"` is `(1.0, 0.0)`,
/// `"top 70%"` is `(0.0, 0.7)`. Fractions outside `[0, 1]` are legal and
/// express ranges past the element, e.g. a section pinned for 150% of the
/// viewport ends at `(0.0, -1.5)`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RangeEdge {
    pub trigger_fraction: f64,
    pub viewport_fraction: f64,
}

impl RangeEdge {
    pub const TOP_TOP: Self = Self::new(0.0, 0.0);
    pub const TOP_BOTTOM: Self = Self::new(0.0, 1.0);
    pub const BOTTOM_TOP: Self = Self::new(1.0, 0.0);
    pub const BOTTOM_BOTTOM: Self = Self::new(1.0, 1.0);

    pub const fn new(trigger_fraction: f64, viewport_fraction: f64) -> Self {
        Self {
            trigger_fraction,
            viewport_fraction,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RangeSpec {
    pub start: RangeEdge,
    pub end: RangeEdge,
}

impl RangeSpec {
    pub const fn new(start: RangeEdge, end: RangeEdge) -> Self {
        Self { start, end }
    }
}

/// Declarative mapping from scroll position to one property of one element.
#[derive(Clone, Copy, Debug)]
pub struct ScrollBinding {
    pub trigger: ElementId,
    pub target: ElementId,
    pub prop: Prop,
    pub from: f64,
    pub to: f64,
    pub range: RangeSpec,
    pub ease: Ease,
}

#[derive(Clone, Copy, Debug)]
struct ResolvedBinding {
    binding: ScrollBinding,
    start_y: f64,
    end_y: f64,
}

impl ResolvedBinding {
    fn value_at(&self, scroll_y: f64) -> f64 {
        let denom = self.end_y - self.start_y;
        // A degenerate resolved range leaves the binding inert at `from`.
        let t = if denom <= 0.0 {
            0.0
        } else {
            ((scroll_y - self.start_y) / denom).clamp(0.0, 1.0)
        };
        let b = &self.binding;
        b.from + (b.to - b.from) * b.ease.apply(t)
    }
}

/// All scroll-linked effects of one page.
///
/// Bindings are pure functions of scroll position and of element geometry
/// captured at the last `refresh`; nothing here schedules tweens or
/// retains callbacks. Call `refresh` whenever geometry changes (viewport
/// resize, an image finishing loading) so ranges and the pin distance are
/// recomputed.
#[derive(Debug)]
pub struct ScrollScene {
    viewport: Viewport,
    scroll_y: f64,
    bindings: Vec<ResolvedBinding>,
    pin_spec: Option<PinScrub>,
    pin: Option<ResolvedPin>,
}

impl ScrollScene {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            scroll_y: 0.0,
            bindings: Vec::new(),
            pin_spec: None,
            pin: None,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    pub fn bindings_len(&self) -> usize {
        self.bindings.len()
    }

    /// Register a binding. The trigger element must carry geometry.
    pub fn bind(&mut self, stage: &Stage, binding: ScrollBinding) -> VernissageResult<()> {
        let resolved = self.resolve(stage, binding)?;
        self.bindings.push(resolved);
        Ok(())
    }

    fn resolve(
        &self,
        stage: &Stage,
        binding: ScrollBinding,
    ) -> VernissageResult<ResolvedBinding> {
        let rect = stage.geometry(binding.trigger).ok_or_else(|| {
            VernissageError::validation(format!(
                "scroll trigger '{}' has no geometry",
                stage.label(binding.trigger)
            ))
        })?;
        let edge_y = |edge: RangeEdge| {
            rect.y0 + edge.trigger_fraction * rect.height()
                - edge.viewport_fraction * self.viewport.height
        };
        Ok(ResolvedBinding {
            binding,
            start_y: edge_y(binding.range.start),
            end_y: edge_y(binding.range.end),
        })
    }

    /// Install the pin-and-scrub track. Returns `false` without installing
    /// anything when the viewport is not wider than the spec's threshold.
    pub fn install_pin(&mut self, stage: &Stage, spec: PinScrub) -> VernissageResult<bool> {
        self.pin_spec = Some(spec);
        if self.viewport.width <= spec.min_width {
            tracing::debug!(
                width = self.viewport.width,
                min = spec.min_width,
                "viewport under pin threshold, pin not installed"
            );
            self.pin = None;
            return Ok(false);
        }
        self.pin = Some(self.resolve_pin(stage, spec)?);
        Ok(true)
    }

    pub fn uninstall_pin(&mut self) {
        self.pin_spec = None;
        self.pin = None;
    }

    pub fn is_pinned(&self) -> bool {
        self.pin
            .as_ref()
            .is_some_and(|p| p.distance > 0.0 && {
                let local = self.scroll_y - p.start_y;
                local >= 0.0 && local < p.distance
            })
    }

    pub fn pin_progress(&self) -> Option<f64> {
        self.pin.as_ref().map(|p| p.progress(self.scroll_y))
    }

    fn resolve_pin(&self, stage: &Stage, spec: PinScrub) -> VernissageResult<ResolvedPin> {
        let trigger = stage.geometry(spec.trigger).ok_or_else(|| {
            VernissageError::validation(format!(
                "pin trigger '{}' has no geometry",
                stage.label(spec.trigger)
            ))
        })?;
        let track = stage.geometry(spec.track).ok_or_else(|| {
            VernissageError::validation(format!(
                "pin track '{}' has no geometry",
                stage.label(spec.track)
            ))
        })?;
        Ok(ResolvedPin {
            spec,
            start_y: trigger.y0,
            distance: track.width() - self.viewport.width,
        })
    }

    /// Recompute every resolved range and the pin distance from current
    /// geometry. Call after anything that can change layout.
    pub fn refresh(&mut self, stage: &mut Stage) -> VernissageResult<()> {
        for i in 0..self.bindings.len() {
            let resolved = self.resolve(stage, self.bindings[i].binding)?;
            self.bindings[i] = resolved;
        }
        if let Some(spec) = self.pin_spec
            && self.pin.is_some()
        {
            self.pin = Some(self.resolve_pin(stage, spec)?);
        }
        tracing::debug!(bindings = self.bindings.len(), "scroll ranges refreshed");
        self.apply(stage);
        Ok(())
    }

    /// Change the viewport, re-gating the pin against its width threshold
    /// and refreshing every range.
    pub fn set_viewport(&mut self, stage: &mut Stage, viewport: Viewport) -> VernissageResult<()> {
        self.viewport = viewport;
        match self.pin_spec {
            Some(spec) if viewport.width > spec.min_width => {
                self.pin = Some(self.resolve_pin(stage, spec)?);
            }
            _ => self.pin = None,
        }
        self.refresh(stage)
    }

    /// Move the scroll position and write every bound property.
    pub fn set_scroll(&mut self, stage: &mut Stage, scroll_y: f64) {
        self.scroll_y = scroll_y;
        self.apply(stage);
    }

    fn apply(&self, stage: &mut Stage) {
        for rb in &self.bindings {
            stage.set(rb.binding.target, rb.binding.prop, rb.value_at(self.scroll_y));
        }
        if let Some(pin) = &self.pin {
            if pin.distance <= 0.0 {
                return;
            }
            let progress = pin.progress(self.scroll_y);
            stage.set(pin.spec.track, Prop::X, -progress * pin.distance);
            let held = (self.scroll_y - pin.start_y).clamp(0.0, pin.distance);
            stage.set(pin.spec.trigger, Prop::PinOffsetY, held);
        }
    }

    /// Teardown: drop all bindings and the pin. Nothing fires afterwards.
    pub fn clear(&mut self) {
        self.bindings.clear();
        self.uninstall_pin();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/binder.rs"]
mod tests;
