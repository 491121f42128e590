use crate::stage::model::ElementId;

/// Viewport width at or below which the horizontal gallery pin is not
/// installed at all.
pub const PIN_MIN_WIDTH: f64 = 900.0;

/// Pin-and-scrub spec: hold `trigger` on screen while mapping scroll
/// distance to a leftward translation of `track`.
///
/// The scrub distance is the track's overflow beyond the viewport,
/// re-measured on every refresh (gallery images change the track width as
/// they load).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinScrub {
    pub trigger: ElementId,
    pub track: ElementId,
    /// Installation is refused when the viewport is not strictly wider
    /// than this.
    pub min_width: f64,
}

impl PinScrub {
    pub fn new(trigger: ElementId, track: ElementId) -> Self {
        Self {
            trigger,
            track,
            min_width: PIN_MIN_WIDTH,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct ResolvedPin {
    pub(crate) spec: PinScrub,
    /// Document offset where pinning begins (trigger top hits viewport top).
    pub(crate) start_y: f64,
    /// Scroll distance over which the track scrubs; inert when <= 0.
    pub(crate) distance: f64,
}

impl ResolvedPin {
    pub(crate) fn progress(&self, scroll_y: f64) -> f64 {
        if self.distance <= 0.0 {
            return 0.0;
        }
        ((scroll_y - self.start_y) / self.distance).clamp(0.0, 1.0)
    }
}
