//! Vernissage is the headless choreography engine behind a photographer's
//! single-page portfolio site.
//!
//! It owns the three pieces of UI sequencing the site relies on:
//!
//! 1. **Page transitions**: a full-viewport curtain ([`Overlay`]) driven by
//!    a strict cover → navigate → reveal pipeline
//!    ([`TransitionCoordinator`]), gated on animation completion events.
//! 2. **The slide deck**: a cyclic, lockable project carousel
//!    ([`SlideDeck`]) with directional enter/exit choreography.
//! 3. **Scroll-linked effects** ([`ScrollScene`]): declarative bindings
//!    from scroll position to element transforms, including the pinned
//!    horizontal gallery track.
//!
//! The engine is deliberately headless: elements live in a [`Stage`] arena
//! instead of a DOM, the frame loop is [`Animator::tick`] driven by the
//! host, and routing is a trait ([`Router`]) the host implements. All
//! waiting is expressed as completion events returned from `tick`; there
//! are no timers and no callbacks that could outlive a teardown.
#![forbid(unsafe_code)]

mod animation;
mod catalogue;
mod deck;
mod foundation;
mod scroll;
mod sequences;
mod stage;
mod transition;

pub use animation::ease::Ease;
pub use animation::timeline::{Timeline, TimelineStep};
pub use animation::tween::{AnimEvent, Animator, TimelineId, TweenId, TweenSpec};
pub use catalogue::model::{Catalogue, GalleryItem, Orientation, Project};
pub use deck::controller::{Direction, ENTER_OFFSET_PERCENT, SlideDeck, SlideVisual};
pub use foundation::core::{FrameIndex, Fps, Rect, Vec2, Viewport};
pub use foundation::error::{VernissageError, VernissageResult};
pub use scroll::binder::{RangeEdge, RangeSpec, ScrollBinding, ScrollScene};
pub use scroll::pin::{PIN_MIN_WIDTH, PinScrub};
pub use sequences::intro::{HeroElements, hero_intro, hero_parallax, mount_hero};
pub use sequences::sections::{
    AboutElements, GalleryElements, PortfolioElements, about_bindings, gallery_pin,
    mount_about, mount_gallery, mount_portfolio, portfolio_bindings, track_width,
};
pub use stage::model::{ElementId, Prop, Stage};
pub use transition::coordinator::{Router, TransitionCoordinator, TransitionTiming};
pub use transition::overlay::{Overlay, OverlayMotion};
