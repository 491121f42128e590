//! Scroll-driven sections of the landing and project pages: the portfolio
//! background-text scrub, the pinned about reveal, and the horizontal
//! gallery track.

use crate::{
    animation::ease::Ease,
    catalogue::model::{Orientation, Project},
    foundation::core::{Rect, Viewport},
    foundation::error::VernissageResult,
    scroll::binder::{RangeEdge, RangeSpec, ScrollBinding, ScrollScene},
    scroll::pin::PinScrub,
    stage::model::{ElementId, Prop, Stage},
};

/// Card widths on the horizontal gallery track, CSS pixels.
pub const INTRO_CARD_WIDTH: f64 = 760.0;
pub const PORTRAIT_CARD_WIDTH: f64 = 560.0;
pub const LANDSCAPE_CARD_WIDTH: f64 = 1040.0;
pub const QUOTE_CARD_WIDTH: f64 = 680.0;

#[derive(Clone, Debug)]
pub struct PortfolioElements {
    pub section: ElementId,
    pub bg_lines: Vec<ElementId>,
    pub grid_items: Vec<ElementId>,
}

pub fn mount_portfolio(stage: &mut Stage, lines: usize, items: usize) -> PortfolioElements {
    PortfolioElements {
        section: stage.alloc("portfolio-section"),
        bg_lines: (0..lines)
            .map(|i| stage.alloc(format!("portfolio-bg-line-{i}")))
            .collect(),
        grid_items: (0..items)
            .map(|i| stage.alloc(format!("portfolio-item-{i}")))
            .collect(),
    }
}

/// Background text lines tighten (line-height 1.5 -> 0.8, letter-spacing
/// 0 -> -10) across the section's full traversal of the viewport; grid
/// items rise in over a narrower band, each offset a little further into
/// the section to stand in for the original's stagger.
pub fn portfolio_bindings(
    scene: &mut ScrollScene,
    stage: &Stage,
    portfolio: &PortfolioElements,
) -> VernissageResult<()> {
    let full = RangeSpec::new(RangeEdge::TOP_BOTTOM, RangeEdge::BOTTOM_TOP);
    for &line in &portfolio.bg_lines {
        scene.bind(
            stage,
            ScrollBinding {
                trigger: portfolio.section,
                target: line,
                prop: Prop::LineHeight,
                from: 1.5,
                to: 0.8,
                range: full,
                ease: Ease::Linear,
            },
        )?;
        scene.bind(
            stage,
            ScrollBinding {
                trigger: portfolio.section,
                target: line,
                prop: Prop::LetterSpacing,
                from: 0.0,
                to: -10.0,
                range: full,
                ease: Ease::Linear,
            },
        )?;
    }
    for (i, &item) in portfolio.grid_items.iter().enumerate() {
        let shift = 0.08 * i as f64;
        let range = RangeSpec::new(
            RangeEdge::new(shift, 0.7),
            RangeEdge::new(1.0 + shift, 0.8),
        );
        scene.bind(
            stage,
            ScrollBinding {
                trigger: portfolio.section,
                target: item,
                prop: Prop::Y,
                from: 100.0,
                to: 0.0,
                range,
                ease: Ease::OutQuad,
            },
        )?;
        scene.bind(
            stage,
            ScrollBinding {
                trigger: portfolio.section,
                target: item,
                prop: Prop::Opacity,
                from: 0.0,
                to: 1.0,
                range,
                ease: Ease::OutQuad,
            },
        )?;
    }
    Ok(())
}

#[derive(Clone, Debug)]
pub struct AboutElements {
    pub section: ElementId,
    pub image: ElementId,
    pub words: Vec<ElementId>,
}

pub fn mount_about(stage: &mut Stage, words: usize) -> AboutElements {
    AboutElements {
        section: stage.alloc("about-section"),
        image: stage.alloc("about-img"),
        words: (0..words)
            .map(|i| stage.alloc(format!("about-word-{i}")))
            .collect(),
    }
}

/// The about section is held for 150% of a viewport past its top; the
/// illustration fades and scales in over the first stretch while drifting
/// up, and the paragraph reveals word by word.
pub fn about_bindings(
    scene: &mut ScrollScene,
    stage: &Stage,
    about: &AboutElements,
) -> VernissageResult<()> {
    const HELD_VIEWPORTS: f64 = 1.5;
    // Anchor a fraction of the held distance past the section top.
    let held = |frac: f64| RangeEdge::new(0.0, -(HELD_VIEWPORTS * frac));

    scene.bind(
        stage,
        ScrollBinding {
            trigger: about.section,
            target: about.image,
            prop: Prop::Opacity,
            from: 0.0,
            to: 1.0,
            range: RangeSpec::new(held(0.0), held(0.4)),
            ease: Ease::OutQuad,
        },
    )?;
    scene.bind(
        stage,
        ScrollBinding {
            trigger: about.section,
            target: about.image,
            prop: Prop::Scale,
            from: 0.8,
            to: 1.1,
            range: RangeSpec::new(held(0.0), held(1.0)),
            ease: Ease::Linear,
        },
    )?;
    scene.bind(
        stage,
        ScrollBinding {
            trigger: about.section,
            target: about.image,
            prop: Prop::Y,
            from: 0.0,
            to: -50.0,
            range: RangeSpec::new(held(0.0), held(1.0)),
            ease: Ease::Linear,
        },
    )?;

    let n = about.words.len().max(1) as f64;
    for (i, &word) in about.words.iter().enumerate() {
        let start = 0.2 + 0.55 * (i as f64 / n);
        scene.bind(
            stage,
            ScrollBinding {
                trigger: about.section,
                target: word,
                prop: Prop::Opacity,
                from: 0.1,
                to: 1.0,
                range: RangeSpec::new(held(start), held(start + 0.25)),
                ease: Ease::Linear,
            },
        )?;
    }
    Ok(())
}

#[derive(Clone, Copy, Debug)]
pub struct GalleryElements {
    pub container: ElementId,
    pub track: ElementId,
}

/// Lay out the project page's horizontal track and allocate its handles.
/// The track width is the intro card plus one card per gallery image
/// (width by orientation), plus the quote card inserted after the second
/// image. `top` is the container's document offset.
pub fn mount_gallery(
    stage: &mut Stage,
    project: &Project,
    viewport: Viewport,
    top: f64,
) -> GalleryElements {
    let container = stage.alloc("project-horizontal-section");
    let track = stage.alloc("project-horizontal-track");
    stage.set_geometry(
        container,
        Rect::new(0.0, top, viewport.width, top + viewport.height),
    );
    stage.set_geometry(
        track,
        Rect::new(0.0, top, track_width(project), top + viewport.height),
    );
    GalleryElements { container, track }
}

pub fn track_width(project: &Project) -> f64 {
    let mut width = INTRO_CARD_WIDTH;
    for (i, item) in project.gallery.iter().enumerate() {
        width += match item.orientation {
            Orientation::Portrait => PORTRAIT_CARD_WIDTH,
            Orientation::Landscape => LANDSCAPE_CARD_WIDTH,
        };
        if i == 1 {
            width += QUOTE_CARD_WIDTH;
        }
    }
    width
}

/// Install the pin-and-scrub for the gallery track. Returns `false` when
/// the viewport is at or under the 900 px threshold and nothing was
/// installed.
pub fn gallery_pin(
    scene: &mut ScrollScene,
    stage: &Stage,
    gallery: &GalleryElements,
) -> VernissageResult<bool> {
    scene.install_pin(stage, PinScrub::new(gallery.container, gallery.track))
}
