//! Hero entrance choreography: split-text character rise, scattered image
//! pop with a randomized stagger, and the scroll parallax on the hero
//! images.

use crate::{
    animation::ease::Ease,
    animation::timeline::Timeline,
    foundation::error::VernissageResult,
    foundation::math::shuffled_indices,
    scroll::binder::{RangeEdge, RangeSpec, ScrollBinding, ScrollScene},
    stage::model::{ElementId, Prop, Stage},
};

/// Delay before the intro starts, seconds.
const INTRO_DELAY: f64 = 0.5;
/// Per-character stagger of the split-text rise.
const CHAR_STAGGER: f64 = 0.05;
/// Duration of each character rise.
const CHAR_RISE: f64 = 1.0;
/// Total stagger budget for the scattered image pop.
const IMAGE_STAGGER_TOTAL: f64 = 0.8;

/// Element handles of the hero section, allocated once at mount.
#[derive(Clone, Debug)]
pub struct HeroElements {
    pub section: ElementId,
    pub title_chars: Vec<ElementId>,
    pub italic_chars: Vec<ElementId>,
    pub images: Vec<ElementId>,
}

pub fn mount_hero(
    stage: &mut Stage,
    title_chars: usize,
    italic_chars: usize,
    images: usize,
) -> HeroElements {
    HeroElements {
        section: stage.alloc("hero-section"),
        title_chars: (0..title_chars)
            .map(|i| stage.alloc(format!("hero-title-char-{i}")))
            .collect(),
        italic_chars: (0..italic_chars)
            .map(|i| stage.alloc(format!("hero-italic-char-{i}")))
            .collect(),
        images: (0..images)
            .map(|i| stage.alloc(format!("hero-img-{i}")))
            .collect(),
    }
}

/// The load-in timeline: main title characters rise first, the italic line
/// overlaps it by 0.8 s, and the scattered images pop in (scale from zero,
/// overshooting) in a seeded shuffle order overlapping the text by 1 s.
pub fn hero_intro(hero: &HeroElements, seed: u64) -> Timeline {
    let mut tl = Timeline::new();

    let rise = |tl: Timeline, chars: &[ElementId], at: f64| -> (Timeline, f64) {
        let mut tl = tl;
        for (i, &ch) in chars.iter().enumerate() {
            let pos = at + CHAR_STAGGER * i as f64;
            tl = tl
                .from_to(pos, ch, Prop::Y, 100.0, 0.0, CHAR_RISE, Ease::OutQuart)
                .from_to(pos, ch, Prop::Opacity, 0.0, 1.0, CHAR_RISE, Ease::OutQuart);
        }
        let end = at + CHAR_STAGGER * chars.len().saturating_sub(1) as f64 + CHAR_RISE;
        (tl, end)
    };

    let (with_title, title_end) = rise(tl, &hero.title_chars, INTRO_DELAY);
    let italic_at = (title_end - 0.8).max(0.0);
    let (with_italic, italic_end) = rise(with_title, &hero.italic_chars, italic_at);
    tl = with_italic;

    let images_at = (italic_end - 1.0).max(0.0);
    let n = hero.images.len();
    let each = if n > 1 {
        IMAGE_STAGGER_TOTAL / (n - 1) as f64
    } else {
        0.0
    };
    for (slot, &idx) in shuffled_indices(n, seed).iter().enumerate() {
        let img = hero.images[idx];
        let pos = images_at + each * slot as f64;
        tl = tl
            .from_to(pos, img, Prop::Scale, 0.0, 1.0, 1.0, Ease::OutBack)
            .from_to(pos, img, Prop::Opacity, 0.0, 1.0, 1.0, Ease::OutQuad);
    }
    tl
}

/// Depth-layered parallax: image `i` drifts up by `((i % 3) + 1) * 50` px
/// as the hero section scrolls from fully on screen to fully past.
pub fn hero_parallax(
    scene: &mut ScrollScene,
    stage: &Stage,
    hero: &HeroElements,
) -> VernissageResult<()> {
    for (i, &img) in hero.images.iter().enumerate() {
        let depth = ((i % 3) + 1) as f64;
        scene.bind(
            stage,
            ScrollBinding {
                trigger: hero.section,
                target: img,
                prop: Prop::Y,
                from: 0.0,
                to: -depth * 50.0,
                range: RangeSpec::new(RangeEdge::TOP_TOP, RangeEdge::BOTTOM_TOP),
                ease: Ease::Linear,
            },
        )?;
    }
    Ok(())
}
