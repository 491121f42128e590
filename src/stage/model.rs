use kurbo::Rect;
use smallvec::SmallVec;

/// Handle to one animatable element. Ids are arena indices, allocated once
/// per mount and stable for the element's lifetime.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ElementId(pub u32);

/// Scalar animatable properties, the vocabulary shared by tweens and
/// scroll bindings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Prop {
    Opacity,
    X,
    XPercent,
    Y,
    YPercent,
    Scale,
    ScaleY,
    LetterSpacing,
    LineHeight,
    ZIndex,
    /// Vertical offset applied while a pin-and-scrub section is held on screen.
    PinOffsetY,
}

impl Prop {
    /// Value an element reports before anything has written the property.
    pub fn default_value(self) -> f64 {
        match self {
            Self::Opacity | Self::Scale | Self::ScaleY | Self::LineHeight => 1.0,
            Self::X
            | Self::XPercent
            | Self::Y
            | Self::YPercent
            | Self::LetterSpacing
            | Self::ZIndex
            | Self::PinOffsetY => 0.0,
        }
    }
}

#[derive(Clone, Debug)]
struct Element {
    label: String,
    props: SmallVec<[(Prop, f64); 8]>,
    geometry: Option<Rect>,
    pointer_events: bool,
}

/// Arena of elements standing in for the DOM subtree a page owns.
///
/// The engine is headless: a `Stage` holds the current value of every
/// animatable property plus the document-space geometry the scroll binder
/// resolves ranges against. Dropping the stage is teardown; nothing holds
/// callbacks into it.
#[derive(Clone, Debug, Default)]
pub struct Stage {
    elements: Vec<Element>,
}

impl Stage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alloc(&mut self, label: impl Into<String>) -> ElementId {
        let id = ElementId(self.elements.len() as u32);
        self.elements.push(Element {
            label: label.into(),
            props: SmallVec::new(),
            geometry: None,
            pointer_events: false,
        });
        id
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn label(&self, el: ElementId) -> &str {
        &self.elements[el.0 as usize].label
    }

    pub fn get(&self, el: ElementId, prop: Prop) -> f64 {
        self.elements[el.0 as usize]
            .props
            .iter()
            .find(|(p, _)| *p == prop)
            .map(|(_, v)| *v)
            .unwrap_or_else(|| prop.default_value())
    }

    pub fn set(&mut self, el: ElementId, prop: Prop, value: f64) {
        let props = &mut self.elements[el.0 as usize].props;
        if let Some(slot) = props.iter_mut().find(|(p, _)| *p == prop) {
            slot.1 = value;
        } else {
            props.push((prop, value));
        }
    }

    pub fn geometry(&self, el: ElementId) -> Option<Rect> {
        self.elements[el.0 as usize].geometry
    }

    pub fn set_geometry(&mut self, el: ElementId, rect: Rect) {
        self.elements[el.0 as usize].geometry = Some(rect);
    }

    pub fn pointer_events(&self, el: ElementId) -> bool {
        self.elements[el.0 as usize].pointer_events
    }

    pub fn set_pointer_events(&mut self, el: ElementId, on: bool) {
        self.elements[el.0 as usize].pointer_events = on;
    }
}
