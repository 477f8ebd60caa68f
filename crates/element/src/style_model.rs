//! Computed-style snapshot model consumed by measurement.
//!
//! Spec: CSS 2.2 §8.1 (box model) and
//! [CSS Box Sizing Module Level 3](https://www.w3.org/TR/css-sizing-3/).

/// Dimension being measured (width or height).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Axis {
    #[default]
    Width,
    Height,
}

impl Axis {
    /// Token used when deriving breakpoint class names (`"width"` / `"height"`).
    #[inline]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Width => "width",
            Self::Height => "height",
        }
    }

    /// The two box edges that bound this axis.
    #[inline]
    pub const fn edges(self) -> [Edge; 2] {
        match self {
            Self::Width => [Edge::Left, Edge::Right],
            Self::Height => [Edge::Top, Edge::Bottom],
        }
    }
}

/// One side of the box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BoxSizing {
    #[default]
    ContentBox,
    BorderBox,
}

/// Per-edge values in px (used for padding and border widths).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Edges {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Edges {
    #[inline]
    pub const fn get(&self, edge: Edge) -> f32 {
        match edge {
            Edge::Top => self.top,
            Edge::Right => self.right,
            Edge::Bottom => self.bottom,
            Edge::Left => self.left,
        }
    }

    /// Uniform value on all four edges.
    #[inline]
    pub const fn uniform(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }
}

/// Resolved style snapshot for one element, as reported by the host.
///
/// `width` and `height` are the computed lengths the host exposes: the
/// border-box size under [`BoxSizing::BorderBox`], the content-box size
/// otherwise. Hosts report missing or unparseable values as `NaN`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ComputedStyle {
    pub box_sizing: BoxSizing,
    pub width: f32,
    pub height: f32,
    pub padding: Edges,
    pub border_width: Edges,
}

impl ComputedStyle {
    /// Computed length along `axis`, as reported (no box-sizing correction).
    #[inline]
    pub const fn length(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Width => self.width,
            Axis::Height => self.height,
        }
    }

    /// Sum of padding + border on the two edges bounding `axis`.
    #[inline]
    pub fn padding_border(&self, axis: Axis) -> f32 {
        let [start, end] = axis.edges();
        self.padding.get(start)
            + self.padding.get(end)
            + self.border_width.get(start)
            + self.border_width.get(end)
    }
}
