//! Inner-space measurement: an element's content-box length along one axis,
//! excluding padding and border.
//!
//! Spec: [CSS Box Sizing Module Level 3](https://www.w3.org/TR/css-sizing-3/)
//!
//! The host's computed length already is the content-box length under
//! `content-box` sizing and is returned uncorrected; under `border-box` the
//! padding and border on the axis's two edges are subtracted.
//!
//! Fetching a computed-style snapshot is the expensive call, so measurement
//! runs inside a [`MeasurementPass`]: a call-scoped cache holding the
//! snapshot and the resolved width. A width + height pair of queries in one
//! pass costs a single style fetch. The pass is a local value borrowing one
//! element, so state can never leak between passes or elements, and
//! re-entrant callers cannot observe each other's snapshots.

use respond_element::{Axis, BoxSizing, ComputedStyle, Element};

/// Inner lengths along both axes, measured in one pass.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InnerSpace {
    pub width: f32,
    pub height: f32,
}

/// One measurement pass over a single element.
///
/// Caches the style snapshot and the resolved width between consecutive
/// [`resolve`](Self::resolve) calls. Height is never cached; only the
/// snapshot and the incidental width value are reusable.
pub struct MeasurementPass<'elem, E: Element> {
    element: &'elem E,
    style: Option<ComputedStyle>,
    width: Option<f32>,
}

impl<'elem, E: Element> MeasurementPass<'elem, E> {
    #[inline]
    pub const fn new(element: &'elem E) -> Self {
        Self {
            element,
            style: None,
            width: None,
        }
    }

    /// Resolve the element's inner length along `axis`.
    ///
    /// Negative computed lengths propagate unclamped, and a `NaN` computed
    /// length yields a `NaN` inner length; classification defines both as
    /// meeting no positive breakpoint.
    pub fn resolve(&mut self, axis: Axis) -> f32 {
        if axis == Axis::Height && self.width.is_none() {
            // Populate the width slot from the same snapshot so a later
            // width query in this pass reuses it.
            self.resolve(Axis::Width);
        }
        if axis == Axis::Width {
            if let Some(width) = self.width {
                return width;
            }
        }

        let style = self.style();
        let extra = match style.box_sizing {
            BoxSizing::BorderBox => style.padding_border(axis),
            BoxSizing::ContentBox => 0.0,
        };
        let length = style.length(axis) - extra;
        log::debug!(
            "[INNER-SPACE] axis={axis:?} raw={raw} extra={extra} -> inner={length}",
            raw = style.length(axis),
        );

        if axis == Axis::Width {
            self.width = Some(length);
        }
        length
    }

    /// Resolve both axes in one pass.
    pub fn resolve_both(&mut self) -> InnerSpace {
        InnerSpace {
            width: self.resolve(Axis::Width),
            height: self.resolve(Axis::Height),
        }
    }

    fn style(&mut self) -> ComputedStyle {
        *self.style.get_or_insert_with(|| {
            log::trace!("[INNER-SPACE] fetching computed style");
            self.element.computed_style()
        })
    }
}

/// One-shot inner length along `axis`.
#[inline]
pub fn inner_length<E: Element>(element: &E, axis: Axis) -> f32 {
    MeasurementPass::new(element).resolve(axis)
}

/// Inner lengths along both axes, one style fetch.
#[inline]
pub fn inner_space<E: Element>(element: &E) -> InnerSpace {
    MeasurementPass::new(element).resolve_both()
}
