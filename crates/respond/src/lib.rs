//! Responsive element queries: toggle breakpoint classes on an element based
//! on its own inner size rather than the viewport's.
//!
//! [`apply`] measures the element's content-box length along one axis
//! (padding and border excluded), derives one class name per breakpoint the
//! element meets or exceeds, removes the names for breakpoints it no longer
//! meets, and writes the merged class list back:
//!
//! ```
//! use respond::{apply, Options};
//! # use respond_element::{ComputedStyle, Element};
//! # struct Node { style: ComputedStyle, classes: Vec<String> }
//! # impl Element for Node {
//! #     fn computed_style(&self) -> ComputedStyle { self.style }
//! #     fn class_list(&self) -> Vec<String> { self.classes.clone() }
//! #     fn set_class_list(&mut self, classes: &[String]) {
//! #         self.classes = classes.to_vec();
//! #     }
//! # }
//! # let mut node = Node {
//! #     style: ComputedStyle { width: 800.0, ..ComputedStyle::default() },
//! #     classes: vec!["card".to_string()],
//! # };
//! apply(&mut node, [320.0, 768.0, 1024.0], &Options::default());
//! assert_eq!(node.class_list(), ["card", "width-320", "width-768"]);
//! ```
//!
//! [`classify`] computes the same partition without mutating the element.
//! There is no event wiring; the host decides when to re-invoke.

pub use respond_breakpoints::{class_name, classify_length, merge_class_list, ClassSet};
pub use respond_element::{Axis, BoxSizing, ComputedStyle, Edge, Edges, Element};
pub use respond_sizing::{inner_length, inner_space, InnerSpace, MeasurementPass};

/// Classification options.
///
/// The default measures width with an empty namespace, deriving names like
/// `width-768`. A non-empty namespace is prepended verbatim; pass `"card-"`
/// to derive `card-width-768`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Options {
    pub axis: Axis,
    pub namespace: String,
}

/// Partition the breakpoint classes for `element` into `(add, remove)`
/// without mutating it.
pub fn classify<E: Element>(
    element: &E,
    breakpoints: impl IntoIterator<Item = f32>,
    options: &Options,
) -> (ClassSet, ClassSet) {
    let length = inner_length(element, options.axis);
    classify_length(length, breakpoints, &options.namespace, options.axis)
}

/// Toggle breakpoint classes on `element` and return it for chaining.
pub fn apply<'elem, E: Element>(
    element: &'elem mut E,
    breakpoints: impl IntoIterator<Item = f32>,
    options: &Options,
) -> &'elem mut E {
    let (add, remove) = classify(element, breakpoints, options);
    log::debug!(
        "[RESPOND] axis={axis:?} add={add:?} remove={remove:?}",
        axis = options.axis,
    );
    let merged = merge_class_list(element.class_list(), &add, &remove);
    element.set_class_list(merged.as_slice());
    element
}
