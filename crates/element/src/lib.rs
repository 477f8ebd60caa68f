//! Host element capability surface consumed by responsive measurement.
//!
//! The element itself is owned by the host environment; this crate only
//! defines what measurement needs from it: a computed-style snapshot and
//! access to the class list.

pub mod style_model;
pub use style_model::{Axis, BoxSizing, ComputedStyle, Edge, Edges};

/// Capabilities of a host visual node.
///
/// [`computed_style`](Element::computed_style) is the expensive call (it may
/// force a style recalculation in the host); callers cache the snapshot for
/// the duration of one measurement pass and implementations should not cache
/// across calls themselves.
pub trait Element {
    /// Fetch a fresh computed-style snapshot.
    fn computed_style(&self) -> ComputedStyle;

    /// Current class list, in the host's order.
    fn class_list(&self) -> Vec<String>;

    /// Replace the class list wholesale.
    fn set_class_list(&mut self, classes: &[String]);
}
