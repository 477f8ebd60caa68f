//! Breakpoint classification and class-list merging.
//!
//! A breakpoint is met when the element's inner length is greater than or
//! equal to it. Each breakpoint derives one class name; classification
//! partitions the derived names into an add set and a remove set, and the
//! merge step folds that partition into an element's existing class list.

pub mod class_set;
pub use class_set::ClassSet;

use respond_element::Axis;

/// Class name derived from `(namespace, axis, breakpoint)`, e.g. `width-768`
/// or `card-width-768` for namespace `"card-"`. The namespace is prepended
/// verbatim.
#[inline]
pub fn class_name(namespace: &str, axis: Axis, breakpoint: f32) -> String {
    format!("{namespace}{token}-{breakpoint}", token = axis.token())
}

/// Partition the class names derived from `breakpoints` into `(add, remove)`.
///
/// A breakpoint lands in `add` iff `length >= breakpoint`; the sets are
/// disjoint and duplicate breakpoints are absorbed. A `NaN` length meets no
/// breakpoint by policy (every derived name lands in `remove`); this is
/// stated explicitly rather than left to `NaN >= b` evaluating false.
pub fn classify_length(
    length: f32,
    breakpoints: impl IntoIterator<Item = f32>,
    namespace: &str,
    axis: Axis,
) -> (ClassSet, ClassSet) {
    let mut add = ClassSet::new();
    let mut remove = ClassSet::new();
    for breakpoint in breakpoints {
        let meets = !length.is_nan() && length >= breakpoint;
        let name = class_name(namespace, axis, breakpoint);
        if meets {
            add.insert(name);
        } else {
            remove.insert(name);
        }
    }
    (add, remove)
}

/// Fold an `(add, remove)` partition into an existing class list.
///
/// The result is `current` ∪ `add` minus `remove`, deduplicated, iterating
/// in first-seen order across `current` then `add`. Removing a name that is
/// not present is a no-op. Idempotent.
pub fn merge_class_list(
    current: impl IntoIterator<Item = String>,
    add: &ClassSet,
    remove: &ClassSet,
) -> ClassSet {
    let mut merged: ClassSet = current.into_iter().collect();
    for name in add.iter() {
        merged.insert(name);
    }
    for name in remove.iter() {
        merged.remove(name);
    }
    merged
}
