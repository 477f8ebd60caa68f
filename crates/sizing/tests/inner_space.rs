#![allow(clippy::unwrap_used)]

use std::cell::Cell;

use respond_element::{Axis, BoxSizing, ComputedStyle, Edges, Element};
use respond_sizing::{inner_length, inner_space, MeasurementPass};

/// Test element that counts computed-style fetches.
struct SpyElement {
    style: ComputedStyle,
    fetches: Cell<u32>,
}

impl SpyElement {
    fn new(style: ComputedStyle) -> Self {
        Self {
            style,
            fetches: Cell::new(0),
        }
    }
}

impl Element for SpyElement {
    fn computed_style(&self) -> ComputedStyle {
        self.fetches.set(self.fetches.get() + 1);
        self.style
    }

    fn class_list(&self) -> Vec<String> {
        Vec::new()
    }

    fn set_class_list(&mut self, _classes: &[String]) {}
}

fn padded_style(box_sizing: BoxSizing) -> ComputedStyle {
    ComputedStyle {
        box_sizing,
        width: 300.0,
        height: 150.0,
        padding: Edges::uniform(10.0),
        border_width: Edges::uniform(2.0),
    }
}

#[test]
fn border_box_subtracts_padding_and_border() {
    let elem = SpyElement::new(padded_style(BoxSizing::BorderBox));
    assert_eq!(inner_length(&elem, Axis::Width), 300.0 - (10.0 + 2.0) * 2.0);
    assert_eq!(inner_length(&elem, Axis::Height), 150.0 - (10.0 + 2.0) * 2.0);
}

#[test]
fn content_box_returns_raw_length() {
    let elem = SpyElement::new(padded_style(BoxSizing::ContentBox));
    assert_eq!(inner_length(&elem, Axis::Width), 300.0);
    assert_eq!(inner_length(&elem, Axis::Height), 150.0);
}

#[test]
fn width_then_height_fetches_style_once() {
    let elem = SpyElement::new(padded_style(BoxSizing::BorderBox));
    let mut pass = MeasurementPass::new(&elem);
    let width = pass.resolve(Axis::Width);
    let height = pass.resolve(Axis::Height);
    assert_eq!(width, 276.0);
    assert_eq!(height, 126.0);
    assert_eq!(elem.fetches.get(), 1);
}

#[test]
fn height_first_still_fetches_style_once() {
    let elem = SpyElement::new(padded_style(BoxSizing::BorderBox));
    let mut pass = MeasurementPass::new(&elem);
    let height = pass.resolve(Axis::Height);
    let width = pass.resolve(Axis::Width);
    assert_eq!(height, 126.0);
    assert_eq!(width, 276.0);
    assert_eq!(elem.fetches.get(), 1);
}

#[test]
fn repeated_width_reuses_the_cached_value() {
    let elem = SpyElement::new(padded_style(BoxSizing::BorderBox));
    let mut pass = MeasurementPass::new(&elem);
    assert_eq!(pass.resolve(Axis::Width), pass.resolve(Axis::Width));
    assert_eq!(elem.fetches.get(), 1);
}

#[test]
fn separate_passes_fetch_separately() {
    let elem = SpyElement::new(padded_style(BoxSizing::BorderBox));
    let first = inner_length(&elem, Axis::Width);
    let second = inner_length(&elem, Axis::Width);
    assert_eq!(first, second);
    assert_eq!(elem.fetches.get(), 2);
}

#[test]
fn resolve_both_measures_both_axes_in_one_fetch() {
    let elem = SpyElement::new(padded_style(BoxSizing::BorderBox));
    let space = inner_space(&elem);
    assert_eq!(space.width, 276.0);
    assert_eq!(space.height, 126.0);
    assert_eq!(elem.fetches.get(), 1);
}

#[test]
fn negative_lengths_propagate_unclamped() {
    let style = ComputedStyle {
        box_sizing: BoxSizing::BorderBox,
        width: 10.0,
        height: 10.0,
        padding: Edges::uniform(10.0),
        border_width: Edges::uniform(2.0),
    };
    let elem = SpyElement::new(style);
    assert_eq!(inner_length(&elem, Axis::Width), 10.0 - 24.0);
}

#[test]
fn nan_lengths_propagate() {
    let style = ComputedStyle {
        width: f32::NAN,
        ..ComputedStyle::default()
    };
    let elem = SpyElement::new(style);
    assert!(inner_length(&elem, Axis::Width).is_nan());
}
