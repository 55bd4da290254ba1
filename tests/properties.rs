//! Property based tests for the conversions and the synchronization of a
//! swatch.

use proptest::prelude::*;
use swatch::{parse_color, Cmyk, Component, Hex, Hsb, Hsl, Input, Picker, Rgb, Space, Swatch};

fn rgb_strategy() -> impl Strategy<Value = Rgb> {
    any::<[u8; 3]>().prop_map(Rgb::from)
}

// Components well outside of every valid range, to exercise clamping.
fn wide() -> impl Strategy<Value = Component> {
    prop_oneof![
        (-1000.0..1000.0f64).prop_map(|v| v as Component),
        Just(0.0),
        Just(100.0),
        Just(360.0),
    ]
}

prop_compose! {
    fn input_strategy()(
        kind in 0..6u8,
        rgb in rgb_strategy(),
        a in wide(),
        b in wide(),
        c in wide(),
        d in wide(),
    ) -> Input {
        match kind {
            0 => Input::Hex(Hex::from(rgb)),
            1 => Input::Rgb(rgb),
            2 => Input::Rgba(rgb.with_alpha(a / 100.0)),
            3 => Input::Hsl(Hsl::new(a, b, c)),
            4 => Input::Hsb(Hsb::new(a, b, c)),
            _ => Input::Cmyk(Cmyk::new(a, b, c, d)),
        }
    }
}

fn near(a: Rgb, b: Rgb) -> bool {
    a.red.abs_diff(b.red) <= 1 && a.green.abs_diff(b.green) <= 1 && a.blue.abs_diff(b.blue) <= 1
}

proptest! {
    #[test]
    fn hex_round_trip_is_exact(rgb in rgb_strategy()) {
        let text = rgb.to_hex().to_string();
        prop_assert_eq!(text.len(), 7);
        prop_assert_eq!(Rgb::from_hex(&text), Ok(rgb));
        prop_assert_eq!(Rgb::from_hex(&text.to_uppercase()), Ok(rgb));
    }

    #[test]
    fn fractional_round_trips_stay_within_one(rgb in rgb_strategy()) {
        prop_assert!(near(rgb.to_hsl_fractional().to_rgb(), rgb));
        prop_assert!(near(rgb.to_hsb_fractional().to_rgb(), rgb));
        prop_assert!(near(rgb.to_cmyk_fractional().to_rgb(), rgb));
    }

    #[test]
    fn derived_components_are_in_range(rgb in rgb_strategy()) {
        let hsl = rgb.to_hsl();
        prop_assert!((0.0..=360.0).contains(&hsl.hue));
        prop_assert!((0.0..=100.0).contains(&hsl.saturation));
        prop_assert!((0.0..=100.0).contains(&hsl.lightness));

        let hsb = rgb.to_hsb();
        prop_assert!((0.0..=360.0).contains(&hsb.hue));
        prop_assert!((0.0..=100.0).contains(&hsb.saturation));
        prop_assert!((0.0..=100.0).contains(&hsb.brightness));

        for v in rgb.to_cmyk().to_components() {
            prop_assert!((0.0..=100.0).contains(&v));
        }
    }

    #[test]
    fn swatch_is_always_consistent(input in input_strategy(), alpha in 0.0..=1.0f64) {
        let swatch = Swatch::from_input(input, alpha as Component);

        prop_assert_eq!(swatch.rgb(), input.clamp().to_rgb());
        prop_assert_eq!(swatch.hex(), Hex::from(swatch.rgb()));
        prop_assert_eq!(swatch.rgba().to_rgb(), swatch.rgb());
        prop_assert!((0.0..=1.0).contains(&swatch.alpha()));

        // Every representation other than the source is derived from RGB.
        if input.space() != Space::Hsl {
            prop_assert_eq!(swatch.hsl(), swatch.rgb().to_hsl());
        }
        if input.space() != Space::Hsb {
            prop_assert_eq!(swatch.hsb(), swatch.rgb().to_hsb());
        }
        if input.space() != Space::Cmyk {
            prop_assert_eq!(swatch.cmyk(), swatch.rgb().to_cmyk());
        }
    }

    #[test]
    fn picker_publishes_what_it_holds(inputs in prop::collection::vec(input_strategy(), 1..8)) {
        use std::{cell::RefCell, rc::Rc};

        let published = Rc::new(RefCell::new(None));
        let mut picker = Picker::default();
        picker.subscribe({
            let published = Rc::clone(&published);
            move |swatch: &Swatch| *published.borrow_mut() = Some(*swatch)
        });

        for input in inputs {
            picker.update(input);
            prop_assert_eq!(*published.borrow(), Some(*picker.swatch()));
            prop_assert_eq!(picker.hex_text(), picker.swatch().hex().to_string());
        }
    }

    #[test]
    fn exact_formats_parse_back(input in input_strategy()) {
        let swatch = Swatch::from_input(input, 1.0);
        for space in [Space::Hex, Space::Rgb] {
            let parsed = parse_color(&swatch.format(space)).map(|i| i.to_rgb());
            prop_assert_eq!(parsed, Ok(swatch.rgb()));
        }
    }

    #[test]
    fn parsing_never_panics(text in ".{0,24}") {
        let _ = parse_color(&text);
    }
}
