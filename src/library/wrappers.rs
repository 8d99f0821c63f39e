//! Top-level style pointers. These serialize with a trailing `()`.

use super::{color_arg, int_arg, raw_int_arg, wrapper};
use crate::names::Color;
use crate::types::Signature;
use std::sync::Arc;

pub(crate) fn signatures() -> Vec<Arc<Signature>> {
    [
        wrapper("StylePtr", "Style", vec![color_arg("Style Contents")]),
        wrapper(
            "ChargingStylePtr",
            "Charging Style",
            vec![color_arg("Style Contents")],
        ),
        wrapper(
            "StyleNormalPtr",
            "Normal Style",
            vec![
                color_arg("Base Color"),
                color_arg("Clash Color"),
                raw_int_arg("Out Time (ms)"),
                raw_int_arg("In Time (ms)"),
                color_arg("Lockup Color").with_default(Color::White),
                color_arg("Blast Color").with_default(Color::White),
            ],
        ),
        wrapper(
            "StyleNormalPtrX",
            "Normal Style",
            vec![
                color_arg("Base Color"),
                color_arg("Clash Color"),
                int_arg("Out Time (ms)"),
                int_arg("In Time (ms)"),
                color_arg("Lockup Color").with_default(Color::White),
                color_arg("Blast Color").with_default(Color::White),
            ],
        ),
        wrapper(
            "StyleRainbowPtr",
            "Rainbow Style",
            vec![
                raw_int_arg("Out Time (ms)"),
                raw_int_arg("In Time (ms)"),
                color_arg("Clash Color").with_default(Color::White),
                color_arg("Lockup Color").with_default(Color::White),
            ],
        ),
        wrapper(
            "StyleRainbowPtrX",
            "Rainbow Style",
            vec![
                int_arg("Out Time (ms)"),
                int_arg("In Time (ms)"),
                color_arg("Clash Color").with_default(Color::White),
                color_arg("Lockup Color").with_default(Color::White),
            ],
        ),
        wrapper(
            "StyleStrobePtr",
            "Strobe Style",
            vec![
                color_arg("Strobe Color"),
                color_arg("Clash Color"),
                raw_int_arg("Frequency"),
                raw_int_arg("Out Time (ms)"),
                raw_int_arg("In Time (ms)"),
            ],
        ),
    ]
    .into_iter()
    .map(Arc::new)
    .collect()
}
