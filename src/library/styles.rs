//! Colour-returning styles. `...L` variants are transparent layers.

use super::functions::{int_expr, SMOOTH_STEP};
use super::{color_arg, effect_arg, int_arg, layer, raw_int_arg, style, variadic};
use crate::ast::{ExpressionNode, Value};
use crate::names::{Color, Effect};
use crate::types::Signature;
use std::sync::Arc;

/// `SmoothStep<Int<16384>,Int<24000>>`, the firmware's default stab shape.
fn stab_shape() -> Value {
    let mut node = ExpressionNode::new(Arc::clone(&SMOOTH_STEP));
    node.bind(0, Some(int_expr(16384)));
    node.bind(1, Some(int_expr(24000)));
    Value::Expression(node)
}

pub(crate) fn signatures() -> Vec<Arc<Signature>> {
    [
        style(
            "Rgb",
            "RGB Color",
            vec![raw_int_arg("Red"), raw_int_arg("Green"), raw_int_arg("Blue")],
        ),
        style(
            "Mix",
            "Mix",
            vec![int_arg("Input"), variadic(color_arg("Color"))],
        ),
        style("Gradient", "Gradient", vec![variadic(color_arg("Color"))]),
        style(
            "Layers",
            "Layers",
            vec![color_arg("Base Color"), variadic(color_arg("Layer"))],
        ),
        layer(
            "AlphaL",
            "Transparency",
            vec![color_arg("Color"), int_arg("Value")],
        ),
        layer(
            "AlphaMixL",
            "Mix With Transparency",
            vec![int_arg("Input"), variadic(color_arg("Color"))],
        ),
        layer(
            "AudioFlickerL",
            "Audio Flicker",
            vec![color_arg("Flicker Color")],
        ),
        style(
            "AudioFlicker",
            "Audio Flicker",
            vec![color_arg("Base Color"), color_arg("Flicker Color")],
        ),
        style(
            "Blast",
            "Blast",
            vec![
                color_arg("Base Color"),
                color_arg("Blast Color"),
                raw_int_arg("Fadeout Time (ms)").with_default(200),
                raw_int_arg("Wave Size").with_default(100),
                raw_int_arg("Wave Time (ms)").with_default(400),
                effect_arg("Trigger Effect").with_default(Effect::Blast),
            ],
        ),
        layer(
            "BlastL",
            "Blast",
            vec![
                color_arg("Blast Color"),
                raw_int_arg("Fadeout Time (ms)").with_default(200),
                raw_int_arg("Wave Size").with_default(100),
                raw_int_arg("Wave Time (ms)").with_default(400),
                effect_arg("Trigger Effect").with_default(Effect::Blast),
            ],
        ),
        layer(
            "BlastFadeoutL",
            "Blast Fadeout",
            vec![
                color_arg("Blast Color"),
                raw_int_arg("Fadeout Time (ms)").with_default(250),
                effect_arg("Trigger Effect").with_default(Effect::Blast),
            ],
        ),
        style(
            "BlastFadeout",
            "Blast Fadeout",
            vec![
                color_arg("Base Color"),
                color_arg("Blast Color"),
                raw_int_arg("Fadeout Time (ms)").with_default(250),
                effect_arg("Trigger Effect").with_default(Effect::Blast),
            ],
        ),
        layer(
            "OriginalBlastL",
            "Original Blast",
            vec![
                color_arg("Blast Color"),
                effect_arg("Trigger Effect").with_default(Effect::Blast),
            ],
        ),
        style(
            "OriginalBlast",
            "Original Blast",
            vec![
                color_arg("Base Color"),
                color_arg("Blast Color"),
                effect_arg("Trigger Effect").with_default(Effect::Blast),
            ],
        ),
        layer(
            "BlinkingL",
            "Blinking",
            vec![
                color_arg("Blink Color"),
                int_arg("Blink Time (ms)"),
                int_arg("Distribution"),
            ],
        ),
        style(
            "BlinkingX",
            "Blinking",
            vec![
                color_arg("Color 1"),
                color_arg("Color 2"),
                int_arg("Blink Time (ms)"),
                int_arg("Distribution"),
            ],
        ),
        style(
            "Blinking",
            "Blinking",
            vec![
                color_arg("Color 1"),
                color_arg("Color 2"),
                raw_int_arg("Blink Time (ms)"),
                raw_int_arg("Distribution").with_default(500),
            ],
        ),
        layer(
            "BrownNoiseFlickerL",
            "Brown Noise Flicker",
            vec![color_arg("Flicker Color"), int_arg("Grade")],
        ),
        style(
            "BrownNoiseFlicker",
            "Brown Noise Flicker",
            vec![
                color_arg("Base Color"),
                color_arg("Flicker Color"),
                raw_int_arg("Grade"),
            ],
        ),
        layer(
            "SimpleClashL",
            "Simple Clash",
            vec![
                color_arg("Clash Color"),
                raw_int_arg("Clash Time (ms)").with_default(40),
                effect_arg("Trigger Effect").with_default(Effect::Clash),
                int_arg("Stab Shape").with_default(stab_shape()),
            ],
        ),
        style(
            "SimpleClash",
            "Simple Clash",
            vec![
                color_arg("Base Color"),
                color_arg("Clash Color").with_default(Color::White),
                raw_int_arg("Clash Time (ms)").with_default(40),
                effect_arg("Trigger Effect").with_default(Effect::Clash),
                int_arg("Stab Shape").with_default(stab_shape()),
            ],
        ),
        layer(
            "LocalizedClashL",
            "Localized Clash",
            vec![
                color_arg("Clash Color"),
                raw_int_arg("Clash Time (ms)").with_default(40),
                raw_int_arg("Clash Width (%)").with_default(50),
                effect_arg("Trigger Effect").with_default(Effect::Clash),
            ],
        ),
        style(
            "LocalizedClash",
            "Localized Clash",
            vec![
                color_arg("Base Color"),
                color_arg("Clash Color"),
                raw_int_arg("Clash Time (ms)").with_default(40),
                raw_int_arg("Clash Width (%)").with_default(50),
                effect_arg("Trigger Effect").with_default(Effect::Clash),
            ],
        ),
        style(
            "Pulsing",
            "Pulsing",
            vec![
                color_arg("Color 1"),
                color_arg("Color 2"),
                raw_int_arg("Pulse Time (ms)"),
            ],
        ),
        layer(
            "SyncAltToVarianceL",
            "Sync Alternative and Variance",
            vec![],
        ),
    ]
    .into_iter()
    .map(Arc::new)
    .collect()
}
