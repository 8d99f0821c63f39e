//! Integer functions.
//!
//! Positions, sizes and levels range over 0..=32768; boolean-like results are
//! 32768 for true and 0 for false.

use super::{
    bits_arg, bool_arg, effect_arg, function, int_arg, lockup_arg, raw_int_arg, variadic,
};
use crate::ast::{ExpressionNode, Value};
use crate::names::Effect;
use crate::types::Signature;
use once_cell::sync::Lazy;
use std::sync::Arc;

/// `Int<N>`; shared so that other tables can use it in defaults.
pub(crate) static INT: Lazy<Arc<Signature>> =
    Lazy::new(|| Arc::new(function("Int", "Number", vec![raw_int_arg("Number")])));

pub(crate) static SMOOTH_STEP: Lazy<Arc<Signature>> = Lazy::new(|| {
    Arc::new(function(
        "SmoothStep",
        "Smooth Step",
        vec![int_arg("Position"), int_arg("Width")],
    ))
});

/// `Int<n>` as a bound value.
pub(crate) fn int_expr(n: i32) -> Value {
    let mut node = ExpressionNode::new(Arc::clone(&INT));
    node.bind(0, Some(Value::Int(n)));
    Value::Expression(node)
}

pub(crate) fn signatures() -> Vec<Arc<Signature>> {
    let mut table = vec![Arc::clone(&INT), Arc::clone(&SMOOTH_STEP)];
    table.extend(
        [
            function("AltF", "Alternative", vec![]),
            function("SyncAltToVarianceF", "Sync Alternative and Variance", vec![]),
            function("BatteryLevel", "Battery Level", vec![]),
            function("Variation", "Variation", vec![]),
            function("NoisySoundLevel", "Sound Level", vec![]),
            function("SmoothSoundLevel", "Smooth Sound Level", vec![]),
            function("SwingSpeed", "Swing Speed", vec![raw_int_arg("Max")]),
            function(
                "BladeAngle",
                "Blade Angle",
                vec![
                    raw_int_arg("Min").with_default(0),
                    raw_int_arg("Max").with_default(32768),
                ],
            ),
            function(
                "BladeAngleX",
                "Blade Angle",
                vec![
                    int_arg("Min").with_default(int_expr(0)),
                    int_arg("Max").with_default(int_expr(32768)),
                ],
            ),
            function(
                "BlastF",
                "Blast",
                vec![
                    raw_int_arg("Fadeout (ms)").with_default(200),
                    raw_int_arg("Wave Size").with_default(100),
                    raw_int_arg("Wave Time (ms)").with_default(400),
                    effect_arg("Trigger Effect").with_default(Effect::Blast),
                ],
            ),
            function(
                "BlastFadeoutF",
                "Blast Fadeout",
                vec![
                    raw_int_arg("Fade Time (ms)").with_default(250),
                    effect_arg("Trigger Effect").with_default(Effect::Blast),
                ],
            ),
            function(
                "OriginalBlastF",
                "Original Blast",
                vec![effect_arg("Trigger Effect").with_default(Effect::Blast)],
            ),
            function(
                "BlinkingF",
                "Blinking",
                vec![int_arg("Time (ms)"), int_arg("Distribution")],
            ),
            function("BrownNoiseF", "Brown Noise", vec![int_arg("Grade")]),
            function("SlowNoise", "Slow Noise", vec![int_arg("Speed")]),
            function(
                "Bump",
                "Bump",
                vec![
                    int_arg("Position"),
                    int_arg("Width").with_default(int_expr(16385)),
                ],
            ),
            function("HumpFlickerF", "Hump Flicker", vec![raw_int_arg("Hump Width")]),
            function("HumpFlickerFX", "Hump Flicker", vec![int_arg("Hump Width")]),
            function(
                "CenterDistF",
                "Center Distribution",
                vec![int_arg("Center").with_default(int_expr(16384))],
            ),
            function(
                "ChangeSlowly",
                "Change Slowly",
                vec![int_arg("Input"), int_arg("Speed")],
            ),
            function(
                "CircularSectionF",
                "Circular Section",
                vec![int_arg("Position"), int_arg("Fraction")],
            ),
            function(
                "ClampF",
                "Clamp",
                vec![int_arg("Input"), raw_int_arg("Min"), raw_int_arg("Max")],
            ),
            function(
                "ClampFX",
                "Clamp",
                vec![int_arg("Input"), int_arg("Min"), int_arg("Max")],
            ),
            function(
                "ClashImpactF",
                "Clash Impact",
                vec![raw_int_arg("Min"), raw_int_arg("Max")],
            ),
            function(
                "ClashImpactFX",
                "Clash Impact",
                vec![int_arg("Min"), int_arg("Max")],
            ),
            function(
                "Divide",
                "Divide",
                vec![int_arg("Numerator"), int_arg("Denominator")],
            ),
            function(
                "EffectPulseF",
                "Pulse On Effect",
                vec![effect_arg("Trigger Effect")],
            ),
            function(
                "LockupPulseF",
                "Pulse On Lockup",
                vec![lockup_arg("Trigger Lockup")],
            ),
            function(
                "IncrementWithReset",
                "Increment With Reset",
                vec![
                    int_arg("Increment Pulse"),
                    int_arg("Pulse Reset").with_default(int_expr(0)),
                    int_arg("Max").with_default(int_expr(32768)),
                    int_arg("Increment").with_default(int_expr(1)),
                ],
            ),
            function(
                "EffectIncrementF",
                "Increment On Effect",
                vec![
                    effect_arg("Trigger Effect"),
                    int_arg("Max").with_default(int_expr(32768)),
                    int_arg("Increment").with_default(int_expr(1)),
                ],
            ),
            function(
                "EffectPosition",
                "Effect Position",
                vec![effect_arg("Effect").with_default(Effect::None)],
            ),
            function(
                "HoldPeakF",
                "Hold Peak Value",
                vec![
                    int_arg("Input"),
                    int_arg("Hold Time (ms)"),
                    int_arg("Ramp Down Speed"),
                ],
            ),
            function(
                "Ifon",
                "If On",
                vec![int_arg("Value if On"), int_arg("Value if Off")],
            ),
            function(
                "InOutFunc",
                "In Out Func",
                vec![raw_int_arg("Out Time (ms)"), raw_int_arg("In Time (ms)")],
            ),
            function(
                "InOutFuncX",
                "In Out Func",
                vec![int_arg("Out Time (ms)"), int_arg("In Time (ms)")],
            ),
            function(
                "InOutFuncTD",
                "In Out Func TD",
                vec![
                    raw_int_arg("Out Time (ms)"),
                    raw_int_arg("In Time (ms)"),
                    raw_int_arg("Explode Time (ms)"),
                ],
            ),
            function(
                "InOutHelperF",
                "In Out Helper",
                vec![
                    int_arg("Input"),
                    bool_arg("Allow Disable").with_default(true),
                ],
            ),
            function(
                "IncrementModuloF",
                "Increment With Wrap",
                vec![
                    int_arg("Pulse Input"),
                    int_arg("Max").with_default(int_expr(32768)),
                    int_arg("Increment").with_default(int_expr(1)),
                ],
            ),
            function(
                "ThresholdPulseF",
                "Pulse on Threshold",
                vec![
                    int_arg("Input"),
                    int_arg("Threshold").with_default(int_expr(32768)),
                    int_arg("Hysteresis %").with_default(int_expr(66)),
                ],
            ),
            function(
                "IncrementF",
                "Increment on Input",
                vec![
                    int_arg("Input"),
                    int_arg("Increment Threshold").with_default(int_expr(32768)),
                    int_arg("Max Value").with_default(int_expr(32768)),
                    int_arg("Increment").with_default(int_expr(1)),
                    int_arg("Hysteresis %").with_default(int_expr(66)),
                ],
            ),
            function(
                "IntArg",
                "Get Int Arg",
                vec![raw_int_arg("Arg"), raw_int_arg("Default")],
            ),
            function(
                "IntSelect",
                "Select Based on Value",
                vec![int_arg("Selection"), variadic(int_arg("Value"))],
            ),
            function(
                "IsBetween",
                "Is Between",
                vec![int_arg("Input"), int_arg("Min"), int_arg("Max")],
            ),
            function(
                "IsLessThan",
                "Is Less Than",
                vec![int_arg("Input"), int_arg("Compare")],
            ),
            function(
                "IsGreaterThan",
                "Is Greater Than",
                vec![int_arg("Input"), int_arg("Compare")],
            ),
            function(
                "LinearSectionF",
                "Linear Section",
                vec![int_arg("Position"), int_arg("Section Size")],
            ),
            function(
                "MarbleF",
                "Marble Simulation",
                vec![
                    int_arg("Direction Offset"),
                    int_arg("Friction"),
                    int_arg("Acceleration"),
                    int_arg("Gravity"),
                ],
            ),
            function("ModF", "Modulo", vec![int_arg("Input"), int_arg("Divisor")]),
            function("Mult", "Multiply", vec![int_arg("Input 1"), int_arg("Input 2")]),
            function(
                "Percentage",
                "Percent Of",
                vec![int_arg("Input"), raw_int_arg("Percent")],
            ),
            function("OnSparkF", "On Spark", vec![int_arg("Fade Time (ms)")]),
            function("RampF", "LED Ramp", vec![]),
            function("RandomF", "Random", vec![]),
            function("RandomPerLEDF", "Random Per LED", vec![]),
            function(
                "EffectRandomF",
                "Random On Effect",
                vec![effect_arg("Trigger Effect")],
            ),
            function("RandomBlinkF", "Random Per Time", vec![int_arg("Time (mHz)")]),
            function(
                "Scale",
                "Scale",
                vec![int_arg("Input"), int_arg("Min"), int_arg("Max")],
            ),
            function("InvertF", "Invert", vec![int_arg("Input")]),
            function(
                "SequenceF",
                "Binary Sequence",
                vec![
                    raw_int_arg("Time Per Bit (ms)"),
                    raw_int_arg("Number of Bits"),
                    variadic(bits_arg("Bit Section")),
                ],
            ),
            function(
                "Sin",
                "Sin",
                vec![
                    int_arg("RPM"),
                    int_arg("Min").with_default(int_expr(0)),
                    int_arg("Max").with_default(int_expr(32768)),
                ],
            ),
            function(
                "Saw",
                "Saw",
                vec![
                    int_arg("RPM"),
                    int_arg("Min").with_default(int_expr(0)),
                    int_arg("Max").with_default(int_expr(32768)),
                ],
            ),
            function("PulsingF", "Pulsing", vec![int_arg("Time (ms)")]),
            function("Sum", "Sum", vec![variadic(int_arg("Input"))]),
        ]
        .into_iter()
        .map(Arc::new),
    );
    table
}
