//! Command line input limits
//!
//! The add/edit inputs cap the description length and keep discount and
//! rating inside their ranges before the value reaches the form.

use shared::FieldValue;

const DESCRIPTION_MAX_CHARS: usize = 200;
const DISCOUNT_RANGE: (f64, f64) = (0.0, 100.0);
const RATING_RANGE: (f64, f64) = (0.0, 5.0);

pub fn apply_input_limits(value: FieldValue) -> FieldValue {
    match value {
        FieldValue::Description(text) => {
            FieldValue::Description(text.chars().take(DESCRIPTION_MAX_CHARS).collect())
        }
        FieldValue::DiscountPercentage(v) => FieldValue::DiscountPercentage(clamp(v, DISCOUNT_RANGE)),
        FieldValue::Rating(v) => FieldValue::Rating(clamp(v, RATING_RANGE)),
        other => other,
    }
}

fn clamp(value: f64, (min, max): (f64, f64)) -> f64 {
    // NaN passes through untouched
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}
