use bmi_model::measurement::{HeightCentimeters, WeightPounds};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Field {
    Weight,
    Height,
}

/// Rejected user input. The message is the same whichever field failed;
/// `field` and `raw` are kept for logging.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("Please enter valid numeric values.")]
    InvalidInput { field: Field, raw: String },
}

impl InputError {
    fn invalid(field: Field, raw: &str) -> Self {
        InputError::InvalidInput {
            field,
            raw: raw.to_owned(),
        }
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok()
}

/// Parses a single measurement, accepting only finite numbers above zero.
pub fn parse_measurement(field: Field, raw: &str) -> Result<f64, InputError> {
    parse_number(raw)
        .filter(|value| value.is_finite() && *value > 0.0)
        .ok_or_else(|| InputError::invalid(field, raw))
}

pub fn validate(
    weight_raw: &str,
    height_raw: &str,
) -> Result<(WeightPounds, HeightCentimeters), InputError> {
    let weight = parse_number(weight_raw)
        .and_then(WeightPounds::new)
        .ok_or_else(|| InputError::invalid(Field::Weight, weight_raw))?;
    let height = parse_number(height_raw)
        .and_then(HeightCentimeters::new)
        .ok_or_else(|| InputError::invalid(Field::Height, height_raw))?;

    Ok((weight, height))
}
