use std::fmt;

use bmi_model::measurement::{BmiCategory, BmiValue, HeightCentimeters, WeightPounds};
use itertools::Itertools;
use serde::Serialize;
use serde_json::json;
use strum::IntoEnumIterator;

use crate::{
    calculator::{body_mass_index, interpret_bmi},
    config::OutputFormat,
    error::Result,
    input::InputError,
};

/// Inputs and outcome of a single calculation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BmiReport {
    pub weight_lbs: WeightPounds,
    pub height_cm: HeightCentimeters,
    pub bmi: BmiValue,
    pub category: BmiCategory,
    pub interpretation: &'static str,
}

impl BmiReport {
    pub fn new(weight_lbs: WeightPounds, height_cm: HeightCentimeters) -> Self {
        let bmi = body_mass_index(weight_lbs, height_cm);
        let category = interpret_bmi(bmi.value());
        Self {
            weight_lbs,
            height_cm,
            bmi,
            category,
            interpretation: category.label(),
        }
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.to_string()),
            OutputFormat::Json => Ok(serde_json::to_string(self)?),
        }
    }
}

impl fmt::Display for BmiReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BMI: {}\n{}", self.bmi, self.interpretation)
    }
}

/// Renders rejected input in the same format as a report would be, so JSON
/// output stays one object per line.
pub fn render_error(error: &InputError, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(error.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string(&json!({ "error": error.to_string() }))?),
    }
}

fn describe_range(category: BmiCategory) -> String {
    match category.range() {
        (None, Some(upper)) => format!("below {}", upper),
        (Some(lower), Some(upper)) => format!("{} to below {}", lower, upper),
        (Some(lower), None) => format!("{} and above", lower),
        (None, None) => "any value".to_owned(),
    }
}

/// One line per category with its label and BMI range.
pub fn describe_categories() -> String {
    BmiCategory::iter()
        .map(|category| format!("{:<14}{}", category.label(), describe_range(category)))
        .join("\n")
}
