use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// Lowest BMI that is no longer considered underweight.
pub const UNDERWEIGHT_LIMIT: f64 = 18.5;
/// Lowest BMI that is considered overweight.
pub const NORMAL_LIMIT: f64 = 25.0;
/// Lowest BMI that is considered obese.
pub const OVERWEIGHT_LIMIT: f64 = 30.0;

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Body mass in pounds. Always finite and greater than zero.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "f64", into = "f64"))]
pub struct WeightPounds(f64);

impl WeightPounds {
    pub fn new(pounds: f64) -> Option<Self> {
        is_positive(pounds).then_some(Self(pounds))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for WeightPounds {
    type Error = &'static str;

    fn try_from(pounds: f64) -> Result<Self, Self::Error> {
        Self::new(pounds).ok_or("Weight must be a positive number")
    }
}

impl From<WeightPounds> for f64 {
    fn from(weight: WeightPounds) -> Self {
        weight.0
    }
}

impl fmt::Display for WeightPounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} lbs", self.0)
    }
}

/// Body height in centimeters. Always finite and greater than zero.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "f64", into = "f64"))]
pub struct HeightCentimeters(f64);

impl HeightCentimeters {
    pub fn new(centimeters: f64) -> Option<Self> {
        is_positive(centimeters).then_some(Self(centimeters))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for HeightCentimeters {
    type Error = &'static str;

    fn try_from(centimeters: f64) -> Result<Self, Self::Error> {
        Self::new(centimeters).ok_or("Height must be a positive number")
    }
}

impl From<HeightCentimeters> for f64 {
    fn from(height: HeightCentimeters) -> Self {
        height.0
    }
}

impl fmt::Display for HeightCentimeters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} cm", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct BmiValue(f64);

impl BmiValue {
    pub fn new(bmi: f64) -> Self {
        Self(bmi)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for BmiValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, EnumIter)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }

    /// Range of BMI values belonging to this category, as an inclusive lower
    /// and exclusive upper bound. Open ends are `None`.
    pub fn range(&self) -> (Option<f64>, Option<f64>) {
        match self {
            BmiCategory::Underweight => (None, Some(UNDERWEIGHT_LIMIT)),
            BmiCategory::Normal => (Some(UNDERWEIGHT_LIMIT), Some(NORMAL_LIMIT)),
            BmiCategory::Overweight => (Some(NORMAL_LIMIT), Some(OVERWEIGHT_LIMIT)),
            BmiCategory::Obese => (Some(OVERWEIGHT_LIMIT), None),
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
