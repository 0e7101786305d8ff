use bmi_model::measurement::{
    BmiCategory, BmiValue, HeightCentimeters, WeightPounds, NORMAL_LIMIT, OVERWEIGHT_LIMIT,
    UNDERWEIGHT_LIMIT,
};

/// Exact kilograms in one international avoirdupois pound.
const KILOGRAMS_PER_POUND: f64 = 0.45359237;

/// Weight in kilograms divided by the square of height in meters.
///
/// Both arguments must be finite and greater than zero; callers are expected
/// to go through [`crate::input::validate`] first.
pub fn calculate_bmi(weight_in_pounds: f64, height_in_cm: f64) -> f64 {
    let weight_in_kg = weight_in_pounds * KILOGRAMS_PER_POUND;
    let height_in_meters = height_in_cm / 100.0;
    weight_in_kg / (height_in_meters * height_in_meters)
}

/// Classifies a BMI value. Boundary values belong to the higher category.
pub fn interpret_bmi(bmi: f64) -> BmiCategory {
    if bmi < UNDERWEIGHT_LIMIT {
        BmiCategory::Underweight
    } else if bmi < NORMAL_LIMIT {
        BmiCategory::Normal
    } else if bmi < OVERWEIGHT_LIMIT {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

pub fn body_mass_index(weight: WeightPounds, height: HeightCentimeters) -> BmiValue {
    BmiValue::new(calculate_bmi(weight.value(), height.value()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calculates_bmi_with_exact_pound_factor() {
        let test_data = [
            (154.0, 175.0, 22.80921632),
            (100.0, 150.0, 20.15966089),
            (220.0, 180.0, 30.79948191),
            (110.0, 180.0, 15.39974096),
            (300.0, 170.0, 47.08571315),
        ];

        for (i, (weight, height, expected)) in test_data.into_iter().enumerate() {
            let bmi = calculate_bmi(weight, height);
            assert!(
                (bmi - expected).abs() < 1e-6,
                "Test case #{}: got {}, expected {}",
                i,
                bmi,
                expected
            );
        }
    }

    #[test]
    fn bmi_increases_with_weight_and_decreases_with_height() {
        let samples = [1.0, 45.5, 99.9, 154.0, 200.0, 480.25, 1000.0];

        for &fixed in samples.iter() {
            for pair in samples.windows(2) {
                assert!(
                    calculate_bmi(pair[0], fixed) < calculate_bmi(pair[1], fixed),
                    "weight {:?} at height {}",
                    pair,
                    fixed
                );
                assert!(
                    calculate_bmi(fixed, pair[0]) > calculate_bmi(fixed, pair[1]),
                    "height {:?} at weight {}",
                    pair,
                    fixed
                );
            }
        }
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        let first = calculate_bmi(154.0, 175.0);
        for _ in 0..100 {
            assert_eq!(calculate_bmi(154.0, 175.0).to_bits(), first.to_bits());
        }
        assert_eq!(interpret_bmi(first), interpret_bmi(first));
    }

    #[test]
    fn interprets_bmi_boundaries() {
        let test_data = [
            (0.0, BmiCategory::Underweight),
            (18.4, BmiCategory::Underweight),
            (18.499999, BmiCategory::Underweight),
            (18.5, BmiCategory::Normal),
            (22.8, BmiCategory::Normal),
            (24.99, BmiCategory::Normal),
            (25.0, BmiCategory::Overweight),
            (29.99, BmiCategory::Overweight),
            (30.0, BmiCategory::Obese),
            (47.1, BmiCategory::Obese),
        ];

        for (i, (bmi, expected)) in test_data.into_iter().enumerate() {
            assert_eq!(interpret_bmi(bmi), expected, "Test case #{}", i);
        }
    }

    #[test]
    fn interprets_to_display_labels() {
        assert_eq!(interpret_bmi(18.4).label(), "Underweight");
        assert_eq!(interpret_bmi(18.5).label(), "Normal weight");
        assert_eq!(interpret_bmi(25.0).label(), "Overweight");
        assert_eq!(interpret_bmi(30.0).label(), "Obese");
    }

    #[test]
    fn body_mass_index_of_validated_measurements() {
        let weight = WeightPounds::new(154.0).unwrap();
        let height = HeightCentimeters::new(175.0).unwrap();
        let bmi = body_mass_index(weight, height);
        assert_eq!(bmi.value(), calculate_bmi(154.0, 175.0));
        assert_eq!(bmi.to_string(), "22.81");
    }
}
