use log::{debug, warn};

use crate::{
    input::{validate, InputError},
    report::BmiReport,
};

/// State of the calculator form: two raw text fields plus the outcome of the
/// last submission. Editing a field keeps the previous outcome until the next
/// [`BmiForm::submit`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BmiForm {
    weight_input: String,
    height_input: String,
    result: Option<f64>,
    interpretation: String,
}

impl BmiForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_weight(&mut self, weight: impl Into<String>) {
        self.weight_input = weight.into();
    }

    pub fn set_height(&mut self, height: impl Into<String>) {
        self.height_input = height.into();
    }

    pub fn weight_input(&self) -> &str {
        &self.weight_input
    }

    pub fn height_input(&self) -> &str {
        &self.height_input
    }

    pub fn result(&self) -> Option<f64> {
        self.result
    }

    /// Last BMI with two decimals, if the last submission was valid.
    pub fn formatted_result(&self) -> Option<String> {
        self.result.map(|bmi| format!("{:.2}", bmi))
    }

    /// Category label after a valid submission, the error message after an
    /// invalid one, empty before the first.
    pub fn interpretation(&self) -> &str {
        &self.interpretation
    }

    pub fn submit(&mut self) -> Result<BmiReport, InputError> {
        match validate(&self.weight_input, &self.height_input) {
            Ok((weight, height)) => {
                let report = BmiReport::new(weight, height);
                debug!(
                    "Calculated BMI {} ({}) for {}, {}",
                    report.bmi, report.category, weight, height
                );
                self.result = Some(report.bmi.value());
                self.interpretation = report.interpretation.to_owned();
                Ok(report)
            }
            Err(e) => {
                warn!("Rejected input: {:?}", e);
                self.result = None;
                self.interpretation = e.to_string();
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(weight: &str, height: &str) -> BmiForm {
        let mut form = BmiForm::new();
        form.set_weight(weight);
        form.set_height(height);
        form
    }

    #[test]
    fn starts_empty() {
        let form = BmiForm::new();
        assert_eq!(form.result(), None);
        assert_eq!(form.formatted_result(), None);
        assert_eq!(form.interpretation(), "");
    }

    #[test]
    fn valid_submission_sets_result() {
        let mut form = filled("154", "175");
        let report = form.submit().unwrap();

        assert_eq!(form.result(), Some(report.bmi.value()));
        assert_eq!(form.formatted_result().as_deref(), Some("22.81"));
        assert_eq!(form.interpretation(), "Normal weight");
    }

    #[test]
    fn invalid_submission_clears_result() {
        let mut form = filled("154", "175");
        form.submit().unwrap();

        form.set_height("0");
        assert!(form.submit().is_err());
        assert_eq!(form.result(), None);
        assert_eq!(form.interpretation(), "Please enter valid numeric values.");
    }

    #[test]
    fn editing_keeps_previous_outcome_until_submit() {
        let mut form = filled("300", "170");
        form.submit().unwrap();

        form.set_weight("abc");
        assert_eq!(form.weight_input(), "abc");
        assert_eq!(form.formatted_result().as_deref(), Some("47.09"));
        assert_eq!(form.interpretation(), "Obese");
    }

    #[test]
    fn invalid_inputs_are_rejected() {
        let test_data = [
            ("", "175"),
            ("154", ""),
            ("abc", "175"),
            ("0", "175"),
            ("154", "0"),
            ("-154", "175"),
            ("154", "-175"),
            ("NaN", "175"),
            ("154", "inf"),
        ];

        for (i, (weight, height)) in test_data.into_iter().enumerate() {
            let mut form = filled(weight, height);
            assert!(form.submit().is_err(), "Test case #{}", i);
            assert_eq!(form.result(), None, "Test case #{}", i);
        }
    }
}
