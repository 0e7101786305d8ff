use std::io::Write;

use log::{debug, info};

use crate::{
    config::OutputFormat,
    error::Result,
    form::BmiForm,
    prompt::{InputSource, HEIGHT_PROMPT, WEIGHT_PROMPT},
    report::render_error,
};

/// Interactive loop: asks for weight and height, submits the form and prints
/// the outcome until input runs out.
pub struct Session<W: Write> {
    input: Box<dyn InputSource>,
    output: W,
    format: OutputFormat,
    once: bool,
    form: BmiForm,
}

impl<W: Write> Session<W> {
    pub fn new(input: Box<dyn InputSource>, output: W, format: OutputFormat, once: bool) -> Self {
        Self {
            input,
            output,
            format,
            once,
            form: BmiForm::new(),
        }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn form(&self) -> &BmiForm {
        &self.form
    }

    /// Returns the number of valid submissions.
    pub fn run(&mut self) -> Result<usize> {
        info!("Starting interactive session");
        let mut calculated = 0;

        loop {
            let Some(weight) = self.input.read_line(WEIGHT_PROMPT)? else {
                break;
            };
            let Some(height) = self.input.read_line(HEIGHT_PROMPT)? else {
                break;
            };

            self.form.set_weight(weight);
            self.form.set_height(height);
            match self.form.submit() {
                Ok(report) => {
                    writeln!(self.output, "{}", report.render(self.format)?)?;
                    calculated += 1;
                }
                Err(e) => writeln!(self.output, "{}", render_error(&e, self.format)?)?,
            }

            if self.once {
                debug!("Single calculation requested, stopping");
                break;
            }
        }

        info!(
            "Input finished after {} successful calculations",
            calculated
        );
        Ok(calculated)
    }
}
