pub mod calculator;
pub mod config;
pub mod error;
pub mod form;
pub mod input;
pub mod logging;
pub mod prompt;
pub mod report;
pub mod session;

pub use calculator::{calculate_bmi, interpret_bmi};
pub use error::{Error, Result};
