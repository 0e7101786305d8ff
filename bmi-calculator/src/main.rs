use std::{error::Error, io, process};

use clap::{Parser, Subcommand};
use log::info;

use bmi_calculator::{
    config::{Config, OutputFormat},
    form::BmiForm,
    logging,
    prompt::LineSource,
    report::{describe_categories, render_error},
    session::Session,
};

#[derive(Parser)]
#[command(name = "bmi-calculator", version, about = "Body Mass Index calculator")]
struct Cli {
    /// Body weight in pounds
    #[arg(long, value_name = "LBS", requires = "height", allow_hyphen_values = true)]
    weight: Option<String>,

    /// Body height in centimeters
    #[arg(long, value_name = "CM", requires = "weight", allow_hyphen_values = true)]
    height: Option<String>,

    /// Output format, overrides BMI_OUTPUT
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Stop the interactive prompt after one calculation
    #[arg(long)]
    once: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// List the BMI categories and their ranges
    Categories,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let config = Config::from_env(cli.format)?;
    logging::init(&config.log_config)?;

    let format = config.output;

    if let Some(Command::Categories) = cli.command {
        println!("{}", describe_categories());
        return Ok(());
    }

    match (cli.weight, cli.height) {
        (Some(weight), Some(height)) => {
            info!("Calculating BMI from command line arguments");
            let mut form = BmiForm::new();
            form.set_weight(weight);
            form.set_height(height);
            match form.submit() {
                Ok(report) => println!("{}", report.render(format)?),
                Err(e) => {
                    println!("{}", render_error(&e, format)?);
                    process::exit(1);
                }
            }
        }
        _ => {
            info!("No measurements given, prompting");
            let input = Box::new(LineSource::stdio());
            Session::new(input, io::stdout(), format, cli.once).run()?;
        }
    }

    Ok(())
}
