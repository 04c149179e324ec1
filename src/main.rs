use std::process::ExitCode;

use tracing::{
    error,
    warn
};

use equation_analysis::configuration::Configuration;
use equation_analysis::equation::univariateequation::UnivariateEquation;
use equation_analysis::math::complexformat::{
    real,
    representative
};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into()),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(config_path) => match Configuration::from_reader(&config_path) {
            Ok(config) => config,
            Err(err) => {
                error!(path = %config_path, "cannot load configuration: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => Configuration::default()
    };

    let x = config.x();
    for (index, equation_result) in config.build_equations().into_iter().enumerate() {
        let equation = match equation_result {
            Ok(equation) => equation,
            Err(err) => {
                warn!(index, "skipping coefficient set: {err}");
                continue;
            }
        };
        println!("{}\ny({:.6}) = {}\n",
                 equation.representative_with(config.complex_roots()),
                 x,
                 representative(equation.evaluate(real(x))));
    }

    ExitCode::SUCCESS
}
