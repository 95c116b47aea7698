use pizzeria_patterns::demos::structural;
use pizzeria_patterns::{PizzeriaConfig, Transcript};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .init();

    let config = PizzeriaConfig::default();
    structural::run(&config, &Transcript::stdout())?;

    Ok(())
}
