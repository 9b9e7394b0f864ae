use vetdesk::{write_reminders, ReminderGenerator};
use anyhow::{Context, Result};
use std::env;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: vetdesk-remindergen [-n COUNT] [-s SEED] [-o OUTPUT]";

struct Config {
    count: usize,
    seed: u64,
    output_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            count: 200,
            seed: 42,
            output_file: "reminders.json".to_string(),
        }
    }
}

fn parse_args(args: &[String]) -> Result<Config> {
    let mut config = Config::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--count" => {
                i += 1;
                let value = args.get(i).with_context(|| format!("{} requires an argument\n{}", args[i - 1], USAGE))?;
                config.count = value
                    .parse()
                    .with_context(|| format!("invalid reminder count '{}'", value))?;
            }
            "-s" | "--seed" => {
                i += 1;
                let value = args.get(i).with_context(|| format!("{} requires an argument\n{}", args[i - 1], USAGE))?;
                config.seed = value
                    .parse()
                    .with_context(|| format!("invalid seed '{}'", value))?;
            }
            "-o" | "--output" => {
                i += 1;
                let value = args.get(i).with_context(|| format!("{} requires an argument\n{}", args[i - 1], USAGE))?;
                config.output_file = value.clone();
            }
            "-h" | "--help" => {
                println!("{}", USAGE);
                std::process::exit(0);
            }
            other => anyhow::bail!("unknown argument '{}'\n{}", other, USAGE),
        }
        i += 1;
    }

    Ok(config)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args)?;

    let reminders = ReminderGenerator::new(config.seed).generate(config.count);
    write_reminders(&config.output_file, &reminders)?;

    tracing::info!(
        count = reminders.len(),
        seed = config.seed,
        path = %config.output_file,
        "reminders written"
    );
    println!("Reminders written to: {}", config.output_file);

    Ok(())
}
