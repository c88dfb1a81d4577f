use colored::*;
use eyre::Result;

use crate::cli::{ConfigAction, OutputFormat};
use crate::config::Config;

pub fn run(action: ConfigAction, config: &Config) -> Result<()> {
    match action {
        ConfigAction::Show { format } => show(OutputFormat::resolve(format), config),
    }
}

fn show(format: OutputFormat, config: &Config) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(config)?);
        }
        OutputFormat::Yaml => {
            println!("{}", serde_yaml::to_string(config)?);
        }
        OutputFormat::Text => {
            println!("{}", "Logchirp Configuration".bold());
            println!();

            println!("  {:10} {}", "log_level:".cyan(), config.log_level.as_filter());
            match &config.log_dir {
                Some(dir) => println!("  {:10} {}", "log_dir:".cyan(), dir.display()),
                None => println!(
                    "  {:10} {}",
                    "log_dir:".cyan(),
                    format!("{} (default)", config.resolve_log_dir().display()).dimmed()
                ),
            }
        }
    }

    Ok(())
}
