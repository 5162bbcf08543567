use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            info(format!("Config file: {}", path.display()));
            if !path.exists() {
                warning("Config file not found, showing defaults");
            }
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        if *check {
            let missing = Config::missing_keys(&path)?;
            if missing.is_empty() {
                success("Configuration file is complete");
            } else {
                warning(format!(
                    "Missing keys (defaults in use): {}",
                    missing.join(", ")
                ));
            }
        }

        if !*print_config && !*check {
            info("Nothing to do: use --print or --check");
        }
    }

    Ok(())
}
