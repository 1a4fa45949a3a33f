//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for preference-kiosk
#[derive(Parser, Debug)]
#[command(name = "preference-kiosk")]
#[command(author, version, about = "Human preference collection kiosk")]
#[command(long_about = r#"
Preference Kiosk cycles through a prompt list, asks a model for two candidate
outputs per prompt, and records which one a human preferred.

Each session:
1. Stage the next prompt (the list wraps around)
2. Generate candidate A, then candidate B, with the prompt's model
3. Wait for a button press (A or B)
4. Write <results>/<session-id>.json and move on

Console keys stand in for the physical buttons:
  a / r    choose candidate A (red button)
  b        choose candidate B (blue button)
  n        save and advance to the next prompt
  q        quit

Configuration files are loaded from (in priority order):
1. KIOSK_* environment variables
2. --config <path>     Explicit config file
3. ./kiosk.toml        Project-level config
4. ~/.config/preference-kiosk/config.toml   Global config

Example:
  preference-kiosk --prompts prompts.json --results ./results
  preference-kiosk --once -vv
"#)]
pub struct Cli {
    /// Prompt list file (overrides `prompts.path`)
    #[arg(short, long, value_name = "PATH")]
    pub prompts: Option<PathBuf>,

    /// Directory for result records (overrides `results.dir`)
    #[arg(short, long, value_name = "DIR")]
    pub results: Option<PathBuf>,

    /// Run a single session, then exit
    #[arg(long)]
    pub once: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_overrides() {
        let cli = Cli::parse_from([
            "preference-kiosk",
            "--prompts",
            "p.json",
            "-r",
            "/tmp/results",
            "--once",
            "-vv",
        ]);
        assert_eq!(cli.prompts, Some(PathBuf::from("p.json")));
        assert_eq!(cli.results, Some(PathBuf::from("/tmp/results")));
        assert!(cli.once);
        assert_eq!(cli.verbose, 2);
        assert!(!cli.no_config);
    }
}
