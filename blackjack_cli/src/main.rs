use blackjack_cli::{GameConfig, SessionError, Shell};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "blackjack")]
#[command(about = "Play blackjack against the dealer in your terminal")]
struct Args {
    /// JSON file with game settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for the shuffle, the same seed deals the same cards
    #[arg(long)]
    seed: Option<u64>,

    /// Player name, skips the name question
    #[arg(long)]
    name: Option<String>,

    /// Do not clear the terminal between screens
    #[arg(long)]
    no_clear: bool,

    /// Skip the slow loading banner
    #[arg(long)]
    fast: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn build_config(args: &Args) -> Result<GameConfig, SessionError> {
    let mut builder = match &args.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::new(),
    };
    if let Some(seed) = args.seed {
        builder.seed(seed);
    }
    if let Some(name) = &args.name {
        builder.player_name(name.as_str());
    }
    if args.no_clear {
        builder.clear_screen(false);
    }
    if args.fast {
        builder.typing_delay_ms(0);
    }
    let config = builder.build();
    config.validate()?;
    Ok(config)
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Diagnostics go to stderr so they never end up in the middle of the card art
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match build_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!(?config, "starting session");

    let stdin = io::stdin();
    let mut shell = Shell::new(stdin.lock(), io::stdout(), config);
    if let Err(e) = shell.run() {
        tracing::error!(%e, "session aborted");
        eprintln!("error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::fs;

    fn write_config(name: &str, json: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("{}-{}.json", name, std::process::id()));
        fs::write(&path, json).unwrap();
        path
    }

    #[test]
    fn args_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn no_flags_gives_the_default_game() {
        let args = Args::parse_from(["blackjack"]);
        assert_eq!(build_config(&args).unwrap(), GameConfig::default());
    }

    #[test]
    fn flags_override_the_config_file() {
        let path = write_config(
            "blackjack-flags-over-file",
            r#"{ "player_name": "Ann", "seed": 1, "typing_delay_ms": 250, "clear_screen": true, "cards_per_row": 6 }"#,
        );
        let args = Args::parse_from([
            "blackjack",
            "--config",
            path.to_str().unwrap(),
            "--name",
            "Sofia",
            "--seed",
            "2",
            "--fast",
            "--no-clear",
        ]);
        let config = build_config(&args).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.player_name.as_deref(), Some("Sofia"));
        assert_eq!(config.seed, Some(2));
        assert_eq!(config.typing_delay_ms, 0);
        assert!(!config.clear_screen);
        // untouched by any flag
        assert_eq!(config.cards_per_row, 6);
    }

    #[test]
    fn file_values_survive_without_flags() {
        let path = write_config(
            "blackjack-file-only",
            r#"{ "player_name": "Ann", "typing_delay_ms": 250, "clear_screen": false }"#,
        );
        let args = Args::parse_from(["blackjack", "--config", path.to_str().unwrap()]);
        let config = build_config(&args).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.player_name.as_deref(), Some("Ann"));
        assert_eq!(config.typing_delay_ms, 250);
        assert!(!config.clear_screen);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn invalid_config_file_is_rejected() {
        let path = write_config("blackjack-invalid", r#"{ "cards_per_row": 0 }"#);
        let args = Args::parse_from(["blackjack", "--config", path.to_str().unwrap()]);
        let result = build_config(&args);
        fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(SessionError::Config(_))));

        let args = Args::parse_from(["blackjack", "--config", "/definitely/not/here.json"]);
        assert!(build_config(&args).is_err());
    }
}
