use std::path::PathBuf;

use clap::Parser;

use carriage_scene::config::DEFAULT_SPEED;

#[derive(Debug, Parser)]
#[command(name = "carriage-studio", version)]
#[command(about = "Horse-and-carriage scene: click or press Space to start and stop")]
pub struct Cli {
    /// Horse animation frame (repeatable, played in the given order)
    #[arg(long = "horse", value_name = "PATH")]
    pub horse: Vec<PathBuf>,

    /// Carriage image (drawn without wheels; rotating wheels are added)
    #[arg(long, value_name = "PATH")]
    pub carriage: Option<PathBuf>,

    /// Scroll speed in pixels per second (60-800; invalid values use the default)
    #[arg(long, value_name = "PX_PER_SEC", default_value_t = DEFAULT_SPEED)]
    pub speed: f64,

    /// Start with the scene already running
    #[arg(long)]
    pub run: bool,

    /// Log filter in env_logger syntax (overrides RUST_LOG)
    #[arg(long, value_name = "FILTER")]
    pub log: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("carriage-studio").chain(args.iter().copied()))
            .expect("valid args")
    }

    #[test]
    fn defaults_start_stopped_at_default_speed() {
        let cli = parse(&[]);
        assert!(cli.horse.is_empty());
        assert!(cli.carriage.is_none());
        assert_eq!(cli.speed, DEFAULT_SPEED);
        assert!(!cli.run);
        assert!(cli.log.is_none());
    }

    #[test]
    fn horse_frames_keep_their_order() {
        let cli = parse(&["--horse", "b.png", "--horse", "a.png", "--carriage", "c.webp"]);
        assert_eq!(cli.horse, vec![PathBuf::from("b.png"), PathBuf::from("a.png")]);
        assert_eq!(cli.carriage, Some(PathBuf::from("c.webp")));
    }

    #[test]
    fn speed_and_flags_parse() {
        let cli = parse(&["--speed", "300", "--run", "--log", "debug"]);
        assert_eq!(cli.speed, 300.0);
        assert!(cli.run);
        assert_eq!(cli.log.as_deref(), Some("debug"));
    }

    #[test]
    fn non_numeric_speed_is_rejected() {
        assert!(Cli::try_parse_from(["carriage-studio", "--speed", "fast"]).is_err());
    }
}
