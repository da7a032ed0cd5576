//! Command line and environment configuration

use std::path::PathBuf;

use clap::Parser;
use hexarea_config::ViewportConfig;

/// Replay a script of UI messages against a hexagon grid session.
///
/// Replies are printed to stdout as JSON lines; logs go to stderr.
#[derive(Parser, Debug)]
#[command(name = "hexarea", version, about = "Headless hexagon grid painter")]
pub struct Cli {
    /// JSON array of UI messages to replay
    #[arg(short, long, value_name = "SCRIPT.json")]
    pub script: PathBuf,

    /// Background image (PNG, JPEG, TIFF or BMP)
    #[arg(short, long, value_name = "IMAGE")]
    pub background: Option<PathBuf>,

    /// Write the final frame to this PNG file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Viewport width in pixels (overrides HEXAREA_VIEWPORT)
    #[arg(long, requires = "height")]
    pub width: Option<u32>,

    /// Viewport height in pixels (overrides HEXAREA_VIEWPORT)
    #[arg(long, requires = "width")]
    pub height: Option<u32>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    pub verbose: bool,
}

/// Resolved application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub script: PathBuf,
    pub background: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub viewport: ViewportConfig,
}

impl AppConfig {
    pub fn from_cli(cli: Cli) -> Self {
        let viewport = match (cli.width, cli.height) {
            (Some(width), Some(height)) if width > 0 && height > 0 => {
                ViewportConfig::new(width, height)
            }
            _ => ViewportConfig::from_env(),
        };
        Self {
            script: cli.script,
            background: cli.background,
            output: cli.output,
            viewport,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_viewport_override() {
        let cli = Cli::parse_from([
            "hexarea", "--script", "s.json", "--width", "320", "--height", "200",
        ]);
        let config = AppConfig::from_cli(cli);
        assert_eq!(config.viewport, ViewportConfig::new(320, 200));
        assert_eq!(config.script, PathBuf::from("s.json"));
        assert!(config.output.is_none());
    }

    #[test]
    fn test_width_requires_height() {
        let parsed = Cli::try_parse_from(["hexarea", "--script", "s.json", "--width", "320"]);
        assert!(parsed.is_err());
    }
}
