use std::path::PathBuf;

use eyre::{Context, Result};
use pocketcube_core::CubeEngine;
use pocketcube_engine::FakeEngine;
use pocketcube_view::ViewPreferences;

/// Pocket cube viewer command-line interface.
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    /// Number of random moves in a scramble.
    #[arg(long, value_name = "COUNT")]
    pub scramble_moves: Option<usize>,

    /// Redraw period in milliseconds.
    #[arg(long, value_name = "MS")]
    pub tick_ms: Option<u64>,

    /// JSON preferences file overriding the built-in defaults.
    #[arg(long, value_name = "FILE")]
    pub prefs: Option<PathBuf>,

    /// Drive the real cube engine instead of the built-in fake.
    #[cfg(feature = "native")]
    #[arg(long)]
    pub native: bool,
}

impl Args {
    /// Resolves preferences: built-in defaults, then the `--prefs` file,
    /// then individual flags.
    pub fn view_preferences(&self) -> Result<ViewPreferences> {
        let mut prefs = match &self.prefs {
            Some(path) => {
                let contents = std::fs::read_to_string(path)
                    .with_context(|| format!("error reading preferences file {}", path.display()))?;
                serde_json::from_str(&contents)
                    .with_context(|| format!("error parsing preferences file {}", path.display()))?
            }
            None => ViewPreferences::default(),
        };
        if let Some(count) = self.scramble_moves {
            prefs.scramble_moves = count;
        }
        if let Some(ms) = self.tick_ms {
            prefs.tick_ms = ms;
        }
        Ok(prefs)
    }

    /// The cube engine selected by the command line.
    pub fn engine(&self) -> Box<dyn CubeEngine> {
        #[cfg(feature = "native")]
        if self.native {
            log::info!("using the native cube engine");
            return Box::new(pocketcube_engine::NativeEngine::new());
        }
        log::info!("using the built-in fake engine");
        Box::new(FakeEngine::new())
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("pocketcube").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults_without_flags() {
        let prefs = parse(&[]).view_preferences().unwrap();
        assert_eq!(ViewPreferences::default(), prefs);
    }

    #[test]
    fn test_flags_override_defaults() {
        let prefs = parse(&["--scramble-moves", "10", "--tick-ms", "40"])
            .view_preferences()
            .unwrap();
        assert_eq!(10, prefs.scramble_moves);
        assert_eq!(40, prefs.tick_ms);
        assert_eq!(0.01, prefs.drag_sensitivity);
    }

    #[test]
    fn test_flags_override_prefs_file() {
        let path =
            std::env::temp_dir().join(format!("pocketcube_prefs_{}.json", std::process::id()));
        std::fs::write(&path, r#"{"tick_ms": 30, "scramble_moves": 12}"#).unwrap();

        let prefs = parse(&["--prefs", path.to_str().unwrap(), "--tick-ms", "40"])
            .view_preferences()
            .unwrap();
        std::fs::remove_file(&path).unwrap();

        // The flag beats the file; the file beats the default.
        assert_eq!(40, prefs.tick_ms);
        assert_eq!(12, prefs.scramble_moves);
    }
}
