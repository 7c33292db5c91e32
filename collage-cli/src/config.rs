//! Configuration: `.env` loading and resolution of CLI arguments.

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use collage_engine::{BackgroundColor, FitMode, GridConfig};
use image_source::OrderStrategy;

use crate::cli::{CliArgs, FitArg, OrderArg};

/// Fully validated settings for one run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input_dir: PathBuf,
    pub order: OrderStrategy,
    pub grid: GridConfig,
}

/// Load .env from candidate paths so `COLLAGE_*` and `RUST_LOG` can be kept there.
///
/// Runs before tracing is set up, so the loaded path is returned for logging.
pub fn load_dotenv() -> Option<PathBuf> {
    load_dotenv_from(&[Path::new(".env"), Path::new("../.env")])
}

/// Load the first candidate file that exists; variables already set win.
fn load_dotenv_from(candidates: &[&Path]) -> Option<PathBuf> {
    candidates
        .iter()
        .find(|path| dotenvy::from_path(path).is_ok())
        .map(|path| path.to_path_buf())
}

impl RunConfig {
    /// Validate arguments and build the run configuration.
    ///
    /// Nothing is read from the input directory until this succeeds.
    pub fn from_args(args: CliArgs) -> anyhow::Result<Self> {
        if args.columns < 1 {
            bail!("Number of columns must be at least 1");
        }
        if args.width < 1 || args.height < 1 {
            bail!("Width and height must be positive numbers");
        }
        if !(1..=100).contains(&args.quality) {
            bail!("Quality must be between 1 and 100");
        }

        let background: BackgroundColor = args
            .background
            .parse()
            .with_context(|| format!("Invalid background color: {}", args.background))?;

        let order = match (args.order, args.manifest) {
            (OrderArg::Manifest, Some(path)) => OrderStrategy::Manifest(path),
            (OrderArg::Manifest, None) => bail!("--order manifest requires --manifest <FILE>"),
            (OrderArg::Natural, _) => OrderStrategy::Natural,
            (OrderArg::Lexicographic, _) => OrderStrategy::Lexicographic,
        };

        let fit = match args.fit {
            FitArg::Stretch => FitMode::Stretch,
            FitArg::Cover => FitMode::Cover,
            FitArg::Contain => FitMode::Contain,
        };

        let grid = GridConfig::new()
            .with_columns(args.columns)
            .with_cell_size(args.width, args.height)
            .with_padding(args.padding)
            .with_background(background)
            .with_fit(fit)
            .with_output_path(args.output)
            .with_jpeg_quality(args.quality);
        grid.validate()?;

        Ok(Self {
            input_dir: args.input_dir,
            order,
            grid,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use collage_engine::CollageError;

    fn resolve(extra: &[&str]) -> anyhow::Result<RunConfig> {
        let argv = std::iter::once("collage").chain(extra.iter().copied());
        RunConfig::from_args(CliArgs::try_parse_from(argv).unwrap())
    }

    #[test]
    fn test_resolve_defaults() {
        let config = resolve(&[]).unwrap();
        assert_eq!(config.input_dir, PathBuf::from("."));
        assert_eq!(config.order, OrderStrategy::Lexicographic);
        assert_eq!(config.grid, GridConfig::new());
    }

    #[test]
    fn test_resolve_custom_values() {
        let config = resolve(&[
            "-c", "3", "-w", "350", "-t", "600", "-b", "#000", "--fit", "contain",
        ])
        .unwrap();
        assert_eq!(config.grid.columns, 3);
        assert_eq!((config.grid.cell_width, config.grid.cell_height), (350, 600));
        assert_eq!(config.grid.background, BackgroundColor::BLACK);
        assert_eq!(config.grid.fit, FitMode::Contain);
    }

    #[test]
    fn test_resolve_rejects_zero_columns() {
        let err = resolve(&["--columns", "0"]).unwrap_err();
        assert!(err.to_string().contains("columns"));
    }

    #[test]
    fn test_resolve_rejects_zero_size() {
        assert!(resolve(&["--width", "0"]).is_err());
        assert!(resolve(&["--height", "0"]).is_err());
    }

    #[test]
    fn test_resolve_rejects_bad_color() {
        let err = resolve(&["--background", "blurple"]).unwrap_err();
        assert!(err.to_string().contains("blurple"));
    }

    #[test]
    fn test_resolve_rejects_unwritable_output_format() {
        let err = resolve(&["--output", "collage.xyz"]).unwrap_err();
        assert!(
            matches!(
                err.downcast_ref::<CollageError>(),
                Some(CollageError::UnsupportedFormat(_))
            ),
            "{err:?}"
        );
        assert!(resolve(&["--output", "out/collage.png"]).is_ok());
    }

    #[test]
    fn test_dotenv_loads_first_existing_candidate() {
        let dir = std::env::temp_dir()
            .join(format!("collage-dotenv-test-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        let env_file = dir.join(".env");
        std::fs::write(&env_file, "COLLAGE_DOTENV_TEST_LEVEL=debug\n").unwrap();

        let missing = dir.join("missing.env");
        let loaded = load_dotenv_from(&[missing.as_path(), env_file.as_path()]);
        assert_eq!(loaded, Some(env_file.clone()));
        assert_eq!(
            std::env::var("COLLAGE_DOTENV_TEST_LEVEL").as_deref(),
            Ok("debug")
        );

        assert_eq!(load_dotenv_from(&[missing.as_path()]), None);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_manifest_order_requires_file() {
        assert!(resolve(&["--order", "manifest"]).is_err());
        let config = resolve(&["--order", "manifest", "--manifest", "order.txt"]).unwrap();
        assert_eq!(
            config.order,
            OrderStrategy::Manifest(PathBuf::from("order.txt"))
        );
    }
}
