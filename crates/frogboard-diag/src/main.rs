//! Frogboard diagnostics - inspect planes, squares and packed moves.

mod commands;
mod config;

use clap::{Parser, Subcommand, ValueEnum};
use commands::MoveKind;
use config::DiagConfig;
use frogboard_bitboard::{Orientation, RenderOptions};
use frogboard_core::Square;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "frogboard-diag")]
#[command(about = "Inspect Frogboard planes, squares and packed moves")]
struct Cli {
    /// Path to a TOML config file (defaults to ./frogboard.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a plane as a 1/0 grid
    Render {
        /// Plane bits as hex (0x...), binary (0b...) or decimal
        #[arg(long, value_parser = commands::parse_bits)]
        bits: Option<u64>,
        /// Extra squares to set, comma separated (e4,d5 or 28,35)
        #[arg(long, value_delimiter = ',', value_parser = commands::parse_square)]
        squares: Vec<Square>,
        #[command(flatten)]
        layout: LayoutArgs,
    },
    /// Show the index, file, rank and plane of a square
    Square {
        /// Square name or index
        #[arg(value_parser = commands::parse_square)]
        square: Square,
        #[command(flatten)]
        layout: LayoutArgs,
    },
    /// Unpack a raw 16-bit move
    DecodeMove {
        /// Packed move as hex or decimal
        #[arg(value_parser = commands::parse_raw_move)]
        raw: u16,
    },
    /// Pack a move given in UCI notation
    EncodeMove {
        /// Move such as e2e4 or e7e8q
        uci: String,
        /// Move class for moves UCI cannot mark
        #[arg(long, value_enum, default_value = "normal")]
        kind: MoveKind,
    },
}

/// Render overrides shared by the plane-printing commands.
#[derive(clap::Args, Debug, Default)]
struct LayoutArgs {
    /// Which rank goes on the first line
    #[arg(long, value_enum)]
    orientation: Option<OrientationArg>,
    /// Add rank and file labels
    #[arg(long)]
    labels: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OrientationArg {
    RankEightFirst,
    RankOneFirst,
}

impl From<OrientationArg> for Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::RankEightFirst => Orientation::RankEightFirst,
            OrientationArg::RankOneFirst => Orientation::RankOneFirst,
        }
    }
}

impl LayoutArgs {
    /// Applies command-line overrides on top of the configured defaults.
    fn resolve(&self, defaults: RenderOptions) -> RenderOptions {
        RenderOptions {
            orientation: self
                .orientation
                .map(Orientation::from)
                .unwrap_or(defaults.orientation),
            labels: self.labels || defaults.labels,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .init();

    let config = DiagConfig::load(cli.config.as_deref())?;
    tracing::debug!("Render defaults: {:?}", config.render);

    let output = match cli.command {
        Commands::Render {
            bits,
            squares,
            layout,
        } => commands::render_plane(bits, &squares, &layout.resolve(config.render)),
        Commands::Square { square, layout } => {
            commands::describe_square(square, &layout.resolve(config.render))
        }
        Commands::DecodeMove { raw } => commands::decode_move(raw),
        Commands::EncodeMove { uci, kind } => commands::encode_move(&uci, kind)?,
    };

    print!("{}", output);
    Ok(())
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
    fn test_parse_render_args() {
        let cli = Cli::try_parse_from([
            "frogboard-diag",
            "render",
            "--bits",
            "0x8",
            "--squares",
            "e4,63",
            "--orientation",
            "rank-one-first",
        ])
        .unwrap();
        match cli.command {
            Commands::Render {
                bits,
                squares,
                layout,
            } => {
                assert_eq!(bits, Some(8));
                assert_eq!(squares, vec![Square::E4, Square::H8]);
                assert_eq!(layout.orientation, Some(OrientationArg::RankOneFirst));
                assert!(!layout.labels);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "frogboard-diag",
            "decode-move",
            "0x41",
            "--config",
            "custom.toml",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::DecodeMove { raw: 65 }));
    }

    #[test]
    fn test_parse_encode_move_kind() {
        let cli =
            Cli::try_parse_from(["frogboard-diag", "encode-move", "e1g1", "--kind", "castling"])
                .unwrap();
        assert!(matches!(
            cli.command,
            Commands::EncodeMove {
                kind: MoveKind::Castling,
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_bad_square() {
        assert!(Cli::try_parse_from(["frogboard-diag", "square", "k9"]).is_err());
    }

    #[test]
    fn test_layout_overrides_config() {
        let defaults = RenderOptions {
            orientation: Orientation::RankOneFirst,
            labels: true,
        };
        assert_eq!(LayoutArgs::default().resolve(defaults), defaults);

        let layout = LayoutArgs {
            orientation: Some(OrientationArg::RankEightFirst),
            labels: false,
        };
        let resolved = layout.resolve(defaults);
        assert_eq!(resolved.orientation, Orientation::RankEightFirst);
        assert!(resolved.labels);
    }
}
