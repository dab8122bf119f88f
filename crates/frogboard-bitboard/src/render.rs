//! Text dump of a single plane for debugging.
//!
//! The output is a debugging aid, not a stable format: one line per rank,
//! one `1`/`0` cell per square, cells separated by a space.

use frogboard_core::{File, Rank, Square};
use serde::{Deserialize, Serialize};

use crate::Bitboard;

/// Which rank is printed on the first line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Orientation {
    /// Rank 8 on top, as in printed chess diagrams.
    #[default]
    RankEightFirst,
    /// Rank 1 on top, so square index 0 is the first cell.
    RankOneFirst,
}

impl Orientation {
    fn ranks(self) -> [Rank; 8] {
        let mut ranks = Rank::ALL;
        if self == Orientation::RankEightFirst {
            ranks.reverse();
        }
        ranks
    }
}

/// Options controlling [`render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct RenderOptions {
    /// Rank order of the output lines. Defaults to rank 8 first.
    #[serde(default)]
    pub orientation: Orientation,
    /// Prefix each line with its rank digit and append a file-letter footer.
    #[serde(default)]
    pub labels: bool,
}

impl RenderOptions {
    /// Default orientation with rank and file labels.
    pub const fn labelled() -> Self {
        RenderOptions {
            orientation: Orientation::RankEightFirst,
            labels: true,
        }
    }
}

/// Renders `plane` as an 8x8 grid of `1` (set) and `0` (clear) cells.
///
/// Without labels the result is exactly eight newline-terminated lines.
pub fn render(plane: Bitboard, options: &RenderOptions) -> String {
    let mut out = String::with_capacity(if options.labels { 200 } else { 128 });

    for rank in options.orientation.ranks() {
        if options.labels {
            out.push(rank.to_char());
            out.push(' ');
        }
        for (i, file) in File::ALL.into_iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push(if plane.contains(Square::new(file, rank)) {
                '1'
            } else {
                '0'
            });
        }
        out.push('\n');
    }

    if options.labels {
        out.push_str("  a b c d e f g h\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_plane() {
        let text = render(Bitboard::EMPTY, &RenderOptions::default());
        assert_eq!(text.lines().count(), 8);
        assert!(text.lines().all(|l| l == "0 0 0 0 0 0 0 0"));
    }

    #[test]
    fn single_square_rank_eight_first() {
        let plane = Bitboard::EMPTY.set(Square::D1);
        let text = render(plane, &RenderOptions::default());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[7], "0 0 0 1 0 0 0 0");
        assert!(lines[..7].iter().all(|l| !l.contains('1')));
        assert_eq!(text.matches('1').count(), 1);
    }

    #[test]
    fn single_square_rank_one_first() {
        let plane = Bitboard::EMPTY.set(Square::D1);
        let options = RenderOptions {
            orientation: Orientation::RankOneFirst,
            labels: false,
        };
        let text = render(plane, &options);
        assert_eq!(text.lines().next(), Some("0 0 0 1 0 0 0 0"));
    }

    #[test]
    fn labelled_grid() {
        let plane = Bitboard::from_square(Square::H8) | Bitboard::from_square(Square::A1);
        let text = render(plane, &RenderOptions::labelled());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "8 0 0 0 0 0 0 0 1");
        assert_eq!(lines[7], "1 1 0 0 0 0 0 0 0");
        assert_eq!(lines[8], "  a b c d e f g h");
    }

    #[test]
    fn display_uses_default_options() {
        let plane = Bitboard::rank(Rank::R8);
        assert_eq!(
            plane.to_string(),
            render(plane, &RenderOptions::default())
        );
        assert!(plane.to_string().starts_with("1 1 1 1 1 1 1 1\n"));
    }

    #[test]
    fn options_from_toml() {
        let options: RenderOptions =
            toml::from_str("orientation = \"rank-one-first\"\nlabels = true\n").unwrap();
        assert_eq!(options.orientation, Orientation::RankOneFirst);
        assert!(options.labels);

        let defaults: RenderOptions = toml::from_str("").unwrap();
        assert_eq!(defaults, RenderOptions::default());
    }
}
