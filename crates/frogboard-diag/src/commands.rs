//! Command implementations. Each returns the text to print.

use anyhow::{bail, Context};
use frogboard_bitboard::{render, Bitboard, RenderOptions};
use frogboard_core::{Move, MoveType, Square};

/// How `encode-move` should classify a move that UCI text cannot mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum MoveKind {
    /// Normal move, or a promotion when a fifth character is given.
    Normal,
    EnPassant,
    Castling,
}

/// Parses a plane given as `0x`-prefixed hex, `0b`-prefixed binary or decimal.
pub fn parse_bits(s: &str) -> Result<u64, String> {
    let s = s.replace('_', "");
    let parsed = if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u64::from_str_radix(hex, 16)
    } else if let Some(bin) = s.strip_prefix("0b") {
        u64::from_str_radix(bin, 2)
    } else {
        s.parse::<u64>()
    };
    parsed.map_err(|e| format!("invalid plane '{}': {}", s, e))
}

/// Parses a raw packed move (hex or decimal).
pub fn parse_raw_move(s: &str) -> Result<u16, String> {
    let bits = parse_bits(s)?;
    u16::try_from(bits).map_err(|_| format!("packed moves fit in 16 bits, got {:#x}", bits))
}

/// Parses a square given by name (`e4`) or index (`28`).
pub fn parse_square(s: &str) -> Result<Square, String> {
    if let Ok(index) = s.parse::<u8>() {
        return Square::from_index(index).ok_or_else(|| format!("square index {} out of range", index));
    }
    s.parse::<Square>().map_err(|e| e.to_string())
}

/// Builds a plane from raw bits plus extra squares and renders it.
pub fn render_plane(bits: Option<u64>, squares: &[Square], options: &RenderOptions) -> String {
    let plane = squares
        .iter()
        .fold(Bitboard::new(bits.unwrap_or(0)), |plane, &sq| plane.set(sq));
    tracing::debug!("Rendering plane {:#018x}", plane.bits());
    let mut out = format!("plane: {:#018x} ({} set)\n", plane.bits(), plane.count());
    out.push_str(&render(plane, options));
    out
}

/// Describes a square's coordinates and its single-bit plane.
pub fn describe_square(sq: Square, options: &RenderOptions) -> String {
    let mut out = String::new();
    out.push_str(&format!("square: {}\n", sq));
    out.push_str(&format!("index:  {}\n", sq.index()));
    out.push_str(&format!("file:   {} ({})\n", sq.file(), sq.file().index()));
    out.push_str(&format!("rank:   {} ({})\n", sq.rank(), sq.rank().index()));
    out.push_str(&render(Bitboard::from_square(sq), options));
    out
}

/// Unpacks every field of a raw move.
pub fn decode_move(raw: u16) -> String {
    let m = Move::from_raw(raw);
    let mut out = String::new();
    out.push_str(&format!("raw:       {:#06x} ({})\n", raw, raw));
    out.push_str(&format!("from:      {}\n", m.from()));
    out.push_str(&format!("to:        {}\n", m.to()));
    out.push_str(&format!("from_to:   {:#05x}\n", m.from_to()));
    out.push_str(&format!("type:      {:?}\n", m.move_type()));
    if m.move_type() == MoveType::Promotion {
        out.push_str(&format!("promotion: {}\n", m.promotion_type()));
    }
    out.push_str(&format!("valid:     {}\n", m.is_valid()));
    match m {
        Move::NONE => out.push_str("sentinel:  none\n"),
        Move::NULL => out.push_str("sentinel:  null\n"),
        _ if !m.is_valid() => {
            tracing::warn!("{:#06x} has equal endpoints but is not a sentinel", raw);
        }
        _ => {}
    }
    out
}

/// Packs a UCI move, applying `kind` for classes UCI text does not carry.
pub fn encode_move(uci: &str, kind: MoveKind) -> anyhow::Result<String> {
    let parsed: Move = uci
        .parse()
        .with_context(|| format!("cannot encode '{}'", uci))?;
    let m = match kind {
        MoveKind::Normal => parsed,
        _ if parsed.move_type() == MoveType::Promotion => {
            bail!("'{}' carries a promotion piece and cannot be {:?}", uci, kind)
        }
        MoveKind::EnPassant => Move::en_passant(parsed.from(), parsed.to()),
        MoveKind::Castling => Move::castling(parsed.from(), parsed.to()),
    };
    Ok(format!("{} {:?} = {:#06x} ({})\n", m, m.move_type(), m.raw(), m.raw()))
}
