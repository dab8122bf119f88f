//! Errors produced when parsing board vocabulary from text.

use thiserror::Error;

/// Errors that can occur when parsing squares, moves or castling rights.
///
/// The packed algebra itself never fails; only the text entry points
/// return this type.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid square: {0}")]
    InvalidSquare(String),

    #[error("invalid move: {0}")]
    InvalidMove(String),

    #[error("invalid promotion piece '{0}'")]
    InvalidPromotion(char),

    #[error("invalid castling rights: {0}")]
    InvalidCastlingRights(String),
}
