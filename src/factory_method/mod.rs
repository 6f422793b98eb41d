//! Factory Method
//!
//! A creator trait declares one factory method; every concrete creator is
//! a fixed mapping to one concrete product. Which creator to use is decided
//! outside the creator, usually from configuration.
//!
//! - [`template`]: `Creator::factory_method` with two concrete creators
//! - [`logger`]: logger factories for file and database backends
//! - [`board`]: chess and checkers boards populated through `create_piece`

pub mod board;
pub mod logger;
pub mod template;

pub use board::{create_piece, Board, BoardKind, CheckersBoard, ChessBoard, Color, Piece, PieceKind};
pub use logger::{
    factory_for, DatabaseLogger, DatabaseLoggerFactory, FileLogger, FileLoggerFactory, Logger,
    LoggerFactory, LoggerKind,
};
pub use template::{ConcreteCreatorA, ConcreteCreatorB, Creator};
