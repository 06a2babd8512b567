//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the pure [`GameView`] paints a
//! [`core::GameSnapshot`] into a [`FrameBuffer`], and the
//! [`TerminalRenderer`] rewrites only the rows that changed since the last
//! frame.
//!
//! Each board cell is drawn 2 terminal columns wide to compensate for the
//! usual glyph aspect ratio.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_frame_into, TerminalRenderer};
