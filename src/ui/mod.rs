//! Terminal presentation for the `kidari` binary.
//!
//! Layering, bottom-up: `theme` tokens, `primitives` (icons, colored text,
//! border glyphs), `widgets` (boxes), `blocks` (header, summary, error),
//! `views` (whole-command renderers). Everything above `primitives` returns
//! a `String`; only `commands` writes to stdout.

pub mod blocks;
pub mod ci;
pub mod context;
pub mod error;
pub mod json;
pub mod output;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;
