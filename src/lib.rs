//! beepc — a speaker music compiler.
//!
//! Compiles a line-oriented melody notation into square-wave "beep" audio:
//! [`dsl::Compiler::compile`] turns source text into a tone list and
//! [`render::render`] turns the tone list into 8-bit PCM.

pub mod config;
pub mod dsl;
pub mod render;
