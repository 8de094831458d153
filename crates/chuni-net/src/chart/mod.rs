//! Chart classification types.
//!
//! This module contains:
//! - `Difficulty` - chart difficulties (BASIC through ULTIMA, WORLD'S END)
//! - `Genre` - record folder genres with their upstream ids
//! - `Level` - chart levels such as `13` or `13+`

mod difficulty;
mod genre;
mod level;

pub use difficulty::*;
pub use genre::*;
pub use level::*;
