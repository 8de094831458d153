//! Player profile types.
//!
//! This module contains:
//! - `Possession`, `SkillClass`, `NameplateRarity` - profile classification types
//! - `PlayerProfile`, `PlayerData` - the player card and the extended data page
//! - `Avatar` - the layered avatar image

mod possession;
mod profile;

pub use possession::*;
pub use profile::*;
