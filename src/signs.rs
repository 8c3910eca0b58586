//! Sign resolution
//!
//! Transliterated spellings are parsed into [`Value`]s and resolved to canonical sign
//! names through a [`SignRepository`]. Resolution never fails: a spelling the repository
//! does not know falls back to a placeholder or to its own name.
//!
//! ```text
//! 1. šu gid₂   --clean-->   ["šu", "gid₂"]   --parse_reading-->   [Reading, Reading]
//!                                                  --convert_values_to_signs-->   ["ŠU", "BU"]
//! ```

pub mod clean;
pub mod converter;
pub mod repository;
pub mod sign;
pub mod value;
pub mod value_mapper;

pub use clean::{clean_line, clean_values};
pub use converter::AtfConverter;
pub use repository::{MemorySignRepository, SignRepository};
pub use sign::{Sign, SignKey, SignListRecord, SignValue, Standardization};
pub use value::{SignMap, Value};
pub use value_mapper::parse_reading;
