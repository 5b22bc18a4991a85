//! Core library for `acronym` — find names hidden in a project title.
//!
//! Analyzes a title into an index-mapped letter sequence, then ranks
//! dictionary words that can be spelled from it (exact matches), words
//! glued together from those matches (compounds), and words a few edits
//! away from the title's initials (near matches). Every search is a pure,
//! synchronous function of the title, the dictionary, and the options.

pub mod compound;
pub mod config;
pub mod dictionary;
pub mod distance;
pub mod error;
pub mod matcher;
pub mod near;
pub mod niceness;
pub mod search;
pub mod title;

pub use dictionary::Dictionary;
pub use error::{AcronymError, Result};
pub use search::{MatchType, SearchOptions, SearchResults, WordMatch, search};
pub use title::{TitleInfo, TitleWord};
