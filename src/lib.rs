//! Fetch a BibTeX bibliography, normalize its entries and render them as a
//! year-grouped HTML publication list.

pub mod cli;
pub mod commands;
pub mod common;
pub mod document;
pub mod download;
pub mod error;
pub mod fetch;
pub mod group;
pub mod normalize;
pub mod orchestrator;
pub mod parse;
pub mod render;
pub mod text;

pub use common::{DisplayGroup, PublicationRecord, RawEntry};
pub use error::LoadError;
pub use orchestrator::{LoadOutcome, LoadedPublications, Orchestrator};
