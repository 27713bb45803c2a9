pub mod engine;
pub mod heuristics;
pub mod normalizer;
pub mod ranker;
pub mod resolver;
pub mod suggestions;

pub use engine::{analyze, Analysis};
pub use resolver::{apply_recommendation, apply_suggestion, ApplyError};
