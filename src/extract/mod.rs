//! Utility-class extraction from scanned text

mod parser;
mod utility;

pub use parser::CandidateExtractor;
pub use utility::ColorUtility;
