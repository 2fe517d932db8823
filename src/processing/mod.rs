//! Text analysis: contacts, keywords, location rules, and scoring

pub mod contact;
pub mod keywords;
pub mod location;
pub mod scoring;

pub use contact::ContactExtractor;
pub use keywords::{parse_keyword_response, KeywordSet, ParsedKeywords};
pub use location::LocationRules;
pub use scoring::{weighted_score, HighSelection, MediumSelection, PriorityTiers};
