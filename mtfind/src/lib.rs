pub mod config;
pub mod errors;
pub mod input;
pub mod metrics;
pub mod pattern;
pub mod results;
pub mod search;

pub use config::SearchConfig;
pub use errors::{MtfindResult, SearchError};
pub use input::{read_input, Buffer};
pub use pattern::Pattern;
pub use results::{Match, PartialResult, SearchResult};
pub use search::{search, Matcher, MatcherKind};
