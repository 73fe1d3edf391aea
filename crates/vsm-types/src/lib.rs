mod types;

pub use types::{DictInfo, Entry, EntryExtra, Items, Match, MatchType, Term};
