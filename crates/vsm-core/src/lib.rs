pub mod dictionary;
pub mod error;
pub mod options;
pub mod sort;

pub use dictionary::Dictionary;
pub use error::DictionaryError;
pub use options::{Filter, QueryOptions};
pub use sort::{EntrySort, has_proper_entry_sort_property, sort_entries, trim_entry_obj_array};

#[cfg(test)]
mod tests;
