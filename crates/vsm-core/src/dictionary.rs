use vsm_types::{DictInfo, Entry, Items, Match};

use crate::error::DictionaryError;
use crate::options::QueryOptions;

/// Uniform query interface of a VSM dictionary.
///
/// Every call is independent and resolves exactly once, with either the
/// `{items}` payload or an error.
#[async_trait::async_trait]
pub trait Dictionary: Send + Sync {
    /// Metadata of the dictionaries this adapter serves
    async fn get_dict_infos(&self, options: &QueryOptions) -> Result<Items<DictInfo>, DictionaryError>;

    /// Entries by identifier, or a page of all entries
    async fn get_entries(&self, options: &QueryOptions) -> Result<Items<Entry>, DictionaryError>;

    /// Entries with a term matching `search`
    async fn get_entry_matches_for_string(
        &self,
        search: &str,
        options: &QueryOptions,
    ) -> Result<Items<Match>, DictionaryError>;
}
