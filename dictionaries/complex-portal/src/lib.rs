pub mod dictionary;
pub mod mapping;
pub mod query;
pub mod response;

pub use dictionary::DictionaryComplexPortal;
pub use mapping::{map_complex_portal_res_to_entry_obj, map_complex_portal_res_to_match_obj};
pub use query::Pagination;
pub use response::SearchResponse;

/// URI of the Complex Portal dictionary
pub const DICT_ID: &str = "https://www.ebi.ac.uk/complexportal";

/// Entry URIs are this prefix followed by the complex accession
pub const ENTRY_URI_PREFIX: &str = "https://www.ebi.ac.uk/complexportal/complex/";

pub const DICT_ABBREV: &str = "Complex Portal";
pub const DICT_NAME: &str = "Complex Portal";

#[cfg(test)]
mod tests;
