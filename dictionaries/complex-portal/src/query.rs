use vsm_core::QueryOptions;

/// Query term selecting every record of the complex-portal domain
pub const ALL_ENTRIES_QUERY: &str = "domain_source:complex-portal";

/// Fields requested from EBI Search, in request order
pub const RETURN_FIELDS: [&str; 6] = [
    "id",
    "name",
    "description",
    "complex_systematic_name",
    "complex_synonym",
    "organism",
];

/// Remote `size`/`start` pair of a page request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub size: u64,
    pub start: u64,
}

impl Pagination {
    pub const DEFAULT_PER_PAGE: u64 = 50;
    pub const MAX_PER_PAGE: u64 = 100;
    /// Largest offset EBI Search serves
    pub const MAX_START: u64 = 999_999;

    /// `perPage` above 100 becomes 100, missing or below 1 becomes 50.
    /// `page` missing or below 1 becomes 1.
    pub fn from_options(options: &QueryOptions) -> Self {
        let size = match options.per_page {
            Some(n) if n > Self::MAX_PER_PAGE as i64 => Self::MAX_PER_PAGE,
            Some(n) if n >= 1 => n as u64,
            _ => Self::DEFAULT_PER_PAGE,
        };
        let page = match options.page {
            Some(p) if p >= 1 => p as u64,
            _ => 1,
        };
        let start = (page - 1).saturating_mul(size).min(Self::MAX_START);

        Self { size, start }
    }

    fn to_query(self) -> String {
        format!("size={}&start={}", self.size, self.start)
    }
}

/// URL-encoded `fields` parameter value
pub fn fields_param() -> String {
    urlencoding::encode(&RETURN_FIELDS.join(",")).into_owned()
}

/// Accession part of an entry URI (`.../complex/CPX-200` -> `CPX-200`)
pub fn local_id(id: &str) -> Option<&str> {
    id.trim()
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|s| !s.is_empty())
}

/// Page of all entries sorted by accession
pub fn all_entries_url(base_url: &str, options: &QueryOptions) -> String {
    format!(
        "{base_url}?query={ALL_ENTRIES_QUERY}&fields={}&sort=id&{}&format=json",
        fields_param(),
        Pagination::from_options(options).to_query(),
    )
}

/// Direct fetch of the given accessions; the list is the whole result set
pub fn entry_list_url(base_url: &str, local_ids: &[&str]) -> String {
    let ids = local_ids
        .iter()
        .map(|id| urlencoding::encode(id))
        .collect::<Vec<_>>()
        .join(",");

    format!("{base_url}/entry/{ids}?fields={}&format=json", fields_param())
}

/// Free-text search, relevance ordered
pub fn match_string_url(base_url: &str, search: &str, options: &QueryOptions) -> String {
    format!(
        "{base_url}?query={}&fields={}&{}&format=json",
        urlencoding::encode(search),
        fields_param(),
        Pagination::from_options(options).to_query(),
    )
}
