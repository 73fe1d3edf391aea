use std::cmp::Ordering;

use vsm_types::Entry;

use crate::options::QueryOptions;

/// Sort keys accepted for entry lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntrySort {
    #[default]
    Id,
    DictId,
    Str,
}

impl EntrySort {
    /// Exact, case-sensitive match against `id`, `dictID` and `str`
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "id" => Some(EntrySort::Id),
            "dictID" => Some(EntrySort::DictId),
            "str" => Some(EntrySort::Str),
            _ => None,
        }
    }

    /// Sort key of `options`, `Id` when missing or unrecognized
    pub fn from_options(options: &QueryOptions) -> Self {
        options
            .sort
            .as_deref()
            .and_then(Self::parse)
            .unwrap_or_default()
    }

    fn compare(&self, a: &Entry, b: &Entry) -> Ordering {
        match self {
            EntrySort::Id => a.id.cmp(&b.id),
            EntrySort::DictId => a.dict_id.cmp(&b.dict_id),
            EntrySort::Str => a
                .preferred_term()
                .cmp(b.preferred_term())
                .then_with(|| a.id.cmp(&b.id)),
        }
    }
}

pub fn has_proper_entry_sort_property(options: &QueryOptions) -> bool {
    options.sort.as_deref().and_then(EntrySort::parse).is_some()
}

/// New, stably sorted ordering of `entries`.
///
/// `str` ties fall back to `id`; `dictID` ties keep their input order.
pub fn sort_entries(entries: &[Entry], options: &QueryOptions) -> Vec<Entry> {
    let key = EntrySort::from_options(options);
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| key.compare(a, b));
    sorted
}

/// The `page`-th slice of `perPage` entries.
///
/// Unless both `page` and `perPage` are integers >= 1 the input is
/// returned unchanged. Pages past the end are empty.
pub fn trim_entry_obj_array<T: Clone>(entries: &[T], options: &QueryOptions) -> Vec<T> {
    let (Some(page), Some(per_page)) = (options.page, options.per_page) else {
        return entries.to_vec();
    };
    if page < 1 || per_page < 1 {
        return entries.to_vec();
    }

    let per_page = usize::try_from(per_page).unwrap_or(usize::MAX);
    let start = usize::try_from(page - 1)
        .unwrap_or(usize::MAX)
        .saturating_mul(per_page);
    let end = start.saturating_add(per_page).min(entries.len());

    if start >= entries.len() {
        return Vec::new();
    }
    entries[start..end].to_vec()
}
