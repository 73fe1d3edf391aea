use vsm_types::{Entry, EntryExtra, Match, MatchType, Term};

use crate::response::{SearchEntry, SearchFields, SearchResponse};
use crate::{DICT_ID, ENTRY_URI_PREFIX};

/// Map an EBI Search response to VSM entries, in response order.
///
/// Records without an accession or without any name are skipped.
pub fn map_complex_portal_res_to_entry_obj(res: &SearchResponse) -> Vec<Entry> {
    res.entries.iter().filter_map(map_entry).collect()
}

/// Map an EBI Search response to VSM matches for `search`, one per record.
///
/// `str` is the first term equal to `search` ignoring case, or the
/// preferred term when none is.
pub fn map_complex_portal_res_to_match_obj(res: &SearchResponse, search: &str) -> Vec<Match> {
    res.entries
        .iter()
        .filter_map(map_entry)
        .map(|entry| {
            let str = matched_term(&entry.terms, search).to_string();
            Match::from_entry(entry, str, MatchType::T)
        })
        .collect()
}

fn map_entry(record: &SearchEntry) -> Option<Entry> {
    let Some(local_id) = record.local_id() else {
        tracing::debug!("Skipping search record without id");
        return None;
    };

    let terms = terms(&record.fields);
    if terms.is_empty() {
        tracing::debug!("Skipping {local_id}: no names");
        return None;
    }

    Some(Entry {
        id: format!("{ENTRY_URI_PREFIX}{local_id}"),
        dict_id: DICT_ID.to_string(),
        descr: first_value(&record.fields.description).map(str::to_string),
        terms,
        z: species(&record.fields.organism).map(|species| EntryExtra {
            species: Some(species),
        }),
    })
}

/// Name, systematic names, then synonyms; trimmed, non-empty, unique
fn terms(fields: &SearchFields) -> Vec<Term> {
    let mut terms: Vec<Term> = Vec::new();

    let candidates = fields
        .name
        .iter()
        .chain(&fields.complex_systematic_name)
        .chain(&fields.complex_synonym)
        .map(|s| s.trim())
        .filter(|s| !s.is_empty());

    for s in candidates {
        if !terms.iter().any(|t| t.str == s) {
            terms.push(Term::new(s));
        }
    }

    terms
}

fn first_value(values: &[String]) -> Option<&str> {
    values.iter().map(|v| v.trim()).find(|v| !v.is_empty())
}

/// `"<name>; <taxon id>"` from values like `["human; 9606"]` or
/// `["human", "9606"]`
fn species(values: &[String]) -> Option<String> {
    let mut name = None;
    let mut taxon = None;

    let parts = values
        .iter()
        .flat_map(|v| v.split(';'))
        .map(str::trim)
        .filter(|p| !p.is_empty());

    for part in parts {
        if part.chars().all(|c| c.is_ascii_digit()) {
            taxon = taxon.or(Some(part));
        } else {
            name = name.or(Some(part));
        }
    }

    Some(format!("{}; {}", name?, taxon?))
}

fn matched_term<'a>(terms: &'a [Term], search: &str) -> &'a str {
    let search = search.trim().to_lowercase();

    terms
        .iter()
        .find(|t| t.str.trim().to_lowercase() == search)
        .or_else(|| terms.first())
        .map(|t| t.str.as_str())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn species_accepts_joined_and_split_values() {
        assert_eq!(species(&fields(&["human; 9606"])).as_deref(), Some("human; 9606"));
        assert_eq!(species(&fields(&["yeast", "559292"])).as_deref(), Some("yeast; 559292"));
        assert_eq!(species(&fields(&["9606;human"])).as_deref(), Some("human; 9606"));
    }

    #[test]
    fn species_needs_both_parts() {
        assert_eq!(species(&fields(&["human"])), None);
        assert_eq!(species(&fields(&["9606"])), None);
        assert_eq!(species(&fields(&[" ; "])), None);
        assert_eq!(species(&[]), None);
    }

    #[test]
    fn terms_keep_field_order_and_drop_duplicates() {
        let f = SearchFields {
            name: fields(&["Alpha complex"]),
            complex_systematic_name: fields(&[" A:B ", ""]),
            complex_synonym: fields(&["Alpha complex", "alpha", "  "]),
            ..Default::default()
        };

        let strs: Vec<String> = terms(&f).into_iter().map(|t| t.str).collect();
        assert_eq!(strs, ["Alpha complex", "A:B", "alpha"]);
    }

    #[test]
    fn matched_term_prefers_earliest_case_insensitive_equal() {
        let terms = vec![Term::new("Alpha complex"), Term::new("ALPHA"), Term::new("alpha")];

        assert_eq!(matched_term(&terms, "alpha"), "ALPHA");
        assert_eq!(matched_term(&terms, " Alpha Complex "), "Alpha complex");
        assert_eq!(matched_term(&terms, "beta"), "Alpha complex");
        assert_eq!(matched_term(&[], "beta"), "");
    }
}
