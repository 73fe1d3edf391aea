use serde_json::json;

use crate::options::QueryOptions;

const OWN: &str = "https://www.ebi.ac.uk/complexportal";

fn parse(value: serde_json::Value) -> QueryOptions {
    serde_json::from_value(value).unwrap()
}

#[test]
fn empty_object_gives_defaults() {
    assert_eq!(parse(json!({})), QueryOptions::default());
}

#[test]
fn badly_typed_values_are_read_as_absent() {
    let options = parse(json!({
        "sort": 45,
        "page": "String",
        "perPage": ["Str"],
        "filter": { "id": "not-a-list", "dictID": 3 }
    }));

    assert_eq!(options.sort, None);
    assert_eq!(options.page, None);
    assert_eq!(options.per_page, None);
    assert_eq!(options.filter_ids(), None);
    assert_eq!(options.filter_dict_ids(), None);
}

#[test]
fn integral_floats_are_integers() {
    let options = parse(json!({ "page": 2.0, "perPage": 2 }));

    assert_eq!(options.page, Some(2));
    assert_eq!(options.per_page, Some(2));
}

#[test]
fn fractional_or_huge_numbers_are_read_as_absent() {
    let options = parse(json!({ "page": 2.5, "perPage": 1e300 }));

    assert_eq!(options.page, None);
    assert_eq!(options.per_page, None);
}

#[test]
fn non_object_filter_is_ignored() {
    let options = parse(json!({ "filter": [1, 2], "page": 3 }));

    assert!(options.filter.is_none());
    assert_eq!(options.page, Some(3));
}

#[test]
fn well_typed_values_are_kept() {
    let options = parse(json!({
        "filter": { "id": ["a", "b"], "dictID": [OWN] },
        "sort": "str",
        "page": 2,
        "perPage": 20
    }));

    assert_eq!(options.filter_ids().unwrap(), ["a", "b"]);
    assert_eq!(options.filter_dict_ids().unwrap(), [OWN]);
    assert_eq!(options.sort.as_deref(), Some("str"));
    assert_eq!(options.page, Some(2));
    assert_eq!(options.per_page, Some(20));
}

#[test]
fn dict_id_filter_excludes_only_when_own_id_is_missing() {
    assert!(!QueryOptions::new().dict_ids_exclude(OWN));
    assert!(!QueryOptions::new().with_dict_ids(Vec::<String>::new()).dict_ids_exclude(OWN));
    assert!(QueryOptions::new().with_dict_ids([""]).dict_ids_exclude(OWN));
    assert!(
        QueryOptions::new()
            .with_dict_ids([" ", "https://www.uniprot.org", "https://www.ensembl.org"])
            .dict_ids_exclude(OWN)
    );
    let padded = format!("  {OWN} ");
    assert!(
        !QueryOptions::new()
            .with_dict_ids([" ", padded.as_str(), "https://www.ensembl.org"])
            .dict_ids_exclude(OWN)
    );
}

#[test]
fn id_filter_exclusion_uses_the_id_list() {
    let options = QueryOptions::new().with_ids(["https://www.uniprot.org"]);

    assert!(options.ids_exclude(OWN));
    assert!(!options.dict_ids_exclude(OWN));
}

#[test]
fn clean_ids_trims_and_drops_blanks() {
    let options = QueryOptions::new().with_ids(["", " CPX-200 ", "  ", "CPX-22"]);

    assert_eq!(options.clean_ids(), vec!["CPX-200", "CPX-22"]);
    assert!(QueryOptions::new().clean_ids().is_empty());
}
