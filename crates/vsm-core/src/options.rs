use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Options shared by all dictionary queries.
///
/// Deserializing from loosely typed JSON never fails on a bad value: a
/// non-string `sort`, a non-integer `page`/`perPage` or a non-array filter
/// list is read as absent. Integral floats such as `2.0` count as integers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryOptions {
    #[serde(deserialize_with = "lenient_filter")]
    pub filter: Option<Filter>,
    #[serde(deserialize_with = "lenient_string")]
    pub sort: Option<String>,
    #[serde(deserialize_with = "lenient_int")]
    pub page: Option<i64>,
    #[serde(rename = "perPage", deserialize_with = "lenient_int")]
    pub per_page: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Filter {
    #[serde(deserialize_with = "lenient_strings")]
    pub id: Option<Vec<String>>,
    #[serde(rename = "dictID", deserialize_with = "lenient_strings")]
    pub dict_id: Option<Vec<String>>,
}

impl QueryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filter.get_or_insert_with(Filter::default).id =
            Some(ids.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_dict_ids<I, S>(mut self, dict_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filter.get_or_insert_with(Filter::default).dict_id =
            Some(dict_ids.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    pub fn with_page(mut self, page: i64) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_per_page(mut self, per_page: i64) -> Self {
        self.per_page = Some(per_page);
        self
    }

    pub fn filter_ids(&self) -> Option<&[String]> {
        self.filter.as_ref()?.id.as_deref()
    }

    pub fn filter_dict_ids(&self) -> Option<&[String]> {
        self.filter.as_ref()?.dict_id.as_deref()
    }

    /// Whether `filter.id` rules out the dictionary `dict_id`
    pub fn ids_exclude(&self, dict_id: &str) -> bool {
        list_excludes(self.filter_ids(), dict_id)
    }

    /// Whether `filter.dictID` rules out the dictionary `dict_id`
    pub fn dict_ids_exclude(&self, dict_id: &str) -> bool {
        list_excludes(self.filter_dict_ids(), dict_id)
    }

    /// `filter.id` values trimmed, blanks removed, input order kept
    pub fn clean_ids(&self) -> Vec<&str> {
        self.filter_ids()
            .unwrap_or_default()
            .iter()
            .map(|id| id.trim())
            .filter(|id| !id.is_empty())
            .collect()
    }
}

/// A present, non-empty list without `dict_id` among its trimmed values
fn list_excludes(list: Option<&[String]>, dict_id: &str) -> bool {
    match list {
        Some(list) if !list.is_empty() => !list.iter().any(|v| v.trim() == dict_id),
        _ => false,
    }
}

fn lenient_int<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
            .map(|f| f as i64)
    }))
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_str().map(str::to_string))
}

fn lenient_strings<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Vec<String>>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_array().map(|values| {
        values
            .iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect()
    }))
}

fn lenient_filter<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Filter>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    if !value.is_object() {
        return Ok(None);
    }
    Ok(serde_json::from_value(value).ok())
}
