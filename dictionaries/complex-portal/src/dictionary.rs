use std::time::Duration;

use async_trait::async_trait;
use vsm_config::complex_portal::ComplexPortalConfig;
use vsm_core::{
    Dictionary, DictionaryError, QueryOptions, has_proper_entry_sort_property, sort_entries,
    trim_entry_obj_array,
};
use vsm_http::{HttpError, HttpGet, ReqwestClient};
use vsm_types::{DictInfo, Entry, Items, Match};

use crate::mapping::{map_complex_portal_res_to_entry_obj, map_complex_portal_res_to_match_obj};
use crate::query;
use crate::response::SearchResponse;
use crate::{DICT_ABBREV, DICT_ID, DICT_NAME};

/// VSM dictionary backed by the EBI Search complex-portal domain
pub struct DictionaryComplexPortal<H = ReqwestClient> {
    http: H,
    base_url: String,
    log: bool,
}

impl DictionaryComplexPortal<ReqwestClient> {
    pub fn new(config: &ComplexPortalConfig) -> Result<Self, HttpError> {
        let http = ReqwestClient::new(
            Duration::from_secs(config.timeout_seconds),
            &config.user_agent,
        )?;
        Ok(Self::with_http(config, http))
    }
}

impl<H: HttpGet> DictionaryComplexPortal<H> {
    pub fn with_http(config: &ComplexPortalConfig, http: H) -> Self {
        Self {
            http,
            base_url: config.normalized_base_url().to_string(),
            log: config.log,
        }
    }

    pub fn http(&self) -> &H {
        &self.http
    }

    pub fn dict_info() -> DictInfo {
        DictInfo {
            id: DICT_ID.to_string(),
            abbrev: DICT_ABBREV.to_string(),
            name: DICT_NAME.to_string(),
        }
    }

    /// Identifier-list URL when `filter.id` names accessions, otherwise a
    /// page of all entries
    pub fn prepare_entry_search_url(&self, options: &QueryOptions) -> String {
        let local_ids = Self::local_ids(options);
        if local_ids.is_empty() {
            query::all_entries_url(&self.base_url, options)
        } else {
            query::entry_list_url(&self.base_url, &local_ids)
        }
    }

    pub fn prepare_match_string_search_url(&self, search: &str, options: &QueryOptions) -> String {
        query::match_string_url(&self.base_url, search, options)
    }

    fn local_ids(options: &QueryOptions) -> Vec<&str> {
        options
            .clean_ids()
            .into_iter()
            .filter_map(query::local_id)
            .collect()
    }

    async fn fetch(&self, url: &str) -> Result<SearchResponse, DictionaryError> {
        if self.log {
            tracing::info!("GET {url}");
        } else {
            tracing::debug!("GET {url}");
        }

        let body = self.http.get(url).await?;
        let response = SearchResponse::from_json(&body)?;
        Ok(response)
    }

    fn log_results(&self, what: &str, count: usize) {
        if self.log {
            tracing::info!("{what}: {count} results");
        } else {
            tracing::debug!("{what}: {count} results");
        }
    }
}

#[async_trait]
impl<H: HttpGet> Dictionary for DictionaryComplexPortal<H> {
    async fn get_dict_infos(&self, options: &QueryOptions) -> Result<Items<DictInfo>, DictionaryError> {
        if options.ids_exclude(DICT_ID) {
            return Ok(Items::empty());
        }
        Ok(Items::new(vec![Self::dict_info()]))
    }

    async fn get_entries(&self, options: &QueryOptions) -> Result<Items<Entry>, DictionaryError> {
        if options.dict_ids_exclude(DICT_ID) {
            return Ok(Items::empty());
        }

        let url = self.prepare_entry_search_url(options);
        let response = self.fetch(&url).await?;
        let entries = map_complex_portal_res_to_entry_obj(&response);

        let entries = if Self::local_ids(options).is_empty() {
            if has_proper_entry_sort_property(options) {
                sort_entries(&entries, options)
            } else {
                entries
            }
        } else {
            trim_entry_obj_array(&sort_entries(&entries, options), options)
        };

        self.log_results("getEntries", entries.len());
        Ok(Items::new(entries))
    }

    async fn get_entry_matches_for_string(
        &self,
        search: &str,
        options: &QueryOptions,
    ) -> Result<Items<Match>, DictionaryError> {
        if options.dict_ids_exclude(DICT_ID) {
            return Ok(Items::empty());
        }

        let url = self.prepare_match_string_search_url(search, options);
        let response = self.fetch(&url).await?;
        let matches = map_complex_portal_res_to_match_obj(&response, search);

        self.log_results("getEntryMatchesForString", matches.len());
        Ok(Items::new(matches))
    }
}
