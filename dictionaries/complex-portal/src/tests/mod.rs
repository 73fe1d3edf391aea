
use vsm_config::complex_portal::ComplexPortalConfig;
use vsm_http::MockHttp;

use crate::DictionaryComplexPortal;

pub(crate) const TEST_URL_BASE: &str = "http://test";

pub(crate) const ID_JSON: &str = include_str!("../../resources/id.json");
pub(crate) const MELANOMA_JSON: &str = include_str!("../../resources/melanoma.json");

pub(crate) const FIELDS: &str =
    "fields=id%2Cname%2Cdescription%2Ccomplex_systematic_name%2Ccomplex_synonym%2Corganism";

pub(crate) fn dict(http: MockHttp) -> DictionaryComplexPortal<MockHttp> {
    let config = ComplexPortalConfig {
        base_url: TEST_URL_BASE.to_string(),
        log: true,
        ..Default::default()
    };
    DictionaryComplexPortal::with_http(&config, http)
}
