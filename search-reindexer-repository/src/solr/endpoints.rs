//! Solr request URL builders.
//!
//! Every request carries `wt` so the engine answers in the configured
//! wire format, including the update handlers whose status envelope the
//! client decodes.

use url::Url;

use crate::errors::SearchError;
use crate::solr::config::WireFormat;
use search_reindexer_shared::QueryState;

/// `GET {base}select?q=..&start=..&rows=..&wt=..`
pub fn select_url(base: &Url, query: &QueryState, format: WireFormat) -> Result<Url, SearchError> {
    let mut url = base.join("select")?;
    {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in query.to_params() {
            pairs.append_pair(key, &value);
        }
        pairs.append_pair("wt", format.as_str());
    }
    Ok(url)
}

/// `POST {base}update/json?wt=..`
pub fn update_url(base: &Url, format: WireFormat) -> Result<Url, SearchError> {
    let mut url = base.join("update/json")?;
    url.query_pairs_mut().append_pair("wt", format.as_str());
    Ok(url)
}

/// `POST {base}update?commit=true&wt=..`
pub fn commit_url(base: &Url, format: WireFormat) -> Result<Url, SearchError> {
    let mut url = base.join("update")?;
    url.query_pairs_mut()
        .append_pair("commit", "true")
        .append_pair("wt", format.as_str());
    Ok(url)
}

/// `POST {base}update?optimize=true&wt=..`
pub fn optimize_url(base: &Url, format: WireFormat) -> Result<Url, SearchError> {
    let mut url = base.join("update")?;
    url.query_pairs_mut()
        .append_pair("optimize", "true")
        .append_pair("wt", format.as_str());
    Ok(url)
}
