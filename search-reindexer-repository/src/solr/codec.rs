//! Wire codecs for Solr request and response envelopes.

use serde::{Deserialize, Serialize};

use crate::errors::SearchError;
use crate::solr::config::WireFormat;
use search_reindexer_shared::{Document, PageResult, ResponseCode};

/// Capability to decode the engine's responses and encode write requests.
pub trait ResponseCodec: Send + Sync {
    /// The format this codec understands.
    fn format(&self) -> WireFormat;

    /// Decode a select response into a page.
    fn decode_page(&self, body: &str) -> Result<PageResult, SearchError>;

    /// Encode a batch of documents as an add request.
    fn encode_batch(&self, documents: &[Document]) -> Result<Vec<u8>, SearchError>;

    /// Extract the status code from an update or commit response.
    fn decode_status(&self, body: &str) -> Result<ResponseCode, SearchError>;
}

/// Get the codec for a wire format.
pub fn codec_for(format: WireFormat) -> Box<dyn ResponseCodec> {
    match format {
        WireFormat::Json => Box::new(JsonCodec),
    }
}

/// Codec for Solr's JSON response writer.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

#[derive(Deserialize)]
struct SelectEnvelope {
    response: SelectBody,
}

#[derive(Deserialize)]
struct SelectBody {
    #[serde(rename = "numFound")]
    num_found: u64,
    #[serde(default)]
    docs: Vec<Document>,
}

#[derive(Deserialize)]
struct StatusEnvelope {
    #[serde(rename = "responseHeader")]
    response_header: ResponseHeader,
}

#[derive(Deserialize)]
struct ResponseHeader {
    status: i64,
}

#[derive(Serialize)]
struct AddEnvelope<'a> {
    add: Vec<AddCommand<'a>>,
}

#[derive(Serialize)]
struct AddCommand<'a> {
    doc: &'a Document,
}

impl ResponseCodec for JsonCodec {
    fn format(&self) -> WireFormat {
        WireFormat::Json
    }

    fn decode_page(&self, body: &str) -> Result<PageResult, SearchError> {
        let envelope: SelectEnvelope = serde_json::from_str(body)
            .map_err(|e| SearchError::decode(format!("Invalid select response: {}", e)))?;

        Ok(PageResult::new(
            envelope.response.docs,
            envelope.response.num_found,
        ))
    }

    fn encode_batch(&self, documents: &[Document]) -> Result<Vec<u8>, SearchError> {
        let envelope = AddEnvelope {
            add: documents.iter().map(|doc| AddCommand { doc }).collect(),
        };
        serde_json::to_vec(&envelope).map_err(|e| SearchError::encode(e.to_string()))
    }

    fn decode_status(&self, body: &str) -> Result<ResponseCode, SearchError> {
        let envelope: StatusEnvelope = serde_json::from_str(body)
            .map_err(|e| SearchError::decode(format!("Invalid update response: {}", e)))?;
        Ok(ResponseCode(envelope.response_header.status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn doc(value: Value) -> Document {
        Document::try_from(value).unwrap()
    }

    #[test]
    fn test_decode_page() {
        let body = json!({
            "responseHeader": {"status": 0, "QTime": 3},
            "response": {
                "numFound": 57,
                "start": 20,
                "docs": [
                    {"id": "a", "title": "First", "tags": ["x", "y"]},
                    {"id": "b", "nested": {"k": 1}}
                ]
            }
        })
        .to_string();

        let page = JsonCodec.decode_page(&body).unwrap();

        assert_eq!(page.total_found, 57);
        assert_eq!(page.documents.len(), 2);
        assert_eq!(page.documents[0].id(), Some("a".to_string()));
        assert_eq!(page.documents[1].get("nested"), Some(&json!({"k": 1})));
    }

    #[test]
    fn test_decode_page_without_docs() {
        let body = json!({"response": {"numFound": 0, "start": 0, "docs": []}}).to_string();
        let page = JsonCodec.decode_page(&body).unwrap();
        assert!(page.is_empty());
        assert_eq!(page.total_found, 0);
    }

    #[test]
    fn test_decode_page_malformed() {
        assert!(matches!(
            JsonCodec.decode_page("<html>502 Bad Gateway</html>"),
            Err(SearchError::DecodeError(_))
        ));
        assert!(matches!(
            JsonCodec.decode_page("{\"error\": {\"msg\": \"undefined field\"}}"),
            Err(SearchError::DecodeError(_))
        ));
    }

    #[test]
    fn test_encode_batch() {
        let documents = vec![
            doc(json!({"id": "1", "title": "One"})),
            doc(json!({"id": "2", "count": 3})),
        ];

        let encoded = JsonCodec.encode_batch(&documents).unwrap();
        let value: Value = serde_json::from_slice(&encoded).unwrap();

        assert_eq!(
            value,
            json!({
                "add": [
                    {"doc": {"id": "1", "title": "One"}},
                    {"doc": {"id": "2", "count": 3}}
                ]
            })
        );
    }

    #[test]
    fn test_decode_status() {
        let ok = json!({"responseHeader": {"status": 0, "QTime": 12}}).to_string();
        assert_eq!(JsonCodec.decode_status(&ok).unwrap(), ResponseCode::OK);

        let failed = json!({
            "responseHeader": {"status": 400, "QTime": 1},
            "error": {"msg": "ERROR: [doc=1] unknown field 'foo'", "code": 400}
        })
        .to_string();
        assert_eq!(JsonCodec.decode_status(&failed).unwrap(), ResponseCode(400));
    }

    #[test]
    fn test_decode_status_missing_header() {
        assert!(matches!(
            JsonCodec.decode_status("{}"),
            Err(SearchError::DecodeError(_))
        ));
    }

    #[test]
    fn test_codec_for() {
        assert_eq!(codec_for(WireFormat::Json).format(), WireFormat::Json);
    }
}
