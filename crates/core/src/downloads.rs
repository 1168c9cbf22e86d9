//! Download listings
//!
//! The listing is flat: `{"downloads": [...], "Total": n}`. A response that nests
//! the same object under a `downloads` envelope is accepted as well.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::decode::{parse_object, take_envelope, DecodeError};

/// One downloadable file variant
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Download {
    #[serde(rename(deserialize = "download_type"))]
    pub kind: String,
    #[serde(rename(deserialize = "download_url"))]
    pub url: String,
    #[serde(rename(deserialize = "download_info"))]
    pub info: String,
    #[serde(rename(deserialize = "download_count"))]
    pub count: u64,
    /// Unix timestamp of the last update
    #[serde(rename(deserialize = "download_time"))]
    pub time: u64,
    #[serde(rename(deserialize = "download_poster"))]
    pub poster: String,
    #[serde(rename(deserialize = "download_poster_url"))]
    pub poster_url: String,
}

/// All download variants for a content item
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct DownloadListing {
    pub downloads: Vec<Download>,
    #[serde(alias = "Total")]
    pub total: u64,
}

/// Decode a `{"downloads": [...], "Total": n}` response
pub fn decode_downloads(body: &str) -> Result<DownloadListing, DecodeError> {
    let mut object = parse_object(body)?;

    let nested = object
        .get("downloads")
        .ok_or(DecodeError::MissingEnvelope("downloads"))?
        .is_object();

    if nested {
        return take_envelope(&mut object, "downloads");
    }

    serde_json::from_value(Value::Object(object)).map_err(|source| DecodeError::Json {
        envelope: "downloads",
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn download_json(kind: &str, count: u64) -> serde_json::Value {
        json!({
            "download_type": kind,
            "download_url": format!("https://dl.fakku.net/{kind}.zip"),
            "download_info": "Uncensored",
            "download_count": count,
            "download_time": 1609459500,
            "download_poster": "uploader",
            "download_poster_url": "https://www.fakku.net/users/uploader"
        })
    }

    #[test]
    fn test_decode_flat_listing() {
        let body = json!({
            "downloads": [download_json("torrent", 40), download_json("direct", 12)],
            "Total": 2
        })
        .to_string();

        let listing = decode_downloads(&body).unwrap();

        assert_eq!(listing.total, 2);
        assert_eq!(listing.downloads.len(), 2);
        assert_eq!(
            listing.downloads[0],
            Download {
                kind: "torrent".to_string(),
                url: "https://dl.fakku.net/torrent.zip".to_string(),
                info: "Uncensored".to_string(),
                count: 40,
                time: 1609459500,
                poster: "uploader".to_string(),
                poster_url: "https://www.fakku.net/users/uploader".to_string(),
            }
        );
        assert_eq!(listing.downloads[1].kind, "direct");
    }

    #[test]
    fn test_flat_listing_with_lowercase_total() {
        let body = json!({ "downloads": [download_json("direct", 1)], "total": 1 }).to_string();
        assert_eq!(decode_downloads(&body).unwrap().total, 1);
    }

    #[test]
    fn test_nested_listing_is_accepted() {
        let body = json!({
            "downloads": {"downloads": [download_json("direct", 1)], "total": 1}
        })
        .to_string();

        let listing = decode_downloads(&body).unwrap();
        assert_eq!(listing.total, 1);
        assert_eq!(listing.downloads[0].kind, "direct");
    }

    #[test]
    fn test_mistyped_count_aborts_decode() {
        let mut download = download_json("direct", 1);
        download["download_count"] = json!("many");
        let body = json!({ "downloads": [download], "Total": 1 }).to_string();

        let err = decode_downloads(&body).unwrap_err();
        assert!(matches!(err, DecodeError::Json { envelope: "downloads", .. }));
    }

    #[test]
    fn test_missing_total_aborts_decode() {
        let body = json!({ "downloads": [] }).to_string();
        assert!(decode_downloads(&body).is_err());
    }

    #[test]
    fn test_missing_downloads_key() {
        let body = json!({ "Total": 0 }).to_string();
        assert!(matches!(
            decode_downloads(&body),
            Err(DecodeError::MissingEnvelope("downloads"))
        ));
    }

    #[test]
    fn test_serialize_uses_plain_field_names() {
        let body = json!({ "downloads": [download_json("direct", 1)], "Total": 1 }).to_string();
        let value = serde_json::to_value(decode_downloads(&body).unwrap()).unwrap();
        assert_eq!(value["downloads"][0]["kind"], "direct");
        assert!(value["downloads"][0].get("download_type").is_none());
    }
}
