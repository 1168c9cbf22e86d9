//! Read-online responses
//!
//! The reader endpoint returns the content envelope next to a `pages` object keyed
//! by 1-based string indices (`"1"`, `"2"`, ...). JSON objects carry no order, so
//! the page list is rebuilt from the keys.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::content::ContentItem;
use crate::decode::{parse_object, take_envelope, DecodeError};

/// One page image within a readable work
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct ReaderPage {
    /// 1-based position in the work
    pub id: usize,
    pub thumb: String,
    pub image: String,
}

/// A content item plus its full ordered page list
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ReadableContent {
    pub content: ContentItem,
    pub pages: Vec<ReaderPage>,
}

#[derive(Debug, Deserialize)]
struct PageImages {
    thumb: String,
    image: String,
}

fn order_pages(raw: HashMap<String, PageImages>) -> Result<Vec<ReaderPage>, DecodeError> {
    let mut numbered = Vec::with_capacity(raw.len());
    for (key, images) in raw {
        // Keys must be the canonical decimal form: "+1" and "01" are rejected
        match key.parse::<usize>() {
            Ok(id) if id > 0 && id.to_string() == key => numbered.push((id, images)),
            _ => return Err(DecodeError::InvalidPageKey(key)),
        }
    }

    numbered.sort_by_key(|(id, _)| *id);

    numbered
        .into_iter()
        .enumerate()
        .map(|(index, (id, images))| {
            if id != index + 1 {
                return Err(DecodeError::MissingPage(index + 1));
            }
            Ok(ReaderPage {
                id,
                thumb: images.thumb,
                image: images.image,
            })
        })
        .collect()
}

/// Decode a `{"content": {...}, "pages": {"1": {...}, ...}}` response
pub fn decode_read_online(body: &str) -> Result<ReadableContent, DecodeError> {
    let mut object = parse_object(body)?;
    let content = take_envelope(&mut object, "content")?;
    let raw_pages = take_envelope(&mut object, "pages")?;

    Ok(ReadableContent {
        content,
        pages: order_pages(raw_pages)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::fixtures::content_json;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn page_json(n: u32) -> serde_json::Value {
        json!({
            "thumb": format!("https://t.fakku.net/{n:03}.thumb.jpg"),
            "image": format!("https://t.fakku.net/{n:03}.jpg")
        })
    }

    #[test]
    fn test_pages_are_ordered_by_key() {
        // Keys deliberately out of order in the document
        let body = format!(
            r#"{{"content":{},"pages":{{"3":{},"1":{},"2":{}}}}}"#,
            content_json(),
            page_json(3),
            page_json(1),
            page_json(2)
        );

        let readable = decode_read_online(&body).unwrap();

        let ids: Vec<usize> = readable.pages.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(readable.pages[0].image, "https://t.fakku.net/001.jpg");
        assert_eq!(readable.pages[2].thumb, "https://t.fakku.net/003.thumb.jpg");
        assert_eq!(readable.content.name, "Example Manga");
    }

    #[test]
    fn test_numeric_order_not_lexical() {
        let mut pages = serde_json::Map::new();
        for n in 1..=11 {
            pages.insert(n.to_string(), page_json(n));
        }
        let body = json!({ "content": content_json(), "pages": pages }).to_string();

        let readable = decode_read_online(&body).unwrap();

        assert_eq!(readable.pages.len(), 11);
        assert_eq!(readable.pages[1].id, 2);
        assert_eq!(readable.pages[10].id, 11);
    }

    #[test]
    fn test_empty_page_list() {
        let body = json!({ "content": content_json(), "pages": {} }).to_string();
        let readable = decode_read_online(&body).unwrap();
        assert!(readable.pages.is_empty());
    }

    #[test]
    fn test_gap_in_page_keys_aborts_decode() {
        let body = json!({
            "content": content_json(),
            "pages": {"1": page_json(1), "3": page_json(3)}
        })
        .to_string();

        assert!(matches!(
            decode_read_online(&body),
            Err(DecodeError::MissingPage(2))
        ));
    }

    #[test]
    fn test_non_numeric_page_key_aborts_decode() {
        let body = json!({
            "content": content_json(),
            "pages": {"1": page_json(1), "cover": page_json(2)}
        })
        .to_string();

        assert!(matches!(
            decode_read_online(&body),
            Err(DecodeError::InvalidPageKey(key)) if key == "cover"
        ));
    }

    #[test]
    fn test_zero_page_key_aborts_decode() {
        let body = json!({ "content": content_json(), "pages": {"0": page_json(0)} }).to_string();
        assert!(matches!(
            decode_read_online(&body),
            Err(DecodeError::InvalidPageKey(_))
        ));
    }

    #[test]
    fn test_non_canonical_page_keys_abort_decode() {
        for key in ["+1", "01", " 1"] {
            let mut pages = serde_json::Map::new();
            pages.insert(key.to_string(), page_json(1));
            let body = json!({ "content": content_json(), "pages": pages }).to_string();

            assert!(
                matches!(
                    decode_read_online(&body),
                    Err(DecodeError::InvalidPageKey(ref k)) if k == key
                ),
                "key {key:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_page_missing_image_aborts_decode() {
        let body = json!({
            "content": content_json(),
            "pages": {"1": {"thumb": "https://t.fakku.net/001.thumb.jpg"}}
        })
        .to_string();

        assert!(matches!(
            decode_read_online(&body),
            Err(DecodeError::Json { envelope: "pages", .. })
        ));
    }

    #[test]
    fn test_missing_pages_envelope() {
        let body = json!({ "content": content_json() }).to_string();
        assert!(matches!(
            decode_read_online(&body),
            Err(DecodeError::MissingEnvelope("pages"))
        ));
    }

    #[test]
    fn test_invalid_content_aborts_decode() {
        let body = json!({ "content": {}, "pages": {"1": page_json(1)} }).to_string();
        assert!(matches!(
            decode_read_online(&body),
            Err(DecodeError::Json { envelope: "content", .. })
        ));
    }
}
