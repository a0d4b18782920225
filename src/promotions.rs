//! Optional remotely-fetched promotions.
//!
//! One unauthenticated GET per process lifetime, with a cache-dir copy as a
//! same-day fallback. Any failure degrades to an empty promotion slot; there
//! are no retries and no user-visible errors.

use serde::Deserialize;
use std::{
    sync::OnceLock,
    time::{Instant, SystemTime, UNIX_EPOCH},
};

const PROMOTIONS_URL: &str =
    "https://raw.githubusercontent.com/imsbg/Atomic-Guru/master/pr_img.json";
const PROMOTIONS_CACHE_PATH: &str = "atomic-guru/promotions.json";

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Promotion {
    pub id: i64,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    #[serde(rename = "destinationUrl")]
    pub destination_url: String,
    #[serde(rename = "altText")]
    pub alt_text: String,
}

#[derive(Debug, Deserialize)]
struct PromotionResponse {
    promotions: Vec<Promotion>,
}

static PROMOTIONS: OnceLock<Vec<Promotion>> = OnceLock::new();
static CHOSEN: OnceLock<Option<Promotion>> = OnceLock::new();

fn try_download() -> Option<Vec<u8>> {
    let cache_dir = dirs::cache_dir()?;
    let cache_path = cache_dir.join(PROMOTIONS_CACHE_PATH);

    if let Ok(metadata) = std::fs::metadata(&cache_path) {
        if let Ok(modified) = metadata.modified() {
            if let Ok(elapsed) = modified.elapsed() {
                if elapsed.as_secs() < 24 * 60 * 60 {
                    log::info!("using cached promotions from {:?}", cache_path);
                    return std::fs::read(&cache_path).ok();
                }
            }
        }
    }

    log::info!("downloading promotions from {}", PROMOTIONS_URL);
    let response = reqwest::blocking::get(PROMOTIONS_URL).ok()?;

    if !response.status().is_success() {
        return None;
    }

    let bytes = response.bytes().ok()?.to_vec();
    std::fs::create_dir_all(cache_path.parent()?).ok()?;
    std::fs::write(&cache_path, &bytes).ok()?;

    Some(bytes)
}

fn parse_promotions(data: &[u8]) -> Result<Vec<Promotion>, serde_json::Error> {
    serde_json::from_slice::<PromotionResponse>(data).map(|response| response.promotions)
}

/// Fetch and decode the promotions document, at most once per process
pub fn load_promotions() -> &'static [Promotion] {
    PROMOTIONS.get_or_init(|| {
        let start = Instant::now();

        let Some(data) = try_download() else {
            log::warn!("failed to load promotions");
            return Vec::new();
        };

        match parse_promotions(&data) {
            Ok(promotions) => {
                log::info!(
                    "loaded {} promotions in {:?}",
                    promotions.len(),
                    start.elapsed()
                );
                promotions
            }
            Err(err) => {
                log::warn!("failed to parse promotions: {}", err);
                Vec::new()
            }
        }
    })
}

/// The promotion shown for this process lifetime, if any. The pick is seeded
/// from the process clock, matching the one-random-promotion-per-launch
/// behavior of the upstream document.
pub fn chosen_promotion() -> Option<&'static Promotion> {
    CHOSEN
        .get_or_init(|| {
            let promotions = load_promotions();
            if promotions.is_empty() {
                return None;
            }
            let seed = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.subsec_nanos() as usize)
                .unwrap_or(0);
            promotions.get(seed % promotions.len()).cloned()
        })
        .as_ref()
}

#[cfg(test)]
mod tests {
    use super::parse_promotions;

    #[test]
    fn promotions_document_decodes() {
        let json = r#"{
            "promotions": [
                {
                    "id": 1,
                    "imageUrl": "https://example.com/banner.png",
                    "destinationUrl": "https://example.com/app",
                    "altText": "Try the app"
                },
                {
                    "id": 2,
                    "imageUrl": "https://example.com/other.png",
                    "destinationUrl": "https://example.com/other",
                    "altText": "Other"
                }
            ]
        }"#;
        let promotions = parse_promotions(json.as_bytes()).expect("fixture must parse");
        assert_eq!(promotions.len(), 2);
        assert_eq!(promotions[0].id, 1);
        assert_eq!(promotions[0].image_url, "https://example.com/banner.png");
        assert_eq!(promotions[1].alt_text, "Other");
    }

    #[test]
    fn malformed_document_is_an_error() {
        assert!(parse_promotions(b"{\"promotions\": 3}").is_err());
        assert!(parse_promotions(b"not json").is_err());
    }
}
