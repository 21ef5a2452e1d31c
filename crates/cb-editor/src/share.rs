//! Share links.
//!
//! A payload is the snapshot JSON, deflated and written as URL-safe base64
//! without padding, so it can sit in a query string unescaped.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use cb_core::{Snapshot, SnapshotError};
use flate2::Compression;
use flate2::read::DeflateDecoder;
use flate2::write::DeflateEncoder;
use std::io::{self, Read, Write};

#[derive(Debug, thiserror::Error)]
pub enum ShareError {
    #[error("share payload is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("share payload failed to (de)compress: {0}")]
    Compression(#[from] io::Error),
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}

pub fn encode(snapshot: &Snapshot) -> Result<String, ShareError> {
    let json = snapshot.to_json()?;
    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(json.as_bytes())?;
    let bytes = encoder.finish()?;
    Ok(URL_SAFE_NO_PAD.encode(bytes))
}

pub fn decode(payload: &str) -> Result<Snapshot, ShareError> {
    // Links pasted from elsewhere sometimes keep their padding
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim().trim_end_matches('='))?;
    let mut json = String::new();
    DeflateDecoder::new(bytes.as_slice()).read_to_string(&mut json)?;
    Ok(Snapshot::from_json(&json)?)
}

/// Find `param` in a query string (`?a=1&constellation=...`).
pub fn payload_from_query<'a>(query: &'a str, param: &str) -> Option<&'a str> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, value)| *key == param && !value.is_empty())
        .map(|(_, value)| value)
}

/// `base` with any existing query replaced by the share parameter.
pub fn share_url(base: &str, param: &str, payload: &str) -> String {
    let base = base.split(['?', '#']).next().unwrap_or(base);
    format!("{base}?{param}={payload}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use cb_core::{LineStyle, Point, Rgb, Scene};
    use pretty_assertions::assert_eq;

    fn snapshot() -> Snapshot {
        let mut scene = Scene::new();
        let a = scene.add_star(Point::new(10.0, 20.0), Rgb::WHITE).id;
        let b = scene.add_star(Point::new(-5.5, 3.25), Rgb::new(0xff, 0xd7, 0)).id;
        scene.add_connection(a, b, Rgb::WHITE, LineStyle::Dashed);
        scene.serialize()
    }

    #[test]
    fn payload_round_trips_exactly() {
        let snapshot = snapshot();
        let payload = encode(&snapshot).unwrap();
        assert!(payload.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
        assert_eq!(decode(&payload).unwrap(), snapshot);
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(matches!(decode("***"), Err(ShareError::Base64(_))));
        let not_deflate = URL_SAFE_NO_PAD.encode(b"plain text");
        assert!(decode(&not_deflate).is_err());
    }

    #[test]
    fn structurally_invalid_snapshot_is_rejected() {
        let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(br#"{"connections":[]}"#).unwrap();
        let payload = URL_SAFE_NO_PAD.encode(encoder.finish().unwrap());
        assert!(matches!(
            decode(&payload),
            Err(ShareError::Snapshot(SnapshotError::MissingStars))
        ));
    }

    #[test]
    fn query_lookup() {
        assert_eq!(payload_from_query("?a=1&constellation=abc", "constellation"), Some("abc"));
        assert_eq!(payload_from_query("constellation=", "constellation"), None);
        assert_eq!(payload_from_query("", "constellation"), None);
        assert_eq!(
            share_url("https://x.test/app?old=1#top", "constellation", "abc"),
            "https://x.test/app?constellation=abc"
        );
    }
}
