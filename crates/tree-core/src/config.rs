//! Page-level configuration read from the card URL.
//!
//! - `#photos=<comma-separated URLs>` (or legacy `#photo=<URL>`) supplies up to
//!   five images; the whole value is percent-decoded before splitting.
//! - `?perf=true` shows the performance overlay.
//! - `?seed=<u64>` pins the procedural layout.
//! - `?to=`, `?from=` and `?msg=` personalise the greeting.

use crate::constants::{DEFAULT_RECIPIENT, MAX_IMAGES, PARTICLE_COUNT};

#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub particle_count: usize,
    pub seed: u64,
    pub images: Vec<String>,
    pub show_perf: bool,
    pub to: String,
    pub from: String,
    pub message: String,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            seed: rand::random(),
            images: Vec::new(),
            show_perf: false,
            to: DEFAULT_RECIPIENT.to_owned(),
            from: String::new(),
            message: String::new(),
        }
    }
}

impl SceneConfig {
    /// Build from `location.search` and `location.hash` (leading `?`/`#`
    /// optional). Malformed parts fall back to defaults with a warning.
    pub fn from_location(search: &str, hash: &str) -> Self {
        let mut cfg = Self {
            images: parse_photos(hash),
            show_perf: query_param(search, "perf") == Some("true"),
            ..Self::default()
        };
        if let Some(to) = query_text(search, "to") {
            cfg.to = to;
        }
        cfg.from = query_text(search, "from").unwrap_or_default();
        cfg.message = query_text(search, "msg").unwrap_or_default();
        if let Some(raw) = query_param(search, "seed") {
            match raw.parse::<u64>() {
                Ok(seed) => cfg.seed = seed,
                Err(e) => log::warn!("[config] ignoring seed {:?}: {}", raw, e),
            }
        }
        cfg
    }

    /// Start-screen salutation, e.g. `Dear Sam,`.
    pub fn salutation(&self) -> String {
        format!("Dear {},", self.to)
    }

    /// Start-screen sender line; `None` when no sender was given.
    pub fn sender_line(&self) -> Option<String> {
        (!self.from.is_empty()).then(|| format!("{} sent you something magical.", self.from))
    }
}

/// Value of `key` in a `?a=1&b=2` query string, undecoded.
pub fn query_param<'a>(search: &'a str, key: &str) -> Option<&'a str> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v)
}

/// Decoded, non-empty text value of `key`. `+` reads as a space, as in form
/// encoding.
pub fn query_text(search: &str, key: &str) -> Option<String> {
    let raw = query_param(search, key)?.replace('+', " ");
    match urlencoding::decode(&raw) {
        Ok(s) => {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_owned())
        }
        Err(e) => {
            log::warn!("[config] undecodable {}: {}", key, e);
            None
        }
    }
}

/// Image URLs from the fragment, at most [`MAX_IMAGES`].
pub fn parse_photos(hash: &str) -> Vec<String> {
    let raw = if let Some((_, rest)) = hash.split_once("photos=") {
        rest
    } else if let Some((_, rest)) = hash.split_once("photo=") {
        // legacy single-photo links: commas belong to the URL
        return decode(rest).into_iter().take(1).collect();
    } else {
        return Vec::new();
    };
    let Some(decoded) = decode(raw) else {
        return Vec::new();
    };
    let mut urls: Vec<String> = decoded
        .split(',')
        .filter(|u| !u.trim().is_empty())
        .map(str::to_owned)
        .collect();
    if urls.len() > MAX_IMAGES {
        log::warn!(
            "[config] {} photos supplied, keeping the first {}",
            urls.len(),
            MAX_IMAGES
        );
        urls.truncate(MAX_IMAGES);
    }
    urls
}

fn decode(raw: &str) -> Option<String> {
    if raw.is_empty() {
        return None;
    }
    match urlencoding::decode(raw) {
        Ok(s) => Some(s.into_owned()),
        Err(e) => {
            log::warn!("[config] undecodable photo list: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn photos_are_decoded_then_split() {
        assert_eq!(
            parse_photos("#photos=a%2Cb,c"),
            vec!["a".to_string(), "b".into(), "c".into()]
        );
        assert_eq!(parse_photos("#photos=https%3A%2F%2Fx%2Fp.png,,"), vec!["https://x/p.png"]);
    }

    #[test]
    fn legacy_single_photo() {
        assert_eq!(parse_photos("#photo=data%3Aimage%2Fpng%3Bbase64%2CAAA"), vec![
            "data:image/png;base64,AAA"
        ]);
    }

    #[test]
    fn photo_list_is_capped() {
        let urls = parse_photos("#photos=1,2,3,4,5,6");
        assert_eq!(urls.len(), MAX_IMAGES);
        assert_eq!(urls.last().map(String::as_str), Some("5"));
    }

    #[test]
    fn no_fragment_no_photos() {
        assert!(parse_photos("").is_empty());
        assert!(parse_photos("#other=1").is_empty());
        assert!(parse_photos("#photos=").is_empty());
    }

    #[test]
    fn query_flags() {
        let cfg = SceneConfig::from_location("?to=Sam&perf=true&seed=7", "");
        assert!(cfg.show_perf);
        assert_eq!(cfg.seed, 7);
        assert_eq!(cfg.particle_count, PARTICLE_COUNT);

        let cfg = SceneConfig::from_location("perf=false", "");
        assert!(!cfg.show_perf);
    }

    #[test]
    fn greeting_params_are_decoded() {
        let cfg = SceneConfig::from_location("?to=Sam%20Lee&from=Alex+K&msg=Happy%20holidays%21", "");
        assert_eq!(cfg.to, "Sam Lee");
        assert_eq!(cfg.from, "Alex K");
        assert_eq!(cfg.message, "Happy holidays!");
        assert_eq!(cfg.salutation(), "Dear Sam Lee,");
        assert_eq!(
            cfg.sender_line().as_deref(),
            Some("Alex K sent you something magical.")
        );
    }

    #[test]
    fn greeting_defaults() {
        let cfg = SceneConfig::from_location("?to=&perf=true", "");
        assert_eq!(cfg.to, "Friend");
        assert_eq!(cfg.salutation(), "Dear Friend,");
        assert!(cfg.from.is_empty() && cfg.message.is_empty());
        assert_eq!(cfg.sender_line(), None);
    }
}
