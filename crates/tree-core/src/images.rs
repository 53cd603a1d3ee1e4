//! Load state of externally supplied images.
//!
//! Loads happen out of band; the painter polls [`ImageSlots::loaded`] every
//! frame and simply skips ornaments whose image is not ready. A failed load
//! stays failed and the ornament never appears.

use fnv::FnvHashMap;

use crate::particle::ImageId;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImageState<H> {
    Pending,
    Loaded(H),
    Failed,
}

/// One slot per ornament. Ornaments that share a URL share the load.
#[derive(Clone, Debug)]
pub struct ImageSlots<H> {
    urls: Vec<String>,
    states: Vec<ImageState<H>>,
    by_url: FnvHashMap<String, Vec<usize>>,
}

impl<H> ImageSlots<H> {
    pub fn new(urls: Vec<String>) -> Self {
        let mut by_url: FnvHashMap<String, Vec<usize>> = FnvHashMap::default();
        for (i, url) in urls.iter().enumerate() {
            by_url.entry(url.clone()).or_default().push(i);
        }
        let states = urls.iter().map(|_| ImageState::Pending).collect();
        Self {
            urls,
            states,
            by_url,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    #[inline]
    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    /// Distinct URLs to fetch, each once.
    pub fn unique_urls(&self) -> impl Iterator<Item = &str> {
        let mut seen = fnv::FnvHashSet::default();
        self.urls
            .iter()
            .filter(move |u| seen.insert(u.as_str()))
            .map(String::as_str)
    }

    pub fn state(&self, id: ImageId) -> Option<&ImageState<H>> {
        self.states.get(id.0)
    }

    /// The image for `id` if, and only if, it has finished loading.
    pub fn loaded(&self, id: ImageId) -> Option<&H> {
        match self.states.get(id.0) {
            Some(ImageState::Loaded(h)) => Some(h),
            _ => None,
        }
    }

    pub fn loaded_count(&self) -> usize {
        self.states
            .iter()
            .filter(|s| matches!(s, ImageState::Loaded(_)))
            .count()
    }
}

impl<H: Clone> ImageSlots<H> {
    /// Mark every slot using `url` as loaded. Unknown URLs are ignored.
    pub fn mark_loaded(&mut self, url: &str, handle: H) {
        if let Some(ids) = self.by_url.get(url) {
            for &i in ids {
                self.states[i] = ImageState::Loaded(handle.clone());
            }
            log::info!("[images] loaded {} ({} slots)", short(url), ids.len());
        }
    }

    pub fn mark_failed(&mut self, url: &str) {
        if let Some(ids) = self.by_url.get(url) {
            for &i in ids {
                self.states[i] = ImageState::Failed;
            }
            log::warn!("[images] failed to load {}", short(url));
        }
    }
}

/// Data URLs can be megabytes; keep log lines readable.
fn short(url: &str) -> &str {
    match url.char_indices().nth(64) {
        Some((end, _)) => &url[..end],
        None => url,
    }
}
