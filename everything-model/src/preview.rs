//! Best-effort enrichment of link posts from the linked page's metadata.

use crate::entities::{ImageSource, Post, Preview, PreviewImage};
use crate::envelope::Envelope;
use crate::error::PreviewError;
use crate::merge::Partial;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

const DEFAULT_IMAGE_WIDTH: u32 = 1200;
const DEFAULT_IMAGE_HEIGHT: u32 = 630;

/// Page metadata returned by a [`LinkPreviewSource`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkPreview {
    pub title: Option<String>,
    pub images: Vec<LinkImage>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkImage {
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// Fetches title and preview images for a URL.
#[async_trait]
pub trait LinkPreviewSource: Send + Sync {
    async fn fetch_link_preview(&self, url: &str) -> Result<LinkPreview, PreviewError>;
}

impl Post {
    /// Fills `title`, `preview` and `thumbnail` from the linked page.
    ///
    /// Self posts are left alone and `source` is not called. A source error
    /// is logged at debug level and dropped: the post comes back unchanged.
    /// Callers must not rely on enrichment having happened.
    pub async fn enrich_from_link<S>(&mut self, source: &S) -> &mut Self
    where
        S: LinkPreviewSource + ?Sized,
    {
        if self.is_self.unwrap_or_default() {
            return self;
        }
        let url = self.url.clone().unwrap_or_default();
        let fetched = source.fetch_link_preview(&url).await;
        match fetched {
            Ok(preview) => self.apply_link_preview(preview),
            Err(e) => debug!(url = %url, error = %e, "link preview unavailable"),
        }
        self
    }

    fn apply_link_preview(&mut self, preview: LinkPreview) {
        if self.title.as_deref().is_none_or(str::is_empty) {
            if let Some(title) = preview.title.filter(|title| !title.is_empty()) {
                self.title = Some(title);
            }
        }
        if preview.images.is_empty() {
            return;
        }
        let images: Vec<PreviewImage> = preview.images.into_iter().map(preview_image).collect();
        if let Some(first) = images.first() {
            self.thumbnail = Some(first.source.url.clone());
        }
        self.preview = Some(Preview {
            images,
            enabled: true,
        });
    }
}

/// Missing and zero dimensions both fall back to the 1200x630 card size.
fn preview_image(image: LinkImage) -> PreviewImage {
    let source = ImageSource {
        url: image.url,
        width: dimension(image.width, DEFAULT_IMAGE_WIDTH),
        height: dimension(image.height, DEFAULT_IMAGE_HEIGHT),
    };
    PreviewImage {
        id: source.url.clone(),
        resolutions: vec![source.clone()],
        source,
        variants: Partial::new(),
    }
}

fn dimension(value: Option<u32>, default: u32) -> u32 {
    value.filter(|v| *v > 0).unwrap_or(default)
}

impl Envelope<Post> {
    /// [`Post::enrich_from_link`], resolving to the envelope.
    pub async fn enrich_from_link<S>(&mut self, source: &S) -> &mut Self
    where
        S: LinkPreviewSource + ?Sized,
    {
        self.data_mut().enrich_from_link(source).await;
        self
    }
}
