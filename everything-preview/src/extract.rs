use everything_model::{LinkImage, LinkPreview};
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;
use url::Url;

static META: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("meta").expect("meta selector is valid"));

static TITLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("title").expect("title selector is valid"));

/// Reads the OpenGraph title and images from a page.
///
/// `og:title` wins over `<title>`. Each `og:image` (or `og:image:url`) opens
/// a new image; `og:image:secure_url`, `og:image:width` and `og:image:height`
/// refine the image opened last. Relative URLs are resolved against `base`
/// and repeated URLs are dropped.
#[must_use]
pub fn extract_link_preview(html: &str, base: &Url) -> LinkPreview {
    let document = Html::parse_document(html);
    let mut og_title = None;
    let mut images: Vec<LinkImage> = Vec::new();

    for meta in document.select(&META) {
        let element = meta.value();
        let Some(property) = element.attr("property").or_else(|| element.attr("name")) else {
            continue;
        };
        let Some(content) = element
            .attr("content")
            .map(str::trim)
            .filter(|c| !c.is_empty())
        else {
            continue;
        };

        match property.to_ascii_lowercase().as_str() {
            "og:title" => {
                og_title.get_or_insert_with(|| content.to_string());
            }
            "og:image" | "og:image:url" => images.push(image(base, content)),
            "og:image:secure_url" => match images.last_mut() {
                Some(last) => last.url = resolve(base, content),
                None => images.push(image(base, content)),
            },
            "og:image:width" => {
                if let Some(last) = images.last_mut() {
                    last.width = dimension(content);
                }
            }
            "og:image:height" => {
                if let Some(last) = images.last_mut() {
                    last.height = dimension(content);
                }
            }
            _ => {}
        }
    }

    let mut seen = Vec::with_capacity(images.len());
    images.retain(|image| {
        if seen.contains(&image.url) {
            false
        } else {
            seen.push(image.url.clone());
            true
        }
    });

    let title = og_title.or_else(|| {
        document
            .select(&TITLE)
            .next()
            .map(text_of)
            .filter(|title| !title.is_empty())
    });

    LinkPreview { title, images }
}

fn image(base: &Url, raw: &str) -> LinkImage {
    LinkImage {
        url: resolve(base, raw),
        width: None,
        height: None,
    }
}

fn resolve(base: &Url, raw: &str) -> String {
    base.join(raw)
        .map(String::from)
        .unwrap_or_else(|_| raw.to_string())
}

// Zero is as good as missing.
fn dimension(raw: &str) -> Option<u32> {
    raw.parse().ok().filter(|value| *value > 0)
}

fn text_of(element: ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}
