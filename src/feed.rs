//! RSS 2.0 feed rendering for the updates catalog

use chrono::{DateTime, Utc};

use crate::catalog::UpdateSummary;

/// Item description used when an update has no blurb
const NO_DESCRIPTION: &str = "No description available.";

/// Channel-level settings of the feed
#[derive(Debug, Clone)]
pub struct FeedChannel {
    pub title: String,
    pub description: String,
    /// Site root, always ending in `/`
    pub base_url: String,
    /// File name the feed is published as, for the `atom:link` self reference
    pub file_name: String,
}

impl FeedChannel {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        base_url: &str,
        file_name: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            base_url: normalize_base_url(base_url),
            file_name: file_name.into(),
        }
    }

    fn item_link(&self, slug: &str) -> String {
        format!("{}#update:{}", self.base_url, slug)
    }
}

/// Ensure exactly one trailing `/`
pub fn normalize_base_url(base_url: &str) -> String {
    format!("{}/", base_url.trim().trim_end_matches('/'))
}

/// Escape text for XML element content and attribute values
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// MIME type for a preview image extension
pub fn image_mime_type(extension: &str) -> &'static str {
    match extension.to_ascii_lowercase().as_str() {
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        _ => "image/jpeg",
    }
}

/// RFC 822 date in GMT, e.g. `Mon, 09 Mar 2026 00:00:00 GMT`
pub fn rfc822(date: DateTime<Utc>) -> String {
    date.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

fn render_item(channel: &FeedChannel, update: &UpdateSummary, now: DateTime<Utc>) -> String {
    let link = escape_xml(&channel.item_link(&update.slug));
    let description = if update.blurb.is_empty() {
        NO_DESCRIPTION
    } else {
        update.blurb.as_str()
    };

    let enclosure = update
        .preview
        .as_deref()
        .map(|ext| {
            let url = format!("{}assets/preview-{}.{}", channel.base_url, update.slug, ext);
            format!(
                "\n      <enclosure url=\"{}\" type=\"{}\" length=\"0\"/>",
                escape_xml(&url),
                image_mime_type(ext)
            )
        })
        .unwrap_or_default();

    format!(
        "    <item>
      <title>{title}</title>
      <link>{link}</link>
      <guid isPermaLink=\"true\">{link}</guid>
      <pubDate>{pub_date}</pubDate>
      <description>{description}</description>{enclosure}
    </item>",
        title = escape_xml(&update.title),
        pub_date = rfc822(update.effective_date().unwrap_or(now)),
        description = escape_xml(description),
    )
}

/// Render the full RSS document; `updates` are emitted in the given order
pub fn render_rss(channel: &FeedChannel, updates: &[UpdateSummary], now: DateTime<Utc>) -> String {
    let items = updates
        .iter()
        .map(|update| render_item(channel, update, now))
        .collect::<Vec<_>>()
        .join("\n");
    let items = if items.is_empty() {
        items
    } else {
        format!("{items}\n")
    };

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>
<rss version=\"2.0\" xmlns:atom=\"http://www.w3.org/2005/Atom\">
  <channel>
    <title>{title}</title>
    <link>{base}</link>
    <description>{description}</description>
    <language>en-US</language>
    <lastBuildDate>{now}</lastBuildDate>
    <atom:link href=\"{self_link}\" rel=\"self\" type=\"application/rss+xml\"/>
{items}  </channel>
</rss>
",
        title = escape_xml(&channel.title),
        base = escape_xml(&channel.base_url),
        description = escape_xml(&channel.description),
        now = rfc822(now),
        self_link = escape_xml(&format!("{}{}", channel.base_url, channel.file_name)),
    )
}
