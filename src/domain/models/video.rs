//! Video URL Parsing
//!
//! Recognizes share/watch links from supported video hosts and derives embed URLs.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

lazy_static! {
    static ref YOUTUBE_REGEX: Regex = Regex::new(
        r"^(?:https?://)?(?:www\.|m\.)?(?:youtube\.com/(?:watch\?(?:[^#]*&)?v=|embed/|shorts/)|youtu\.be/)([A-Za-z0-9_-]{11})(?:[?&#/].*)?$"
    )
    .expect("valid regex");
    static ref VIMEO_REGEX: Regex =
        Regex::new(r"^(?:https?://)?(?:www\.)?(?:player\.)?vimeo\.com/(?:video/)?(\d+)(?:[?#/].*)?$")
            .expect("valid regex");
    static ref LOOM_REGEX: Regex =
        Regex::new(r"^(?:https?://)?(?:www\.)?loom\.com/(?:share|embed)/([A-Za-z0-9]+)(?:[?#/].*)?$")
            .expect("valid regex");
}

/// Supported video hosts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoProvider {
    Youtube,
    Vimeo,
    Loom,
}

/// Embed information extracted from a video URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoEmbed {
    pub provider: VideoProvider,
    pub video_id: String,
    pub embed_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

impl VideoEmbed {
    /// Parse a video URL. Returns `None` for unsupported hosts or malformed links.
    #[must_use]
    pub fn parse(url: &str) -> Option<Self> {
        let url = url.trim();

        if let Some(caps) = YOUTUBE_REGEX.captures(url) {
            let id = caps[1].to_string();
            return Some(Self {
                provider: VideoProvider::Youtube,
                embed_url: format!("https://www.youtube.com/embed/{id}"),
                thumbnail_url: Some(format!("https://img.youtube.com/vi/{id}/hqdefault.jpg")),
                video_id: id,
            });
        }

        if let Some(caps) = VIMEO_REGEX.captures(url) {
            let id = caps[1].to_string();
            return Some(Self {
                provider: VideoProvider::Vimeo,
                embed_url: format!("https://player.vimeo.com/video/{id}"),
                thumbnail_url: None,
                video_id: id,
            });
        }

        LOOM_REGEX.captures(url).map(|caps| {
            let id = caps[1].to_string();
            Self {
                provider: VideoProvider::Loom,
                embed_url: format!("https://www.loom.com/embed/{id}"),
                thumbnail_url: None,
                video_id: id,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_youtube_variants() {
        for url in [
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://youtube.com/watch?feature=share&v=dQw4w9WgXcQ",
            "https://youtu.be/dQw4w9WgXcQ?t=42",
            "https://www.youtube.com/embed/dQw4w9WgXcQ",
            "https://youtube.com/shorts/dQw4w9WgXcQ",
            "m.youtube.com/watch?v=dQw4w9WgXcQ",
        ] {
            let embed = VideoEmbed::parse(url).unwrap_or_else(|| panic!("failed to parse {url}"));
            assert_eq!(embed.provider, VideoProvider::Youtube);
            assert_eq!(embed.video_id, "dQw4w9WgXcQ");
            assert_eq!(embed.embed_url, "https://www.youtube.com/embed/dQw4w9WgXcQ");
        }
    }

    #[test]
    fn parses_vimeo() {
        let embed = VideoEmbed::parse("https://vimeo.com/76979871").unwrap();
        assert_eq!(embed.provider, VideoProvider::Vimeo);
        assert_eq!(embed.video_id, "76979871");
        assert_eq!(embed.embed_url, "https://player.vimeo.com/video/76979871");

        let player = VideoEmbed::parse("https://player.vimeo.com/video/76979871?h=abc").unwrap();
        assert_eq!(player.video_id, "76979871");
    }

    #[test]
    fn parses_loom() {
        let embed = VideoEmbed::parse("https://www.loom.com/share/0281766fa2d04bb788eaf19e65135184").unwrap();
        assert_eq!(embed.provider, VideoProvider::Loom);
        assert_eq!(embed.embed_url, "https://www.loom.com/embed/0281766fa2d04bb788eaf19e65135184");
    }

    #[test]
    fn rejects_unsupported_urls() {
        assert!(VideoEmbed::parse("https://example.com/video.mp4").is_none());
        assert!(VideoEmbed::parse("https://www.youtube.com/watch?v=short").is_none());
        assert!(VideoEmbed::parse("https://vimeo.com/channels/staffpicks").is_none());
        assert!(VideoEmbed::parse("").is_none());
    }
}
