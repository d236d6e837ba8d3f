/// Target bitrate tier for extracted audio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AudioQuality {
    #[default]
    Best,
    Kbps320,
    Kbps256,
    Kbps192,
    Kbps128
}

impl AudioQuality {
    /// Resolves a user-facing tag such as `"192k"`. Unknown tags resolve to
    /// [`AudioQuality::Best`].
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "best" => AudioQuality::Best,
            "320k" => AudioQuality::Kbps320,
            "256k" => AudioQuality::Kbps256,
            "192k" => AudioQuality::Kbps192,
            "128k" => AudioQuality::Kbps128,
            other => {
                tracing::debug!(tag = other, "unknown audio quality, using best");
                AudioQuality::Best
            }
        }
    }

    pub fn as_tag(self) -> &'static str {
        match self {
            AudioQuality::Best => "best",
            AudioQuality::Kbps320 => "320k",
            AudioQuality::Kbps256 => "256k",
            AudioQuality::Kbps192 => "192k",
            AudioQuality::Kbps128 => "128k"
        }
    }

    /// Value for `--audio-quality`, where 0 is the best VBR setting.
    pub fn codec_value(self) -> &'static str {
        match self {
            AudioQuality::Best | AudioQuality::Kbps320 => "0",
            AudioQuality::Kbps256 => "2",
            AudioQuality::Kbps192 => "5",
            AudioQuality::Kbps128 => "7"
        }
    }
}

/// Maximum vertical resolution for downloaded video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VideoQuality {
    #[default]
    Best,
    P2160,
    P1440,
    P1080,
    P720,
    P480,
    P360
}

impl VideoQuality {
    pub const ALL: [VideoQuality; 7] = [
        VideoQuality::Best,
        VideoQuality::P2160,
        VideoQuality::P1440,
        VideoQuality::P1080,
        VideoQuality::P720,
        VideoQuality::P480,
        VideoQuality::P360
    ];

    /// Resolves a tag such as `"1080p"`. The unit suffix is optional; anything
    /// that is not a known resolution resolves to [`VideoQuality::Best`].
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag.trim().to_ascii_lowercase();
        if tag == "best" {
            return VideoQuality::Best;
        }

        let height = tag.strip_suffix('p').unwrap_or(tag.as_str()).parse::<u32>().ok();
        match height.and_then(Self::from_height) {
            Some(quality) => quality,
            None => {
                tracing::debug!(tag = %tag, "unknown video quality, using best");
                VideoQuality::Best
            }
        }
    }

    fn from_height(height: u32) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|quality| quality.max_height() == Some(height))
    }

    pub fn as_tag(self) -> &'static str {
        match self {
            VideoQuality::Best => "best",
            VideoQuality::P2160 => "2160p",
            VideoQuality::P1440 => "1440p",
            VideoQuality::P1080 => "1080p",
            VideoQuality::P720 => "720p",
            VideoQuality::P480 => "480p",
            VideoQuality::P360 => "360p"
        }
    }

    pub fn max_height(self) -> Option<u32> {
        match self {
            VideoQuality::Best => None,
            VideoQuality::P2160 => Some(2160),
            VideoQuality::P1440 => Some(1440),
            VideoQuality::P1080 => Some(1080),
            VideoQuality::P720 => Some(720),
            VideoQuality::P480 => Some(480),
            VideoQuality::P360 => Some(360)
        }
    }

    /// Format-selection expression preferring mp4 video with m4a audio, then
    /// any single-file mp4, then whatever is best.
    pub fn format_selector(self) -> String {
        match self.max_height() {
            None => "bestvideo[ext=mp4]+bestaudio[ext=m4a]/best[ext=mp4]/best".to_string(),
            Some(height) => format!(
                "bestvideo[height<={height}][ext=mp4]+bestaudio[ext=m4a]/best[height<={height}][ext=mp4]/best"
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audio_codec_values() {
        assert_eq!(AudioQuality::from_tag("best").codec_value(), "0");
        assert_eq!(AudioQuality::from_tag("320k").codec_value(), "0");
        assert_eq!(AudioQuality::from_tag("256k").codec_value(), "2");
        assert_eq!(AudioQuality::from_tag("192k").codec_value(), "5");
        assert_eq!(AudioQuality::from_tag("128k").codec_value(), "7");
    }

    #[test]
    fn test_audio_unknown_tag_is_best() {
        assert_eq!(AudioQuality::from_tag("1080p"), AudioQuality::Best);
        assert_eq!(AudioQuality::from_tag("64k"), AudioQuality::Best);
        assert_eq!(AudioQuality::from_tag(""), AudioQuality::Best);
    }

    #[test]
    fn test_audio_tags_resolve_to_themselves() {
        for quality in [
            AudioQuality::Best,
            AudioQuality::Kbps320,
            AudioQuality::Kbps256,
            AudioQuality::Kbps192,
            AudioQuality::Kbps128
        ] {
            assert_eq!(AudioQuality::from_tag(quality.as_tag()), quality);
        }
    }

    #[test]
    fn test_video_from_tag() {
        assert_eq!(VideoQuality::from_tag("1080p"), VideoQuality::P1080);
        assert_eq!(VideoQuality::from_tag("720P"), VideoQuality::P720);
        assert_eq!(VideoQuality::from_tag("480"), VideoQuality::P480);
        assert_eq!(VideoQuality::from_tag(" 2160p "), VideoQuality::P2160);
    }

    #[test]
    fn test_tags_ignore_case_and_padding() {
        assert_eq!(AudioQuality::from_tag("192K"), AudioQuality::Kbps192);
        assert_eq!(AudioQuality::from_tag(" BEST "), AudioQuality::Best);
        assert_eq!(VideoQuality::from_tag("1080P"), VideoQuality::P1080);
    }

    #[test]
    fn test_video_unknown_tag_is_best() {
        assert_eq!(VideoQuality::from_tag("192k"), VideoQuality::Best);
        assert_eq!(VideoQuality::from_tag("900p"), VideoQuality::Best);
        assert_eq!(VideoQuality::from_tag("p"), VideoQuality::Best);
        assert_eq!(VideoQuality::from_tag("hd"), VideoQuality::Best);
    }

    #[test]
    fn test_video_best_selector() {
        assert_eq!(
            VideoQuality::Best.format_selector(),
            "bestvideo[ext=mp4]+bestaudio[ext=m4a]/best[ext=mp4]/best"
        );
    }

    #[test]
    fn test_video_bounded_selector() {
        assert_eq!(
            VideoQuality::P720.format_selector(),
            "bestvideo[height<=720][ext=mp4]+bestaudio[ext=m4a]/best[height<=720][ext=mp4]/best"
        );
    }
}
