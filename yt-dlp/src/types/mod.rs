mod options;
mod quality;

pub use options::{
    DEFAULT_OUTPUT_DIR, DownloadRequest, MediaFormat, PlaylistRange, SUBTITLE_LANGS,
    TITLE_TEMPLATE
};
pub use quality::{AudioQuality, VideoQuality};
