//! Async Rust wrapper for running yt-dlp downloads.
//!
//! A [`DownloadRequest`] describes one download. [`download_args`] turns it
//! into the argument list yt-dlp expects, and [`YtDlp`] runs the tool with its
//! output attached to the current terminal.
//!
//! # Example
//!
//! ```no_run
//! use yt_dlp::{DownloadRequest, MediaFormat, YtDlp};
//!
//! #[tokio::main]
//! async fn main() -> yt_dlp::Result<()> {
//!     let client = YtDlp::new();
//!
//!     // Check that yt-dlp is available
//!     let version = client.check_binary().await?;
//!     println!("yt-dlp version: {}", version);
//!
//!     let request = DownloadRequest::new("https://www.youtube.com/watch?v=dQw4w9WgXcQ")
//!         .format(MediaFormat::Audio)
//!         .quality("192k");
//!     let elapsed = client.download(&request).await?;
//!     println!("took {:?}", elapsed);
//!
//!     Ok(())
//! }
//! ```

mod client;
mod command;
pub mod error;
pub mod types;

pub use client::YtDlp;
pub use command::{CommandBuilder, download_args};
pub use error::{Error, Result};
pub use types::{
    AudioQuality, DEFAULT_OUTPUT_DIR, DownloadRequest, MediaFormat, PlaylistRange, VideoQuality
};
