use std::path::Path;
use std::time::Duration;

use yt_dlp::{DownloadRequest, MediaFormat};

use crate::error::AppError;

pub const RULE: &str = "═══════════════════════════════════════";

pub struct OutputHandler;

impl OutputHandler {
    pub fn print_summary(&self, request: &DownloadRequest) {
        println!("Download Configuration");
        println!("{RULE}");
        println!("URL:     {}", request.url);
        println!("Format:  {}", request.format.as_str().to_uppercase());
        println!("Quality: {}", resolved_quality(request));
        println!("Output:  {}", request.output_dir.display());
        if let Some(ref name) = request.output_name {
            println!("Name:    {name}");
        }
        if let Some(range) = request.playlist {
            match range.end {
                Some(end) => println!("Playlist: items {} to {end}", range.start),
                None if range.start > 1 => println!("Playlist: from item {}", range.start),
                None => println!("Playlist: yes")
            }
        }
        println!("{RULE}");
        println!();
    }

    pub fn print_download_start(&self) {
        println!("Starting download...");
        println!();
    }

    pub fn print_download_complete(&self, elapsed: Duration, output_dir: &Path) {
        println!();
        println!("{RULE}");
        println!("Download completed in {}", format_elapsed(elapsed));
        println!("Files saved to: {}", output_dir.display());
        println!("{RULE}");
    }

    pub fn print_error(&self, error: &AppError) {
        match error {
            AppError::ToolMissing(_) => {
                eprintln!("Error: {error}");
                eprintln!("Install with: pip install yt-dlp");
                eprintln!("          or: brew install yt-dlp (macOS)");
                eprintln!("          or: sudo apt install yt-dlp (Ubuntu/Debian)");
            }
            AppError::MissingUrl => {
                eprintln!("Error: {error}");
                eprintln!("Usage: ytdl --url <URL> [OPTIONS]");
                eprintln!("   or: ytdl --interactive");
            }
            _ => eprintln!("\nError: {error}")
        }
    }
}

/// Shows the tag the download will actually use after fallback.
fn resolved_quality(request: &DownloadRequest) -> &'static str {
    match request.format {
        MediaFormat::Audio => request.audio_quality().as_tag(),
        MediaFormat::Video => request.video_quality().as_tag()
    }
}

/// Rounds to whole seconds and drops leading zero units: `45s`, `2m 3s`,
/// `1h 0m 3s`.
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = (elapsed.as_millis() + 500) / 1000;
    let hours = secs / 3600;
    let mins = (secs % 3600) / 60;
    let secs = secs % 60;

    if hours > 0 {
        format!("{hours}h {mins}m {secs}s")
    } else if mins > 0 {
        format!("{mins}m {secs}s")
    } else {
        format!("{secs}s")
    }
}
