use std::io::{self, BufRead, Write};

use yt_dlp::{
    AudioQuality, DEFAULT_OUTPUT_DIR, DownloadRequest, MediaFormat, PlaylistRange, VideoQuality
};

use crate::error::AppError;

const FORMAT_MENU: &[(MediaFormat, &str)] = &[
    (MediaFormat::Video, "MP4 (Video)"),
    (MediaFormat::Audio, "MP3 (Audio only)")
];

const VIDEO_MENU: &[(VideoQuality, &str)] = &[
    (VideoQuality::Best, "Best (Highest available)"),
    (VideoQuality::P2160, "2160p (4K)"),
    (VideoQuality::P1440, "1440p (2K)"),
    (VideoQuality::P1080, "1080p (Full HD)"),
    (VideoQuality::P720, "720p (HD)"),
    (VideoQuality::P480, "480p (SD)"),
    (VideoQuality::P360, "360p (Low)")
];

const AUDIO_MENU: &[(AudioQuality, &str)] = &[
    (AudioQuality::Kbps320, "Best (320k)"),
    (AudioQuality::Kbps256, "256k"),
    (AudioQuality::Kbps192, "192k"),
    (AudioQuality::Kbps128, "128k")
];

/// Line-based question sequence. End of input reads as a blank answer.
pub struct Prompter<R, W> {
    input: R,
    output: W
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn run(mut self) -> Result<DownloadRequest, AppError> {
        writeln!(self.output, "YouTube Downloader")?;
        writeln!(self.output, "{}", crate::output::RULE)?;
        writeln!(self.output)?;

        let url = self.ask("URL: ")?;
        if url.is_empty() {
            return Err(AppError::EmptyUrl);
        }

        let playlist = self.confirm("Is this a playlist? (y/N): ")?;

        writeln!(self.output)?;
        let format = self.choose("Choose format:", FORMAT_MENU)?;

        writeln!(self.output)?;
        let quality = match format {
            MediaFormat::Video => self.choose("Choose video quality:", VIDEO_MENU)?.as_tag(),
            MediaFormat::Audio => self.choose("Choose audio quality:", AUDIO_MENU)?.as_tag()
        };

        writeln!(self.output)?;
        let subtitles = self.confirm("Download subtitles? (y/N): ")?;
        let thumbnail = self.confirm("Embed thumbnail? (y/N): ")?;

        let mut output_dir = self.ask(&format!("Output directory (default: {DEFAULT_OUTPUT_DIR}): "))?;
        if output_dir.is_empty() {
            output_dir = DEFAULT_OUTPUT_DIR.to_string();
        }
        writeln!(self.output)?;

        Ok(DownloadRequest::new(url)
            .format(format)
            .quality(quality)
            .output_dir(output_dir)
            .playlist(playlist.then(PlaylistRange::default))
            .subtitles(subtitles)
            .thumbnail(thumbnail))
    }

    fn ask(&mut self, question: &str) -> io::Result<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }

    fn confirm(&mut self, question: &str) -> io::Result<bool> {
        Ok(self.ask(question)?.eq_ignore_ascii_case("y"))
    }

    /// Numbered menu; anything other than a listed number picks the first entry.
    fn choose<T: Copy>(&mut self, title: &str, options: &[(T, &str)]) -> io::Result<T> {
        writeln!(self.output, "{title}")?;
        for (i, (_, label)) in options.iter().enumerate() {
            writeln!(self.output, "  {}. {label}", i + 1)?;
        }

        let answer = self.ask(&format!("Select (1-{}): ", options.len()))?;
        let picked = options
            .iter()
            .enumerate()
            .find(|(i, _)| answer == (i + 1).to_string())
            .map_or(&options[0], |(_, option)| option);
        Ok(picked.0)
    }
}
