use std::ffi::OsString;
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use yt_dlp::{DEFAULT_OUTPUT_DIR, DownloadRequest, MediaFormat, PlaylistRange, YtDlp};

use crate::error::AppError;

/// Download video or audio from a URL with yt-dlp
#[derive(Parser, Debug)]
#[command(name = "ytdl", author, version, about, long_about = None)]
pub struct Cli {
    /// Video or playlist URL
    #[arg(long)]
    pub url: Option<String>,

    /// Output format: mp3 or mp4
    #[arg(long, default_value = "mp4")]
    pub format: String,

    /// Quality: best, 2160p, 1440p, 1080p, 720p, 480p, 360p (video) or best, 320k, 256k, 192k, 128k (audio)
    #[arg(long, default_value = "best")]
    pub quality: String,

    /// Output directory
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Custom output filename, without extension
    #[arg(long)]
    pub name: Option<String>,

    /// Download the entire playlist
    #[arg(long)]
    pub playlist: bool,

    /// Playlist start number
    #[arg(long, default_value_t = 1)]
    pub start: u32,

    /// Playlist end number (0 = all)
    #[arg(long, default_value_t = 0)]
    pub end: u32,

    /// Download subtitles
    #[arg(long)]
    pub subs: bool,

    /// Embed thumbnail
    #[arg(long)]
    pub thumb: bool,

    /// Ask for every option on standard input
    #[arg(long)]
    pub interactive: bool,

    /// yt-dlp executable
    #[arg(long, env = "YTDL_BINARY", default_value = "yt-dlp")]
    pub binary: PathBuf,

    /// Cookies file handed to yt-dlp
    #[arg(long, env = "YTDL_COOKIES")]
    pub cookies: Option<PathBuf>,

    /// Location of the ffmpeg binary or its directory
    #[arg(long, env = "YTDL_FFMPEG")]
    pub ffmpeg_location: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8
}

/// Long flags that may also be spelled with a single dash, as in `-url`.
const LONG_FLAGS: &[&str] = &[
    "url",
    "format",
    "quality",
    "output",
    "name",
    "playlist",
    "start",
    "end",
    "subs",
    "thumb",
    "interactive",
    "binary",
    "cookies",
    "ffmpeg-location",
    "verbose",
    "help",
    "version"
];

/// Rewrites `-url`/`-start=3` into their `--` form. Arguments after `--` are
/// left alone.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>
{
    let mut past_terminator = false;
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if past_terminator {
                return arg;
            }
            if arg == "--" {
                past_terminator = true;
                return arg;
            }
            match arg.to_str() {
                Some(s) if is_single_dash_long(s) => OsString::from(format!("-{s}")),
                _ => arg
            }
        })
        .collect()
}

fn is_single_dash_long(arg: &str) -> bool {
    let Some(rest) = arg.strip_prefix('-') else {
        return false;
    };
    if rest.starts_with('-') {
        return false;
    }
    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
    LONG_FLAGS.contains(&name)
}

/// Exit status for a flag parsing failure. Help and version output succeed,
/// everything else is a usage error.
pub fn parse_exit_code(err: &clap::Error) -> u8 {
    u8::from(err.use_stderr())
}

impl Cli {
    /// Builds the request from flags alone.
    pub fn direct_request(&self) -> Result<DownloadRequest, AppError> {
        let Some(url) = self.url.as_deref().map(str::trim).filter(|u| !u.is_empty()) else {
            return Err(AppError::MissingUrl);
        };

        let playlist = self
            .playlist
            .then(|| PlaylistRange::new(self.start, self.end));

        Ok(DownloadRequest::new(url)
            .format(MediaFormat::from_tag(self.format.trim()))
            .quality(self.quality.trim())
            .output_dir(&self.output)
            .output_name(self.name.clone())
            .playlist(playlist)
            .subtitles(self.subs)
            .thumbnail(self.thumb))
    }

    pub fn client(&self) -> YtDlp {
        let mut client = YtDlp::with_binary(&self.binary);
        client.set_cookies_file(self.cookies.clone());
        client.set_ffmpeg_location(self.ffmpeg_location.clone());
        client
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("ytdl").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&["--url", "https://x/y"]);
        let request = cli.direct_request().unwrap();
        assert_eq!(request.format, MediaFormat::Video);
        assert_eq!(request.quality, "best");
        assert_eq!(request.output_dir, PathBuf::from("./downloads"));
        assert!(request.playlist.is_none());
        assert!(!cli.interactive);
    }

    #[test]
    fn test_missing_url() {
        let cli = parse(&["--format", "mp3"]);
        assert!(matches!(cli.direct_request(), Err(AppError::MissingUrl)));

        let cli = parse(&["--url", "   "]);
        assert!(matches!(cli.direct_request(), Err(AppError::MissingUrl)));
    }

    #[test]
    fn test_audio_flags() {
        let cli = parse(&[
            "--url", "https://x/y", "--format", "mp3", "--quality", "192k", "--output", "./d"
        ]);
        let request = cli.direct_request().unwrap();
        assert_eq!(request.format, MediaFormat::Audio);
        assert_eq!(request.quality, "192k");
        assert_eq!(request.output_dir, PathBuf::from("./d"));
    }

    #[test]
    fn test_format_values() {
        let format = |value: &str| parse(&["--url", "u", "--format", value]).direct_request().unwrap().format;
        assert_eq!(format("audio"), MediaFormat::Audio);
        assert_eq!(format("video"), MediaFormat::Video);
        assert_eq!(format("flac"), MediaFormat::Video);
    }

    #[test]
    fn test_playlist_range_only_with_playlist() {
        let cli = parse(&["--url", "u", "--start", "5", "--end", "9"]);
        assert!(cli.direct_request().unwrap().playlist.is_none());

        let cli = parse(&["--url", "u", "--playlist", "--start", "5", "--end", "9"]);
        assert_eq!(
            cli.direct_request().unwrap().playlist,
            Some(PlaylistRange { start: 5, end: Some(9) })
        );
    }

    #[test]
    fn test_start_zero_is_clamped() {
        let cli = parse(&["--url", "u", "--playlist", "--start", "0"]);
        assert_eq!(cli.direct_request().unwrap().playlist, Some(PlaylistRange::default()));
    }

    #[test]
    fn test_single_dash_flags() {
        let cli = Cli::try_parse_from(normalize_args([
            "ytdl", "-url", "https://x/y", "-format", "mp3", "-playlist", "-start=3", "-thumb", "-v"
        ]))
        .unwrap();
        let request = cli.direct_request().unwrap();
        assert_eq!(request.url, "https://x/y");
        assert_eq!(request.format, MediaFormat::Audio);
        assert_eq!(request.playlist, Some(PlaylistRange { start: 3, end: None }));
        assert!(request.thumbnail);
        assert_eq!(cli.verbose, 1);
    }

    #[test]
    fn test_normalize_leaves_values_and_terminator() {
        let args = normalize_args(["ytdl", "--name", "-x", "-unknown", "--", "-url"]);
        assert_eq!(args, vec!["ytdl", "--name", "-x", "-unknown", "--", "-url"]);
    }

    #[test]
    fn test_parse_errors_exit_with_one() {
        let err = Cli::try_parse_from(["ytdl", "--start", "abc"]).unwrap_err();
        assert_eq!(parse_exit_code(&err), 1);
        let err = Cli::try_parse_from(["ytdl", "--bogus"]).unwrap_err();
        assert_eq!(parse_exit_code(&err), 1);
        let err = Cli::try_parse_from(["ytdl", "--help"]).unwrap_err();
        assert_eq!(parse_exit_code(&err), 0);
    }

    #[test]
    fn test_name_and_toggles() {
        let cli = parse(&["--url", "u", "--name", "clip", "--subs", "--thumb", "-vv"]);
        let request = cli.direct_request().unwrap();
        assert_eq!(request.output_name.as_deref(), Some("clip"));
        assert!(request.subtitles);
        assert!(request.thumbnail);
        assert_eq!(cli.verbose, 2);
    }
}
