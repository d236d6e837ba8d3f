mod app;
mod cli;
mod error;
mod output;
mod prompt;

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use app::App;
use cli::Cli;
use error::AppError;
use prompt::Prompter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse_from(cli::normalize_args(std::env::args_os())) {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return ExitCode::from(cli::parse_exit_code(&err));
        }
    };
    init_tracing(cli.verbose);

    let app = App::new(cli.client());
    match run(&app, &cli, io::stdin().lock(), io::stdout()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "exiting with failure");
            app.print_error(&err);
            if matches!(err, AppError::MissingUrl) {
                eprintln!();
                let _ = Cli::command().print_help();
            }
            err.exit_code()
        }
    }
}

async fn run<R: BufRead, W: Write>(
    app: &App,
    cli: &Cli,
    input: R,
    output: W
) -> Result<(), AppError> {
    // Flag mode must have a URL before anything is spawned.
    let direct = if cli.interactive {
        None
    } else {
        Some(cli.direct_request()?)
    };

    app.ensure_tool().await?;

    let request = match direct {
        Some(request) => request,
        None => Prompter::new(input, output).run()?
    };

    app.run(&request).await?;
    Ok(())
}

fn init_tracing(verbose: u8) {
    let default_filter = match verbose {
        0 => "ytdl=warn,yt_dlp=warn",
        1 => "ytdl=debug,yt_dlp=debug",
        _ => "ytdl=trace,yt_dlp=trace"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into())
        )
        .init();
}
