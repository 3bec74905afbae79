use anyhow::{Context, Result};
use clap::Parser;
use srt2txt::interactive::run_interactive;
use srt2txt::output::{format_banner, OutputTarget};
use srt2txt::pipeline::{convert_file, write_stats, ConversionRequest};
use srt2txt::srt_converter::ConversionOptions;
use std::path::PathBuf;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "srt2txt")]
#[command(about = "Convert SubRip (.srt) subtitles into plain text")]
#[command(version)]
struct Args {
    /// Subtitle file to convert; starts the interactive prompt when omitted
    input: Option<PathBuf>,

    /// Keep one paragraph per subtitle block
    #[arg(short = 'p', long)]
    paragraphs: bool,

    /// Output file (default: input name with a .txt extension)
    #[arg(short = 'o', long, conflicts_with = "print")]
    output: Option<PathBuf>,

    /// Print the text instead of writing a file
    #[arg(long)]
    print: bool,

    /// Remove spaces before punctuation inside each cue
    #[arg(long)]
    tidy_punctuation: bool,

    /// Write run statistics as JSON to this path
    #[arg(long)]
    stats_out: Option<PathBuf>,

    /// Emit log records as JSON
    #[arg(long)]
    log_json: bool,
}

fn init_logging(json: bool) {
    // WHY: stdout carries converted text and prompts; logs mixed into it would
    // end up in `--print` output and break the interactive menu
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.compact().init();
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_json);

    info!(?args, "Parsed CLI arguments");

    let Some(input) = args.input.clone() else {
        let stdin = BufReader::new(tokio::io::stdin());
        run_interactive(stdin, tokio::io::stdout())
            .await
            .context("Interactive prompt failed")?;
        return Ok(());
    };

    if !input.exists() {
        anyhow::bail!("File '{}' not found.", input.display());
    }

    let output = match (args.print, args.output) {
        (true, _) => OutputTarget::Print,
        (false, Some(path)) => OutputTarget::File(path),
        (false, None) => OutputTarget::Derived,
    };

    let request = ConversionRequest {
        input,
        output,
        options: ConversionOptions {
            paragraph_mode: args.paragraphs,
            tidy_punctuation: args.tidy_punctuation,
        },
    };

    let report = convert_file(&request)
        .await
        .with_context(|| format!("Failed to convert {}", request.input.display()))?;

    if let Some(warning) = report.warning {
        eprintln!("Warning: {warning}");
    }

    match report.output_path {
        Some(ref path) => println!("Text saved to: {}", path.display()),
        None => print!("{}", format_banner("EXTRACTED TEXT:", &report.text)),
    }

    if let Some(ref stats_path) = args.stats_out {
        write_stats(stats_path, &report.stats)
            .await
            .with_context(|| format!("Failed to write stats to {}", stats_path.display()))?;
    }

    Ok(())
}
