// Menu-driven prompt used when the binary is started without arguments
// Generic over its streams so tests can script a whole session

use std::path::PathBuf;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines};
use tracing::{debug, warn};

use crate::output::{format_banner, OutputTarget};
use crate::pipeline::{convert_file, ConversionRequest};
use crate::srt_converter::ConversionOptions;

const MENU: &str = "\nOptions:\n1. Convert SRT to continuous text\n2. Convert keeping paragraphs\n3. Quit\n";

async fn say<W: AsyncWrite + Unpin>(out: &mut W, text: &str) -> std::io::Result<()> {
    out.write_all(text.as_bytes()).await?;
    out.flush().await
}

/// Show `question` and read one trimmed answer; None on end of input
async fn ask<R, W>(lines: &mut Lines<R>, out: &mut W, question: &str) -> std::io::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    say(out, question).await?;
    Ok(lines.next_line().await?.map(|answer| answer.trim().to_string()))
}

/// Run the prompt until the user quits or input ends
///
/// Conversion failures are reported and the menu is shown again; only I/O
/// errors on the prompt streams themselves end the session with an error.
pub async fn run_interactive<R, W>(input: R, mut out: W) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    say(&mut out, "=== SRT TO TEXT CONVERTER ===\n").await?;

    loop {
        say(&mut out, MENU).await?;
        let Some(choice) = ask(&mut lines, &mut out, "\nChoose an option (1-3): ").await? else {
            break;
        };

        let paragraph_mode = match choice.as_str() {
            "1" => false,
            "2" => true,
            "3" => break,
            _ => {
                say(&mut out, "Invalid option!\n").await?;
                continue;
            }
        };

        let Some(path) = ask(&mut lines, &mut out, "Path to SRT file: ").await? else {
            break;
        };
        let input = PathBuf::from(path);
        if !tokio::fs::try_exists(&input).await.unwrap_or(false) {
            say(&mut out, "File not found!\n").await?;
            continue;
        }

        let Some(save) = ask(&mut lines, &mut out, "Save to file? (y/n): ").await? else {
            break;
        };
        let output = if matches!(save.to_lowercase().as_str(), "y" | "yes") {
            let Some(name) = ask(&mut lines, &mut out, "Output file name: ").await? else {
                break;
            };
            if name.is_empty() {
                OutputTarget::Derived
            } else {
                OutputTarget::File(PathBuf::from(name))
            }
        } else {
            OutputTarget::Print
        };

        let request = ConversionRequest {
            input,
            output,
            options: ConversionOptions { paragraph_mode, ..Default::default() },
        };
        debug!(?request, "Interactive conversion requested");

        match convert_file(&request).await {
            Ok(report) => {
                if let Some(warning) = report.warning {
                    say(&mut out, &format!("Warning: {warning}\n")).await?;
                }
                match report.output_path {
                    Some(path) => say(&mut out, &format!("Text saved to: {}\n", path.display())).await?,
                    None => say(&mut out, &format_banner("RESULT:", &report.text)).await?,
                }
            }
            Err(e) => {
                warn!("Interactive conversion failed: {}", e);
                say(&mut out, &format!("Error: {e}\n")).await?;
            }
        }
    }

    Ok(())
}
