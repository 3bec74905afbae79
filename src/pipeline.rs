// One conversion call: read → decode → segment → parse → render → write
// Sequential from start to finish; the whole input is in memory before output begins

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

use crate::error::{ConversionWarning, ConvertError, Result};
use crate::output::{write_output, OutputTarget};
use crate::reader::read_subtitle_file;
use crate::srt_converter::{ConversionOptions, Encoding, SrtConverter};

/// Everything one invocation needs
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    pub input: PathBuf,
    pub output: OutputTarget,
    pub options: ConversionOptions,
}

/// Run statistics written by `--stats-out`
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ConversionStats {
    pub input_path: String,
    /// None when the text was returned for printing
    pub output_path: Option<String>,
    pub encoding: Encoding,
    pub paragraph_mode: bool,
    pub bytes_read: u64,
    /// Blocks found, empty ones included
    pub blocks: u64,
    /// Cues that contributed text
    pub cues: u64,
    pub empty_cues: u64,
    /// Blocks missing their index or timestamp line
    pub malformed_blocks: u64,
    pub chars_written: u64,
    pub processing_time_ms: u64,
    pub warnings: Vec<String>,
}

/// Outcome of a successful conversion
#[derive(Debug, Clone)]
pub struct ConversionReport {
    pub text: String,
    pub output_path: Option<PathBuf>,
    pub warning: Option<ConversionWarning>,
    pub stats: ConversionStats,
}

/// Convert one subtitle file as described by `request`
///
/// Fatal errors abort before anything is written. An empty result is not an
/// error: the (empty) output is still written and the report carries a warning.
pub async fn convert_file(request: &ConversionRequest) -> Result<ConversionReport> {
    let start_time = std::time::Instant::now();
    let converter = SrtConverter::new(request.options)?;

    let (bytes, read_stats) = read_subtitle_file(&request.input).await?;
    let result = converter.convert_bytes(&bytes)?;
    drop(bytes);

    let encoding = result.encoding();
    let blocks = result.block_count() as u64;
    let empty_cues = result.empty_cue_count() as u64;
    let malformed_blocks = result.malformed_block_count() as u64;
    let warning = result.warning();

    if malformed_blocks > 0 {
        info!("{} blocks were missing an index or timestamp line", malformed_blocks);
    }
    // WHY: callers surface the warning to the user from the report; logging it at
    // warn level as well would print it twice on the default filter
    if let Some(warning) = warning {
        info!("{}: {}", request.input.display(), warning);
    }

    let text = result.render();

    let output_path = request.output.resolve(&request.input);
    if let Some(ref path) = output_path {
        write_output(path, &text).await?;
    }

    let stats = ConversionStats {
        input_path: request.input.display().to_string(),
        output_path: output_path.as_ref().map(|p| p.display().to_string()),
        encoding,
        paragraph_mode: request.options.paragraph_mode,
        bytes_read: read_stats.bytes_read,
        blocks,
        cues: blocks - empty_cues,
        empty_cues,
        malformed_blocks,
        chars_written: text.chars().count() as u64,
        processing_time_ms: start_time.elapsed().as_millis() as u64,
        warnings: warning.iter().map(ToString::to_string).collect(),
    };

    info!(
        "Converted {} ({}): {} blocks, {} cues, {} chars in {}ms",
        stats.input_path,
        stats.encoding,
        stats.blocks,
        stats.cues,
        stats.chars_written,
        stats.processing_time_ms
    );

    Ok(ConversionReport {
        text,
        output_path,
        warning,
        stats,
    })
}

/// Save run statistics as pretty-printed JSON
pub async fn write_stats(path: &Path, stats: &ConversionStats) -> Result<()> {
    let stats_error = |source: std::io::Error| ConvertError::Stats {
        path: path.to_path_buf(),
        source,
    };

    let content = serde_json::to_string_pretty(stats).map_err(|e| stats_error(e.into()))?;
    fs::write(path, content).await.map_err(stats_error)?;

    info!("Statistics written to {}", path.display());
    Ok(())
}
