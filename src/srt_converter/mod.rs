// SubRip parsing core: decode → segment → parse blocks → render
// Every stage is pure; file I/O lives in reader/output/pipeline

use regex_automata::meta::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ConversionWarning, ConvertError, Result};

pub mod cue_parser;
pub mod decoding;
pub mod normalization;
pub mod rendering;
pub mod segmentation;

pub use cue_parser::parse_block;
pub use decoding::decode;
pub use normalization::{join_cue_lines, join_cue_lines_into, tidy_punctuation};
pub use rendering::render;
pub use segmentation::segment;

/// Timecode pair `HH:MM:SS,mmm --> HH:MM:SS,mmm`, optionally followed by
/// position hints some encoders append after the end time
pub const TIMESTAMP_PATTERN: &str =
    r"^[0-9]+:[0-9]{2}:[0-9]{2}[,.][0-9]{3}[ \t]*-->[ \t]*[0-9]+:[0-9]{2}:[0-9]{2}[,.][0-9]{3}";

/// Character encoding a document was decoded from
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Encoding {
    Utf8,
    Latin1,
    Utf16Le,
    Utf16Be,
}

impl std::fmt::Display for Encoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Encoding::Utf8 => "UTF-8",
            Encoding::Latin1 => "Latin-1",
            Encoding::Utf16Le => "UTF-16LE",
            Encoding::Utf16Be => "UTF-16BE",
        };
        f.write_str(name)
    }
}

/// Decoded file content with `\n` line breaks only
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDocument {
    pub text: String,
    pub encoding: Encoding,
}

impl RawDocument {
    /// Split the document into its subtitle blocks
    pub fn blocks(&self) -> Vec<Block<'_>> {
        segment(&self.text)
    }
}

/// Contiguous run of non-blank lines, borrowed from the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block<'a> {
    pub lines: Vec<&'a str>,
}

/// Normalized text of one block
///
/// `text` is empty exactly when the block had no text lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cue {
    pub text: String,
    /// Block started with a digit-only index line
    pub has_index: bool,
    /// Block carried a timestamp line in the expected position
    pub has_timestamp: bool,
}

impl Cue {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Block lacked its index or timestamp line
    pub fn is_malformed(&self) -> bool {
        !self.has_index || !self.has_timestamp
    }
}

/// Caller-selected output shape
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionOptions {
    /// One paragraph per block instead of one continuous paragraph
    pub paragraph_mode: bool,
    /// Remove whitespace before punctuation and collapse whitespace runs in each cue
    pub tidy_punctuation: bool,
}

/// Ordered cues of one document, consumed once by [`ConversionResult::render`]
#[derive(Debug)]
pub struct ConversionResult {
    cues: Vec<Cue>,
    encoding: Encoding,
    options: ConversionOptions,
}

impl ConversionResult {
    pub fn cues(&self) -> &[Cue] {
        &self.cues
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    pub fn options(&self) -> ConversionOptions {
        self.options
    }

    /// Number of blocks found, including the ones that produced empty cues
    pub fn block_count(&self) -> usize {
        self.cues.len()
    }

    pub fn empty_cue_count(&self) -> usize {
        self.cues.iter().filter(|cue| cue.is_empty()).count()
    }

    pub fn malformed_block_count(&self) -> usize {
        self.cues.iter().filter(|cue| cue.is_malformed()).count()
    }

    /// Warning to surface when the rendered output will be empty
    pub fn warning(&self) -> Option<ConversionWarning> {
        if self.cues.is_empty() {
            Some(ConversionWarning::NoBlocks)
        } else if self.cues.iter().all(Cue::is_empty) {
            Some(ConversionWarning::AllCuesEmpty { blocks: self.cues.len() })
        } else {
            None
        }
    }

    /// Produce the final text
    pub fn render(self) -> String {
        if self.options.tidy_punctuation {
            let tidied: Vec<Cue> = self
                .cues
                .into_iter()
                .map(|cue| Cue { text: tidy_punctuation(&cue.text), ..cue })
                .collect();
            render(&tidied, self.options.paragraph_mode)
        } else {
            render(&self.cues, self.options.paragraph_mode)
        }
    }
}

/// SubRip to plain text converter holding its compiled timestamp matcher
pub struct SrtConverter {
    timestamp: Regex,
    options: ConversionOptions,
}

impl SrtConverter {
    /// Create converter with the given output options
    pub fn new(options: ConversionOptions) -> Result<Self> {
        let timestamp = Regex::new(TIMESTAMP_PATTERN)
            .map_err(|e| ConvertError::Pattern(e.to_string()))?;
        Ok(Self { timestamp, options })
    }

    pub fn options(&self) -> ConversionOptions {
        self.options
    }

    /// True when `line` is a SubRip timing line
    pub fn is_timestamp_line(&self, line: &str) -> bool {
        self.timestamp.is_match(line.trim())
    }

    pub fn decode(&self, bytes: &[u8]) -> Result<RawDocument> {
        decode(bytes)
    }

    pub fn parse_block(&self, block: &Block<'_>) -> Cue {
        parse_block(block, &self.timestamp)
    }

    /// Segment and parse an already decoded document
    pub fn convert_document(&self, document: RawDocument) -> ConversionResult {
        let cues: Vec<Cue> = document
            .blocks()
            .iter()
            .map(|block| self.parse_block(block))
            .collect();

        debug!(
            "Parsed {} blocks ({} empty) from {} document",
            cues.len(),
            cues.iter().filter(|cue| cue.is_empty()).count(),
            document.encoding
        );

        ConversionResult {
            cues,
            encoding: document.encoding,
            options: self.options,
        }
    }

    /// Decode, segment and parse raw file bytes
    pub fn convert_bytes(&self, bytes: &[u8]) -> Result<ConversionResult> {
        let document = self.decode(bytes)?;
        Ok(self.convert_document(document))
    }

    /// Full pass from raw bytes to output text
    pub fn convert_to_string(&self, bytes: &[u8]) -> Result<String> {
        Ok(self.convert_bytes(bytes)?.render())
    }
}
