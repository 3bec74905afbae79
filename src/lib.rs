pub mod error;
pub mod interactive;
pub mod output;
pub mod pipeline;
pub mod reader;
pub mod srt_converter;

// Re-export main types for convenient access
pub use error::{ConversionWarning, ConvertError};
pub use srt_converter::{
    Block, ConversionOptions, ConversionResult, Cue, Encoding, RawDocument, SrtConverter,
};

// Re-export file-level entry points
pub use output::{default_output_path, OutputTarget};
pub use pipeline::{convert_file, write_stats, ConversionReport, ConversionRequest, ConversionStats};
