// Subtitle fixtures with known conversions
// WHY: golden-file testing requires deterministic input/output pairs

#![allow(dead_code)]

/// Two well-formed cues
pub const SIMPLE_SRT: &str = "1
00:00:01,000 --> 00:00:02,000
Hello, everyone.

2
00:00:02,500 --> 00:00:04,000
Welcome!
";

pub const SIMPLE_CONTINUOUS: &str = "Hello, everyone. Welcome!";

pub const SIMPLE_PARAGRAPHS: &str = "Hello, everyone.

Welcome!";

/// Wrapped cues, markup, a cue without index, an empty cue and extra blank lines
pub const MESSY_SRT: &str = "

1
00:00:01,000 --> 00:00:03,000
Line one
continues here

2
00:00:03,500 --> 00:00:05,000
<i>It's raining.</i>



00:00:05,500 --> 00:00:07,000
No index on this one.

4
00:00:07,500 --> 00:00:08,000

5
00:00:08,500 --> 00:00:10,000
♪ Closing song ♪
- Bye!
- Bye.

";

pub const MESSY_CONTINUOUS: &str =
    "Line one continues here <i>It's raining.</i> No index on this one. ♪ Closing song ♪ - Bye! - Bye.";

pub const MESSY_PARAGRAPHS: &str = "Line one continues here

<i>It's raining.</i>

No index on this one.

♪ Closing song ♪ - Bye! - Bye.";

/// Windows line endings and surrounding whitespace
pub const CRLF_SRT: &str = "1\r\n00:00:01,000 --> 00:00:02,000\r\n  First line  \r\n\r\n2\r\n00:00:03,000 --> 00:00:04,000\r\nSecond line\r\n\r\n";

pub const CRLF_CONTINUOUS: &str = "First line Second line";

/// Cues spoken with loose punctuation spacing
pub const LOOSE_PUNCTUATION_SRT: &str = "1
00:00:01,000 --> 00:00:02,000
Are you there ?
I can't hear you !

2
00:00:03,000 --> 00:00:04,000
Yes ; barely .
";

pub const LOOSE_PUNCTUATION_TIDY_PARAGRAPHS: &str = "Are you there? I can't hear you!

Yes; barely.";

/// Latin-1 encoded cue reading "Voilà, café!"
pub fn latin1_srt() -> Vec<u8> {
    let mut bytes = b"1\n00:00:01,000 --> 00:00:02,000\nVoil".to_vec();
    bytes.push(0xE0);
    bytes.extend_from_slice(b", caf");
    bytes.push(0xE9);
    bytes.extend_from_slice(b"!\n");
    bytes
}

pub const LATIN1_EXPECTED: &str = "Voilà, café!";

/// UTF-16LE encoding of SIMPLE_SRT with byte-order mark and CRLF line endings
pub fn utf16le_srt() -> Vec<u8> {
    let mut bytes = vec![0xFF, 0xFE];
    for unit in SIMPLE_SRT.replace('\n', "\r\n").encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    bytes
}

/// SIMPLE_SRT preceded by a UTF-8 byte-order mark
pub fn utf8_bom_srt() -> Vec<u8> {
    let mut bytes = vec![0xEF, 0xBB, 0xBF];
    bytes.extend_from_slice(SIMPLE_SRT.as_bytes());
    bytes
}

/// Many numbered cues for shape and throughput checks
pub fn generate_large_srt(cues: usize) -> String {
    let mut result = String::new();

    for i in 1..=cues {
        let start = i * 2;
        result.push_str(&format!(
            "{i}\n00:{:02}:{:02},000 --> 00:{:02}:{:02},500\nThis is cue number {i}.\nIt wraps onto a second line.\n\n",
            (start / 60) % 60,
            start % 60,
            ((start + 1) / 60) % 60,
            (start + 1) % 60,
        ));
    }

    result
}
