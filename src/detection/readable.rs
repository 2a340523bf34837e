//! Human-readable string detection
//!
//! Decides whether a raw payload fragment contains a natural-language-like run
//! of characters. The scan is a single linear pass driven by two predicates:
//!
//! - [`is_readable_byte`]: is the byte a constituent of readable text?
//! - [`is_plausible_pair`]: does a two-byte window look like a plausible
//!   language, numeric or structural sequence?
//!
//! Accepted characters are recorded into a caller-supplied output buffer. A run
//! that closes without exceeding the threshold is erased from the output again,
//! so on success the buffer holds exactly the accepted run.
//!
//! ## Usage
//!
//! ```rust
//! use payload_inspect::bigrams::BigramTable;
//! use payload_inspect::detection::readable::has_human_readable_string;
//!
//! let bigrams = BigramTable::from_keys([*b"he", *b"ll", *b"ow", *b"or", *b"ld"]);
//! let mut out = [0u8; 32];
//!
//! assert!(has_human_readable_string(&bigrams, b"\x01\x02helloworld\x00\x00", 4, &mut out));
//! assert_eq!(&out[..10], b"helloworld");
//! assert_eq!(out[10], 0);
//! ```

use crate::bigrams::BigramSet;
use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

/// Terminating marker written after valid output content
pub const SENTINEL: u8 = 0;

/// Punctuation that may appear inside readable runs (URLs, hostnames, e-mail)
const ALLOWED_PUNCTUATION: [u8; 4] = [b'.', b' ', b'@', b'/'];

/// Returns `true` for the structural characters allowed inside readable text
#[inline]
pub fn is_allowed_punctuation(b: u8) -> bool {
    ALLOWED_PUNCTUATION.contains(&b)
}

/// Returns `true` if `b` is ASCII alphanumeric or allow-listed punctuation
#[inline]
pub fn is_readable_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || is_allowed_punctuation(b)
}

/// Check whether two adjacent bytes form a plausible readable sequence.
///
/// Precedence:
/// 1. two decimal digits are always accepted
/// 2. a pair touching allow-listed punctuation is always accepted
/// 3. otherwise the lower-cased pair must be in `bigrams`
#[inline]
pub fn is_plausible_pair<B: BigramSet + ?Sized>(bigrams: &B, b0: u8, b1: u8) -> bool {
    if b0.is_ascii_digit() && b1.is_ascii_digit() {
        return true;
    }
    if is_allowed_punctuation(b0) || is_allowed_punctuation(b1) {
        return true;
    }
    bigrams.contains([b0.to_ascii_lowercase(), b1.to_ascii_lowercase()])
}

/// Result of a single scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanOutcome {
    /// Whether a run longer than the threshold was found
    pub found: bool,
    /// Logical length of the accepted run (0 when nothing was found)
    pub run_len: usize,
    /// Bytes of the run actually recorded in the output buffer
    pub written: usize,
}

impl ScanOutcome {
    const NOT_FOUND: ScanOutcome = ScanOutcome {
        found: false,
        run_len: 0,
        written: 0,
    };
}

/// Bounded write cursor over the caller's output buffer.
///
/// The last slot is reserved for the sentinel, so at most `len - 1` bytes of
/// content are ever stored; further pushes are dropped.
struct OutputCursor<'o> {
    buf: &'o mut [u8],
    limit: usize,
    pos: usize,
    run_start: usize,
}

impl<'o> OutputCursor<'o> {
    /// `buf` must be non-empty
    fn new(buf: &'o mut [u8]) -> Self {
        let limit = buf.len() - 1;
        buf[0] = SENTINEL;
        buf[limit] = SENTINEL;
        Self {
            buf,
            limit,
            pos: 0,
            run_start: 0,
        }
    }

    #[inline]
    fn push(&mut self, b: u8) {
        if self.pos < self.limit {
            self.buf[self.pos] = b;
            self.pos += 1;
        }
    }

    /// Erase everything written since the current run began
    fn rollback(&mut self) {
        self.pos = self.run_start;
        self.buf[self.pos] = SENTINEL;
        self.run_start = self.pos;
    }

    /// Terminate the accepted run and report how many bytes it occupies
    fn seal(&mut self) -> usize {
        self.buf[self.pos] = SENTINEL;
        self.pos - self.run_start
    }
}

/// Scan `payload` for a readable run longer than `min_match_len`.
///
/// The accepted run (truncated to `out.len() - 1` bytes) is written to `out`
/// followed by [`SENTINEL`]. Acceptance depends only on the logical run length,
/// so a long run is still reported when `out` is too small to hold it.
///
/// Positions `0..=payload.len() - 3` are scan starts; the final two bytes are
/// only ever read as lookahead. A run still open when the scan range is
/// exhausted is closed as if a non-readable byte had followed it.
///
/// Empty or very short payloads and an empty `out` yield a not-found outcome.
pub fn scan<B: BigramSet + ?Sized>(
    bigrams: &B,
    payload: &[u8],
    min_match_len: usize,
    out: &mut [u8],
) -> ScanOutcome {
    if out.is_empty() {
        warn!("Readable-string scan called with zero output capacity");
        return ScanOutcome::NOT_FOUND;
    }

    let mut cursor = OutputCursor::new(out);
    let scan_end = payload.len().saturating_sub(2);
    let mut run_len = 0usize;
    let mut building = false;
    let mut i = 0usize;

    while i < scan_end {
        let (b0, b1) = (payload[i], payload[i + 1]);

        if is_readable_byte(b0) && is_readable_byte(b1) && is_plausible_pair(bigrams, b0, b1) {
            cursor.push(b0);
            cursor.push(b1);
            run_len += 2;
            building = true;
            i += 2;
            continue;
        }

        if building {
            if is_readable_byte(b0) {
                cursor.push(b0);
                run_len += 1;
            } else if run_len > min_match_len {
                trace!(offset = i, run_len, "Readable run accepted");
                let written = cursor.seal();
                return ScanOutcome {
                    found: true,
                    run_len,
                    written,
                };
            } else {
                trace!(offset = i, run_len, "Readable run rejected");
                cursor.rollback();
                run_len = 0;
                building = false;
            }
        }

        i += 1;
    }

    if building {
        if run_len > min_match_len {
            trace!(run_len, "Readable run accepted at end of payload");
            let written = cursor.seal();
            return ScanOutcome {
                found: true,
                run_len,
                written,
            };
        }
        trace!(run_len, "Readable run rejected at end of payload");
        cursor.rollback();
    }

    ScanOutcome::NOT_FOUND
}

/// Boolean form of [`scan`]: `true` if a readable run longer than
/// `min_match_len` was found and recorded into `out`.
pub fn has_human_readable_string<B: BigramSet + ?Sized>(
    bigrams: &B,
    payload: &[u8],
    min_match_len: usize,
    out: &mut [u8],
) -> bool {
    scan(bigrams, payload, min_match_len, out).found
}

/// Readable run returned by [`find_readable_string`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadableMatch {
    /// Recorded text (lossy UTF-8, truncated to the requested capacity)
    pub text: String,
    /// Logical length of the run in the payload
    pub run_len: usize,
}

/// Owned convenience wrapper around [`scan`] that allocates its own output
/// buffer of `capacity` bytes.
pub fn find_readable_string<B: BigramSet + ?Sized>(
    bigrams: &B,
    payload: &[u8],
    min_match_len: usize,
    capacity: usize,
) -> Option<ReadableMatch> {
    let mut out = vec![SENTINEL; capacity];
    let outcome = scan(bigrams, payload, min_match_len, &mut out);
    if !outcome.found {
        return None;
    }

    Some(ReadableMatch {
        text: String::from_utf8_lossy(&out[..outcome.written]).into_owned(),
        run_len: outcome.run_len,
    })
}

/// A bigram set paired with a threshold, for scanning many payloads
#[derive(Debug, Clone)]
pub struct ReadableScanner<B> {
    bigrams: B,
    min_match_len: usize,
}

impl<B: BigramSet> ReadableScanner<B> {
    pub fn new(bigrams: B, min_match_len: usize) -> Self {
        Self {
            bigrams,
            min_match_len,
        }
    }

    pub fn min_match_len(&self) -> usize {
        self.min_match_len
    }

    pub fn bigrams(&self) -> &B {
        &self.bigrams
    }

    pub fn scan(&self, payload: &[u8], out: &mut [u8]) -> ScanOutcome {
        scan(&self.bigrams, payload, self.min_match_len, out)
    }

    pub fn find(&self, payload: &[u8], capacity: usize) -> Option<ReadableMatch> {
        find_readable_string(&self.bigrams, payload, self.min_match_len, capacity)
    }
}
