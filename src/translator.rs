/// Single-pass translator from restricted Markdown to HTML-like markup
use crate::error::{Error, Result};
use crate::marker::{EMPHASIS_MARKERS, Marker};

/// Scan state for one translation call: a fence flag plus one signed
/// balance counter per emphasis marker, slot order matching the table.
#[derive(Default)]
struct ScanState {
    inside_fence: bool,
    balance: [i32; EMPHASIS_MARKERS.len()],
}

impl ScanState {
    fn finish(&self) -> Result<()> {
        for (slot, marker) in EMPHASIS_MARKERS.iter().enumerate() {
            if self.balance[slot] != 0 {
                return Err(Error::Unbalanced(*marker));
            }
        }
        if self.inside_fence {
            return Err(Error::Unbalanced(Marker::Fence));
        }
        Ok(())
    }
}

pub struct Translator;

impl Translator {
    pub fn new() -> Self {
        Translator
    }

    /// Translate a whole document in one pass over its tokens.
    ///
    /// Paragraphs are wrapped in `<p>` tags, every token is rewritten against
    /// the marker table, and the call fails without producing output if any
    /// marker or fence is left open at the end.
    pub fn translate(&self, source: &str) -> Result<String> {
        let mut state = ScanState::default();
        let mut tokens = Vec::new();

        for chunk in split_paragraphs(source) {
            let paragraph = format!("<p>{chunk}</p>");
            // Fixed policy: empty fragments from splitting on whitespace
            // runs are dropped.
            for token in paragraph.split(char::is_whitespace) {
                if token.is_empty() {
                    continue;
                }
                tokens.push(scan_token(token, &mut state));
            }
        }

        state.finish()?;
        Ok(tokens.join(" "))
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new()
    }
}

/// Split the source on blank-line boundaries: a CRLF break followed by a run
/// of whitespace, ending at the run's last newline. Trailing non-newline
/// whitespace after that newline belongs to the next paragraph; a CRLF whose
/// whitespace run contains no further newline is not a boundary.
fn split_paragraphs(source: &str) -> Vec<&str> {
    let mut paragraphs = Vec::new();
    let mut start = 0;
    let mut search = 0;

    while let Some(found) = source[search..].find("\r\n") {
        let crlf = search + found;
        let run_start = crlf + 2;
        let run_end = source[run_start..]
            .find(|c: char| !c.is_whitespace())
            .map_or(source.len(), |i| run_start + i);

        match source[run_start..run_end].rfind('\n') {
            Some(last) => {
                paragraphs.push(&source[start..crlf]);
                start = run_start + last + 1;
                search = start;
            }
            None => search = run_start,
        }
    }

    paragraphs.push(&source[start..]);
    paragraphs
}

fn scan_token(token: &str, state: &mut ScanState) -> String {
    // Fence tokens are handled first and are exempt from emphasis rewriting,
    // even when they also contain emphasis characters.
    if token.contains(Marker::Fence.literal()) {
        return toggle_fences(token, state);
    }
    if state.inside_fence {
        return token.to_string();
    }
    rewrite_emphasis(token, state)
}

/// Rewrite every fence occurrence left to right. Each occurrence emits the
/// tag for the current state and flips the state before the next one, so a
/// token carrying both delimiters opens and closes the same region.
fn toggle_fences(token: &str, state: &mut ScanState) -> String {
    let fence = Marker::Fence;
    let mut out = String::with_capacity(token.len());
    let mut rest = token;

    while let Some(at) = rest.find(fence.literal()) {
        out.push_str(&rest[..at]);
        out.push_str(if state.inside_fence {
            fence.close_tag()
        } else {
            fence.open_tag()
        });
        state.inside_fence = !state.inside_fence;
        rest = &rest[at + fence.literal().len()..];
    }

    out.push_str(rest);
    out
}

/// Rewrite a leading marker into its open tag and a trailing marker into its
/// close tag, adjusting the balance counters.
///
/// The paragraph tags injected by segmentation are transparent: a marker can
/// open right after a leading `<p>` and close right before a trailing `</p>`,
/// with the tags kept in place around the rewrite. Both boundary checks run
/// against the original token text, so a self-contained `**word**` fires both
/// and nets to zero.
fn rewrite_emphasis(token: &str, state: &mut ScanState) -> String {
    let head = if token.starts_with("<p>") { "<p>" } else { "" };
    let tail = if token.ends_with("</p>") { "</p>" } else { "" };
    let inner = &token[head.len()..token.len() - tail.len()];

    let mut open = None;
    let mut close = None;
    for (slot, marker) in EMPHASIS_MARKERS.iter().enumerate() {
        if inner.starts_with(marker.literal()) {
            open = Some(*marker);
            state.balance[slot] += 1;
        }
        if inner.ends_with(marker.literal()) {
            close = Some(*marker);
            state.balance[slot] -= 1;
        }
    }

    let open_cut = open.map_or(0, |m| m.literal().len());
    let close_cut = close.map_or(0, |m| m.literal().len());

    let mut out = String::with_capacity(token.len() + 8);
    out.push_str(head);
    if let Some(marker) = open {
        out.push_str(marker.open_tag());
    }
    // A bare-marker token like "**" satisfies both checks on the same
    // characters; both rewrites still fire, leaving nothing in between.
    if open_cut + close_cut <= inner.len() {
        out.push_str(&inner[open_cut..inner.len() - close_cut]);
    }
    if let Some(marker) = close {
        out.push_str(marker.close_tag());
    }
    out.push_str(tail);
    out
}
