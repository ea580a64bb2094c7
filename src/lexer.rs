//! Line-level lexing: comment stripping and token splitting.
//!
//! IPPcode22 is strictly line-oriented, so there is no character-level
//! scanner. A raw input line is first normalized (comment cut off,
//! whitespace trimmed) and, when anything remains, split into an opcode
//! candidate plus positional operand tokens. Neither step does any grammar
//! checking.

/// Normalizes one raw input line.
///
/// Everything from the first `#` to the end of the line is a comment and is
/// dropped, then surrounding whitespace is trimmed. Returns `None` when
/// nothing remains; blank lines are skipped by every downstream stage and
/// never consume an instruction order number.
pub fn normalize(raw: &str) -> Option<&str> {
    let code = match raw.find('#') {
        Some(pos) => &raw[..pos],
        None => raw,
    };
    let code = code.trim();
    if code.is_empty() { None } else { Some(code) }
}

/// Splits a normalized line on runs of whitespace.
///
/// The first token is the opcode candidate, the rest are operand tokens in
/// source order. `normalize` never returns an empty line, so the result
/// holds at least one token.
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}
