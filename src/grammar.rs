//! Grammar predicates for the IPPcode22 lexical classes.
//!
//! Each predicate decides whether an *entire* token belongs to one lexical
//! class; there is no substring matching and no decoding here. The classifier
//! in `lang::operand` combines these into operand checks.

/// Characters allowed in identifiers besides letters and digits.
const SPECIAL_CHARS: &[char] = &['_', '-', '$', '&', '%', '*', '!', '?'];

fn is_ident_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || SPECIAL_CHARS.contains(&ch)
}

fn is_ident_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || SPECIAL_CHARS.contains(&ch)
}

/// An identifier (also used for labels): one letter or special character
/// followed by any number of letters, digits and special characters.
/// Case-sensitive.
pub fn is_identifier(token: &str) -> bool {
    let mut chars = token.chars();
    match chars.next() {
        Some(ch) if is_ident_start(ch) => chars.all(is_ident_char),
        _ => false,
    }
}

/// A frame-qualified variable: `GF`, `LF` or `TF`, an `@`, then an identifier.
pub fn is_variable(token: &str) -> bool {
    match token.split_once('@') {
        Some((frame, name)) => matches!(frame, "GF" | "LF" | "TF") && is_identifier(name),
        None => false,
    }
}

/// The nil constant. `nil@nil` is its only spelling.
pub fn is_nil_const(token: &str) -> bool {
    token == "nil@nil"
}

/// A bool constant: `bool@true` or `bool@false`.
pub fn is_bool_const(token: &str) -> bool {
    token == "bool@true" || token == "bool@false"
}

/// An int constant: `int@`, an optional sign, then a decimal, octal
/// (`0o`/`0O` or a bare leading zero) or hex (`0x`/`0X`) digit body.
pub fn is_int_const(token: &str) -> bool {
    let Some(body) = token.strip_prefix("int@") else {
        return false;
    };
    let digits = body.strip_prefix(['+', '-']).unwrap_or(body);
    is_int_body(digits)
}

fn is_int_body(digits: &str) -> bool {
    if let Some(hex) = digits.strip_prefix("0x").or_else(|| digits.strip_prefix("0X")) {
        return !hex.is_empty() && hex.bytes().all(|b| b.is_ascii_hexdigit());
    }
    if let Some(oct) = digits.strip_prefix("0o").or_else(|| digits.strip_prefix("0O")) {
        return !oct.is_empty() && oct.bytes().all(|b| (b'0'..=b'7').contains(&b));
    }
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// A string constant: `string@` then zero or more of either a backslash
/// escape of exactly three decimal digits, or any character that is not
/// whitespace, `#` or a bare backslash. The empty body is valid.
pub fn is_string_const(token: &str) -> bool {
    match token.strip_prefix("string@") {
        Some(body) => is_string_body(body),
        None => false,
    }
}

fn is_string_body(body: &str) -> bool {
    let mut chars = body.chars();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => {
                for _ in 0..3 {
                    if !chars.next().is_some_and(|d| d.is_ascii_digit()) {
                        return false;
                    }
                }
            }
            '#' => return false,
            ch if ch.is_whitespace() => return false,
            _ => {}
        }
    }
    true
}
