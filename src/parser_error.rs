//! Translation failures and their exit-code mapping.

use crate::lang::opcode::{ArgKind, Opcode};

/// A failure detected while translating the source.
///
/// The parser stops at the first violation in line order; within one line,
/// opcode validity is checked before the operand count, and the count before
/// any operand's grammar. `line` fields are 1-based raw input line numbers.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Input ended before any significant line appeared.
    MissingHeader,
    /// The first significant line is not the language header.
    BadHeader { line: usize, found: String },
    /// A mnemonic that is not in the instruction table.
    UnknownOpcode { line: usize, mnemonic: String },
    /// The operand count differs from the opcode's signature length.
    WrongOperandCount {
        line: usize,
        opcode: Opcode,
        expected: usize,
        found: usize,
    },
    /// An operand token does not match the grammar of its expected class.
    BadOperand {
        line: usize,
        opcode: Opcode,
        position: usize,
        expected: ArgKind,
        token: String,
    },
}

impl ParseError {
    /// The process exit code this failure is reported with. Only the exit
    /// code is contractual; the diagnostic text is not.
    pub fn exit_code(&self) -> i32 {
        match self {
            ParseError::MissingHeader | ParseError::BadHeader { .. } => 21,
            ParseError::UnknownOpcode { .. } => 22,
            ParseError::WrongOperandCount { .. } | ParseError::BadOperand { .. } => 23,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::MissingHeader => {
                write!(f, "input must start with the '.IPPcode22' header")
            }
            ParseError::BadHeader { line, found } => {
                write!(
                    f,
                    "line {}: expected the '.IPPcode22' header, found '{}'",
                    line, found
                )
            }
            ParseError::UnknownOpcode { line, mnemonic } => {
                write!(f, "line {}: unknown opcode '{}'", line, mnemonic)
            }
            ParseError::WrongOperandCount {
                line,
                opcode,
                expected,
                found,
            } => {
                write!(
                    f,
                    "line {}: {} takes {} operand(s), found {}",
                    line, opcode, expected, found
                )
            }
            ParseError::BadOperand {
                line,
                opcode,
                position,
                expected,
                token,
            } => {
                write!(
                    f,
                    "line {}: {} operand {}: expected a {}, found '{}'",
                    line,
                    opcode,
                    position,
                    expected.describe(),
                    token
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(ParseError::MissingHeader.exit_code(), 21);
        assert_eq!(
            ParseError::BadHeader {
                line: 1,
                found: "foo".to_string()
            }
            .exit_code(),
            21
        );
        assert_eq!(
            ParseError::UnknownOpcode {
                line: 2,
                mnemonic: "FOOBAR".to_string()
            }
            .exit_code(),
            22
        );
        assert_eq!(
            ParseError::WrongOperandCount {
                line: 2,
                opcode: Opcode::Defvar,
                expected: 1,
                found: 2
            }
            .exit_code(),
            23
        );
        assert_eq!(
            ParseError::BadOperand {
                line: 3,
                opcode: Opcode::Pushs,
                position: 1,
                expected: ArgKind::Symb,
                token: "int@".to_string()
            }
            .exit_code(),
            23
        );
    }

    #[test]
    fn test_display_names_the_expected_class() {
        let err = ParseError::BadOperand {
            line: 4,
            opcode: Opcode::Move,
            position: 2,
            expected: ArgKind::Symb,
            token: "bool@maybe".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("line 4"));
        assert!(text.contains("MOVE"));
        assert!(text.contains("symbol"));
        assert!(text.contains("bool@maybe"));
    }
}
