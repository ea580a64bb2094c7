//! Single-pass parser for IPPcode22 source text.
//!
//! The parser drives the whole pipeline line by line: it consumes the
//! mandatory header first, then turns every remaining significant line into
//! a validated instruction and appends it to the `Program`. It is pure: all
//! failures come back as `ParseError` values and nothing here touches the
//! process exit code, so the state machine is testable in isolation.

use crate::lang::opcode::Opcode;
use crate::lang::operand::{self, Operand};
use crate::lang::program::Program;
use crate::lexer;
use crate::parser_error::ParseError;

/// The header literal; matched case-insensitively against the whole first
/// significant line.
const HEADER: &str = ".IPPcode22";

/// Line-by-line translator from source text to a validated `Program`.
///
/// States: awaiting the header, then reading instructions until the input
/// ends. Blank and comment-only lines are skipped in both states without
/// consuming an order number. Any failure aborts the run; a partially built
/// program is never observable from outside.
pub struct Parser<'src> {
    lines: std::iter::Enumerate<std::str::Lines<'src>>,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str) -> Self {
        Parser {
            lines: source.lines().enumerate(),
        }
    }

    /// Parses the whole input into an ordered program.
    pub fn parse(mut self) -> Result<Program, ParseError> {
        self.expect_header()?;

        let mut program = Program::new();
        while let Some((idx, raw)) = self.lines.next() {
            let Some(code) = lexer::normalize(raw) else {
                continue;
            };
            let (opcode, operands) = instruction_from_line(idx + 1, code)?;
            program.push(opcode, operands);
        }
        Ok(program)
    }

    /// Consumes leading blank lines and exactly one header line.
    fn expect_header(&mut self) -> Result<(), ParseError> {
        for (idx, raw) in self.lines.by_ref() {
            let Some(code) = lexer::normalize(raw) else {
                continue;
            };
            if code.eq_ignore_ascii_case(HEADER) {
                return Ok(());
            }
            return Err(ParseError::BadHeader {
                line: idx + 1,
                found: code.to_string(),
            });
        }
        Err(ParseError::MissingHeader)
    }
}

/// Validates one significant line: opcode lookup first, then the operand
/// count against the signature, then each operand's grammar in order.
fn instruction_from_line(line: usize, code: &str) -> Result<(Opcode, Vec<Operand>), ParseError> {
    let tokens = lexer::tokenize(code);

    let opcode = Opcode::lookup(tokens[0]).ok_or_else(|| ParseError::UnknownOpcode {
        line,
        mnemonic: tokens[0].to_string(),
    })?;

    let signature = opcode.signature();
    if tokens.len() - 1 != signature.len() {
        return Err(ParseError::WrongOperandCount {
            line,
            opcode,
            expected: signature.len(),
            found: tokens.len() - 1,
        });
    }

    let mut operands = Vec::with_capacity(signature.len());
    for (pos, (&expected, &token)) in signature.iter().zip(&tokens[1..]).enumerate() {
        match operand::classify(expected, token) {
            Some(op) => operands.push(op),
            None => {
                return Err(ParseError::BadOperand {
                    line,
                    opcode,
                    position: pos + 1,
                    expected,
                    token: token.to_string(),
                });
            }
        }
    }
    Ok((opcode, operands))
}
