//! # IPPcode22 language model
//!
//! This module defines the validated intermediate representation produced by
//! the parser and consumed by the XML serializer: the instruction set with
//! its operand signatures, classified operands, and the ordered program.

pub mod opcode;
pub mod operand;
pub mod program;
