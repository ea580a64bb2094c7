//! The IPPcode22 instruction set and its operand signatures.

use phf::phf_map;

/// Expected lexical class for one operand position of an instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind {
    /// A frame-qualified variable.
    Var,
    /// A variable or a typed constant.
    Symb,
    /// A label identifier.
    Label,
    /// One of the type names `bool`, `int`, `string`.
    Type,
}

impl ArgKind {
    /// Class name used in diagnostics.
    pub fn describe(self) -> &'static str {
        match self {
            ArgKind::Var => "variable",
            ArgKind::Symb => "symbol",
            ArgKind::Label => "label",
            ArgKind::Type => "type name",
        }
    }
}

/// One member of the fixed IPPcode22 opcode set.
///
/// The canonical spelling is uppercase; `lookup` folds the source spelling
/// before consulting the table, so `move`, `Move` and `MOVE` are the same
/// instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    Move,
    CreateFrame,
    PushFrame,
    PopFrame,
    Defvar,
    Call,
    Return,
    Pushs,
    Pops,
    Add,
    Sub,
    Mul,
    Idiv,
    Lt,
    Gt,
    Eq,
    And,
    Or,
    Not,
    Int2Char,
    Stri2Int,
    Read,
    Write,
    Concat,
    Strlen,
    Getchar,
    Setchar,
    Type,
    Label,
    Jump,
    Jumpifeq,
    Jumpifneq,
    Exit,
    Dprint,
    Break,
}

/// Canonical mnemonic to opcode, built once at compile time.
static MNEMONICS: phf::Map<&'static str, Opcode> = phf_map! {
    "MOVE" => Opcode::Move,
    "CREATEFRAME" => Opcode::CreateFrame,
    "PUSHFRAME" => Opcode::PushFrame,
    "POPFRAME" => Opcode::PopFrame,
    "DEFVAR" => Opcode::Defvar,
    "CALL" => Opcode::Call,
    "RETURN" => Opcode::Return,
    "PUSHS" => Opcode::Pushs,
    "POPS" => Opcode::Pops,
    "ADD" => Opcode::Add,
    "SUB" => Opcode::Sub,
    "MUL" => Opcode::Mul,
    "IDIV" => Opcode::Idiv,
    "LT" => Opcode::Lt,
    "GT" => Opcode::Gt,
    "EQ" => Opcode::Eq,
    "AND" => Opcode::And,
    "OR" => Opcode::Or,
    "NOT" => Opcode::Not,
    "INT2CHAR" => Opcode::Int2Char,
    "STRI2INT" => Opcode::Stri2Int,
    "READ" => Opcode::Read,
    "WRITE" => Opcode::Write,
    "CONCAT" => Opcode::Concat,
    "STRLEN" => Opcode::Strlen,
    "GETCHAR" => Opcode::Getchar,
    "SETCHAR" => Opcode::Setchar,
    "TYPE" => Opcode::Type,
    "LABEL" => Opcode::Label,
    "JUMP" => Opcode::Jump,
    "JUMPIFEQ" => Opcode::Jumpifeq,
    "JUMPIFNEQ" => Opcode::Jumpifneq,
    "EXIT" => Opcode::Exit,
    "DPRINT" => Opcode::Dprint,
    "BREAK" => Opcode::Break,
};

impl Opcode {
    /// Looks up a source-spelled mnemonic, case-insensitively.
    pub fn lookup(mnemonic: &str) -> Option<Opcode> {
        MNEMONICS.get(mnemonic.to_ascii_uppercase().as_str()).copied()
    }

    /// Canonical uppercase mnemonic, as emitted in the output document.
    pub fn as_str(self) -> &'static str {
        match self {
            Opcode::Move => "MOVE",
            Opcode::CreateFrame => "CREATEFRAME",
            Opcode::PushFrame => "PUSHFRAME",
            Opcode::PopFrame => "POPFRAME",
            Opcode::Defvar => "DEFVAR",
            Opcode::Call => "CALL",
            Opcode::Return => "RETURN",
            Opcode::Pushs => "PUSHS",
            Opcode::Pops => "POPS",
            Opcode::Add => "ADD",
            Opcode::Sub => "SUB",
            Opcode::Mul => "MUL",
            Opcode::Idiv => "IDIV",
            Opcode::Lt => "LT",
            Opcode::Gt => "GT",
            Opcode::Eq => "EQ",
            Opcode::And => "AND",
            Opcode::Or => "OR",
            Opcode::Not => "NOT",
            Opcode::Int2Char => "INT2CHAR",
            Opcode::Stri2Int => "STRI2INT",
            Opcode::Read => "READ",
            Opcode::Write => "WRITE",
            Opcode::Concat => "CONCAT",
            Opcode::Strlen => "STRLEN",
            Opcode::Getchar => "GETCHAR",
            Opcode::Setchar => "SETCHAR",
            Opcode::Type => "TYPE",
            Opcode::Label => "LABEL",
            Opcode::Jump => "JUMP",
            Opcode::Jumpifeq => "JUMPIFEQ",
            Opcode::Jumpifneq => "JUMPIFNEQ",
            Opcode::Exit => "EXIT",
            Opcode::Dprint => "DPRINT",
            Opcode::Break => "BREAK",
        }
    }

    /// The fixed ordered operand signature of this opcode.
    pub fn signature(self) -> &'static [ArgKind] {
        use Opcode::*;
        match self {
            CreateFrame | PushFrame | PopFrame | Return | Break => &[],
            Defvar | Pops => &[ArgKind::Var],
            Call | Label | Jump => &[ArgKind::Label],
            Pushs | Write | Exit | Dprint => &[ArgKind::Symb],
            Move | Int2Char | Strlen | Type | Not => &[ArgKind::Var, ArgKind::Symb],
            Read => &[ArgKind::Var, ArgKind::Type],
            Add | Sub | Mul | Idiv | Lt | Gt | Eq | And | Or | Stri2Int | Concat | Getchar
            | Setchar => &[ArgKind::Var, ArgKind::Symb, ArgKind::Symb],
            Jumpifeq | Jumpifneq => &[ArgKind::Label, ArgKind::Symb, ArgKind::Symb],
        }
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(Opcode::lookup("move"), Some(Opcode::Move));
        assert_eq!(Opcode::lookup("Move"), Some(Opcode::Move));
        assert_eq!(Opcode::lookup("MOVE"), Some(Opcode::Move));
        assert_eq!(Opcode::lookup("jumpIfEq"), Some(Opcode::Jumpifeq));
    }

    #[test]
    fn test_lookup_rejects_unknown_mnemonics() {
        assert_eq!(Opcode::lookup("FOOBAR"), None);
        assert_eq!(Opcode::lookup(""), None);
        assert_eq!(Opcode::lookup("MOVES"), None);
        assert_eq!(Opcode::lookup("MOV"), None);
    }

    #[test]
    fn test_table_covers_the_whole_instruction_set() {
        assert_eq!(MNEMONICS.len(), 35);
    }

    #[test]
    fn test_table_keys_are_canonical_spellings() {
        for (name, op) in MNEMONICS.entries() {
            assert_eq!(op.as_str(), *name);
            assert_eq!(Opcode::lookup(name), Some(*op));
        }
    }

    #[test]
    fn test_signature_arities() {
        assert_eq!(Opcode::Break.signature().len(), 0);
        assert_eq!(Opcode::Defvar.signature().len(), 1);
        assert_eq!(Opcode::Call.signature().len(), 1);
        assert_eq!(Opcode::Move.signature().len(), 2);
        assert_eq!(Opcode::Read.signature().len(), 2);
        assert_eq!(Opcode::Add.signature().len(), 3);
        assert_eq!(Opcode::Jumpifneq.signature().len(), 3);
    }

    #[test]
    fn test_signature_kinds() {
        assert_eq!(Opcode::Defvar.signature(), &[ArgKind::Var]);
        assert_eq!(Opcode::Write.signature(), &[ArgKind::Symb]);
        assert_eq!(Opcode::Read.signature(), &[ArgKind::Var, ArgKind::Type]);
        assert_eq!(
            Opcode::Jumpifeq.signature(),
            &[ArgKind::Label, ArgKind::Symb, ArgKind::Symb]
        );
        assert_eq!(
            Opcode::Concat.signature(),
            &[ArgKind::Var, ArgKind::Symb, ArgKind::Symb]
        );
    }
}
