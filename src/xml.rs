//! XML serialization of a validated program.
//!
//! The document is rendered once, after the whole input has parsed, so a
//! failed run can never leave partial output behind. The shape mirrors what
//! the downstream interpreter expects: a `program` root with the language
//! tag, one `instruction` element per accepted instruction and one
//! `argN` child per operand.

use crate::lang::program::{LANGUAGE, Program};

/// Renders the complete output document, trailing newline included.
pub fn to_xml(program: &Program) -> String {
    let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");

    if program.is_empty() {
        out.push_str(&format!("<program language=\"{}\"/>\n", LANGUAGE));
        return out;
    }

    out.push_str(&format!("<program language=\"{}\">\n", LANGUAGE));
    for instruction in program.instructions() {
        if instruction.operands.is_empty() {
            out.push_str(&format!(
                "  <instruction order=\"{}\" opcode=\"{}\"/>\n",
                instruction.order, instruction.opcode
            ));
            continue;
        }

        out.push_str(&format!(
            "  <instruction order=\"{}\" opcode=\"{}\">\n",
            instruction.order, instruction.opcode
        ));
        for (idx, operand) in instruction.operands.iter().enumerate() {
            out.push_str(&format!(
                "    <arg{0} type=\"{1}\">{2}</arg{0}>\n",
                idx + 1,
                operand.kind_str(),
                escape_text(operand.value())
            ));
        }
        out.push_str("  </instruction>\n");
    }
    out.push_str("</program>\n");
    out
}

/// Entity-escapes the characters XML reserves for markup.
fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            ch => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Parser;

    fn xml_of(source: &str) -> String {
        let program = Parser::new(source).parse().unwrap();
        to_xml(&program)
    }

    #[test]
    fn test_empty_program_is_a_self_closed_root() {
        assert_eq!(
            xml_of(".IPPcode22\n"),
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<program language=\"IPPcode22\"/>\n"
        );
    }

    #[test]
    fn test_full_document_shape() {
        let expected = "\
<?xml version=\"1.0\" encoding=\"UTF-8\"?>
<program language=\"IPPcode22\">
  <instruction order=\"1\" opcode=\"DEFVAR\">
    <arg1 type=\"var\">GF@x</arg1>
  </instruction>
  <instruction order=\"2\" opcode=\"MOVE\">
    <arg1 type=\"var\">GF@x</arg1>
    <arg2 type=\"int\">42</arg2>
  </instruction>
  <instruction order=\"3\" opcode=\"WRITE\">
    <arg1 type=\"var\">GF@x</arg1>
  </instruction>
</program>
";
        assert_eq!(
            xml_of(".IPPcode22\nDEFVAR GF@x\nMOVE GF@x int@42\nWRITE GF@x\n"),
            expected
        );
    }

    #[test]
    fn test_operandless_instruction_is_self_closed() {
        let document = xml_of(".IPPcode22\nBREAK\n");
        assert!(document.contains("<instruction order=\"1\" opcode=\"BREAK\"/>\n"));
    }

    #[test]
    fn test_all_operand_kinds() {
        let source = ".IPPcode22\nREAD GF@in string\nJUMPIFEQ end GF@in nil@nil\nPUSHS bool@true\n";
        let document = xml_of(source);
        assert!(document.contains("<arg1 type=\"var\">GF@in</arg1>"));
        assert!(document.contains("<arg2 type=\"type\">string</arg2>"));
        assert!(document.contains("<arg1 type=\"label\">end</arg1>"));
        assert!(document.contains("<arg3 type=\"nil\">nil</arg3>"));
        assert!(document.contains("<arg1 type=\"bool\">true</arg1>"));
    }

    #[test]
    fn test_variable_tokens_round_trip_verbatim() {
        for token in ["GF@x", "LF@_tmp-1", "TF@$&%*!?"] {
            let document = xml_of(&format!(".IPPcode22\nDEFVAR {}\n", token));
            assert!(
                document.contains(&format!("<arg1 type=\"var\">{}</arg1>", token)),
                "document = {}",
                document
            );
        }
    }

    #[test]
    fn test_markup_characters_are_escaped() {
        let document = xml_of(".IPPcode22\nWRITE string@a<b&c>d\"e'f\n");
        assert!(document.contains(
            "<arg1 type=\"string\">a&lt;b&amp;c&gt;d&quot;e&apos;f</arg1>"
        ));
    }

    #[test]
    fn test_string_escapes_stay_undecoded() {
        let document = xml_of(".IPPcode22\nWRITE string@a\\032b\n");
        assert!(document.contains("<arg1 type=\"string\">a\\032b</arg1>"));
    }
}
