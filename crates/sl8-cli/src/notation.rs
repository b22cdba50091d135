//! Textual derivation notation.
//!
//! Whitespace-separated morphism glyphs or ASCII names, with `(` `)`
//! delimiting nested blocks. The parens bind without surrounding
//! whitespace, so `(¬ ¬)` and `( ¬ ¬ )` read the same.
//!
//! This is the untyped boundary of the system: anything the lexer does
//! not recognize is rejected here, before evaluation starts.

use anyhow::{Result, bail};
use sl8_core::{Derivation, Morphism, Primitive};

/// Parse glyph notation into a derivation.
pub fn parse(input: &str) -> Result<Derivation> {
    let mut stack: Vec<Derivation> = vec![Derivation::new()];

    for token in lex(input) {
        match token.as_str() {
            "(" => stack.push(Derivation::new()),
            ")" => {
                let Some(block) = stack.pop() else {
                    bail!("unbalanced ')' in program");
                };
                let Some(parent) = stack.last_mut() else {
                    bail!("unbalanced ')' in program");
                };
                parent.push_block(block);
            }
            name => {
                let Some(m) = Morphism::from_name(name) else {
                    bail!(
                        "unknown morphism {name:?} (expected a glyph I @ λ ∧ ¬ ? ⊗ ∅ or its ASCII name)"
                    );
                };
                let Some(current) = stack.last_mut() else {
                    bail!("unbalanced ')' in program");
                };
                current.push_morphism(m);
            }
        }
    }

    if stack.len() != 1 {
        bail!("unclosed '(' in program");
    }
    Ok(stack.pop().unwrap_or_default())
}

/// Render a derivation back to glyph notation.
pub fn render(derivation: &Derivation) -> String {
    derivation
        .iter()
        .map(|primitive| match primitive {
            Primitive::Morphism(m) => m.glyph().to_string(),
            Primitive::Block(inner) => format!("( {} )", render(inner)),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn lex(input: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();

    for ch in input.chars() {
        match ch {
            '(' | ')' => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
                tokens.push(ch.to_string());
            }
            c if c.is_whitespace() => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            c => current.push(c),
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use Morphism::{Apply, Identity, Lambda, Not};

    #[test]
    fn test_parse_flat() {
        let d = parse("λ I @").unwrap();
        assert_eq!(d, Derivation::from_morphisms(&[Lambda, Identity, Apply]));
    }

    #[test]
    fn test_parse_ascii_names() {
        let d = parse("lambda I apply").unwrap();
        assert_eq!(d, Derivation::from_morphisms(&[Lambda, Identity, Apply]));
    }

    #[test]
    fn test_parse_blocks() {
        let d = parse("λ ( ¬ ¬ ) @").unwrap();
        let mut expected = Derivation::from_morphisms(&[Lambda]);
        expected.push_block(Derivation::from_morphisms(&[Not, Not]));
        expected.push_morphism(Apply);
        assert_eq!(d, expected);
    }

    #[test]
    fn test_parens_bind_without_whitespace() {
        assert_eq!(parse("(¬ ¬)").unwrap(), parse("( ¬ ¬ )").unwrap());
    }

    #[test]
    fn test_nested_blocks() {
        let d = parse("( ( I ) ¬ )").unwrap();
        assert_eq!(d.len(), 1);
        assert_eq!(d.symbol_count(), 2);
    }

    #[test]
    fn test_empty_program() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse("   ").unwrap().is_empty());
    }

    #[test]
    fn test_unknown_morphism_rejected() {
        let err = parse("λ xyzzy").unwrap_err();
        assert!(err.to_string().contains("unknown morphism"));
        assert!(err.to_string().contains("xyzzy"));
    }

    #[test]
    fn test_unbalanced_close_rejected() {
        let err = parse("¬ )").unwrap_err();
        assert!(err.to_string().contains("unbalanced"));
    }

    #[test]
    fn test_unclosed_open_rejected() {
        let err = parse("( ¬").unwrap_err();
        assert!(err.to_string().contains("unclosed"));
    }

    #[test]
    fn test_render_roundtrip() {
        let source = "λ ( ¬ ( I ) ) @";
        let d = parse(source).unwrap();
        assert_eq!(render(&d), source);
        assert_eq!(parse(&render(&d)).unwrap(), d);
    }
}
