use sl8_core::{Derivation, Morphism};

use crate::expr::{Expr, Value};

/// Lower an expression to a derivation.
///
/// The lowering is positional and total: booleans become I/¬, a number n
/// becomes n applications (zero becomes a bare I), text becomes a pair
/// marker, and structured forms append their operator suffix after their
/// compiled operands. Conditionals, abstractions and applications wrap
/// their sub-programs in blocks so the shape survives into the
/// derivation.
///
/// The number encoding is illustrative, not arithmetic: it preserves
/// magnitude as repetition and nothing more.
pub fn compile(expr: &Expr) -> Derivation {
    let mut out = Derivation::new();
    compile_into(expr, &mut out);
    out
}

fn compile_into(expr: &Expr, out: &mut Derivation) {
    match expr {
        Expr::Literal(Value::Bool(true)) => out.push_morphism(Morphism::Identity),
        Expr::Literal(Value::Bool(false)) => out.push_morphism(Morphism::Not),
        Expr::Literal(Value::Number(n)) => encode_number(*n, out),
        Expr::Literal(Value::Text(_)) => out.push_morphism(Morphism::Pair),
        Expr::Access { target, .. } => {
            compile_into(target, out);
            out.push_morphism(Morphism::Pair);
            out.push_morphism(Morphism::Apply);
        }
        Expr::Concat(a, b) => {
            compile_into(a, out);
            compile_into(b, out);
            out.push_morphism(Morphism::Pair);
            out.push_morphism(Morphism::Apply);
        }
        Expr::Normalize(e) => {
            compile_into(e, out);
            out.push_morphism(Morphism::Lambda);
            out.push_morphism(Morphism::Not);
        }
        Expr::StoreBlob(e) => {
            compile_into(e, out);
            out.push_morphism(Morphism::Pair);
        }
        Expr::If {
            condition,
            then,
            otherwise,
        } => {
            out.push_block(compile(condition));
            out.push_morphism(Morphism::Cond);
            out.push_block(compile(then));
            out.push_block(compile(otherwise));
        }
        Expr::Lambda { body, .. } => {
            out.push_morphism(Morphism::Lambda);
            out.push_block(compile(body));
        }
        Expr::Apply { func, arg } => {
            out.push_block(compile(func));
            out.push_block(compile(arg));
            out.push_morphism(Morphism::Apply);
        }
    }
}

/// Simplified numeral: zero is I, a positive n is n copies of @.
fn encode_number(n: u32, out: &mut Derivation) {
    if n == 0 {
        out.push_morphism(Morphism::Identity);
        return;
    }
    for _ in 0..n {
        out.push_morphism(Morphism::Apply);
    }
}
