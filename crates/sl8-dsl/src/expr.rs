use serde::{Deserialize, Serialize};

/// Literal payload of an expression.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Bool(bool),
    Number(u32),
    Text(String),
}

/// An expression in the minimal DSL. Compiled to a derivation by
/// [`compile`](crate::compile::compile); never interpreted directly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    Literal(Value),
    /// Select a keyed component of a structured value.
    Access { target: Box<Expr>, key: String },
    /// Join two values into one.
    Concat(Box<Expr>, Box<Expr>),
    /// Validate and canonicalize a value.
    Normalize(Box<Expr>),
    /// Form a (hash, content) pair for storage.
    StoreBlob(Box<Expr>),
    /// Ternary conditional. Compiles to the four-primitive shape the
    /// processor evaluates unconditionally.
    If {
        condition: Box<Expr>,
        then: Box<Expr>,
        otherwise: Box<Expr>,
    },
    /// Abstraction. The argument name is carried for producers; the
    /// lowering does not encode it.
    Lambda { arg: String, body: Box<Expr> },
    /// Application of a function to an argument.
    Apply { func: Box<Expr>, arg: Box<Expr> },
}

impl Expr {
    pub fn bool(value: bool) -> Self {
        Expr::Literal(Value::Bool(value))
    }

    pub fn number(value: u32) -> Self {
        Expr::Literal(Value::Number(value))
    }

    pub fn text(value: impl Into<String>) -> Self {
        Expr::Literal(Value::Text(value.into()))
    }

    pub fn access(target: Expr, key: impl Into<String>) -> Self {
        Expr::Access {
            target: Box::new(target),
            key: key.into(),
        }
    }

    pub fn concat(a: Expr, b: Expr) -> Self {
        Expr::Concat(Box::new(a), Box::new(b))
    }

    pub fn normalize(e: Expr) -> Self {
        Expr::Normalize(Box::new(e))
    }

    pub fn store_blob(e: Expr) -> Self {
        Expr::StoreBlob(Box::new(e))
    }

    pub fn if_else(condition: Expr, then: Expr, otherwise: Expr) -> Self {
        Expr::If {
            condition: Box::new(condition),
            then: Box::new(then),
            otherwise: Box::new(otherwise),
        }
    }

    pub fn lambda(arg: impl Into<String>, body: Expr) -> Self {
        Expr::Lambda {
            arg: arg.into(),
            body: Box::new(body),
        }
    }

    pub fn apply(func: Expr, arg: Expr) -> Self {
        Expr::Apply {
            func: Box::new(func),
            arg: Box::new(arg),
        }
    }
}
