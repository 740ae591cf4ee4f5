use std::fmt::Display;

/// The closed set of numeric kinds. The mapping from lexical type keyword to
/// kind is total and exact; see `parser::types::number_type_for`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberKind {
    S8,
    S16,
    S32,
    S64,
    S128,
    U8,
    U16,
    U32,
    U64,
    U128,
    F16,
    F32,
    F64,
    F128,
}

/// A parsed type. Pointer, array, function and named types are recognised by
/// the grammar but not yet resolved; their productions return the absent
/// marker instead of constructing these variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NiftyType {
    Void,
    Number { kind: NumberKind },
    Pointer,
    Array,
    Function,
    Named { name: String },
}

impl Display for NiftyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NiftyType::Void => write!(f, "void"),
            NiftyType::Number { kind } => write!(f, "{:?}", kind),
            NiftyType::Pointer => write!(f, "^"),
            NiftyType::Array => write!(f, "[]"),
            NiftyType::Function => write!(f, "fn"),
            NiftyType::Named { name } => write!(f, "{}", name),
        }
    }
}
