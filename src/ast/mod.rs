/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - nodes: the Node sum type plus prototypes and arguments
/// - types: type representations (NiftyType, NumberKind)
pub mod nodes;
pub mod types;
