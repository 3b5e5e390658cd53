/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The closed `Node` enum and the `Program` root
/// - expressions: Operator nodes and the operator enums
/// - statements: Statement node payloads
pub mod ast;
pub mod expressions;
pub mod statements;
