//! The expression tree produced by [`receive`](crate::parser::receive).

pub mod bracketed;
pub mod diagnostic;
pub mod exponent;
pub mod fraction;
pub mod iter;
pub mod literal;
pub mod node;
pub mod number;
pub mod product;
pub mod sum;

pub use bracketed::{Bracket, Bracketed};
pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use exponent::Exponent;
pub use fraction::Fraction;
pub use literal::{Function, Label, Raw};
pub use node::{stringify, Node};
pub use number::Number;
pub use product::Product;
pub use sum::Sum;
