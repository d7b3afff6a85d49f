//! Algebraic operations over expression trees.
//!
//! None of these operations simplify beyond what they are asked to do. [`expand`] distributes and
//! collects numbers, but it does not combine like terms; that is the job of
//! [`group_like_terms`], which collects the terms of an expanded sum by their degree in a chosen
//! label.
//!
//! ```
//! use verbatim_compute::symbolic::{expand, group_like_terms};
//! use verbatim_parser::{parser::ast::{stringify, Label}, receive};
//!
//! let tree = receive("({X}+1)*({X}+2)");
//! let polynomial = group_like_terms(&expand(&tree), &Label::new("X"));
//! assert_eq!(stringify(&polynomial), "2+3*({X})^(1)+1*({X})^(2)");
//! ```
//!
//! Every operation takes its input by reference and builds a new tree, so the same parsed tree
//! can be evaluated under many different bindings.

pub mod degree;
pub mod evaluate;
pub mod expand;
pub mod group;
pub mod ops;

pub use degree::monomial_degree;
pub use evaluate::evaluate;
pub use expand::expand;
pub use group::group_like_terms;
pub use ops::power;
