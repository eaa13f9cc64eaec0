pub mod algebraic;

pub use algebraic::{Algebraic, AlgebraicError, square_name};
