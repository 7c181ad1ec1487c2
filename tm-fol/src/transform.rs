/*! Implements transformations on first-order formulae. */
mod nnf;
#[cfg(test)]
mod proptest_tests;

pub use nnf::ToNnf;
