//! Compile-time rewrites over op streams.

mod fold;


pub use fold::fold_constants;
