//! Low level string building blocks: single allocation concatenation and
//! entropy-efficient random alphanumeric strings.
pub mod concat;
pub mod error;
pub mod random;

pub use concat::{concat, concat_bytes, concat_into, concat_utf8};
pub use random::{
    fill_alphanumeric, gen_random_string, random_string, try_fill_alphanumeric,
    try_gen_random_string,
};


#[cfg(test)]
extern crate quickcheck;
#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;
