//! Concatenation of many strings with a single allocation.
//!
//! Every function here first sums the lengths of its inputs, allocates the output
//! buffer with exactly that capacity and only then copies the parts in order.
//! The buffer is never grown while it is being populated.
use bytes::{Bytes, BytesMut};
use tracing::instrument;

use crate::error::Result;

/// Returns the concatenation of `parts`, in order and without separators.
///
/// An empty slice (or a slice containing only empty strings) yields an empty [`String`].
///
/// ```
/// assert_eq!(strutils::concat(&["a", "bb", "ccc"]), "abbccc");
/// ```
#[instrument(level = "trace", skip_all, fields(parts = parts.len()))]
pub fn concat<S: AsRef<str>>(parts: &[S]) -> String {
    let total: usize = parts.iter().map(|part| part.as_ref().len()).sum();

    let mut out = String::with_capacity(total);
    for part in parts {
        out.push_str(part.as_ref());
    }

    debug_assert_eq!(out.len(), total);
    out
}

/// Appends every element of `parts` to `dst`, reserving the additional space once.
#[instrument(level = "trace", skip_all, fields(parts = parts.len()))]
pub fn concat_into<S: AsRef<str>>(dst: &mut String, parts: &[S]) {
    let additional: usize = parts.iter().map(|part| part.as_ref().len()).sum();

    dst.reserve_exact(additional);
    for part in parts {
        dst.push_str(part.as_ref());
    }
}

/// Byte oriented version of [`concat`].
///
/// The parts are copied into a [`BytesMut`] of exact capacity which is then frozen,
/// so the returned [`Bytes`] shares the one allocation.
#[instrument(level = "trace", skip_all, fields(parts = parts.len()))]
pub fn concat_bytes<B: AsRef<[u8]>>(parts: &[B]) -> Bytes {
    let total: usize = parts.iter().map(|part| part.as_ref().len()).sum();

    let mut out = BytesMut::with_capacity(total);
    for part in parts {
        out.extend_from_slice(part.as_ref());
    }

    out.freeze()
}

/// Concatenates raw byte slices and converts the result into a [`String`].
///
/// utf8 validation runs once over the joined buffer, which means a multi-byte
/// character split across two parts is accepted.
///
/// # Errors
/// Returns [`crate::error::Error::InvalidUtf8`] if the joined bytes are not valid utf8
#[instrument(level = "trace", skip_all, fields(parts = parts.len()))]
pub fn concat_utf8<B: AsRef<[u8]>>(parts: &[B]) -> Result<String> {
    let total: usize = parts.iter().map(|part| part.as_ref().len()).sum();

    let mut out = Vec::with_capacity(total);
    for part in parts {
        out.extend_from_slice(part.as_ref());
    }

    Ok(String::from_utf8(out)?)
}
