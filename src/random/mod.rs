//! Random alphanumeric strings that make the most of every entropy draw.
//!
//! The naive approach draws one random integer per character and reduces it modulo 62.
//! That discards almost all of the drawn bits and is biased towards the first symbols
//! of the alphabet. Instead, every draw is treated as [`ENTROPY_BITS`] random bits and
//! sliced into [`WINDOWS_PER_DRAW`] windows of [`WINDOW_BITS`] bits each.
//!
//! A window selects a symbol of [`ALPHABET`] directly. Since `2^6 = 64` and the alphabet
//! only has 62 symbols, windows with a value of 62 or 63 are rejected (rejection sampling).
//! A rejected window is still consumed, so the same bits are never looked at twice and
//! every accepted symbol is uniformly distributed.
//!
//! Example with a single draw filling a 3 character buffer (windows are read from the
//! least significant bits, positions are filled from the last one):
//!
//! ```text
//!  draw bits: ... | 26 | 61 | 63 | 62 |  1 |
//!  window  1 -> 'b' written at index 2
//!  window 62 -> rejected
//!  window 63 -> rejected
//!  window 61 -> '9' written at index 1
//!  window 26 -> 'A' written at index 0   => "A9b"
//! ```
use std::convert::Infallible;

use rand::RngCore;
use tracing::{instrument, trace};

use crate::error::Result;

/// The 62 symbols random strings are drawn from
pub const ALPHABET: &[u8; 62] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Number of bits needed to index [`ALPHABET`]
pub const WINDOW_BITS: u32 = 6;

/// Mask extracting the lowest window of an entropy value
pub const WINDOW_MASK: u64 = (1 << WINDOW_BITS) - 1;

/// Usable random bits per draw. The lowest bit of the source's u64 is dropped so that
/// draws carry the same 63 bits a non-negative i64 would.
pub const ENTROPY_BITS: u32 = 63;

/// How many windows can be sliced out of a single draw
pub const WINDOWS_PER_DRAW: u32 = ENTROPY_BITS / WINDOW_BITS;

fn next_int63<R: RngCore + ?Sized>(rng: &mut R) -> u64 {
    rng.next_u64() >> (u64::BITS - ENTROPY_BITS)
}

fn try_next_int63<R: RngCore + ?Sized>(rng: &mut R) -> std::result::Result<u64, rand::Error> {
    let mut raw = [0u8; 8];
    rng.try_fill_bytes(&mut raw)?;
    Ok(u64::from_le_bytes(raw) >> (u64::BITS - ENTROPY_BITS))
}

/// Fills `buf` from the last position to the first, calling `draw` whenever the cached
/// entropy runs out of windows. Returns how many times `draw` was called.
fn fill_with<E, F>(buf: &mut [u8], mut draw: F) -> std::result::Result<usize, E>
where
    F: FnMut() -> std::result::Result<u64, E>,
{
    if buf.is_empty() {
        return Ok(0);
    }

    let mut cache = draw()?;
    let mut remaining = WINDOWS_PER_DRAW;
    let mut draws = 1;
    let mut pos = buf.len();

    while pos > 0 {
        if remaining == 0 {
            cache = draw()?;
            remaining = WINDOWS_PER_DRAW;
            draws += 1;
        }

        let index = (cache & WINDOW_MASK) as usize;
        if index < ALPHABET.len() {
            pos -= 1;
            buf[pos] = ALPHABET[index];
        }

        cache >>= WINDOW_BITS;
        remaining -= 1;
    }

    Ok(draws)
}

/// Overwrites every byte of `buf` with a random symbol of [`ALPHABET`].
///
/// Returns the number of values drawn from `rng`, which is zero for an empty buffer.
pub fn fill_alphanumeric<R: RngCore + ?Sized>(rng: &mut R, buf: &mut [u8]) -> usize {
    let draws = match fill_with::<Infallible, _>(buf, || Ok(next_int63(rng))) {
        Ok(draws) => draws,
        Err(never) => match never {},
    };

    trace!(len = buf.len(), draws, "filled alphanumeric buffer");
    draws
}

/// Same as [`fill_alphanumeric`] but draws through [`RngCore::try_fill_bytes`].
///
/// # Errors
/// Returns [`crate::error::Error::Entropy`] as soon as `rng` fails. The content of
/// `buf` is unspecified in that case.
pub fn try_fill_alphanumeric<R: RngCore + ?Sized>(rng: &mut R, buf: &mut [u8]) -> Result<usize> {
    let draws = fill_with(buf, || try_next_int63(rng))?;

    trace!(len = buf.len(), draws, "filled alphanumeric buffer");
    Ok(draws)
}

/// Returns a string of `n` symbols drawn uniformly from [`ALPHABET`].
///
/// `n <= 0` returns an empty string without touching `rng`.
#[instrument(level = "trace", skip(rng))]
pub fn gen_random_string<R: RngCore + ?Sized>(rng: &mut R, n: isize) -> String {
    if n <= 0 {
        return String::new();
    }

    let mut buf = vec![0u8; n as usize];
    fill_alphanumeric(rng, &mut buf);
    String::from_utf8(buf).expect("ALPHABET only contains ascii symbols")
}

/// Fallible version of [`gen_random_string`] for entropy sources that can fail
/// (eg: [`rand::rngs::OsRng`]).
///
/// # Errors
/// Returns [`crate::error::Error::Entropy`] if `rng` fails. No partial string is returned.
#[instrument(level = "trace", skip(rng))]
pub fn try_gen_random_string<R: RngCore + ?Sized>(rng: &mut R, n: isize) -> Result<String> {
    if n <= 0 {
        return Ok(String::new());
    }

    let mut buf = vec![0u8; n as usize];
    try_fill_alphanumeric(rng, &mut buf)?;
    Ok(String::from_utf8(buf)?)
}

/// [`gen_random_string`] backed by [`rand::thread_rng`]
pub fn random_string(n: isize) -> String {
    gen_random_string(&mut rand::thread_rng(), n)
}
