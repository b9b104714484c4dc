//! Ascon-Mac - C Bindings
//!
//! Exposes Ascon-Mac to C/C++ via FFI with pointer checks and panic boundaries.
//! Built as `cdylib` and `staticlib` so the algorithm crate itself stays
//! `no_std`-capable.
//!
//! Example (C):
//! ```c
//! uint8_t tag[16];
//! int rc = ascon_mac_compute(key, 16, msg, msg_len, tag, sizeof tag);
//! ```

#![allow(unsafe_code)]

use ascon_mac::{key_from_slice, MacError, TAG_SIZE};

use std::slice;

// =============================================================================
// RETURN CODES
// =============================================================================

/// Success.
pub const ASCON_MAC_OK: i32 = 0;
/// A required pointer was null.
pub const ASCON_MAC_ERR_NULL: i32 = -1;
/// A panic was caught at the boundary.
pub const ASCON_MAC_ERR_PANIC: i32 = -2;
/// Key is not 16 bytes.
pub const ASCON_MAC_ERR_KEY_LENGTH: i32 = MacError::InvalidKeyLength { len: 0 }.code();
/// Output buffer shorter than 16 bytes.
pub const ASCON_MAC_ERR_BUFFER_TOO_SMALL: i32 = MacError::BufferTooSmall { len: 0 }.code();

/// View `len` bytes at `ptr`; a null pointer is accepted only for `len == 0`.
unsafe fn input_slice<'a>(ptr: *const u8, len: usize) -> Option<&'a [u8]> {
    if ptr.is_null() {
        return (len == 0).then_some(&[][..]);
    }
    Some(slice::from_raw_parts(ptr, len))
}

// =============================================================================
// ONE-SHOT API
// =============================================================================

/// Compute an Ascon-Mac tag.
///
/// # Safety
/// - `key_ptr` must be valid for `key_len` bytes
/// - `msg_ptr` must be valid for `msg_len` bytes (may be null if `msg_len == 0`)
/// - `tag_ptr` must be valid for `tag_len` writable bytes
///
/// # Returns
/// - `0`: Success, tag written to `tag_ptr[..16]`
/// - `-1`: Null pointer
/// - `-2`: Panic
/// - `-3`: `key_len != 16`
/// - `-4`: `tag_len < 16`
#[no_mangle]
pub unsafe extern "C" fn ascon_mac_compute(
    key_ptr: *const u8,
    key_len: usize,
    msg_ptr: *const u8,
    msg_len: usize,
    tag_ptr: *mut u8,
    tag_len: usize,
) -> i32 {
    if key_ptr.is_null() || tag_ptr.is_null() {
        return ASCON_MAC_ERR_NULL;
    }
    let Some(message) = input_slice(msg_ptr, msg_len) else {
        return ASCON_MAC_ERR_NULL;
    };

    let result = std::panic::catch_unwind(|| {
        let key = slice::from_raw_parts(key_ptr, key_len);
        let out = slice::from_raw_parts_mut(tag_ptr, tag_len);
        ascon_mac::compute_tag_into(key, message, out)
    });

    match result {
        Ok(Ok(())) => ASCON_MAC_OK,
        Ok(Err(e)) => e.code(),
        Err(_) => ASCON_MAC_ERR_PANIC,
    }
}

/// Verify an Ascon-Mac tag in constant time.
///
/// # Safety
/// - `key_ptr` must be valid for `key_len` bytes
/// - `msg_ptr` must be valid for `msg_len` bytes (may be null if `msg_len == 0`)
/// - `tag_ptr` must point to exactly 16 bytes
///
/// # Returns
/// - `1`: Match
/// - `0`: No match
/// - `-1`: Null pointer
/// - `-2`: Panic
/// - `-3`: `key_len != 16`
#[no_mangle]
pub unsafe extern "C" fn ascon_mac_verify(
    key_ptr: *const u8,
    key_len: usize,
    msg_ptr: *const u8,
    msg_len: usize,
    tag_ptr: *const u8,
) -> i32 {
    if key_ptr.is_null() || tag_ptr.is_null() {
        return ASCON_MAC_ERR_NULL;
    }
    let Some(message) = input_slice(msg_ptr, msg_len) else {
        return ASCON_MAC_ERR_NULL;
    };

    let result = std::panic::catch_unwind(|| {
        let key = key_from_slice(slice::from_raw_parts(key_ptr, key_len))?;
        let mut expected = [0u8; TAG_SIZE];
        expected.copy_from_slice(slice::from_raw_parts(tag_ptr, TAG_SIZE));
        Ok::<bool, MacError>(ascon_mac::verify(&key, message, &expected))
    });

    match result {
        Ok(Ok(true)) => 1,
        Ok(Ok(false)) => 0,
        Ok(Err(e)) => e.code(),
        Err(_) => ASCON_MAC_ERR_PANIC,
    }
}
