//!
//! Contains the vint codec used for both element ids and element data sizes.
//!
//! EBML vints are big-endian integers whose length (1-8 bytes) is given by the position of the first set bit in the first byte:
//!
//! ```text
//! 1xxx xxxx                                      - value 0 to  2^7-2
//! 01xx xxxx  xxxx xxxx                           - value 0 to 2^14-2
//! 001x xxxx  xxxx xxxx  xxxx xxxx                - value 0 to 2^21-2
//! ...
//! 0000 0001  xxxx xxxx  (6 more bytes)           - value 0 to 2^56-2
//! ```
//!
//! Data sizes are read "masked" (the length marker is stripped from the value).  Element ids are read "unmasked" - the marker is part of the id.
//!

use super::errors::tool::ToolError;

const MAX_VINT_LENGTH: usize = 8;

///
/// Trait to enable easy serialization to a vint.
///
/// This is only available for types that can be cast as `u64`.
///
pub trait Vint: Into<u64> + Copy {
    ///
    /// Returns a representation of the current value as a vint array, using the shortest possible length.
    ///
    /// # Errors
    ///
    /// This can return an error if the value is too large to be representable as a vint.
    ///
    fn as_vint(&self) -> Result<Vec<u8>, ToolError> {
        let val: u64 = (*self).into();
        check_size_u64(val, MAX_VINT_LENGTH)?;
        let mut length = 1;
        while length < MAX_VINT_LENGTH && val >= max_value(length) {
            length += 1;
        }

        Ok(as_vint_no_check_u64(val, length))
    }

    ///
    /// Returns a representation of the current value as a vint array with a specified length.
    ///
    /// # Errors
    ///
    /// This can return an error if the length is not between 1 and 8 or if the value is too large to be representable in `length` bytes.
    ///
    fn as_vint_with_length(&self, length: usize) -> Result<Vec<u8>, ToolError> {
        if !(1..=MAX_VINT_LENGTH).contains(&length) {
            return Err(ToolError::InvalidArgument(length));
        }
        let val: u64 = (*self).into();
        check_size_u64(val, length)?;
        Ok(as_vint_no_check_u64(val, length))
    }
}

impl Vint for u64 { }
impl Vint for u32 { }
impl Vint for u16 { }
impl Vint for u8 { }

// The all-ones pattern is reserved for "unknown size", so the largest
// writable value at a given length is one less than the full data width.
#[inline]
fn max_value(length: usize) -> u64 {
    (1 << (length * 7)) - 1
}

#[inline]
fn check_size_u64(val: u64, max_length: usize) -> Result<(), ToolError> {
    if val >= max_value(max_length) {
        Err(ToolError::WriteVintOverflow(val))
    } else {
        Ok(())
    }
}

#[inline]
fn as_vint_no_check_u64(val: u64, length: usize) -> Vec<u8> {
    let bytes: [u8; 8] = val.to_be_bytes();
    let mut result: Vec<u8> = Vec::from(&bytes[(8-length)..]);
    result[0] |= 1 << (8 - length);
    result
}

///
/// Returns the encoded bytes of an element id.
///
/// Ids are stored unmasked, so the bytes are simply the big-endian representation of the id without leading zero bytes.  The length marker implied by the first byte must agree with the number of bytes.
///
/// # Errors
///
/// Returns [`ToolError::InvalidId`] if `id` is not a well formed vint (e.g. `0`, or `0x4000_0000` whose marker says two bytes but whose value needs four).
///
/// ## Example
///
/// ```
/// # use ebml_tree::tools::encode_id;
/// assert_eq!(vec![0x1a, 0x45, 0xdf, 0xa3], encode_id(0x1a45dfa3).unwrap());
/// assert!(encode_id(0x0a45dfa3).is_err());
/// ```
///
pub fn encode_id(id: u32) -> Result<Vec<u8>, ToolError> {
    let bytes = id.to_be_bytes();
    let skip = bytes.iter().take_while(|b| **b == 0).count();
    let encoded = &bytes[skip..];
    match encoded.first() {
        Some(lead) if vint_length(*lead) == Ok(encoded.len()) => Ok(encoded.to_vec()),
        _ => Err(ToolError::InvalidId(id)),
    }
}

///
/// Returns the total encoded length (1-8) of a vint, based on its first byte.
///
/// # Errors
///
/// Returns [`ToolError::InvalidVarint`] if `lead` is `0x00`, as no length marker is present.
///
pub fn vint_length(lead: u8) -> Result<usize, ToolError> {
    if lead == 0 {
        return Err(ToolError::InvalidVarint);
    }
    Ok(lead.leading_zeros() as usize + 1)
}

///
/// Folds exactly one vint's worth of bytes into a value.
///
/// When `masked` is true the length marker bits of the first byte are cleared (data size convention).  Otherwise the first byte participates in full (element id convention).  The caller is responsible for providing the number of bytes indicated by [`vint_length`].
///
/// # Errors
///
/// Returns [`ToolError::InvalidArgument`] if `bytes` is empty or longer than 8 bytes.
///
/// ## Example
///
/// ```
/// # use ebml_tree::tools::decode_vint;
/// assert_eq!(0x1a45dfa3, decode_vint(&[0x1a, 0x45, 0xdf, 0xa3], false).unwrap());
/// assert_eq!(0x0a45dfa3, decode_vint(&[0x1a, 0x45, 0xdf, 0xa3], true).unwrap());
/// ```
///
pub fn decode_vint(bytes: &[u8], masked: bool) -> Result<u64, ToolError> {
    let length = bytes.len();
    if !(1..=MAX_VINT_LENGTH).contains(&length) {
        return Err(ToolError::InvalidArgument(length));
    }

    let mut value = if masked {
        let mask = (1u16 << (8 - length)) - 1;
        (bytes[0] as u16 & mask) as u64
    } else {
        bytes[0] as u64
    };

    for byte in &bytes[1..] {
        value = (value << 8) + *byte as u64;
    }
    Ok(value)
}

///
/// Reads a vint from the beginning of the input array slice.
///
/// This method returns an option with the `None` variant used to indicate there was not enough data in the buffer to completely read a vint.
///
/// The returned tuple contains the value of the vint (`u64`) and the length of the vint (`usize`).  The length will be less than or equal to the length of the input slice.
///
/// # Errors
///
/// This method can return a `ToolError` if the input array cannot be read as a vint.
///
pub fn read_vint(buffer: &[u8], masked: bool) -> Result<Option<(u64, usize)>, ToolError> {
    let Some(lead) = buffer.first() else {
        return Ok(None);
    };

    let length = vint_length(*lead)?;

    if length > buffer.len() {
        // Not enough data in the buffer to read out the vint value
        return Ok(None);
    }

    Ok(Some((decode_vint(&buffer[..length], masked)?, length)))
}

///
/// Returns whether a masked size value is the reserved "unknown size" marker for its length.
///
/// The decoder does not treat these specially - an unknown sized element decodes to a very large size and will usually fail the bounds check of its parent.  This is a known limitation.
///
pub fn is_unknown_size(value: u64, length: usize) -> bool {
    (1..=MAX_VINT_LENGTH).contains(&length) && value == max_value(length)
}
