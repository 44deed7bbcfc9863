use alloc::vec::Vec;
use enough::Stop;

use crate::bmp;
use crate::decode::{DecodeRequest, DecodedBitmap};
use crate::error::BmpError;
use crate::grayscale::apply_grayscale;
use crate::limits::Limits;

/// Encode `bitmap` back to BMP bytes, headers unchanged.
pub fn encode_bmp(bitmap: &DecodedBitmap, stop: impl Stop) -> Result<Vec<u8>, BmpError> {
    encode_dyn(bitmap, &stop)
}

pub(crate) fn encode_dyn(bitmap: &DecodedBitmap, stop: &dyn Stop) -> Result<Vec<u8>, BmpError> {
    let mut out = Vec::new();
    bmp::encode_grid(&mut out, &bitmap.headers, &bitmap.grid, stop)?;
    Ok(out)
}

/// Decode a BMP, convert it to grayscale and encode it again.
///
/// The in-memory form of [`crate::convert_to_grayscale_bmp`].
pub fn convert_bytes(data: &[u8], stop: impl Stop) -> Result<Vec<u8>, BmpError> {
    convert_dyn(data, None, &stop).map(|(_, bytes)| bytes)
}

/// Shared by [`convert_bytes`] and the file pipeline; also hands back the
/// decoded headers.
pub(crate) fn convert_dyn(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<(bmp::BmpHeaders, Vec<u8>), BmpError> {
    let mut request = DecodeRequest::new(data);
    if let Some(limits) = limits {
        request = request.with_limits(limits);
    }
    let mut bitmap = request.decode_dyn(stop)?;
    apply_grayscale(&mut bitmap.grid);
    stop.check()?;
    let bytes = encode_dyn(&bitmap, stop)?;
    Ok((bitmap.headers, bytes))
}
