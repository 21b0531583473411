//! Standard-input reading

use crate::error::AcquireError;
use std::io::Read;

/// Read `reader` to end-of-input.
pub fn read_stream<R: Read>(mut reader: R) -> Result<Vec<u8>, AcquireError> {
    let mut content = Vec::new();
    reader.read_to_end(&mut content).map_err(AcquireError::ReadStdin)?;
    Ok(content)
}
