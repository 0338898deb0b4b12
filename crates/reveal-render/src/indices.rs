//! Index buffer shared by every stroke instance.

use reveal_core::{RevealConfig, RevealError, Result};

/// Triangle indices for one segment: subdivision `i` is the triangle `[i, i + 1, i + 2]`.
///
/// Drawing `k` subdivisions of a segment means drawing the first `3 * k` indices.
pub fn stroke_indices(subdivisions: u32) -> Result<Vec<u16>> {
    if subdivisions > RevealConfig::MAX_SUBDIVISIONS {
        return Err(RevealError::configuration(format!(
            "{} subdivisions exceed the u16 index range (max {})",
            subdivisions,
            RevealConfig::MAX_SUBDIVISIONS
        )));
    }

    let mut indices = Vec::with_capacity(subdivisions as usize * 3);
    for i in 0..subdivisions as u16 {
        indices.extend_from_slice(&[i, i + 1, i + 2]);
    }
    Ok(indices)
}

/// Index count to draw for a subdivision count.
pub fn index_count(subdivisions: u32) -> u32 {
    subdivisions * 3
}
