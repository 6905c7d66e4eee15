/// Cells per grid side; a mirrored row is this wide
pub const GRID_DIM: usize = 5;

// Digest bytes consumed per row
const ROW_SOURCE_LEN: usize = 3;

// Odd bytes become colored cells
fn parity_bit(byte: u8) -> u8 {
    byte % 2
}

// [a, b, c] becomes [a, b, c, b, a]
fn mirror_row(bits: &[u8]) -> [u8; GRID_DIM] {
    [bits[0], bits[1], bits[2], bits[1], bits[0]]
}

/// Derives the flattened indices of colored cells from digest bytes.
///
/// Bytes are consumed in groups of three; a trailing incomplete group is
/// discarded. Each group is mirrored into a symmetric five-cell row, rows
/// are concatenated in order and cells produced by odd bytes are retained,
/// in ascending index order.
pub fn build_grid(digest: &[u8]) -> Vec<usize> {
    let bits: Vec<u8> = digest.iter().copied().map(parity_bit).collect();
    bits.chunks_exact(ROW_SOURCE_LEN)
        .flat_map(mirror_row)
        .enumerate()
        .filter(|(_, bit)| *bit == 1)
        .map(|(index, _)| index)
        .collect()
}
