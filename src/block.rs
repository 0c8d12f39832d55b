//! Block representation helpers.

/// Length in bytes of one AES block.
pub const BLOCK_SIZE: usize = 16;

/// AES block of 16 bytes.
///
/// During encryption the same buffer doubles as the FIPS-197 state matrix in
/// column-major order: byte `i` sits at row `i % 4`, column `i / 4`.
pub type Block = [u8; BLOCK_SIZE];

/// XORs two blocks, writing the result into `dst`.
#[inline]
pub(crate) fn xor_in_place(dst: &mut Block, rhs: &Block) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}
