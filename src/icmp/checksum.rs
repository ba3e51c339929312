/// Internet checksum (RFC 1071) over an even number of bytes.
///
/// The buffer is summed as big-endian 16-bit words, carries are folded back
/// into the low 16 bits and the one's complement of the result is returned.
/// The checksum field inside `data` must be zero when this is called.
///
/// # Panics
///
/// Panics if `data` has an odd length. Every header this crate checksums has a
/// fixed even size, so an odd length means a header layout is broken.
pub fn checksum(data: &[u8]) -> u16 {
    assert!(
        data.len() % 2 == 0,
        "checksum: number of bytes {} must be even",
        data.len()
    );

    let mut accu: u32 = 0;
    for word in data.chunks_exact(2) {
        accu += u32::from(u16::from_be_bytes([word[0], word[1]]));
        // Fold as we go so accu never exceeds 0xffff between adds.
        accu = (accu & 0xffff) + (accu >> 16);
    }

    // Fold 32-bit sum to 16 bits
    while accu >> 16 != 0 {
        accu = (accu & 0xffff) + (accu >> 16);
    }

    #[allow(clippy::cast_possible_truncation)]
    let folded = accu as u16;
    !folded
}
