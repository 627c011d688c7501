use alloc::vec::Vec;

/// Splits `bytes` into consecutive non-empty chunks whose sizes are derived
/// from `splits`; whatever the splits do not cover becomes the last chunk.
pub(crate) fn partition<'a>(bytes: &'a [u8], splits: &[usize]) -> Vec<&'a [u8]> {
    let mut chunks = Vec::new();
    let mut rest = bytes;
    for s in splits {
        if rest.is_empty() {
            break;
        }
        let (chunk, tail) = rest.split_at(1 + s % rest.len());
        chunks.push(chunk);
        rest = tail;
    }
    if !rest.is_empty() {
        chunks.push(rest);
    }
    chunks
}

#[test]
fn partition_covers_input_in_order() {
    let bytes = b"A1 LOGIN {3}\r\nbob\r\n";
    let chunks = partition(bytes, &[0, 4, 100]);
    assert_eq!(chunks[0], b"A");
    assert_eq!(chunks[1], b"1 LOG");
    assert_eq!(chunks.concat(), bytes);
    assert!(chunks.iter().all(|c| !c.is_empty()));
}
