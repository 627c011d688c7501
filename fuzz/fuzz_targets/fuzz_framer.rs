#![no_main]
use arbitrary::Arbitrary;
use imap_framing::{FramedBuffer, FramingOptions, LiteralFramer};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    strict_crlf: bool,
    data: Vec<u8>,
    /// Chunk sizes for the split feed; zero entries become one-byte chunks.
    splits: Vec<u16>,
    /// How much of each exposed prefix to consume after every scan.
    consumes: Vec<u16>,
}

fuzz_target!(|input: Input| framer(input));

fn framer(input: Input) {
    let options = FramingOptions {
        strict_crlf: input.strict_crlf,
    };

    let whole = LiteralFramer::with_options(options).scan(&input.data);
    assert!(whole.maximum_valid_bytes <= input.data.len());

    let mut split = LiteralFramer::with_options(options);
    let mut buffered = FramedBuffer::new(options);
    let mut consumed = 0;
    let mut found = 0;
    let mut end = 0;
    let mut consumes = input.consumes.iter().copied().cycle();

    for chunk in split_into_chunks(&input.data, &input.splits) {
        end += chunk.len();
        let result = split.scan(&input.data[..end]);
        assert!(result.maximum_valid_bytes <= end);
        found += result.synchronizing_literal_count;

        let fed = buffered.feed(chunk);
        assert_eq!(consumed + fed.maximum_valid_bytes, result.maximum_valid_bytes);
        let n = usize::from(consumes.next().unwrap_or(0)) % (fed.maximum_valid_bytes + 1);
        buffered.consume(n).expect("consume within frame");
        consumed += n;
    }

    let last = split.scan(&input.data);
    assert_eq!(last.maximum_valid_bytes, whole.maximum_valid_bytes);
    assert_eq!(found + last.synchronizing_literal_count, whole.synchronizing_literal_count);
    assert_eq!(
        buffered.continuations_owed(),
        whole.synchronizing_literal_count - last.synchronizing_literal_count
    );
}

/// Split `data` into consecutive non-empty chunks sized by `splits`, with the
/// remainder as the final chunk.
fn split_into_chunks<'a>(data: &'a [u8], splits: &[u16]) -> Vec<&'a [u8]> {
    let mut chunks = Vec::new();
    let mut rest = data;
    for &size in splits {
        if rest.is_empty() {
            break;
        }
        let size = usize::from(size).clamp(1, rest.len());
        let (chunk, tail) = rest.split_at(size);
        chunks.push(chunk);
        rest = tail;
    }
    if !rest.is_empty() {
        chunks.push(rest);
    }
    chunks
}
