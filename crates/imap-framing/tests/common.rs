#![allow(missing_docs)]

// A login with one synchronizing and one non-synchronizing literal, a binary
// APPEND whose payload contains a line break, and a line ending in a
// declaration-like suffix that is not one. Chunks are cut mid-terminator and
// mid-payload.
#[rustfmt::skip]
pub const STREAM: [&[u8]; 7] = [
    b"A001 LOGIN {5}\r",                   // terminator split
    b"\nali",                              // {5} complete, 3 of 5 payload bytes
    b"ce {6+}\r\nsecret\r\n",              // payload ends, LITERAL+ resolves in one go
    b"A002 APPEND INBOX ~{12}\r\nHello\r\n", // binary literal, payload has CRLF
    b"World\r\n",                          // payload ends, command line ends
    b"A003 X {3-}",                        // not a declaration, unterminated
    b"\r\n",
];

pub fn concat() -> Vec<u8> {
    STREAM.concat()
}
