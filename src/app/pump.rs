//! Forwards raw input to a stream line by line.
//!
//! Each line is written on its own as soon as it arrives, so every line gets
//! its own prefix, and a line split across reads reaches the stream as
//! several partial writes.
use anyhow::Result;
use std::io::{ErrorKind, Read};
use teelog::Stream;

const CHUNK_SIZE: usize = 8 * 1024;

pub fn pump<R: Read>(mut input: R, stream: &mut Stream) -> Result<()> {
    let mut buf = vec![0u8; CHUNK_SIZE];
    // Bytes of a UTF-8 sequence cut off at the end of the previous read.
    let mut pending: Vec<u8> = Vec::new();

    loop {
        let n = match input.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(err.into()),
        };
        pending.extend_from_slice(&buf[..n]);

        let text = take_complete(&mut pending);
        for line in text.split_inclusive('\n') {
            stream.write(&[line.into()])?;
        }
    }

    if !pending.is_empty() {
        let rest = String::from_utf8_lossy(&pending).into_owned();
        stream.write(&[rest.into()])?;
    }
    Ok(())
}

/// Removes and returns the longest decodable prefix of `pending`. Invalid
/// sequences are replaced; an incomplete trailing sequence stays behind.
fn take_complete(pending: &mut Vec<u8>) -> String {
    let mut out = String::new();
    loop {
        match std::str::from_utf8(pending) {
            Ok(text) => {
                out.push_str(text);
                pending.clear();
                return out;
            }
            Err(err) => {
                let valid = err.valid_up_to();
                out.push_str(&String::from_utf8_lossy(&pending[..valid]));
                match err.error_len() {
                    Some(len) => {
                        out.push(char::REPLACEMENT_CHARACTER);
                        pending.drain(..valid + len);
                    }
                    None => {
                        pending.drain(..valid);
                        return out;
                    }
                }
            }
        }
    }
}
