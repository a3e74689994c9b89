// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{DecodedKey, DecoderState, ReadlineError, Transition};
use std::io::{BufRead, BufReader, ErrorKind, Read};

/// Reads one [`DecodedKey`] at a time from a raw byte channel.
///
/// Bytes are peeked before they are consumed, so a byte that ends a key without
/// belonging to it (eg: the first byte after a broken UTF-8 sequence) stays in the
/// buffer for the next key. The completion loop relies on the same peek.
#[derive(Debug)]
pub struct KeyDecoder<R: Read> {
    reader: BufReader<R>,
}

impl<R: Read> KeyDecoder<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
        }
    }

    /// Block until one complete key is decoded.
    ///
    /// # Errors
    ///
    /// - [`ReadlineError::ChannelIo`] if the read fails.
    /// - [`ReadlineError::ChannelClosed`] if the channel ends between keys.
    /// - [`ReadlineError::TruncatedSequence`] if the channel ends inside a key.
    pub fn read_key(&mut self) -> Result<DecodedKey, ReadlineError> {
        let mut state = DecoderState::Normal;
        loop {
            let Some(byte) = self.peek_byte()? else {
                return Err(if state.is_normal() {
                    ReadlineError::ChannelClosed
                } else {
                    ReadlineError::TruncatedSequence {
                        pending_state: state,
                    }
                });
            };

            match state.advance(byte) {
                Transition::Pending(next) => {
                    self.consume_byte();
                    state = next;
                }
                Transition::Done(key) => {
                    self.consume_byte();
                    return Ok(key);
                }
                Transition::DoneWithoutConsuming(key) => return Ok(key),
            }
        }
    }

    /// Look at the next byte without consuming it. Returns [None] at end of stream.
    ///
    /// # Errors
    ///
    /// [`ReadlineError::ChannelIo`] if the read fails.
    pub fn peek_byte(&mut self) -> Result<Option<u8>, ReadlineError> {
        loop {
            match self.reader.fill_buf() {
                Ok(buf) => return Ok(buf.first().copied()),
                Err(err) if err.kind() == ErrorKind::Interrupted => {}
                Err(err) => return Err(err.into()),
            }
        }
    }

    /// Drop the byte last returned by [`Self::peek_byte`].
    pub fn consume_byte(&mut self) { self.reader.consume(1); }

    /// Read bytes up to and including `delimiter`. The result is shorter than expected
    /// (missing the delimiter) if the channel ended first.
    ///
    /// # Errors
    ///
    /// [`ReadlineError::ChannelIo`] if the read fails.
    pub fn read_until(&mut self, delimiter: u8) -> Result<Vec<u8>, ReadlineError> {
        let mut acc = vec![];
        self.reader.read_until(delimiter, &mut acc)?;
        Ok(acc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EditCommand, REPLACEMENT_CHARACTER,
                test_fixtures::{FailingReader, InterruptOnceReader}};
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn decoder(bytes: &[u8]) -> KeyDecoder<Cursor<Vec<u8>>> {
        KeyDecoder::new(Cursor::new(bytes.to_vec()))
    }

    #[test]
    fn test_reads_keys_in_order() {
        let mut it = decoder("a\x1b[Cé\r".as_bytes());
        assert_eq!(it.read_key().unwrap(), DecodedKey::Insert('a'));
        assert_eq!(
            it.read_key().unwrap(),
            DecodedKey::Command(EditCommand::MoveRight)
        );
        assert_eq!(it.read_key().unwrap(), DecodedKey::Insert('é'));
        assert_eq!(
            it.read_key().unwrap(),
            DecodedKey::Command(EditCommand::Accept)
        );
        assert!(matches!(it.read_key(), Err(ReadlineError::ChannelClosed)));
    }

    #[test]
    fn test_byte_after_broken_utf8_is_not_lost() {
        let mut it = decoder(&[0xE6, b'x']);
        assert_eq!(
            it.read_key().unwrap(),
            DecodedKey::Insert(REPLACEMENT_CHARACTER)
        );
        assert_eq!(it.read_key().unwrap(), DecodedKey::Insert('x'));
    }

    #[test]
    fn test_eof_inside_sequence_is_truncated() {
        let mut it = decoder(b"\x1b[");
        let err = it.read_key().unwrap_err();
        assert!(matches!(
            err,
            ReadlineError::TruncatedSequence {
                pending_state: DecoderState::CsiSeen
            }
        ));
        assert!(err.is_channel_error());
    }

    #[test]
    fn test_read_failure_is_channel_io() {
        let mut it = KeyDecoder::new(FailingReader);
        assert!(matches!(it.read_key(), Err(ReadlineError::ChannelIo(_))));
    }

    #[test]
    fn test_interrupted_read_is_retried() {
        let mut it = KeyDecoder::new(InterruptOnceReader::new(b"q"));
        assert_eq!(it.read_key().unwrap(), DecodedKey::Insert('q'));
    }

    #[test]
    fn test_peek_then_consume() {
        let mut it = decoder(b"\tz");
        assert_eq!(it.peek_byte().unwrap(), Some(b'\t'));
        assert_eq!(it.peek_byte().unwrap(), Some(b'\t'));
        it.consume_byte();
        assert_eq!(it.read_key().unwrap(), DecodedKey::Insert('z'));
        assert_eq!(it.peek_byte().unwrap(), None);
    }

    #[test]
    fn test_read_until() {
        let mut it = decoder(b"\x1b[24;80Rabc");
        assert_eq!(it.read_until(b'R').unwrap(), b"\x1b[24;80R".to_vec());
        assert_eq!(it.read_until(b'R').unwrap(), b"abc".to_vec());
    }
}
