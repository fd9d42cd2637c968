use std::{
    collections::VecDeque,
    fmt,
    io::{self, BufRead, BufReader, Write},
};

use crate::error::Error;

/// The machine's character console: an output sink plus a line-buffered
/// input source feeding the `in` opcode one character at a time.
///
/// Input is read one full line at a time. The pending buffer holds the
/// unconsumed tail of the last line; when it runs dry the console blocks
/// on the next line, appending a terminator if the source omitted one. An
/// optional playback source is drained line by line before the interactive
/// channel, and each replayed line is echoed to the output.
pub struct Console {
    input: Box<dyn BufRead>,
    output: Box<dyn Write>,
    playback: Option<Box<dyn BufRead>>,
    pending: VecDeque<u8>,
}

impl Console {
    /// A console wired to process stdin/stdout.
    pub fn new() -> Self {
        Self {
            input: Box::new(BufReader::new(io::stdin())),
            output: Box::new(io::stdout()),
            playback: None,
            pending: VecDeque::new(),
        }
    }

    /// A console over caller-provided channels.
    pub fn with_io(input: Box<dyn BufRead>, output: Box<dyn Write>) -> Self {
        Self { input, output, playback: None, pending: VecDeque::new() }
    }

    /// Attaches a playback source whose lines are consumed before the
    /// interactive channel.
    pub fn with_playback(mut self, playback: Box<dyn BufRead>) -> Self {
        self.playback = Some(playback);
        self
    }

    /// Writes the character with code `code` to the output channel.
    pub fn put_char(&mut self, code: u16) -> Result<(), Error> {
        let c = char::from_u32(u32::from(code)).unwrap_or(char::REPLACEMENT_CHARACTER);
        write!(self.output, "{c}")?;
        Ok(())
    }

    /// Removes and returns the next character of the pending line, blocking
    /// on a fresh line from the playback or input channel when the buffer
    /// is empty.
    pub fn read_char(&mut self) -> Result<u16, Error> {
        if self.pending.is_empty() {
            self.refill()?;
        }

        // a successful refill leaves at least the line terminator pending
        match self.pending.pop_front() {
            Some(byte) => Ok(u16::from(byte)),
            None => Err(io::Error::from(io::ErrorKind::UnexpectedEof).into()),
        }
    }

    /// Flushes the output channel.
    pub fn flush(&mut self) -> Result<(), Error> {
        self.output.flush()?;
        Ok(())
    }

    fn refill(&mut self) -> Result<(), Error> {
        // the program may have printed a prompt with no trailing newline
        self.output.flush()?;

        let mut line = String::new();
        if let Some(playback) = self.playback.as_mut() {
            if playback.read_line(&mut line)? == 0 {
                self.playback = None;
            } else {
                write!(self.output, "{line}")?;
            }
        }

        if line.is_empty() && self.input.read_line(&mut line)? == 0 {
            return Err(
                io::Error::new(io::ErrorKind::UnexpectedEof, "input channel closed").into()
            );
        }

        if !line.ends_with('\n') {
            line.push('\n');
        }
        self.pending.extend(line.bytes());

        Ok(())
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Console {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Console")
            .field("pending", &self.pending.len())
            .field("playback", &self.playback.is_some())
            .finish()
    }
}


#[cfg(test)]
mod tests {
    use super::{capture::Sink, *};
    use std::io::Cursor;

    #[test]
    fn test_single_line_feeds_consecutive_reads() {
        let mut console =
            Console::with_io(Box::new(Cursor::new(b"ab\n".to_vec())), Box::new(Sink::new()));

        assert_eq!(console.read_char().expect("first char"), u16::from(b'a'));
        assert_eq!(console.read_char().expect("second char"), u16::from(b'b'));
        assert_eq!(console.read_char().expect("terminator"), u16::from(b'\n'));
    }

    #[test]
    fn test_missing_terminator_is_appended() {
        let mut console =
            Console::with_io(Box::new(Cursor::new(b"ok".to_vec())), Box::new(Sink::new()));

        assert_eq!(console.read_char().expect("first char"), u16::from(b'o'));
        assert_eq!(console.read_char().expect("second char"), u16::from(b'k'));
        assert_eq!(console.read_char().expect("appended terminator"), u16::from(b'\n'));
    }

    #[test]
    fn test_exhausted_input_errors() {
        let mut console =
            Console::with_io(Box::new(Cursor::new(Vec::new())), Box::new(Sink::new()));
        assert!(console.read_char().is_err());
    }

    #[test]
    fn test_playback_is_drained_and_echoed_before_input() {
        let sink = Sink::new();
        let mut console =
            Console::with_io(Box::new(Cursor::new(b"live\n".to_vec())), Box::new(sink.clone()))
                .with_playback(Box::new(Cursor::new(b"go\n".to_vec())));

        for expected in [b'g', b'o', b'\n', b'l', b'i', b'v', b'e', b'\n'] {
            assert_eq!(console.read_char().expect("scripted char"), u16::from(expected));
        }
        assert_eq!(sink.contents(), b"go\n".to_vec());
    }

    #[test]
    fn test_put_char_writes_through() {
        let sink = Sink::new();
        let mut console =
            Console::with_io(Box::new(Cursor::new(Vec::new())), Box::new(sink.clone()));

        console.put_char(u16::from(b'h')).expect("write");
        console.put_char(u16::from(b'i')).expect("write");
        console.flush().expect("flush");
        assert_eq!(sink.contents(), b"hi".to_vec());
    }
}
