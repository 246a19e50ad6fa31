use derive_new::new;
use minus::Pager;
use std::io::{self, Write};

/// Wrapper that implements `Write` for the minus pager
///
/// The minus pager takes `&str` chunks, while the unified writer emits raw
/// bytes in pieces (prefix, element, terminator). Bytes that end in the
/// middle of a UTF-8 sequence are held back until the rest arrives. Bytes
/// that can never form valid UTF-8 are shown as U+FFFD.
///
/// ## Usage
///
/// ```ignore
/// let pager = Pager::new();
/// let mut writer = PagerWriter::new(pager.clone());
/// script.write_unified(&mut writer, &pair, 3, &opts)?;
/// writer.flush()?;
/// minus::page_all(pager)?;
/// ```
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
    #[new(default)]
    pending: Vec<u8>,
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.pending.extend_from_slice(buf);

        let text = take_complete(&mut self.pending);
        if !text.is_empty() {
            self.pager.push_str(text).map_err(io::Error::other)?;
        }

        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.pending.is_empty() {
            return Ok(());
        }

        let rest = std::mem::take(&mut self.pending);
        let text = String::from_utf8_lossy(&rest).into_owned();
        self.pager.push_str(text).map_err(io::Error::other)
    }
}

/// Drains everything but a trailing incomplete UTF-8 sequence, decoding
/// invalid bytes lossily.
fn take_complete(pending: &mut Vec<u8>) -> String {
    let mut at = 0;
    let complete = loop {
        match std::str::from_utf8(&pending[at..]) {
            Ok(_) => break pending.len(),
            Err(e) => match e.error_len() {
                Some(len) => at += e.valid_up_to() + len,
                None => break at + e.valid_up_to(),
            },
        }
    };

    let text = String::from_utf8_lossy(&pending[..complete]).into_owned();
    pending.drain(..complete);
    text
}
