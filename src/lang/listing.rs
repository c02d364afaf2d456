/// ## Program text prepared for loading
///
/// Source text is a stream of single-character opcodes. In stripped
/// form, `#` comments and blank space are removed so the bytes placed
/// in memory are exactly the executable program. Lines that declare a
/// label (first character `:`) keep their interior spacing because
/// every byte after a label is addressable program text.

#[derive(Debug, Default)]
pub struct Listing {
    bytes: Vec<u8>,
}

impl Listing {
    /// Prepare source text for loading. With `strip` set, comments and
    /// blank space are removed and lines concatenate with no separator;
    /// otherwise bytes pass through unmodified, linefeeds included, and
    /// the `#` opcode skips comments when the program runs.
    pub fn from_str(source: &str, strip: bool) -> Listing {
        let mut bytes: Vec<u8> = vec![];
        for line in source.lines() {
            if strip {
                let line = match line.find('#') {
                    Some(index) => &line[..index],
                    None => line,
                };
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if line.starts_with(':') {
                    bytes.extend_from_slice(line.as_bytes());
                } else {
                    bytes.extend(line.bytes().filter(|byte| *byte != b' '));
                }
            } else {
                bytes.extend_from_slice(line.as_bytes());
                bytes.push(b'\n');
            }
        }
        Listing { bytes }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
