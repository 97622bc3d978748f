//! Page iteration over a MediaWiki XML dump.
//!
//! Pages are yielded as the raw text of each `<page>...</page>` element,
//! escapes intact, which is the form [`crate::Cleaner::clean`] expects. The
//! dump is scanned line by line, so memory use is bounded by the largest
//! page. Gzip-compressed dumps are detected by their magic bytes.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use bstr::ByteSlice;
use flate2::read::MultiGzDecoder;

use crate::error::Result;

const PAGE_START: &[u8] = b"<page>";
const PAGE_END: &[u8] = b"</page>";
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Iterator over the raw `<page>` elements of a dump.
pub struct PageReader<R> {
    reader: R,
    line: Vec<u8>,
    page: Vec<u8>,
    pages_read: usize,
}

impl PageReader<Box<dyn BufRead>> {
    /// Open a dump file, plain or gzip-compressed.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut file = BufReader::new(File::open(path)?);
        let gzipped = file.fill_buf()?.starts_with(&GZIP_MAGIC);
        log::debug!(
            "opening dump {} ({})",
            path.display(),
            if gzipped { "gzip" } else { "plain" }
        );

        let reader: Box<dyn BufRead> = if gzipped {
            Box::new(BufReader::new(MultiGzDecoder::new(file)))
        } else {
            Box::new(file)
        };
        Ok(Self::new(reader))
    }
}

impl<R: BufRead> PageReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: Vec::new(),
            page: Vec::new(),
            pages_read: 0,
        }
    }

    /// Number of complete pages yielded so far.
    pub fn pages_read(&self) -> usize {
        self.pages_read
    }

    /// Read the next complete page, or `None` at end of input.
    ///
    /// A page cut off by end of input is discarded with a warning.
    pub fn read_page(&mut self) -> Result<Option<String>> {
        let mut in_page = false;
        self.page.clear();

        loop {
            self.line.clear();
            if self.reader.read_until(b'\n', &mut self.line)? == 0 {
                if in_page {
                    log::warn!(
                        "dump ended inside a page after {} complete pages",
                        self.pages_read
                    );
                }
                return Ok(None);
            }

            let appended_at = self.page.len();
            if !in_page {
                match self.line.find(PAGE_START) {
                    Some(start) => {
                        in_page = true;
                        self.page.extend_from_slice(&self.line[start..]);
                    }
                    None => continue,
                }
            } else {
                self.page.extend_from_slice(&self.line);
            }

            if let Some(end) = self.page[appended_at..].find(PAGE_END) {
                self.page.truncate(appended_at + end + PAGE_END.len());
                self.pages_read += 1;
                return Ok(Some(decode_page(&self.page).into_owned()));
            }
        }
    }
}

impl<R: BufRead> Iterator for PageReader<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_page().transpose()
    }
}

/// Decode page bytes as UTF-8, replacing malformed sequences.
///
/// Uses `Cow<str>` to avoid allocation when the input is valid UTF-8.
pub fn decode_page(bytes: &[u8]) -> Cow<'_, str> {
    let (text, _encoding, malformed) = encoding_rs::UTF_8.decode(bytes);
    if malformed {
        log::warn!("page contains malformed UTF-8; invalid bytes replaced");
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    use flate2::Compression;
    use flate2::write::GzEncoder;

    const DUMP: &str = r#"<mediawiki xmlns="http://www.mediawiki.org/xml/export-0.10/">
  <siteinfo>
    <sitename>Wikipedia</sitename>
  </siteinfo>
  <page>
    <title>Anarchism</title>
    <ns>0</ns>
    <revision>
      <text xml:space="preserve">'''Anarchism''' is.
== History ==
Old.</text>
    </revision>
  </page>
  <page>
    <title>Category:Anarchism</title>
    <ns>14</ns>
    <revision><text xml:space="preserve">x</text></revision>
  </page>
</mediawiki>
"#;

    #[test]
    fn test_reads_pages_in_order() {
        let pages: Vec<String> = PageReader::new(Cursor::new(DUMP))
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(pages.len(), 2);
        assert!(pages[0].starts_with("<page>"));
        assert!(pages[0].ends_with("</page>"));
        assert!(pages[0].contains("== History ==\nOld."));
        assert!(pages[1].contains("<ns>14</ns>"));
    }

    #[test]
    fn test_single_line_page() {
        let mut reader = PageReader::new(Cursor::new("  <page><title>A</title></page>\n"));
        assert_eq!(
            reader.read_page().unwrap().as_deref(),
            Some("<page><title>A</title></page>")
        );
        assert_eq!(reader.read_page().unwrap(), None);
        assert_eq!(reader.pages_read(), 1);
    }

    #[test]
    fn test_truncated_page_is_dropped() {
        let mut reader = PageReader::new(Cursor::new("<page>\n<title>A</title>\n"));
        assert_eq!(reader.read_page().unwrap(), None);
        assert_eq!(reader.pages_read(), 0);
    }

    #[test]
    fn test_decode_page_replaces_invalid_bytes() {
        assert_eq!(decode_page("政府".as_bytes()), "政府");
        assert_eq!(decode_page(b"a\xffb"), "a\u{FFFD}b");
    }

    #[test]
    fn test_open_plain_and_gzip() {
        let dir = tempfile::tempdir().unwrap();

        let plain = dir.path().join("dump.xml");
        std::fs::write(&plain, DUMP).unwrap();

        let gz = dir.path().join("dump.xml.gz");
        let mut encoder = GzEncoder::new(File::create(&gz).unwrap(), Compression::default());
        encoder.write_all(DUMP.as_bytes()).unwrap();
        encoder.finish().unwrap();

        for path in [plain, gz] {
            let titles: Vec<String> = PageReader::open(&path)
                .unwrap()
                .map(|page| crate::page::title(&page.unwrap()))
                .collect();
            assert_eq!(titles, ["Anarchism", "Category:Anarchism"]);
        }
    }

    #[test]
    fn test_open_missing_file() {
        assert!(matches!(
            PageReader::open("/nonexistent/dump.xml"),
            Err(crate::Error::Io(_))
        ));
    }
}
