//! Plain-text tree formatter

use std::io::{self, Write};

use crate::tree::TreeSink;

const ROOT_GLYPH: &str = "📁";
const DIR_GLYPH: &str = "📂";
const FILE_GLYPH: &str = "📄";
const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";

/// Renders the tree as text: a root line, a blank line, then
/// `{prefix}{connector}{glyph} {name}` per entry with a trailing `/` on
/// directories. Wrap the output `File` in a `BufWriter` before handing it
/// in; `into_inner` gives the writer back for flushing.
pub struct TextFormatter<W: Write> {
    out: W,
}

impl<W: Write> TextFormatter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TreeSink for TextFormatter<W> {
    fn root(&mut self, name: &str) -> io::Result<()> {
        writeln!(self.out, "{ROOT_GLYPH} {name}/")?;
        writeln!(self.out)
    }

    fn entry(&mut self, name: &str, is_dir: bool, is_last: bool, prefix: &str) -> io::Result<()> {
        let connector = if is_last { LAST_BRANCH } else { BRANCH };
        if is_dir {
            writeln!(self.out, "{prefix}{connector}{DIR_GLYPH} {name}/")
        } else {
            writeln!(self.out, "{prefix}{connector}{FILE_GLYPH} {name}")
        }
    }

    fn permission_denied(&mut self, prefix: &str) -> io::Result<()> {
        writeln!(self.out, "{prefix}{BRANCH}⚠️  [Permission Denied]")
    }
}
