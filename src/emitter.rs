/// Replays the glyph sheet onto a terminal.
use anyhow::Result;
use log::debug;

use crate::config::ConfigFile;
use crate::glyphs::{GROUPS, Group, Mode};
use crate::term::Terminal;

#[derive(Debug, Clone, Copy)]
pub struct EmitOptions {
    /// Clear the display before the first line
    pub clear: bool,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self { clear: true }
    }
}

impl EmitOptions {
    /// Merge the config file with the command line. `--no-clear` wins over `clear_screen`.
    pub fn resolve(file: &ConfigFile, no_clear: bool) -> Self {
        Self {
            clear: file.clear_screen && !no_clear,
        }
    }
}

/// Print the glyph sheet.
pub fn run(term: &mut impl Terminal, opts: EmitOptions) -> Result<()> {
    emit_groups(term, GROUPS, opts)
}

/// Clear once, write every group header and entry in table order, then
/// end with a line break whatever the last entry's mode was.
fn emit_groups(term: &mut impl Terminal, groups: &[Group], opts: EmitOptions) -> Result<()> {
    if opts.clear {
        term.clear_all()?;
    }

    for group in groups {
        debug!("emitting {} entries under {:?}", group.entries.len(), group.header);
        print(term, group.header)?;
        for entry in group.entries {
            let text = entry.render();
            match entry.mode {
                Mode::Write => term.write(&text)?,
                Mode::Print => print(term, &text)?,
            }
        }
    }

    term.write("\n")?;
    term.flush()
}

fn print(term: &mut impl Terminal, text: &str) -> Result<()> {
    term.write(text)?;
    term.write("\n")
}
