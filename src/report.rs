//! Value/address report for a single stack integer.
//!
//! `write_report` keeps `age` in a local slot, borrows it as `p_age`, and
//! prints the value and address both directly and through the borrow.
//! Addresses use `{:p}` formatting, so their exact digits are platform
//! dependent; only their equality is meaningful.

use std::io::{self, Write};

/// Write the five report lines for `age` to `out`.
///
/// Lines, in order:
/// 1. the value
/// 2. the address of the local, taken directly
/// 3. the same address, read from the stored reference
/// 4. the value, dereferenced from the stored reference
/// 5. the value, through a reference re-derived inline
///
/// # Errors
/// Returns the first error reported by `out`.
#[allow(clippy::deref_addrof)]
pub fn write_report<W: Write>(out: &mut W, age: i32) -> io::Result<()> {
    writeln!(out, "Your age is {}", age)?;
    writeln!(out, "Age's memory address is {:p}", &age)?;

    let p_age: &i32 = &age;
    writeln!(out, "Age's memory address is {:p}", p_age)?;

    writeln!(out, "What's the age? {}", *p_age)?;
    writeln!(out, "What's the age? {}", *&age)?;
    Ok(())
}

/// Captured report lines, for callers that want to inspect them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgeReport {
    pub value_line: String,
    pub direct_address: String,
    pub reference_address: String,
    pub deref_stored: String,
    pub deref_inline: String,
}

impl AgeReport {
    /// Render the report for `age` into memory and split it into lines.
    pub fn capture(age: i32) -> io::Result<Self> {
        let mut buf = Vec::new();
        write_report(&mut buf, age)?;
        let text = String::from_utf8_lossy(&buf);
        let mut lines = text.lines().map(str::to_owned);
        let mut next = || {
            lines
                .next()
                .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "report too short"))
        };
        Ok(AgeReport {
            value_line: next()?,
            direct_address: next()?,
            reference_address: next()?,
            deref_stored: next()?,
            deref_inline: next()?,
        })
    }
}
