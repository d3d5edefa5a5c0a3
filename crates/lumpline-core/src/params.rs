//! Per-unit-length line parameter loading.
//!
//! The parameter file is a fixed-order text format: conductor count, series
//! resistance per meter and shunt conductance per meter on their own lines,
//! then the inductance and capacitance matrices. Each matrix is introduced
//! by a header line (skipped) and a unit modifier applied to every entry.
//! Inductance rows sit one per line; capacitance entries may span lines
//! freely.

use std::fs;
use std::path::Path;

use nalgebra::DMatrix;

use crate::error::{Error, Result};
use crate::units::parse_value;

/// Per-unit-length electrical parameters of a coupled conductor bundle.
#[derive(Debug, Clone)]
pub struct LineParameters {
    /// Number of coupled conductors in the bundle.
    pub num_conductors: usize,
    /// Series resistance per meter (ohms).
    pub resistance: f64,
    /// Shunt conductance to ground per meter (siemens).
    pub conductance: f64,
    /// Inductance matrix per meter (henries); self terms on the diagonal,
    /// mutual terms off it.
    pub inductance: DMatrix<f64>,
    /// Capacitance matrix per meter (farads).
    pub capacitance: DMatrix<f64>,
}

impl LineParameters {
    /// Parse parameters from their text format.
    ///
    /// Any malformed or missing field fails the whole parse with the line
    /// it was expected on; no partial result is produced.
    pub fn parse(source: &str) -> Result<Self> {
        let mut cursor = Cursor::new(source);

        let num_conductors = cursor.next_line_count()?;
        let resistance = cursor.next_line_f64("resistance per meter")?;
        let conductance = cursor.next_line_f64("conductance per meter")?;

        cursor.next_line()?;
        let l_modifier = cursor.next_line_modifier("inductance modifier")?;
        let inductance = cursor.read_matrix(num_conductors, l_modifier, true)?;

        cursor.next_line()?;
        let c_modifier = cursor.next_line_modifier("capacitance modifier")?;
        let capacitance = cursor.read_matrix(num_conductors, c_modifier, false)?;

        Ok(Self {
            num_conductors,
            resistance,
            conductance,
            inductance,
            capacitance,
        })
    }

    /// Read and parse a parameter file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let source = fs::read_to_string(path)?;
        Self::parse(&source)
    }
}

/// Line-tracking cursor over the parameter source.
struct Cursor<'a> {
    rest: &'a str,
    line: usize,
}

impl<'a> Cursor<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            rest: source,
            line: 1,
        }
    }

    fn error(&self, message: impl Into<String>) -> Error {
        Error::Parse {
            line: self.line,
            message: message.into(),
        }
    }

    /// Consume the current line and return its content.
    fn next_line(&mut self) -> Result<&'a str> {
        if self.rest.is_empty() {
            return Err(self.error("unexpected end of file"));
        }
        let (content, rest) = match self.rest.split_once('\n') {
            Some((content, rest)) => (content, rest),
            None => (self.rest, ""),
        };
        self.rest = rest;
        self.line += 1;
        Ok(content.trim_end_matches('\r'))
    }

    fn next_line_count(&mut self) -> Result<usize> {
        let line = self.line;
        let content = self.next_line()?.trim();
        let count: usize = content.parse().map_err(|_| Error::Parse {
            line,
            message: format!("expected conductor count, found '{content}'"),
        })?;
        if count == 0 {
            return Err(Error::Parse {
                line,
                message: "conductor count must be at least 1".into(),
            });
        }
        Ok(count)
    }

    fn next_line_f64(&mut self, what: &str) -> Result<f64> {
        let line = self.line;
        let content = self.next_line()?.trim();
        content.parse().map_err(|_| Error::Parse {
            line,
            message: format!("expected {what}, found '{content}'"),
        })
    }

    fn next_line_modifier(&mut self, what: &str) -> Result<f64> {
        let line = self.line;
        let content = self.next_line()?;
        parse_value(content).map_err(|err| Error::Parse {
            line,
            message: format!("bad {what}: {err}"),
        })
    }

    /// Skip whitespace (crossing lines) and consume one token as a number.
    fn next_f64(&mut self) -> Result<f64> {
        let token = self.next_token()?;
        token
            .parse()
            .map_err(|_| self.error(format!("expected a number, found '{token}'")))
    }

    fn next_token(&mut self) -> Result<&'a str> {
        loop {
            let mut chars = self.rest.chars();
            match chars.next() {
                Some('\n') => {
                    self.line += 1;
                    self.rest = &self.rest[1..];
                }
                Some(c) if c.is_whitespace() => {
                    self.rest = &self.rest[c.len_utf8()..];
                }
                Some(_) => break,
                None => return Err(self.error("unexpected end of file")),
            }
        }
        let end = self
            .rest
            .find(char::is_whitespace)
            .unwrap_or(self.rest.len());
        let (token, rest) = self.rest.split_at(end);
        self.rest = rest;
        Ok(token)
    }

    /// Discard the remainder of the current line.
    fn skip_rest_of_line(&mut self) {
        match self.rest.split_once('\n') {
            Some((_, rest)) => {
                self.rest = rest;
                self.line += 1;
            }
            None => self.rest = "",
        }
    }

    /// Read a size x size matrix of modifier-scaled entries. With
    /// `row_per_line` set, anything after the last entry of a row is
    /// discarded, so each row must sit on its own line.
    fn read_matrix(
        &mut self,
        size: usize,
        modifier: f64,
        row_per_line: bool,
    ) -> Result<DMatrix<f64>> {
        let mut matrix = DMatrix::zeros(size, size);
        for row in 0..size {
            for col in 0..size {
                matrix[(row, col)] = modifier * self.next_f64()?;
            }
            if row_per_line {
                self.skip_rest_of_line();
            }
        }
        Ok(matrix)
    }
}
