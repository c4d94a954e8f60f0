// Bestand: src/stream.rs
//! Regelgeoriënteerde editstroom: `"e a b"` verwijdert een kant, `"a a b"`
//! voegt er een toe, `"x"` sluit de stroom af. Records worden strikt in
//! volgorde geconsumeerd. Parsefouten zijn geen panics maar expliciete
//! foutsoorten, zodat de aanroeper kan kiezen tussen afbreken, overslaan of
//! loggen.

use std::io::{self, BufRead};
use thiserror::Error;

/// Eén mutatierecord uit de editstroom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edit {
    /// Voeg de ongerichte kant (a,b) toe.
    Insert(usize, usize),
    /// Verwijder de ongerichte kant (a,b).
    Delete(usize, usize),
    /// Einde van de stroom.
    End,
}

/// Foutsoorten van de editstroom, gescheiden naar oorzaak: misvormde
/// records, indices buiten de knoopruimte, een ontbrekende afsluiter en
/// onderliggende I/O.
#[derive(Debug, Error)]
pub enum StreamError {
    #[error("malformed edit record: {0:?}")]
    Malformed(String),
    #[error("vertex {vertex} out of range for n={n}")]
    OutOfRange { vertex: usize, n: usize },
    #[error("edit stream ended without 'x' terminator")]
    MissingTerminator,
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Parset één regel naar een `Edit`.
pub fn parse_edit(line: &str) -> Result<Edit, StreamError> {
    let mut parts = line.split_whitespace();
    let tag = parts.next().ok_or_else(|| StreamError::Malformed(line.to_string()))?;

    let mut pair = || -> Result<(usize, usize), StreamError> {
        let a = parts
            .next()
            .and_then(|t| t.parse().ok())
            .ok_or_else(|| StreamError::Malformed(line.to_string()))?;
        let b = parts
            .next()
            .and_then(|t| t.parse().ok())
            .ok_or_else(|| StreamError::Malformed(line.to_string()))?;
        Ok((a, b))
    };

    match tag {
        "x" => Ok(Edit::End),
        "e" => pair().map(|(a, b)| Edit::Delete(a, b)),
        "a" => pair().map(|(a, b)| Edit::Insert(a, b)),
        _ => Err(StreamError::Malformed(line.to_string())),
    }
}

/// Iterator over de records van een editstroom. Een stroom die eindigt
/// zonder `"x"` levert als laatste element `MissingTerminator` op.
pub struct Edits<R> {
    lines: io::Lines<R>,
    done: bool,
}

impl<R: BufRead> Edits<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for Edits<R> {
    type Item = Result<Edit, StreamError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.lines.next() {
            None => {
                self.done = true;
                Some(Err(StreamError::MissingTerminator))
            }
            Some(Err(e)) => {
                self.done = true;
                Some(Err(e.into()))
            }
            Some(Ok(line)) => match parse_edit(&line) {
                Ok(Edit::End) => {
                    self.done = true;
                    Some(Ok(Edit::End))
                }
                Ok(edit) => Some(Ok(edit)),
                Err(e) => {
                    self.done = true;
                    Some(Err(e))
                }
            },
        }
    }
}
