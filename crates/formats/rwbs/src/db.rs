//! Flat key-value store for localization and database rows.
//!
//! Deliberately unrelated to the section tree: a table is a hashmap keyed
//! by a 32-bit identifier, read from a flat `count` + rows wire image.
//! Shares no code with [`crate::Section`].

use std::collections::HashMap;
use std::fmt;

use crate::cursor::{Cursor, Writer};
use crate::error::Result;

/// 32-bit row identifier, displayed as 8 uppercase hex digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Uid(pub u32);

impl Uid {
    /// The module the row belongs to (low hex digit of the identifier).
    pub fn module(self) -> u32 {
        self.0 % 16
    }

    pub fn read(c: &mut Cursor) -> Result<Self> {
        Ok(Self(c.read_u32()?))
    }

    pub fn write(self, w: &mut Writer) {
        w.write_u32(self.0);
    }

    /// Parse from hexadecimal text, e.g. `"0000C1A5"`.
    pub fn parse(text: &str) -> Option<Self> {
        u32::from_str_radix(text, 16).ok().map(Self)
    }
}

impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08X}", self.0)
    }
}

/// One table row: an identifier plus its cell data, carried as opaque
/// bytes (the cell format belongs to the database layer above this crate).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub uid: Uid,
    pub data: Vec<u8>,
}

impl Row {
    pub fn read(c: &mut Cursor) -> Result<Self> {
        let uid = Uid::read(c)?;
        let len = c.read_u32()? as usize;
        let data = c.read_bytes(len)?.to_vec();
        Ok(Self { uid, data })
    }

    pub fn write(&self, w: &mut Writer) {
        self.uid.write(w);
        w.write_u32(self.data.len() as u32);
        w.write_bytes(&self.data);
    }
}

/// A flat table of rows keyed by [`Uid`].
#[derive(Debug, Clone, Default)]
pub struct Table {
    rows: HashMap<Uid, Row>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a row. A duplicate key is malformed data but never fatal:
    /// the first-inserted row wins and the duplicate is dropped with a
    /// warning.
    pub fn insert(&mut self, row: Row) {
        if self.rows.contains_key(&row.uid) {
            log::warn!("malformed table: row {} already exists, keeping the first", row.uid);
            return;
        }
        self.rows.insert(row.uid, row);
    }

    pub fn get(&self, uid: Uid) -> Option<&Row> {
        self.rows.get(&uid)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.values()
    }

    /// Read a table: `row_count:u32` followed by the rows. Replaces any
    /// existing contents.
    pub fn read(&mut self, c: &mut Cursor) -> Result<()> {
        self.rows.clear();
        let count = c.read_u32()?;
        for _ in 0..count {
            let row = Row::read(c)?;
            self.insert(row);
        }
        Ok(())
    }

    pub fn write(&self, w: &mut Writer) {
        w.write_u32(self.rows.len() as u32);
        for row in self.rows.values() {
            row.write(w);
        }
    }
}
