use std::collections::HashMap;

use serde_json::Value;
use tracing::debug;

use crate::{DecodeError, Square};

/// Named in-memory save files.
///
/// The editor's save/load surface minus any transport: saving silently
/// overwrites, loading a name that was never saved finds nothing. JSON enters
/// and leaves through [`save_json`] and [`load_json`], which validate against
/// the wire format rather than storing unchecked values.
///
/// [`save_json`]: SaveFiles::save_json
/// [`load_json`]: SaveFiles::load_json
#[derive(Default, Debug)]
pub struct SaveFiles {
    files: HashMap<String, Square>,
}

impl SaveFiles {
    pub fn new() -> Self {
        SaveFiles::default()
    }

    /// Stores a square under a name, replacing any previous save.
    ///
    /// Returns whether a previous save was replaced.
    pub fn save(&mut self, name: impl Into<String>, square: Square) -> bool {
        let name = name.into();
        let replaced = self.files.insert(name.clone(), square).is_some();
        debug!(name = %name, replaced, "saved square");
        replaced
    }
    /// The square saved under a name, if any.
    pub fn load(&self, name: &str) -> Option<&Square> {
        let square = self.files.get(name);
        debug!(name, found = square.is_some(), "loaded square");
        square
    }

    /// Decodes a wire value and stores it; a malformed payload is rejected
    /// without touching the store.
    pub fn save_json(&mut self, name: impl Into<String>, value: &Value) -> Result<bool, DecodeError> {
        let square = Square::from_json(value)?;
        Ok(self.save(name, square))
    }
    /// The wire form of the square saved under a name, if any.
    pub fn load_json(&self, name: &str) -> Option<Value> {
        self.load(name).map(Square::to_json)
    }

    /// All save names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.files.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
    /// Forgets every save file.
    pub fn clear(&mut self) {
        self.files.clear();
    }
}
