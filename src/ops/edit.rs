//! The three editor actions, as pure tree operations: split a square into
//! four, merge four back into one, repaint a solid square.

use std::error::Error;
use std::fmt::{self, Display};

use crate::{Color, InvalidPath, Path, Square};

impl Square {
    /// Returns a new tree in which the addressed square is split into four
    /// copies of itself.
    pub fn split_at(&self, path: &Path) -> Result<Square, InvalidPath> {
        let target = self.locate(path)?.clone();
        let parts = Square::split(target.clone(), target.clone(), target.clone(), target);
        self.replace(path, parts)
    }

    /// Returns a new tree in which the addressed solid square's parent is
    /// collapsed into a single solid square of that color.
    pub fn merge_at(&self, path: &Path) -> Result<Square, EditError> {
        let target = self.locate(path)?;
        let Some(color) = target.color() else {
            return Err(EditError::NotSolid(path.clone()));
        };
        let parent = path.parent().ok_or(EditError::MergeAtRoot)?;
        Ok(self.replace(&parent, Square::solid(color))?)
    }

    /// Returns a new tree in which the addressed solid square is repainted.
    pub fn recolor(&self, path: &Path, color: Color) -> Result<Square, EditError> {
        if !self.locate(path)?.is_solid() {
            return Err(EditError::NotSolid(path.clone()));
        }
        Ok(self.replace(path, Square::solid(color))?)
    }
}

/// An edit that addressed a square it does not apply to.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum EditError {
    /// the path does not exist in the tree
    Path(InvalidPath),
    /// merge and recolor only apply to solid squares
    NotSolid(Path),
    /// the root has no parent to merge into
    MergeAtRoot,
}

impl Display for EditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditError::Path(err) => Display::fmt(err, f),
            EditError::NotSolid(path) => {
                write!(f, "the square at {path} is split, not solid")
            }
            EditError::MergeAtRoot => f.write_str("the root square has no parent to merge into"),
        }
    }
}

impl Error for EditError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            EditError::Path(err) => Some(err),
            EditError::NotSolid(_) | EditError::MergeAtRoot => None,
        }
    }
}

impl From<InvalidPath> for EditError {
    fn from(err: InvalidPath) -> Self {
        EditError::Path(err)
    }
}
