use std::error::Error;
use std::fmt::{self, Display};
use std::rc::Rc;

use crate::Quadrant;

/// A walk from the root of a tree to one of its squares, read left to right.
///
/// The empty path names the root itself. Paths are immutable and cheap to
/// clone; [`push`] and [`parent`] build new paths instead of mutating.
///
/// A path is only meaningful relative to a particular tree, and the tree it
/// was built against may since have been replaced, so every use re-checks it
/// and may report [`InvalidPath`].
///
/// [`push`]: Path::push
/// [`parent`]: Path::parent
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Path(Rc<[Quadrant]>);

impl Path {
    /// the empty path, naming the root
    pub fn root() -> Self {
        Path(Rc::from(Vec::new()))
    }
    pub fn new(steps: impl IntoIterator<Item = Quadrant>) -> Self {
        steps.into_iter().collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn step(&self, index: usize) -> Option<Quadrant> {
        self.0.get(index).copied()
    }
    pub fn iter(&self) -> impl Iterator<Item = Quadrant> + '_ {
        self.0.iter().copied()
    }

    /// this path extended by one more step
    pub fn push(&self, step: Quadrant) -> Path {
        self.iter().chain(std::iter::once(step)).collect()
    }
    /// this path without its last step, or `None` at the root
    pub fn parent(&self) -> Option<Path> {
        self.0
            .split_last()
            .map(|(_, rest)| rest.iter().copied().collect())
    }
}

impl Default for Path {
    fn default() -> Self {
        Path::root()
    }
}

impl FromIterator<Quadrant> for Path {
    fn from_iter<I: IntoIterator<Item = Quadrant>>(iter: I) -> Self {
        Path(iter.into_iter().collect::<Vec<_>>().into())
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("(root)");
        }
        for (i, step) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            write!(f, "{step}")?;
        }
        Ok(())
    }
}

/// A path that descends into a solid square with steps left over.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct InvalidPath {
    path: Path,
    at: usize,
}

impl InvalidPath {
    pub(crate) fn new(path: Path, at: usize) -> Self {
        InvalidPath { path, at }
    }
    /// the path that was rejected
    pub fn path(&self) -> &Path {
        &self.path
    }
    /// how many steps were followed before reaching a solid square
    pub fn depth(&self) -> usize {
        self.at
    }
}

impl Display for InvalidPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "path {} reaches a solid square after {} step{}",
            self.path,
            self.at,
            if self.at == 1 { "" } else { "s" }
        )
    }
}

impl Error for InvalidPath {}
