use crate::{InvalidPath, Path, Square};

impl Square {
    /// Returns the square the path names, walking down from `self`.
    ///
    /// The empty path names `self`. Fails with [`InvalidPath`] if the path
    /// still has steps left when the walk reaches a solid square.
    pub fn locate(&self, path: &Path) -> Result<&Square, InvalidPath> {
        locate_from(self, path, 0)
    }
}

fn locate_from<'s>(square: &'s Square, path: &Path, from: usize) -> Result<&'s Square, InvalidPath> {
    let Some(step) = path.step(from) else {
        return Ok(square);
    };
    match square.children() {
        Some(children) => locate_from(&children[step], path, from + 1),
        None => Err(InvalidPath::new(path.clone(), from)),
    }
}
