use crate::{InvalidPath, Path, Square};

impl Square {
    /// Returns a new tree with the square the path names swapped for
    /// `replacement`.
    ///
    /// `self` is untouched. The result is rebuilt only along the addressed
    /// spine; the other three children of every split on the way are shared
    /// by reference with `self`, not copied. The empty path returns
    /// `replacement` itself, whatever `self` was. Fails with [`InvalidPath`]
    /// under the same condition as [`locate`].
    ///
    /// [`locate`]: Square::locate
    pub fn replace(&self, path: &Path, replacement: Square) -> Result<Square, InvalidPath> {
        replace_from(self, path, 0, replacement)
    }
}

fn replace_from(
    square: &Square,
    path: &Path,
    from: usize,
    replacement: Square,
) -> Result<Square, InvalidPath> {
    let Some(step) = path.step(from) else {
        return Ok(replacement);
    };
    match square.children() {
        Some(children) => {
            let mut children = children.clone();
            children[step] = replace_from(&children[step], path, from + 1, replacement)?;
            Ok(Square::from_quad(children))
        }
        None => Err(InvalidPath::new(path.clone(), from)),
    }
}
