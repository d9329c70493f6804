use std::rc::Rc;

use crate::{Color, Quad};

/// One region of the image: a solid color, or a split into four sub-squares.
///
/// Squares are immutable. Every edit builds a new `Square` and shares the
/// untouched children with the original by reference, so cloning is cheap and
/// old roots stay valid.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Square {
    Solid(Color),
    Split(Rc<Quad<Square>>),
}

impl Square {
    /// a solid square of the given color
    pub fn solid(color: Color) -> Self {
        Square::Solid(color)
    }
    /// a square that splits into the four given parts
    pub fn split(nw: Square, ne: Square, sw: Square, se: Square) -> Self {
        Square::from_quad(Quad { nw, ne, sw, se })
    }
    pub fn from_quad(children: Quad<Square>) -> Self {
        Square::Split(Rc::new(children))
    }

    pub fn is_solid(&self) -> bool {
        matches!(self, Square::Solid(_))
    }
    pub fn color(&self) -> Option<Color> {
        match self {
            Square::Solid(color) => Some(*color),
            Square::Split(_) => None,
        }
    }
    pub fn children(&self) -> Option<&Quad<Square>> {
        match self {
            Square::Solid(_) => None,
            Square::Split(children) => Some(children),
        }
    }

    /// Whether `self` and `other` are the same square by identity, not merely
    /// by value: the same shared allocation for splits, the same color for
    /// solids. This is how structural sharing after [`replace`] is observed.
    ///
    /// [`replace`]: Square::replace
    pub fn shares(&self, other: &Square) -> bool {
        match (self, other) {
            (Square::Solid(a), Square::Solid(b)) => a == b,
            (Square::Split(a), Square::Split(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}
