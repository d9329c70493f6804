//! Names for the four quadrants of a square and a carrier for one value per quadrant

use std::fmt::{self, Display};
use std::ops::{Index, IndexMut};

/// One of the four quadrants, which doubles as a single step of a [`Path`].
///
/// This is a strict 4-way enumeration: every `match` over it names all four
/// arms, with no default case.
///
/// [`Path`]: crate::Path
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Quadrant {
    NW,
    NE,
    SW,
    SE,
}

impl Quadrant {
    /// all four quadrants, in `NW, NE, SW, SE` order
    pub fn iter_all() -> impl Iterator<Item = Quadrant> {
        [Quadrant::NW, Quadrant::NE, Quadrant::SW, Quadrant::SE].into_iter()
    }
}

impl Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Quadrant::NW => "NW",
            Quadrant::NE => "NE",
            Quadrant::SW => "SW",
            Quadrant::SE => "SE",
        })
    }
}

/// One value for each quadrant.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Quad<T> {
    pub nw: T,
    pub ne: T,
    pub sw: T,
    pub se: T,
}

impl<T> Quad<T> {
    /// children in `NW, NE, SW, SE` order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        [&self.nw, &self.ne, &self.sw, &self.se].into_iter()
    }
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Quad<U> {
        Quad {
            nw: f(self.nw),
            ne: f(self.ne),
            sw: f(self.sw),
            se: f(self.se),
        }
    }
}

impl<T> IntoIterator for Quad<T> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, 4>;
    fn into_iter(self) -> Self::IntoIter {
        [self.nw, self.ne, self.sw, self.se].into_iter()
    }
}

impl<T> Index<Quadrant> for Quad<T> {
    type Output = T;
    fn index(&self, index: Quadrant) -> &Self::Output {
        match index {
            Quadrant::NW => &self.nw,
            Quadrant::NE => &self.ne,
            Quadrant::SW => &self.sw,
            Quadrant::SE => &self.se,
        }
    }
}

impl<T> IndexMut<Quadrant> for Quad<T> {
    fn index_mut(&mut self, index: Quadrant) -> &mut Self::Output {
        match index {
            Quadrant::NW => &mut self.nw,
            Quadrant::NE => &mut self.ne,
            Quadrant::SW => &mut self.sw,
            Quadrant::SE => &mut self.se,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn iter_order_is_nw_ne_sw_se() {
        let quad = Quad {
            nw: 'a',
            ne: 'b',
            sw: 'c',
            se: 'd',
        };
        let order: String = quad.iter().collect();
        assert_eq!(order, "abcd");
        let owned: String = quad.into_iter().collect();
        assert_eq!(owned, "abcd");
    }

    #[test]
    fn index_matches_fields() {
        let mut quad = Quad {
            nw: 0,
            ne: 1,
            sw: 2,
            se: 3,
        };
        for (i, q) in Quadrant::iter_all().enumerate() {
            assert_eq!(quad[q], i);
        }
        quad[Quadrant::SW] = 9;
        assert_eq!(quad.sw, 9);
    }

    #[test]
    fn map_keeps_positions() {
        let quad = Quad {
            nw: 1,
            ne: 2,
            sw: 3,
            se: 4,
        };
        assert_eq!(
            quad.map(|v| v * 10),
            Quad {
                nw: 10,
                ne: 20,
                sw: 30,
                se: 40,
            }
        );
    }
}
