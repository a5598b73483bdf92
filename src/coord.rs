// src/coord.rs

//! Fixed-rank integer coordinate vectors.
//!
//! A [`CoordVector`] addresses cells of a [`Surface`](crate::surface::Surface)
//! and drives grid enumeration via [`CoordVector::step`], which walks every
//! integer point of a bounded box exactly once. The rank is a const generic,
//! so a vector's component count is fixed at the type level and can never
//! change after construction.

use crate::error::CanvasError;
use std::fmt;

/// An ordered tuple of `N` signed integer components.
///
/// Value type: lives on the stack, copied by value, no dynamic ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CoordVector<const N: usize> {
    components: [i64; N],
}

/// The 2-D coordinate used throughout the raster engine: axis 0 is x
/// (column), axis 1 is y (row).
pub type Coord2 = CoordVector<2>;

impl<const N: usize> CoordVector<N> {
    /// Returns the all-zero vector, the origin of any enumeration box.
    pub const fn zeroed() -> Self {
        Self { components: [0; N] }
    }

    /// Number of components, fixed at the type level.
    pub const fn rank(&self) -> usize {
        N
    }

    /// Reads one component. Fails with `OutOfRange` if `axis >= N`.
    pub fn get(&self, axis: usize) -> Result<i64, CanvasError> {
        self.components.get(axis).copied().ok_or_else(|| {
            CanvasError::OutOfRange(format!("axis {} invalid for rank-{} vector", axis, N))
        })
    }

    /// Writes one component in place. Fails with `OutOfRange` if `axis >= N`.
    pub fn set(&mut self, axis: usize, value: i64) -> Result<(), CanvasError> {
        match self.components.get_mut(axis) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(CanvasError::OutOfRange(format!(
                "axis {} invalid for rank-{} vector",
                axis, N
            ))),
        }
    }

    /// Advances `self` to the lexicographically next point inside the
    /// half-open box `[0, bound)`, last axis fastest.
    ///
    /// Returns `true` while a further point remains. Once the box is
    /// exhausted the vector wraps back to the zero vector and `false` is
    /// returned, leaving the vector ready for a fresh enumeration. Starting
    /// from [`CoordVector::zeroed`], visiting the current point and then
    /// calling `step` until it returns `false` visits every point of the box
    /// exactly once.
    pub fn step(&mut self, bound: &CoordVector<N>) -> bool {
        // A box with a non-positive extent contains no points at all.
        if bound.components.iter().any(|&b| b <= 0) {
            self.components = [0; N];
            return false;
        }
        for axis in (0..N).rev() {
            self.components[axis] += 1;
            if self.components[axis] < bound.components[axis] {
                return true;
            }
            self.components[axis] = 0;
        }
        false
    }
}

impl Coord2 {
    /// Builds a 2-D coordinate from its x and y components.
    pub const fn new(x: i64, y: i64) -> Self {
        Self { components: [x, y] }
    }

    /// The x (axis 0) component.
    pub const fn x(&self) -> i64 {
        self.components[0]
    }

    /// The y (axis 1) component.
    pub const fn y(&self) -> i64 {
        self.components[1]
    }
}

impl<const N: usize> fmt::Display for CoordVector<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.components.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn test_zeroed_and_rank() {
        let v = CoordVector::<3>::zeroed();
        assert_eq!(v.rank(), 3);
        for axis in 0..3 {
            assert_eq!(v.get(axis).unwrap(), 0);
        }
    }

    #[test]
    fn test_get_set_roundtrip() {
        let mut v = Coord2::zeroed();
        v.set(0, 7).unwrap();
        v.set(1, -3).unwrap();
        assert_eq!(v.get(0).unwrap(), 7);
        assert_eq!(v.get(1).unwrap(), -3);
    }

    #[test]
    fn test_axis_out_of_range() {
        let mut v = Coord2::zeroed();
        assert!(matches!(v.get(2), Err(CanvasError::OutOfRange(_))));
        assert!(matches!(v.set(5, 1), Err(CanvasError::OutOfRange(_))));
    }

    #[test]
    fn test_step_enumerates_box_in_order() {
        let bound = Coord2::new(2, 3);
        let mut v = Coord2::zeroed();
        let mut visited = Vec::new();
        loop {
            visited.push((v.x(), v.y()));
            if !v.step(&bound) {
                break;
            }
        }
        // Last axis fastest: y runs before x advances.
        assert_eq!(
            visited,
            vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]
        );
        // Exhaustion wraps back to the origin for safe reuse.
        assert_eq!(v, Coord2::zeroed());
    }

    #[test]
    fn test_step_visits_each_point_exactly_once() {
        let bound = Coord2::new(13, 7);
        let mut v = Coord2::zeroed();
        let mut seen = std::collections::HashSet::new();
        loop {
            assert!(seen.insert((v.x(), v.y())), "point visited twice: {}", v);
            if !v.step(&bound) {
                break;
            }
        }
        assert_eq!(seen.len(), 13 * 7);
    }

    #[test]
    fn test_step_is_restartable() {
        let bound = Coord2::new(3, 2);
        let mut v = Coord2::zeroed();
        let count = |v: &mut Coord2| {
            let mut n = 1;
            while v.step(&bound) {
                n += 1;
            }
            n
        };
        assert_eq!(count(&mut v), 6);
        assert_eq!(count(&mut v), 6);
    }

    #[test]
    fn test_step_empty_box() {
        let bound = Coord2::new(0, 4);
        let mut v = Coord2::zeroed();
        assert!(!v.step(&bound));
        assert_eq!(v, Coord2::zeroed());
    }
}
