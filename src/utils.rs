use std::ops::{Add, Sub};

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

#[macro_export]
macro_rules! pos {
    ($x:expr, $y:expr) => {
        Pos { x: $x, y: $y }
    };
}

impl Pos {
    /// folds the position back onto a `width` x `height` torus.
    pub fn wrap(self, width: usize, height: usize) -> Self {
        pos!(
            modulo(self.x, width as i32),
            modulo(self.y, height as i32)
        )
    }

    /// the eight surrounding offsets, row by row.
    pub fn neighborhood() -> impl Iterator<Item = Pos> {
        (-1..=1)
            .flat_map(|y| (-1..=1).map(move |x| pos!(x, y)))
            .filter(|&p| p != pos!(0, 0))
    }
}

/// remainder that stays in `0..step` for negative `n`.
pub fn modulo(n: i32, step: i32) -> i32 {
    ((n % step) + step) % step
}

impl Add for Pos {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        pos!(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Pos {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        pos!(self.x - rhs.x, self.y - rhs.y)
    }
}

#[test]
fn test_modulo() {
    assert_eq!(modulo(0, 10), 0);
    assert_eq!(modulo(1, 10), 1);
    assert_eq!(modulo(-1, 10), 9);
    assert_eq!(modulo(10, 10), 0);
    assert_eq!(modulo(11, 10), 1);
}

#[test]
fn test_wrap() {
    assert_eq!(pos!(-1, -1).wrap(5, 3), pos!(4, 2));
    assert_eq!(pos!(5, 3).wrap(5, 3), pos!(0, 0));
    assert_eq!(pos!(2, 1).wrap(5, 3), pos!(2, 1));
}

#[test]
fn test_neighborhood() {
    let offsets: Vec<_> = Pos::neighborhood().collect();
    assert_eq!(offsets.len(), 8);
    assert!(!offsets.contains(&pos!(0, 0)));
    assert_eq!(offsets[0] - offsets[7], pos!(-2, -2));
}
