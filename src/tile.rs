use crate::constants::{Direction4, DIRECTIONS};
use nalgebra::Vector2;

#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub struct Tile {
    pub x: i32,
    pub y: i32,
}

impl Tile {
    pub const ORIGIN: Tile = Tile { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Tile { x, y }
    }

    pub fn to_vec2(&self) -> Vector2<i32> {
        Vector2::new(self.x, self.y)
    }

    /// Distance key used to order the wall frontier.
    pub fn squared_distance(&self) -> i128 {
        let (x, y) = (self.x as i128, self.y as i128);
        x * x + y * y
    }

    pub fn neighbor(&self, dir: Direction4) -> Tile {
        Tile::from(self.to_vec2() + dir.to_vec2())
    }

    /// The 4 orthogonal neighbours, left, right, up, down.
    pub fn neighbors(&self) -> impl Iterator<Item = Tile> {
        let tile = *self;
        DIRECTIONS.iter().map(move |dir| tile.neighbor(*dir))
    }
}

impl From<Vector2<i32>> for Tile {
    fn from(v: Vector2<i32>) -> Self {
        Tile::new(v.x, v.y)
    }
}
