use nalgebra::Vector2;

/// Largest grid `TileMap` will allocate, one byte per cell.
///
/// Rendering holds the grid and a text copy of each row at once, so this
/// bounds peak memory near 2 GiB. A failed allocation below the cap is
/// still reported as `MapTooLarge`.
pub const MAX_MAP_CELLS: u64 = 1 << 30;

pub const DEFAULT_ROOM_COUNT: usize = 250;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Direction4 {
    Left,
    Right,
    Up,
    Down,
}

// Neighbour order is part of the growth result, do not reorder.
pub const DIRECTIONS: &[Direction4; 4] = &[
    Direction4::Left,
    Direction4::Right,
    Direction4::Up,
    Direction4::Down,
];

impl Direction4 {
    pub fn to_vec2(&self) -> Vector2<i32> {
        match self {
            Direction4::Left => Vector2::new(-1, 0),
            Direction4::Right => Vector2::new(1, 0),
            Direction4::Up => Vector2::new(0, -1),
            Direction4::Down => Vector2::new(0, 1),
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TileType {
    Unrevealed,
    Wall,
    Floor,
}

impl TileType {
    pub const fn to_char(self) -> char {
        match self {
            TileType::Unrevealed => ' ',
            TileType::Wall => '#',
            TileType::Floor => '.',
        }
    }
}
