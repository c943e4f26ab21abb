use crate::constants::{TileType, MAX_MAP_CELLS};
use crate::core_frontier_expansion::{FrontierDungeon, FrontierDungeonError};
use crate::tile::Tile;
use nalgebra::Vector2;
use std::fmt::{self, Display};
use std::io::Write;

/// Character grid covering the bounding box of a set of rooms and walls.
#[derive(Clone, Debug)]
pub struct TileMap {
    cells: Vec<TileType>,
    start: Vector2<i32>,
    end: Vector2<i32>, // exclusive
}

impl TileMap {
    pub fn new(rooms: &[Tile], walls: &[Tile]) -> Result<Self, FrontierDungeonError> {
        let mut tiles = rooms.iter().chain(walls.iter());
        let Some(first) = tiles.next() else {
            return Ok(Self {
                cells: Vec::new(),
                start: Vector2::zeros(),
                end: Vector2::zeros(),
            });
        };
        let (min, max) = tiles.fold((first.to_vec2(), first.to_vec2()), |(min, max), tile| {
            let p = tile.to_vec2();
            (min.inf(&p), max.sup(&p))
        });

        let width = (max.x as i64 - min.x as i64 + 1) as u64;
        let height = (max.y as i64 - min.y as i64 + 1) as u64;
        let too_large = FrontierDungeonError::MapTooLarge { width, height };
        let Some(cell_count) = map_cell_count(width, height) else {
            return Err(too_large);
        };
        let mut cells = Vec::new();
        if cells.try_reserve_exact(cell_count).is_err() {
            return Err(too_large);
        }
        cells.resize(cell_count, TileType::Unrevealed);

        let mut map = Self {
            cells,
            start: min,
            end: max + Vector2::new(1, 1),
        };
        // new rooms are claimed from the walls, so floor wins any overlap
        for wall in walls {
            map.set(wall, TileType::Wall);
        }
        for room in rooms {
            map.set(room, TileType::Floor);
        }
        Ok(map)
    }

    pub fn from_dungeon(dungeon: &FrontierDungeon) -> Result<Self, FrontierDungeonError> {
        Self::new(&dungeon.rooms, &dungeon.walls)
    }

    pub fn width(&self) -> usize {
        (self.end.x - self.start.x) as usize
    }

    pub fn height(&self) -> usize {
        (self.end.y - self.start.y) as usize
    }

    /// World coordinate of the top-left cell.
    pub fn start(&self) -> Vector2<i32> {
        self.start
    }

    pub fn get(&self, x: i32, y: i32) -> TileType {
        self.index(&Tile::new(x, y))
            .map(|i| self.cells[i])
            .unwrap_or(TileType::Unrevealed)
    }

    pub fn rows(&self) -> Vec<String> {
        if self.width() == 0 {
            return Vec::new();
        }
        self.cells
            .chunks(self.width())
            .map(|row| row.iter().map(|cell| cell.to_char()).collect())
            .collect()
    }

    /// Writes the grid followed by the room and wall counts.
    pub fn write_report<W: Write>(
        &self,
        out: &mut W,
        room_count: usize,
        wall_count: usize,
    ) -> Result<(), FrontierDungeonError> {
        write!(out, "{self}")?;
        writeln!(out, "Rooms: {room_count}")?;
        writeln!(out, "Walls: {wall_count}")?;
        Ok(())
    }

    fn index(&self, tile: &Tile) -> Option<usize> {
        let p = tile.to_vec2();
        if p.x < self.start.x || p.y < self.start.y || self.end.x <= p.x || self.end.y <= p.y {
            return None;
        }
        let offset = p - self.start;
        Some(offset.y as usize * self.width() + offset.x as usize)
    }

    fn set(&mut self, tile: &Tile, tile_type: TileType) {
        if let Some(i) = self.index(tile) {
            self.cells[i] = tile_type;
        }
    }
}

fn map_cell_count(width: u64, height: u64) -> Option<usize> {
    width
        .checked_mul(height)
        .filter(|count| *count <= MAX_MAP_CELLS)
        .and_then(|count| usize::try_from(count).ok())
}

impl Display for TileMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}
