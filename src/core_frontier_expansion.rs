use crate::constants::DEFAULT_ROOM_COUNT;
use crate::frontier::{GrowthBias, WallFrontier};
use crate::tile::Tile;
use log::{debug, trace, warn};
use pathfinding::prelude::bfs_reach;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use std::fmt;
use std::io;

pub struct FrontierDungeonConfig {
    pub room_count: usize, // Number of rooms to claim, origin included
    pub seed: Option<u64>, // Seed value for random dungeon generation
    pub bias: GrowthBias,
}

impl Default for FrontierDungeonConfig {
    fn default() -> Self {
        FrontierDungeonConfig {
            room_count: DEFAULT_ROOM_COUNT,
            seed: None,
            bias: GrowthBias::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FrontierDungeon {
    pub rooms: Vec<Tile>, // Claim order, origin first
    pub walls: Vec<Tile>,
}

impl FrontierDungeon {
    pub fn is_room(&self, tile: &Tile) -> bool {
        self.rooms.contains(tile)
    }

    pub fn is_wall(&self, tile: &Tile) -> bool {
        self.walls.contains(tile)
    }

    /// Whether every room can be reached from the origin through
    /// orthogonally adjacent rooms.
    pub fn is_connected(&self) -> bool {
        let rooms = self.rooms.iter().copied().collect::<HashSet<_>>();
        if !rooms.contains(&Tile::ORIGIN) {
            return false;
        }
        let reachable = bfs_reach(Tile::ORIGIN, |tile| {
            tile.neighbors()
                .filter(|neighbor| rooms.contains(neighbor))
                .collect::<Vec<_>>()
        })
        .count();
        reachable == rooms.len()
    }
}

#[derive(Debug)]
pub enum FrontierDungeonError {
    InvalidRoomCount(usize),
    MapTooLarge { width: u64, height: u64 },
    Io(io::Error),
}

impl fmt::Display for FrontierDungeonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrontierDungeonError::InvalidRoomCount(count) => {
                write!(f, "room count must be at least 1, got {count}")
            }
            FrontierDungeonError::MapTooLarge { width, height } => {
                write!(f, "map of {width}x{height} tiles is too large to render")
            }
            FrontierDungeonError::Io(err) => write!(f, "failed to write map: {err}"),
        }
    }
}

impl std::error::Error for FrontierDungeonError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FrontierDungeonError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for FrontierDungeonError {
    fn from(err: io::Error) -> Self {
        FrontierDungeonError::Io(err)
    }
}

pub fn generate_frontier_dungeon(
    config: FrontierDungeonConfig,
) -> Result<FrontierDungeon, FrontierDungeonError> {
    let mut rng: rand::rngs::StdRng = config
        .seed
        .map(SeedableRng::seed_from_u64)
        .unwrap_or_else(rand::rngs::StdRng::from_entropy);

    grow_frontier_dungeon(config.room_count, config.bias, &mut rng)
}

pub fn grow_frontier_dungeon<R>(
    room_count: usize,
    bias: GrowthBias,
    rng: &mut R,
) -> Result<FrontierDungeon, FrontierDungeonError>
where
    R: Rng + ?Sized,
{
    // validate
    if room_count < 1 {
        return Err(FrontierDungeonError::InvalidRoomCount(room_count));
    }

    let mut rooms = Vec::with_capacity(room_count);
    let mut room_set = HashSet::with_capacity(room_count);
    rooms.push(Tile::ORIGIN);
    room_set.insert(Tile::ORIGIN);

    let mut walls = Tile::ORIGIN.neighbors().collect::<WallFrontier>();

    for step in 1..room_count {
        walls.sort(bias);

        // Squaring pulls the draw toward the front of the sorted list.
        let random: f64 = rng.gen();
        let index = ((random * random) * walls.len() as f64) as usize;
        // r < 1, and a finite region always has a non-empty frontier
        let Some(room) = walls.remove(index) else {
            unreachable!("draw index {index} outside frontier of {}", walls.len());
        };
        trace!("step {step}: claimed {room:?} at index {index}");
        rooms.push(room);
        room_set.insert(room);

        for neighbor in room.neighbors() {
            if room_set.contains(&neighbor) || walls.contains(&neighbor) {
                continue;
            }
            walls.push(neighbor);
        }
    }

    let overlap = walls.retain(|tile| !room_set.contains(tile));
    if overlap > 0 {
        warn!("dropped {overlap} wall tiles that were also rooms");
    }

    debug!(
        "grew {} rooms with {} frontier walls ({:?})",
        rooms.len(),
        walls.len(),
        bias
    );

    Ok(FrontierDungeon {
        rooms,
        walls: walls.into(),
    })
}

#[cfg(test)]
mod tests {
    use crate::core_frontier_expansion::{
        generate_frontier_dungeon, grow_frontier_dungeon, FrontierDungeon, FrontierDungeonConfig,
        FrontierDungeonError,
    };
    use crate::frontier::GrowthBias;
    use crate::tile::Tile;
    use rand::rngs::mock::StepRng;
    use std::collections::HashSet;

    fn tiles(coords: &[(i32, i32)]) -> Vec<Tile> {
        coords.iter().map(|&(x, y)| Tile::new(x, y)).collect()
    }

    fn seeded(room_count: usize, seed: u64) -> FrontierDungeon {
        generate_frontier_dungeon(FrontierDungeonConfig {
            room_count,
            seed: Some(seed),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_rejects_zero_rooms() {
        let result = generate_frontier_dungeon(FrontierDungeonConfig {
            room_count: 0,
            seed: Some(0),
            ..Default::default()
        });
        assert!(matches!(
            result,
            Err(FrontierDungeonError::InvalidRoomCount(0))
        ));
    }

    #[test]
    fn test_single_room() {
        let dungeon = seeded(1, 0);
        assert_eq!(dungeon.rooms, vec![Tile::ORIGIN]);
        let walls = dungeon.walls.iter().copied().collect::<HashSet<_>>();
        let expected = tiles(&[(-1, 0), (1, 0), (0, -1), (0, 1)])
            .into_iter()
            .collect::<HashSet<_>>();
        assert_eq!(walls, expected);
    }

    #[test]
    fn test_invariants_hold() {
        for (room_count, seed) in [(2, 1), (17, 2), (100, 3), (250, 4), (600, 5)] {
            let dungeon = seeded(room_count, seed);
            assert_eq!(dungeon.rooms.len(), room_count);
            assert_eq!(dungeon.rooms[0], Tile::ORIGIN);

            let rooms = dungeon.rooms.iter().copied().collect::<HashSet<_>>();
            let walls = dungeon.walls.iter().copied().collect::<HashSet<_>>();
            assert_eq!(rooms.len(), dungeon.rooms.len(), "duplicate room");
            assert_eq!(walls.len(), dungeon.walls.len(), "duplicate wall");
            assert!(rooms.is_disjoint(&walls));
            assert!(dungeon.is_connected());

            for wall in &dungeon.walls {
                assert!(wall.neighbors().any(|n| rooms.contains(&n)));
            }
        }
    }

    #[test]
    fn test_every_room_touched_an_earlier_room() {
        let dungeon = seeded(300, 11);
        let mut claimed = HashSet::new();
        claimed.insert(Tile::ORIGIN);
        for room in &dungeon.rooms[1..] {
            assert!(room.neighbors().any(|n| claimed.contains(&n)));
            claimed.insert(*room);
        }
    }

    #[test]
    fn test_same_seed_same_dungeon() {
        let a = seeded(250, 42);
        let b = seeded(250, 42);
        assert_eq!(a.rooms, b.rooms);
        assert_eq!(a.walls, b.walls);
    }

    #[test]
    fn test_zero_draw_always_takes_farthest() {
        let mut rng = StepRng::new(0, 0);
        let dungeon = grow_frontier_dungeon(5, GrowthBias::Outward, &mut rng).unwrap();
        assert_eq!(
            dungeon.rooms,
            tiles(&[(0, 0), (-1, 0), (-2, 0), (-3, 0), (-4, 0)])
        );
        assert_eq!(
            dungeon.walls,
            tiles(&[
                (-3, -1),
                (-3, 1),
                (-2, -1),
                (-2, 1),
                (-1, -1),
                (-1, 1),
                (1, 0),
                (0, -1),
                (0, 1),
                (-5, 0),
                (-4, -1),
                (-4, 1),
            ])
        );
    }

    #[test]
    fn test_highest_draw_takes_last_wall() {
        // Largest f64 below 1.0, so the index lands on the nearest wall.
        let mut rng = StepRng::new(u64::MAX, 0);
        let dungeon = grow_frontier_dungeon(3, GrowthBias::Outward, &mut rng).unwrap();
        assert_eq!(dungeon.rooms, tiles(&[(0, 0), (0, 1), (0, -1)]));

        let dungeon = grow_frontier_dungeon(200, GrowthBias::Outward, &mut rng).unwrap();
        assert_eq!(dungeon.rooms.len(), 200);
        assert!(dungeon.is_connected());
    }

    #[test]
    fn test_zero_draw_inward_takes_nearest() {
        let mut rng = StepRng::new(0, 0);
        let dungeon = grow_frontier_dungeon(3, GrowthBias::Inward, &mut rng).unwrap();
        assert_eq!(dungeon.rooms, tiles(&[(0, 0), (-1, 0), (1, 0)]));
        assert_eq!(dungeon.walls.len(), 8);
    }

    #[test]
    fn test_inward_growth_is_more_compact() {
        let outward = seeded(400, 9);
        let inward = generate_frontier_dungeon(FrontierDungeonConfig {
            room_count: 400,
            seed: Some(9),
            bias: GrowthBias::Inward,
        })
        .unwrap();
        assert!(inward.is_connected());
        let reach = |d: &FrontierDungeon| d.rooms.iter().map(Tile::squared_distance).max();
        assert!(reach(&inward) < reach(&outward));
    }

    #[test]
    fn test_disconnected_rooms_are_detected() {
        let dungeon = FrontierDungeon {
            rooms: tiles(&[(0, 0), (1, 0), (3, 0)]),
            walls: Vec::new(),
        };
        assert!(!dungeon.is_connected());
        assert!(dungeon.is_room(&Tile::new(3, 0)));
        assert!(!dungeon.is_wall(&Tile::new(3, 0)));
    }
}
