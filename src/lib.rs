pub mod constants;
pub mod core_frontier_expansion;
pub mod frontier;
pub mod tile;
pub mod tile_map;

use crate::core_frontier_expansion::{
    generate_frontier_dungeon, FrontierDungeon, FrontierDungeonConfig, FrontierDungeonError,
};
use crate::tile_map::TileMap;
use log::info;
use std::io::{self, Write};

/// Grows a dungeon of `room_count` rooms and prints its map to stdout.
pub fn generate(room_count: usize) -> Result<(), FrontierDungeonError> {
    let mut out = io::stdout().lock();
    generate_to(
        &mut out,
        FrontierDungeonConfig {
            room_count,
            ..Default::default()
        },
    )?;
    Ok(())
}

/// Grows a dungeon from `config` and writes its map and counts to `out`.
pub fn generate_to<W: Write>(
    out: &mut W,
    config: FrontierDungeonConfig,
) -> Result<FrontierDungeon, FrontierDungeonError> {
    let dungeon = generate_frontier_dungeon(config)?;
    let map = TileMap::from_dungeon(&dungeon)?;
    info!("map is {}x{}", map.width(), map.height());

    map.write_report(out, dungeon.rooms.len(), dungeon.walls.len())?;
    out.flush()?;
    Ok(dungeon)
}
