use clap::Parser;
use frontier_dungeon_generator::constants::DEFAULT_ROOM_COUNT;
use frontier_dungeon_generator::core_frontier_expansion::FrontierDungeonConfig;
use frontier_dungeon_generator::frontier::GrowthBias;
use frontier_dungeon_generator::generate_to;
use std::io;

/// Grows a dungeon outward from a single room and prints it as text
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of rooms to grow, origin included
    #[arg(
        long,
        short,
        default_value_t = DEFAULT_ROOM_COUNT,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    rooms: usize,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Favour tiles near the origin for rounder dungeons
    #[arg(long)]
    inward: bool,
}

impl Args {
    fn config(&self) -> FrontierDungeonConfig {
        FrontierDungeonConfig {
            room_count: self.rooms,
            seed: self.seed,
            bias: if self.inward {
                GrowthBias::Inward
            } else {
                GrowthBias::Outward
            },
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    generate_to(&mut io::stdout().lock(), args.config())?;
    Ok(())
}
