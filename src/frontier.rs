use crate::tile::Tile;
use std::collections::HashSet;
use std::slice::Iter;

/// Which end of the distance ordering the growth favours.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub enum GrowthBias {
    /// Farthest tiles first. Produces long, irregular arms.
    #[default]
    Outward,
    /// Nearest tiles first. Produces smoother, rounder blobs.
    Inward,
}

/// Ordered list of candidate wall tiles with a hash index for membership.
///
/// The list order is what the weighted draw indexes into, so every mutation
/// keeps the relative order of the untouched entries.
#[derive(Debug, Clone, Default)]
pub struct WallFrontier {
    tiles: Vec<Tile>,
    index: HashSet<Tile>,
}

impl WallFrontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `tile` unless it is already present.
    pub fn push(&mut self, tile: Tile) -> bool {
        if !self.index.insert(tile) {
            return false;
        }
        self.tiles.push(tile);
        true
    }

    #[inline]
    pub fn contains(&self, tile: &Tile) -> bool {
        self.index.contains(tile)
    }

    /// Stable sort by squared distance from the origin.
    pub fn sort(&mut self, bias: GrowthBias) {
        match bias {
            GrowthBias::Outward => self
                .tiles
                .sort_by(|a, b| b.squared_distance().cmp(&a.squared_distance())),
            GrowthBias::Inward => self.tiles.sort_by_key(Tile::squared_distance),
        }
    }

    pub fn remove(&mut self, position: usize) -> Option<Tile> {
        if position >= self.tiles.len() {
            return None;
        }
        let tile = self.tiles.remove(position);
        self.index.remove(&tile);
        Some(tile)
    }

    /// Keeps the tiles for which `f` holds, returns how many were dropped.
    pub fn retain<F>(&mut self, mut f: F) -> usize
    where
        F: FnMut(&Tile) -> bool,
    {
        let before = self.tiles.len();
        let index = &mut self.index;
        self.tiles.retain(|tile| {
            let keep = f(tile);
            if !keep {
                index.remove(tile);
            }
            keep
        });
        before - self.tiles.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, Tile> {
        self.tiles.iter()
    }
}

impl FromIterator<Tile> for WallFrontier {
    fn from_iter<I: IntoIterator<Item = Tile>>(iter: I) -> Self {
        let mut frontier = WallFrontier::new();
        for tile in iter {
            frontier.push(tile);
        }
        frontier
    }
}

impl From<WallFrontier> for Vec<Tile> {
    fn from(frontier: WallFrontier) -> Self {
        frontier.tiles
    }
}
