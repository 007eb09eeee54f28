//! Terrain layout generation for new sessions and resets

use rand::{SeedableRng, rngs::StdRng, seq::index};

use crate::game::terrain::{Terrain, TerrainKind};
use crate::geo::{GridCell, GridConfig};
use crate::io::configuration::{CLASSIC_FLAG, CLASSIC_TRAPS, DEFAULT_GRID_SIZE};
use crate::io::error::{Result, invalid_parameter};

/// How terrain is laid out when a session starts or resets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutStrategy {
    /// Hand-placed 5×5 layout with seven traps and one flag
    Classic,
    /// One flag plus `traps` traps scattered uniformly, never on the start cell
    Random {
        /// Number of traps to place
        traps: usize,
        /// Seed for the layout generator
        seed: u64,
    },
}

/// Produces terrain for a fixed grid according to a strategy
///
/// Random layouts draw from one seeded generator, so successive resets give
/// different boards while a run stays reproducible from its seed.
#[derive(Debug, Clone)]
pub struct LayoutGenerator {
    strategy: LayoutStrategy,
    size: usize,
    start: GridCell,
    rng: StdRng,
}

impl LayoutGenerator {
    /// Validate a strategy against a grid and build its generator
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if:
    /// - `Classic` is used on a grid other than 5×5
    /// - `Random` asks for more traps than the board can hold next to the
    ///   flag and the start cell
    pub fn new(strategy: LayoutStrategy, config: &GridConfig) -> Result<Self> {
        let size = config.size();
        let seed = match strategy {
            LayoutStrategy::Classic => {
                if size != DEFAULT_GRID_SIZE {
                    return Err(invalid_parameter(
                        "layout",
                        &"classic",
                        &format!("requires a {DEFAULT_GRID_SIZE}x{DEFAULT_GRID_SIZE} grid, got {size}x{size}"),
                    ));
                }
                0
            }
            LayoutStrategy::Random { traps, seed } => {
                // The flag and the start cell each take one cell
                let capacity = (size * size).saturating_sub(2);
                if traps.saturating_add(2) > size * size {
                    return Err(invalid_parameter(
                        "layout.traps",
                        &traps,
                        &format!("a {size}x{size} grid holds at most {capacity} traps"),
                    ));
                }
                seed
            }
        };

        Ok(Self {
            strategy,
            size,
            start: config.start_cell(),
            rng: StdRng::seed_from_u64(seed),
        })
    }

    /// Strategy this generator follows
    pub const fn strategy(&self) -> LayoutStrategy {
        self.strategy
    }

    /// Produce the next terrain layout
    pub fn generate(&mut self) -> Terrain {
        match self.strategy {
            LayoutStrategy::Classic => classic_terrain(),
            LayoutStrategy::Random { traps, .. } => self.random_terrain(traps),
        }
    }

    fn random_terrain(&mut self, traps: usize) -> Terrain {
        let mut terrain = Terrain::empty(self.size);
        let start_index = self.start.y * self.size + self.start.x;

        // Sample over every cell but the start, then shift past the gap
        let picks = index::sample(&mut self.rng, self.size * self.size - 1, traps + 1);
        for (order, pick) in picks.into_iter().enumerate() {
            let flat = if pick >= start_index { pick + 1 } else { pick };
            let cell = GridCell::new(flat % self.size, flat / self.size);
            let kind = if order == 0 {
                TerrainKind::Flag
            } else {
                TerrainKind::Trap
            };
            terrain.set(cell, kind);
        }

        terrain
    }
}

fn classic_terrain() -> Terrain {
    let mut terrain = Terrain::empty(DEFAULT_GRID_SIZE);
    for [x, y] in CLASSIC_TRAPS {
        terrain.set(GridCell::new(x, y), TerrainKind::Trap);
    }
    let [flag_x, flag_y] = CLASSIC_FLAG;
    terrain.set(GridCell::new(flag_x, flag_y), TerrainKind::Flag);
    terrain
}
