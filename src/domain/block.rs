use macroquad::prelude::*;
use crate::config::GameConfig;

/// Rainbow palette cycled across the grid by block index
pub const RAINBOW: [Color; 7] = [RED, ORANGE, YELLOW, GREEN, BLUE, DARKBLUE, PURPLE];

/// Liveness of a single block slot.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BlockState {
    Intact,
    Destroyed,
}

impl BlockState {
    pub const fn is_intact(self) -> bool {
        matches!(self, BlockState::Intact)
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Block {
    pub rect: Rect,
    pub color: Color,
    pub state: BlockState,
}

impl Block {
    pub const fn is_intact(&self) -> bool {
        self.state.is_intact()
    }

    pub fn destroy(&mut self) {
        self.state = BlockState::Destroyed;
    }
}

/// BlockGrid is a fixed-size arena of blocks.
/// Slots are never added or removed; destroyed blocks stay in place until
/// the whole grid is reset.
pub struct BlockGrid {
    blocks: Vec<Block>,
}

impl BlockGrid {
    /// Create a freshly laid out grid
    pub fn new(config: &GameConfig) -> Self {
        let mut grid = Self {
            blocks: Vec::with_capacity(config.block_count()),
        };
        grid.blocks.extend((0..config.block_count()).map(|i| Self::layout(config, i)));
        grid
    }

    /// Overwrite every slot with its initial block
    pub fn reset(&mut self, config: &GameConfig) {
        self.blocks
            .iter_mut()
            .enumerate()
            .for_each(|(i, block)| *block = Self::layout(config, i));
    }

    /// Block at `index` in row-major order, colored by `index mod 7`
    fn layout(config: &GameConfig, index: usize) -> Block {
        let row = index / config.block_cols;
        let col = index % config.block_cols;
        Block {
            rect: Rect::new(
                col as f32 * (config.block_width + config.block_gap),
                row as f32 * (config.block_height + config.block_gap) + config.block_top_offset,
                config.block_width,
                config.block_height,
            ),
            color: RAINBOW[index % RAINBOW.len()],
            state: BlockState::Intact,
        }
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Block> {
        self.blocks.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Block> {
        self.blocks.iter_mut()
    }

    pub fn iter_intact(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter().filter(|b| b.is_intact())
    }

    pub fn intact_count(&self) -> usize {
        self.iter_intact().count()
    }

    /// Destroy the block at `index`; out-of-range indices are ignored
    pub fn destroy(&mut self, index: usize) {
        if let Some(block) = self.blocks.get_mut(index) {
            block.destroy();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grid_has_36_blocks() {
        let grid = BlockGrid::new(&GameConfig::default());
        assert_eq!(grid.len(), 36);
        assert_eq!(grid.intact_count(), 36);
    }

    #[test]
    fn test_colors_cycle_every_seven() {
        let grid = BlockGrid::new(&GameConfig::default());
        assert_eq!(grid.get(0).unwrap().color, RED);
        assert_eq!(grid.get(6).unwrap().color, PURPLE);
        assert_eq!(grid.get(7).unwrap().color, RED);
        // Second row starts mid-cycle: 12 mod 7 = 5
        assert_eq!(grid.get(12).unwrap().color, DARKBLUE);
    }

    #[test]
    fn test_layout_rows_and_gaps() {
        let grid = BlockGrid::new(&GameConfig::default());
        assert_eq!(grid.get(0).unwrap().rect, Rect::new(0.0, 50.0, 60.0, 20.0));
        assert_eq!(grid.get(1).unwrap().rect.x, 65.0);
        assert_eq!(grid.get(11).unwrap().rect.x, 715.0);
        assert_eq!(grid.get(12).unwrap().rect, Rect::new(0.0, 75.0, 60.0, 20.0));
        assert_eq!(grid.get(35).unwrap().rect.y, 100.0);
    }

    #[test]
    fn test_destroyed_block_keeps_its_slot() {
        let mut grid = BlockGrid::new(&GameConfig::default());
        grid.destroy(3);
        assert_eq!(grid.len(), 36);
        assert_eq!(grid.intact_count(), 35);
        let block = grid.get(3).unwrap();
        assert_eq!(block.state, BlockState::Destroyed);
        assert_eq!(block.rect.w, 60.0);
    }

    #[test]
    fn test_reset_restores_every_slot() {
        let config = GameConfig::default();
        let mut grid = BlockGrid::new(&config);
        (0..grid.len()).step_by(2).for_each(|i| grid.destroy(i));
        grid.reset(&config);
        assert_eq!(grid.intact_count(), 36);
        assert_eq!(grid.get(7).unwrap().color, RED);
    }

    #[test]
    fn test_custom_dimensions() {
        let config = GameConfig { block_rows: 2, block_cols: 5, ..GameConfig::default() };
        let grid = BlockGrid::new(&config);
        assert_eq!(grid.len(), 10);
        assert_eq!(grid.get(5).unwrap().rect.y, 75.0);
        assert_eq!(grid.get(5).unwrap().color, DARKBLUE);
    }
}
