//! Read access to the world around the wearer
//!
//! Every query may fail (unloaded chunk, world torn down). Policies never
//! propagate these failures; the affected conditional effect is skipped.

use thiserror::Error;

use crate::core::types::{BlockKind, BlockPos, Dimension, EntityClass};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EnvironmentError {
    #[error("World is unavailable")]
    WorldUnavailable,

    #[error("Chunk at {0:?} is not loaded")]
    ChunkNotLoaded(BlockPos),

    #[error("World query failed: {0}")]
    QueryFailed(String),
}

pub type EnvResult<T> = std::result::Result<T, EnvironmentError>;

pub trait WorldView {
    fn dimension(&self) -> EnvResult<Dimension>;

    /// Combined block and sky light at a position (0 to 15)
    fn light_level(&self, pos: BlockPos) -> EnvResult<u8>;

    fn is_thundering(&self) -> EnvResult<bool>;

    /// Entities of `class` within `radius` blocks of `origin`
    fn count_nearby(&self, origin: BlockPos, class: EntityClass, radius: f64) -> EnvResult<usize>;

    /// Whether a block of `kind` exists in the cube of half-extent `radius`
    /// around `origin`
    fn has_block_within(&self, origin: BlockPos, kind: BlockKind, radius: i32) -> EnvResult<bool>;
}
