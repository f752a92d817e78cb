use crate::error::ConvertError;

use super::Resolver;

pub(crate) const TILE_PREFIX: &str = "scrabble";

/// Default space token for the tile set.
pub const BLANK_TILE: &str = "scrabble-blank";

/// Scrabble tiles. Letters only, no colours.
#[derive(Debug, Default, Clone, Copy)]
pub struct TileResolver;

impl Resolver for TileResolver {
    fn resolve(&mut self, c: char) -> Result<Option<String>, ConvertError> {
        if c.is_ascii_lowercase() {
            Ok(Some(format!("{TILE_PREFIX}-{c}")))
        } else {
            Ok(None)
        }
    }
}
