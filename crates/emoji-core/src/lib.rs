//! Sentence → chat emoji conversion.
//!
//! A sentence is split into words and every character is resolved to an emoji
//! shortcode by the selected [`EmojiSet`]. Per-character overrides are layered
//! on top of every set, and the result is a single string of `:shortcode:`
//! tokens ready to paste into a chat client.

pub mod colour;
mod error;
mod options;
pub mod resolver;
pub mod settings;
pub mod token;
pub mod transducer;

pub use colour::Colour;
pub use error::ConvertError;
pub use options::ConvertOptions;
pub use resolver::{EmojiSet, OverrideTable, Pattern};
pub use transducer::convert;
