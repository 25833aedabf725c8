//! Rail fence transposition cipher.
//!
//! The rail fence cipher writes the plaintext along a zigzag path across a
//! fixed number of rows (rails) and reads the rows off one after another.
//! It is a classical, insecure cipher and is provided for teaching and
//! inspection, together with a visualization of the zigzag matrix.
//!
//! # Architecture
//!
//! ```text
//! generate_path  (row index per character, bouncing between rail 0 and the last rail)
//!     ↓ marks active cells
//! FenceMatrix    (rails × length grid of inert / marked / filled cells)
//!     ↓ zigzag write + row read (encrypt), row fill + zigzag read (decrypt)
//! RailFence      (orchestrator: rails, space substitute, visual style)
//!     ↓
//! VisualStyle    (grid or HTML rendering of the matrix)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt with the free functions:
//!
//! ```
//! let encrypted = railfence::encrypt("HELLO", 3).unwrap();
//! assert_eq!(encrypted.ciphertext, "HOELL");
//! println!("{}", encrypted.visualization);
//!
//! let decrypted = railfence::decrypt(&encrypted.ciphertext, 3).unwrap();
//! assert_eq!(decrypted.plaintext, "HELLO");
//! ```
//!
//! Spaces are written as a substitute character (`-` by default):
//!
//! ```
//! use railfence::{RailFence, VisualStyle};
//!
//! let fence = RailFence::new(2).unwrap().with_style(VisualStyle::Html);
//! let result = fence.encrypt("AB CD").unwrap();
//! assert_eq!(result.ciphertext, "A-DBC");
//! assert_eq!(fence.decrypt("A-DBC").unwrap().plaintext, "AB CD");
//! ```

#![deny(clippy::all)]

pub mod error;

mod matrix;
mod path;
mod rail_fence;
mod visualize;

pub use error::RailFenceError;
pub use matrix::{Cell, FenceMatrix, MAX_CELLS};
pub use path::{generate_path, Rails, ZigzagPath};
pub use rail_fence::{decrypt, encrypt, CipherResult, Direction, RailFence};
pub use visualize::{render, VisualStyle, DEFAULT_SPACE_SUBSTITUTE};
