//! RailFence: encoder and decoder for the rail fence transposition cipher.
//!
//! Encryption writes the text along the zigzag path and reads the matrix out
//! row by row. Decryption is the mirror image: it fills the active cells in
//! row-major order, then reads them back along the zigzag path. The two
//! passes are not symmetric, and that asymmetry is what makes decryption the
//! inverse of encryption.

use serde::{Deserialize, Serialize};

use crate::error::RailFenceError;
use crate::matrix::FenceMatrix;
use crate::path::{generate_path, Rails};
use crate::visualize::{VisualStyle, DEFAULT_SPACE_SUBSTITUTE};

/// Outcome of an encrypt or decrypt call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CipherResult {
    pub plaintext: String,
    pub ciphertext: String,
    pub visualization: String,
}

/// Which way to run the cipher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

/// Configured rail fence cipher.
///
/// Holds the rail count, the space substitute and the visualization style.
/// The value is immutable and every call allocates its own matrix, so one
/// instance can be shared freely between threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RailFence {
    rails: Rails,
    space_substitute: char,
    style: VisualStyle,
}

impl Default for RailFence {
    fn default() -> Self {
        RailFence {
            rails: Rails::DEFAULT,
            space_substitute: DEFAULT_SPACE_SUBSTITUTE,
            style: VisualStyle::default(),
        }
    }
}

impl RailFence {
    /// Creates a cipher with `rails` rails and default settings.
    ///
    /// # Errors
    /// Returns [`RailFenceError::InvalidRailCount`] if `rails <= 0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use railfence::RailFence;
    ///
    /// let fence = RailFence::new(3).unwrap();
    /// assert_eq!(fence.encrypt("HELLO").unwrap().ciphertext, "HOELL");
    ///
    /// assert!(RailFence::new(0).is_err());
    /// ```
    pub fn new(rails: i64) -> Result<Self, RailFenceError> {
        Ok(Self::with_rails(Rails::new(rails)?))
    }

    /// Creates a cipher from an already validated rail count.
    pub fn with_rails(rails: Rails) -> Self {
        RailFence {
            rails,
            ..Self::default()
        }
    }

    /// Sets the character a literal space is written as in the ciphertext.
    ///
    /// The substitute is translated back to a space on decryption, so a
    /// plaintext that already contains it will not round-trip.
    pub fn with_space_substitute(mut self, substitute: char) -> Self {
        self.space_substitute = substitute;
        self
    }

    /// Sets the visualization style.
    pub fn with_style(mut self, style: VisualStyle) -> Self {
        self.style = style;
        self
    }

    /// Rail count.
    pub fn rails(&self) -> Rails {
        self.rails
    }

    /// Space substitute character.
    pub fn space_substitute(&self) -> char {
        self.space_substitute
    }

    /// Visualization style.
    pub fn style(&self) -> VisualStyle {
        self.style
    }

    /// Runs the cipher in the given direction.
    ///
    /// # Errors
    /// See [`encrypt`](Self::encrypt) and [`decrypt`](Self::decrypt).
    pub fn apply(&self, direction: Direction, text: &str) -> Result<CipherResult, RailFenceError> {
        match direction {
            Direction::Encrypt => self.encrypt(text),
            Direction::Decrypt => self.decrypt(text),
        }
    }

    /// Encrypts `text`.
    ///
    /// # Returns
    /// A [`CipherResult`] whose `plaintext` is `text` unchanged.
    ///
    /// # Errors
    /// Returns [`RailFenceError::MatrixTooLarge`] if rails x length exceeds
    /// [`MAX_CELLS`](crate::MAX_CELLS).
    pub fn encrypt(&self, text: &str) -> Result<CipherResult, RailFenceError> {
        let chars: Vec<char> = text.chars().collect();
        log::debug!("encrypt: {} chars on {} rails", chars.len(), self.rails.get());
        if chars.contains(&self.space_substitute) {
            log::warn!(
                "plaintext contains the space substitute {:?}; it will decrypt as a space",
                self.space_substitute
            );
        }

        let path = generate_path(chars.len(), self.rails);
        let mut matrix = FenceMatrix::marked(&path)?;
        for ((row, col), &c) in path.cells().zip(&chars) {
            matrix.fill(row, col, c);
        }

        let ciphertext = matrix
            .read_rows()
            .map(|c| if c == ' ' { self.space_substitute } else { c })
            .collect();

        Ok(CipherResult {
            plaintext: text.to_string(),
            ciphertext,
            visualization: self.style.render(&matrix, self.space_substitute),
        })
    }

    /// Decrypts `cipher`.
    ///
    /// # Returns
    /// A [`CipherResult`] whose `ciphertext` is `cipher` unchanged.
    ///
    /// # Errors
    /// Returns [`RailFenceError::MatrixTooLarge`] if rails x length exceeds
    /// [`MAX_CELLS`](crate::MAX_CELLS).
    pub fn decrypt(&self, cipher: &str) -> Result<CipherResult, RailFenceError> {
        let chars: Vec<char> = cipher.chars().collect();
        log::debug!("decrypt: {} chars on {} rails", chars.len(), self.rails.get());

        let path = generate_path(chars.len(), self.rails);
        let mut matrix = FenceMatrix::marked(&path)?;

        // Row-major fill. There is exactly one active cell per column, so the
        // cipher is consumed completely.
        let targets: Vec<(usize, usize)> = matrix.active_row_major().collect();
        for ((row, col), &c) in targets.into_iter().zip(&chars) {
            matrix.fill(row, col, c);
        }

        let plaintext = path
            .cells()
            .filter_map(|(row, col)| matrix.get(row, col).and_then(|cell| cell.char()))
            .map(|c| if c == self.space_substitute { ' ' } else { c })
            .collect();

        Ok(CipherResult {
            plaintext,
            ciphertext: cipher.to_string(),
            visualization: self.style.render(&matrix, self.space_substitute),
        })
    }
}

/// Encrypts `text` on `rails` rails with default settings.
///
/// # Errors
/// Returns [`RailFenceError::InvalidRailCount`] if `rails <= 0`, or
/// [`RailFenceError::MatrixTooLarge`] if rails x length exceeds
/// [`MAX_CELLS`](crate::MAX_CELLS).
///
/// # Examples
///
/// ```
/// let result = railfence::encrypt("HELLO", 3).unwrap();
/// assert_eq!(result.ciphertext, "HOELL");
/// ```
pub fn encrypt(text: &str, rails: i64) -> Result<CipherResult, RailFenceError> {
    RailFence::new(rails)?.encrypt(text)
}

/// Decrypts `cipher` on `rails` rails with default settings.
///
/// # Errors
/// Returns [`RailFenceError::InvalidRailCount`] if `rails <= 0`, or
/// [`RailFenceError::MatrixTooLarge`] if rails x length exceeds
/// [`MAX_CELLS`](crate::MAX_CELLS).
///
/// # Examples
///
/// ```
/// let result = railfence::decrypt("HOELL", 3).unwrap();
/// assert_eq!(result.plaintext, "HELLO");
/// ```
pub fn decrypt(cipher: &str, rails: i64) -> Result<CipherResult, RailFenceError> {
    RailFence::new(rails)?.decrypt(cipher)
}
