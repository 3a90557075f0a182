//! Session cookie key loading.
//!
//! Release builds insist on a readable key file of at least
//! [`SESSION_KEY_MIN_LEN`] bytes; debug builds accept down to
//! [`SESSION_KEY_DERIVE_MIN_LEN`], the least key derivation can use. Debug
//! builds, or deployments that opt in explicitly, fall back to a generated
//! key when the file is unreadable; sessions then reset on every restart.

use std::path::{Path, PathBuf};

use actix_web::cookie::Key;
use tracing::warn;
use zeroize::Zeroize;

/// Minimum key file length accepted in release builds.
pub const SESSION_KEY_MIN_LEN: usize = 64;

/// Minimum key file length accepted in any build.
pub const SESSION_KEY_DERIVE_MIN_LEN: usize = 32;

/// Build mode for session key validation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildMode {
    /// Debug builds tolerate missing keys and shorter key files.
    Debug,
    /// Release builds require a real key.
    Release,
}

impl BuildMode {
    /// Shortest key file this mode accepts.
    #[must_use]
    pub const fn min_key_len(self) -> usize {
        match self {
            Self::Debug => SESSION_KEY_DERIVE_MIN_LEN,
            Self::Release => SESSION_KEY_MIN_LEN,
        }
    }

    /// Determine the build mode from `cfg!(debug_assertions)`.
    #[must_use]
    pub fn from_debug_assertions() -> Self {
        if cfg!(debug_assertions) {
            Self::Debug
        } else {
            Self::Release
        }
    }
}

/// Errors raised while loading the session key.
#[derive(thiserror::Error, Debug)]
pub enum SessionConfigError {
    /// Reading the session key file failed.
    #[error("failed to read session key at {path}: {source}")]
    KeyRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The session key file is too short for the build mode.
    #[error("session key at {path} too short: need >= {min_len} bytes, got {length}")]
    KeyTooShort {
        path: PathBuf,
        length: usize,
        min_len: usize,
    },
}

/// Load the cookie signing key from `path`.
///
/// # Examples
///
/// ```rust
/// use chauffeur_backend::inbound::http::session_config::{BuildMode, load_session_key};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let key_file = tempfile::NamedTempFile::new()?;
/// std::fs::write(key_file.path(), vec![b'k'; 64])?;
/// let key = load_session_key(key_file.path(), BuildMode::Release, false)?;
/// assert_eq!(key.master().len(), 64);
/// # Ok(())
/// # }
/// ```
pub fn load_session_key(
    path: &Path,
    mode: BuildMode,
    allow_ephemeral: bool,
) -> Result<Key, SessionConfigError> {
    match std::fs::read(path) {
        Ok(mut bytes) => {
            let length = bytes.len();
            let min_len = mode.min_key_len();
            if length < min_len {
                bytes.zeroize();
                return Err(SessionConfigError::KeyTooShort {
                    path: path.to_path_buf(),
                    length,
                    min_len,
                });
            }
            let key = Key::derive_from(&bytes);
            bytes.zeroize();
            Ok(key)
        }
        Err(error) => {
            if mode == BuildMode::Debug || allow_ephemeral {
                warn!(
                    path = %path.display(),
                    error = %error,
                    "using temporary session key"
                );
                Ok(Key::generate())
            } else {
                Err(SessionConfigError::KeyRead {
                    path: path.to_path_buf(),
                    source: error,
                })
            }
        }
    }
}
