//! Server Configuration

use crate::scramble::ScramblerType;
use crate::wordlists::WordSource;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Default address the server binds to
pub const DEFAULT_BIND: &str = "0.0.0.0:3000";

/// Default word list path, relative to the working directory
pub const DEFAULT_WORDLIST: &str = "data/english-words.csv";

/// Game server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Socket address to listen on
    pub bind: SocketAddr,
    /// Where the word list is loaded from
    pub wordlist: WordSource,
    /// Scramble algorithm
    pub scrambler: ScramblerType,
    /// Fixed RNG seed; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([0, 0, 0, 0], 3000)),
            wordlist: WordSource::File(PathBuf::from(DEFAULT_WORDLIST)),
            scrambler: ScramblerType::default(),
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bind_matches_const() {
        let config = ServerConfig::default();
        assert_eq!(config.bind, DEFAULT_BIND.parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn default_wordlist_is_bundled_csv() {
        let config = ServerConfig::default();
        assert_eq!(config.wordlist, WordSource::from_arg(DEFAULT_WORDLIST));
        assert_eq!(config.scrambler, ScramblerType::Shuffle);
        assert_eq!(config.seed, None);
    }
}
