use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A playback is already running or paused. Nothing was changed.
    #[error("playback is already active")]
    AlreadyRunning,

    /// The requested start node does not exist in the graph.
    #[error("unknown node `{0}`")]
    UnknownNode(String),

    /// User input that could not be turned into a value.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(Error::AlreadyRunning.to_string(), "playback is already active");
        assert_eq!(Error::UnknownNode("Z".into()).to_string(), "unknown node `Z`");
        assert_eq!(
            Error::InvalidInput("abc".into()).to_string(),
            "invalid input: abc"
        );
    }
}
