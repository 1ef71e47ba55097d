//! Error type shared by the simulation core and the scenario loader

use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Two bodies share the exact same position, or sit so close that the
    /// pairwise force is not finite. Indices refer to the simulator's body
    /// order, `first < second`.
    #[error("degenerate configuration: bodies {first} and {second} are too close to separate")]
    DegenerateConfiguration { first: usize, second: usize },

    /// A body descriptor was rejected before entering the simulation.
    #[error("invalid body: {0}")]
    InvalidBody(String),

    /// Invalid simulation or view parameter.
    #[error("invalid parameter: {0}")]
    InvalidParam(String),

    #[error("failed to parse scenario: {0}")]
    Scenario(#[from] serde_yaml::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
