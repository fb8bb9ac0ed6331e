use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A value was requested from a cursor that has moved past the last node
    #[error("iterator exhausted")]
    Exhausted,
}
