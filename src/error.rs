use thiserror::Error;

/// Errors from hosting a scroll area on an event loop
#[derive(Debug, Error)]
pub enum ScrollAreaError {
    /// The event loop could not be created, polled or registered with
    #[error("event loop error: {0}")]
    EventLoop(#[from] calloop::Error),
}

impl<S> From<calloop::InsertError<S>> for ScrollAreaError {
    fn from(err: calloop::InsertError<S>) -> Self {
        ScrollAreaError::EventLoop(err.error)
    }
}

pub type Result<T, E = ScrollAreaError> = std::result::Result<T, E>;
