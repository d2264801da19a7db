//! Faults surfaced to the consumer of a [`Generator`].

use ::core::any::Any;

use ::thiserror::Error;

/// `Result` alias defaulting to [`GeneratorError`].
pub
type Result<T, E = GeneratorError> = ::core::result::Result<T, E>;

/// Why a [`Generator`][`crate::Generator`] ended early.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub
enum GeneratorError {
    /// The producer panicked. The values it emitted before that were still
    /// delivered, followed by the end of the sequence.
    #[error("generator producer panicked: {message}")]
    Panicked {
        /// The panic message, when the payload was a string.
        message: String,
    },
}

impl GeneratorError {
    pub(in crate)
    fn from_panic (payload: &'_ (dyn Any + Send))
      -> Self
    {
        let message =
            if let Some(&s) = payload.downcast_ref::<&'static str>() {
                s.to_owned()
            } else if let Some(s) = payload.downcast_ref::<String>() {
                s.clone()
            } else {
                "Box<dyn Any>".to_owned()
            }
        ;
        Self::Panicked { message }
    }
}
