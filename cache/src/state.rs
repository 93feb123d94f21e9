//! Three-state result for an asynchronous cached read.

use crate::FetchError;

/// What a component knows about a resource it asked for.
///
/// The original dashboard conflated "still loading" and "failed"; keeping
/// them distinct lets views decide how each should look.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    /// No result yet; the fetch is still in flight.
    Loading,
    /// The fetch failed. Carries a display-ready message.
    Error(String),
    /// The fetch completed with a value.
    Ready(T),
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The value, if the fetch completed.
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(v) => Some(v),
            _ => None,
        }
    }

    pub fn from_result(result: Result<T, FetchError>) -> Self {
        match result {
            Ok(v) => Self::Ready(v),
            Err(e) => Self::Error(e.to_string()),
        }
    }
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::Loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ready_exposes_value() {
        let state = FetchState::Ready(7);
        assert!(!state.is_loading());
        assert_eq!(state.ready(), Some(&7));
    }

    #[test]
    fn error_and_loading_expose_nothing() {
        let loading: FetchState<i32> = FetchState::Loading;
        let error: FetchState<i32> = FetchState::Error("boom".into());
        assert!(loading.is_loading());
        assert_eq!(loading.ready(), None);
        assert_eq!(error.ready(), None);
    }

    #[test]
    fn from_result_maps_err_to_message() {
        let err = FetchError::UnknownResource("/nope".into());
        let state: FetchState<i32> = FetchState::from_result(Err(err));
        assert_eq!(
            state,
            FetchState::Error("no resource registered for `/nope`".into())
        );
    }
}
