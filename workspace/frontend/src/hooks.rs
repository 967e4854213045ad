use std::cell::Cell;
use std::rc::Rc;
use yew::prelude::*;

/// API fetch state enum
#[derive(Clone, PartialEq)]
pub enum FetchState<T> {
    NotStarted,
    Loading,
    Success(T),
    Error(String),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::NotStarted
    }
}

/// Set once the owning component unmounts. Responses that arrive afterwards
/// must not touch component state.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

impl PartialEq for CancelToken {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// A token tied to the calling component's lifetime.
#[hook]
pub fn use_cancel_token() -> CancelToken {
    let token = use_memo((), |_| CancelToken::default());

    {
        let token = (*token).clone();
        use_effect_with((), move |_| move || token.cancel());
    }

    (*token).clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_is_shared_between_clones() {
        let token = CancelToken::default();
        let held_by_request = token.clone();
        assert!(!held_by_request.is_cancelled());

        token.cancel();
        assert!(held_by_request.is_cancelled());
        assert_eq!(token, held_by_request);
        assert_ne!(token, CancelToken::default());
    }
}
