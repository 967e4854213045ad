use std::ops::Deref;
use std::rc::Rc;

use common::{ClientError, ListView, QuickAddAction, QuickAddForm, Record};
use yew::prelude::*;

/// Quick-add form state driven through `use_reducer`, so async completions
/// apply to the current form rather than to a captured snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuickAddState(QuickAddForm);

impl Deref for QuickAddState {
    type Target = QuickAddForm;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Reducible for QuickAddState {
    type Action = QuickAddAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.0.apply(action);
        Rc::new(next)
    }
}

pub enum ListAction {
    Start,
    Finish(Result<Vec<Record>, ClientError>),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListState(ListView);

impl Deref for ListState {
    type Target = ListView;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Reducible for ListState {
    type Action = ListAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ListAction::Start => next.0.start_fetch(),
            ListAction::Finish(result) => next.0.finish_fetch(result),
        }
        Rc::new(next)
    }
}
