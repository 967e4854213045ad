//! State of the quick-add form and of a list view, kept free of any UI types
//! so every transition can be checked natively.

use crate::collection::{Collection, FieldSpec};
use crate::error::ClientError;
use crate::payload::{FormValues, build_payload};
use crate::record::{Record, derive_columns};
use serde_json::{Map, Value};

/// Quick-add form state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuickAddForm {
    pub open: bool,
    pub collection: Collection,
    pub values: FormValues,
    pub submitting: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum QuickAddAction {
    Toggle,
    Select(Collection),
    SetField { name: String, value: String },
    SubmitStarted,
    SubmitFinished { created: bool },
}

/// What a submit click should do.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitStep {
    /// A submission is already in flight.
    Busy,
    /// Nothing is sent; show this message in a blocking alert.
    Alert(String),
    /// POST this payload.
    Send(Map<String, Value>),
}

impl QuickAddForm {
    /// Inputs shown for the selected collection.
    pub fn fields(&self) -> &'static [FieldSpec] {
        self.collection.quick_add_fields()
    }

    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or_default()
    }

    pub fn apply(&mut self, action: QuickAddAction) {
        match action {
            QuickAddAction::Toggle => self.open = !self.open,
            QuickAddAction::Select(collection) => {
                self.collection = collection;
                self.values.clear();
            }
            QuickAddAction::SetField { name, value } => {
                self.values.insert(name, value);
            }
            QuickAddAction::SubmitStarted => self.submitting = true,
            QuickAddAction::SubmitFinished { created } => {
                self.submitting = false;
                if created {
                    self.open = false;
                    self.values.clear();
                }
            }
        }
    }

    pub fn prepare_submit(&self) -> SubmitStep {
        if self.submitting {
            return SubmitStep::Busy;
        }
        match build_payload(self.collection, &self.values) {
            Ok(payload) => SubmitStep::Send(payload),
            Err(e) => SubmitStep::Alert(ClientError::from(e).user_message()),
        }
    }
}

/// Effects of a settled creation request.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateOutcome {
    pub created: bool,
    /// Whether the form is still mounted and should be updated.
    pub update_form: bool,
    /// Blocking alert text. Raised even after unmount.
    pub alert: Option<String>,
}

impl CreateOutcome {
    pub fn new(result: &Result<(), ClientError>, unmounted: bool) -> Self {
        Self {
            created: result.is_ok(),
            update_form: !unmounted,
            alert: result.as_ref().err().map(ClientError::user_message),
        }
    }
}

/// Records shown by one list view.
#[derive(Debug, Clone, PartialEq)]
pub struct ListView {
    pub items: Vec<Record>,
    pub loading: bool,
}

impl Default for ListView {
    /// A fresh view is loading until its first fetch settles.
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
        }
    }
}

impl ListView {
    pub fn start_fetch(&mut self) {
        self.loading = true;
    }

    /// Applies a fetch outcome. Failures keep the records already shown.
    pub fn finish_fetch(&mut self, result: Result<Vec<Record>, ClientError>) {
        match result {
            Ok(items) => self.items = items,
            Err(e) => tracing::warn!(error = %e, "keeping previous records"),
        }
        self.loading = false;
    }

    pub fn columns(&self) -> Vec<String> {
        derive_columns(&self.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn set(form: &mut QuickAddForm, name: &str, value: &str) {
        form.apply(QuickAddAction::SetField {
            name: name.to_string(),
            value: value.to_string(),
        });
    }

    fn field_names(form: &QuickAddForm) -> Vec<&'static str> {
        form.fields().iter().map(|f| f.name).collect()
    }

    fn records(value: Value) -> Vec<Record> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_switching_collection_swaps_fields_and_clears_values() {
        let mut form = QuickAddForm::default();
        assert_eq!(field_names(&form), vec!["name", "purpose"]);
        set(&mut form, "name", "Family Trust");

        form.apply(QuickAddAction::Select(Collection::Asset));
        assert_eq!(field_names(&form), vec!["title", "category", "value"]);
        assert!(form.values.is_empty());
        assert_eq!(form.value("name"), "");

        form.apply(QuickAddAction::Select(Collection::Donation));
        assert_eq!(field_names(&form), vec!["ngo_name", "amount"]);
    }

    #[test]
    fn test_non_numeric_amount_alerts_without_submitting() {
        let mut form = QuickAddForm::default();
        form.apply(QuickAddAction::Select(Collection::Donation));
        set(&mut form, "ngo_name", "Red Cross");
        set(&mut form, "amount", "ten");

        assert_eq!(
            form.prepare_submit(),
            SubmitStep::Alert("amount must be a number, got 'ten'".to_string())
        );
        assert!(!form.submitting);
    }

    #[test]
    fn test_submit_sends_payload_and_guards_reentry() {
        let mut form = QuickAddForm::default();
        set(&mut form, "name", "Family Trust");

        let expected = json!({"name": "Family Trust"});
        match form.prepare_submit() {
            SubmitStep::Send(payload) => assert_eq!(Value::Object(payload), expected),
            other => panic!("expected Send, got {:?}", other),
        }

        form.apply(QuickAddAction::SubmitStarted);
        assert_eq!(form.prepare_submit(), SubmitStep::Busy);
    }

    #[test]
    fn test_successful_create_closes_and_clears() {
        let mut form = QuickAddForm::default();
        form.apply(QuickAddAction::Toggle);
        set(&mut form, "name", "Family Trust");
        form.apply(QuickAddAction::SubmitStarted);

        form.apply(QuickAddAction::SubmitFinished { created: true });
        assert!(!form.open);
        assert!(!form.submitting);
        assert!(form.values.is_empty());
    }

    #[test]
    fn test_failed_create_keeps_form_contents() {
        let mut form = QuickAddForm::default();
        form.apply(QuickAddAction::Toggle);
        set(&mut form, "name", "Family Trust");
        form.apply(QuickAddAction::SubmitStarted);

        form.apply(QuickAddAction::SubmitFinished { created: false });
        assert!(form.open);
        assert!(!form.submitting);
        assert_eq!(form.value("name"), "Family Trust");
    }

    #[test]
    fn test_failed_create_alerts_even_after_unmount() {
        let failure = Err(ClientError::creation_failure(422, r#"{"detail":"name is required"}"#));

        let mounted = CreateOutcome::new(&failure, false);
        assert!(mounted.update_form);
        assert_eq!(mounted.alert.as_deref(), Some("name is required"));

        let unmounted = CreateOutcome::new(&failure, true);
        assert!(!unmounted.update_form);
        assert!(!unmounted.created);
        assert_eq!(unmounted.alert.as_deref(), Some("name is required"));
    }

    #[test]
    fn test_create_after_unmount_is_silent() {
        let outcome = CreateOutcome::new(&Ok(()), true);
        assert!(outcome.created);
        assert!(!outcome.update_form);
        assert_eq!(outcome.alert, None);
    }

    #[test]
    fn test_list_view_replaces_records_on_success() {
        let mut view = ListView::default();
        assert!(view.loading);

        view.finish_fetch(Ok(records(json!([{"_id": "1", "name": "A"}]))));
        assert!(!view.loading);
        assert_eq!(view.items.len(), 1);
        assert_eq!(view.columns(), vec!["name"]);
    }

    #[test]
    fn test_list_view_keeps_previous_records_on_http_error() {
        let mut view = ListView::default();
        view.finish_fetch(Ok(records(json!([{"_id": "1", "name": "A"}, {"_id": "2", "name": "B"}]))));

        view.start_fetch();
        assert!(view.loading);
        view.finish_fetch(Err(ClientError::Status {
            status: 503,
            detail: None,
        }));

        assert!(!view.loading);
        assert_eq!(view.items.len(), 2);
    }

    #[test]
    fn test_list_view_stays_empty_when_first_fetch_fails() {
        let mut view = ListView::default();
        view.finish_fetch(Err(ClientError::Network("offline".to_string())));
        assert!(!view.loading);
        assert!(view.items.is_empty());
    }
}
