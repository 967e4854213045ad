use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

impl ToastKind {
    fn classes(self) -> &'static str {
        match self {
            ToastKind::Info => "border-blue-500/30 text-blue-200",
            ToastKind::Success => "border-emerald-500/30 text-emerald-200",
            ToastKind::Error => "border-pink-500/30 text-pink-200",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            ToastKind::Info => "fas fa-info-circle",
            ToastKind::Success => "fas fa-check-circle",
            ToastKind::Error => "fas fa-exclamation-circle",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: usize,
    pub kind: ToastKind,
    pub message: AttrValue,
}

pub enum ToastAction {
    Push(Toast),
    Dismiss(usize),
}

/// Toasts currently on screen, oldest first.
#[derive(Debug, Default, PartialEq)]
pub struct ToastList {
    toasts: Vec<Toast>,
}

impl ToastList {
    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ToastAction::Push(toast) => {
                let mut toasts = self.toasts.clone();
                toasts.push(toast);
                Rc::new(ToastList { toasts })
            }
            ToastAction::Dismiss(id) => {
                if !self.toasts.iter().any(|t| t.id == id) {
                    return self;
                }
                let toasts = self.toasts.iter().filter(|t| t.id != id).cloned().collect();
                Rc::new(ToastList { toasts })
            }
        }
    }
}

/// Handle components use to raise a toast.
#[derive(Clone, PartialEq)]
pub struct ToastContext {
    notify: Callback<(ToastKind, String)>,
}

impl ToastContext {
    pub fn show_info(&self, message: String) {
        self.notify.emit((ToastKind::Info, message));
    }

    pub fn show_success(&self, message: String) {
        self.notify.emit((ToastKind::Success, message));
    }

    pub fn show_error(&self, message: String) {
        self.notify.emit((ToastKind::Error, message));
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
    /// Auto-dismiss delay
    #[prop_or(5000)]
    pub duration_ms: u32,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let list = use_reducer(ToastList::default);
    let next_id = use_mut_ref(|| 0usize);

    let context = {
        let dispatcher = list.dispatcher();
        let duration_ms = props.duration_ms;

        use_memo(duration_ms, move |&duration_ms| {
            let notify = Callback::from(move |(kind, message): (ToastKind, String)| {
                let id = {
                    let mut next = next_id.borrow_mut();
                    *next += 1;
                    *next
                };
                log::debug!("Toast {}: {}", id, message);
                dispatcher.dispatch(ToastAction::Push(Toast {
                    id,
                    kind,
                    message: message.into(),
                }));

                let dispatcher = dispatcher.clone();
                Timeout::new(duration_ms, move || dispatcher.dispatch(ToastAction::Dismiss(id))).forget();
            });
            ToastContext { notify }
        })
    };

    let on_dismiss = {
        let dispatcher = list.dispatcher();
        Callback::from(move |id: usize| dispatcher.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <ContextProvider<ToastContext> context={(*context).clone()}>
            {props.children.clone()}
            <div class="fixed top-4 right-4 z-50 flex flex-col gap-2">
                { for list.iter().map(|toast| html! {
                    <ToastItem key={toast.id} toast={toast.clone()} on_dismiss={on_dismiss.clone()} />
                })}
            </div>
        </ContextProvider<ToastContext>>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    on_dismiss: Callback<usize>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let Toast { id, kind, message } = props.toast.clone();
    let onclick = props.on_dismiss.reform(move |_: MouseEvent| id);

    html! {
        <div class={classes!("flex", "items-center", "gap-3", "rounded-xl", "border", "bg-slate-900/90", "px-4", "py-3", "shadow-lg", kind.classes())}>
            <i class={kind.icon()}></i>
            <span class="text-sm">{&*message}</span>
            <button class="text-slate-400 hover:text-white" {onclick}>
                <i class="fas fa-times"></i>
            </button>
        </div>
    }
}
