use std::rc::Rc;
use std::sync::atomic::{AtomicU32, Ordering};

use gloo_timers::callback::Timeout;
use yew::prelude::*;

const TOAST_VISIBLE_MS: u32 = 3_000;
const TOAST_FADE_MS: u32 = 250;

static NEXT_TOAST_ID: AtomicU32 = AtomicU32::new(0);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub message: String,
    pub kind: ToastKind,
    pub hiding: bool,
}

pub enum ToastAction {
    Push(Toast),
    Hide(u32),
    Remove(u32),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastList {
    pub toasts: Vec<Toast>,
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push(toast) => next.toasts.push(toast),
            ToastAction::Hide(id) => {
                if let Some(toast) = next.toasts.iter_mut().find(|t| t.id == id) {
                    toast.hiding = true;
                }
            }
            ToastAction::Remove(id) => next.toasts.retain(|t| t.id != id),
        }
        Rc::new(next)
    }
}

impl Toast {
    pub fn new(message: &str, kind: ToastKind) -> Self {
        Self {
            id: NEXT_TOAST_ID.fetch_add(1, Ordering::Relaxed),
            message: message.to_string(),
            kind,
            hiding: false,
        }
    }
}

/// Shows a toast and schedules its fade-out and removal.
pub fn show_toast(toasts: &UseReducerHandle<ToastList>, message: &str, kind: ToastKind) {
    let toast = Toast::new(message, kind);
    let id = toast.id;
    toasts.dispatch(ToastAction::Push(toast));

    let dispatcher = toasts.dispatcher();
    Timeout::new(TOAST_VISIBLE_MS, move || {
        dispatcher.dispatch(ToastAction::Hide(id));
        Timeout::new(TOAST_FADE_MS, move || {
            dispatcher.dispatch(ToastAction::Remove(id));
        })
        .forget();
    })
    .forget();
}

#[derive(Properties, PartialEq)]
pub struct ToastContainerProps {
    pub toasts: Vec<Toast>,
}

#[function_component(ToastContainer)]
pub fn toast_container(props: &ToastContainerProps) -> Html {
    html! {
        <div class="toast-container">
            { for props.toasts.iter().map(|toast| html! {
                <div class={classes!("toast", toast.kind.class(), toast.hiding.then(|| "hide"))}>
                    { &toast.message }
                </div>
            }) }
            <style>
                {r#"
                .toast-container {
                    position: fixed;
                    top: 90px;
                    right: 24px;
                    display: flex;
                    flex-direction: column;
                    gap: 10px;
                    z-index: 1100;
                }
                .toast {
                    padding: 12px 18px;
                    border-radius: 10px;
                    color: #fff;
                    font-size: 14px;
                    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.3);
                    transition: opacity 0.25s ease, transform 0.25s ease;
                }
                .toast.success { background: #1f8f4e; }
                .toast.error { background: #b3261e; }
                .toast.hide {
                    opacity: 0;
                    transform: translateY(-8px);
                }
                "#}
            </style>
        </div>
    }
}
