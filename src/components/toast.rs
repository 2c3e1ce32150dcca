use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::notify::{Toast, ToastAction, ToastKind, ToastStack};

#[derive(Properties, PartialEq)]
pub struct ToastHostProps {
    pub stack: UseReducerHandle<ToastStack>,
    pub default_timeout_ms: u32,
}

#[function_component(ToastHost)]
pub fn toast_host(props: &ToastHostProps) -> Html {
    html! {
        <div class="fixed right-4 top-4 z-[9999] flex flex-col gap-2">
            { for props.stack.toasts.iter().map(|toast| html! {
                <ToastCard
                    key={toast.id}
                    toast={toast.clone()}
                    timeout_ms={toast.notice.timeout_ms.unwrap_or(props.default_timeout_ms)}
                    on_dismiss={{
                        let dispatcher = props.stack.dispatcher();
                        Callback::from(move |id: u32| dispatcher.dispatch(ToastAction::Dismiss(id)))
                    }}
                />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ToastCardProps {
    toast: Toast,
    timeout_ms: u32,
    on_dismiss: Callback<u32>,
}

#[function_component(ToastCard)]
fn toast_card(props: &ToastCardProps) -> Html {
    {
        let id = props.toast.id;
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |timeout_ms: &u32| {
                let timer = Timeout::new(*timeout_ms, move || on_dismiss.emit(id));
                move || drop(timer)
            },
            props.timeout_ms,
        );
    }

    let accent = match props.toast.notice.kind {
        ToastKind::Info => "border-slate-400",
        ToastKind::Success => "border-green-500",
        ToastKind::Error => "border-red-500",
    };

    html! {
        <div class={classes!("max-w-[360px]", "rounded-lg", "border-l-4", "bg-black/75", "px-3", "py-2", "text-sm", "text-white", "shadow-lg", accent)}>
            { props.toast.notice.message.clone() }
        </div>
    }
}
