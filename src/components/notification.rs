use yew::prelude::*;

use crate::effects::use_effect_scope;

/// A message queued for the toast slot. `id` changes for every new
/// message so a repeat of the same text restarts the timer.
#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    pub id: u32,
    pub title: AttrValue,
    pub description: AttrValue,
    pub duration_ms: u32,
}

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub message: ToastMessage,
    pub on_dismiss: Callback<()>,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_scope(
            (props.message.id, props.message.duration_ms),
            move |scope, (_, duration_ms)| {
                scope.timeout("dismiss", *duration_ms, move || on_dismiss.emit(()));
            },
        );
    }

    let onclick = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    html! {
        <div class="toast" role="status" aria-live="polite" {onclick}>
            <style>
                {r#"
                    @keyframes toastIn {
                        from { transform: translateY(100%); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                    .toast {
                        position: fixed;
                        right: 24px;
                        bottom: 24px;
                        z-index: 100;
                        max-width: 360px;
                        padding: 16px 20px;
                        border-radius: 12px;
                        background: rgba(15, 20, 35, 0.95);
                        border: 1px solid rgba(249, 183, 43, 0.4);
                        box-shadow: 0 16px 32px rgba(0, 0, 0, 0.4);
                        color: #fff;
                        cursor: pointer;
                        animation: toastIn 0.4s ease-out forwards;
                    }
                    .toast-title {
                        font-weight: bold;
                        color: #F9B72B;
                        margin-bottom: 4px;
                    }
                    .toast-description {
                        color: rgba(255, 255, 255, 0.8);
                        font-size: 0.9rem;
                    }
                "#}
            </style>
            <div class="toast-title">{props.message.title.clone()}</div>
            <div class="toast-description">{props.message.description.clone()}</div>
        </div>
    }
}
