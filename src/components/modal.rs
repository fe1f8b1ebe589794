use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

/// Centered dialog over a dimmed backdrop. Clicking the backdrop or the
/// close button calls `on_close`; clicks inside the panel do not.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="modal-backdrop" onclick={close.clone()}>
            <style>
                {r#"
                    .modal-backdrop {
                        position: fixed;
                        inset: 0;
                        z-index: 90;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 16px;
                        background: rgba(0, 0, 0, 0.75);
                        backdrop-filter: blur(4px);
                    }
                    .modal-panel {
                        position: relative;
                        width: 100%;
                        max-width: 560px;
                        max-height: 85vh;
                        overflow-y: auto;
                        padding: 28px;
                        border-radius: 16px;
                        background: #0f1423;
                        border: 1px solid rgba(249, 183, 43, 0.3);
                        color: rgba(255, 255, 255, 0.85);
                    }
                    .modal-panel h2 {
                        margin: 0 0 4px;
                        color: #F9B72B;
                        font-family: 'Creepster', cursive;
                        letter-spacing: 1px;
                    }
                    .modal-subtitle {
                        margin: 0 0 16px;
                        color: rgba(255, 255, 255, 0.6);
                    }
                    .modal-close {
                        margin-top: 20px;
                        padding: 8px 20px;
                        border-radius: 8px;
                        border: 1px solid rgba(249, 183, 43, 0.5);
                        background: transparent;
                        color: #F9B72B;
                        cursor: pointer;
                    }
                    .modal-close:hover {
                        background: rgba(249, 183, 43, 0.1);
                    }
                "#}
            </style>
            <div class="modal-panel" role="dialog" aria-modal="true" onclick={keep_open}>
                <h2>{props.title.clone()}</h2>
                {
                    if let Some(subtitle) = &props.subtitle {
                        html! { <p class="modal-subtitle">{subtitle.clone()}</p> }
                    } else {
                        html! {}
                    }
                }
                { for props.children.iter() }
                <button class="modal-close" onclick={close}>{"Close"}</button>
            </div>
        </div>
    }
}
