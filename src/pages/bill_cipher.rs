use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::cipher_viewer::CipherViewer;
use crate::components::glitch_text::GlitchText;
use crate::components::modal::Modal;
use crate::components::space_background::SpaceBackground;
use crate::content::{
    CAESAR_EXPLANATION, CAESAR_HINT, CAESAR_MESSAGE, EXPLORER_ABOUT, EXPLORER_QUOTE,
};
use crate::glitch::GlitchConfig;
use crate::pages::home::set_document_title;
use crate::Route;

#[derive(Clone, Copy, PartialEq)]
enum Panel {
    About,
    Secrets,
}

#[function_component(BillCipherExplorer)]
pub fn bill_cipher_explorer() -> Html {
    let panel = use_state(|| None::<Panel>);

    use_effect_with_deps(
        |_| {
            set_document_title("Bill Cipher Explorer - HexaFalls");
            || ()
        },
        (),
    );

    let open = |which: Panel| {
        let panel = panel.clone();
        Callback::from(move |_: MouseEvent| panel.set(Some(which)))
    };
    let close = {
        let panel = panel.clone();
        Callback::from(move |_: ()| panel.set(None))
    };

    let modal = match *panel {
        Some(Panel::About) => html! {
            <Modal title="About Bill Cipher" on_close={close.clone()}>
                { for EXPLORER_ABOUT.iter().map(|paragraph| html! { <p>{*paragraph}</p> }) }
                <blockquote class="explorer-quote">{EXPLORER_QUOTE}</blockquote>
            </Modal>
        },
        Some(Panel::Secrets) => html! {
            <Modal title="Cipher Secrets" subtitle="Decode this message from Bill" on_close={close.clone()}>
                <div class="caesar-message">{CAESAR_MESSAGE}</div>
                <p>{CAESAR_EXPLANATION}</p>
                <p class="caesar-hint">{CAESAR_HINT}</p>
            </Modal>
        },
        None => html! {},
    };

    html! {
        <div class="explorer">
            <style>
                {r#"
                    .explorer {
                        position: relative;
                        min-height: 100vh;
                        padding: 96px 24px 48px;
                        color: #fff;
                    }
                    .explorer-header {
                        max-width: 1100px;
                        margin: 0 auto 24px;
                        display: flex;
                        flex-wrap: wrap;
                        align-items: center;
                        justify-content: space-between;
                        gap: 16px;
                    }
                    .explorer-title {
                        font-family: 'Creepster', cursive;
                        font-size: clamp(2rem, 6vw, 3.5rem);
                        margin: 0;
                    }
                    .explorer-stage {
                        max-width: 1100px;
                        height: 65vh;
                        margin: 0 auto;
                        border-radius: 16px;
                        border: 1px solid rgba(249, 183, 43, 0.3);
                        background: rgba(0, 0, 0, 0.35);
                        overflow: hidden;
                    }
                    .explorer-hint {
                        text-align: center;
                        color: rgba(255, 255, 255, 0.6);
                        margin-top: 16px;
                    }
                    .explorer-actions {
                        display: flex;
                        gap: 12px;
                    }
                    .caesar-message {
                        font-family: monospace;
                        font-size: 1.4rem;
                        letter-spacing: 3px;
                        text-align: center;
                        padding: 16px;
                        margin-bottom: 16px;
                        border-radius: 8px;
                        background: rgba(249, 183, 43, 0.1);
                        color: #F9B72B;
                    }
                    .caesar-hint, .explorer-quote {
                        font-style: italic;
                        color: rgba(255, 255, 255, 0.6);
                    }
                "#}
            </style>
            <SpaceBackground />
            <div class="explorer-header">
                <Link<Route> to={Route::Home} classes="btn btn-outline">{"← Back to HexaFalls"}</Link<Route>>
                <GlitchText tag="h1" class="explorer-title" text="Bill Cipher Explorer" color="#F9B72B" config={GlitchConfig::heading()} />
                <div class="explorer-actions">
                    <button class="btn btn-outline" onclick={open(Panel::About)}>{"About Bill"}</button>
                    <button class="btn btn-primary" onclick={open(Panel::Secrets)}>{"Cipher Secrets"}</button>
                </div>
            </div>
            <div class="explorer-stage">
                <CipherViewer />
            </div>
            <p class="explorer-hint">{"Drag to rotate, scroll to zoom, click Bill to wake him up."}</p>
            {modal}
        </div>
    }
}
