use yew::prelude::*;
use yew_router::prelude::*;

use crate::cipher;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found section">
            <div class="section-inner" style="text-align: center; padding-top: 120px;">
                <h1 style="font-family: 'Creepster', cursive; color: #F9B72B; font-size: 4rem;">{"404"}</h1>
                <p style="font-family: monospace; letter-spacing: 3px;">{cipher::encode("This page fell into the bottomless pit")}</p>
                <p>{"This page fell into the bottomless pit."}</p>
                <Link<Route> to={Route::Home} classes="btn btn-primary">{"Return to HexaFalls"}</Link<Route>>
            </div>
        </div>
    }
}
