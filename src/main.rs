use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod cipher;
mod config;
mod content;
mod effects;
mod glitch;
mod registration;
mod visuals;

mod components {
    pub mod anchor;
    pub mod cipher_viewer;
    pub mod footer;
    pub mod glitch_text;
    pub mod logo;
    pub mod modal;
    pub mod notification;
    pub mod section_heading;
    pub mod space_background;
    pub mod static_noise;
}
mod sections {
    pub mod about;
    pub mod collaboration;
    pub mod faq;
    pub mod feedback;
    pub mod hero;
    pub mod prizes;
    pub mod registration;
    pub mod schedule;
    pub mod speakers;
    pub mod sponsors;
    pub mod themes;
}
mod pages {
    pub mod bill_cipher;
    pub mod home;
    pub mod not_found;
}

use components::anchor::AnchorLink;
use components::logo::Logo;
use config::NAV_SCROLL_THRESHOLD;
use content::{SectionLink, MOBILE_NAV_LINKS, NAV_LINKS};
use effects::use_effect_scope;
use pages::{bill_cipher::BillCipherExplorer, home::Home, not_found::NotFound};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/bill-cipher")]
    BillCipher,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::BillCipher => {
            info!("Rendering Bill Cipher explorer");
            html! { <BillCipherExplorer /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

fn section_links(links: &[SectionLink], class: &'static str, on_navigate: &Callback<()>) -> Html {
    html! {
        <>{ for links.iter().map(|(label, id)| html! {
            <AnchorLink
                href={format!("#{id}")}
                class={class}
                on_navigate={on_navigate.clone()}
            >
                {*label}
            </AnchorLink>
        }) }</>
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);
    let route = use_route::<Route>();
    let on_home = matches!(route, Some(Route::Home));

    {
        let is_scrolled = is_scrolled.setter();
        use_effect_scope((), move |scope, _| {
            let Some(window) = web_sys::window() else {
                return;
            };
            let target = window.clone();
            scope.listen(&target, "scroll", move |_| {
                let scroll_top = window.scroll_y().unwrap_or(0.0);
                is_scrolled.set(scroll_top > NAV_SCROLL_THRESHOLD);
            });
        });
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: ()| menu_open.set(false))
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <Logo size={28} />
                </Link<Route>>

                {
                    if on_home {
                        html! {
                            <>
                                <div class="nav-links desktop-only">
                                    { section_links(&NAV_LINKS, "nav-link", &close_menu) }
                                    <AnchorLink href="#register" class="nav-register-button">
                                        {"Register"}
                                    </AnchorLink>
                                </div>
                                <button class="burger-menu" aria-label="Toggle menu" onclick={toggle_menu}>
                                    <span></span>
                                    <span></span>
                                    <span></span>
                                </button>
                                <div class={menu_class}>
                                    { section_links(&MOBILE_NAV_LINKS, "nav-link", &close_menu) }
                                </div>
                            </>
                        }
                    } else {
                        html! {
                            <div class="nav-links">
                                <Link<Route> to={Route::Home} classes="nav-link">
                                    {"Home"}
                                </Link<Route>>
                            </div>
                        }
                    }
                }
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting {}", config::EVENT_NAME);
    yew::Renderer::<App>::new().render();
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;
    use yew_router::history::{AnyHistory, History, MemoryHistory};

    wasm_bindgen_test_configure!(run_in_browser);

    #[derive(Properties, PartialEq)]
    struct NavAtProps {
        path: AttrValue,
    }

    #[function_component(NavAt)]
    fn nav_at(props: &NavAtProps) -> Html {
        let history = use_memo(
            |path| {
                let history = AnyHistory::from(MemoryHistory::new());
                history.push(path.to_string());
                history
            },
            props.path.clone(),
        );
        html! {
            <Router history={(*history).clone()}>
                <Nav />
            </Router>
        }
    }

    async fn render_nav_at(path: &'static str) -> (yew::AppHandle<NavAt>, web_sys::Element) {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();
        let props = NavAtProps { path: path.into() };
        let app = yew::Renderer::<NavAt>::with_root_and_props(root.clone(), props).render();
        TimeoutFuture::new(50).await;
        (app, root)
    }

    #[wasm_bindgen_test]
    async fn home_route_shows_section_links() {
        let (app, root) = render_nav_at("/").await;
        assert!(root.query_selector(".desktop-only").unwrap().is_some());
        assert!(root.query_selector(".burger-menu").unwrap().is_some());
        let register = root.query_selector(".nav-register-button").unwrap().unwrap();
        assert_eq!(register.get_attribute("href").as_deref(), Some("#register"));
        app.destroy();
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn explorer_route_shows_only_home_link() {
        let (app, root) = render_nav_at("/bill-cipher").await;
        assert!(root.query_selector(".desktop-only").unwrap().is_none());
        let links = root.query_selector_all(".nav-links .nav-link").unwrap();
        assert_eq!(links.length(), 1);
        assert_eq!(links.item(0).unwrap().text_content().as_deref(), Some("Home"));
        app.destroy();
        root.remove();
    }
}
