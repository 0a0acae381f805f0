use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod chat;
mod config;
mod scroll;
mod components {
    pub mod anchor_link;
    pub mod chat_widget;
    pub mod contact_form;
    pub mod fade_in;
    pub mod toast;
}
mod pages {
    pub mod landing;
    pub mod not_found;
}

use components::anchor_link::AnchorLink;
use pages::{landing::Landing, not_found::NotFound};

const NAV_SCROLL_THRESHOLD: f64 = 50.0;

const NAV_LINKS: &[(&str, &str)] = &[
    ("#services", "Services"),
    ("#process", "Process"),
    ("#industries", "Industries"),
    ("#about", "About"),
    ("#contact", "Contact"),
];

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();

            let scroll_callback = {
                let window = window.clone();
                Closure::wrap(Box::new(move || {
                    let scroll_y = window
                        .as_ref()
                        .and_then(|w| w.scroll_y().ok())
                        .unwrap_or(0.0);
                    is_scrolled.set(scroll_y > NAV_SCROLL_THRESHOLD);
                }) as Box<dyn FnMut()>)
            };

            if let Some(window) = &window {
                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
            }

            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
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
        Callback::from(move |_: ()| {
            menu_open.set(false);
        })
    };

    html! {
        <nav id="navbar" class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <AnchorLink href="#home" class={classes!("nav-logo")} onclick={close_menu.clone()}>
                    {"CTX Foundry"}
                </AnchorLink>

                <button class={classes!("burger-menu", (*menu_open).then(|| "active"))} onclick={toggle_menu} aria-label="Toggle menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={classes!("nav-right", (*menu_open).then(|| "active"))}>
                    { for NAV_LINKS.iter().map(|&(href, label)| html! {
                        <AnchorLink href={href} class={classes!("nav-link")} onclick={close_menu.clone()}>
                            {label}
                        </AnchorLink>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 900;
                    transition: background 0.3s ease, box-shadow 0.3s ease;
                }
                .top-nav.scrolled {
                    background: rgba(13, 13, 13, 0.92);
                    backdrop-filter: blur(10px);
                    box-shadow: 0 2px 16px rgba(0, 0, 0, 0.4);
                }
                .nav-content {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 18px 20px;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .nav-logo {
                    color: #fff;
                    font-weight: 700;
                    font-size: 1.2rem;
                    text-decoration: none;
                }
                .nav-right {
                    display: flex;
                    gap: 28px;
                }
                .nav-link {
                    color: #ccc;
                    text-decoration: none;
                }
                .nav-link:hover {
                    color: #ff6b2c;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: #fff;
                }
                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }
                    .nav-right {
                        display: none;
                        position: absolute;
                        top: 64px;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        padding: 20px;
                        background: #0d0d0d;
                    }
                    .nav-right.active {
                        display: flex;
                    }
                }
                "#}
            </style>
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
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
