use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found-page">
            <h1>{"404"}</h1>
            <p>{"This page doesn't exist."}</p>
            <Link<Route> to={Route::Home} classes="back-home">
                {"Back to CTX Foundry"}
            </Link<Route>>
            <style>
                {r#"
                .not-found-page {
                    min-height: 100vh;
                    padding-top: 160px;
                    text-align: center;
                    color: #fff;
                    background: #0d0d0d;
                }
                .back-home {
                    color: #ff6b2c;
                }
                "#}
            </style>
        </div>
    }
}
