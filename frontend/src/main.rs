//! Single-page portfolio rendered with Yew.

mod components;
mod config;
mod hooks;
mod i18n;
mod pages;

use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    html! {
        <>
            <pages::portfolio::PortfolioPage />
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
