pub mod config;
pub mod host;
pub mod hooks;
pub mod pages;
pub mod styles;

use yew::prelude::*;

use crate::pages::prize_wheel::PrizeWheel;

#[function_component(App)]
pub fn app() -> Html {
    // Let the Telegram client know we're up and take the full screen
    use_effect_with((), move |_| {
        host::signal_ready();
        log::debug!("host init data present: {}", !host::init_data().is_empty());
        || ()
    });

    html! {
        <PrizeWheel />
    }
}
