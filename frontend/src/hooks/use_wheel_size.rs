use gloo_events::EventListener;
use web_sys::{window, Event};
use yew::prelude::*;

use crate::config::{apply_viewport_height, current_wheel_size};

/// Wheel diameter tracking the viewport, refreshed on resize and rotation.
#[hook]
pub fn use_wheel_size() -> u32 {
    let size = use_state(current_wheel_size);

    {
        let size = size.clone();
        use_effect_with((), move |_| {
            apply_viewport_height();

            let listeners = window().map(|window| {
                let on_resize = move |_: &Event| {
                    apply_viewport_height();
                    size.set(current_wheel_size());
                };
                vec![
                    EventListener::new(&window, "resize", on_resize.clone()),
                    EventListener::new(&window, "orientationchange", on_resize),
                ]
            });

            move || drop(listeners)
        });
    }

    *size
}
