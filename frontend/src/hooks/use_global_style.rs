use web_sys::{window, Element};
use yew::prelude::*;

fn inject_style(css: &str) -> Option<Element> {
    let document = window()?.document()?;
    let head = document.head()?;
    let style = document.create_element("style").ok()?;
    style.set_text_content(Some(css));
    head.append_child(&style).ok()?;
    Some(style)
}

/// Appends `css` to `<head>` once on mount and removes it again on unmount.
#[hook]
pub fn use_global_style(css: &'static str) {
    use_effect_with((), move |_| {
        let style = inject_style(css);
        if style.is_none() {
            log::warn!("could not register global stylesheet");
        }

        move || {
            if let Some(style) = style {
                style.remove();
            }
        }
    });
}
