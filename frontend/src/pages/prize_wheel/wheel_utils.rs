use shared::presentation::{spin_button_label, title_text, win_text};
use shared::{Phase, Prize};
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct ResultDisplayProps {
    pub resolved: Option<Prize>,
}

#[function_component(ResultDisplay)]
pub fn result_display(props: &ResultDisplayProps) -> Html {
    html! {
        <div style={styles::RESULT}>
            <div style={styles::RESULT_TITLE}>{ title_text(props.resolved.as_ref()) }</div>
            if let Some(prize) = &props.resolved {
                <div style={styles::RESULT_WIN}>{ win_text(prize) }</div>
            }
        </div>
    }
}

// Disabled for the whole animation; the session ignores repeat requests anyway
#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub phase: Phase,
    pub onclick: Callback<()>,
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    let is_spinning = props.phase == Phase::Spinning;
    let style = if is_spinning {
        format!("{} {}", styles::SPIN_BUTTON, styles::DISABLED)
    } else {
        styles::SPIN_BUTTON.to_string()
    };

    html! {
        <button
            style={style}
            disabled={is_spinning}
            onclick={props.onclick.reform(|_: MouseEvent| ())}
        >
            { spin_button_label(props.phase) }
        </button>
    }
}
