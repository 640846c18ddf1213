use shared::claim::prepare_claim;
use shared::constants::{
    CLAIM_FORM_TITLE, CLAIM_HINT, SUBMITTING_BUTTON_LABEL, SUBMIT_BUTTON_LABEL,
};
use shared::{ClaimRequest, Prize};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::{host, styles};

#[derive(Clone, Copy, PartialEq)]
enum Field {
    Name,
    Handle,
    Phone,
}

#[derive(Properties, PartialEq)]
pub struct ClaimFormProps {
    pub prize: Prize,
    pub request: ClaimRequest,
    pub on_change: Callback<ClaimRequest>,
}

#[function_component(ClaimForm)]
pub fn claim_form(props: &ClaimFormProps) -> Html {
    let sending = use_state(|| false);

    let on_input = |field: Field| {
        let request = props.request.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = request.clone();
            match field {
                Field::Name => next.name = input.value(),
                Field::Handle => next.handle = input.value(),
                Field::Phone => next.phone = input.value(),
            }
            on_change.emit(next);
        })
    };

    let submit = {
        let prize = props.prize.clone();
        let request = props.request.clone();
        let sending = sending.clone();
        Callback::from(move |_: MouseEvent| {
            match prepare_claim(Some(&prize), &request) {
                Ok(claim) => {
                    sending.set(true);
                    host::open_telegram_link(&claim.link);
                    sending.set(false);
                }
                Err(err) => {
                    log::info!("claim rejected: {}", err);
                    host::alert(err.user_message());
                }
            }
        })
    };

    html! {
        <div style={styles::FORM}>
            <div style={styles::FORM_TITLE}>{ CLAIM_FORM_TITLE }</div>

            <input
                style={styles::INPUT}
                placeholder="Имя"
                value={props.request.name.clone()}
                oninput={on_input(Field::Name)}
            />
            <input
                style={styles::INPUT}
                placeholder="Ник в TG (например, @username)"
                value={props.request.handle.clone()}
                oninput={on_input(Field::Handle)}
            />
            <input
                style={styles::INPUT}
                placeholder="Телефон"
                value={props.request.phone.clone()}
                oninput={on_input(Field::Phone)}
            />

            <button style={styles::SUBMIT_BUTTON} onclick={submit} disabled={*sending}>
                { if *sending { SUBMITTING_BUTTON_LABEL } else { SUBMIT_BUTTON_LABEL } }
            </button>

            <div style={styles::HINT}>{ CLAIM_HINT }</div>
        </div>
    }
}
