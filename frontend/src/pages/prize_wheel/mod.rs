mod claim_form;
mod wheel_disc;
mod wheel_utils;

use shared::constants::{CELEBRATION_TEXT, WHEEL_SUBTITLE, WHEEL_TITLE};
use shared::{ClaimRequest, DEFAULT_PRIZES};
use yew::prelude::*;

use crate::hooks::{use_global_style, use_spin_session, use_wheel_size};
use crate::styles;

use claim_form::ClaimForm;
use wheel_disc::WheelDisc;
use wheel_utils::{ResultDisplay, SpinButton};

/// The whole mini-app: wheel, spin button, result and the claim form.
#[function_component(PrizeWheel)]
pub fn prize_wheel() -> Html {
    use_global_style(styles::GLOBAL_CSS);

    let wheel_size = use_wheel_size();
    let session = use_spin_session(DEFAULT_PRIZES.clone());
    // Kept across spins so a retry doesn't wipe what the user typed
    let claim_request = use_state(ClaimRequest::default);

    let snapshot = &session.snapshot;
    let on_claim_change = {
        let claim_request = claim_request.clone();
        Callback::from(move |request: ClaimRequest| claim_request.set(request))
    };

    html! {
        <div style={styles::PAGE}>
            if snapshot.celebrating {
                <div style={styles::confetti()}>{ CELEBRATION_TEXT }</div>
            }

            <div style={styles::WRAPPER}>
                <h1 style={styles::TITLE}>{ WHEEL_TITLE }</h1>
                <div style={styles::SUBTITLE}>{ WHEEL_SUBTITLE }</div>

                <WheelDisc
                    prizes={session.prizes.clone()}
                    accumulated_angle={snapshot.accumulated_angle}
                    phase={snapshot.phase}
                    size={wheel_size}
                />

                <SpinButton phase={snapshot.phase} onclick={session.spin.clone()} />

                <ResultDisplay resolved={snapshot.resolved_prize.clone()} />

                if let Some(prize) = &snapshot.resolved_prize {
                    <ClaimForm
                        prize={prize.clone()}
                        request={(*claim_request).clone()}
                        on_change={on_claim_change}
                    />
                }
            </div>
        </div>
    }
}
