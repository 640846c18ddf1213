use shared::presentation::{
    divider_transform, label_transform, label_radius, wheel_background, wheel_transform,
    wheel_transition,
};
use shared::{Phase, PrizeTable};
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct WheelDiscProps {
    pub prizes: PrizeTable,
    pub accumulated_angle: f64,
    pub phase: Phase,
    pub size: u32,
}

/// The pointer and the rotating disc. Rotation and transition come straight from session state.
#[function_component(WheelDisc)]
pub fn wheel_disc(props: &WheelDiscProps) -> Html {
    let n = props.prizes.len();
    let radius = label_radius(props.size);
    let disc_style = styles::disc(
        props.size,
        &wheel_background(n),
        &wheel_transform(props.accumulated_angle),
        &wheel_transition(props.phase),
    );

    html! {
        <div style={styles::stage(props.size)}>
            <div style={styles::POINTER_WRAP}>
                <div style={styles::POINTER_TRI} />
                <div style={styles::POINTER_DOT} />
            </div>

            <div style={disc_style}>
                { for (0..n).map(|boundary| html! {
                    <div
                        key={format!("line-{}", boundary)}
                        style={styles::divider(props.size, &divider_transform(boundary, n))}
                    />
                }) }

                { for props.prizes.iter().enumerate().map(|(sector, prize)| html! {
                    <div
                        key={format!("label-{}", prize.id)}
                        style={styles::label(props.size, &label_transform(sector, n, radius))}
                    >
                        { prize.short.clone() }
                    </div>
                }) }

                <div style={styles::GLOSS} />
                <div style={styles::hub(props.size)} />
            </div>
        </div>
    }
}
