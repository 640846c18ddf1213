use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use shared::constants::CELEBRATION_DURATION_MS;
use shared::spin_session::SessionSnapshot;
use shared::{PrizeTable, SpinSession, ThreadRandom, Ticket};
use yew::prelude::*;

type SharedSession = Rc<RefCell<SpinSession>>;
type TimerSlot = Rc<RefCell<Option<Timeout>>>;

#[derive(Clone)]
pub struct SpinSessionHandle {
    pub snapshot: SessionSnapshot,
    pub prizes: PrizeTable,
    pub spin: Callback<()>,
}

fn publish(session: &SharedSession, snapshot: &UseStateHandle<SessionSnapshot>) {
    let current = session.borrow().snapshot();
    if log::log_enabled!(log::Level::Debug) {
        log::debug!(
            "session {}",
            serde_json::to_string(&current).unwrap_or_default()
        );
    }
    snapshot.set(current);
}

fn schedule_celebration_end(
    session: SharedSession,
    snapshot: UseStateHandle<SessionSnapshot>,
    slot: &TimerSlot,
    ticket: Ticket,
) {
    let timeout = Timeout::new(CELEBRATION_DURATION_MS, move || {
        let cleared = session.borrow_mut().clear_celebration(ticket);
        if cleared {
            publish(&session, &snapshot);
        }
    });
    *slot.borrow_mut() = Some(timeout);
}

/// Owns the screen's spin session and the two timers driving it.
/// Both timers are dropped, and so cancelled, when the screen unmounts.
#[hook]
pub fn use_spin_session(prizes: PrizeTable) -> SpinSessionHandle {
    let session: SharedSession = {
        let prizes = prizes.clone();
        use_mut_ref(move || SpinSession::new(prizes))
    };
    let snapshot = {
        let session = session.clone();
        use_state(move || session.borrow().snapshot())
    };
    let spin_timer: TimerSlot = use_mut_ref(|| None);
    let celebration_timer: TimerSlot = use_mut_ref(|| None);

    {
        let session = session.clone();
        let spin_timer = spin_timer.clone();
        let celebration_timer = celebration_timer.clone();
        use_effect_with((), move |_| {
            move || {
                session.borrow_mut().teardown();
                spin_timer.borrow_mut().take();
                celebration_timer.borrow_mut().take();
            }
        });
    }

    let spin = {
        let session = session.clone();
        let snapshot = snapshot.clone();

        Callback::from(move |_: ()| {
            let started = session.borrow_mut().request_spin(&mut ThreadRandom::new());
            let Some(started) = started else {
                return;
            };

            celebration_timer.borrow_mut().take();
            publish(&session, &snapshot);

            let session = session.clone();
            let snapshot = snapshot.clone();
            let celebration_timer = celebration_timer.clone();
            let duration_ms = started.duration.as_millis() as u32;
            let timeout = Timeout::new(duration_ms, move || {
                let resolution = session.borrow_mut().finish_spin(started.ticket);
                if let Some(resolution) = resolution {
                    publish(&session, &snapshot);
                    schedule_celebration_end(
                        session,
                        snapshot,
                        &celebration_timer,
                        resolution.celebration,
                    );
                }
            });
            *spin_timer.borrow_mut() = Some(timeout);
        })
    };

    SpinSessionHandle {
        snapshot: (*snapshot).clone(),
        prizes,
        spin,
    }
}
