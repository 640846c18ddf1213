use std::time::Duration;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::angle::{resolve_sector, spin_delta, target_rotation};
use crate::constants::{FULL_REVOLUTIONS, SPIN_DURATION};
use crate::prize_table::{Prize, PrizeTable};
use crate::random::RandomSource;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Spinning,
    Resolved,
}

/// Identifies one scheduled timer. Completions carrying a stale ticket are dropped.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

/// Returned when a spin starts; the caller schedules `finish_spin(ticket)` after `duration`.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinStarted {
    pub ticket: Ticket,
    pub sector: usize,
    pub delta: f64,
    pub duration: Duration,
}

/// Returned when a spin resolves; the caller schedules `clear_celebration(celebration)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub prize: Prize,
    pub sector: usize,
    pub celebration: Ticket,
}

/// Read-only copy of the session, handed to the view layer.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub phase: Phase,
    pub accumulated_angle: f64,
    pub resolved_prize: Option<Prize>,
    pub celebrating: bool,
}

/// One wheel screen's spin lifecycle: Idle -> Spinning -> Resolved -> Spinning ...
#[derive(Debug, Clone)]
pub struct SpinSession {
    prizes: PrizeTable,
    revolutions: u32,
    phase: Phase,
    accumulated_angle: f64,
    resolved_prize: Option<Prize>,
    in_flight: Option<Ticket>,
    celebration: Option<Ticket>,
    next_ticket: u64,
    torn_down: bool,
}

impl SpinSession {
    pub fn new(prizes: PrizeTable) -> Self {
        Self {
            prizes,
            revolutions: FULL_REVOLUTIONS,
            phase: Phase::Idle,
            accumulated_angle: 0.0,
            resolved_prize: None,
            in_flight: None,
            celebration: None,
            next_ticket: 0,
            torn_down: false,
        }
    }

    pub fn with_revolutions(mut self, revolutions: u32) -> Self {
        self.revolutions = revolutions.max(1);
        self
    }

    pub fn request_spin(&mut self, rng: &mut dyn RandomSource) -> Option<SpinStarted> {
        if self.torn_down {
            return None;
        }
        if self.phase == Phase::Spinning {
            debug!("spin requested while spinning, ignored");
            return None;
        }

        self.resolved_prize = None;
        self.celebration = None;

        let n = self.prizes.len();
        let sector = rng.next_index(n);
        let target = target_rotation(sector, self.prizes.sector_width(), self.revolutions, rng);
        let delta = spin_delta(self.accumulated_angle, target);
        self.accumulated_angle += delta;

        let ticket = self.issue_ticket();
        self.in_flight = Some(ticket);
        self.phase = Phase::Spinning;

        debug!(
            "spin started: sector {} of {}, delta {:.2}, angle {:.2}",
            sector, n, delta, self.accumulated_angle
        );

        Some(SpinStarted {
            ticket,
            sector,
            delta,
            duration: SPIN_DURATION,
        })
    }

    pub fn finish_spin(&mut self, ticket: Ticket) -> Option<Resolution> {
        if self.torn_down || self.phase != Phase::Spinning || self.in_flight != Some(ticket) {
            debug!("stale spin completion {:?} ignored", ticket);
            return None;
        }

        let sector = resolve_sector(self.accumulated_angle, self.prizes.len());
        let prize = self.prizes.prize_for_sector(sector).clone();
        let celebration = self.issue_ticket();

        self.in_flight = None;
        self.phase = Phase::Resolved;
        self.resolved_prize = Some(prize.clone());
        self.celebration = Some(celebration);

        debug!("spin resolved: sector {}, prize {}", sector, prize.id);

        Some(Resolution {
            prize,
            sector,
            celebration,
        })
    }

    /// Ends the celebration window. Returns false for an outdated ticket.
    pub fn clear_celebration(&mut self, ticket: Ticket) -> bool {
        if self.torn_down || self.celebration != Some(ticket) {
            return false;
        }
        self.celebration = None;
        true
    }

    /// Screen is gone; any timer that still fires must not touch the session.
    pub fn teardown(&mut self) {
        self.torn_down = true;
        self.in_flight = None;
        self.celebration = None;
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn accumulated_angle(&self) -> f64 {
        self.accumulated_angle
    }

    pub fn resolved_prize(&self) -> Option<&Prize> {
        self.resolved_prize.as_ref()
    }

    pub fn in_flight(&self) -> Option<Ticket> {
        self.in_flight
    }

    pub fn is_spinning(&self) -> bool {
        self.phase == Phase::Spinning
    }

    pub fn is_celebrating(&self) -> bool {
        self.celebration.is_some()
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    pub fn prizes(&self) -> &PrizeTable {
        &self.prizes
    }

    /// Sector under the pointer for the stored angle. Pure read.
    pub fn current_sector(&self) -> usize {
        resolve_sector(self.accumulated_angle, self.prizes.len())
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            phase: self.phase,
            accumulated_angle: self.accumulated_angle,
            resolved_prize: self.resolved_prize.clone(),
            celebrating: self.is_celebrating(),
        }
    }

    fn issue_ticket(&mut self) -> Ticket {
        self.next_ticket += 1;
        Ticket(self.next_ticket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::normalize;
    use crate::prize_table::DEFAULT_PRIZES;
    use crate::random::{ScriptedRandom, SeededRandom};

    fn session() -> SpinSession {
        SpinSession::new(DEFAULT_PRIZES.clone())
    }

    #[test]
    fn test_new_session_is_idle() {
        let s = session();
        assert_eq!(s.phase(), Phase::Idle);
        assert_eq!(s.accumulated_angle(), 0.0);
        assert!(s.resolved_prize().is_none());
        assert!(!s.is_celebrating());
    }

    #[test]
    fn test_forced_sector_two() {
        let mut s = session();
        // sector pick 0.625 -> index 2, jitter 0.5 -> offset 0
        let mut rng = ScriptedRandom::new(vec![0.625, 0.5]);
        let started = s.request_spin(&mut rng).unwrap();
        assert_eq!(started.sector, 2);
        assert_eq!(started.delta, 2385.0);
        assert_eq!(started.duration, SPIN_DURATION);
        assert_eq!(s.phase(), Phase::Spinning);
        assert!(s.resolved_prize().is_none());

        let resolution = s.finish_spin(started.ticket).unwrap();
        assert_eq!(resolution.sector, 2);
        assert_eq!(resolution.prize.id, 3);
        assert_eq!(s.phase(), Phase::Resolved);
        assert_eq!(s.resolved_prize(), Some(&resolution.prize));
    }

    #[test]
    fn test_second_spin_grows_and_lands() {
        let mut s = session();

        // sector 1, offset +20 -> rests at 135 + 20 = 155
        let mut rng = ScriptedRandom::new(vec![0.3, 0.5 + 20.0 / 45.0]);
        let first = s.request_spin(&mut rng).unwrap();
        assert_eq!(first.sector, 1);
        s.finish_spin(first.ticket).unwrap();
        let first_angle = s.accumulated_angle();
        assert_eq!(s.current_sector(), 1);

        let mut rng = ScriptedRandom::for_sector(3, 4);
        let second = s.request_spin(&mut rng).unwrap();
        assert_eq!(second.sector, 3);
        let resolution = s.finish_spin(second.ticket).unwrap();

        assert!(s.accumulated_angle() - first_angle >= 360.0 * FULL_REVOLUTIONS as f64);
        assert_eq!(resolution.sector, 3);
        assert_eq!(resolution.prize.id, 4);
        assert!((normalize(s.accumulated_angle()) - 315.0).abs() < 1e-9);
    }

    #[test]
    fn test_request_while_spinning_is_ignored() {
        let mut s = session();
        let mut rng = SeededRandom::new(1);
        let started = s.request_spin(&mut rng).unwrap();
        let angle = s.accumulated_angle();

        assert!(s.request_spin(&mut rng).is_none());
        assert_eq!(s.accumulated_angle(), angle);
        assert_eq!(s.in_flight(), Some(started.ticket));
        assert!(s.resolved_prize().is_none());
        assert_eq!(s.phase(), Phase::Spinning);

        assert!(s.finish_spin(started.ticket).is_some());
    }

    #[test]
    fn test_stale_ticket_is_ignored() {
        let mut s = session();
        let mut rng = SeededRandom::new(2);
        let first = s.request_spin(&mut rng).unwrap();
        s.finish_spin(first.ticket).unwrap();
        let second = s.request_spin(&mut rng).unwrap();

        assert!(s.finish_spin(first.ticket).is_none());
        assert_eq!(s.phase(), Phase::Spinning);
        assert!(s.finish_spin(second.ticket).is_some());
        assert!(s.finish_spin(second.ticket).is_none());
    }

    #[test]
    fn test_angle_monotonic_and_prize_matches_angle() {
        let mut s = session();
        let mut rng = SeededRandom::new(2024);
        let mut last = s.accumulated_angle();
        for _ in 0..500 {
            let started = s.request_spin(&mut rng).unwrap();
            assert!(s.accumulated_angle() >= last);
            last = s.accumulated_angle();

            let resolution = s.finish_spin(started.ticket).unwrap();
            assert_eq!(resolution.sector, started.sector);
            let expected = DEFAULT_PRIZES.prize_for_sector(s.current_sector());
            assert_eq!(s.resolved_prize(), Some(expected));
        }
    }

    #[test]
    fn test_celebration_window() {
        let mut s = session();
        let mut rng = SeededRandom::new(5);
        let started = s.request_spin(&mut rng).unwrap();
        assert!(!s.is_celebrating());
        let resolution = s.finish_spin(started.ticket).unwrap();
        assert!(s.is_celebrating());

        assert!(s.clear_celebration(resolution.celebration));
        assert!(!s.is_celebrating());
        assert!(!s.clear_celebration(resolution.celebration));
        // Clearing the celebration never touches the prize
        assert!(s.resolved_prize().is_some());
    }

    #[test]
    fn test_new_spin_clears_previous_result() {
        let mut s = session();
        let mut rng = SeededRandom::new(6);
        let first = s.request_spin(&mut rng).unwrap();
        let resolution = s.finish_spin(first.ticket).unwrap();

        s.request_spin(&mut rng).unwrap();
        assert!(s.resolved_prize().is_none());
        assert!(!s.is_celebrating());
        // An old celebration timer firing late is harmless
        assert!(!s.clear_celebration(resolution.celebration));
    }

    #[test]
    fn test_teardown_blocks_late_callbacks() {
        let mut s = session();
        let mut rng = SeededRandom::new(8);
        let started = s.request_spin(&mut rng).unwrap();
        s.teardown();

        assert!(s.finish_spin(started.ticket).is_none());
        assert!(s.request_spin(&mut rng).is_none());
        assert!(s.resolved_prize().is_none());
        assert!(s.is_torn_down());
    }

    #[test]
    fn test_current_sector_is_idempotent() {
        let mut s = session();
        let mut rng = SeededRandom::new(9);
        let started = s.request_spin(&mut rng).unwrap();
        s.finish_spin(started.ticket).unwrap();

        let a = s.current_sector();
        let b = s.current_sector();
        assert_eq!(a, b);
        assert_eq!(s.prizes().prize_for_sector(a), s.resolved_prize().unwrap());
    }

    #[test]
    fn test_single_prize_table() {
        let table = PrizeTable::new(vec![Prize::new(10, "всё", "всё")]).unwrap();
        let mut s = SpinSession::new(table).with_revolutions(2);
        let mut rng = SeededRandom::new(10);
        for _ in 0..20 {
            let started = s.request_spin(&mut rng).unwrap();
            assert!(started.delta >= 720.0);
            assert_eq!(s.finish_spin(started.ticket).unwrap().prize.id, 10);
        }
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut s = session();
        let mut rng = ScriptedRandom::for_sector(0, 4);
        let started = s.request_spin(&mut rng).unwrap();
        s.finish_spin(started.ticket).unwrap();

        let json = serde_json::to_string(&s.snapshot()).unwrap();
        assert!(json.contains("\"phase\":\"Resolved\""));
        assert!(json.contains("\"celebrating\":true"));
    }
}
