pub mod angle;
pub mod claim;
pub mod constants;
pub mod presentation;
pub mod prize_table;
pub mod random;
pub mod spin_session;

pub use angle::{resolve_sector, spin_delta, target_rotation, target_rotation_with_offset};
pub use claim::{ClaimError, ClaimRequest};
pub use prize_table::{Prize, PrizeTable, PrizeTableError, DEFAULT_PRIZES};
pub use random::{RandomSource, SeededRandom, ThreadRandom};
pub use spin_session::{Phase, Resolution, SpinSession, SpinStarted, Ticket};
