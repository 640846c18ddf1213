pub mod use_global_style;
pub mod use_spin_session;
pub mod use_wheel_size;

pub use use_global_style::*;
pub use use_spin_session::*;
pub use use_wheel_size::*;
