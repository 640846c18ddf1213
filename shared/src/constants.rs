use std::time::Duration;

// Wheel animation. The visual transition and the resolution timer both read SPIN_DURATION_MS.
pub const SPIN_DURATION_MS: u32 = 2600;
pub const SPIN_DURATION: Duration = Duration::from_millis(SPIN_DURATION_MS as u64);
pub const SPIN_EASING: &str = "cubic-bezier(.12,.78,.12,1)";
pub const CELEBRATION_DURATION_MS: u32 = 2500;
pub const CELEBRATION_DURATION: Duration = Duration::from_millis(CELEBRATION_DURATION_MS as u64);

pub const FULL_REVOLUTIONS: u32 = 6;
pub const FULL_TURN_DEG: f64 = 360.0;
pub const BOUNDARY_EPSILON_DEG: f64 = 0.1;

// Claim form
pub const MIN_HANDLE_LENGTH: usize = 3;
pub const MIN_PHONE_LENGTH: usize = 6;
pub const CLAIM_RECIPIENT: &str = "Lyokorps";
pub const TELEGRAM_LINK_BASE: &str = "https://t.me";
pub const EMPTY_FIELD: &str = "-";

pub const CONTACT_REQUIRED_ERROR: &str = "Укажи ник в TG или телефон, иначе мы тебя не найдём 🙂";
pub const NO_PRIZE_ERROR: &str = "Сначала крутани колесо";

// Screen copy
pub const WHEEL_TITLE: &str = "КОЛЕСО ФОРТУНЫ";
pub const WHEEL_SUBTITLE: &str = "Крути и забирай призы";
pub const IDLE_TITLE: &str = "Крути и забирай приз";
pub const SPIN_BUTTON_LABEL: &str = "ГАЗ";
pub const SPINNING_BUTTON_LABEL: &str = "Крутим...";
pub const CLAIM_FORM_TITLE: &str = "Забрать приз";
pub const SUBMIT_BUTTON_LABEL: &str = "Отправить";
pub const SUBMITTING_BUTTON_LABEL: &str = "Открываем Telegram...";
pub const CLAIM_HINT: &str = "Достаточно ника в TG или телефона.";
pub const CELEBRATION_TEXT: &str = "🎉 🎉 🎉";
