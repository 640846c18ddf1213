use shared::constants::CELEBRATION_DURATION_MS;

// Inline styles for the wheel screen. Size-dependent pieces are functions of the wheel diameter.

pub const PAGE: &str = "min-height: calc(var(--vh, 1vh) * 100); \
    padding: calc(16px + env(safe-area-inset-top)) calc(16px + env(safe-area-inset-right)) \
    calc(16px + env(safe-area-inset-bottom)) calc(16px + env(safe-area-inset-left)); \
    background: radial-gradient(circle at 50% 10%, #24003a 0%, #0b0014 55%, #000 100%); \
    color: white; font-family: system-ui, -apple-system, Segoe UI, Roboto, Arial, sans-serif; \
    overflow-x: hidden; -webkit-tap-highlight-color: transparent; box-sizing: border-box;";
pub const WRAPPER: &str = "max-width: 900px; margin: 0 auto; text-align: center;";
pub const TITLE: &str = "font-size: clamp(26px, 6vw, 44px); color: #cfcfcf; \
    text-shadow: 0 0 16px rgba(123,44,255,0.65); margin: 6px 0; letter-spacing: 1px;";
pub const SUBTITLE: &str = "opacity: 0.85; margin-bottom: 12px; font-size: 14px;";

pub const POINTER_WRAP: &str = "position: absolute; top: 12px; left: 50%; transform: translateX(-50%); \
    width: 32px; height: 44px; z-index: 30; display: flex; align-items: center; justify-content: center;";
pub const POINTER_TRI: &str = "width: 0; height: 0; border-left: 14px solid transparent; \
    border-right: 14px solid transparent; border-top: 28px solid #d7d7d7; \
    filter: drop-shadow(0 0 10px rgba(192,192,192,0.55));";
pub const POINTER_DOT: &str = "position: absolute; bottom: 6px; left: 50%; transform: translateX(-50%); \
    width: 6px; height: 6px; border-radius: 50%; background: #7b2cff; \
    box-shadow: 0 0 10px rgba(123,44,255,0.9);";
pub const GLOSS: &str = "position: absolute; inset: 0; border-radius: 50%; pointer-events: none; \
    background: radial-gradient(circle at 30% 25%, rgba(255,255,255,0.20) 0%, rgba(255,255,255,0) 45%), \
    radial-gradient(circle at 70% 75%, rgba(123,44,255,0.12) 0%, rgba(123,44,255,0) 55%);";

pub const SPIN_BUTTON: &str = "background: #7b2cff; color: white; border: none; padding: 14px 42px; \
    font-size: 18px; font-weight: 700; border-radius: 14px; cursor: pointer; margin-top: 10px; \
    box-shadow: 0 0 18px rgba(123,44,255,0.35); touch-action: manipulation; user-select: none;";
pub const SUBMIT_BUTTON: &str = "background: #7b2cff; color: white; border: none; padding: 12px 24px; \
    font-size: 16px; font-weight: 700; border-radius: 12px; cursor: pointer; margin-top: 12px; \
    width: 100%; box-shadow: 0 0 18px rgba(123,44,255,0.25); touch-action: manipulation; user-select: none;";
pub const DISABLED: &str = "opacity: 0.6; cursor: default;";

pub const RESULT: &str = "min-height: 66px;";
pub const RESULT_TITLE: &str = "font-size: 18px; margin-top: 14px;";
pub const RESULT_WIN: &str = "opacity: 0.9; margin-top: 6px; font-size: 14px;";

pub const FORM: &str = "margin: 14px auto 0; padding: 14px; border: 1px solid rgba(123,44,255,0.5); \
    border-radius: 14px; background: rgba(10,0,20,0.35); backdrop-filter: blur(6px); max-width: 360px;";
pub const FORM_TITLE: &str = "font-size: 18px; margin-bottom: 10px;";
// 16px keeps iOS from zooming into the field
pub const INPUT: &str = "width: 100%; padding: 12px; border-radius: 10px; border: 1px solid #3b0061; \
    background: #0b0014; color: white; margin-top: 10px; outline: none; font-size: 16px; \
    box-sizing: border-box;";
pub const HINT: &str = "margin-top: 10px; font-size: 12px; opacity: 0.75;";

pub fn confetti() -> String {
    format!(
        "position: fixed; top: 50%; left: 50%; transform: translate(-50%, -50%); \
         font-size: 48px; z-index: 1000; pointer-events: none; animation: confetti {}s ease-out;",
        CELEBRATION_DURATION_MS as f64 / 1000.0
    )
}

const WHEEL_BORDER: u32 = 8;
const WHEEL_INSET: u32 = 10;

pub fn stage(wheel_size: u32) -> String {
    let side = wheel_size + WHEEL_INSET * 2;
    format!(
        "position: relative; width: {side}px; height: {side}px; margin: 14px auto 8px;"
    )
}

pub fn disc(wheel_size: u32, background: &str, transform: &str, transition: &str) -> String {
    format!(
        "width: {size}px; height: {size}px; border-radius: 50%; border: {border}px solid #7b2cff; \
         box-shadow: 0 0 28px rgba(123,44,255,0.4); position: absolute; top: {inset}px; left: {inset}px; \
         overflow: hidden; will-change: transform; box-sizing: border-box; \
         background: {background}; transform: {transform}; transition: {transition};",
        size = wheel_size,
        border = WHEEL_BORDER,
        inset = WHEEL_INSET,
    )
}

pub fn divider(wheel_size: u32, transform: &str) -> String {
    format!(
        "position: absolute; top: 50%; left: 50%; width: {}px; height: 2px; \
         background: rgba(255,255,255,0.18); transform-origin: 0% 50%; pointer-events: none; \
         transform: {};",
        wheel_size / 2,
        transform
    )
}

pub fn label(wheel_size: u32, transform: &str) -> String {
    format!(
        "position: absolute; top: 50%; left: 50%; font-size: 12px; font-weight: 700; color: #fff; \
         text-shadow: 0 0 8px rgba(0,0,0,0.85); white-space: nowrap; padding: 4px 10px; \
         background: rgba(123,44,255,0.25); border-radius: 999px; border: 1px solid rgba(123,44,255,0.55); \
         backdrop-filter: blur(2px); pointer-events: none; z-index: 5; max-width: {}px; \
         overflow: hidden; text-overflow: ellipsis; transform: {};",
        (wheel_size as f64 * 0.46).floor() as u32,
        transform
    )
}

pub fn hub(wheel_size: u32) -> String {
    let side = (wheel_size as f64 * 0.23).floor() as u32;
    format!(
        "position: absolute; top: 50%; left: 50%; width: {side}px; height: {side}px; \
         transform: translate(-50%, -50%); border-radius: 50%; \
         background: radial-gradient(circle at 30% 30%, #d7d7d7 0%, #6b6b6b 45%, #2a2a2a 100%); \
         box-shadow: 0 0 18px rgba(0,0,0,0.6), inset 0 0 10px rgba(255,255,255,0.15); \
         border: 2px solid rgba(255,255,255,0.15); z-index: 10;"
    )
}

// Registered once per mounted screen, see hooks::use_global_style
pub const GLOBAL_CSS: &str = r#"
@keyframes confetti {
    0%   { opacity: 0; transform: translate(-50%, -50%) scale(0.6); }
    15%  { opacity: 1; transform: translate(-50%, -50%) scale(1.15); }
    80%  { opacity: 1; transform: translate(-50%, -50%) scale(1.0); }
    100% { opacity: 0; transform: translate(-50%, -50%) scale(0.7); }
}
"#;
