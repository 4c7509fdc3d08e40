//! Application constants
//!
//! Single source of truth for paths and default texts.

/// Default configuration file path
pub const CONFIG_PATH: &str = "config/butler.toml";

/// Default environment file path
pub const ENV_PATH: &str = "config/.env";

/// Greeting shown as the first incoming message.
pub const DEFAULT_WELCOME_MESSAGE: &str = "いらっしゃいませ。\nThe Royal Brew へようこそ。\n紅茶の選定からご注文まで、執事セバスチャンが承ります。";

/// Apology shown when the answer service cannot be reached.
pub const DEFAULT_APOLOGY_MESSAGE: &str =
    "申し訳ございません。通信が途絶えてしまったようでございます。";

/// Shown when a reply carries no usable text at all.
pub const DEFAULT_FORMATTING_ERROR_MESSAGE: &str = "Auto-response formatting error.";

pub const DEFAULT_TITLE: &str = "The Royal Brew";

pub const DEFAULT_ICON: &str = "🫖";

/// Delay before scrolling to the latest message after the panel opens.
pub const DEFAULT_OPEN_SCROLL_DELAY_MS: u64 = 100;

/// Floor for the input height, in rows.
pub const DEFAULT_MIN_INPUT_ROWS: u16 = 1;
