//! `storefront-app` composes catalog, cart and filters into a browsing
//! session and drives it from a line-oriented terminal shell.

pub mod config;
pub mod currency;
pub mod notification;
pub mod render;
pub mod session;
pub mod shell;

pub use config::{ConfigError, CurrencyStyle, StorefrontConfig};
pub use currency::{format_currency, format_currency_alt};
pub use notification::{CartControl, Notification};
pub use session::{DispatchError, Storefront};
pub use shell::{Shell, ShellCommand, ShellError, ShellReply};
