//! Remote command protocol
//!
//! Every inbound message starts with a one-character prefix:
//!
//! - `#name` selects a mode by name
//! - `$option:value` or `@option:value` sets an option of the controlling mode
//! - `?` asks for the controlling mode's options
//!
//! Options are reported back as `<mode>:<option>:<value>` lines.

mod options;
pub mod value;

use core::fmt::Write;

#[cfg(feature = "esp32-log")]
use esp_println::println;
use heapless::String;

pub use options::{
    CONNECT_SECTIONS, KEY_COLOR_OPTIONS, OptionOutcome, OptionValue, apply_option,
    for_each_option,
};

use crate::mode::ModeId;
use crate::transport::MAX_REPLY_LEN;

/// Reply sent after a mode switch
pub const SELECT_MODE_DONE: &str = "selectMode done";

/// Reply sent after an option edit
pub const SET_OPTION_DONE: &str = "setOption done";

/// Greeting sent before the option dump on connect
pub const CONNECTED: &str = "Connected";

/// A parsed inbound message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    SelectMode(&'a str),
    SetOption { name: &'a str, value: &'a str },
    Dump,
    /// Unrecognized prefix
    Unknown,
}

impl<'a> Command<'a> {
    /// Parse a message
    ///
    /// Returns `None` for an option edit without a value; such messages are
    /// dropped without a reply.
    pub fn parse(message: &'a str) -> Option<Self> {
        let mut chars = message.chars();
        let prefix = chars.next();
        let rest = chars.as_str();
        match prefix {
            Some('#') => Some(Self::SelectMode(rest)),
            Some('$' | '@') => {
                let mut tokens = rest.split(':').filter(|token| !token.is_empty());
                let name = tokens.next()?;
                let value = tokens.next()?;
                Some(Self::SetOption { name, value })
            }
            Some('?') => Some(Self::Dump),
            _ => Some(Self::Unknown),
        }
    }
}

/// Format one `<mode>:<option>:<value>` line
pub fn format_line(mode: ModeId, option: &str, value: OptionValue) -> String<MAX_REPLY_LEN> {
    let mut line = String::new();
    if write!(line, "{}:{}:{}", mode.as_str(), option, value).is_err() {
        #[cfg(feature = "esp32-log")]
        println!("[format_line] truncated {}:{}", mode.as_str(), option);
    }
    line
}
