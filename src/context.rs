//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use leptos_motion::PointerSignals;

use crate::config::SiteConfig;
use crate::forms::AuthMode;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Document-level pointer tracking (custom cursor, hero gradient)
    pub pointer: PointerSignals,
    /// Login modal visibility - read
    pub login_open: ReadSignal<bool>,
    /// Login modal visibility - write
    set_login_open: WriteSignal<bool>,
    /// Login modal mode - read
    pub login_mode: ReadSignal<AuthMode>,
    /// Login modal mode - write
    set_login_mode: WriteSignal<AuthMode>,
}

impl AppContext {
    pub fn new(
        pointer: PointerSignals,
        login_open: (ReadSignal<bool>, WriteSignal<bool>),
        login_mode: (ReadSignal<AuthMode>, WriteSignal<AuthMode>),
    ) -> Self {
        Self {
            pointer,
            login_open: login_open.0,
            set_login_open: login_open.1,
            login_mode: login_mode.0,
            set_login_mode: login_mode.1,
        }
    }

    /// Show the login modal in the given mode
    pub fn open_login(&self, mode: AuthMode) {
        self.set_login_mode.set(mode);
        self.set_login_open.set(true);
    }

    pub fn close_login(&self) {
        self.set_login_open.set(false);
    }

    pub fn set_login_mode(&self, mode: AuthMode) {
        self.set_login_mode.set(mode);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

pub fn use_site_config() -> SiteConfig {
    expect_context::<SiteConfig>()
}
