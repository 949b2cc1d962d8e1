//! Application Context
//!
//! Shared state provided via Leptos Context API: current page, the global
//! loading overlay, and the transient alert slot.

use leptos::prelude::*;
use leptos::task::spawn_local;

/// Screens reachable from the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Dashboard,
    Users,
    Administrators,
    Sessions,
    PrivacyPolicy,
    Terms,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Dashboard,
        Page::Users,
        Page::Administrators,
        Page::Sessions,
        Page::PrivacyPolicy,
        Page::Terms,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Users => "Users",
            Page::Administrators => "Administrators",
            Page::Sessions => "Sessions",
            Page::PrivacyPolicy => "Privacy Policy",
            Page::Terms => "Terms & Conditions",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
}

/// Transient notification shown by the alert host
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current screen - read
    pub page: ReadSignal<Page>,
    set_page: WriteSignal<Page>,
    /// Loading overlay message, None = hidden - read
    pub loading: ReadSignal<Option<String>>,
    set_loading: WriteSignal<Option<String>>,
    /// Active transient alert - read
    pub alert: ReadSignal<Option<Alert>>,
    set_alert: WriteSignal<Option<Alert>>,
    /// Bumped per alert so a stale timer never dismisses a newer one
    alert_seq: ReadSignal<u32>,
    set_alert_seq: WriteSignal<u32>,
}

impl AppContext {
    pub fn new() -> Self {
        let (page, set_page) = signal(Page::default());
        let (loading, set_loading) = signal(None);
        let (alert, set_alert) = signal(None);
        let (alert_seq, set_alert_seq) = signal(0u32);
        Self {
            page,
            set_page,
            loading,
            set_loading,
            alert,
            set_alert,
            alert_seq,
            set_alert_seq,
        }
    }

    pub fn go_to(&self, page: Page) {
        self.set_page.set(page);
    }

    /// Show the full-screen loading overlay
    pub fn begin_loading(&self, message: &str) {
        self.set_loading.set(Some(message.to_string()));
    }

    pub fn end_loading(&self) {
        self.set_loading.set(None);
    }

    pub fn notify_success(&self, message: impl Into<String>) {
        self.notify(AlertKind::Success, message.into());
    }

    pub fn notify_error(&self, message: impl Into<String>) {
        self.notify(AlertKind::Error, message.into());
    }

    /// Dismiss the current alert immediately
    pub fn dismiss_alert(&self) {
        self.set_alert.set(None);
    }

    fn notify(&self, kind: AlertKind, message: String) {
        let seq = self.alert_seq.get_untracked() + 1;
        self.set_alert_seq.set(seq);
        self.set_alert.set(Some(Alert { kind, message }));

        let alert_seq = self.alert_seq;
        let set_alert = self.set_alert;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(4_000).await;
            if alert_seq.get_untracked() == seq {
                set_alert.set(None);
            }
        });
    }
}
