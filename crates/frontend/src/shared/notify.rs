//! User-facing side effects of a form: blocking notices and navigation.

use leptos_router::NavigateOptions;

/// Notices and redirects a form can trigger
pub trait UserFeedback {
    fn notify(&self, message: &str);
    fn navigate(&self, path: &str);
}

/// `window.alert` for notices, the router's navigate for redirects
pub struct BrowserFeedback {
    navigate: Box<dyn Fn(&str, NavigateOptions)>,
}

impl BrowserFeedback {
    pub fn new(navigate: impl Fn(&str, NavigateOptions) + 'static) -> Self {
        Self {
            navigate: Box::new(navigate),
        }
    }
}

impl UserFeedback for BrowserFeedback {
    fn notify(&self, message: &str) {
        let Some(window) = web_sys::window() else {
            log::warn!("no window, notice dropped: {}", message);
            return;
        };
        if let Err(e) = window.alert_with_message(message) {
            log::warn!("alert failed: {:?}", e);
        }
    }

    fn navigate(&self, path: &str) {
        log::debug!("navigate to {}", path);
        (self.navigate)(path, NavigateOptions::default());
    }
}
