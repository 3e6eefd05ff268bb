//! Browser Collaborators
//!
//! Navigation and blocking alerts, injected into workflows as traits.

use leptos_router::NavigateOptions;

/// Client-side navigation
pub trait Navigator {
    fn push(&self, path: &str);
}

/// Blocking user-facing alert
pub trait Alerter {
    fn alert(&self, message: &str);
}

/// `Navigator` over the closure returned by `leptos_router::hooks::use_navigate`
#[derive(Clone)]
pub struct RouterNavigator<F> {
    navigate: F,
}

impl<F> RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    pub fn new(navigate: F) -> Self {
        Self { navigate }
    }
}

impl<F> Navigator for RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    fn push(&self, path: &str) {
        tracing::debug!(path, "navigate");
        (self.navigate)(path, NavigateOptions::default());
    }
}

/// `window.alert`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserAlerter;

impl Alerter for BrowserAlerter {
    fn alert(&self, message: &str) {
        match web_sys::window() {
            Some(window) => {
                let _ = window.alert_with_message(message);
            }
            None => tracing::error!(message, "no window to show alert"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_router_navigator_forwards_path() {
        let visited = RefCell::new(Vec::new());
        let navigator = RouterNavigator::new(|path: &str, _options: NavigateOptions| {
            visited.borrow_mut().push(path.to_string());
        });

        navigator.push("/borderland/sauna");
        assert_eq!(visited.into_inner(), vec!["/borderland/sauna".to_string()]);
    }
}
