use crate::components::common::{Msg, ThemeActivityMsg};
use crate::theme::resolver::StyleResolver;
use crate::theme::tokens::StyleTokenSet;
use crate::theme::types::ThemeMode;
use std::sync::Arc;
use std::sync::mpsc::Sender;

/// Receives a notification after every effective mode change.
///
/// Observers run while the store is borrowed and must not call back into it.
pub trait ThemeObserver: Send {
    fn theme_changed(&self, mode: ThemeMode);
}

/// Forwards mode changes to the main loop as messages.
pub struct ChannelObserver {
    tx: Sender<Msg>,
}

impl ChannelObserver {
    pub fn new(tx: Sender<Msg>) -> Self {
        Self { tx }
    }
}

impl ThemeObserver for ChannelObserver {
    fn theme_changed(&self, mode: ThemeMode) {
        if let Err(e) = self
            .tx
            .send(Msg::ThemeActivity(ThemeActivityMsg::Changed(mode)))
        {
            log::error!("Failed to deliver theme change: {e}");
        }
    }
}

/// Single source of truth for the current theme mode.
pub struct ThemeStore {
    mode: ThemeMode,
    resolver: StyleResolver,
    observers: Vec<Box<dyn ThemeObserver>>,
}

impl ThemeStore {
    pub fn new(mode: ThemeMode, resolver: StyleResolver) -> Self {
        Self {
            mode,
            resolver,
            observers: Vec::new(),
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Flip the mode, notify observers and return the new mode.
    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.toggled();
        log::info!("Theme toggled to {}", self.mode);
        self.notify();
        self.mode
    }

    /// Set the mode. Returns whether it changed; observers are only notified
    /// on change.
    pub fn set_mode(&mut self, mode: ThemeMode) -> bool {
        if self.mode == mode {
            return false;
        }
        self.mode = mode;
        log::info!("Theme set to {}", self.mode);
        self.notify();
        true
    }

    pub fn tokens(&self) -> Arc<StyleTokenSet> {
        self.resolver.resolve(self.mode)
    }

    pub fn subscribe(&mut self, observer: Box<dyn ThemeObserver>) {
        self.observers.push(observer);
    }

    fn notify(&self) {
        for observer in &self.observers {
            observer.theme_changed(self.mode);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::sync::mpsc;

    struct Recorder(Arc<Mutex<Vec<ThemeMode>>>);

    impl ThemeObserver for Recorder {
        fn theme_changed(&self, mode: ThemeMode) {
            self.0.lock().unwrap().push(mode);
        }
    }

    fn store(mode: ThemeMode) -> ThemeStore {
        ThemeStore::new(mode, StyleResolver::embedded())
    }

    #[test]
    fn test_toggle_twice_restores_mode() {
        let mut store = store(ThemeMode::Dark);
        assert_eq!(store.toggle(), ThemeMode::Light);
        assert_eq!(store.toggle(), ThemeMode::Dark);
        assert_eq!(store.mode(), ThemeMode::Dark);
    }

    #[test]
    fn test_tokens_follow_mode() {
        let mut store = store(ThemeMode::Light);
        assert_eq!(store.tokens().mode(), ThemeMode::Light);
        store.toggle();
        assert_eq!(store.tokens().mode(), ThemeMode::Dark);
    }

    #[test]
    fn test_observers_are_notified_on_every_toggle() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut store = store(ThemeMode::Dark);
        store.subscribe(Box::new(Recorder(Arc::clone(&seen))));

        store.toggle();
        store.toggle();

        assert_eq!(*seen.lock().unwrap(), vec![ThemeMode::Light, ThemeMode::Dark]);
    }

    #[test]
    fn test_set_mode_notifies_only_on_change() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut store = store(ThemeMode::Dark);
        store.subscribe(Box::new(Recorder(Arc::clone(&seen))));

        assert!(!store.set_mode(ThemeMode::Dark));
        assert!(store.set_mode(ThemeMode::Light));
        assert!(!store.set_mode(ThemeMode::Light));

        assert_eq!(*seen.lock().unwrap(), vec![ThemeMode::Light]);
    }

    #[test]
    fn test_channel_observer_sends_changed_message() {
        let (tx, rx) = mpsc::channel();
        let mut store = store(ThemeMode::Dark);
        store.subscribe(Box::new(ChannelObserver::new(tx)));

        store.toggle();

        assert_eq!(
            rx.try_recv().unwrap(),
            Msg::ThemeActivity(ThemeActivityMsg::Changed(ThemeMode::Light))
        );
    }
}
