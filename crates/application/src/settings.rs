use folio_domain::ThemeMode;
use tracing::warn;

use crate::{ApplicationError, PreferenceStore};

pub const DARK_MODE_KEY: &str = "darkMode";

/// Process-wide theme preference, read once from the store and written back
/// on every change.
pub struct ThemeSettings {
    store: Box<dyn PreferenceStore>,
    mode: ThemeMode,
}

impl ThemeSettings {
    pub fn load(store: Box<dyn PreferenceStore>) -> Result<Self, ApplicationError> {
        store.initialize()?;
        let mode = match store.get(DARK_MODE_KEY)? {
            Some(raw) => match serde_json::from_str::<bool>(&raw) {
                Ok(dark) => ThemeMode::from_dark_flag(dark),
                Err(error) => {
                    warn!(value = %raw, %error, "ignoring unreadable dark mode preference");
                    ThemeMode::default()
                }
            },
            None => ThemeMode::default(),
        };
        Ok(Self { store, mode })
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ThemeMode) -> Result<(), ApplicationError> {
        let encoded = serde_json::to_string(&mode.is_dark())
            .map_err(|error| ApplicationError::Persistence(error.to_string()))?;
        self.store.set(DARK_MODE_KEY, &encoded)?;
        self.mode = mode;
        Ok(())
    }

    pub fn toggle(&mut self) -> Result<ThemeMode, ApplicationError> {
        self.set_mode(self.mode.toggled())?;
        Ok(self.mode)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;
    use std::rc::Rc;

    use super::*;

    #[derive(Default)]
    struct FakeStore {
        initialized: Cell<bool>,
        values: Rc<RefCell<HashMap<String, String>>>,
    }

    impl PreferenceStore for FakeStore {
        fn initialize(&self) -> Result<(), ApplicationError> {
            self.initialized.set(true);
            Ok(())
        }

        fn get(&self, key: &str) -> Result<Option<String>, ApplicationError> {
            Ok(self.values.borrow().get(key).cloned())
        }

        fn set(&self, key: &str, value: &str) -> Result<(), ApplicationError> {
            self.values
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    fn store_with(values: &Rc<RefCell<HashMap<String, String>>>) -> Box<FakeStore> {
        Box::new(FakeStore {
            initialized: Cell::new(false),
            values: Rc::clone(values),
        })
    }

    #[test]
    fn missing_preference_defaults_to_light() {
        let settings = ThemeSettings::load(Box::<FakeStore>::default()).expect("load");
        assert_eq!(settings.mode(), ThemeMode::Light);
    }

    #[test]
    fn stored_true_loads_dark() {
        let values = Rc::new(RefCell::new(HashMap::new()));
        values
            .borrow_mut()
            .insert(DARK_MODE_KEY.to_string(), "true".to_string());

        let settings = ThemeSettings::load(store_with(&values)).expect("load");
        assert_eq!(settings.mode(), ThemeMode::Dark);
    }

    #[test]
    fn unreadable_preference_falls_back_to_light() {
        let values = Rc::new(RefCell::new(HashMap::new()));
        values
            .borrow_mut()
            .insert(DARK_MODE_KEY.to_string(), "maybe".to_string());

        let settings = ThemeSettings::load(store_with(&values)).expect("load");
        assert_eq!(settings.mode(), ThemeMode::Light);
    }

    #[test]
    fn toggle_persists_json_boolean() {
        let values = Rc::new(RefCell::new(HashMap::new()));
        let mut settings = ThemeSettings::load(store_with(&values)).expect("load");

        assert_eq!(settings.toggle().expect("toggle"), ThemeMode::Dark);
        assert_eq!(
            values.borrow().get(DARK_MODE_KEY).map(String::as_str),
            Some("true")
        );

        assert_eq!(settings.toggle().expect("toggle"), ThemeMode::Light);
        assert_eq!(
            values.borrow().get(DARK_MODE_KEY).map(String::as_str),
            Some("false")
        );

        let reloaded = ThemeSettings::load(store_with(&values)).expect("reload");
        assert_eq!(reloaded.mode(), ThemeMode::Light);
    }
}
