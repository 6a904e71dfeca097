use std::collections::VecDeque;

use gloo_storage::{Storage, errors::StorageError};
use serde::{Serialize, de::DeserializeOwned};

use forma_web_app::log;

const KEY_LOG: &str = "forma log";
const MAX_LOG_ENTRIES: usize = 100;

pub struct LocalStorage;

impl LocalStorage {
    fn read<T: DeserializeOwned + Default>(key: &str) -> Result<T, String> {
        match gloo_storage::LocalStorage::get(key) {
            Ok(value) => Ok(value),
            Err(StorageError::KeyNotFound(_)) => Ok(T::default()),
            Err(err) => Err(err.to_string()),
        }
    }

    fn write<T: Serialize>(key: &str, value: T) -> Result<(), String> {
        gloo_storage::LocalStorage::set(key, value).map_err(|err| err.to_string())
    }
}

impl log::Repository for LocalStorage {
    fn read_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        Self::read(KEY_LOG).map_err(log::Error::Unknown)
    }

    fn write_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
        let mut entries = self.read_entries()?;
        entries.push_front(entry);
        entries.truncate(MAX_LOG_ENTRIES);
        Self::write(KEY_LOG, entries).map_err(log::Error::Unknown)
    }

    fn clear_entries(&self) -> Result<(), log::Error> {
        gloo_storage::LocalStorage::delete(KEY_LOG);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    mod wasm {
        use pretty_assertions::assert_eq;
        use wasm_bindgen_test::wasm_bindgen_test;

        use forma_web_app::log::{self, Repository};

        use super::super::*;

        fn entry(message: &str) -> log::Entry {
            log::Entry {
                time: "Oct 17 12:00:00".to_string(),
                level: ::log::Level::Info,
                message: message.to_string(),
            }
        }

        #[wasm_bindgen_test]
        fn test_log_entries() {
            LocalStorage.clear_entries().unwrap();
            assert!(LocalStorage.read_entries().unwrap().is_empty());

            LocalStorage.write_entry(entry("a")).unwrap();
            LocalStorage.write_entry(entry("b")).unwrap();

            assert_eq!(
                LocalStorage
                    .read_entries()
                    .unwrap()
                    .into_iter()
                    .map(|e| e.message)
                    .collect::<Vec<_>>(),
                vec!["b".to_string(), "a".to_string()]
            );
        }

        #[wasm_bindgen_test]
        fn test_log_entries_truncated() {
            LocalStorage.clear_entries().unwrap();

            for i in 0..=MAX_LOG_ENTRIES {
                LocalStorage.write_entry(entry(&i.to_string())).unwrap();
            }

            let entries = LocalStorage.read_entries().unwrap();
            assert_eq!(entries.len(), MAX_LOG_ENTRIES);
            assert_eq!(entries[0].message, MAX_LOG_ENTRIES.to_string());
        }
    }
}
