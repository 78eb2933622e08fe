//! Durable key/value storage for session state.
//!
//! In the browser this wraps `window.localStorage`. Non-browser builds
//! (SSR, native tests) fall back to a process-local map so that restore
//! and mirroring behave the same way outside a browser.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// Read a stored value.
pub fn get(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;
        window.local_storage().ok().flatten()?.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        fallback::with(|map| map.get(key).cloned())
    }
}

/// Store a value, overwriting any previous entry.
pub fn set(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(key, value);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        fallback::with_mut(|map| {
            map.insert(key.to_owned(), value.to_owned());
        });
    }
}

/// Remove a stored value, if present.
pub fn remove(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(key);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        fallback::with_mut(|map| {
            map.remove(key);
        });
    }
}

#[cfg(not(feature = "hydrate"))]
mod fallback {
    use std::cell::RefCell;
    use std::collections::HashMap;

    thread_local! {
        static STORE: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
    }

    pub fn with<R>(f: impl FnOnce(&HashMap<String, String>) -> R) -> R {
        STORE.with(|store| f(&store.borrow()))
    }

    pub fn with_mut<R>(f: impl FnOnce(&mut HashMap<String, String>) -> R) -> R {
        STORE.with(|store| f(&mut store.borrow_mut()))
    }
}
