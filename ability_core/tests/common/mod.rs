//! Serialization clone helpers shared by the integration tests

#![allow(dead_code)]

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Clone a value by writing it to JSON bytes and reading it back
pub fn clone_via_json<T: Serialize + DeserializeOwned>(value: &T) -> T {
    let bytes = serde_json::to_vec(value).expect("serialize to JSON");
    serde_json::from_slice(&bytes).expect("deserialize from JSON")
}

#[derive(Serialize, Deserialize)]
struct Wrapper<T> {
    value: T,
}

/// Clone a value through a TOML document (TOML needs a table at the top)
pub fn clone_via_toml<T: Serialize + DeserializeOwned>(value: T) -> T {
    let text = toml::to_string(&Wrapper { value }).expect("serialize to TOML");
    let wrapper: Wrapper<T> = toml::from_str(&text).expect("deserialize from TOML");
    wrapper.value
}
