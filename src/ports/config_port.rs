//! Configuration access port trait.
//!
//! Getters fall back to the supplied default when a key is missing or does
//! not parse as the requested type.

pub trait ConfigPort {
    fn get_string(&self, section: &str, key: &str) -> Option<String>;
    fn get_int(&self, section: &str, key: &str, default: i64) -> i64;
    fn get_double(&self, section: &str, key: &str, default: f64) -> f64;
}
