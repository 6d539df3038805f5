pub mod atomic;
pub mod path_validator;

pub use atomic::atomic_write;

/// True when `--verbose` was given.
pub fn verbose_enabled() -> bool {
    std::env::var("POMPIN_VERBOSE").is_ok()
}
