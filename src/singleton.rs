//! Singleton: one lazily built, process-wide instance.
//!
//! The instance lives in a `OnceLock`, so the first caller constructs it and
//! every other caller, on any thread, gets the same `&'static` reference.
//! There is no way to construct a second one or to tear it down.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::info;

static INSTANCE: OnceLock<Singleton> = OnceLock::new();
static CONSTRUCTIONS: AtomicUsize = AtomicUsize::new(0);

#[derive(Debug)]
pub struct Singleton {
    created_at: Instant,
}

impl Singleton {
    pub fn instance() -> &'static Singleton {
        INSTANCE.get_or_init(|| {
            CONSTRUCTIONS.fetch_add(1, Ordering::SeqCst);
            info!("constructing singleton instance");
            Singleton {
                created_at: Instant::now(),
            }
        })
    }

    /// `false` until the first call to [`Singleton::instance`], `true` forever after.
    pub fn is_initialized() -> bool {
        INSTANCE.get().is_some()
    }

    /// When the instance was built. Every caller sees the same value.
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    pub fn some_method(&self) -> &'static str {
        "This is a method of the Singleton class."
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_same_instance() {
        let first = Singleton::instance();
        let second = Singleton::instance();
        assert!(std::ptr::eq(first, second));
        assert!(Singleton::is_initialized());
    }

    #[test]
    fn test_state_is_shared_between_handles() {
        let first = Singleton::instance();
        let later = Singleton::instance();
        assert_eq!(first.created_at(), later.created_at());
        assert!(first.created_at() <= Instant::now());
    }

    #[test]
    fn test_some_method() {
        assert_eq!(
            Singleton::instance().some_method(),
            "This is a method of the Singleton class."
        );
    }

    #[test]
    fn test_concurrent_access_constructs_once() {
        let addresses: Vec<usize> = thread::scope(|scope| {
            let handles: Vec<_> = (0..16)
                .map(|_| scope.spawn(|| Singleton::instance() as *const Singleton as usize))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert!(addresses.windows(2).all(|pair| pair[0] == pair[1]));
        assert_eq!(CONSTRUCTIONS.load(Ordering::SeqCst), 1);
    }
}
