//! Panic isolation for per-frame work.

/// Run a closure, catching any panic. Returns the closure result on success,
/// or `fallback` on panic. A panic in one frame's UI code then costs that
/// frame only, not the window.
pub fn catch_or<T>(fallback: T, f: impl FnOnce() -> T) -> T {
    match std::panic::catch_unwind(std::panic::AssertUnwindSafe(f)) {
        Ok(val) => val,
        Err(payload) => {
            let msg = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            log::error!("caught panic in frame, recovered: {}", msg);
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_returns_value_without_panic() {
        assert_eq!(catch_or(0, || 42), 42);
    }

    #[test]
    fn test_returns_fallback_on_panic() {
        let v = catch_or(-1, || -> i32 { panic!("boom") });
        assert_eq!(v, -1);
    }

    #[test]
    fn test_state_mutated_before_panic_is_kept() {
        let mut count = 0;
        catch_or((), || {
            count += 1;
            panic!("after increment");
        });
        assert_eq!(count, 1);
    }
}
