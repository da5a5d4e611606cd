// crates/typed-env/tests/process_env.rs
// ============================================================================
// Module: Process Environment Tests
// Description: Free-function accessors against the live process environment.
// Purpose: Ensure the process-bound accessors read current values each call.
// Dependencies: typed-env
// ============================================================================
//! ## Overview
//! Coverage for the crate-root accessors that read the process environment.
//! Invariants:
//! - Only one [`ScopedEnv`] exists at a time; it owns the suite's variables.
//! - Dropping a [`ScopedEnv`] restores the exact prior bytes, including
//!   values that are not valid Unicode.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    clippy::float_cmp,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use typed_env::Duration;
use typed_env::EnvError;
use typed_env::EnvSource;
use typed_env::ProcessEnv;
use typed_env::ValueKind;

use crate::scoped::ScopedEnv;

// ============================================================================
// SECTION: Scoped Environment
// ============================================================================

/// Variable this suite sets.
const VALUE: &str = "TYPED_ENV_TEST_VALUE";
/// Variable this suite keeps unset.
const UNSET: &str = "TYPED_ENV_TEST_UNSET";

/// Process env mutation behind a test-wide lock.
mod scoped {
    #![allow(unsafe_code, reason = "Process env mutation is confined to ScopedEnv.")]

    use std::ffi::OsStr;
    use std::ffi::OsString;
    use std::sync::Mutex;
    use std::sync::MutexGuard;
    use std::sync::PoisonError;

    /// Serializes every [`ScopedEnv`] in this test binary.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Exclusive handle on a set of process variables.
    ///
    /// The named variables start unset and are put back byte-for-byte on drop.
    pub struct ScopedEnv {
        /// Original raw values, restored on drop.
        saved: Vec<(&'static str, Option<OsString>)>,
        /// Held for the handle's lifetime; released after restoration.
        _lock: MutexGuard<'static, ()>,
    }

    impl ScopedEnv {
        /// Locks the environment, snapshots `names`, and unsets them.
        pub fn claim(names: &[&'static str]) -> Self {
            let lock = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
            let saved = capture(names);
            let scoped = Self {
                saved,
                _lock: lock,
            };
            for name in names {
                scoped.unset(name);
            }
            scoped
        }

        /// Sets `name` to raw `value`.
        pub fn set(&self, name: &str, value: impl AsRef<OsStr>) {
            // SAFETY: `ENV_LOCK` is held, so no other test touches the environment.
            unsafe {
                std::env::set_var(name, value);
            }
        }

        /// Unsets `name`.
        pub fn unset(&self, name: &str) {
            // SAFETY: `ENV_LOCK` is held, so no other test touches the environment.
            unsafe {
                std::env::remove_var(name);
            }
        }

        /// Records `names` so a nested scope can put them back on drop.
        #[cfg(unix)]
        pub fn snapshot(&self, names: &[&'static str]) -> Snapshot<'_> {
            Snapshot {
                env: self,
                saved: capture(names),
            }
        }

        /// Writes `saved` back into the process environment.
        fn restore(&self, saved: Vec<(&'static str, Option<OsString>)>) {
            for (name, value) in saved {
                match value {
                    Some(value) => self.set(name, value),
                    None => self.unset(name),
                }
            }
        }
    }

    impl Drop for ScopedEnv {
        fn drop(&mut self) {
            let saved = std::mem::take(&mut self.saved);
            self.restore(saved);
        }
    }

    /// Nested restore point inside a held [`ScopedEnv`].
    #[cfg(unix)]
    pub struct Snapshot<'a> {
        /// Scope whose lock guards the restore.
        env: &'a ScopedEnv,
        /// Raw values at snapshot time.
        saved: Vec<(&'static str, Option<OsString>)>,
    }

    #[cfg(unix)]
    impl Drop for Snapshot<'_> {
        fn drop(&mut self) {
            let saved = std::mem::take(&mut self.saved);
            self.env.restore(saved);
        }
    }

    /// Reads the raw value of each name.
    fn capture(names: &[&'static str]) -> Vec<(&'static str, Option<OsString>)> {
        names.iter().map(|name| (*name, std::env::var_os(name))).collect()
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[test]
fn mandatory_env_reads_and_fails_closed() {
    let env = ScopedEnv::claim(&[VALUE, UNSET]);

    assert_eq!(typed_env::get_mandatory_env(UNSET), Err(EnvError::missing(UNSET)));

    env.set(VALUE, "value");
    assert_eq!(typed_env::get_mandatory_env(VALUE), Ok("value".to_string()));
    assert_eq!(typed_env::get_default_env(VALUE, "test"), "value");
    assert_eq!(typed_env::get_default_env(UNSET, "test"), "test");
}

#[test]
fn typed_accessors_follow_live_values() {
    let env = ScopedEnv::claim(&[VALUE, UNSET]);

    env.set(VALUE, "10s");
    assert_eq!(typed_env::get_mandatory_duration(VALUE), Ok(Duration::seconds(10)));

    env.set(VALUE, "True");
    assert_eq!(typed_env::get_mandatory_bool(VALUE), Ok(true));

    env.set(VALUE, "0");
    assert_eq!(typed_env::get_mandatory_bool(VALUE), Ok(false));
    assert_eq!(typed_env::get_mandatory_int(VALUE), Ok(0));
    assert_eq!(typed_env::get_mandatory_float32(VALUE), Ok(0.0));
    assert_eq!(typed_env::get_mandatory_float64(VALUE), Ok(0.0));

    env.set(VALUE, "abc");
    let err = typed_env::get_mandatory_int(VALUE).unwrap_err();
    assert!(matches!(err, EnvError::Parse { .. }), "{err:?}");
}

#[test]
fn typed_defaults_apply_when_unset() {
    let _env = ScopedEnv::claim(&[VALUE, UNSET]);

    assert_eq!(typed_env::get_default_duration(UNSET, "2h"), Ok(Duration::hours(2)));
    assert_eq!(typed_env::get_default_int(UNSET, "3"), Ok(3));
    assert_eq!(typed_env::get_default_bool(UNSET, "F"), Ok(false));
    assert_eq!(typed_env::get_default_float32(UNSET, "0.5"), Ok(0.5));
    assert_eq!(typed_env::get_default_float64(UNSET, "2.5e-1"), Ok(0.25));
    assert!(typed_env::get_mandatory_int(UNSET).unwrap_err().is_missing());
}

#[cfg(unix)]
#[test]
fn non_unicode_value_stays_present_and_fails_typed_parse() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let env = ScopedEnv::claim(&[VALUE, UNSET]);
    env.set(VALUE, OsStr::from_bytes(b"1\xff"));

    assert_eq!(typed_env::lookup(VALUE), Some("1\u{fffd}".to_string()));
    assert_eq!(typed_env::get_default_env(VALUE, "7"), "1\u{fffd}");
    assert_eq!(typed_env::get_mandatory_env(VALUE), Ok("1\u{fffd}".to_string()));
    match typed_env::get_mandatory_int(VALUE) {
        Err(EnvError::Parse {
            name,
            value,
            kind,
            ..
        }) => {
            assert_eq!(name, VALUE);
            assert_eq!(value, "1\u{fffd}");
            assert_eq!(kind, ValueKind::Int);
        }
        other => panic!("expected parse error, got {other:?}"),
    }
    assert!(typed_env::get_default_int(VALUE, "7").is_err());
}

#[cfg(unix)]
#[test]
fn snapshot_restores_non_unicode_bytes() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let raw = OsStr::from_bytes(b"keep\xfe");
    let env = ScopedEnv::claim(&[VALUE]);
    env.set(VALUE, raw);
    {
        let _snapshot = env.snapshot(&[VALUE]);
        env.set(VALUE, "replaced");
        assert_eq!(typed_env::lookup(VALUE), Some("replaced".to_string()));
    }
    assert_eq!(std::env::var_os(VALUE).as_deref(), Some(raw));
    assert_eq!(typed_env::lookup(VALUE), Some("keep\u{fffd}".to_string()));
}

#[test]
fn process_env_ignores_unstorable_names() {
    let _env = ScopedEnv::claim(&[]);
    assert_eq!(ProcessEnv.lookup(""), None);
    assert_eq!(ProcessEnv.lookup("A=B"), None);
    assert_eq!(ProcessEnv.lookup("NUL\0NAME"), None);
    assert_eq!(typed_env::lookup(""), None);
}
