//! Default generator and entry point functions.

#![cfg(feature = "global_gen")]
#![cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]

use std::sync;

use crate::Ulid;
use inner::GlobalGenInner;

/// Returns the lock handle of process-wide global generator, creating one if none exists.
fn lock_global_gen() -> sync::MutexGuard<'static, GlobalGenInner> {
    static G: sync::OnceLock<sync::Mutex<GlobalGenInner>> = sync::OnceLock::new();
    G.get_or_init(Default::default)
        .lock()
        .expect("ulid32: could not lock global generator")
}

/// Generates a ULID from the current timestamp and a fresh random payload.
///
/// # Examples
///
/// ```rust
/// let ulid = ulid32::generate_fresh();
/// println!("{}", ulid); // e.g., "01J9HSAQG7YR6Z16SS7ZTH26WQ"
/// println!("{:?}", ulid.as_bytes()); // as 16-byte big-endian array
/// ```
pub fn generate_fresh() -> Ulid {
    lock_global_gen().get_mut().generator().generate()
}

/// Generates a ULID greater than `previous`, reusing its timestamp and incrementing its random
/// payload unless the clock has moved past it.
///
/// The caller threads the previous value through successive calls, so the order is guaranteed
/// only within that sequence of calls.
///
/// # Examples
///
/// ```rust
/// let first = ulid32::generate_fresh();
/// let second = ulid32::generate_monotonic(first);
/// assert!(first < second);
/// assert!(first.to_string() < second.to_string());
/// ```
pub fn generate_monotonic(previous: Ulid) -> Ulid {
    lock_global_gen()
        .get_mut()
        .generator()
        .generate_monotonic(previous)
}

/// Generates a ULID from the process-wide monotonic sequence.
///
/// This function guarantees the process-wide monotonic order of ULIDs generated within the same
/// millisecond. On Unix, this function resets the sequence when the process ID changes (i.e.,
/// upon process forks) to prevent collisions across processes.
///
/// # Examples
///
/// ```rust
/// let ulid_string: String = ulid32::ulid().to_string();
/// assert_eq!(ulid_string.len(), 26);
/// ```
pub fn ulid() -> Ulid {
    lock_global_gen().get_mut().generate()
}

mod inner {
    use rand::rngs::{adapter::ReseedingRng, OsRng};
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Core;

    use crate::generator::{Generator, Monotonic, RandSource, StdSystemTime};

    /// The random number generator of the global generator.
    ///
    /// The global generator employs [`ChaCha12Core`] with [`ReseedingRng`] wrapper to emulate the
    /// strategy used by [`rand::rngs::ThreadRng`].
    #[derive(Debug)]
    pub struct GlobalGenRng(ReseedingRng<ChaCha12Core, OsRng>);

    impl RandSource for GlobalGenRng {
        fn fill_bytes(&mut self, dest: &mut [u8]) {
            rand::RngCore::fill_bytes(&mut self.0, dest)
        }
    }

    /// A thin wrapper to reset the state when the process ID changes (i.e., upon Unix forks).
    #[derive(Debug)]
    pub struct GlobalGenInner {
        #[cfg(unix)]
        pid: u32,
        sequence: Monotonic<GlobalGenRng, StdSystemTime>,
    }

    impl Default for GlobalGenInner {
        fn default() -> Self {
            let core = ChaCha12Core::from_rng(OsRng)
                .expect("ulid32: could not initialize global generator");
            Self {
                #[cfg(unix)]
                pid: std::process::id(),
                sequence: Generator::new(GlobalGenRng(ReseedingRng::new(core, 1024 * 64, OsRng)))
                    .monotonic(),
            }
        }
    }

    impl GlobalGenInner {
        /// Returns a mutable reference to the inner state, resetting it on Unix if the process ID
        /// has changed.
        pub fn get_mut(&mut self) -> &mut Self {
            #[cfg(unix)]
            if self.pid != std::process::id() {
                tracing::debug!(
                    previous_pid = self.pid,
                    "process id changed; resetting global generator"
                );
                *self = Default::default();
            }
            self
        }

        /// Returns the next ULID of the process-wide sequence.
        pub fn generate(&mut self) -> crate::Ulid {
            self.sequence.generate()
        }

        /// Returns the underlying generator for sequence-free generation.
        pub fn generator(&mut self) -> &mut Generator<GlobalGenRng, StdSystemTime> {
            self.sequence.generator_mut()
        }
    }
}
