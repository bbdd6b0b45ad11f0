//! ULID generator and related types.

use crate::Ulid;

pub mod with_rand08;

#[cfg(test)]
mod tests;

/// A trait that defines the random number source interface for [`Generator`].
///
/// Implementations must supply cryptographically strong randomness and must not block
/// indefinitely.
pub trait RandSource {
    /// Fills `dest` with random data.
    fn fill_bytes(&mut self, dest: &mut [u8]);
}

/// A trait that defines the clock interface for [`Generator`].
pub trait TimeSource {
    /// Returns the current Unix time in milliseconds.
    fn now_millis(&mut self) -> u64;
}

/// The default [`TimeSource`] that reads the system clock.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[derive(Clone, Copy, Eq, PartialEq, Debug, Default)]
pub struct StdSystemTime;

#[cfg(feature = "std")]
impl TimeSource for StdSystemTime {
    fn now_millis(&mut self) -> u64 {
        use std::time;
        time::SystemTime::now()
            .duration_since(time::UNIX_EPOCH)
            .expect("clock may have gone backwards")
            .as_millis() as u64
    }
}

/// Represents a ULID generator that combines a random number source and a clock.
///
/// The generator holds no sequence state of its own. Monotonic generation takes the previous
/// ULID as an argument, so the caller decides the scope of the guaranteed order: one sequence per
/// thread, or a sequence shared behind a lock. [`Monotonic`] is a ready-made caller-owned
/// sequence.
///
/// # Generator functions
///
/// | Method                      | Timestamp | Random payload                         |
/// | --------------------------- | --------- | -------------------------------------- |
/// | [`generate`]                | Now       | Fresh                                  |
/// | [`generate_core`]           | Argument  | Fresh                                  |
/// | [`generate_monotonic`]      | Now       | Previous + 1 unless the clock advanced |
/// | [`generate_monotonic_core`] | Argument  | Previous + 1 unless the clock advanced |
///
/// # Examples
///
/// ```rust
/// use ulid32::Generator;
///
/// let mut g = Generator::with_rand08(rand::rngs::OsRng);
/// let first = g.generate();
/// let second = g.generate_monotonic(first);
/// assert!(first < second);
/// ```
///
/// [`generate`]: Generator::generate
/// [`generate_core`]: Generator::generate_core
/// [`generate_monotonic`]: Generator::generate_monotonic
/// [`generate_monotonic_core`]: Generator::generate_monotonic_core
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Generator<R, T> {
    rand_source: R,
    time_source: T,
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl<R: RandSource> Generator<R, StdSystemTime> {
    /// Creates a generator that reads the system clock.
    pub const fn new(rand_source: R) -> Self {
        Self::with_rand_and_time_sources(rand_source, StdSystemTime)
    }
}

impl<R: RandSource, T: TimeSource> Generator<R, T> {
    /// Creates a generator with a custom random number source and clock.
    pub const fn with_rand_and_time_sources(rand_source: R, time_source: T) -> Self {
        Self {
            rand_source,
            time_source,
        }
    }

    /// Generates a new ULID from the current timestamp and a fresh random payload.
    pub fn generate(&mut self) -> Ulid {
        let unix_ts_ms = self.time_source.now_millis();
        self.generate_core(unix_ts_ms)
    }

    /// Generates a new ULID from the `unix_ts_ms` passed and a fresh random payload.
    ///
    /// A timestamp wider than 48 bits is truncated to its low-order 48 bits.
    pub fn generate_core(&mut self, unix_ts_ms: u64) -> Ulid {
        Ulid::from_parts(unix_ts_ms, self.next_random())
    }

    /// Generates a ULID greater than `previous` from the current timestamp.
    ///
    /// See [`Generator::generate_monotonic_core`] for the description.
    pub fn generate_monotonic(&mut self, previous: Ulid) -> Ulid {
        let unix_ts_ms = self.time_source.now_millis();
        self.generate_monotonic_core(previous, unix_ts_ms)
    }

    /// Generates a ULID greater than `previous` from the `unix_ts_ms` passed.
    ///
    /// If `unix_ts_ms` is later than the timestamp of `previous`, this method returns a ULID with
    /// the new timestamp and a fresh random payload. Otherwise, including when the clock appears
    /// to have gone backwards, it keeps the previous timestamp and increments the random payload
    /// by one.
    ///
    /// The result is strictly greater than `previous` unless the 80-bit random payload is at its
    /// maximum, in which case it wraps to zero under the same timestamp.
    pub fn generate_monotonic_core(&mut self, previous: Ulid, unix_ts_ms: u64) -> Ulid {
        let unix_ts_ms = Ulid::from_parts(unix_ts_ms, 0).timestamp_ms();
        let prev_ts = previous.timestamp_ms();
        if unix_ts_ms > prev_ts {
            return self.generate_core(unix_ts_ms);
        }

        if unix_ts_ms < prev_ts {
            tracing::debug!(
                prev_ts,
                unix_ts_ms,
                "clock behind previous ULID; reusing previous timestamp"
            );
        }
        previous.increment().unwrap_or_else(|| {
            tracing::warn!(prev_ts, "random payload overflowed; wrapping within timestamp");
            previous.wrapping_increment()
        })
    }

    /// Returns a caller-owned monotonic sequence that starts with a freshly generated ULID.
    pub fn monotonic(self) -> Monotonic<R, T> {
        Monotonic::new(self)
    }

    /// Returns a fresh 80-bit random payload.
    fn next_random(&mut self) -> u128 {
        let mut bytes = [0u8; 16];
        self.rand_source.fill_bytes(&mut bytes[6..]);
        u128::from_be_bytes(bytes)
    }
}

/// A monotonic sequence of ULIDs that owns a [`Generator`] and the last value it produced.
///
/// Each value is strictly greater than the previous one as long as the random payload does not
/// overflow within a millisecond.
///
/// # Examples
///
/// ```rust
/// use ulid32::Generator;
///
/// Generator::with_rand08(rand::thread_rng())
///     .monotonic()
///     .enumerate()
///     .skip(4)
///     .take(4)
///     .for_each(|(i, e)| println!("[{}] {}", i, e));
/// ```
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Monotonic<R, T> {
    generator: Generator<R, T>,
    last: Option<Ulid>,
}

impl<R: RandSource, T: TimeSource> Monotonic<R, T> {
    /// Creates a sequence that starts with a freshly generated ULID.
    pub const fn new(generator: Generator<R, T>) -> Self {
        Self {
            generator,
            last: None,
        }
    }

    /// Creates a sequence whose first value is generated monotonically after `last`.
    pub const fn resume(generator: Generator<R, T>, last: Ulid) -> Self {
        Self {
            generator,
            last: Some(last),
        }
    }

    /// Returns the ULID the next value will be generated after, if any.
    pub const fn previous(&self) -> Option<Ulid> {
        self.last
    }

    /// Generates the next ULID of the sequence.
    pub fn generate(&mut self) -> Ulid {
        let next = match self.last {
            Some(previous) => self.generator.generate_monotonic(previous),
            None => self.generator.generate(),
        };
        self.last = Some(next);
        next
    }

    /// Returns a mutable reference to the inner generator.
    pub fn generator_mut(&mut self) -> &mut Generator<R, T> {
        &mut self.generator
    }

    /// Returns the inner generator, discarding the sequence state.
    pub fn into_inner(self) -> Generator<R, T> {
        self.generator
    }
}

/// Supports operations as an infinite iterator that produces a new ULID for each call of
/// `next()`.
impl<R: RandSource, T: TimeSource> Iterator for Monotonic<R, T> {
    type Item = Ulid;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generate())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<R: RandSource, T: TimeSource> core::iter::FusedIterator for Monotonic<R, T> {}
