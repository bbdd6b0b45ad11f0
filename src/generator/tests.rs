use super::*;

/// A clock that replays scripted readings and then repeats the last one.
struct ScriptedClock {
    readings: &'static [u64],
    cursor: usize,
}

impl TimeSource for ScriptedClock {
    fn now_millis(&mut self) -> u64 {
        let reading = self.readings[self.cursor.min(self.readings.len() - 1)];
        self.cursor += 1;
        reading
    }
}

/// A random source that fills every byte with the same value.
struct FixedBytes(u8);

impl RandSource for FixedBytes {
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(self.0);
    }
}

struct ThreadRandSource;

impl RandSource for ThreadRandSource {
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        rand::RngCore::fill_bytes(&mut rand::thread_rng(), dest)
    }
}

fn scripted(readings: &'static [u64]) -> Generator<ThreadRandSource, ScriptedClock> {
    Generator::with_rand_and_time_sources(
        ThreadRandSource,
        ScriptedClock {
            readings,
            cursor: 0,
        },
    )
}

/// Generates fresh ULIDs from the clock reading and 80 random bits
#[test]
fn generates_fresh_ulids_from_the_clock_reading_and_80_random_bits() {
    let mut g = Generator::with_rand_and_time_sources(
        FixedBytes(0xab),
        ScriptedClock {
            readings: &[0x0123_4567_89ab],
            cursor: 0,
        },
    );
    let e = g.generate();
    assert_eq!(e.timestamp_ms(), 0x0123_4567_89ab);
    assert_eq!(e.random(), 0xabab_abab_abab_abab_abab);
    assert_eq!(e.as_bytes()[..6], 0x0123_4567_89abu64.to_be_bytes()[2..]);
}

/// Increments random payload while the timestamp stays the same
#[test]
fn increments_random_payload_while_the_timestamp_stays_the_same() {
    let ts = 0x0123_4567_89abu64;
    let mut g = scripted(&[0x0123_4567_89ab]);
    let mut prev = g.generate();
    for _ in 0..10 {
        let curr = g.generate_monotonic(prev);
        assert_eq!(curr.timestamp_ms(), ts);
        assert_eq!(curr.random(), prev.random() + 1);
        assert!(prev.to_string() < curr.to_string());
        prev = curr;
    }
}

/// Draws a fresh payload once the clock advances
#[test]
fn draws_a_fresh_payload_once_the_clock_advances() {
    let prev = Ulid::from_parts(1_000, Ulid::MAX.random());
    let mut g = Generator::with_rand_and_time_sources(
        FixedBytes(0x00),
        ScriptedClock {
            readings: &[1_001],
            cursor: 0,
        },
    );
    let curr = g.generate_monotonic(prev);
    assert_eq!(curr.to_parts(), (1_001, 0));
    assert!(prev < curr);
}

/// Generates increasing ULIDs even with decreasing or constant timestamp
#[test]
fn generates_increasing_ulids_even_with_decreasing_or_constant_timestamp() {
    let ts = 0x0123_4567_89abu64;
    let mut g = scripted(&[0x0123_4567_89ab]);
    let mut prev = g.generate_core(ts);
    assert_eq!(prev.as_bytes()[..6], ts.to_be_bytes()[2..]);
    for i in 0..100_000u64 {
        let curr = g.generate_monotonic_core(prev, ts - i.min(4_000));
        assert!(prev < curr);
        prev = curr;
    }
    assert_eq!(prev.timestamp_ms(), ts);
}

/// Wraps random payload without touching the timestamp on overflow
#[test]
fn wraps_random_payload_without_touching_the_timestamp_on_overflow() {
    let mut g = scripted(&[5]);
    let saturated = Ulid::from_parts(7, Ulid::MAX.random());
    let curr = g.generate_monotonic(saturated);
    assert_eq!(curr.to_parts(), (7, 0));
}

/// Compares against the truncated 48-bit clock reading
#[test]
fn compares_against_the_truncated_48_bit_clock_reading() {
    let mut g = scripted(&[(1 << 48) | 3]);
    let prev = Ulid::from_parts(10, 20);
    assert_eq!(g.generate_monotonic(prev).to_parts(), (10, 21));
}

/// Produces a strictly increasing sequence of encoded strings
#[test]
fn produces_a_strictly_increasing_sequence_of_encoded_strings() {
    let mut seq = scripted(&[100, 100, 100, 101, 101, 99, 102, 102, 102, 102]).monotonic();
    assert_eq!(seq.previous(), None);
    let mut prev = seq.generate().to_string();
    for _ in 0..9 {
        let curr = seq.generate().to_string();
        assert!(prev < curr);
        prev = curr;
    }
    assert_eq!(seq.previous().map(|e| e.timestamp_ms()), Some(102));
}

/// Resumes a sequence after a given ULID
#[test]
fn resumes_a_sequence_after_a_given_ulid() {
    let last = Ulid::from_parts(500, 41);
    let mut seq = Monotonic::resume(scripted(&[400]), last);
    assert_eq!(seq.generate(), Ulid::from_parts(500, 42));
    assert_eq!(seq.previous(), Some(Ulid::from_parts(500, 42)));
    let _ = seq.into_inner();
}

/// Yields increasing ULIDs as an iterator
#[cfg(feature = "std")]
#[test]
fn yields_increasing_ulids_as_an_iterator() {
    let samples: Vec<Ulid> = Generator::new(ThreadRandSource)
        .monotonic()
        .take(10_000)
        .collect();
    for w in samples.windows(2) {
        assert!(w[0] < w[1]);
    }
}

/// Reads the previous ULID mid-sequence without consuming the iterator
#[test]
fn reads_the_previous_ulid_mid_sequence_without_consuming_the_iterator() {
    let mut seq = scripted(&[100]).monotonic();
    let first = seq.next().unwrap();
    assert_eq!(seq.previous(), Some(first));
    let second = seq.next().unwrap();
    assert_eq!(second.to_parts(), (100, first.random() + 1));
    assert_eq!(seq.previous(), Some(second));
    assert_eq!(seq.size_hint(), (usize::MAX, None));
}

/// Yields increasing ULIDs from custom sources as an iterator
#[test]
fn yields_increasing_ulids_from_custom_sources_as_an_iterator() {
    let samples: Vec<Ulid> = scripted(&[7, 7, 6, 8, 8]).monotonic().take(100).collect();
    for w in samples.windows(2) {
        assert!(w[0] < w[1]);
    }
    assert_eq!(samples[99].timestamp_ms(), 8);
}
