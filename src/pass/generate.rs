//! Parallel password generation.
//!
//! The output buffer is split into one contiguous chunk per worker. Each
//! worker owns its chunk exclusively and its own random source, so the fill
//! loop needs no synchronization. The buffer is only read after every worker
//! has joined.

use std::ops::Range;
use std::thread;

use zeroize::Zeroizing;

use super::charset::{self, Alphabet};
use crate::error::{Error, Result};
use crate::options::{Mode, Options};
use crate::rand::{EntropySource, IndexSource, OsEntropy, Picker};

/// Chunk layout for `workers` workers over `length` bytes.
///
/// Every worker gets `length / workers`; the last one also takes the
/// remainder. Ranges are contiguous, disjoint and cover `0..length`.
pub fn chunk_bounds(length: usize, workers: usize) -> Vec<Range<usize>> {
    let workers = workers.max(1);
    let chunk = length / workers;
    let remainder = length % workers;

    (0..workers)
        .map(|id| {
            let start = id * chunk;
            let end = if id == workers - 1 {
                start + chunk + remainder
            } else {
                start + chunk
            };
            start..end
        })
        .collect()
}

/// Fill `buf` with characters from `alphabet` using `workers` threads.
///
/// Fails if any worker fails; the buffer content is then meaningless.
pub fn fill<E: EntropySource + ?Sized>(
    buf: &mut [u8],
    alphabet: &Alphabet,
    mode: Mode,
    workers: usize,
    entropy: &E,
) -> Result<()> {
    if alphabet.is_empty() {
        return Err(Error::NoAlphabet);
    }

    let bounds = chunk_bounds(buf.len(), workers);
    tracing::debug!(
        length = buf.len(),
        workers = bounds.len(),
        alphabet = alphabet.len(),
        mode = mode.name(),
        "filling buffer"
    );

    let results: Vec<Result<()>> = thread::scope(|s| {
        let mut rest: &mut [u8] = buf;
        let mut handles = Vec::with_capacity(bounds.len());

        for (id, range) in bounds.iter().enumerate() {
            let (chunk, tail) = std::mem::take(&mut rest).split_at_mut(range.len());
            rest = tail;
            handles.push(s.spawn(move || {
                tracing::trace!(worker = id, len = chunk.len(), "worker started");
                fill_chunk(chunk, alphabet, mode, entropy)
            }));
        }

        handles
            .into_iter()
            .enumerate()
            .map(|(id, h)| h.join().unwrap_or(Err(Error::WorkerPanicked(id))))
            .collect()
    });

    results.into_iter().collect()
}

#[inline]
fn fill_chunk<E: EntropySource + ?Sized>(
    chunk: &mut [u8],
    alphabet: &Alphabet,
    mode: Mode,
    entropy: &E,
) -> Result<()> {
    let mut picker = Picker::for_mode(mode, entropy)?;
    let len = alphabet.len();
    for slot in chunk.iter_mut() {
        *slot = alphabet.get(picker.next_index(len)?);
    }
    Ok(())
}

/// Generate one string from a prebuilt alphabet.
pub fn generate_from<E: EntropySource + ?Sized>(
    alphabet: &Alphabet,
    options: &Options,
    entropy: &E,
) -> Result<Zeroizing<String>> {
    if options.length() == 0 {
        return Err(Error::InvalidLength);
    }

    let mut buf = Zeroizing::new(vec![0u8; options.length()]);
    if let Err(e) = fill(&mut buf, alphabet, options.mode(), options.workers(), entropy) {
        tracing::error!(error = %e, "generation aborted");
        return Err(e);
    }

    // Safety: every byte was copied from the alphabet, which is ASCII only
    let password = unsafe { String::from_utf8_unchecked(std::mem::take(&mut *buf)) };
    Ok(Zeroizing::new(password))
}

/// Generate one string with a caller-supplied entropy source.
pub fn generate_with<E: EntropySource + ?Sized>(
    options: &Options,
    entropy: &E,
) -> Result<Zeroizing<String>> {
    if options.length() == 0 {
        return Err(Error::InvalidLength);
    }
    let alphabet = charset::build(options)?;
    generate_from(&alphabet, options, entropy)
}

/// Generate one string from OS entropy.
pub fn generate(options: &Options) -> Result<Zeroizing<String>> {
    generate_with(options, &OsEntropy)
}

/// Generate `count` strings, building the alphabet once.
pub fn generate_batch<E: EntropySource + ?Sized>(
    options: &Options,
    count: usize,
    entropy: &E,
) -> Result<Vec<Zeroizing<String>>> {
    let alphabet = charset::build(options)?;
    generate_batch_from(&alphabet, options, count, entropy)
}

/// Generate `count` strings from a prebuilt alphabet.
pub fn generate_batch_from<E: EntropySource + ?Sized>(
    alphabet: &Alphabet,
    options: &Options,
    count: usize,
    entropy: &E,
) -> Result<Vec<Zeroizing<String>>> {
    (0..count)
        .map(|_| generate_from(alphabet, options, entropy))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{Feature, MAX_WORKERS};
    use crate::rand::FastRng;
    use crate::rand::mock::{FailAfter, FailingEntropy, ScriptedEntropy};
    use proptest::prelude::*;

    fn digits(length: usize, workers: i64) -> Options {
        Options::builder()
            .length(length)
            .workers(workers)
            .enable(Feature::IncludeDigits)
            .build()
            .unwrap()
    }

    #[test]
    fn chunks_single_worker() {
        assert_eq!(chunk_bounds(10, 1), vec![0..10]);
    }

    #[test]
    fn last_chunk_takes_remainder() {
        assert_eq!(chunk_bounds(10, 3), vec![0..3, 3..6, 6..10]);
    }

    #[test]
    fn more_workers_than_chars() {
        let bounds = chunk_bounds(2, 5);
        assert_eq!(bounds.len(), 5);
        assert!(bounds[..4].iter().all(|r| r.is_empty()));
        assert_eq!(bounds[4], 0..2);
    }

    proptest! {
        #[test]
        fn chunks_tile_the_buffer(length in 0usize..10_000, workers in 1usize..=MAX_WORKERS) {
            let bounds = chunk_bounds(length, workers);
            prop_assert_eq!(bounds.len(), workers);
            prop_assert_eq!(bounds.iter().map(|r| r.len()).sum::<usize>(), length);

            let mut next = 0;
            for r in &bounds {
                prop_assert_eq!(r.start, next);
                next = r.end;
            }
            prop_assert_eq!(next, length);
        }
    }

    #[test]
    fn secure_mode_exact_output() {
        let options = digits(4, 1);
        let source = ScriptedEntropy::new([1, 12, 23, 39]);
        let password = generate_with(&options, &source).unwrap();
        assert_eq!(password.as_str(), "1239");
    }

    #[test]
    fn each_chunk_is_one_worker_stream() {
        // Workers race for seeds, so chunks are matched to seeds afterwards.
        let seeds = [11u64, 22, 33, 44];
        let alphabet = charset::build(&digits(1, 1)).unwrap();
        let expected = |seed: u64, n: usize| -> Vec<u8> {
            let mut rng = FastRng::from_seed(seed);
            (0..n)
                .map(|_| alphabet.get(rng.next_index(alphabet.len()).unwrap()))
                .collect()
        };

        let mut buf = vec![0u8; 4 * 64 + 3];
        let source = ScriptedEntropy::new(seeds);
        fill(&mut buf, &alphabet, Mode::Fast, 4, &source).unwrap();

        let mut used = Vec::new();
        for range in chunk_bounds(buf.len(), 4) {
            let chunk = &buf[range];
            let seed = seeds
                .iter()
                .copied()
                .find(|&seed| expected(seed, chunk.len()) == chunk)
                .expect("chunk does not match any worker's sequence");
            used.push(seed);
        }
        used.sort_unstable();
        assert_eq!(used, seeds);
    }

    #[test]
    fn length_independent_of_workers() {
        for workers in [1, 2, 3, 8, MAX_WORKERS as i64] {
            let password = generate(&digits(1000, workers)).unwrap();
            assert_eq!(password.len(), 1000);
            assert!(password.bytes().all(|b| b.is_ascii_digit()));
        }
    }

    #[test]
    fn fast_mode_fills_every_chunk() {
        let options = Options::builder()
            .length(997)
            .workers(8)
            .enable(Feature::IncludeLower)
            .enable(Feature::FastMode)
            .build()
            .unwrap();
        let password = generate(&options).unwrap();
        assert_eq!(password.len(), 997);
        assert!(password.bytes().all(|b| b.is_ascii_lowercase()));
    }

    #[test]
    fn entropy_failure_aborts_whole_run() {
        let err = generate_with(&digits(64, 4), &FailingEntropy).unwrap_err();
        assert!(matches!(err, Error::EntropySourceUnavailable(_)));
    }

    #[test]
    fn failure_mid_run_aborts() {
        let err = generate_with(&digits(64, 4), &FailAfter::new(10)).unwrap_err();
        assert!(matches!(err, Error::EntropySourceUnavailable(_)));
    }

    #[test]
    fn empty_alphabet_is_rejected_by_fill() {
        let options = Options::builder()
            .length(3)
            .custom_alphabet(b"ab")
            .exclude(b"ab")
            .build()
            .unwrap();
        let err = generate(&options).unwrap_err();
        assert!(matches!(err, Error::NoAlphabet));
    }

    #[test]
    fn batch_builds_count_strings() {
        let batch = generate_batch(&digits(12, 2), 5, &OsEntropy).unwrap();
        assert_eq!(batch.len(), 5);
        assert!(batch.iter().all(|p| p.len() == 12));
    }
}
