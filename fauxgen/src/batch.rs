//! Parallel batch generation.
//!
//! Large fixture sets are split across scoped worker threads. Each worker owns
//! an RNG forked from the batch seed, so no two workers share or replay a
//! sequence and a seeded batch is reproducible for a given configuration.

use crate::config::ParallelConfig;
use crate::error::{FauxError, Result};
use crate::generator::Generator;
use crate::lexicon::Lexicon;
use crate::rng::{DefaultRngProvider, RngProvider, RngSource};

/// Generate `count` values, in parallel when the configuration allows it.
///
/// Values are returned grouped by worker, in worker order. The first error
/// reported by any worker is returned; a panicking worker is reported as
/// [`FauxError::WorkerPanicked`].
pub fn generate_batch<T, G, L>(
    generator: &G,
    lexicon: &L,
    count: usize,
    seed: Option<u64>,
    config: &ParallelConfig,
) -> Result<Vec<T>>
where
    T: Send,
    G: Generator<T> + Sync + ?Sized,
    L: Lexicon + Sync,
{
    config.validate()?;

    if !config.enabled || config.num_threads == 1 || count < config.batch_size {
        tracing::debug!(count, "generating batch sequentially");
        return run_worker(generator, lexicon, seed, 0, count);
    }

    let workers = config.num_threads.min(count);
    let per_worker = count / workers;
    let remaining = count % workers;
    tracing::debug!(count, workers, "splitting batch across workers");

    let outcome = crossbeam::scope(|scope| {
        let handles: Vec<_> = (0..workers)
            .map(|worker| {
                let quota = if worker < remaining {
                    per_worker + 1
                } else {
                    per_worker
                };
                scope.spawn(move |_| run_worker(generator, lexicon, seed, worker, quota))
            })
            .collect();

        // Join every handle before reporting, so a failure never leaves a
        // worker unjoined.
        let mut values = Vec::with_capacity(count);
        let mut failure = None;
        for (worker, handle) in handles.into_iter().enumerate() {
            match handle.join() {
                Ok(Ok(chunk)) => values.extend(chunk),
                Ok(Err(err)) => {
                    failure.get_or_insert(err);
                }
                Err(_) => {
                    tracing::debug!(worker, "batch worker panicked");
                    failure.get_or_insert(FauxError::WorkerPanicked { worker });
                }
            }
        }
        match failure {
            Some(err) => Err(err),
            None => Ok(values),
        }
    });

    match outcome {
        Ok(result) => result,
        // Every handle is joined above and panics are reported per worker,
        // so crossbeam has no unjoined panic left to surface here.
        Err(_) => Err(FauxError::WorkerPanicked { worker: 0 }),
    }
}

fn run_worker<T, G, L>(
    generator: &G,
    lexicon: &L,
    seed: Option<u64>,
    worker: usize,
    quota: usize,
) -> Result<Vec<T>>
where
    G: Generator<T> + ?Sized,
    L: Lexicon,
{
    let mut source = RngSource::new(DefaultRngProvider.fork(seed, worker));
    (0..quota)
        .map(|_| generator.generate(&mut source, lexicon))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{ConstantGenerator, OneOfGenerator};
    use crate::lexicon::BuiltinLexicon;
    use crate::rng::RandomSource;

    struct CountingDigits;

    impl Generator<i64> for CountingDigits {
        fn generate(&self, source: &mut dyn RandomSource, _lexicon: &dyn Lexicon) -> Result<i64> {
            Ok(source.int_inclusive(0, 9))
        }
    }

    struct Failing;

    impl Generator<i64> for Failing {
        fn generate(&self, _source: &mut dyn RandomSource, _lexicon: &dyn Lexicon) -> Result<i64> {
            Err(FauxError::empty_pool("test pool"))
        }
    }

    struct Panicking;

    impl Generator<i64> for Panicking {
        fn generate(&self, _source: &mut dyn RandomSource, _lexicon: &dyn Lexicon) -> Result<i64> {
            panic!("worker blew up");
        }
    }

    fn parallel(threads: usize) -> ParallelConfig {
        ParallelConfig::new(threads, 4).unwrap()
    }

    #[test]
    fn test_batch_returns_requested_count() {
        for count in [0, 1, 3, 4, 17, 100] {
            let values =
                generate_batch(&CountingDigits, &BuiltinLexicon, count, None, &parallel(4))
                    .unwrap();
            assert_eq!(values.len(), count);
            assert!(values.iter().all(|v| (0..=9).contains(v)));
        }
    }

    #[test]
    fn test_seeded_batch_is_reproducible() {
        let first =
            generate_batch(&CountingDigits, &BuiltinLexicon, 200, Some(9), &parallel(3)).unwrap();
        let second =
            generate_batch(&CountingDigits, &BuiltinLexicon, 200, Some(9), &parallel(3)).unwrap();
        assert_eq!(first, second);

        let other =
            generate_batch(&CountingDigits, &BuiltinLexicon, 200, Some(10), &parallel(3)).unwrap();
        assert_ne!(first, other);
    }

    #[test]
    fn test_workers_do_not_replay_each_other() {
        // Two workers, 100 values each; forked seeds must give different chunks.
        let values =
            generate_batch(&CountingDigits, &BuiltinLexicon, 200, Some(1), &parallel(2)).unwrap();
        assert_ne!(values[..100], values[100..]);
    }

    struct WideDraws;

    impl Generator<i64> for WideDraws {
        fn generate(&self, source: &mut dyn RandomSource, _lexicon: &dyn Lexicon) -> Result<i64> {
            Ok(source.int_inclusive(i64::MIN, i64::MAX))
        }
    }

    #[test]
    fn test_adjacent_seed_batches_do_not_overlap() {
        let first =
            generate_batch(&WideDraws, &BuiltinLexicon, 200, Some(9), &parallel(2)).unwrap();
        let second =
            generate_batch(&WideDraws, &BuiltinLexicon, 200, Some(10), &parallel(2)).unwrap();

        assert_ne!(first[100..], second[..100]);
        let seen: std::collections::HashSet<i64> = first.iter().copied().collect();
        assert!(second.iter().all(|value| !seen.contains(value)));
    }

    #[test]
    fn test_sequential_config() {
        let generator = ConstantGenerator::new(7i64);
        let values = generate_batch(
            &generator,
            &BuiltinLexicon,
            10,
            None,
            &ParallelConfig::sequential(),
        )
        .unwrap();
        assert_eq!(values, vec![7; 10]);
    }

    #[test]
    fn test_batch_with_trait_object_generator() {
        let generator: Box<dyn Generator<&str> + Send + Sync> =
            Box::new(OneOfGenerator::new(vec!["-", ":"]).unwrap());
        let values = generate_batch(
            generator.as_ref(),
            &BuiltinLexicon,
            50,
            Some(4),
            &parallel(2),
        )
        .unwrap();
        assert!(values.iter().all(|v| *v == "-" || *v == ":"));
    }

    #[test]
    fn test_batch_propagates_errors() {
        let err = generate_batch(&Failing, &BuiltinLexicon, 20, None, &parallel(2)).unwrap_err();
        assert!(matches!(err, FauxError::EmptyPool { .. }));

        let err = generate_batch(&Failing, &BuiltinLexicon, 2, None, &parallel(2)).unwrap_err();
        assert!(matches!(err, FauxError::EmptyPool { .. }));
    }

    #[test]
    fn test_batch_reports_panicking_worker() {
        let err = generate_batch(&Panicking, &BuiltinLexicon, 20, None, &parallel(2)).unwrap_err();
        assert!(matches!(err, FauxError::WorkerPanicked { worker: 0 }));
    }

    #[test]
    fn test_batch_rejects_invalid_config() {
        let config = ParallelConfig {
            num_threads: 0,
            ..ParallelConfig::default()
        };
        let err = generate_batch(&CountingDigits, &BuiltinLexicon, 5, None, &config).unwrap_err();
        assert!(matches!(err, FauxError::Config(_)));
    }
}
