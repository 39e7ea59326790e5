#[cfg(test)]
mod tests {
    use crate::bench;
    use crate::elem::TrivialSmall;
    use crate::seq::Sequence;
    use crate::strategy::Strategy;
    use crate::sweep::SizeSweep;
    use crate::workload::Workload;
    use anyhow::Result;
    use rand::{SeedableRng, rngs::StdRng};
    use std::cell::Cell;
    use std::collections::{LinkedList, VecDeque};
    use std::time::Duration;

    thread_local! {
        static CONSTRUCTED: Cell<usize> = const { Cell::new(0) };
    }

    /// Counts how many instances the driver builds on this thread.
    struct CountingSeq(Vec<TrivialSmall>);

    impl Default for CountingSeq {
        fn default() -> Self {
            CONSTRUCTED.with(|count| count.set(count.get() + 1));
            Self(Vec::new())
        }
    }

    impl Sequence<TrivialSmall> for CountingSeq {
        fn len(&self) -> usize {
            self.0.len()
        }

        fn push_back(&mut self, value: TrivialSmall) {
            self.0.push(value);
        }

        fn insert_at(&mut self, index: usize, value: TrivialSmall) {
            self.0.insert(index, value);
        }

        fn contains_value(&self, value: &TrivialSmall) -> bool {
            self.0.contains(value)
        }
    }

    #[test]
    fn test_series_matches_sweep_length() -> Result<()> {
        let mut rng = StdRng::seed_from_u64(21);
        let sweep = SizeSweep::scaled(50, 6)?;
        for repeats in [1, 3] {
            let series = bench::run::<Vec<TrivialSmall>, TrivialSmall, _>(
                &sweep,
                Workload::PushBack,
                Strategy::Empty,
                repeats,
                &mut rng,
            )?;
            assert_eq!(series.len(), sweep.len());
        }
        Ok(())
    }

    #[test]
    fn test_every_combination_kind_runs() -> Result<()> {
        let mut rng = StdRng::seed_from_u64(22);
        let sweep = SizeSweep::new(vec![4, 8, 16])?;
        let list = bench::run::<LinkedList<TrivialSmall>, TrivialSmall, _>(
            &sweep,
            Workload::RandomInsert,
            Strategy::FilledRandom,
            2,
            &mut rng,
        )?;
        let deque = bench::run::<VecDeque<TrivialSmall>, TrivialSmall, _>(
            &sweep,
            Workload::LinearSearch,
            Strategy::FilledRandom,
            2,
            &mut rng,
        )?;
        let vec = bench::run::<Vec<TrivialSmall>, TrivialSmall, _>(
            &sweep,
            Workload::PushBack,
            Strategy::Preallocated,
            2,
            &mut rng,
        )?;
        assert_eq!(list.len(), 3);
        assert_eq!(deque.len(), 3);
        assert_eq!(vec.len(), 3);
        Ok(())
    }

    #[test]
    fn test_zero_repeats_is_rejected() -> Result<()> {
        let mut rng = StdRng::seed_from_u64(23);
        let sweep = SizeSweep::new(vec![1])?;
        let err =
            bench::run::<Vec<TrivialSmall>, TrivialSmall, _>(&sweep, Workload::PushBack, Strategy::Empty, 0, &mut rng)
                .expect_err("zero repeats must fail");
        assert!(err.to_string().contains("repeat count"));
        Ok(())
    }

    #[test]
    fn test_sweep_validation() {
        assert!(SizeSweep::new(vec![]).is_err());
        assert!(SizeSweep::new(vec![0, 1]).is_err());
        assert!(SizeSweep::new(vec![3, 3]).is_err());
        assert!(SizeSweep::new(vec![5, 2]).is_err());
        assert!(SizeSweep::scaled(0, 10).is_err());
        assert!(SizeSweep::scaled(10, 0).is_err());
        assert!(SizeSweep::scaled(usize::MAX, 2).is_err());
    }

    #[test]
    fn test_scaled_sweep_values() -> Result<()> {
        let sweep = SizeSweep::scaled(100_000, 10)?;
        assert_eq!(sweep.len(), 10);
        assert_eq!(sweep[0], 100_000);
        assert_eq!(sweep[9], 1_000_000);
        assert_eq!(sweep.as_values()[4], 500_000.0);
        Ok(())
    }

    #[test]
    fn test_every_trial_gets_a_fresh_container() -> Result<()> {
        let mut rng = StdRng::seed_from_u64(24);
        let sweep = SizeSweep::new(vec![1, 2, 3])?;
        CONSTRUCTED.with(|count| count.set(0));
        let series =
            bench::run::<CountingSeq, TrivialSmall, _>(&sweep, Workload::PushBack, Strategy::Empty, 4, &mut rng)?;
        assert_eq!(series.len(), 3);
        assert_eq!(CONSTRUCTED.with(Cell::get), 12);

        CONSTRUCTED.with(|count| count.set(0));
        bench::run::<CountingSeq, TrivialSmall, _>(
            &sweep,
            Workload::RandomInsert,
            Strategy::FilledRandom,
            2,
            &mut rng,
        )?;
        assert_eq!(CONSTRUCTED.with(Cell::get), 6);
        Ok(())
    }

    #[test]
    fn test_mean_divides_total_by_repeats() {
        assert_eq!(bench::mean_of(Duration::from_micros(700), 7), Duration::from_micros(100));
        assert_eq!(bench::mean_of(Duration::from_millis(3), 1), Duration::from_millis(3));
        assert_eq!(bench::mean_of(Duration::from_nanos(10), 4), Duration::from_nanos(2));
    }
}
