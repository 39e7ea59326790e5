#[cfg(test)]
mod tests {
    use crate::elem::{Element, TrivialMedium, TrivialSmall};
    use crate::seq::{ContainerKind, Sequence};
    use crate::strategy::Strategy;
    use crate::workload::Workload;
    use rand::{SeedableRng, rngs::StdRng};
    use std::collections::{LinkedList, VecDeque};
    use std::time::Duration;

    fn grow_check<S: Sequence<TrivialSmall>>(workload: Workload, start_len: usize, size: usize) {
        let mut rng = StdRng::seed_from_u64(11);
        let mut container = Strategy::FilledRandom.prepare::<S, TrivialSmall, _>(start_len, &mut rng);
        let before = container.len();
        workload.execute::<S, TrivialSmall, _>(&mut container, size, &mut rng);
        let expected = match workload {
            Workload::LinearSearch => before,
            Workload::PushBack | Workload::RandomInsert => before + size,
        };
        assert_eq!(container.len(), expected, "{workload} changed length unexpectedly");
    }

    #[test]
    fn test_push_back_grows_by_size() {
        grow_check::<Vec<TrivialSmall>>(Workload::PushBack, 0, 500);
        grow_check::<VecDeque<TrivialSmall>>(Workload::PushBack, 10, 500);
        grow_check::<LinkedList<TrivialSmall>>(Workload::PushBack, 3, 500);
    }

    #[test]
    fn test_random_insert_grows_by_size() {
        grow_check::<Vec<TrivialSmall>>(Workload::RandomInsert, 0, 300);
        grow_check::<VecDeque<TrivialSmall>>(Workload::RandomInsert, 40, 300);
        grow_check::<LinkedList<TrivialSmall>>(Workload::RandomInsert, 40, 300);
    }

    #[test]
    fn test_linear_search_keeps_length() {
        grow_check::<Vec<TrivialSmall>>(Workload::LinearSearch, 64, 64);
        grow_check::<VecDeque<TrivialSmall>>(Workload::LinearSearch, 64, 64);
        grow_check::<LinkedList<TrivialSmall>>(Workload::LinearSearch, 64, 64);
    }

    #[test]
    fn test_linear_search_leaves_contents_untouched() {
        let mut rng = StdRng::seed_from_u64(12);
        let mut vec = Strategy::FilledRandom.prepare::<Vec<TrivialMedium>, TrivialMedium, _>(32, &mut rng);
        let snapshot = vec.clone();
        Workload::LinearSearch.execute::<Vec<TrivialMedium>, TrivialMedium, _>(&mut vec, 32, &mut rng);
        assert_eq!(vec, snapshot);
        assert!(!vec.contains_value(&TrivialMedium::absent()));
    }

    #[test]
    fn test_push_back_on_empty_container_smallest_size() {
        let mut rng = StdRng::seed_from_u64(13);
        let mut list = LinkedList::<TrivialSmall>::new();
        let elapsed = Workload::PushBack.execute::<LinkedList<TrivialSmall>, TrivialSmall, _>(&mut list, 1, &mut rng);
        assert!(elapsed >= Duration::ZERO);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_combination_catalog() {
        let push: Vec<_> = Workload::PushBack.combinations().iter().map(|c| c.label).collect();
        assert_eq!(
            push,
            vec!["std::list", "std::deque", "std::vector", "preallocated std::vector"]
        );
        let pre = Workload::PushBack.combinations()[3];
        assert_eq!(pre.kind, ContainerKind::Vector);
        assert_eq!(pre.strategy, Strategy::Preallocated);

        let search = Workload::LinearSearch.combinations();
        assert_eq!(search.len(), 3);
        assert!(search.iter().all(|c| c.strategy == Strategy::FilledRandom));
        assert!(search.iter().all(|c| c.strategy != Strategy::Preallocated));

        assert_eq!(Workload::RandomInsert.combinations().len(), 3);
    }

    #[test]
    fn test_workload_keys_round_trip() {
        for workload in Workload::ALL {
            assert_eq!(Workload::from_key(workload.key()), Some(workload));
        }
        assert_eq!(Workload::from_key("bogus-test"), None);
        assert_eq!(Workload::from_key("all"), None);
    }
}
