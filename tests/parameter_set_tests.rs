mod common;

use sovran_kwargs::conditions::{InRange, NonNegative};
use sovran_kwargs::{kwargs, Keyword, ParamError, Parameter, ParameterSet, ValueKeeper};
use std::sync::Arc;
use std::thread;

static WORKERS: Keyword<usize> = Keyword::new("workers", 4);
static RATIO: Keyword<f64> = Keyword::new("ratio", 0.5);
static NAMES: Keyword<Vec<String>> = Keyword::new("names", Vec::new());

#[test]
fn test_basic_operations() -> Result<(), ParamError> {
    let mut params = ParameterSet::new();

    // Test empty state
    assert!(params.is_empty());
    assert_eq!(params.len(), 0);
    assert_eq!(params.get(&WORKERS), 4);

    // Test insertion and retrieval
    params.add(WORKERS.bind(8));
    assert_eq!(params.try_get(&WORKERS)?, 8);

    // Test contains
    assert!(params.contains("workers"));
    assert!(!params.contains("ratio"));
    assert!(params.parameter("ratio").is_none());

    params.check()?;
    Ok(())
}

#[test]
fn test_one_duplicate_per_repeated_add() {
    let mut params = ParameterSet::new();
    params.add(WORKERS.bind(1));
    params.add(RATIO.bind(0.1));
    params.add(WORKERS.bind(2));
    params.add(RATIO.bind(0.2));
    params.add(WORKERS.bind(3));

    assert_eq!(params.get(&WORKERS), 3);
    assert_eq!(params.get(&RATIO), 0.2);
    assert_eq!(params.duplicates(), ["workers", "ratio", "workers"]);

    let error = params.check().unwrap_err();
    assert!(error.is_duplicate());
    assert_eq!(
        error,
        ParamError::Multiple {
            keywords: vec!["workers".into(), "ratio".into(), "workers".into()],
        }
    );
}

#[test]
fn test_merge_is_left_biased_union() {
    let mut left = kwargs([WORKERS.bind(1), RATIO.bind(0.9)]);
    let right = kwargs([
        WORKERS.bind(100),
        NAMES.bind(vec!["right".to_string()]),
    ]);

    left.merge(&right);

    assert_eq!(left.get(&WORKERS), 1);
    assert_eq!(left.get(&RATIO), 0.9);
    assert_eq!(left.get(&NAMES), vec!["right".to_string()]);
    assert_eq!(right.len(), 2);
}

#[test]
fn test_copies_do_not_share_values() {
    let mut keeper = ValueKeeper::new(vec![1u8, 2, 3]);
    let copy = keeper.clone();

    if let Some(values) = keeper.value_mut::<Vec<u8>>() {
        values.clear();
    }

    assert_eq!(keeper.get_value::<Vec<u8>>(), Some(vec![]));
    assert_eq!(copy.get_value::<Vec<u8>>(), Some(vec![1, 2, 3]));
}

#[test]
fn test_exact_type_recovery_for_many_types() {
    let keeper = ValueKeeper::new((1u8, 'c', "s"));
    assert_eq!(keeper.get_value::<(u8, char, &str)>(), Some((1, 'c', "s")));
    assert_eq!(keeper.get_value::<(u16, char, &str)>(), None);

    let keeper = ValueKeeper::new(Some(3i64));
    assert_eq!(keeper.get_value::<Option<i64>>(), Some(Some(3)));
    assert_eq!(keeper.get_value::<i64>(), None);

    let keeper = ValueKeeper::new(Arc::new(5u32));
    assert!(keeper.is_type_correct::<Arc<u32>>());
    assert!(!keeper.is_type_correct::<u32>());
}

#[test]
fn test_concurrent_reads_of_built_set() {
    let params = Arc::new(kwargs([
        WORKERS.bind(16),
        NAMES.bind(vec!["a".to_string(), "b".to_string()]),
    ]));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let params = Arc::clone(&params);
            thread::spawn(move || params.get(&WORKERS) + params[&NAMES].len())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 18);
    }
}

#[test]
fn test_conditions_in_a_set() {
    let params = kwargs([
        WORKERS.bind(2).require::<usize, _>(NonNegative),
        RATIO.bind(1.5).require(InRange::new(0.0, 1.0)),
    ]);

    assert_eq!(params.get(&WORKERS), 2);
    // the out-of-range ratio was invalidated, so the default is used
    assert_eq!(params.get(&RATIO), 0.5);
    assert_eq!(params[&RATIO], 0.5);

    let ratio = params.require("ratio").unwrap();
    assert!(!ratio.is_valid());
    assert!(ratio.satisfies(&|r: &f64| *r > 1.0));
    assert!(ratio.get::<f64>().unwrap_err().is_invalid());
}

#[test]
fn test_extend_and_collect() {
    let mut params: ParameterSet = vec![WORKERS.bind(1)].into_iter().collect();
    params.extend([RATIO.bind(0.3), WORKERS.bind(2)]);

    assert_eq!(params.get(&WORKERS), 2);
    assert_eq!(params.duplicates(), ["workers"]);

    let rendered: Vec<String> = (&params).into_iter().map(|p| p.to_string()).collect();
    assert_eq!(rendered, ["ratio=0.3", "workers=2"]);
}

#[test]
fn test_resolve_and_with_default() -> Result<(), ParamError> {
    let params = kwargs([Parameter::unset("workers")]);

    assert!(params.require("workers")?.get::<usize>().unwrap_err().is_missing());
    assert_eq!(params.resolve(&WORKERS).get::<usize>()?, 4);
    // unset entries count as bound for the fallible lookup
    assert!(params.try_get(&WORKERS).unwrap_err().is_missing());
    assert_eq!(params.get(&WORKERS), 4);
    Ok(())
}
