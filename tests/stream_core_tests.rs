use lazy_stream::prelude::*;
use std::cell::Cell;
use std::collections::HashMap;

#[test]
fn test_reduce_over_filter_and_map() {
    let src = [1, 2, 3, 4, 5];
    let got = from_slice(&src)
        .copied()
        .filter(|x| *x < 3)
        .map(|x| x * x)
        .reduce(0, |acc, x| acc + x);
    assert_eq!(got, 5);
}

#[test]
fn test_filter_after_map_to_vec() {
    let src = [1, 2, 3, 4, 5];
    let got = from_slice(&src)
        .map(|x| x * x)
        .filter(|x| *x > 5)
        .to_vec();
    assert_eq!(got, vec![9, 16, 25]);
}

#[test]
fn test_stream_to_map() {
    let src = [1, 2, 3, 4, 5];
    let got = from_slice(&src)
        .copied()
        .filter(|x| *x < 3)
        .map(|x| KeyValue::new(x.to_string(), x))
        .to_map();
    let want = HashMap::from([("1".to_string(), 1), ("2".to_string(), 2)]);
    assert_eq!(got, want);
}

#[test]
fn test_from_map_to_map() {
    let src = HashMap::from([("foo", 1), ("bar", 2)]);
    let got = from_map(&src)
        .map(|kv| KeyValue::new(*kv.value, kv.key.to_string()))
        .to_map();
    let want = HashMap::from([(1, "foo".to_string()), (2, "bar".to_string())]);
    assert_eq!(got, want);
}

#[test]
fn test_map_is_lazy() {
    let calls = Cell::new(0);
    let src = [1, 2, 3];
    let stream = from_slice(&src).map(|x| {
        calls.set(calls.get() + 1);
        x + 1
    });
    assert_eq!(calls.get(), 0);

    let mut cursor = stream.cursor();
    assert_eq!(calls.get(), 0);
    assert_eq!(cursor.advance(), Some(2));
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_map_runs_once_per_produced_element() {
    let calls = Cell::new(0);
    let src = [1, 2, 3, 4];
    let stream = from_slice(&src).map(|x| {
        calls.set(calls.get() + 1);
        *x
    });
    assert_eq!(stream.to_vec(), vec![1, 2, 3, 4]);
    assert_eq!(calls.get(), 4);
}

#[test]
fn test_independent_traversals() {
    let src = [1, 2, 3];
    let stream = from_slice(&src).map(|x| x * 10);
    let mut first = stream.cursor();
    let mut second = stream.cursor();

    while first.advance().is_some() {}
    assert_eq!(first.advance(), None);

    let mut rest = Vec::new();
    while let Some(item) = second.advance() {
        rest.push(item);
    }
    assert_eq!(rest, vec![10, 20, 30]);
}

#[test]
fn test_stream_can_be_consumed_repeatedly() {
    let src = [4, 5, 6];
    let stream = from_slice(&src).copied().filter(|x| x % 2 == 0);
    assert_eq!(stream.to_vec(), vec![4, 6]);
    assert_eq!(stream.to_vec(), vec![4, 6]);
    assert_eq!(stream.reduce(0, |a, b| a + b), 10);
}

#[test]
fn test_empty_source() {
    let src: Vec<i32> = Vec::new();
    assert!(from_slice(&src).to_vec().is_empty());
    assert_eq!(from_slice(&src).reduce(42, |acc, x| acc + x), 42);
    assert!(empty::<i32>().to_vec().is_empty());
}

#[test]
fn test_duplicate_keys_last_write_wins() {
    let src = [("a", 1), ("b", 2), ("a", 3)];
    let got = from_slice(&src).map(|&(k, v)| KeyValue::new(k, v)).to_map();
    assert_eq!(got.len(), 2);
    assert_eq!(got["a"], 3);
    assert_eq!(got["b"], 2);
}

#[test]
fn test_take_and_skip() {
    let stream = from_iter(0..10);
    assert_eq!(stream.clone().skip(2).take(3).to_vec(), vec![2, 3, 4]);
    assert_eq!(stream.take(0).to_vec(), Vec::<i32>::new());
}

#[test]
fn test_filter_map() {
    let src = ["4", "four", "2"];
    let got = from_slice(&src)
        .filter_map(|s| s.parse::<u32>().ok())
        .to_vec();
    assert_eq!(got, vec![4, 2]);
}

#[test]
fn test_cursor_exhaustion_is_permanent_through_stages() {
    let src = [1, 2, 3];
    let stream = from_slice(&src).copied().filter(|x| *x > 1).map(|x| x - 1);
    let mut cursor = stream.cursor();
    assert_eq!(cursor.advance(), Some(1));
    assert_eq!(cursor.advance(), Some(2));
    for _ in 0..3 {
        assert_eq!(cursor.advance(), None);
    }
}
