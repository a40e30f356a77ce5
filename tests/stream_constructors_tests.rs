use lazy_stream::prelude::*;
use std::collections::{HashMap, HashSet};

#[test]
fn test_from_slice_preserves_order() {
    let src = vec!["c", "a", "b"];
    assert_eq!(from_slice(&src).copied().to_vec(), vec!["c", "a", "b"]);
}

#[test]
fn test_from_slice_yields_references() {
    let src = vec![String::from("x"), String::from("y")];
    let lengths = from_slice(&src).map(|s| s.len()).to_vec();
    assert_eq!(lengths, vec![1, 1]);
    // Borrowed, nothing was moved out of src
    assert_eq!(src.len(), 2);
}

#[test]
fn test_from_map_covers_every_entry() {
    let src: HashMap<u32, char> = (0..20).map(|i| (i, char::from(b'a' + i as u8))).collect();
    let entries: HashSet<(u32, char)> = from_map(&src)
        .map(|kv| (*kv.key, *kv.value))
        .collect();
    let want: HashSet<(u32, char)> = src.iter().map(|(k, v)| (*k, *v)).collect();
    assert_eq!(entries, want);
}

#[test]
fn test_from_map_each_traversal_is_complete() {
    let src = HashMap::from([("foo", 1), ("bar", 2), ("baz", 3)]);
    let stream = from_map(&src);
    for _ in 0..3 {
        let mut keys: Vec<&str> = stream.map(|kv| *kv.key).to_vec();
        keys.sort_unstable();
        assert_eq!(keys, vec!["bar", "baz", "foo"]);
    }
}

#[test]
fn test_from_map_empty() {
    let src: HashMap<String, i32> = HashMap::new();
    assert_eq!(from_map(&src).count(), 0);
}

#[test]
fn test_from_map_owned_pairs() {
    let src = HashMap::from([(String::from("k"), vec![1])]);
    let owned: HashMap<String, Vec<i32>> = from_map(&src)
        .map(|kv| kv.to_owned_pair())
        .to_map();
    assert_eq!(owned, src);
}

#[test]
fn test_from_iter_range() {
    let evens = from_iter(0..10).filter(|x| x % 2 == 0);
    assert_eq!(evens.to_vec(), vec![0, 2, 4, 6, 8]);
    assert_eq!(evens.count(), 5);
}

#[test]
fn test_from_fn_with_closure_cursor() {
    let countdown = from_fn(|| {
        let mut n = 3;
        from_cursor_fn(move || {
            if n == 0 {
                return None;
            }
            n -= 1;
            Some(n)
        })
    });
    assert_eq!(countdown.to_vec(), vec![2, 1, 0]);
    assert_eq!(countdown.map(|x| x * 2).to_vec(), vec![4, 2, 0]);
}

#[test]
fn test_once() {
    let stream = once(7);
    assert_eq!(stream.to_vec(), vec![7]);
    assert_eq!(stream.first(), Some(7));
    assert_eq!(stream.map(|x| x + 1).last(), Some(8));
}

#[test]
fn test_empty() {
    let stream = empty::<String>();
    assert_eq!(stream.first(), None);
    assert_eq!(stream.count(), 0);
}
