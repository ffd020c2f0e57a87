use rs2_pull::{empty, from, from_iter, once, repeat, Extractor, Stream, StreamError, StreamResult};
use std::cell::Cell;
use std::collections::{BTreeSet, VecDeque};
use std::rc::Rc;

// Test source that counts how often it is advanced
struct CountingSource {
    values: Vec<i32>,
    index: usize,
    current: Option<i32>,
    pulls: Rc<Cell<usize>>,
}

impl CountingSource {
    fn new(values: Vec<i32>) -> (Self, Rc<Cell<usize>>) {
        let pulls = Rc::new(Cell::new(0));
        let source = Self { values, index: 0, current: None, pulls: pulls.clone() };
        (source, pulls)
    }
}

impl Extractor for CountingSource {
    type Item = i32;

    fn advance(&mut self) -> bool {
        self.pulls.set(self.pulls.get() + 1);
        if self.index < self.values.len() {
            self.current = Some(self.values[self.index]);
            self.index += 1;
            true
        } else {
            self.current = None;
            false
        }
    }

    fn try_get(&mut self) -> StreamResult<&i32> {
        self.current.as_ref().ok_or(StreamError::Exhausted)
    }
}

#[test]
fn test_from_vec() {
    let data = vec![1, 2, 3];
    let result: Vec<i32> = from(&data).collect();
    assert_eq!(result, vec![1, 2, 3]);
}

#[test]
fn test_from_array_and_slice() {
    let data = [4, 5, 6, 7];
    let all: Vec<i32> = from(&data).collect();
    assert_eq!(all, vec![4, 5, 6, 7]);

    let tail: Vec<i32> = from(&data[2..]).collect();
    assert_eq!(tail, vec![6, 7]);
}

#[test]
fn test_from_other_containers() {
    let deque: VecDeque<i32> = vec![3, 1, 2].into_iter().collect();
    let result: Vec<i32> = from(&deque).collect();
    assert_eq!(result, vec![3, 1, 2]);

    let set: BTreeSet<i32> = vec![3, 1, 2].into_iter().collect();
    let result: Vec<i32> = from(&set).collect();
    assert_eq!(result, vec![1, 2, 3]);
}

#[test]
fn test_from_borrows_without_copying() {
    let words = vec![String::from("alpha"), String::from("beta")];
    let mut extractor = from(&words).into_inner();
    assert!(extractor.advance());
    let first: *const String = extractor.get();
    assert_eq!(first, &words[0] as *const String);
}

#[test]
fn test_from_empty_container() {
    let data: Vec<i32> = Vec::new();
    assert_eq!(from(&data).count(), 0);
    assert_eq!(from(&data).next(), None);
}

#[test]
fn test_from_iter_owned_items() {
    let result: Vec<String> = from_iter(vec!["a".to_string(), "b".to_string()])
        .map(|s| s.to_uppercase())
        .collect();
    assert_eq!(result, vec!["A", "B"]);
}

#[test]
fn test_from_iter_infinite() {
    let result: Vec<u64> = from_iter(0u64..).filter(|x| x % 5 == 0).take(4).collect();
    assert_eq!(result, vec![0, 5, 10, 15]);
}

#[test]
fn test_empty() {
    let mut stream = empty::<i32>();
    assert_eq!(stream.next(), None);
    assert_eq!(stream.count(), 0);
}

#[test]
fn test_once() {
    let mut stream = once(42);
    assert_eq!(stream.next(), Some(42));
    assert_eq!(stream.next(), None);
}

#[test]
fn test_repeat() {
    let result: Vec<i32> = repeat(42).take(5).collect();
    assert_eq!(result, vec![42, 42, 42, 42, 42]);
}

#[test]
fn test_repeat_bounded_by_take_while() {
    let mut counter = 0;
    let result: Vec<&str> = repeat("x")
        .take_while(|_| {
            counter += 1;
            counter <= 3
        })
        .collect();
    assert_eq!(result, vec!["x", "x", "x"]);
}

#[test]
fn test_skip_while() {
    let data = vec![1, 2, 5, 1, 2];
    let result: Vec<i32> = from(&data).skip_while(|x| *x < 3).collect();
    assert_eq!(result, vec![5, 1, 2]);
}

#[test]
fn test_skip_while_stops_consulting_predicate() {
    let data = vec![1, 5, 1, 1];
    let calls = Cell::new(0);
    let result: Vec<i32> = from(&data)
        .skip_while(|x| {
            calls.set(calls.get() + 1);
            *x < 3
        })
        .collect();
    assert_eq!(result, vec![5, 1, 1]);
    assert_eq!(calls.get(), 2);
}

#[test]
fn test_skip_while_everything() {
    let data = vec![1, 2, 3];
    let mut stream = from(&data).skip_while(|_| true);
    assert_eq!(stream.next(), None);
    assert_eq!(stream.next(), None);
}

#[test]
fn test_take_while() {
    let data = vec![5, 6, 1, 2, 9];
    let mut stream = from(&data).take_while(|x| *x > 3);
    let result: Vec<i32> = stream.collect();
    assert_eq!(result, vec![5, 6]);
    assert_eq!(stream.next(), None);
}

#[test]
fn test_take_while_pulls_once_per_advance() {
    let (source, pulls) = CountingSource::new(vec![5, 6, 1, 2, 9]);
    let mut extractor = Stream::new(source).take_while(|x| *x > 3).into_inner();

    assert!(extractor.advance());
    assert_eq!(pulls.get(), 1);
    assert!(extractor.advance());
    assert_eq!(pulls.get(), 2);

    // The rejected element is consumed
    assert!(!extractor.advance());
    assert_eq!(pulls.get(), 3);

    // Stopped for good, even though upstream would yield 2 and 9
    assert!(!extractor.advance());
    assert!(!extractor.advance());
    assert_eq!(pulls.get(), 3);
}

#[test]
fn test_take_while_leaves_rest_of_upstream() {
    let data = vec![2, 4, 7, 8, 10];
    let mut stream = from(&data);
    let taken: Vec<i32> = stream.by_ref().take_while(|x| x % 2 == 0).collect();
    assert_eq!(taken, vec![2, 4]);

    let mut source = stream.into_inner();
    assert_eq!(source.try_get().ok().copied(), Some(7));

    let rest: Vec<i32> = Stream::new(source).collect();
    assert_eq!(rest, vec![8, 10]);
}

// Deliberately not Clone
#[derive(Debug, PartialEq)]
struct Token(u32);

#[test]
fn test_from_clone_without_clone_elements() {
    let tokens = vec![Token(1), Token(2), Token(3)];
    let mut original = from(&tokens).into_inner();
    assert!(original.advance());

    let mut copy = original.clone();
    assert_eq!(original.get(), &Token(1));
    assert!(copy.advance());
    assert_eq!(copy.get(), &Token(2));
    assert!(original.advance());
    assert_eq!(original.get(), &Token(2));
}
