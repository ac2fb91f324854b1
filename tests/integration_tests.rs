use indexmap::{IndexMap, IndexSet};
use pprint::{
    classify, delimiters, pretty, render, to_string, to_string_with_delimiters, to_wide, to_writer,
    with_delimiters, wrap_array, Category, DelimiterConfig, DelimiterSet, IoSink, Sink,
};
use std::collections::{BTreeMap, BTreeSet, HashMap, LinkedList, VecDeque};

fn wide_text<T: pprint::Render + ?Sized>(value: &T) -> String {
    String::from_utf16(&to_wide(value).unwrap()).unwrap()
}

#[test]
fn test_empty_sequence() {
    let empty: Vec<i32> = vec![];
    assert_eq!(to_string(&empty).unwrap(), "[]");
    assert_eq!(wide_text(&empty), "[]");
}

#[test]
fn test_single_element_has_no_separator() {
    assert_eq!(to_string(&vec![5]).unwrap(), "[5]");
}

#[test]
fn test_ordered_sequence() {
    assert_eq!(to_string(&vec![1, 2, 3]).unwrap(), "[1, 2, 3]");
    let deque: VecDeque<_> = (1..=3).collect();
    assert_eq!(to_string(&deque).unwrap(), "[1, 2, 3]");
    let list: LinkedList<_> = (1..=3).collect();
    assert_eq!(to_string(&list).unwrap(), "[1, 2, 3]");
}

#[test]
fn test_set_uses_braces() {
    let set: BTreeSet<i32> = [3, 1, 2].into_iter().collect();
    assert_eq!(to_string(&set).unwrap(), "{1, 2, 3}");
    assert_eq!(wide_text(&set), "{1, 2, 3}");
}

#[test]
fn test_set_follows_container_order() {
    let set: IndexSet<i32> = [3, 1, 2].into_iter().collect();
    assert_eq!(to_string(&set).unwrap(), "{3, 1, 2}");
}

#[test]
fn test_pair() {
    assert_eq!(to_string(&(1, "a")).unwrap(), "(1, a)");
    assert_eq!(classify::<(i32, &str)>(), Category::PairLike);
}

#[test]
fn test_sequence_of_pairs() {
    let pairs = vec![(1, 2), (3, 4)];
    assert_eq!(to_string(&pairs).unwrap(), "[(1, 2), (3, 4)]");
}

#[test]
fn test_tuple_with_container_elements() {
    let set: BTreeSet<char> = ['b', 'a'].into_iter().collect();
    let value = (vec![1, 2], set, "end");
    assert_eq!(to_string(&value).unwrap(), "([1, 2], {a, b}, end)");
    assert_eq!(classify::<(Vec<i32>, BTreeSet<char>, &str)>(), Category::FixedArity(3));
}

#[test]
fn test_wrapped_raw_array() {
    let raw = [1, 2, 4, 8, 16];
    let view = unsafe { wrap_array(raw.as_ptr(), 5) };
    assert_eq!(to_string(&view).unwrap(), "[1, 2, 4, 8, 16]");
    assert_eq!(to_string(&view).unwrap(), to_string(&raw.to_vec()).unwrap());
    assert_eq!(to_string(&raw).unwrap(), "[1, 2, 4, 8, 16]");
}

#[test]
fn test_char_buffer_is_text() {
    let name = ['r', 'u', 's', 't', '\0', '\0'];
    assert_eq!(to_string(&name).unwrap(), "rust");
    assert_eq!(classify::<[char; 6]>(), Category::Scalar);
    assert_eq!(to_string(&(1, name)).unwrap(), "(1, rust)");
}

#[test]
fn test_maps_render_as_pairs() {
    let mut map = BTreeMap::new();
    map.insert(2, "b");
    map.insert(1, "a");
    assert_eq!(to_string(&map).unwrap(), "[(1, a), (2, b)]");

    let mut ordered = IndexMap::new();
    ordered.insert("z", vec![1]);
    ordered.insert("a", vec![]);
    assert_eq!(to_string(&ordered).unwrap(), "[(z, [1]), (a, [])]");

    let mut hashed = HashMap::new();
    hashed.insert("only", (1, 2));
    assert_eq!(to_string(&hashed).unwrap(), "[(only, (1, 2))]");
}

#[test]
fn test_deep_nesting() {
    let value = vec![vec![vec![vec![1]]], vec![]];
    assert_eq!(to_string(&value).unwrap(), "[[[[1]]], []]");
}

#[test]
fn test_override_then_default() {
    let values = vec![1, 2, 3];
    let custom = with_delimiters(&values, delimiters!("<", "|", ">"));
    assert_eq!(to_string(&custom).unwrap(), "<1|2|3>");
    assert_eq!(wide_text(&custom), "<1|2|3>");

    let equal = vec![1, 2, 3];
    assert_eq!(to_string(&equal).unwrap(), "[1, 2, 3]");
}

#[test]
fn test_override_shortcut() {
    let values: Vec<i32> = vec![1, 2];
    let text = to_string_with_delimiters(&values, DelimiterSet::new().with_separator("; "));
    assert_eq!(text.unwrap(), "[1; 2]");

    let set: BTreeSet<&str> = ["b", "a"].into_iter().collect();
    let text = to_string_with_delimiters(&set, delimiters!("<", "|", ">")).unwrap();
    assert_eq!(text, "<a|b>");

    let pair = (1, vec!['x']);
    let text = to_string_with_delimiters(&pair, delimiters!(_, " => ", _)).unwrap();
    assert_eq!(text, "1 => [x]");
    assert_eq!(to_string(&values).unwrap(), "[1, 2]");
}

#[test]
fn test_override_from_config() {
    let config: DelimiterConfig =
        serde_json::from_str(r#"{"prefix": "<<", "separator": " "}"#).unwrap();
    assert!(config.suffix.is_none());

    let set = DelimiterSet::from(config);
    let text = to_string(&with_delimiters(&[1, 2], set)).unwrap();
    assert_eq!(text, "<<1 2");
}

#[test]
fn test_idempotent_independent_sinks() {
    let mut map = BTreeMap::new();
    map.insert("k", vec![(1, 'x')]);

    let mut first = String::new();
    let mut second = String::new();
    render(&map, &mut first).unwrap();
    render(&map, &mut second).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.as_bytes(), to_string(&map).unwrap().as_bytes());
}

#[test]
fn test_streaming_writer_sink() {
    let mut sink = IoSink::new(Vec::new());
    sink.write_value(&vec![1, 2])
        .unwrap()
        .write_value(&" ")
        .unwrap()
        .write_value(&(3, 4))
        .unwrap();
    assert_eq!(sink.get_ref().as_slice(), b"[1, 2] (3, 4)");
    assert_eq!(sink.into_inner(), b"[1, 2] (3, 4)");

    let mut buffer = Vec::new();
    to_writer(&mut buffer, &vec!["a", "b"]).unwrap();
    assert_eq!(buffer, b"[a, b]");
}

#[test]
fn test_display_adapter() {
    let set: BTreeSet<_> = [2, 1].into_iter().collect();
    assert_eq!(format!("{}", pretty(&set)), "{1, 2}");
    assert_eq!(format!("{:?}", pretty(&(1, 2))), "(1, 2)");
}

#[test]
fn test_strings_are_not_exploded() {
    let words = vec!["hello".to_string(), "world".to_string()];
    assert_eq!(to_string(&words).unwrap(), "[hello, world]");
}
