//! Serialization of sequences and option enums (requires the `serde` feature).

use standout_sequence::{Dir, KeyPolicy, Sequence};

#[test]
fn sequences_serialize_like_vectors() {
    let seq = Sequence::new(vec![1, 2, 3]).filter(|x| *x != 2);
    assert_eq!(serde_json::to_string(&seq).unwrap(), "[1,3]");
    assert_eq!(
        serde_json::to_string(&seq).unwrap(),
        serde_json::to_string(&vec![1, 3]).unwrap()
    );

    let empty = Sequence::new(Vec::<String>::new());
    assert_eq!(serde_json::to_string(&empty).unwrap(), "[]");
}

#[test]
fn groups_serialize_in_first_occurrence_order() {
    let groups = Sequence::new(vec![1, 2, 3, 4, 5, 5]).group_by_with(
        |x| if x % 2 == 0 { "even" } else { "odd" },
        |x| format!("#{}", x),
    );
    assert_eq!(
        serde_json::to_string(&groups).unwrap(),
        r##"{"odd":["#1","#3","#5","#5"],"even":["#2","#4"]}"##
    );
}

#[test]
fn option_enums_round_trip_by_name() {
    assert_eq!(serde_json::to_string(&Dir::Desc).unwrap(), "\"desc\"");
    assert_eq!(serde_json::from_str::<Dir>("\"asc\"").unwrap(), Dir::Asc);
    assert_eq!(
        serde_json::to_string(&KeyPolicy::Unique).unwrap(),
        "\"unique\""
    );
    assert_eq!(
        serde_json::from_str::<KeyPolicy>("\"last_wins\"").unwrap(),
        KeyPolicy::LastWins
    );
    assert!(serde_json::from_str::<Dir>("\"sideways\"").is_err());
}
