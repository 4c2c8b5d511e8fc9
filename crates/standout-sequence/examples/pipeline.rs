//! Three short pipelines over the same list of numbers.
//!
//! Run with: cargo run -p standout-sequence --example pipeline

use standout_sequence::{Dir, Sequence};

fn main() {
    let arr = vec![1, 2, 3, 4, 5, 5];

    // Plain filtering
    println!("{:?}", Sequence::new(arr.clone()).filter(|x| x % 2 == 0));
    // [2, 4]

    // Chained lazy operators
    println!(
        "{:?}",
        Sequence::new(arr.clone())
            .filter(|x| *x > 1)
            .distinct()
            .order(Dir::Desc)
            .select(|x| format!("#{}", x))
    );
    // ["#5", "#4", "#3", "#2"]

    // Grouping with key and value selectors
    let groups = Sequence::new(arr).group_by_with(
        |x| if x % 2 == 0 { "even" } else { "odd" },
        |x| format!("#{}", x),
    );
    println!("{:?}", groups);
    // {"odd": ["#1", "#3", "#5", "#5"], "even": ["#2", "#4"]}
}
