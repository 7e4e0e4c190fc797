//! Generics and where-clauses carry over to the generated impl.

use memberwise_init::MemberwiseInit;

#[derive(MemberwiseInit)]
struct Tagged<T>
where
    T: Clone,
{
    value: T,
    label: Option<String>,
}

fn main() {
    let tagged = Tagged::new(5_i32, "five".to_owned());
    assert_eq!(tagged.value, 5);
    assert_eq!(tagged.label.as_deref(), Some("five"));
}
