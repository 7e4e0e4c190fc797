//! A record whose fields are all excluded still gets a constructor.

use memberwise_init::MemberwiseInit;

#[derive(MemberwiseInit)]
struct Settled {
    #[memberwise(frozen, default = 42u32)]
    limit: u32,
    #[memberwise(frozen, default = None)]
    note: Option<String>,
}

fn main() {
    let settled = Settled::new();
    assert_eq!(settled.limit, 42);
    assert!(settled.note.is_none());
}
