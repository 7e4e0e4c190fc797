//! An empty record derives a no-argument constructor.

use memberwise_init::MemberwiseInit;

#[derive(MemberwiseInit)]
struct Empty {}

fn main() {
    let Empty {} = Empty::new();
}
