//! Demonstrates the generated constructors on a couple of record shapes.

use std::io::{self, Write};

use memberwise_init::MemberwiseInit;

#[derive(MemberwiseInit, Debug)]
struct Session {
    user: String,
    #[memberwise(frozen, default = 3u8)]
    retries: u8,
    token: Option<String>,
}

#[derive(MemberwiseInit, Debug)]
struct Audit {
    #[memberwise(frozen)]
    actor: Option<String>,
    entries: u32,
}

fn main() -> io::Result<()> {
    // `retries` is settled by its declared default and never appears in the
    // parameter list; `token` can be given as a value or omitted with None.
    let session = Session::new("ada".to_owned(), "tok-1".to_owned());
    let quiet = Session::new("bob".to_owned(), None);

    // A frozen optional without a declared value stays required.
    let audit = Audit::new(Some("ada".to_owned()), 2);

    let mut stdout = io::stdout().lock();
    writeln!(
        stdout,
        "user={} retries={} token={:?}",
        session.user, session.retries, session.token
    )?;
    writeln!(
        stdout,
        "user={} retries={} token={:?}",
        quiet.user, quiet.retries, quiet.token
    )?;
    writeln!(
        stdout,
        "audit by {:?} covering {} entries",
        audit.actor, audit.entries
    )?;
    Ok(())
}
