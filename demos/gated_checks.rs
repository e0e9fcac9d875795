//! Gated checks example - branching a chain with and/or combinators
//!
//! `and_if*` runs only when the previous gated check passed, `or_if*` only
//! when it failed. A chain can express "check A; if A held, also check B;
//! otherwise check C" without a single `if` block.

use guardrail::Check;

fn describe(port: i64) {
    let check = Check::new(port)
        .if_msg(|p| *p <= 0, "port must be positive")
        .and_if_msg(|p| *p < 1024, "privileged ports need root")
        .or_if_msg(|p| *p == 0, "port 0 asks the OS to pick, which is not supported")
        .if_msg(|p| *p > 65535, "port is out of range");

    match check.render() {
        Some(report) => println!("{port:>6}: {report}"),
        None => println!("{port:>6}: ok"),
    }
}

fn main() {
    for port in [8080, 0, -1, 70000, 443] {
        describe(port);
    }
}
