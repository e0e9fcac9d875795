//! Report formats example - plain, first-error and verbose output
//!
//! The same failed chain rendered every way the reporter supports.

use guardrail::prelude::*;
use guardrail::check;

fn main() {
    let api_key = "this key is far far too long to be a real api key";
    let check = check!(api_key)
        .if_length_greater_than(32)
        .if_contains_msg(" ", "keys cannot contain spaces");

    println!("all errors:   {}", check.render().unwrap_or_default());
    println!("first error:  {}", check.render_first().unwrap_or_default());

    let verbose = ReportOptions::new().verbose(true);
    println!("verbose:      {}", check.render_with(&verbose).unwrap_or_default());

    let custom = ReportOptions::new().start_text("Rejected because ");
    println!("custom text:  {}", check.render_with(&custom).unwrap_or_default());

    // Terminal methods return structured errors for callers that want them.
    if let Err(err) = check.to_result_with(&verbose) {
        println!("as an error:  {err}");
        println!("label:        {:?}", err.label());
    }
}
