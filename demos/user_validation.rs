//! User validation example - guarding a signup form with check chains
//!
//! This example shows how a typical web-form guard reads: one chain per
//! field, every failure accumulated, one aggregated report at the end.

use guardrail::prelude::*;

// Raw input from a form
struct SignupForm {
    username: String,
    email: String,
    age: i32,
    roles: Vec<String>,
}

fn validate(form: &SignupForm) -> Vec<String> {
    let mut problems = Vec::new();

    let username = Check::new(form.username.as_str())
        .if_empty_or_whitespace()
        .if_length_greater_than(20)
        .if_contains_msg(" ", "usernames cannot contain spaces");
    if let Some(rendered) = username.render_with(&ReportOptions::new().start_text("username: ")) {
        problems.push(rendered);
    }

    let email = Check::new(form.email.as_str()).if_not_email();
    if let Some(rendered) = email.render_with(&ReportOptions::new().start_text("email: ")) {
        problems.push(rendered);
    }

    let age = Check::new(form.age)
        .if_negative()
        .if_less_than_msg(13, "you must be at least 13 to sign up")
        .if_greater_than(150);
    if let Some(rendered) = age.render_with(&ReportOptions::new().start_text("age: ")) {
        problems.push(rendered);
    }

    let roles = Check::new(form.roles.clone())
        .if_empty_msg("pick at least one role")
        .if_count_greater_than_msg(3, "pick at most three roles");
    if let Some(rendered) = roles.render_with(&ReportOptions::new().start_text("roles: ")) {
        problems.push(rendered);
    }

    problems
}

fn main() {
    let good = SignupForm {
        username: String::from("ada"),
        email: String::from("ada@example.com"),
        age: 36,
        roles: vec![String::from("admin")],
    };
    println!("good form -> {} problems", validate(&good).len());

    let bad = SignupForm {
        username: String::from("augusta ada king countess of lovelace"),
        email: String::from("not-an-email"),
        age: 9,
        roles: Vec::new(),
    };

    println!("bad form:");
    for problem in validate(&bad) {
        println!("  {problem}");
    }
}
