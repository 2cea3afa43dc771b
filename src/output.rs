//! Colored user-facing messages.

use owo_colors::{
    OwoColorize,
    Stream::{Stderr, Stdout},
};

/// Print an informational line to stdout in blue.
pub fn info(msg: &str) {
    println!("{}", msg.if_supports_color(Stdout, |t| t.blue()));
}

/// Print an error line to stderr in red.
pub fn error(msg: &str) {
    eprintln!("{}", msg.if_supports_color(Stderr, |t| t.red()));
}

/// Print the closing lines after a successful run.
pub fn farewell(app_name: &str, homepage: &str) {
    info("\nHappy coding!");
    println!(
        "\n ~ and if you like {}, give it a star {}\n",
        app_name.if_supports_color(Stdout, |t| t.blue()),
        homepage
    );
}
