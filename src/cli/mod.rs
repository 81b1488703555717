//! CLI surface: argument parsing, context, and operator output.

mod context;
mod flags;
mod parse;
pub mod prompts;
pub mod quiet;

pub use context::{Context, Done};
pub use flags::CliFlags;
pub use parse::{ParseError, parse};

/// Run CLI mode with the given arguments.
pub fn run(args: Vec<String>) {
    let mut ctx = match Context::new(args) {
        Ok(ctx) => ctx,
        Err(msg) => {
            prompts::error(&msg);
            eprintln!("Try 'passbatch --help' for usage.");
            std::process::exit(2);
        }
    };
    let _ = ctx.run();
}

pub fn print_help() {
    println!("passbatch {}", env!("CARGO_PKG_VERSION"));
    println!("Batch password generator with custom character pools");
    println!();
    println!("Usage: passbatch [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -l, --length <N>      Password length, 4-128 (default 12)");
    println!("  -n, --number <N>      Passwords per batch, 1-100 (default 10)");
    println!("      --no-upper        Drop A-Z from the pool");
    println!("      --no-lower        Drop a-z from the pool");
    println!("      --no-digits       Drop 0-9 from the pool");
    println!("      --no-symbols      Drop symbols from the pool");
    println!("      --include <CHARS> Extra characters to add to the pool");
    println!("      --exclude <CHARS> Characters to remove from the pool");
    println!("      --allow-similar   Keep look-alikes (Il1O0o) in the pool");
    println!("      --no-ambiguous    Also drop brackets, quotes and other");
    println!("                        hard-to-type symbols");
    println!("      --no-require-all  Do not require every enabled category");
    println!("                        to appear in each password");
    println!("  -o, --output [PATH]   Write the batch to a file");
    println!("                        (default passwords.txt)");
    println!("  -b, --board           Copy the batch to the clipboard");
    println!("  -s, --saved           Start from the saved settings");
    println!("      --save            Save the effective settings");
    println!("  -q, --quiet           Suppress warnings and confirmations");
    println!("  -h, --help            Show this help");
    println!("  -v, --version         Show version");
}
