//! bikestats main entrypoint.

use bikestats::run;
use bikestats::ui::messages;

fn main() {
    println!();
    if let Err(e) = run() {
        messages::error(e);
        std::process::exit(1);
    }
}
