//! checkgate main entrypoint.

use checkgate::run;
use checkgate::ui::messages::{blocked, error};

fn main() {
    if let Err(e) = run() {
        if e.is_rejection() {
            blocked(&e);
        } else {
            error(format!("Error: {}", e));
        }
        std::process::exit(1);
    }
}
