//! habitsync main entrypoint.

use habitsync::run;
use habitsync::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(e.exit_code());
    }
}
