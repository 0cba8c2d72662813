//! Basic message output functions.
//!
//! Errors and warnings go to stderr so they never mix with record output
//! that may be piped (for example `eats list --json`).

use super::colors::*;

/// Print an error message.
pub fn print_error(msg: &str) {
    eprintln!("{RED}{BOLD}Error:{RESET} {}", msg);
}

/// Print a warning message.
pub fn print_warning(msg: &str) {
    eprintln!("{YELLOW}Warning:{RESET} {}", msg);
}

/// Print an info message.
pub fn print_info(msg: &str) {
    println!("{CYAN}Info:{RESET} {}", msg);
}

/// Print a success message.
pub fn print_success(msg: &str) {
    println!("{GREEN}{}{RESET}", msg);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_smoke() {
        print_error("could not open kitchen_orders.txt");
        print_warning("skipped line 3");
        print_info("watching kitchen_orders.txt");
        print_success("Order 4 added");
    }
}
