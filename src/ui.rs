//! Styled console output for task progress

use console::Style;

/// Print an in-progress status line for the current task step.
pub fn step(message: &str) {
    println!("{}", Style::new().cyan().apply_to(message));
}

/// Print a success line with a green check mark.
pub fn success(message: &str) {
    println!("{} {}", Style::new().green().apply_to("✓"), message);
}
