use colored::*;
use console::Term;
use textwrap::wrap;

const MAX_WIDTH: usize = 70;

fn terminal_width() -> usize {
    let (_, cols) = Term::stdout().size();
    (cols as usize).clamp(20, MAX_WIDTH)
}

/// Print a section header framed by separator lines
pub fn print_header(title: &str) {
    let rule = "=".repeat(terminal_width());
    println!("{}", rule);
    println!("{}", title.bold());
    println!("{}", rule);
}

/// Print a sub-section title
pub fn print_section(title: &str) {
    let rule = "-".repeat(terminal_width());
    println!("\n{}\n{}\n{}", rule, title.bold().cyan(), rule);
}

/// Print text with proper wrapping
pub fn print_text(text: &str) {
    let width = terminal_width();
    for line in text.lines() {
        for wrapped_line in wrap(line, width.saturating_sub(4)) {
            println!("{}", wrapped_line);
        }
    }
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "ERROR:".red().bold(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "WARNING:".yellow().bold(), message);
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "SUCCESS:".green().bold(), message);
}

/// Print information
pub fn print_info(message: &str) {
    println!("{} {}", "INFO:".blue().bold(), message);
}

/// Print a formatted result
pub fn print_result(label: &str, value: &str) {
    println!("{}: {}", label.bold(), value);
}

/// Print lines delivered by notifiers, indented under the current step
pub fn print_deliveries(lines: &[String]) {
    for line in lines {
        println!("  {}", line);
    }
}
