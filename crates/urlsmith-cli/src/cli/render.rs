//! Plain-text rendering for components and probe outcomes.

use urlsmith_core::probe::ProbeOutcome;
use urlsmith_core::url_model::UrlComponents;

/// Prints the six (name, value) rows in fixed order.
pub fn print_components(components: &UrlComponents) {
    println!("{:<10} {}", "COMPONENT", "VALUE");
    for (component, value) in components.pairs() {
        println!("{:<10} {}", component.name(), value);
    }
}

/// Prints the status panel for a probe outcome. Failures render as a single
/// labeled line; they are data, not process errors.
pub fn print_outcome(outcome: &ProbeOutcome) {
    match outcome {
        ProbeOutcome::Response(report) => {
            println!("Status Code:    {}", report.status_code);
            println!("Status Text:    {}", report.status_text);
            println!("Content Type:   {}", report.content_type);
            println!(
                "Content Length: {} bytes",
                group_thousands(report.content_length)
            );
            println!(
                "Redirected:     {}",
                if report.redirected { "Yes" } else { "No" }
            );
            println!("Final URL:      {}", report.final_url);
        }
        ProbeOutcome::Failed(error) => {
            println!("{}: {}", error.kind.label(), error.message);
        }
    }
}

/// Formats `n` with comma separators ("1234567" -> "1,234,567").
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
