use ecommerce_gtag::config;
use ecommerce_gtag::events::envelope::EventEnvelope;
use ecommerce_gtag::events::rejections::explain_rejection;
use ecommerce_gtag::gtag::GtagHandle;
use ecommerce_gtag::tracker::EcommerceTracker;

use env_logger;
use serde_json;

/// Helper program to troubleshoot events: pass an envelope on stdin, get an
/// explanation of why it is rejected, or the payload your property would receive
pub fn main() {
    env_logger::init();

    let input = match std::io::read_to_string(std::io::stdin()) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("failed to read stdin: {}", e);
            std::process::exit(1);
        }
    };

    let explanations = explain_rejection(&input);
    if !explanations.is_empty() {
        println!("{}", explanations.join("\n"));
        std::process::exit(1);
    }

    let envelope: EventEnvelope = match serde_json::from_str(&input) {
        Ok(e) => e,
        Err(e) => {
            eprintln!("failed to re-parse envelope: {}", e);
            std::process::exit(1);
        }
    };

    let args: Vec<String> = std::env::args().collect();
    let settings = match config::get_settings(args.get(1)) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("failed to process settings file: {}", e);
            std::process::exit(1);
        }
    };

    /* Print instead of tracking: same selection and mapping as the library */
    let gtag = GtagHandle::with(|_command: &str, event: &str, payload: &serde_json::Value| {
        println!("{} {}", event, serde_json::to_string_pretty(payload).unwrap_or_default());
    });

    let tracker = EcommerceTracker::new(settings, gtag);
    tracker.send(envelope.action, &envelope.data);
}
