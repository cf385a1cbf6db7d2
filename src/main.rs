use payreq::cli::run;

fn main() {
    env_logger::init();
    // Best effort; consoles without ANSI support simply stay uncolored
    let _ = enable_ansi_support::enable_ansi_support();

    if let Err(e) = run() {
        // Check if this is an internal error (unreadable or corrupt export, etc.)
        let error_str: String = e.to_string();
        if error_str.contains("Failed to") || error_str.contains("parse") ||
           error_str.contains("read") {
            eprintln!("Internal error: {}", e);
            // Show error chain if available
            let mut source = e.source();
            if source.is_some() {
                eprintln!("\nCaused by:");
                let mut indent = 1;
                while let Some(err) = source {
                    eprintln!("{:indent$}  {}", "", err);
                    source = err.source();
                    indent += 1;
                }
            }
            std::process::exit(2);
        } else {
            // User error
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
