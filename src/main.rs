// src/main.rs
//
// Thin demo CLI over the two library entry points. All real consumers talk
// to the library; this binary just serializes results as JSON.

use std::env;
use std::process;

use hatsuon::{convert_detailed, score, score_with_threshold};

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  hatsuon convert <text>");
    eprintln!("  hatsuon score <reference> <recognized> [threshold]");
}

fn run() -> Result<(), String> {
    let args: Vec<String> = env::args().skip(1).collect();

    match args.split_first() {
        Some((cmd, rest)) if cmd == "convert" => {
            if rest.is_empty() {
                return Err("convert needs text to convert".to_string());
            }
            let text = rest.join(" ");
            let result = convert_detailed(&text);
            let json = serde_json::to_string_pretty(&result)
                .map_err(|e| format!("Failed to serialize result: {}", e))?;
            println!("{}", json);
            Ok(())
        }
        Some((cmd, rest)) if cmd == "score" => {
            let (reference, recognized) = match rest {
                [r, h, ..] => (r.as_str(), h.as_str()),
                _ => return Err("score needs <reference> and <recognized>".to_string()),
            };
            let result = match rest.get(2) {
                Some(raw) => {
                    let threshold: f64 = raw
                        .parse()
                        .map_err(|e| format!("Invalid threshold '{}': {}", raw, e))?;
                    score_with_threshold(reference, recognized, threshold)
                }
                None => score(reference, recognized),
            };
            let json = serde_json::to_string_pretty(&result)
                .map_err(|e| format!("Failed to serialize result: {}", e))?;
            println!("{}", json);
            println!("{}", result.level.message());
            Ok(())
        }
        _ => {
            print_usage();
            Err("Unknown or missing command".to_string())
        }
    }
}

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
