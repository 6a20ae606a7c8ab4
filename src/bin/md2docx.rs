//! Converts the project's information-flow Markdown notes into a Word
//! document. Paths are fixed; run it from the directory holding the notes.

use linch_md2docx::{convert_file, ConvertOptions};
use std::process::ExitCode;

const INPUT_PATH: &str = "flujo_informacion_el_buen_sabor.md";
const OUTPUT_PATH: &str = "flujo_informacion_el_buen_sabor.docx";

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match convert_file(INPUT_PATH, OUTPUT_PATH, &ConvertOptions::default()) {
        Ok(_) => {
            println!("✅ Word document created: {}", OUTPUT_PATH);
            ExitCode::SUCCESS
        }
        Err(e) if e.is_io() => {
            eprintln!("❌ Input error: {}", e);
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("❌ Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
