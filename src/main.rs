use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use id_name_scan::global_constants::LOG_TAG_MAIN;
use id_name_scan::{
    ImageUpload, NameScanOrchestrator, ScanResponse, ScanSettings, TesseractOcrService,
};

#[derive(Parser)]
#[command(name = "id-name-scan")]
#[command(about = "Reads the holder's name off a photographed ID card")]
#[command(version)]
struct Cli {
    /// Settings file to use instead of the per-user one
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Pretty-print each JSON response
    #[arg(long)]
    pretty: bool,

    /// Treat inputs as text already produced by OCR
    #[arg(long)]
    text: bool,

    /// ID card photos (or OCR text dumps with --text)
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();

    log::info!("{} Starting id-name-scan", LOG_TAG_MAIN);

    match run(Cli::parse()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(error) => {
            log::error!("{} {:#}", LOG_TAG_MAIN, error);
            eprintln!("error: {:#}", error);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<bool> {
    let settings = match &cli.settings {
        Some(settings_path) => ScanSettings::load_from_path(settings_path)?,
        None => ScanSettings::load().context("Failed to load settings")?,
    };

    let ocr_service = Arc::new(TesseractOcrService::build(&settings)?);
    let orchestrator = NameScanOrchestrator::from_settings(ocr_service, &settings);

    let mut every_input_accepted = true;

    for input_path in &cli.inputs {
        let response = if cli.text {
            scan_text_file(&orchestrator, input_path)
        } else {
            scan_image_file(&orchestrator, input_path)
        };

        every_input_accepted &= !response.is_failure();
        print_response(input_path, &response, cli.pretty)?;
    }

    Ok(every_input_accepted)
}

fn scan_image_file(orchestrator: &NameScanOrchestrator, input_path: &Path) -> ScanResponse {
    match ImageUpload::read_from_path(input_path) {
        Ok(upload) => orchestrator.scan_upload(&upload),
        Err(error) => ScanResponse::Error {
            error: format!("{:#}", error),
        },
    }
}

fn scan_text_file(orchestrator: &NameScanOrchestrator, input_path: &Path) -> ScanResponse {
    match std::fs::read_to_string(input_path) {
        Ok(ocr_text) => orchestrator.scan_text(&ocr_text),
        Err(error) => ScanResponse::Error {
            error: format!("Failed to read {}: {}", input_path.display(), error),
        },
    }
}

fn print_response(input_path: &Path, response: &ScanResponse, pretty: bool) -> Result<()> {
    let report = serde_json::json!({
        "file": input_path.display().to_string(),
        "result": response,
    });

    let rendered = if pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };

    println!("{}", rendered);
    Ok(())
}
