mod name_scan_orchestrator;

pub use name_scan_orchestrator::NameScanOrchestrator;
