// core/src/telemetry.rs
//! Prosess-lokale tellere for drift/overvåking av analyse-grenseflaten.

use once_cell::sync::Lazy;
use prometheus::{IntCounter, Opts, Registry};

pub struct Telemetry {
    pub registry: Registry,
    pub sessions_analyzed_total: IntCounter,
    pub empty_sessions_total: IntCounter,
    pub parse_errors_total: IntCounter,
}

impl Telemetry {
    fn new() -> Self {
        let registry = Registry::new();

        let sessions_analyzed_total = IntCounter::with_opts(Opts::new(
            "sessions_analyzed_total",
            "Fullforte analysekall",
        ))
        .unwrap();
        let empty_sessions_total = IntCounter::with_opts(Opts::new(
            "empty_sessions_total",
            "Analysekall uten samples",
        ))
        .unwrap();
        let parse_errors_total = IntCounter::with_opts(Opts::new(
            "parse_errors_total",
            "JSON-inndata som ikke lot seg parse",
        ))
        .unwrap();

        registry
            .register(Box::new(sessions_analyzed_total.clone()))
            .unwrap();
        registry
            .register(Box::new(empty_sessions_total.clone()))
            .unwrap();
        registry
            .register(Box::new(parse_errors_total.clone()))
            .unwrap();

        Self {
            registry,
            sessions_analyzed_total,
            empty_sessions_total,
            parse_errors_total,
        }
    }
}

pub static TELEMETRY: Lazy<Telemetry> = Lazy::new(Telemetry::new);
