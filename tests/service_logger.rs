mod common;

use chrono::NaiveDateTime;
use common::{keys, parse_logfmt, value, ClosedPipe, SharedBuffer};
use service_logger::color::{Color, FgBgColor};
use service_logger::writer_sink::WriterSink;
use service_logger::{fields, EmitError, Level, ServiceLogger};
use std::sync::Arc;
use std::thread;

fn buffered(service: &str) -> (ServiceLogger, SharedBuffer) {
    let buffer = SharedBuffer::default();
    let sink = Arc::new(WriterSink::new(buffer.clone()));
    (ServiceLogger::with_sink(service, sink), buffer)
}

#[test]
fn with_then_info_msg_renders_fields_in_order() {
    let (logger, buffer) = buffered("svc");
    let line = line!() + 1;
    logger.with(fields!["component" => "x"]).info_msg("hello").unwrap();

    let lines = buffer.lines();
    assert_eq!(lines.len(), 1);
    let pairs = parse_logfmt(&lines[0]);
    assert_eq!(keys(&pairs), ["ts", "service", "component", "level", "caller", "msg"]);
    assert_eq!(value(&pairs, "service"), Some("svc"));
    assert_eq!(value(&pairs, "component"), Some("x"));
    assert_eq!(value(&pairs, "level"), Some("info"));
    assert_eq!(value(&pairs, "msg"), Some("hello"));
    assert_eq!(
        value(&pairs, "caller"),
        Some(format!("service_logger.rs:{}", line).as_str())
    );
}

#[test]
fn every_record_has_ts_service_level_and_caller() {
    let (logger, buffer) = buffered("svc");
    logger.debug(fields!["a" => 1]).unwrap();
    logger.info_msg("b").unwrap();
    logger.stage(fields!["c" => true]).unwrap();
    logger.warn_msg("d").unwrap();
    logger.err(fields!["e" => 2.5]).unwrap();
    logger.crit_msg("f").unwrap();

    let records: Vec<_> = buffer
        .lines()
        .into_iter()
        .filter(|l| !l.is_empty())
        .map(|l| parse_logfmt(&l))
        .collect();
    assert_eq!(records.len(), 6);

    for pairs in &records {
        for key in ["ts", "service", "level", "caller"] {
            let count = pairs.iter().filter(|(k, _)| k == key).count();
            assert_eq!(count, 1, "{key} in {pairs:?}");
        }
        let ts = value(pairs, "ts").unwrap();
        assert!(NaiveDateTime::parse_from_str(ts, "%d/%m/%Y %H:%M:%S").is_ok(), "{ts}");
        assert!(value(pairs, "caller").unwrap().starts_with("service_logger.rs:"));
    }

    let levels: Vec<&str> = records.iter().map(|p| value(p, "level").unwrap()).collect();
    assert_eq!(levels, ["debug", "info", "stage", "warn", "error", "crit"]);
}

#[test]
fn repeated_with_accumulates_in_order() {
    let (logger, buffer) = buffered("svc");
    let derived = logger
        .with(fields!["first" => 1])
        .with(fields!["second" => 2])
        .with(fields!["third" => 3]);
    derived.info(fields!["call" => "yes"]).unwrap();
    logger.info_msg("base untouched").unwrap();

    let lines = buffer.lines();
    let derived_pairs = parse_logfmt(&lines[0]);
    assert_eq!(
        keys(&derived_pairs),
        ["ts", "service", "first", "second", "third", "level", "caller", "call"]
    );
    let base_pairs = parse_logfmt(&lines[1]);
    assert_eq!(keys(&base_pairs), ["ts", "service", "level", "caller", "msg"]);
}

#[test]
fn with_prefix_goes_before_base_fields() {
    let (logger, buffer) = buffered("svc");
    logger
        .with_prefix(fields!["request" => "[f637463:demo]"])
        .debug(fields!["msg" => "prefixed"])
        .unwrap();

    let pairs = parse_logfmt(&buffer.lines()[0]);
    assert_eq!(keys(&pairs), ["request", "ts", "service", "level", "caller", "msg"]);
    assert_eq!(value(&pairs, "request"), Some("[f637463:demo]"));
}

#[test]
fn caller_supplied_level_and_caller_are_renamed() {
    let (logger, buffer) = buffered("svc");
    logger
        .info(fields!["level" => "oops", "caller" => "fake.rs:1"])
        .unwrap();

    let pairs = parse_logfmt(&buffer.lines()[0]);
    assert_eq!(
        keys(&pairs),
        ["ts", "service", "level", "caller", "fields.level", "fields.caller"]
    );
    assert_eq!(value(&pairs, "level"), Some("info"));
    assert!(value(&pairs, "caller").unwrap().starts_with("service_logger.rs:"));
    assert_eq!(value(&pairs, "fields.level"), Some("oops"));
    assert_eq!(value(&pairs, "fields.caller"), Some("fake.rs:1"));
}

#[test]
fn derived_level_field_cannot_override_level_or_color() {
    let buffer = SharedBuffer::default();
    let sink = Arc::new(WriterSink::new(buffer.clone()).with_colors());
    let logger = ServiceLogger::with_sink("svc", sink)
        .with(fields!["level" => "crit"])
        .with_prefix(fields!["caller" => "elsewhere.rs:9"]);
    logger.debug_msg("quiet").unwrap();

    let lines = buffer.lines();
    assert_eq!(lines.len(), 1, "debug must not add a crit blank line");
    let debug = FgBgColor::new(Color::DarkGray, Color::Default);
    assert!(lines[0].starts_with("\x1b[90m"), "{:?}", lines[0]);
    assert_eq!(debug.paint("x"), "\x1b[90mx\x1b[0m");

    let plain = lines[0]
        .trim_start_matches("\x1b[90m")
        .trim_end_matches("\x1b[0m");
    let pairs = parse_logfmt(plain);
    assert_eq!(
        keys(&pairs),
        ["fields.caller", "ts", "service", "fields.level", "level", "caller", "msg"]
    );
    for key in ["level", "caller"] {
        assert_eq!(pairs.iter().filter(|(k, _)| k == key).count(), 1, "{key}");
    }
    assert_eq!(value(&pairs, "level"), Some("debug"));
}

#[test]
fn crit_is_followed_by_one_blank_line() {
    let (logger, buffer) = buffered("svc");
    logger.crit(fields!["msg" => "meltdown"]).unwrap();
    logger.info_msg("next").unwrap();
    logger.crit_msg("again").unwrap();

    let lines = buffer.lines();
    assert_eq!(lines.len(), 5);
    assert!(lines[0].contains("level=crit"));
    assert_eq!(lines[1], "");
    assert!(lines[2].contains("level=info"));
    assert!(lines[3].contains("level=crit"));
    assert_eq!(lines[4], "");
    assert!(buffer.contents().ends_with("msg=again\n\n"));
}

#[test]
fn write_failure_is_returned_to_the_caller() {
    let logger = ServiceLogger::with_sink("svc", Arc::new(WriterSink::new(ClosedPipe)));

    assert!(matches!(logger.info_msg("lost"), Err(EmitError::Io(_))));
    assert!(matches!(logger.crit(fields!["msg" => "lost"]), Err(EmitError::Io(_))));
}

#[test]
fn colored_output_follows_level() {
    let buffer = SharedBuffer::default();
    let sink = Arc::new(WriterSink::new(buffer.clone()).with_colors());
    let logger = ServiceLogger::with_sink("svc", sink);
    logger.crit_msg("red alert").unwrap();
    logger.info_msg("fine").unwrap();

    let lines = buffer.lines();
    assert!(lines[0].starts_with("\x1b[37;41m"), "{:?}", lines[0]);
    assert!(lines[0].ends_with("msg=\"red alert\"\x1b[0m"), "{:?}", lines[0]);
    assert_eq!(lines[1], "");
    assert!(lines[2].starts_with("\x1b[32m"), "{:?}", lines[2]);
}

#[test]
fn custom_color_fn_is_used() {
    let buffer = SharedBuffer::default();
    let sink = WriterSink::new(buffer.clone())
        .with_color_fn(Arc::new(|_fields: &[service_logger::Field]| {
            FgBgColor::new(Color::Cyan, Color::Default)
        }));
    ServiceLogger::with_sink("svc", Arc::new(sink)).info_msg("teal").unwrap();

    assert!(buffer.contents().starts_with("\x1b[96m"));
}

#[test]
fn concurrent_loggers_never_interleave_lines() {
    let (logger, buffer) = buffered("svc");

    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let logger = logger.with(fields!["worker" => worker]);
            thread::spawn(move || {
                for i in 0..50 {
                    logger.info(fields!["i" => i, "msg" => "tick tock"]).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let lines = buffer.lines();
    assert_eq!(lines.len(), 200);
    for line in lines {
        let pairs = parse_logfmt(&line);
        assert_eq!(
            keys(&pairs),
            ["ts", "service", "worker", "level", "caller", "i", "msg"]
        );
    }
}

#[test]
fn generic_log_uses_given_level() {
    let (logger, buffer) = buffered("svc");
    for level in Level::ALL {
        logger.log(level, fields!["msg" => level.to_string()]).unwrap();
    }

    let levels: Vec<String> = buffer
        .lines()
        .iter()
        .filter(|l| !l.is_empty())
        .map(|l| value(&parse_logfmt(l), "level").unwrap().to_string())
        .collect();
    assert_eq!(levels, ["debug", "info", "stage", "warn", "error", "crit"]);
}

#[cfg(feature = "json")]
#[test]
fn json_output_keeps_record_order() {
    use service_logger::format::OutputFormat;

    let buffer = SharedBuffer::default();
    let sink = Arc::new(WriterSink::new(buffer.clone()).with_format(OutputFormat::Json));
    ServiceLogger::with_sink("svc", sink)
        .with(fields!["attempt" => 3])
        .warn_msg("retrying")
        .unwrap();

    let line = buffer.contents();
    let value: serde_json::Value = serde_json::from_str(line.trim_end()).unwrap();
    assert_eq!(value["service"], "svc");
    assert_eq!(value["attempt"], 3);
    assert_eq!(value["level"], "warn");
    assert_eq!(value["msg"], "retrying");

    let service_at = line.find("\"service\"").unwrap();
    let level_at = line.find("\"level\"").unwrap();
    let msg_at = line.find("\"msg\"").unwrap();
    assert!(line.starts_with("{\"ts\":"));
    assert!(service_at < level_at && level_at < msg_at);
}
