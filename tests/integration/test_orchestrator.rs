//! Threaded runs through the orchestrator

#[path = "../test_utils/mod.rs"]
mod test_utils;

use blockclock::{Config, Orchestrator, SharedBuffer};
use std::time::Duration;
use test_utils::tokenize;

fn fast_config() -> Config {
    let mut config = Config::default();
    config.blocks.interval_ms = 5;
    config.clock.interval_ms = 20;
    config.random.seed = Some(99);
    config
}

#[test]
fn test_threaded_run_emits_well_formed_output() {
    let config = fast_config();
    let size = config.terminal;
    let buffer = SharedBuffer::new();
    let orchestrator = Orchestrator::new(config, buffer.clone());

    let running = orchestrator.launch().unwrap();
    running.cancel_after(Duration::from_millis(120)).unwrap();
    let ticks = running.join().unwrap();
    orchestrator.restore_terminal();

    let stream = buffer.to_string_lossy();
    assert!(stream.starts_with("\x1b[2J\x1b[1;1H"));
    assert!(stream.ends_with("\x1b[0m\x1b[?25h\x1b[24;1H\r\n"));

    let tokens = tokenize(&stream).expect("stream contains a partial write");
    let glyphs = tokens.iter().filter(|t| t.as_str() == "■").count() as u64;
    let clocks = tokens.iter().filter(|t| t.contains(':')).count() as u64;
    assert!(glyphs >= 4);
    assert!(clocks >= 1);
    assert_eq!(glyphs + clocks, ticks);

    for token in tokens.iter().filter(|t| t.ends_with('H')) {
        let inner = &token[2..token.len() - 1];
        let (row, col) = inner.split_once(';').unwrap();
        let (row, col): (u32, u32) = (row.parse().unwrap(), col.parse().unwrap());
        assert!(size.contains(row, col), "cursor moved off screen: {:?}", token);
    }
}

#[test]
fn test_shutdown_stops_all_tasks() {
    let orchestrator = Orchestrator::new(fast_config(), SharedBuffer::new());
    let running = orchestrator.launch().unwrap();
    let token = running.token();

    assert_eq!(running.len(), 5);
    running.shutdown().unwrap();
    assert!(token.is_cancelled());
}
