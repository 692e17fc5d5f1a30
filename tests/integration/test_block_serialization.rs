//! Block channel serialization under contention
//!
//! Many block renderers hammer the shared block channel at once; every
//! draw must still appear in the output as one unbroken record.

#[path = "../test_utils/mod.rs"]
mod test_utils;

use blockclock::{BlockRenderer, Color, PositionSource, SharedBuffer, TerminalSink, TerminalSize};
use std::sync::{Arc, Barrier};
use std::thread;
use test_utils::{parse_block_stream, BlockRecord};

const WRITERS: usize = 16;
const DRAWS_PER_WRITER: usize = 250;

#[test]
fn test_contending_writers_never_interleave() {
    let buffer = SharedBuffer::new();
    let size = TerminalSize::new(24, 80);
    let sink = Arc::new(TerminalSink::new(buffer.clone(), size));
    let barrier = Arc::new(Barrier::new(WRITERS));

    let handles: Vec<_> = (0..WRITERS)
        .map(|i| {
            let color = Color::ALL[i % Color::ALL.len()];
            let mut renderer =
                BlockRenderer::new(sink.clone(), color, PositionSource::seeded(i as u64));
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                for _ in 0..DRAWS_PER_WRITER {
                    renderer.draw();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let stream = buffer.to_string_lossy();
    let records = parse_block_stream(&stream).expect("block records were interleaved");
    assert_eq!(records.len(), WRITERS * DRAWS_PER_WRITER);
    assert!(records.iter().all(|r| size.contains(r.row, r.col)));

    for color in Color::ALL {
        let count = records.iter().filter(|r| r.color == color).count();
        assert_eq!(count, WRITERS / Color::ALL.len() * DRAWS_PER_WRITER);
    }
}

#[test]
fn test_per_writer_order_is_preserved() {
    let buffer = SharedBuffer::new();
    let size = TerminalSize::new(10, 10);
    let sink = Arc::new(TerminalSink::new(buffer.clone(), size));

    // One writer per color so records can be attributed to their source
    let handles: Vec<_> = Color::ALL
        .iter()
        .enumerate()
        .map(|(i, &color)| {
            let mut renderer =
                BlockRenderer::new(sink.clone(), color, PositionSource::seeded(100 + i as u64));
            thread::spawn(move || {
                for _ in 0..100 {
                    renderer.draw();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let records = parse_block_stream(&buffer.to_string_lossy()).unwrap();
    for (i, &color) in Color::ALL.iter().enumerate() {
        let mut expected = PositionSource::seeded(100 + i as u64);
        let cells: Vec<(u32, u32)> = records
            .iter()
            .filter(|r| r.color == color)
            .map(|r| (r.row, r.col))
            .collect();
        let expected_cells: Vec<(u32, u32)> = (0..100).map(|_| expected.next_cell(size)).collect();
        assert_eq!(cells, expected_cells);
    }
}

#[test]
fn test_checker_detects_interleaving() {
    let a = BlockRecord {
        row: 1,
        col: 2,
        color: Color::Red,
    }
    .render();
    let b = BlockRecord {
        row: 3,
        col: 4,
        color: Color::Blue,
    }
    .render();

    let whole = format!("{}{}", a, b);
    assert_eq!(parse_block_stream(&whole).unwrap().len(), 2);

    let split = a.len() - "■\x1b[0m".len();
    let mixed = format!("{}{}{}", &a[..split], b, &a[split..]);
    assert!(parse_block_stream(&mixed).is_none());
}
