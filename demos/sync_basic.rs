//! Basic example of both access modes on one source.
//!
//! Run with:
//!     cargo run --example sync_basic

use copysource::{CopySource, NO_DATA};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // An externally-owned container; the adapter only borrows it.
    let data: Vec<u8> = (0..100u8).collect();

    // Direct-mode: take the full bounds once and read in place.
    let source = CopySource::new(&data);
    let bounds = source.input_sequence();
    println!(
        "direct-mode: {} bytes at [{:p}, {:p})",
        bounds.end as usize - bounds.start as usize,
        bounds.start,
        bounds.end
    );
    println!("first byte via slice view: {:#04x}\n", source.as_slice()[0]);

    // Buffered-mode: pull in framework-chosen sizes until exhausted.
    let mut source = CopySource::new(&data);
    let mut buf = [0u8; 32];
    let mut call = 0;

    loop {
        let len = buf.len() as isize;
        let n = source.read_raw(Some(&mut buf), len);
        if n == NO_DATA {
            println!("call {}: exhausted", call);
            break;
        }
        println!(
            "call {}: {} bytes, cursor now at {}/{}",
            call,
            n,
            source.position(),
            source.len()
        );
        call += 1;
    }

    Ok(())
}
