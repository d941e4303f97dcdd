#![no_main]

use std::io::Read;

use copysource::CopySource;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (Vec<u8>, u8)| {
    let (data, buf_size) = input;
    let buf_size = buf_size as usize + 1;

    let mut source = CopySource::new(&data);
    let mut out = Vec::new();
    let mut buf = vec![0u8; buf_size];

    loop {
        let n = Read::read(&mut source, &mut buf).unwrap();
        if n == 0 {
            break;
        }
        out.extend_from_slice(&buf[..n]);
    }

    // The std::io::Read loop must reproduce the source exactly.
    assert_eq!(out, data);
    assert!(source.is_exhausted());
});
