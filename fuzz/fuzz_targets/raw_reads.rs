#![no_main]

use copysource::{CopySource, NO_DATA};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (Vec<u8>, Vec<u8>)| {
    let (data, schedule) = input;
    let mut source = CopySource::new(&data);
    let mut collected = Vec::new();

    // Replay an arbitrary schedule of raw read sizes, including zero and
    // negative requests.
    for &step in &schedule {
        let size = step as isize - 64;
        let before = source.position();

        if size < 0 {
            assert_eq!(source.read_raw(None, size), NO_DATA);
            let mut buf = vec![0u8; 8];
            assert_eq!(source.read_raw(Some(&mut buf), size), NO_DATA);
            assert_eq!(source.position(), before);
            continue;
        }

        let mut buf = vec![0u8; size as usize];
        let n = source.read_raw(Some(&mut buf), size);

        if size == 0 {
            assert_eq!(n, 0);
            assert_eq!(source.position(), before);
        } else if n == NO_DATA {
            assert!(source.is_exhausted());
        } else {
            let n = n as usize;
            assert!(n >= 1 && n <= size as usize);
            assert_eq!(source.position(), before + n);
            collected.extend_from_slice(&buf[..n]);
        }

        assert!(source.position() <= data.len());
    }

    // Everything delivered so far must be the consumed prefix, in order.
    assert_eq!(collected, &data[..source.position()]);

    // Direct-mode bounds are unaffected by any of the above.
    let bounds = source.input_sequence();
    assert_eq!(bounds.end as usize - bounds.start as usize, data.len());
});
