//! Async draining of a source via the runtime-agnostic AsyncRead impl.
//!
//! Run with:
//!     cargo run --example async_read --features async-io

use copysource::CopySource;
use futures_util::io::AsyncReadExt;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let data: Vec<u8> = (0..10_000).map(|i| (i % 256) as u8).collect();

    let mut source = CopySource::new(&data);
    let mut out = Vec::new();
    let n = source.read_to_end(&mut out).await?;

    println!("drained {} bytes asynchronously", n);
    assert_eq!(out, data);
    assert!(source.is_exhausted());

    Ok(())
}
