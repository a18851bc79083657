use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use flate2::{Compression, GzBuilder};

// create a temporary file to test our modules
#[allow(dead_code)]
pub fn create_file(name: &str, data: &[u8]) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(name);

    let mut f = File::create(&path).expect("unable to create temporary file for tests");
    f.write_all(data).unwrap();

    path
}

// 26 rotations of the alphabet, one per line
#[allow(dead_code)]
pub fn create_ascii(name: &str) -> PathBuf {
    create_file(name, &ascii_data())
}

// same content, gzipped
#[allow(dead_code)]
pub fn create_gzip(name: &str) -> PathBuf {
    let mut gzip_file = std::env::temp_dir();
    gzip_file.push(name);

    let f = File::create(&gzip_file).expect("unable to create temporary gzip file for tests");
    let mut gz = GzBuilder::new().write(f, Compression::default());
    gz.write_all(&ascii_data()).unwrap();
    gz.finish().unwrap();

    gzip_file
}

#[allow(dead_code)]
pub fn ascii_data() -> Vec<u8> {
    let az = "ABCDEFGHIJKLMNOPQRSTUVWXYZ".repeat(2);
    let mut data = Vec::new();
    for i in 0..26 {
        data.extend_from_slice(az[i..i + 26].as_bytes());
        data.push(b'\n');
    }
    data
}
