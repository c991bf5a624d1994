#![no_main]
use libfuzzer_sys::fuzz_target;
use std::io::Cursor;

fuzz_target!(|data: &[u8]| {
    if data.len() > 16384 { return; }
    for skip_errors in [true, false] {
        let mut opts = crlfbench::load::LoadOptions::default();
        opts.skip_errors = skip_errors;
        opts.progress_every = None;
        let _ = crlfbench::load::load_from_reader(Cursor::new(data), &opts);
    }
});
