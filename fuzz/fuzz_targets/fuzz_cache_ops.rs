#![no_main]

use arbitrary::Arbitrary;
use intake::cache::ResponseCache;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum Op {
    Set { key: String, value: String },
    Get { key: String },
    Clear,
}

fuzz_target!(|ops: Vec<Op>| {
    let cache = ResponseCache::new();
    for op in ops {
        match op {
            Op::Set { key, value } => cache.set(&key, &value),
            Op::Get { key } => {
                let _ = cache.get(&key);
            }
            Op::Clear => cache.clear(),
        }
    }
    // default capacity; no op sequence may push the cache past it
    assert!(cache.len() <= 100);
});
