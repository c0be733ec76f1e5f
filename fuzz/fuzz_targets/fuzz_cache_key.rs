#![no_main]

use intake::cache::cache_key;
use intake::responses::Language;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    for language in Language::ALL {
        let key = cache_key(language, data);
        let normalized = key
            .strip_prefix(language.as_str())
            .and_then(|rest| rest.strip_prefix(':'))
            .expect("key carries language prefix");
        // normalization is idempotent
        assert_eq!(cache_key(language, normalized), key);
    }
});
