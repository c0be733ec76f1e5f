#![no_main]

use intake::classifier::MessageClassifier;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let classifier = MessageClassifier::new();
    let result = classifier.classify(data);
    assert!((0.0..=1.0).contains(&result.confidence));
    // routing flags are a pure function of the category
    assert_eq!(result.needs_agent, result.category.needs_agent());
    assert_eq!(result.needs_database, result.category.needs_database());
    assert_eq!(result.needs_crm_sync, result.category.needs_crm_sync());
});
