use testbed_core::classify::history::{HISTORY_LIMIT, ValidationHistory};
use testbed_core::classify::{Category, Format, classify, get_format};

/// The validation page: validate a series of inputs, read back the history,
/// then clear it.
#[test]
fn validation_page_session() {
    let mut history = ValidationHistory::new();
    let inputs = [
        "192.168.1.1",
        "8.8.8.8",
        "::1",
        "192.168.1.0/24",
        "example.com",
        "https://example.com",
        "8080",
        "not a valid anything!!",
        "",
        "10.0.0.1",
        "172.16.5.4",
        "fe80:0:0:0:0:0:0:1",
        "443",
    ];

    for input in inputs {
        history.validate(input);
    }

    // 11 inputs were recognized, the two failures were skipped
    assert_eq!(history.len(), HISTORY_LIMIT);

    let recorded: Vec<(&str, Format)> = history.iter().map(|e| (e.input.as_str(), e.format)).collect();
    assert_eq!(recorded[0], ("443", Format::Port));
    assert_eq!(recorded[1], ("fe80:0:0:0:0:0:0:1", Format::Ipv6));
    assert_eq!(recorded[9], ("8.8.8.8", Format::Ipv4));
    assert!(recorded.iter().all(|(input, _)| *input != "192.168.1.1"));

    history.clear();
    assert!(history.is_empty());
}

#[test]
fn history_label_matches_get_format() {
    let mut history = ValidationHistory::new();
    for input in ["8080", "localhost", "http://localhost:3000", "10.0.0.0/8"] {
        history.validate(input);
    }
    for entry in history.iter() {
        assert_eq!(entry.format, get_format(&entry.input));
    }
}

#[test]
fn single_category_per_result() {
    for input in ["192.168.1.1", "8.8.8.8", "example.com", "", "???"] {
        let results = classify(input);
        let errors = results.iter().filter(|r| r.category == Category::Error).count();
        if errors > 0 {
            assert_eq!(results.len(), 1, "{input}");
            assert!(!results[0].is_valid);
        } else {
            assert!(results.iter().all(|r| r.is_valid), "{input}");
        }
    }
}
