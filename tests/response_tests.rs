//! Table-driven checks of whole responses against both rule sets.

mod common;

use hsts_preload::issues::codes;
use hsts_preload::{preloadable_response, removable_response, Issue, Issues};
use hyper::header::HeaderMap;

use common::{error_codes, hsts_response, issues};

type CheckFn = fn(&HeaderMap) -> (Option<String>, Issues);

struct Case {
    check: CheckFn,
    description: &'static str,
    headers: &'static [&'static str],
    expected: Issues,
}

fn cases() -> Vec<Case> {
    vec![
        Case {
            check: preloadable_response,
            description: "good header",
            headers: &["max-age=10886400; includeSubDomains; preload"],
            expected: Issues::new(),
        },
        Case {
            check: preloadable_response,
            description: "missing preload",
            headers: &["max-age=10886400; includeSubDomains"],
            expected: issues(&[codes::PRELOADABLE_PRELOAD_MISSING], &[]),
        },
        Case {
            check: preloadable_response,
            description: "missing includeSubDomains",
            headers: &["preload; max-age=10886400"],
            expected: issues(&[codes::PRELOADABLE_INCLUDE_SUB_DOMAINS_MISSING], &[]),
        },
        Case {
            check: preloadable_response,
            description: "single header, multiple errors",
            headers: &["includeSubDomains; max-age=100"],
            expected: Issues {
                errors: vec![
                    Issue::new(codes::PRELOADABLE_PRELOAD_MISSING),
                    Issue::new(codes::PRELOADABLE_MAX_AGE_TOO_LOW).with_message(
                        "The max-age must be at least 10886400 seconds (== 18 weeks), but the header currently only has max-age=100.",
                    ),
                ],
                warnings: vec![],
            },
        },
        Case {
            check: preloadable_response,
            description: "empty header",
            headers: &[""],
            expected: issues(
                &[
                    codes::PRELOADABLE_INCLUDE_SUB_DOMAINS_MISSING,
                    codes::PRELOADABLE_PRELOAD_MISSING,
                    codes::PRELOADABLE_MAX_AGE_MISSING,
                ],
                &[codes::PARSE_EMPTY],
            ),
        },
        Case {
            check: preloadable_response,
            description: "missing header",
            headers: &[],
            expected: issues(&[codes::RESPONSE_NO_HEADER], &[]),
        },
        Case {
            check: preloadable_response,
            description: "multiple headers",
            headers: &["max-age=10", "max-age=20", "max-age=30"],
            expected: issues(&[codes::RESPONSE_MULTIPLE_HEADERS], &[]),
        },
        Case {
            check: removable_response,
            description: "no preload",
            headers: &["max-age=15768000; includeSubDomains"],
            expected: Issues::new(),
        },
        Case {
            check: removable_response,
            description: "preload present",
            headers: &["max-age=15768000; includeSubDomains; preload"],
            expected: issues(&[codes::REMOVABLE_CONTAINS_PRELOAD], &[]),
        },
        Case {
            check: removable_response,
            description: "preload only",
            headers: &["preload"],
            expected: issues(
                &[codes::REMOVABLE_CONTAINS_PRELOAD, codes::REMOVABLE_MISSING_MAX_AGE],
                &[],
            ),
        },
        Case {
            check: removable_response,
            description: "missing header",
            headers: &[],
            expected: issues(&[codes::RESPONSE_NO_HEADER], &[]),
        },
        Case {
            check: removable_response,
            description: "multiple good headers",
            headers: &["max-age=15768000", "max-age=15768000"],
            expected: issues(&[codes::RESPONSE_MULTIPLE_HEADERS], &[]),
        },
    ]
}

#[test]
fn test_preloadable_and_removable_response() {
    for case in cases() {
        let resp = hsts_response(case.headers);
        let (header, issues) = (case.check)(&resp);

        if case.headers.len() == 1 {
            assert_eq!(
                header.as_deref(),
                Some(case.headers[0]),
                "[{}] did not receive the expected header",
                case.description
            );
        } else {
            assert!(header.is_none(), "[{}] did not expect a header, got {:?}", case.description, header);
        }

        assert!(
            issues.matches_expected(&case.expected),
            "[{}] issues did not match\n actual: {:?}\n expected: {:?}",
            case.description,
            issues,
            case.expected
        );
    }
}

#[test]
fn test_multiple_errors_are_ordered() {
    let (_, issues) = preloadable_response(&hsts_response(&["includeSubDomains; max-age=100"]));
    assert_eq!(
        error_codes(&issues),
        vec![codes::PRELOADABLE_PRELOAD_MISSING, codes::PRELOADABLE_MAX_AGE_TOO_LOW]
    );
    assert!(issues.errors[1]
        .message
        .as_deref()
        .unwrap()
        .contains("max-age=100"));

    let (_, issues) = removable_response(&hsts_response(&["preload"]));
    assert_eq!(
        error_codes(&issues),
        vec![codes::REMOVABLE_CONTAINS_PRELOAD, codes::REMOVABLE_MISSING_MAX_AGE]
    );
}

#[test]
fn test_empty_header_errors_and_warnings_stay_separate() {
    let (header, issues) = preloadable_response(&hsts_response(&[""]));
    assert_eq!(header.as_deref(), Some(""));
    // Fixed rule-set order: preload, includeSubDomains, then max-age.
    assert_eq!(
        error_codes(&issues),
        vec![
            codes::PRELOADABLE_PRELOAD_MISSING,
            codes::PRELOADABLE_INCLUDE_SUB_DOMAINS_MISSING,
            codes::PRELOADABLE_MAX_AGE_MISSING,
        ]
    );
    assert_eq!(issues.warnings, vec![Issue::new(codes::PARSE_EMPTY)]);
}

#[test]
fn test_selector_failure_ignores_content() {
    let bad = hsts_response(&["garbage", "max-age=abc; preload; preload"]);
    for check in [preloadable_response as CheckFn, removable_response as CheckFn] {
        let (header, issues) = check(&bad);
        assert!(header.is_none());
        assert_eq!(issues, common::issues(&[codes::RESPONSE_MULTIPLE_HEADERS], &[]));
    }
}
