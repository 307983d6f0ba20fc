use markify::{StyleSheet, markify};

#[test]
fn full_class_override() {
    let styles = StyleSheet {
        bold: "bbb".to_string(),
        italic: "iii".to_string(),
        strike: "sss".to_string(),
    };
    similar_asserts::assert_eq!(
        markify("*bold*", Some(&styles)),
        "<span class=\"bbb\">bold</span>"
    );
    similar_asserts::assert_eq!(
        markify("_italic_", Some(&styles)),
        "<span class=\"iii\">italic</span>"
    );
    similar_asserts::assert_eq!(
        markify("~strikethrough~", Some(&styles)),
        "<span class=\"sss\">strikethrough</span>"
    );
}

#[test]
fn partial_override_keeps_defaults_for_other_kinds() {
    let styles = StyleSheet {
        bold: "bbb".to_string(),
        ..Default::default()
    };
    similar_asserts::assert_eq!(
        markify("*bold*", Some(&styles)),
        "<span class=\"bbb\">bold</span>"
    );
    similar_asserts::assert_eq!(
        markify("_italic_", Some(&styles)),
        "<span class=\"text-italic\">italic</span>"
    );
}

#[test]
fn none_means_default_classes() {
    similar_asserts::assert_eq!(
        markify("~gone~", None),
        "<span class=\"text-strike\">gone</span>"
    );
}
