use markify::markify;

#[test]
fn detects_bold_text() {
    similar_asserts::assert_eq!(
        markify("*bold text (not italic)*", None),
        "<span class=\"text-bold\">bold text (not italic)</span>"
    );
}

#[test]
fn detects_italic_text() {
    similar_asserts::assert_eq!(
        markify("This text is not italic.", None),
        "This text is not italic."
    );
    similar_asserts::assert_eq!(
        markify("_This text is italic._", None),
        "<span class=\"text-italic\">This text is italic.</span>"
    );
    similar_asserts::assert_eq!(
        markify("This text is _partially_ italic", None),
        "This text is <span class=\"text-italic\">partially</span> italic"
    );
    similar_asserts::assert_eq!(
        markify("This text has _two_ _italic_ bits", None),
        "This text has <span class=\"text-italic\">two</span> \
         <span class=\"text-italic\">italic</span> bits"
    );
}

#[test]
fn detects_strikethrough_text() {
    similar_asserts::assert_eq!(
        markify("so ~strikethrough~", None),
        "so <span class=\"text-strike\">strikethrough</span>"
    );
}

#[test]
fn detects_mixed_markup() {
    similar_asserts::assert_eq!(
        markify("*bold text with _italic_ *", None),
        "<span class=\"text-bold\">bold text with <span class=\"text-italic\">italic</span> </span>"
    );
    similar_asserts::assert_eq!(
        markify("*part bold,* _part italic_", None),
        "<span class=\"text-bold\">part bold,</span> <span class=\"text-italic\">part italic</span>"
    );
    similar_asserts::assert_eq!(
        markify("_italic text with *bold* _", None),
        "<span class=\"text-italic\">italic text with <span class=\"text-bold\">bold</span> </span>"
    );
}

#[test]
fn ignores_invalid_markup() {
    similar_asserts::assert_eq!(
        markify("*invalid markup (do not parse)_", None),
        "*invalid markup (do not parse)_"
    );
    similar_asserts::assert_eq!(markify("random *asterisk", None), "random *asterisk");
    similar_asserts::assert_eq!(markify("***three asterisks", None), "***three asterisks");
    similar_asserts::assert_eq!(
        markify("***three asterisks*", None),
        "**<span class=\"text-bold\">three asterisks</span>"
    );
    similar_asserts::assert_eq!(
        markify("**double asterisks*", None),
        "**double asterisks*"
    );
}
