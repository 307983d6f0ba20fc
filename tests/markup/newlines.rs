use markify::markify;

#[test]
fn markup_never_spans_a_line_break() {
    similar_asserts::assert_eq!(
        markify("*First line\n and a new one. (do not parse)*", None),
        "*First line\n and a new one. (do not parse)*"
    );
    similar_asserts::assert_eq!(
        markify("*\nbegins with linebreak. (do not parse)*", None),
        "*\nbegins with linebreak. (do not parse)*"
    );
    similar_asserts::assert_eq!(
        markify(
            "*Just some text. But it ends with newline (do not parse)\n*",
            None
        ),
        "*Just some text. But it ends with newline (do not parse)\n*"
    );
}

#[test]
fn each_line_is_parsed_independently() {
    similar_asserts::assert_eq!(
        markify("*first*\n_second_", None),
        "<span class=\"text-bold\">first</span>\n<span class=\"text-italic\">second</span>"
    );
}

#[test]
fn trailing_newline_is_preserved() {
    similar_asserts::assert_eq!(
        markify("hello\n*world*\n", None),
        "hello\n<span class=\"text-bold\">world</span>\n"
    );
}
