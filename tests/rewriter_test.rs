use hdrmig::classifier::LineClassifier;
use hdrmig::rewriter::{rewrite_text, RewriteState, Rewriter};

fn classifier() -> LineClassifier {
    LineClassifier::new(&["NNG_DECL", "NN_DECL"]).unwrap()
}

fn rewrite(text: &str) -> String {
    String::from_utf8(rewrite_text(&classifier(), text.as_bytes()).content).unwrap()
}

#[test]
fn test_single_line_declaration() {
    assert_eq!(
        rewrite("NN_DECL void foo(void);\n"),
        "/*NN_DECL void foo(void);*/\n"
    );
}

#[test]
fn test_single_line_declaration_keeps_remainder() {
    assert_eq!(
        rewrite("NN_DECL void foo(void); // old api\n"),
        "/*NN_DECL void foo(void);*/ // old api\n"
    );
    assert_eq!(
        rewrite("  NNG_DECL int a(void); int b;\n"),
        "/*  NNG_DECL int a(void);*/ int b;\n"
    );
}

#[test]
fn test_multi_line_declaration() {
    let input = "NN_DECL void foo(void,\n    int x);\n";
    assert_eq!(rewrite(input), "/*NN_DECL void foo(void,\n    int x);*/\n");
}

#[test]
fn test_continuation_lines_are_untouched() {
    let input = "NNG_DECL int nng_socket_set_addr(\n    nng_socket, // sock\n\n    const nng_sockaddr *); int y; // tail\nint z; // gone\n";
    let expected = "/*NNG_DECL int nng_socket_set_addr(\n    nng_socket, // sock\n\n    const nng_sockaddr *);*/ int y; // tail\nint z;\n";
    assert_eq!(rewrite(input), expected);
}

#[test]
fn test_blank_lines_pass_through() {
    assert_eq!(rewrite("\n\n\n"), "\n\n\n");
    assert_eq!(rewrite("int a;\n\nint b;\n"), "int a;\n\nint b;\n");
}

#[test]
fn test_preprocessor_lines_pass_through() {
    let input = "#ifndef NNG_H // guard\n  #define NNG_H\n#endif\n";
    assert_eq!(rewrite(input), input);
}

#[test]
fn test_preprocessor_line_inside_open_declaration() {
    // A directive inside an open declaration is continuation text, so its
    // `;` closes the comment.
    let input = "NNG_DECL int f(\n#define X ;\n    int);\n";
    assert_eq!(rewrite(input), "/*NNG_DECL int f(\n#define X ;*/\n    int);\n");
}

#[test]
fn test_comment_stripping() {
    assert_eq!(rewrite("int x;   // counter\n"), "int x;\n");
    assert_eq!(
        rewrite("typedef int32_t nng_duration; // ms\n"),
        "typedef int32_t nng_duration;\n"
    );
}

#[test]
fn test_comment_only_lines_are_dropped() {
    assert_eq!(rewrite("// header\nint x;\n    // note\n"), "int x;\n");
}

#[test]
fn test_plain_lines_without_comment_are_unchanged() {
    let input = "typedef struct nng_ctx_s {\n\tuint32_t id;\n} nng_ctx;\n   \n";
    assert_eq!(rewrite(input), input);
}

#[test]
fn test_crlf_line_endings() {
    let input = "NN_DECL void foo(void);\r\n\r\nint x; // c\r\nNN_DECL int g(\r\n  int);\r\n";
    let expected = "/*NN_DECL void foo(void);*/\r\n\r\nint x;\r\n/*NN_DECL int g(\r\n  int);*/\r\n";
    assert_eq!(rewrite(input), expected);
}

#[test]
fn test_last_line_without_terminator() {
    assert_eq!(rewrite("int x; // c"), "int x;");
    assert_eq!(rewrite("NN_DECL void f(void);"), "/*NN_DECL void f(void);*/");
}

#[test]
fn test_unterminated_declaration_is_reported() {
    let result = rewrite_text(&classifier(), b"int a;\nNNG_DECL int f(\n    int x)\n");
    assert_eq!(result.content, b"int a;\n/*NNG_DECL int f(\n    int x)\n");
    assert_eq!(result.unterminated, Some(2));

    let result = rewrite_text(&classifier(), b"NNG_DECL int f(int);\n");
    assert_eq!(result.unterminated, None);
}

#[test]
fn test_rewriter_state_transitions() {
    let c = classifier();
    let mut rewriter = Rewriter::new(&c);
    assert_eq!(rewriter.state(), RewriteState::Normal);

    rewriter.rewrite_line(b"int a;\n");
    assert_eq!(rewriter.state(), RewriteState::Normal);

    rewriter.rewrite_line(b"NN_DECL int f(\n");
    assert_eq!(
        rewriter.state(),
        RewriteState::AwaitingTerminator { opened_at: 2 }
    );

    assert_eq!(rewriter.rewrite_line(b"  int,\n"), Some(b"  int,\n".to_vec()));
    assert_eq!(
        rewriter.state(),
        RewriteState::AwaitingTerminator { opened_at: 2 }
    );

    assert_eq!(
        rewriter.rewrite_line(b"  int);\n"),
        Some(b"  int);*/\n".to_vec())
    );
    assert_eq!(rewriter.finish(), RewriteState::Normal);
}

#[test]
fn test_dropped_line_returns_none() {
    let c = classifier();
    let mut rewriter = Rewriter::new(&c);
    assert_eq!(rewriter.rewrite_line(b"// comment\n"), None);
}

#[test]
fn test_idempotence() {
    let input = "#ifndef NN_H\n#define NN_H\n\nNN_DECL int nn_socket(int, int);\nNN_DECL int nn_send(\n    int, const void *, size_t, int);\n\nstruct nn_iovec {\n    void *iov_base; // base\n    size_t iov_len;\n};\n#endif\n";
    let once = rewrite(input);
    let twice = rewrite(&once);
    assert_eq!(once, twice);
    assert!(once.contains("/*NN_DECL int nn_socket(int, int);*/\n"));
    assert!(once.contains("    void *iov_base;\n"));
}

#[test]
fn test_non_utf8_bytes_are_preserved() {
    let input: &[u8] = b"/* Copyright \xa9 nng */\nint x; // \xa9 owner\nNNG_DECL int f(void); /* \xe9 */\n";
    let result = rewrite_text(&classifier(), input);
    assert_eq!(
        result.content,
        b"/* Copyright \xa9 nng */\nint x;\n/*NNG_DECL int f(void);*/ /* \xe9 */\n"
    );
}
