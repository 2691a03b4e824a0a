#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
mod unit {
    use crate::symbol;
    use crate::{ParseSession, SemanticValue, TokenSupply};
    use pretty_assertions::assert_eq;
    use rill_lexer::SourceBuffer;

    /// Helper: pull `n` symbols, collecting (code, literal) pairs.
    fn pull(session: &mut ParseSession<'_>, n: usize) -> Vec<(i32, String)> {
        let mut value = SemanticValue::default();
        (0..n)
            .map(|_| {
                let code = session.next_symbol(&mut value);
                (code, value.text.clone())
            })
            .collect()
    }

    // === Symbol feed ===

    #[test]
    fn declaration_feeds_expected_symbol_sequence() {
        let buf = SourceBuffer::new("var x = 10;");
        let mut session = ParseSession::new(&buf);
        assert_eq!(
            pull(&mut session, 5),
            vec![
                (symbol::VAR, "var".into()),
                (symbol::ID, "x".into()),
                (i32::from(b'='), "=".into()),
                (symbol::CTE_I, "10".into()),
                (i32::from(b';'), ";".into()),
            ]
        );
    }

    #[test]
    fn literal_kinds_collapse_to_one_code_each() {
        let buf = SourceBuffer::new("1 2.5 \"s\" name other");
        let mut session = ParseSession::new(&buf);
        let codes: Vec<i32> = pull(&mut session, 5).into_iter().map(|(c, _)| c).collect();
        assert_eq!(
            codes,
            vec![
                symbol::CTE_I,
                symbol::CTE_F,
                symbol::CTE_STRING,
                symbol::ID,
                symbol::ID,
            ]
        );
    }

    #[test]
    fn semantic_value_is_overwritten_each_call() {
        let buf = SourceBuffer::new("alpha beta");
        let mut session = ParseSession::new(&buf);
        let mut value = SemanticValue::default();
        session.next_symbol(&mut value);
        assert_eq!(value.text, "alpha");
        session.next_symbol(&mut value);
        assert_eq!(value.text, "beta");
    }

    #[test]
    fn eof_returns_its_line_number_as_opaque_code() {
        let buf = SourceBuffer::new("x\n\ny");
        let mut session = ParseSession::new(&buf);
        let mut value = SemanticValue::default();
        session.next_symbol(&mut value); // x
        session.next_symbol(&mut value); // y
        let code = session.next_symbol(&mut value);
        assert_eq!(code, 3); // Eof sits on line 3
        assert_eq!(value.text, "");
    }

    #[test]
    fn illegal_returns_its_line_number_as_opaque_code() {
        let buf = SourceBuffer::new("x =\n@");
        let mut session = ParseSession::new(&buf);
        let mut value = SemanticValue::default();
        session.next_symbol(&mut value);
        session.next_symbol(&mut value);
        let code = session.next_symbol(&mut value);
        assert_eq!(code, 2);
        assert_eq!(value.text, "@");
    }

    // === Error slot ===

    #[test]
    fn no_error_pending_on_a_fresh_session() {
        let buf = SourceBuffer::new("x");
        let session = ParseSession::new(&buf);
        assert_eq!(session.error(), None);
    }

    #[test]
    fn reported_error_carries_the_trailing_window() {
        let buf = SourceBuffer::new("var x = 10;");
        let mut session = ParseSession::new(&buf);
        pull(&mut session, 3); // var x =
        session.report_error("syntax error");

        let err = session.error().expect("error pending");
        assert_eq!(err.message, "syntax error");
        assert_eq!(err.line, 1);
        assert_eq!(err.context, "= var x = <-- \n in line: 1");
        assert_eq!(
            err.to_string(),
            "syntax error\n near = var x = <-- \n in line: 1"
        );
    }

    #[test]
    fn window_line_is_the_oldest_windowed_token() {
        let buf = SourceBuffer::new("a\nb\nc\nd\ne\nf\ng");
        let mut session = ParseSession::new(&buf);
        pull(&mut session, 7);
        session.report_error("syntax error");
        // Window holds c..g; the oldest of those sits on line 3.
        assert_eq!(session.error().unwrap().line, 3);
    }

    #[test]
    fn second_report_replaces_the_first() {
        let buf = SourceBuffer::new("x y");
        let mut session = ParseSession::new(&buf);
        pull(&mut session, 1);
        session.report_error("first");
        pull(&mut session, 1);
        session.report_error("second");

        let err = session.take_error().expect("error pending");
        assert_eq!(err.message, "second");
        assert!(err.context.contains("x y"));
    }

    #[test]
    fn take_error_empties_the_slot() {
        let buf = SourceBuffer::new("x");
        let mut session = ParseSession::new(&buf);
        session.report_error("syntax error");
        assert!(session.take_error().is_some());
        assert_eq!(session.error(), None);
        assert_eq!(session.take_error(), None);
    }

    #[test]
    fn report_before_any_symbol_uses_the_empty_placeholder() {
        let buf = SourceBuffer::new("x");
        let mut session = ParseSession::new(&buf);
        session.report_error("syntax error");
        let err = session.error().unwrap();
        assert_eq!(err.context, "<no tokens read>");
        assert_eq!(err.line, 0);
    }

    // === End to end ===

    #[test]
    fn driver_rejects_garbled_statement_with_context() {
        // A driver that stops at the first symbol the grammar cannot take.
        let buf = SourceBuffer::new("x = 10 +=- / n * 1;");
        let mut session = ParseSession::new(&buf);
        let mut value = SemanticValue::default();

        // Shift x, =, 10, +; the second = cannot follow a binary operator.
        for _ in 0..4 {
            session.next_symbol(&mut value);
        }
        let code = session.next_symbol(&mut value);
        assert_eq!(code, i32::from(b'='));
        session.report_error("syntax error");

        let err = session.take_error().expect("error pending");
        assert_eq!(err.context, "= x = 10 + = <-- \n in line: 1");
        assert_eq!(session.history().len(), 5);
    }
}
