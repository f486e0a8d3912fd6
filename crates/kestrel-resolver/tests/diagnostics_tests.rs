use super::*;
use kestrel_common::{DiagnosticCategory, diagnostic_codes};
use kestrel_model::ProgramBuilder;

#[test]
fn test_render_formats_names_and_types() {
    let mut b = ProgramBuilder::new();
    let lib = b.add_unit("lib.kes");
    let account = b.class(lib, "Account");
    let account_type = b.interface_type(account);
    let nullable = b.nullable(account_type);
    let program = b.finish().expect("valid");

    let pending = PendingDiagnostic::error(
        diagnostic_codes::UNDEFINED_GETTER,
        Span::at(12, 7),
        vec![program.intern("balance").into(), nullable.into()],
    );
    let rendered = pending.render(&program, "main.kes");
    assert_eq!(
        rendered.message_text,
        "The getter 'balance' isn't defined for the type 'Account?'."
    );
    assert_eq!(rendered.file, "main.kes");
    assert_eq!(rendered.start, 12);
    assert_eq!(rendered.length, 7);
    assert_eq!(rendered.category, DiagnosticCategory::Error);
}

#[test]
fn test_collector_keeps_emission_order() {
    let program = ProgramBuilder::new().finish().expect("valid");
    let mut collector = DiagnosticCollector::new();
    collector.error(diagnostic_codes::USE_OF_VOID_RESULT, Span::at(0, 1), Vec::new());
    collector.error(
        diagnostic_codes::ASSIGNMENT_TO_METHOD,
        Span::at(4, 2),
        Vec::new(),
    );
    assert_eq!(
        collector.codes(),
        vec![
            diagnostic_codes::USE_OF_VOID_RESULT,
            diagnostic_codes::ASSIGNMENT_TO_METHOD
        ]
    );

    let rendered = collector.render(&program, "a.kes");
    assert_eq!(rendered.len(), 2);
    assert_eq!(rendered[1].message_text, "Methods can't be assigned a value.");

    let taken = collector.take_diagnostics();
    assert_eq!(taken.len(), 2);
    assert!(collector.is_empty());
}

#[test]
fn test_string_and_number_args() {
    let program = ProgramBuilder::new().finish().expect("valid");
    let pending = PendingDiagnostic::error(
        diagnostic_codes::ABSTRACT_SUPER_MEMBER_REFERENCE,
        Span::at(0, 4),
        vec!["getter".into(), String::from("area").into()],
    );
    assert_eq!(
        pending.render(&program, "a.kes").message_text,
        "The getter 'area' is always abstract in the supertype."
    );
    assert_eq!(DiagnosticArg::from(3usize), DiagnosticArg::Number(3));
}

#[test]
fn test_vec_is_a_sink() {
    let mut sink: Vec<PendingDiagnostic> = Vec::new();
    sink.error(diagnostic_codes::UNDEFINED_IDENTIFIER, Span::at(1, 1), Vec::new());
    assert_eq!(sink.len(), 1);
    assert_eq!(sink[0].code, diagnostic_codes::UNDEFINED_IDENTIFIER);
}
