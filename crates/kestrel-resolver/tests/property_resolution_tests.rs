//! Static, instance and prefixed property access.

mod support;

use kestrel_common::diagnostic_codes;
use kestrel_model::{
    DeclId, ElementId, FieldSpec, MemberSpec, NamespaceId, ProgramBuilder, TypeId, UnitId,
};
use kestrel_resolver::{NullSafetyMode, ResolverOptions};
use support::Scenario;

struct Library {
    scenario: Scenario,
    config: DeclId,
    color: DeclId,
    account_type: TypeId,
    nullable_account: TypeId,
    bounded: TypeId,
    unbounded: TypeId,
    function: TypeId,
    math: NamespaceId,
    m: Members,
}

struct Members {
    instance: ElementId,
    name: ElementId,
    theme: ElementId,
    create: ElementId,
    counter: (ElementId, Option<ElementId>),
    limit: ElementId,
    max: ElementId,
    red: ElementId,
    secret_setter: Option<ElementId>,
    balance: (ElementId, Option<ElementId>),
    id: ElementId,
    close: ElementId,
    summary: ElementId,
    pi: ElementId,
    seed: ElementId,
    legacy_balance: ElementId,
}

/// Builds the program used by most tests. Access sites are in `main.kes`
/// unless `from_other` is set.
fn library(from_other: bool) -> Library {
    let mut b = ProgramBuilder::new();
    let main = b.add_unit("main.kes");
    let lib = b.add_unit("lib.kes");
    let mathlib = b.add_unit("math.kes");

    let config = b.class(main, "Config");
    let instance = b
        .add_member(config, MemberSpec::getter("instance").as_static())
        .expect("static getter");
    let name = b.add_member(config, MemberSpec::getter("name")).expect("getter");
    let theme = b.add_member(config, MemberSpec::setter("theme")).expect("setter");
    let create = b
        .add_member(config, MemberSpec::method("create").as_static())
        .expect("static method");
    let counter = b
        .add_field(config, FieldSpec::new("counter").as_static())
        .expect("static field");
    let (limit, _) = b
        .add_field(config, FieldSpec::new("limit").as_static().as_final())
        .expect("static final");
    let (max, _) = b
        .add_field(config, FieldSpec::new("max").as_static().as_const())
        .expect("static const");
    let (_, secret_setter) = b
        .add_field(config, FieldSpec::new("_secret").as_static())
        .expect("private static");

    let color = b.enumeration(main, "Color");
    let red = b.add_enum_constant(color, "red").expect("constant");

    let account = b.class(lib, "Account");
    let balance = b.add_field(account, FieldSpec::new("balance")).expect("field");
    let (id, _) = b
        .add_field(account, FieldSpec::new("id").as_final())
        .expect("final field");
    let close = b.add_member(account, MemberSpec::method("close")).expect("method");
    let summary = b
        .add_member(account, MemberSpec::getter("summary"))
        .expect("getter");
    let account_type = b.interface_type(account);
    let nullable_account = b.nullable(account_type);

    let legacy = b.class(lib, "LegacyAccount");
    let (legacy_balance, _) = b
        .add_field(legacy, FieldSpec::new("balance"))
        .expect("legacy field");
    b.legacy_view(balance.0, legacy_balance);

    let bounded = b.type_parameter("T", Some(account_type));
    let unbounded = b.type_parameter("U", None);
    let function = b.function_type();

    let math = b.add_namespace(main, "math");
    let pi = b
        .add_top_level(math, mathlib, MemberSpec::getter("pi"))
        .expect("pi");
    let seed = b
        .add_top_level(math, mathlib, MemberSpec::setter("seed"))
        .expect("seed");
    b.add_top_level(math, mathlib, MemberSpec::getter("_internal"))
        .expect("private");

    let program = b.finish().expect("valid");
    let unit: UnitId = if from_other { lib } else { main };
    Library {
        scenario: Scenario::new(program, unit),
        config,
        color,
        account_type,
        nullable_account,
        bounded,
        unbounded,
        function,
        math,
        m: Members {
            instance,
            name,
            theme,
            create,
            counter,
            limit,
            max,
            red,
            secret_setter,
            balance,
            id,
            close,
            summary,
            pi,
            seed,
            legacy_balance,
        },
    }
}

// =============================================================================
// Vacuous requests and determinism
// =============================================================================

#[test]
fn test_vacuous_request_is_empty_for_every_target_kind() {
    let l = library(false);
    let s = &l.scenario;
    let requests = [
        s.on_type(l.config, "Config", "missing"),
        s.on_value(TypeId::VOID, "anything"),
        s.on_value(l.account_type, "missing"),
        s.on_prefix(l.math, "math", "missing"),
        s.on_super(l.account_type, "missing"),
    ];
    for request in requests {
        let (result, sink) = s.resolve(&request.with_access(false, false));
        assert!(result.is_empty());
        assert!(sink.is_empty(), "unexpected diagnostics: {:?}", sink.codes());
    }
}

#[test]
fn test_resolution_is_deterministic() {
    let l = library(false);
    let s = &l.scenario;
    let request = s.on_value(l.nullable_account, "balance").for_read_write();

    let (first, first_sink) = s.resolve(&request);
    let (second, second_sink) = s.resolve(&request);
    assert_eq!(first, second);
    assert_eq!(first_sink.diagnostics(), second_sink.diagnostics());
    assert!(!first_sink.is_empty());
}

// =============================================================================
// Type references
// =============================================================================

#[test]
fn test_static_getter_through_type_name() {
    let l = library(false);
    let (result, sink) = l.scenario.resolve(&l.scenario.on_type(l.config, "Config", "instance"));
    assert_eq!(result.read_element_requested(), Some(l.m.instance));
    assert!(sink.is_empty());
}

#[test]
fn test_instance_getter_through_type_name_is_flagged_but_bound() {
    let l = library(false);
    let (result, sink) = l.scenario.resolve(&l.scenario.on_type(l.config, "Config", "name"));
    assert_eq!(result.read_element_requested(), Some(l.m.name));
    assert_eq!(
        sink.codes(),
        vec![diagnostic_codes::STATIC_ACCESS_TO_INSTANCE_MEMBER]
    );
}

#[test]
fn test_instance_setter_through_type_name_is_flagged_but_bound() {
    let l = library(false);
    let s = &l.scenario;
    let (result, sink) = s.resolve(&s.on_type(l.config, "Config", "theme").for_write());
    assert_eq!(result.write_element_requested(), Some(l.m.theme));
    assert!(result.write_element_recovery().is_none());
    assert_eq!(
        sink.codes(),
        vec![diagnostic_codes::STATIC_ACCESS_TO_INSTANCE_MEMBER]
    );
}

#[test]
fn test_static_method_reads_as_getter() {
    let l = library(false);
    let (result, sink) = l.scenario.resolve(&l.scenario.on_type(l.config, "Config", "create"));
    assert_eq!(result.read_element_requested(), Some(l.m.create));
    assert!(sink.is_empty());
}

#[test]
fn test_undefined_static_getter_and_enum_constant() {
    let l = library(false);
    let s = &l.scenario;

    let (result, sink) = s.resolve(&s.on_type(l.config, "Config", "missing"));
    assert!(result.is_empty());
    assert_eq!(
        s.messages(&sink),
        vec!["The getter 'missing' isn't defined for the type 'Config'."]
    );

    let (result, sink) = s.resolve(&s.on_type(l.color, "Color", "red"));
    assert_eq!(result.read_element_requested(), Some(l.m.red));
    assert!(sink.is_empty());

    let (_, sink) = s.resolve(&s.on_type(l.color, "Color", "purple"));
    assert_eq!(
        s.messages(&sink),
        vec!["There's no constant named 'purple' in 'Color'."]
    );
}

#[test]
fn test_static_field_assignment() {
    let l = library(false);
    let s = &l.scenario;
    let (result, sink) = s.resolve(&s.on_type(l.config, "Config", "counter").for_read_write());
    assert_eq!(result.read_element_requested(), Some(l.m.counter.0));
    assert_eq!(result.write_element_requested(), l.m.counter.1);
    assert!(sink.is_empty());
}

#[test]
fn test_static_write_recovery_diagnostics() {
    let l = library(false);
    let s = &l.scenario;

    let (result, sink) = s.resolve(&s.on_type(l.config, "Config", "limit").for_write());
    assert_eq!(result.write_element_requested(), None);
    assert_eq!(result.write_element_recovery(), Some(l.m.limit));
    assert_eq!(sink.codes(), vec![diagnostic_codes::ASSIGNMENT_TO_FINAL]);

    let (result, sink) = s.resolve(&s.on_type(l.config, "Config", "max").for_write());
    assert_eq!(result.write_element_recovery(), Some(l.m.max));
    assert_eq!(sink.codes(), vec![diagnostic_codes::ASSIGNMENT_TO_CONST]);

    let (result, sink) = s.resolve(&s.on_type(l.config, "Config", "create").for_write());
    assert_eq!(result.write_element_recovery(), Some(l.m.create));
    assert_eq!(sink.codes(), vec![diagnostic_codes::ASSIGNMENT_TO_METHOD]);

    let (result, sink) = s.resolve(&s.on_type(l.config, "Config", "missing").for_write());
    assert!(result.write.is_empty());
    assert_eq!(
        s.messages(&sink),
        vec!["The setter 'missing' isn't defined for the type 'Config'."]
    );
}

#[test]
fn test_private_static_member_from_another_unit() {
    let l = library(true);
    let s = &l.scenario;

    let (result, sink) = s.resolve(&s.on_type(l.config, "Config", "_secret"));
    assert!(result.is_empty());
    assert_eq!(sink.codes(), vec![diagnostic_codes::UNDEFINED_GETTER]);

    let (result, sink) = s.resolve(&s.on_type(l.config, "Config", "_secret").for_write());
    assert_eq!(result.write_element_requested(), l.m.secret_setter);
    assert_eq!(sink.codes(), vec![diagnostic_codes::PRIVATE_SETTER]);
}

#[test]
fn test_cascaded_type_name_accesses_the_type_object() {
    let l = library(false);
    let s = &l.scenario;
    let hash_code = s
        .program
        .lookup_member(
            s.program.core().object,
            &kestrel_model::Name::new(s.program.intern("hashCode"), s.unit),
            kestrel_model::MemberKind::Getter,
            kestrel_model::LookupMode::Concrete,
        )
        .expect("Object.hashCode");

    let (result, sink) = s.resolve(&s.on_type(l.config, "Config", "hashCode").cascaded());
    assert_eq!(result.read_element_requested(), Some(hash_code));
    assert!(sink.is_empty());

    let (result, sink) = s.resolve(&s.on_type(l.config, "Config", "instance").cascaded());
    assert!(result.is_empty());
    assert_eq!(
        s.messages(&sink),
        vec!["The getter 'instance' isn't defined for the type 'Type'."]
    );
}

// =============================================================================
// Value receivers
// =============================================================================

#[test]
fn test_instance_field_read_and_write() {
    let l = library(false);
    let s = &l.scenario;
    let (result, sink) = s.resolve(&s.on_value(l.account_type, "balance").for_read_write());
    assert_eq!(result.read_element(), Some(l.m.balance.0));
    assert_eq!(result.write_element(), l.m.balance.1);
    assert_eq!(result.write_element_recovery(), None);
    assert!(sink.is_empty());
}

#[test]
fn test_instance_write_recovery_diagnostics() {
    let l = library(false);
    let s = &l.scenario;

    let (result, sink) = s.resolve(&s.on_value(l.account_type, "id").for_write());
    assert_eq!(result.write_element_recovery(), Some(l.m.id));
    assert_eq!(
        s.messages(&sink),
        vec!["'id' can't be used as a setter because it's final."]
    );

    let (result, sink) = s.resolve(&s.on_value(l.account_type, "close").for_write());
    assert_eq!(result.write_element_recovery(), Some(l.m.close));
    assert_eq!(sink.codes(), vec![diagnostic_codes::ASSIGNMENT_TO_METHOD]);

    let (result, sink) = s.resolve(&s.on_value(l.account_type, "summary").for_write());
    assert_eq!(result.write_element_recovery(), Some(l.m.summary));
    assert_eq!(
        s.messages(&sink),
        vec!["There isn't a setter named 'summary' in class 'Account'."]
    );

    let (result, sink) = s.resolve(&s.on_value(l.account_type, "nope").for_read_write());
    assert!(result.is_empty());
    assert_eq!(
        s.messages(&sink),
        vec![
            "The getter 'nope' isn't defined for the type 'Account'.",
            "The setter 'nope' isn't defined for the type 'Account'.",
        ]
    );
}

#[test]
fn test_void_receiver_reports_once() {
    let l = library(false);
    let s = &l.scenario;
    for request in [
        s.on_value(TypeId::VOID, "length"),
        s.on_value(TypeId::VOID, "length").for_write(),
        s.on_value(TypeId::VOID, "length").for_read_write(),
    ] {
        let (result, sink) = s.resolve(&request);
        assert!(result.is_empty());
        assert_eq!(sink.codes(), vec![diagnostic_codes::USE_OF_VOID_RESULT]);
    }
}

#[test]
fn test_dynamic_and_never_receivers_accept_anything() {
    let l = library(false);
    let s = &l.scenario;
    for ty in [TypeId::DYNAMIC, TypeId::NEVER] {
        let (result, sink) = s.resolve(&s.on_value(ty, "whatever").for_read_write());
        assert!(result.is_empty());
        assert!(sink.is_empty());
    }
}

#[test]
fn test_call_on_function_values() {
    let l = library(false);
    let s = &l.scenario;
    let function_interface = s.program.core().function_type;

    for ty in [l.function, function_interface] {
        let (result, sink) = s.resolve(&s.on_value(ty, "call"));
        assert_eq!(result.read_element_requested(), None);
        assert!(sink.is_empty());
    }

    let (_, sink) = s.resolve(&s.on_value(l.account_type, "call"));
    assert_eq!(sink.codes(), vec![diagnostic_codes::UNDEFINED_GETTER]);
}

#[test]
fn test_type_parameters_are_widened_to_their_bound() {
    let l = library(false);
    let s = &l.scenario;

    let (result, sink) = s.resolve(&s.on_value(l.bounded, "balance"));
    assert_eq!(result.read_element_requested(), Some(l.m.balance.0));
    assert!(sink.is_empty());

    // Unbounded parameters widen to `Object?`.
    let (result, sink) = s.resolve(&s.on_value(l.unbounded, "hashCode"));
    assert!(result.read_element_requested().is_some());
    assert!(sink.is_empty());

    let (_, sink) = s.resolve(&s.on_value(l.unbounded, "balance"));
    assert_eq!(
        s.messages(&sink),
        vec!["The getter 'balance' isn't defined for the type 'Object?'."]
    );
}

#[test]
fn test_nullable_receivers() {
    let l = library(false);
    let s = &l.scenario;

    let (result, sink) = s.resolve(&s.on_value(l.nullable_account, "balance"));
    assert_eq!(result.read_element_requested(), Some(l.m.balance.0));
    assert_eq!(
        sink.codes(),
        vec![diagnostic_codes::UNCHECKED_PROPERTY_ACCESS_OF_NULLABLE_VALUE]
    );

    let (result, sink) = s.resolve(&s.on_value(l.nullable_account, "balance").null_aware());
    assert_eq!(result.read_element_requested(), Some(l.m.balance.0));
    assert!(sink.is_empty());

    let (result, sink) = s.resolve(&s.on_value(l.nullable_account, "hashCode"));
    assert!(result.read_element_requested().is_some());
    assert!(sink.is_empty());

    let (result, sink) = s.resolve(&s.on_value(TypeId::NULL, "balance").null_aware());
    assert!(result.is_empty());
    assert!(sink.is_empty());
}

#[test]
fn test_unchecked_nullable_reporting_can_be_disabled() {
    let l = library(false);
    let options = ResolverOptions::from_json_str(r#"{ "reportUncheckedNullable": false }"#)
        .expect("options");
    let s = l.scenario.with_options(options);
    let (result, sink) = s.resolve(&s.on_value(l.nullable_account, "balance"));
    assert_eq!(result.read_element_requested(), Some(l.m.balance.0));
    assert!(sink.is_empty());
}

#[test]
fn test_legacy_units_see_legacy_views() {
    let l = library(false);
    let s = l.scenario.with_options(ResolverOptions::legacy());
    assert_eq!(s.options.null_safety, NullSafetyMode::Legacy);

    let (result, sink) = s.resolve(&s.on_value(l.account_type, "balance"));
    assert_eq!(result.read_element_requested(), Some(l.m.legacy_balance));
    assert!(sink.is_empty());

    // Elements without a registered view are unchanged.
    let (result, _) = s.resolve(&s.on_value(l.account_type, "close"));
    assert_eq!(result.read_element_requested(), Some(l.m.close));
}

// =============================================================================
// Import prefixes
// =============================================================================

#[test]
fn test_prefixed_names() {
    let l = library(false);
    let s = &l.scenario;

    let (result, sink) = s.resolve(&s.on_prefix(l.math, "math", "pi"));
    assert_eq!(result.read_element_requested(), Some(l.m.pi));
    assert!(sink.is_empty());

    let (result, sink) = s.resolve(&s.on_prefix(l.math, "math", "seed").for_write());
    assert_eq!(result.write_element_requested(), Some(l.m.seed));
    assert!(sink.is_empty());

    let (_, sink) = s.resolve(&s.on_prefix(l.math, "math", "tau"));
    assert_eq!(
        s.messages(&sink),
        vec![
            "The name 'tau' is being referenced through the prefix 'math', but it isn't \
             defined in any of the libraries imported using that prefix."
        ]
    );

    let (_, sink) = s.resolve(&s.on_prefix(l.math, "math", "_internal"));
    assert_eq!(sink.codes(), vec![diagnostic_codes::UNDEFINED_PREFIXED_NAME]);
}

#[test]
fn test_prefixed_writes_without_setter() {
    let l = library(false);
    let s = &l.scenario;

    let (result, sink) = s.resolve(&s.on_prefix(l.math, "math", "pi").for_write());
    assert_eq!(result.write_element_recovery(), Some(l.m.pi));
    assert_eq!(sink.codes(), vec![diagnostic_codes::ASSIGNMENT_TO_FINAL]);

    let (result, sink) = s.resolve(&s.on_prefix(l.math, "math", "nothing").for_write());
    assert!(result.is_empty());
    assert_eq!(
        s.messages(&sink),
        vec!["Undefined name 'nothing'."]
    );
}
