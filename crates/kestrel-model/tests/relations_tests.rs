use crate::{ProgramBuilder, TypeData, TypeFormatter, TypeId};

#[test]
fn test_resolve_to_bound_unbounded_is_nullable_object() {
    let mut b = ProgramBuilder::new();
    let t = b.type_parameter("T", None);
    let object_type = b.core().object_type;
    let program = b.finish().expect("valid");

    let widened = program.resolve_to_bound(t);
    assert_eq!(widened, program.types().nullable(object_type));
    assert!(program.is_potentially_nullable(t));
}

#[test]
fn test_resolve_to_bound_follows_chain_and_keeps_nullability() {
    let mut b = ProgramBuilder::new();
    let lib = b.add_unit("lib.kes");
    let animal = b.class(lib, "Animal");
    let animal_type = b.interface_type(animal);
    let t = b.type_parameter("T", Some(animal_type));
    let u = b.type_parameter("U", Some(t));
    let u_nullable = b.nullable(u);
    let program = b.finish().expect("valid");

    assert_eq!(program.resolve_to_bound(u), animal_type);
    assert_eq!(
        program.resolve_to_bound(u_nullable),
        program.types().nullable(animal_type)
    );
    assert!(!program.is_potentially_nullable(u));
    // Non-parameters are returned unchanged.
    assert_eq!(program.resolve_to_bound(animal_type), animal_type);
}

#[test]
fn test_promote_to_non_null() {
    let mut b = ProgramBuilder::new();
    let lib = b.add_unit("lib.kes");
    let a = b.class(lib, "A");
    let a_type = b.interface_type(a);
    let a_nullable = b.nullable(a_type);
    let program = b.finish().expect("valid");

    assert_eq!(program.promote_to_non_null(a_nullable), a_type);
    assert_eq!(program.promote_to_non_null(a_type), a_type);
    assert_eq!(program.promote_to_non_null(TypeId::NULL), TypeId::NEVER);
    assert_eq!(program.promote_to_non_null(TypeId::DYNAMIC), TypeId::DYNAMIC);
}

#[test]
fn test_interface_subtyping() {
    let mut b = ProgramBuilder::new();
    let lib = b.add_unit("lib.kes");
    let animal = b.class(lib, "Animal");
    let dog = b.class(lib, "Dog");
    let pet = b.class(lib, "Pet");
    let animal_type = b.interface_type(animal);
    let dog_type = b.interface_type(dog);
    let pet_type = b.interface_type(pet);
    b.set_superclass(dog, animal_type).expect("extends");
    b.add_interface(dog, pet_type).expect("implements");
    let dog_nullable = b.nullable(dog_type);
    let animal_nullable = b.nullable(animal_type);
    let object_type = b.core().object_type;
    let program = b.finish().expect("valid");

    assert!(program.is_subtype(dog_type, animal_type));
    assert!(program.is_subtype(dog_type, pet_type));
    assert!(program.is_subtype(dog_type, object_type));
    assert!(!program.is_subtype(animal_type, dog_type));
    assert!(program.is_subtype(dog_nullable, animal_nullable));
    assert!(!program.is_subtype(dog_nullable, animal_type));
    assert!(program.is_subtype(TypeId::NULL, animal_nullable));
    assert!(!program.is_subtype(TypeId::NULL, animal_type));
}

#[test]
fn test_top_and_bottom_types() {
    let mut b = ProgramBuilder::new();
    let lib = b.add_unit("lib.kes");
    let a = b.class(lib, "A");
    let a_type = b.interface_type(a);
    let top = b.nullable(b.core().object_type);
    let program = b.finish().expect("valid");

    assert!(program.is_subtype(TypeId::NEVER, a_type));
    assert!(program.is_subtype(a_type, TypeId::DYNAMIC));
    assert!(program.is_subtype(TypeId::NULL, top));
    assert!(!program.is_subtype(TypeId::DYNAMIC, a_type));
}

#[test]
fn test_function_types() {
    let b = ProgramBuilder::new();
    let function = b.function_type();
    let core = b.core().clone();
    let program = b.finish().expect("valid");

    assert!(program.is_function_like(function));
    assert!(program.is_function_like(core.function_type));
    assert!(!program.is_function_like(core.object_type));
    assert!(program.is_subtype(function, core.function_type));
    assert!(program.is_subtype(function, core.object_type));
}

#[test]
fn test_type_parameter_subtyping_uses_bound() {
    let mut b = ProgramBuilder::new();
    let lib = b.add_unit("lib.kes");
    let animal = b.class(lib, "Animal");
    let animal_type = b.interface_type(animal);
    let t = b.type_parameter("T", Some(animal_type));
    let unbounded = b.type_parameter("U", None);
    let t_nullable = b.nullable(t);
    let program = b.finish().expect("valid");

    assert!(program.is_subtype(t, animal_type));
    assert!(program.is_subtype(t, t_nullable));
    assert!(!program.is_subtype(t_nullable, t));
    assert!(!program.is_subtype(unbounded, animal_type));
}

#[test]
fn test_type_formatter() {
    let mut b = ProgramBuilder::new();
    let lib = b.add_unit("lib.kes");
    let a = b.class(lib, "Account");
    let a_type = b.interface_type(a);
    let a_nullable = b.nullable(a_type);
    let t = b.type_parameter("T", None);
    let program = b.finish().expect("valid");
    let formatter = TypeFormatter::new(&program);

    assert_eq!(formatter.format(a_type), "Account");
    assert_eq!(formatter.format(a_nullable), "Account?");
    assert_eq!(formatter.format(t), "T");
    assert_eq!(formatter.format(TypeId::VOID), "void");
    assert_eq!(formatter.format(TypeId::DYNAMIC), "dynamic");
    assert_eq!(
        program.type_data(a_nullable),
        TypeData::Interface {
            decl: a,
            nullable: true
        }
    );
}
