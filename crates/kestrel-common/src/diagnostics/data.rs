use super::{DiagnosticCategory, DiagnosticMessage};

pub mod diagnostic_codes {
    // Undefined members
    pub const UNDEFINED_GETTER: u32 = 1001;
    pub const UNDEFINED_SETTER: u32 = 1002;
    pub const UNDEFINED_ENUM_CONSTANT: u32 = 1003;
    pub const UNDEFINED_EXTENSION_GETTER: u32 = 1004;
    pub const UNDEFINED_EXTENSION_SETTER: u32 = 1005;
    pub const UNDEFINED_SUPER_GETTER: u32 = 1006;
    pub const UNDEFINED_SUPER_SETTER: u32 = 1007;
    pub const UNDEFINED_OPERATOR: u32 = 1008;
    pub const UNDEFINED_EXTENSION_OPERATOR: u32 = 1009;
    pub const UNDEFINED_SUPER_OPERATOR: u32 = 1010;
    pub const UNDEFINED_PREFIXED_NAME: u32 = 1011;
    pub const UNDEFINED_IDENTIFIER: u32 = 1012;

    // Access rules
    pub const PRIVATE_SETTER: u32 = 2001;
    pub const STATIC_ACCESS_TO_INSTANCE_MEMBER: u32 = 2002;
    pub const EXTENSION_OVERRIDE_WITH_CASCADE: u32 = 2003;
    pub const EXTENSION_OVERRIDE_ACCESS_TO_STATIC_MEMBER: u32 = 2004;
    pub const ABSTRACT_SUPER_MEMBER_REFERENCE: u32 = 2005;
    pub const AMBIGUOUS_EXTENSION_MEMBER_ACCESS: u32 = 2006;

    // Assignment targets
    pub const ASSIGNMENT_TO_METHOD: u32 = 3001;
    pub const ASSIGNMENT_TO_CONST: u32 = 3002;
    pub const ASSIGNMENT_TO_FINAL: u32 = 3003;
    pub const ASSIGNMENT_TO_FINAL_NO_SETTER: u32 = 3004;

    // Receiver shape
    pub const USE_OF_VOID_RESULT: u32 = 4001;
    pub const UNCHECKED_PROPERTY_ACCESS_OF_NULLABLE_VALUE: u32 = 4002;
    pub const UNCHECKED_OPERATOR_INVOCATION_OF_NULLABLE_VALUE: u32 = 4003;
}

pub mod diagnostic_messages {
    pub const UNDEFINED_GETTER: &str = "The getter '{0}' isn't defined for the type '{1}'.";
    pub const UNDEFINED_SETTER: &str = "The setter '{0}' isn't defined for the type '{1}'.";
    pub const UNDEFINED_ENUM_CONSTANT: &str = "There's no constant named '{0}' in '{1}'.";
    pub const UNDEFINED_EXTENSION_GETTER: &str =
        "The getter '{0}' isn't defined for the extension '{1}'.";
    pub const UNDEFINED_EXTENSION_SETTER: &str =
        "The setter '{0}' isn't defined for the extension '{1}'.";
    pub const UNDEFINED_SUPER_GETTER: &str =
        "The getter '{0}' isn't defined in a superclass of '{1}'.";
    pub const UNDEFINED_SUPER_SETTER: &str =
        "The setter '{0}' isn't defined in a superclass of '{1}'.";
    pub const UNDEFINED_OPERATOR: &str = "The operator '{0}' isn't defined for the type '{1}'.";
    pub const UNDEFINED_EXTENSION_OPERATOR: &str =
        "The operator '{0}' isn't defined for the extension '{1}'.";
    pub const UNDEFINED_SUPER_OPERATOR: &str =
        "The operator '{0}' isn't defined in a superclass of '{1}'.";
    pub const UNDEFINED_PREFIXED_NAME: &str = "The name '{0}' is being referenced through the prefix '{1}', but it isn't defined in any of the libraries imported using that prefix.";
    pub const UNDEFINED_IDENTIFIER: &str = "Undefined name '{0}'.";
    pub const PRIVATE_SETTER: &str =
        "The setter '{0}' is private and can't be accessed outside the library that declares it.";
    pub const STATIC_ACCESS_TO_INSTANCE_MEMBER: &str =
        "The instance member '{0}' can't be accessed using static access.";
    pub const EXTENSION_OVERRIDE_WITH_CASCADE: &str = "Extension overrides have no value so they can't be used as the receiver of a cascade expression.";
    pub const EXTENSION_OVERRIDE_ACCESS_TO_STATIC_MEMBER: &str =
        "An extension override can't be used to access a static member from an extension.";
    pub const ABSTRACT_SUPER_MEMBER_REFERENCE: &str =
        "The {0} '{1}' is always abstract in the supertype.";
    pub const AMBIGUOUS_EXTENSION_MEMBER_ACCESS: &str =
        "A member named '{0}' is defined in {1}, and none are more specific.";
    pub const ASSIGNMENT_TO_METHOD: &str = "Methods can't be assigned a value.";
    pub const ASSIGNMENT_TO_CONST: &str = "Constant variables can't be assigned a value.";
    pub const ASSIGNMENT_TO_FINAL: &str = "'{0}' can't be used as a setter because it's final.";
    pub const ASSIGNMENT_TO_FINAL_NO_SETTER: &str = "There isn't a setter named '{0}' in class '{1}'.";
    pub const USE_OF_VOID_RESULT: &str =
        "This expression has a type of 'void' so its value can't be used.";
    pub const UNCHECKED_PROPERTY_ACCESS_OF_NULLABLE_VALUE: &str = "The property '{0}' can't be unconditionally accessed because the receiver can be 'null'.";
    pub const UNCHECKED_OPERATOR_INVOCATION_OF_NULLABLE_VALUE: &str =
        "The operator '{0}' can't be unconditionally invoked because the receiver can be 'null'.";
}

macro_rules! messages {
    ($($name:ident),* $(,)?) => {
        pub static DIAGNOSTIC_MESSAGES: &[DiagnosticMessage] = &[
            $(DiagnosticMessage {
                code: diagnostic_codes::$name,
                category: DiagnosticCategory::Error,
                message: diagnostic_messages::$name,
            },)*
        ];
    };
}

messages! {
    UNDEFINED_GETTER,
    UNDEFINED_SETTER,
    UNDEFINED_ENUM_CONSTANT,
    UNDEFINED_EXTENSION_GETTER,
    UNDEFINED_EXTENSION_SETTER,
    UNDEFINED_SUPER_GETTER,
    UNDEFINED_SUPER_SETTER,
    UNDEFINED_OPERATOR,
    UNDEFINED_EXTENSION_OPERATOR,
    UNDEFINED_SUPER_OPERATOR,
    UNDEFINED_PREFIXED_NAME,
    UNDEFINED_IDENTIFIER,
    PRIVATE_SETTER,
    STATIC_ACCESS_TO_INSTANCE_MEMBER,
    EXTENSION_OVERRIDE_WITH_CASCADE,
    EXTENSION_OVERRIDE_ACCESS_TO_STATIC_MEMBER,
    ABSTRACT_SUPER_MEMBER_REFERENCE,
    AMBIGUOUS_EXTENSION_MEMBER_ACCESS,
    ASSIGNMENT_TO_METHOD,
    ASSIGNMENT_TO_CONST,
    ASSIGNMENT_TO_FINAL,
    ASSIGNMENT_TO_FINAL_NO_SETTER,
    USE_OF_VOID_RESULT,
    UNCHECKED_PROPERTY_ACCESS_OF_NULLABLE_VALUE,
    UNCHECKED_OPERATOR_INVOCATION_OF_NULLABLE_VALUE,
}
