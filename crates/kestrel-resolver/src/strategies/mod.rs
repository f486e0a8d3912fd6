//! One resolution strategy per target kind. Each module extends
//! `PropertyElementResolver` with the methods for its kind.

mod expression;
mod extension_override;
mod extension_reference;
mod import_prefix;
mod index;
mod super_reference;
mod type_reference;
