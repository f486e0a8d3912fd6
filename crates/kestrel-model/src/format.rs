//! Type display for diagnostic arguments.

use crate::program::Program;
use crate::types::{TypeData, TypeId};

pub struct TypeFormatter<'a> {
    program: &'a Program,
}

impl<'a> TypeFormatter<'a> {
    pub const fn new(program: &'a Program) -> Self {
        Self { program }
    }

    pub fn format(&self, ty: TypeId) -> String {
        let data = self.program.type_data(ty);
        let base = match data {
            TypeData::Dynamic => return "dynamic".to_string(),
            TypeData::Never => return "Never".to_string(),
            TypeData::Void => return "void".to_string(),
            TypeData::Null => return "Null".to_string(),
            TypeData::Interface { decl, .. } => self
                .program
                .decl(decl)
                .map(|d| self.program.name_of(d.name).to_string())
                .unwrap_or_else(|| "<unknown>".to_string()),
            TypeData::Function { .. } => "Function()".to_string(),
            TypeData::TypeParameter { param, .. } => self
                .program
                .type_param(param)
                .map(|p| self.program.name_of(p.name).to_string())
                .unwrap_or_else(|| "<unknown>".to_string()),
        };
        if data.is_marked_nullable() {
            format!("{base}?")
        } else {
            base
        }
    }
}
