pub mod declaration_pattern;

pub use declaration_pattern::DeclarationPattern;
