pub mod aggregates;
pub mod value_objects;

pub use aggregates::bump_rule::BumpRule;
pub use value_objects::DeclarationPattern;
