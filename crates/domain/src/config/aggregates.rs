pub mod bump_rule;
