use clap::{ValueEnum, builder::PossibleValue};

use crate::config::OutputFormat;
use crate::profile::ProfileId;

impl ValueEnum for OutputFormat {
    fn value_variants<'a>() -> &'a [Self] {
        &[OutputFormat::Text, OutputFormat::Json]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        let value = match self {
            OutputFormat::Text => PossibleValue::new("text"),
            OutputFormat::Json => PossibleValue::new("json"),
        };
        Some(value)
    }
}

impl ValueEnum for ProfileId {
    fn value_variants<'a>() -> &'a [Self] {
        &[ProfileId::Build, ProfileId::Patch]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        let value = match self {
            ProfileId::Build => PossibleValue::new("build").help("BUILD_VERSION, refuses to pass 255"),
            ProfileId::Patch => PossibleValue::new("patch").help("REACH_C_PATCH_VERSION, no ceiling"),
        };
        Some(value)
    }
}
