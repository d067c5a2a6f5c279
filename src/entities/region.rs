use std::fmt;

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// The two supported destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum Region {
    #[sea_orm(string_value = "Phuket")]
    Phuket,
    #[sea_orm(string_value = "Krabi")]
    Krabi,
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Region::Phuket => write!(f, "Phuket"),
            Region::Krabi => write!(f, "Krabi"),
        }
    }
}
