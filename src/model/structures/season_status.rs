use serde_repr::{Deserialize_repr, Serialize_repr};
use std::convert::TryFrom;

#[derive(Deserialize_repr, Serialize_repr, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum SeasonStatus {
    #[default]
    Open = 0,
    Closed = 1
}

impl TryFrom<i32> for SeasonStatus {
    type Error = ();

    fn try_from(v: i32) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(SeasonStatus::Open),
            1 => Ok(SeasonStatus::Closed),
            _ => Err(())
        }
    }
}
