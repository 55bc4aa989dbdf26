use serde_repr::{Deserialize_repr, Serialize_repr};
use std::convert::TryFrom;
use strum_macros::EnumIter;

#[derive(Deserialize_repr, Serialize_repr, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter)]
#[repr(u8)]
pub enum PlayerStatus {
    #[default]
    Active = 0,
    Restricted = 1,
    Banned = 2
}

impl PlayerStatus {
    /// Only active players appear in the season standings. Records of other players are kept.
    pub fn is_rankable(self) -> bool {
        self == PlayerStatus::Active
    }
}

impl TryFrom<i32> for PlayerStatus {
    type Error = ();

    fn try_from(v: i32) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(PlayerStatus::Active),
            1 => Ok(PlayerStatus::Restricted),
            2 => Ok(PlayerStatus::Banned),
            _ => Err(())
        }
    }
}
