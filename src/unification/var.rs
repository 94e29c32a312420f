use ena::unify::UnifyKey;
use value_type::value_type;

use super::value::Slot;

/// Union-find key for one variable within a single unification call
#[value_type(Copy)]
pub(super) struct VarKey(u32);

impl UnifyKey for VarKey {
    type Value = Slot;

    fn index(&self) -> u32 {
        self.0
    }

    fn from_index(u: u32) -> Self {
        Self(u)
    }

    fn tag() -> &'static str {
        "VarKey"
    }
}
