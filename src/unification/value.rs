use ena::unify::UnifyValue;
use value_type::value_type;

use super::Mismatch;
use crate::term::TermId;

/// State of a class of aliased variables
#[value_type(Copy)]
pub(super) enum Slot {
    /// Unbound. Holds the one variable of the class that has not been recorded
    /// as a binding yet, the class is reported under this name when it is
    /// eventually bound
    Free(TermId),
    /// Bound to a term which is never itself a variable
    Bound(TermId),
}

impl UnifyValue for Slot {
    type Error = Mismatch;

    // Merging two free classes keeps the right hand head, the left hand head
    // was just recorded as bound to it
    fn unify_values(left: &Self, right: &Self) -> Result<Self, Self::Error> {
        match (*left, *right) {
            (Slot::Free(_), Slot::Free(head)) => Ok(Slot::Free(head)),
            (Slot::Free(_), Slot::Bound(term))
            | (Slot::Bound(term), Slot::Free(_)) => Ok(Slot::Bound(term)),
            (Slot::Bound(left), Slot::Bound(right)) if left == right => {
                Ok(Slot::Bound(left))
            }
            (Slot::Bound(left), Slot::Bound(right)) => {
                Err(Mismatch::Clash { left, right })
            }
        }
    }
}
