//! Blood-type compatibility chart and queries.
//!
//! The per-recipient donor sets below are the standard transfusion
//! compatibility chart. This is clinical data: it must be reproduced
//! exactly, never derived or approximated.

use lifelink_types::BloodGroup;

use BloodGroup::{ABNeg, ABPos, ANeg, APos, BNeg, BPos, ONeg, OPos};

/// Donor groups a recipient of the given group may receive from.
///
/// The returned slice is in chart order. Because [`BloodGroup`] is a closed
/// enum, there is no unknown-recipient case; free-text input fails earlier,
/// at parse time.
pub const fn compatible_donors(recipient: BloodGroup) -> &'static [BloodGroup] {
    match recipient {
        ONeg => &[ONeg],
        OPos => &[ONeg, OPos],
        ANeg => &[ONeg, ANeg],
        APos => &[ONeg, OPos, ANeg, APos],
        BNeg => &[ONeg, BNeg],
        BPos => &[ONeg, OPos, BNeg, BPos],
        ABNeg => &[ONeg, ANeg, BNeg, ABNeg],
        ABPos => &[ONeg, OPos, ANeg, APos, BNeg, BPos, ABNeg, ABPos],
    }
}

/// Whether a donor of `donor` may give to a recipient of `recipient`.
pub fn is_compatible(donor: BloodGroup, recipient: BloodGroup) -> bool {
    compatible_donors(recipient).contains(&donor)
}

/// Recipient groups a donor of the given group may give to, in chart order.
pub fn compatible_recipients(donor: BloodGroup) -> Vec<BloodGroup> {
    BloodGroup::ALL
        .into_iter()
        .filter(|recipient| is_compatible(donor, *recipient))
        .collect()
}

/// Whether the group may donate to every recipient group.
pub fn is_universal_donor(group: BloodGroup) -> bool {
    group == ONeg
}

/// Whether the group may receive from every donor group.
pub fn is_universal_recipient(group: BloodGroup) -> bool {
    group == ABPos
}
