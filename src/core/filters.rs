use crate::models::{FilterViolation, FlatmateGender, GenderPreference, RoomListing, UserPreference};

/// Gender compatibility between a user's preference and a room's household
///
/// A specific preference accepts a same-gender or mixed household; "Any"
/// accepts everything.
#[inline]
pub fn matches_gender(preference: GenderPreference, household: FlatmateGender) -> bool {
    match preference {
        GenderPreference::Male => {
            matches!(household, FlatmateGender::Male | FlatmateGender::Mixed)
        }
        GenderPreference::Female => {
            matches!(household, FlatmateGender::Female | FlatmateGender::Mixed)
        }
        GenderPreference::Any | GenderPreference::Unrecognized => true,
    }
}

/// The room's offered term must cover the user's requested term
#[inline]
pub fn matches_lease(user_months: u32, room_months: u32) -> bool {
    room_months >= user_months
}

/// All strict constraints `room` violates for `user`, empty when it passes
pub fn check_hard_filters(user: &UserPreference, room: &RoomListing) -> Vec<FilterViolation> {
    let mut violations = Vec::new();

    if !matches_gender(user.gender_preference, room.flatmate_gender) {
        violations.push(FilterViolation::Gender {
            wanted: user.gender_preference,
            offered: room.flatmate_gender,
        });
    }

    if !matches_lease(user.lease_duration_months, room.lease_duration_months) {
        violations.push(FilterViolation::Lease {
            offered: room.lease_duration_months,
            required: user.lease_duration_months,
        });
    }

    violations
}

#[inline]
pub fn passes_hard_filters(user: &UserPreference, room: &RoomListing) -> bool {
    matches_gender(user.gender_preference, room.flatmate_gender)
        && matches_lease(user.lease_duration_months, room.lease_duration_months)
}

/// Keep only the rooms that pass every strict constraint, in their original order
pub fn apply_hard_filters<'a>(
    user: &UserPreference,
    rooms: &'a [RoomListing],
) -> Vec<&'a RoomListing> {
    rooms
        .iter()
        .filter(|room| passes_hard_filters(user, room))
        .collect()
}
