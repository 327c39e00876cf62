//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! The `*_list` functions return persisted-looking values (ids and timestamps
//! set); the `*_for_insertion` variants strip those so they can be upserted.

use chrono::{DateTime, TimeZone, Utc};

use crate::app::{PosService, UserService};
use crate::domain::entities::{CampusType, Pos, PosId, PosType, User, UserId};
use crate::domain::ports::{PosRepository, UserRepository};

/// Timestamp carried by every persisted-looking fixture
pub fn fixture_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 10, 29, 12, 0, 0).unwrap()
}

fn persisted_user(id: i64, login: &str, email: &str, first: &str, last: &str) -> User {
    User {
        id: Some(UserId(id)),
        created_at: Some(fixture_time()),
        updated_at: Some(fixture_time()),
        ..User::new(login, email, first, last)
    }
}

/// Three users with distinct login names and email addresses
pub fn user_list() -> Vec<User> {
    vec![
        persisted_user(1, "jane_doe", "jane.doe@uni-heidelberg.de", "Jane", "Doe"),
        persisted_user(
            2,
            "maxmustermann",
            "max.mustermann@campus.de",
            "Max",
            "Mustermann",
        ),
        persisted_user(3, "student2023", "student2023@study.org", "Student", "Example"),
    ]
}

pub fn users_for_insertion() -> Vec<User> {
    user_list().iter().map(User::without_identity).collect()
}

/// A single persisted-looking user
pub fn test_user() -> User {
    persisted_user(1, "jane_doe", "jane.doe@uni-heidelberg.de", "Jane", "Doe")
}

#[allow(clippy::too_many_arguments)]
fn persisted_pos(
    id: i64,
    name: &str,
    description: &str,
    pos_type: PosType,
    campus: CampusType,
    street: &str,
    house_number: &str,
    postal_code: i32,
    city: &str,
) -> Pos {
    Pos {
        id: Some(PosId(id)),
        created_at: Some(fixture_time()),
        updated_at: Some(fixture_time()),
        name: name.to_string(),
        description: description.to_string(),
        pos_type,
        campus,
        street: street.to_string(),
        house_number: house_number.to_string(),
        postal_code,
        city: city.to_string(),
    }
}

/// Four points of sale, one of each type
pub fn pos_list() -> Vec<Pos> {
    vec![
        persisted_pos(
            1,
            "Schmelzpunkt",
            "Great waffles",
            PosType::Cafe,
            CampusType::Altstadt,
            "Hauptstraße",
            "90",
            69117,
            "Heidelberg",
        ),
        persisted_pos(
            2,
            "Bäcker Görtz",
            "Walking distance to lecture hall",
            PosType::Bakery,
            CampusType::Inf,
            "Berliner Str.",
            "43",
            69120,
            "Heidelberg",
        ),
        persisted_pos(
            3,
            "Café Botanik",
            "Outdoor seating available",
            PosType::Cafeteria,
            CampusType::Inf,
            "Im Neuenheimer Feld",
            "304",
            69120,
            "Heidelberg",
        ),
        persisted_pos(
            4,
            "New Vending Machine",
            "Use only in case of emergencies",
            PosType::VendingMachine,
            CampusType::Bergheim,
            "Teststraße",
            "99a",
            12345,
            "Other City",
        ),
    ]
}

pub fn pos_for_insertion() -> Vec<Pos> {
    pos_list().iter().map(Pos::without_identity).collect()
}

/// A single persisted-looking point of sale
pub fn test_pos() -> Pos {
    pos_list().remove(0)
}

/// Upsert every insertion fixture through the service
pub async fn create_users<R>(service: &UserService<R>) -> Vec<User>
where
    R: UserRepository + ?Sized,
{
    let mut created = Vec::new();
    for user in users_for_insertion() {
        created.push(service.upsert(&user).await.unwrap());
    }
    created
}

pub async fn create_pos<R>(service: &PosService<R>) -> Vec<Pos>
where
    R: PosRepository + ?Sized,
{
    let mut created = Vec::new();
    for pos in pos_for_insertion() {
        created.push(service.upsert(&pos).await.unwrap());
    }
    created
}

/// Compare two values while ignoring the timestamps
pub fn assert_users_eq_ignoring_timestamps(actual: &[User], expected: &[User]) {
    let strip = |users: &[User]| -> Vec<User> {
        users
            .iter()
            .map(|u| User {
                created_at: None,
                updated_at: None,
                ..u.clone()
            })
            .collect()
    };
    assert_eq!(strip(actual), strip(expected));
}
