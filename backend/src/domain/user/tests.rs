//! Tests for the domain user model.

use super::*;
use rstest::rstest;
use serde_json::json;

const VALID_ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

#[rstest]
#[case("", UserValidationError::EmptyId)]
#[case("u1", UserValidationError::InvalidId)]
#[case(" 3fa85f64-5717-4562-b3fc-2c963f66afa6", UserValidationError::InvalidId)]
fn user_id_rejects_malformed_input(#[case] raw: &str, #[case] expected: UserValidationError) {
    assert_eq!(UserId::new(raw), Err(expected));
}

#[rstest]
fn user_id_keeps_canonical_form() {
    let id = UserId::new(VALID_ID).expect("valid id");
    assert_eq!(id.to_string(), VALID_ID);
    assert_eq!(String::from(id), VALID_ID);
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t\n")]
fn user_name_rejects_blank(#[case] raw: &str) {
    assert_eq!(UserName::new(raw), Err(UserValidationError::EmptyName));
}

#[rstest]
fn user_name_trims_surrounding_whitespace() {
    let name = UserName::new("  Alex ").expect("valid name");
    assert_eq!(name.as_ref(), "Alex");
}

#[rstest]
fn user_name_enforces_maximum_length() {
    let raw = "a".repeat(USER_NAME_MAX + 1);
    assert_eq!(
        UserName::new(raw),
        Err(UserValidationError::NameTooLong {
            max: USER_NAME_MAX
        })
    );
    assert!(UserName::new("a".repeat(USER_NAME_MAX)).is_ok());
}

#[rstest]
#[case("alex@example.com")]
#[case("first.last+tag@sub.example.co.uk")]
fn email_accepts_plausible_addresses(#[case] raw: &str) {
    let email = EmailAddress::new(raw).expect("valid email");
    assert_eq!(email.as_ref(), raw);
}

#[rstest]
#[case("alex", UserValidationError::InvalidEmail)]
#[case("alex@example", UserValidationError::InvalidEmail)]
#[case("al ex@example.com", UserValidationError::InvalidEmail)]
#[case("@example.com", UserValidationError::InvalidEmail)]
#[case("  ", UserValidationError::EmptyEmail)]
fn email_rejects_malformed_addresses(#[case] raw: &str, #[case] expected: UserValidationError) {
    assert_eq!(EmailAddress::new(raw), Err(expected));
}

#[rstest]
fn picture_ref_is_kept_verbatim() {
    let picture = PictureRef::new("https://cdn.example.com/a b.png").expect("valid picture");
    assert_eq!(picture.as_ref(), "https://cdn.example.com/a b.png");
}

#[rstest]
fn picture_ref_rejects_blank_and_oversized() {
    assert_eq!(PictureRef::new(" "), Err(UserValidationError::EmptyPicture));
    assert_eq!(
        PictureRef::new("x".repeat(PICTURE_REF_MAX + 1)),
        Err(UserValidationError::PictureTooLong {
            max: PICTURE_REF_MAX
        })
    );
}

#[rstest]
fn user_serialises_camel_case_with_nulls() {
    let user = User::try_from_parts(
        UserId::new(VALID_ID).expect("id"),
        "Ada Lovelace",
        Some("ada@example.com".to_owned()),
        None,
    )
    .expect("valid user");

    let value = serde_json::to_value(&user).expect("serialise user");
    assert_eq!(
        value,
        json!({
            "id": VALID_ID,
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "picture": null,
        })
    );
}

#[rstest]
fn user_deserialisation_validates_fields() {
    let result = serde_json::from_value::<User>(json!({
        "id": VALID_ID,
        "name": "",
        "email": null,
        "picture": null,
    }));
    assert!(result.is_err());
}

#[rstest]
fn stored_values_are_kept_as_written() {
    let user = User::from_stored(
        UserId::new(VALID_ID).expect("id"),
        "Ops".to_owned(),
        Some("ops@localhost".to_owned()),
        Some("/uploads/ops.png".to_owned()),
    );

    assert_eq!(user.email().map(AsRef::as_ref), Some("ops@localhost"));
    assert_eq!(user.picture().map(AsRef::as_ref), Some("/uploads/ops.png"));
    assert!(EmailAddress::new("ops@localhost").is_err());
}
