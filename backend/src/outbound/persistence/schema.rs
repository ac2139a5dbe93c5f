//! Diesel table definitions mirroring the embedded migrations.

diesel::table! {
    /// Users editable through the profile endpoint.
    users (id) {
        id -> Uuid,
        name -> Varchar,
        email -> Nullable<Varchar>,
        picture -> Nullable<Text>,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Travel package documents; nested entry lists live in JSONB columns.
    travel_packages (id) {
        id -> Uuid,
        title -> Varchar,
        location -> Nullable<Varchar>,
        duration -> Nullable<Varchar>,
        price -> Nullable<Float8>,
        rating -> Nullable<Float8>,
        review_count -> Nullable<Int4>,
        description -> Nullable<Text>,
        image -> Nullable<Text>,
        highlights -> Array<Text>,
        itinerary -> Jsonb,
        inclusions -> Array<Text>,
        exclusions -> Array<Text>,
        reviews -> Jsonb,
        faqs -> Jsonb,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}
