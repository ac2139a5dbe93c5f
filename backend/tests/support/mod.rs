//! Shared harness for HTTP integration tests.
//!
//! Builds the assembled actix app over in-memory repositories and a
//! temporary upload directory, seeded with two users and three packages.

use std::path::Path;
use std::sync::Arc;

use actix_files::Files;
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use tempfile::TempDir;

use travel_backend::Trace;
use travel_backend::domain::{
    ItineraryDay, PackageFaq, PackageReview, PackageTitle, ProfileService, TravelPackage,
    TravelPackageId, TravelPackagesService, UPLOADS_PATH_PREFIX, User, UserId,
};
use travel_backend::inbound::http::api_scope;
use travel_backend::inbound::http::health::{HealthState, live, ready};
use travel_backend::inbound::http::state::HttpState;
use travel_backend::outbound::memory::{InMemoryTravelPackageRepository, InMemoryUserRepository};
use travel_backend::outbound::uploads::CapStdPictureStore;

pub const ALEX_ID: &str = "11111111-1111-1111-1111-111111111111";
pub const TAKEN_ID: &str = "22222222-2222-2222-2222-222222222222";
pub const MISSING_ID: &str = "99999999-9999-9999-9999-999999999999";
pub const ALEX_PICTURE: &str = "https://cdn.example.com/alex.png";
pub const TAKEN_EMAIL: &str = "taken@example.com";
pub const UPLOAD_LIMIT: usize = 1024;

pub const BALI_ID: &str = "aaaaaaaa-0000-0000-0000-000000000001";
pub const ALPS_ID: &str = "aaaaaaaa-0000-0000-0000-000000000002";
pub const CAIRO_ID: &str = "aaaaaaaa-0000-0000-0000-000000000003";

pub const BOUNDARY: &str = "profile-boundary";

/// Running backend pieces plus handles for assertions.
pub struct TestBackend {
    pub users: Arc<InMemoryUserRepository>,
    pub packages: Arc<InMemoryTravelPackageRepository>,
    pub health: web::Data<HealthState>,
    pictures: Arc<CapStdPictureStore>,
    upload_dir: TempDir,
}

pub fn user_id(raw: &str) -> UserId {
    UserId::new(raw).expect("user id")
}

fn seed_users() -> Vec<User> {
    vec![
        User::try_from_parts(
            user_id(ALEX_ID),
            "Ada",
            Some("ada@example.com".to_owned()),
            Some(ALEX_PICTURE.to_owned()),
        )
        .expect("alex"),
        User::try_from_parts(user_id(TAKEN_ID), "Bo", Some(TAKEN_EMAIL.to_owned()), None)
            .expect("bo"),
    ]
}

fn package(id: &str, title: &str) -> TravelPackage {
    TravelPackage::new(
        TravelPackageId::new(id).expect("package id"),
        PackageTitle::new(title).expect("title"),
    )
}

fn seed_packages() -> Vec<TravelPackage> {
    let mut bali = package(BALI_ID, "Bali Escape");
    bali.location = Some("Bali, Indonesia".to_owned());
    bali.price = Some(1299.0);
    bali.review_count = Some(2);
    bali.highlights = vec!["Rice terraces".to_owned(), "Temple tour".to_owned()];
    bali.itinerary = vec![
        ItineraryDay {
            day: Some(1),
            title: Some("Arrival".to_owned()),
            description: None,
            activities: vec!["Check in".to_owned()],
        },
        ItineraryDay {
            day: Some(2),
            title: Some("Ubud".to_owned()),
            description: Some("Monkey forest and markets".to_owned()),
            activities: vec!["Forest walk".to_owned(), "Market".to_owned()],
        },
    ];
    bali.reviews = vec![PackageReview {
        name: Some("Kim".to_owned()),
        rating: Some(4.5),
        comment: Some("Lovely".to_owned()),
        date: Some("2025-03-02".to_owned()),
    }];
    bali.faqs = vec![PackageFaq {
        question: Some("Visa?".to_owned()),
        answer: Some("On arrival".to_owned()),
    }];

    vec![
        package(CAIRO_ID, "Cairo Nights"),
        bali,
        package(ALPS_ID, "Alpine Trails"),
    ]
}

impl TestBackend {
    pub fn new() -> Self {
        let upload_dir = tempfile::tempdir().expect("upload dir");
        let pictures = Arc::new(CapStdPictureStore::open(upload_dir.path()).expect("store"));
        let health = web::Data::new(HealthState::new());
        health.mark_ready();
        Self {
            users: Arc::new(InMemoryUserRepository::with_users(seed_users())),
            packages: Arc::new(InMemoryTravelPackageRepository::with_packages(
                seed_packages(),
            )),
            health,
            pictures,
            upload_dir,
        }
    }

    pub fn upload_path(&self) -> &Path {
        self.upload_dir.path()
    }

    /// Names of files written to the upload directory.
    pub fn uploaded_files(&self) -> Vec<String> {
        std::fs::read_dir(self.upload_dir.path())
            .expect("read upload dir")
            .map(|entry| {
                entry
                    .expect("dir entry")
                    .file_name()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect()
    }

    pub fn stored_user(&self, raw_id: &str) -> User {
        self.users.get(&user_id(raw_id)).expect("seeded user")
    }

    /// Build the app; it owns everything it serves, so it outlives `self`.
    pub fn app(
        &self,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse<impl MessageBody + use<>>,
            Error = actix_web::Error,
            InitError = (),
        > + use<>,
    > {
        let profile = Arc::new(ProfileService::new(
            self.users.clone(),
            self.pictures.clone(),
        ));
        let packages = Arc::new(TravelPackagesService::new(self.packages.clone()));
        let state =
            HttpState::new(profile.clone(), profile, packages).with_upload_max_bytes(UPLOAD_LIMIT);

        App::new()
            .app_data(web::Data::new(state))
            .app_data(self.health.clone())
            .wrap(Trace)
            .service(api_scope())
            .service(Files::new(UPLOADS_PATH_PREFIX, self.upload_dir.path().to_path_buf()))
            .service(ready)
            .service(live)
    }
}

/// One multipart part: field name, optional `(file name, content type)`,
/// and the raw content.
pub type Part<'a> = (&'a str, Option<(&'a str, &'a str)>, &'a str);

/// Encode `parts` as a `multipart/form-data` body using [`BOUNDARY`].
pub fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, file, content) in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        let disposition = match file {
            Some((file_name, mime)) => format!(
                "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\nContent-Type: {mime}\r\n\r\n"
            ),
            None => format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n"),
        };
        body.extend_from_slice(disposition.as_bytes());
        body.extend_from_slice(content.as_bytes());
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={BOUNDARY}")
}
