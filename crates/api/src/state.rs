use mongodb::Database;
use std::sync::Arc;
use undangan_config::Settings;
use undangan_services::{
    AuthService,
    dao::{guest::GuestDao, invitation::InvitationDao, user::UserDao, wish::WishDao},
};

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub settings: Settings,
    pub auth: Arc<AuthService>,
    pub users: Arc<UserDao>,
    pub invitations: Arc<InvitationDao>,
    pub guests: Arc<GuestDao>,
    pub wishes: Arc<WishDao>,
}

impl AppState {
    pub fn new(db: Database, settings: Settings) -> Self {
        let auth = Arc::new(AuthService::new(settings.jwt.clone()));
        let users = Arc::new(UserDao::new(&db));
        let invitations = Arc::new(InvitationDao::new(&db));
        let guests = Arc::new(GuestDao::new(&db));
        let wishes = Arc::new(WishDao::new(&db));

        Self {
            db,
            settings,
            auth,
            users,
            invitations,
            guests,
            wishes,
        }
    }
}
